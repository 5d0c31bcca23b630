//! Cart workflow integration tests

mod helpers;

use rust_decimal_macros::dec;

use bikeshop::error::CartError;
use bikeshop::services::CartService;
use bikeshop::store::CartStore;

#[test]
fn conflicted_selection_is_rejected_with_the_offending_reason() {
    let bike = helpers::road_bike();
    let service = CartService::new(&bike.store);
    let cart = service.get_or_create_cart(Some("ana".to_string()));

    let err = service
        .add_to_cart(cart.id, bike.product_id, &[bike.aero_frame], 1)
        .unwrap_err();
    match err {
        CartError::IncompatibleSelection {
            option_name,
            message,
            ..
        } => {
            assert_eq!(option_name, "Carbon Aero Frame");
            assert_eq!(message, "Option 'Carbon Aero Frame' requires 'Carbon Aero Fork'");
        }
        other => panic!("unexpected error: {other:?}"),
    }

    // Nothing was persisted.
    assert!(bike.store.get_cart_items(cart.id).unwrap().is_empty());
}

#[test]
fn exclusion_conflicts_carry_the_incompatibility_wording() {
    let bike = helpers::road_bike();
    let service = CartService::new(&bike.store);
    let cart = service.get_or_create_cart(None);

    let err = service
        .add_to_cart(
            cart.id,
            bike.product_id,
            &[bike.aero_frame, bike.aero_fork, bike.caliper_brakes],
            1,
        )
        .unwrap_err();
    match err {
        CartError::IncompatibleSelection { message, .. } => {
            assert_eq!(
                message,
                "Option 'Carbon Aero Frame' is not compatible with 'Caliper Brakes'"
            );
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn out_of_stock_selected_option_is_rejected() {
    let bike = helpers::road_bike();
    bike.store.set_option_stock(bike.aero_fork, false).unwrap();
    let service = CartService::new(&bike.store);
    let cart = service.get_or_create_cart(None);

    let err = service
        .add_to_cart(
            cart.id,
            bike.product_id,
            &[bike.aero_frame, bike.aero_fork],
            1,
        )
        .unwrap_err();
    assert!(matches!(
        err,
        CartError::OptionUnavailable { name, .. } if name == "Carbon Aero Fork"
    ));
}

#[test]
fn price_snapshot_includes_base_price_and_options() {
    let bike = helpers::road_bike();
    let service = CartService::new(&bike.store);
    let cart = service.get_or_create_cart(None);

    let item = service
        .add_to_cart(
            cart.id,
            bike.product_id,
            &[bike.aero_frame, bike.aero_fork],
            2,
        )
        .unwrap();
    assert_eq!(item.price_snapshot, dec!(2797)); // 699 + 1599 + 499
    assert_eq!(item.quantity, 2);

    let detail = service.cart_detail(cart.id).unwrap();
    assert_eq!(detail.total, dec!(5594));
    assert_eq!(detail.items.len(), 1);
    assert_eq!(detail.items[0].options.len(), 2);
}

#[test]
fn price_snapshot_applies_conditional_overrides() {
    let bike = helpers::mountain_bike();
    let service = CartService::new(&bike.store);
    let cart = service.get_or_create_cart(None);

    let item = service
        .add_to_cart(
            cart.id,
            bike.product_id,
            &[bike.suspension_frame, bike.matte],
            1,
        )
        .unwrap();
    assert_eq!(item.price_snapshot, dec!(899)); // 599 + 250 + 50
}

#[test]
fn snapshot_survives_later_catalog_edits() {
    let bike = helpers::mountain_bike();
    let service = CartService::new(&bike.store);
    let cart = service.get_or_create_cart(None);

    service
        .add_to_cart(cart.id, bike.product_id, &[bike.glossy], 1)
        .unwrap();
    let before = service.cart_detail(cart.id).unwrap().total;
    assert_eq!(before, dec!(629)); // 599 + 30

    // Even deleting the whole product leaves the snapshot intact.
    bike.store.delete_product(bike.product_id).unwrap();
    let after = service.cart_detail(cart.id).unwrap();
    assert_eq!(after.total, before);
    assert_eq!(after.items[0].product_name, format!("product {}", bike.product_id));
}

#[test]
fn quantity_update_and_removal_round_trip() {
    let bike = helpers::road_bike();
    let service = CartService::new(&bike.store);
    let cart = service.get_or_create_cart(None);

    let item = service
        .add_to_cart(cart.id, bike.product_id, &[bike.aluminum_frame], 1)
        .unwrap();

    let updated = service.update_item_quantity(item.id, 3).unwrap();
    assert_eq!(updated.quantity, 3);

    assert!(matches!(
        service.update_item_quantity(item.id, 0),
        Err(CartError::InvalidQuantity)
    ));

    service.remove_item(item.id).unwrap();
    assert!(service.cart_detail(cart.id).unwrap().items.is_empty());
}

#[test]
fn zero_quantity_add_is_rejected_before_any_validation() {
    let bike = helpers::road_bike();
    let service = CartService::new(&bike.store);
    let cart = service.get_or_create_cart(None);

    assert!(matches!(
        service.add_to_cart(cart.id, bike.product_id, &[bike.aero_frame], 0),
        Err(CartError::InvalidQuantity)
    ));
}

#[test]
fn carts_are_reused_per_user_and_created_for_anonymous_callers() {
    let bike = helpers::road_bike();
    let service = CartService::new(&bike.store);

    let first = service.get_or_create_cart(Some("ana".to_string()));
    let again = service.get_or_create_cart(Some("ana".to_string()));
    assert_eq!(first.id, again.id);

    let anon_a = service.get_or_create_cart(None);
    let anon_b = service.get_or_create_cart(None);
    assert_ne!(anon_a.id, anon_b.id);
    // Anonymous carts still get a session id so they stay addressable.
    assert!(anon_a.user_id.is_some());
}
