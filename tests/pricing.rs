//! Price calculation integration tests

mod helpers;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use bikeshop::models::catalog::PartTypeDraft;
use bikeshop::resolver::{applied_overrides, calculate_price};
use bikeshop::store::MemoryStore;

#[test]
fn empty_selection_prices_to_zero() {
    let bike = helpers::mountain_bike();
    assert_eq!(calculate_price(&bike.store, &[]), Decimal::ZERO);
}

#[test]
fn selection_order_does_not_change_the_total() {
    let bike = helpers::mountain_bike();
    let forward = calculate_price(
        &bike.store,
        &[bike.diamond_frame, bike.glossy, bike.mountain_wheels],
    );
    let backward = calculate_price(
        &bike.store,
        &[bike.mountain_wheels, bike.glossy, bike.diamond_frame],
    );
    assert_eq!(forward, backward);
    assert_eq!(forward, dec!(280));
}

#[test]
fn conditional_price_replaces_the_base_price() {
    let bike = helpers::mountain_bike();

    // Matte alone costs its base price.
    assert_eq!(calculate_price(&bike.store, &[bike.matte]), dec!(35));

    // With the suspension frame co-selected the override kicks in.
    let total = calculate_price(&bike.store, &[bike.suspension_frame, bike.matte]);
    assert_eq!(total, dec!(300)); // 250 + 50
}

#[test]
fn lowest_edge_id_wins_when_several_conditions_match() {
    let bike = helpers::mountain_bike();

    // Both conditional edges for matte match; the diamond edge was
    // inserted first so it carries the lower id and wins.
    let total = calculate_price(
        &bike.store,
        &[bike.diamond_frame, bike.suspension_frame, bike.matte],
    );
    assert_eq!(total, dec!(435)); // 150 + 250 + 35
}

#[test]
fn unknown_ids_and_duplicates_are_ignored() {
    let bike = helpers::mountain_bike();
    let total = calculate_price(
        &bike.store,
        &[bike.matte, bike.matte, 9999, bike.suspension_frame],
    );
    assert_eq!(total, dec!(300));
}

#[test]
fn zero_and_negative_overrides_still_replace_the_base() {
    let store = MemoryStore::new();
    let product = store.insert_product(helpers::draft_product("Custom", 0));
    let slot_a = store
        .insert_part_type(product.id, PartTypeDraft { name: "A".into() })
        .unwrap();
    let slot_b = store
        .insert_part_type(product.id, PartTypeDraft { name: "B".into() })
        .unwrap();
    let priced = store
        .insert_part_option(slot_a.id, helpers::draft_option("Priced", 100))
        .unwrap();
    let zero_cond = store
        .insert_part_option(slot_b.id, helpers::draft_option("Zeroes it", 10))
        .unwrap();
    store
        .insert_conditional_price(priced.id, helpers::conditional(zero_cond.id, 0))
        .unwrap();

    // Base 100 is replaced by 0, not added to.
    assert_eq!(
        calculate_price(&store, &[priced.id, zero_cond.id]),
        dec!(10)
    );

    let discount_cond = store
        .insert_part_option(slot_b.id, helpers::draft_option("Discounts it", 10))
        .unwrap();
    store
        .insert_conditional_price(priced.id, helpers::conditional(discount_cond.id, -25))
        .unwrap();
    assert_eq!(
        calculate_price(&store, &[priced.id, discount_cond.id]),
        dec!(-15)
    );
}

#[test]
fn negative_base_prices_sum_exactly() {
    let store = MemoryStore::new();
    let product = store.insert_product(helpers::draft_product("Custom", 0));
    let slot = store
        .insert_part_type(product.id, PartTypeDraft { name: "A".into() })
        .unwrap();
    let rebate = store
        .insert_part_option(slot.id, helpers::draft_option("Rebate", -50))
        .unwrap();

    assert_eq!(calculate_price(&store, &[rebate.id]), dec!(-50));
}

#[test]
fn road_bike_pair_with_and_without_override() {
    let bike = helpers::road_bike();
    let selection = [bike.aero_frame, bike.aero_fork];

    assert_eq!(calculate_price(&bike.store, &selection), dec!(2098));

    // A conditional edge on the fork, keyed on the frame, reprices it.
    bike.store
        .insert_conditional_price(bike.aero_fork, helpers::conditional(bike.aero_frame, 399))
        .unwrap();
    assert_eq!(calculate_price(&bike.store, &selection), dec!(1998));
}

#[test]
fn applied_overrides_report_the_matched_edge() {
    let bike = helpers::mountain_bike();
    let overrides = applied_overrides(&bike.store, &[bike.suspension_frame, bike.matte]);

    assert_eq!(overrides.len(), 1);
    assert_eq!(overrides[0].option_id, bike.matte);
    assert_eq!(overrides[0].option_name, "Matte");
    assert_eq!(overrides[0].base_price, dec!(35));
    assert_eq!(overrides[0].conditional_price, dec!(50));
    assert_eq!(overrides[0].condition_option_id, bike.suspension_frame);
}
