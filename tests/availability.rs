//! Availability probe integration tests

mod helpers;

use bikeshop::models::compatibility::ComponentAvailability;
use bikeshop::models::OptionId;
use bikeshop::resolver::available_options;

fn find_option(
    components: &[ComponentAvailability],
    option_id: OptionId,
) -> Option<&bikeshop::models::compatibility::AvailableOption> {
    components
        .iter()
        .flat_map(|c| c.options.iter())
        .find(|o| o.id == option_id)
}

#[test]
fn out_of_stock_options_are_omitted_entirely() {
    let bike = helpers::road_bike();
    bike.store.set_option_stock(bike.carbon_wheels, false).unwrap();

    let components = available_options(&bike.store, bike.product_id, &[]).unwrap();
    assert!(find_option(&components, bike.carbon_wheels).is_none());
    assert!(find_option(&components, bike.aluminum_wheels).is_some());
}

#[test]
fn selected_options_always_report_compatible() {
    let bike = helpers::road_bike();

    // Even a conflicted selection member reports compatible here; the
    // picker view answers "can this stay picked", not "is the build ok".
    let components = available_options(&bike.store, bike.product_id, &[bike.ultegra]).unwrap();
    let ultegra = find_option(&components, bike.ultegra).unwrap();
    assert!(ultegra.is_compatible);
}

#[test]
fn probe_reflects_what_picking_each_option_would_do() {
    let bike = helpers::road_bike();
    let components =
        available_options(&bike.store, bike.product_id, &[bike.aero_frame]).unwrap();

    // Picking the mandated fork completes the requirement.
    assert!(find_option(&components, bike.aero_fork).unwrap().is_compatible);

    // Picking a frame for the already-filled slot would conflict on its
    // own unmet requirement.
    assert!(!find_option(&components, bike.endurance_frame)
        .unwrap()
        .is_compatible);

    // Caliper brakes exclude the selected frame.
    assert!(!find_option(&components, bike.caliper_brakes)
        .unwrap()
        .is_compatible);
    assert!(find_option(&components, bike.disc_brakes).unwrap().is_compatible);

    // Ultegra would bring its own unmet disc-brake requirement.
    assert!(!find_option(&components, bike.ultegra).unwrap().is_compatible);
}

#[test]
fn probing_never_mutates_the_store() {
    let bike = helpers::road_bike();

    let first = available_options(&bike.store, bike.product_id, &[bike.aero_frame]).unwrap();
    let second = available_options(&bike.store, bike.product_id, &[bike.aero_frame]).unwrap();
    assert_eq!(
        serde_json::to_value(&first).unwrap(),
        serde_json::to_value(&second).unwrap()
    );

    // A fresh empty-selection resolve still sees a clean catalog.
    let view = bikeshop::resolver::resolve(&bike.store, bike.product_id, &[]).unwrap();
    assert!(!view.has_incompatibilities);
}
