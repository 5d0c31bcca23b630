//! Shared fixtures for the integration tests
//!
//! `road_bike()` builds the rule set the compatibility suite exercises;
//! `mountain_bike()` carries the exclusion and conditional-price edges
//! used by the pricing tests.

#![allow(dead_code)]

use rust_decimal::Decimal;

use bikeshop::models::catalog::{
    ConditionalPriceDraft, DependencyKind, OptionDependencyDraft, PartOptionDraft, PartTypeDraft,
    ProductDraft,
};
use bikeshop::models::{OptionId, ProductId};
use bikeshop::store::MemoryStore;

pub fn draft_product(name: &str, base_price: i64) -> ProductDraft {
    ProductDraft {
        name: name.to_string(),
        category: "road".to_string(),
        is_active: true,
        featured: false,
        base_price: Decimal::from(base_price),
        image_url: None,
    }
}

pub fn draft_option(name: &str, base_price: i64) -> PartOptionDraft {
    PartOptionDraft {
        name: name.to_string(),
        base_price: Decimal::from(base_price),
        in_stock: true,
    }
}

pub fn requires(depends_on: OptionId) -> OptionDependencyDraft {
    OptionDependencyDraft {
        depends_on_option_id: depends_on,
        kind: DependencyKind::Requires,
    }
}

pub fn excludes(depends_on: OptionId) -> OptionDependencyDraft {
    OptionDependencyDraft {
        depends_on_option_id: depends_on,
        kind: DependencyKind::Excludes,
    }
}

pub fn conditional(condition: OptionId, price: i64) -> ConditionalPriceDraft {
    ConditionalPriceDraft {
        condition_option_id: condition,
        price: Decimal::from(price),
    }
}

/// Five-slot road bike with the full requires/excludes rule set:
/// aero frame requires aero fork, endurance frame requires endurance
/// fork, carbon wheels require aero frame, Ultegra requires disc
/// brakes, caliper brakes exclude aero frame.
pub struct RoadBike {
    pub store: MemoryStore,
    pub product_id: ProductId,
    pub aero_frame: OptionId,
    pub endurance_frame: OptionId,
    pub aluminum_frame: OptionId,
    pub aero_fork: OptionId,
    pub endurance_fork: OptionId,
    pub aluminum_fork: OptionId,
    pub carbon_wheels: OptionId,
    pub aluminum_wheels: OptionId,
    pub ultegra: OptionId,
    pub shimano_105: OptionId,
    pub disc_brakes: OptionId,
    pub caliper_brakes: OptionId,
}

pub fn road_bike() -> RoadBike {
    let store = MemoryStore::new();
    let product = store.insert_product(draft_product("Road Bike Pro", 699));

    let frame = store
        .insert_part_type(product.id, PartTypeDraft { name: "Frame".into() })
        .unwrap();
    let fork = store
        .insert_part_type(product.id, PartTypeDraft { name: "Fork".into() })
        .unwrap();
    let wheels = store
        .insert_part_type(product.id, PartTypeDraft { name: "Wheels".into() })
        .unwrap();
    let groupset = store
        .insert_part_type(product.id, PartTypeDraft { name: "Groupset".into() })
        .unwrap();
    let brakes = store
        .insert_part_type(product.id, PartTypeDraft { name: "Brakes".into() })
        .unwrap();

    let aero_frame = store
        .insert_part_option(frame.id, draft_option("Carbon Aero Frame", 1599))
        .unwrap()
        .id;
    let endurance_frame = store
        .insert_part_option(frame.id, draft_option("Carbon Endurance Frame", 1399))
        .unwrap()
        .id;
    let aluminum_frame = store
        .insert_part_option(frame.id, draft_option("Aluminum Frame", 899))
        .unwrap()
        .id;
    let aero_fork = store
        .insert_part_option(fork.id, draft_option("Carbon Aero Fork", 499))
        .unwrap()
        .id;
    let endurance_fork = store
        .insert_part_option(fork.id, draft_option("Carbon Endurance Fork", 399))
        .unwrap()
        .id;
    let aluminum_fork = store
        .insert_part_option(fork.id, draft_option("Aluminum Fork", 299))
        .unwrap()
        .id;
    let carbon_wheels = store
        .insert_part_option(wheels.id, draft_option("Carbon Wheels 50mm", 1099))
        .unwrap()
        .id;
    let aluminum_wheels = store
        .insert_part_option(wheels.id, draft_option("Aluminum Wheels 30mm", 399))
        .unwrap()
        .id;
    let ultegra = store
        .insert_part_option(groupset.id, draft_option("Shimano Ultegra", 999))
        .unwrap()
        .id;
    let shimano_105 = store
        .insert_part_option(groupset.id, draft_option("Shimano 105", 599))
        .unwrap()
        .id;
    let disc_brakes = store
        .insert_part_option(brakes.id, draft_option("Disc Brakes", 299))
        .unwrap()
        .id;
    let caliper_brakes = store
        .insert_part_option(brakes.id, draft_option("Caliper Brakes", 199))
        .unwrap()
        .id;

    store.insert_dependency(aero_frame, requires(aero_fork)).unwrap();
    store
        .insert_dependency(endurance_frame, requires(endurance_fork))
        .unwrap();
    store.insert_dependency(carbon_wheels, requires(aero_frame)).unwrap();
    store.insert_dependency(ultegra, requires(disc_brakes)).unwrap();
    store
        .insert_dependency(caliper_brakes, excludes(aero_frame))
        .unwrap();

    RoadBike {
        store,
        product_id: product.id,
        aero_frame,
        endurance_frame,
        aluminum_frame,
        aero_fork,
        endurance_fork,
        aluminum_fork,
        carbon_wheels,
        aluminum_wheels,
        ultegra,
        shimano_105,
        disc_brakes,
        caliper_brakes,
    }
}

/// Four-slot mountain bike: fat wheels exclude the red rim, and the
/// matte finish carries two conditional prices keyed on the frame.
pub struct MountainBike {
    pub store: MemoryStore,
    pub product_id: ProductId,
    pub diamond_frame: OptionId,
    pub suspension_frame: OptionId,
    pub matte: OptionId,
    pub glossy: OptionId,
    pub mountain_wheels: OptionId,
    pub fat_wheels: OptionId,
    pub black_rim: OptionId,
    pub red_rim: OptionId,
}

pub fn mountain_bike() -> MountainBike {
    let store = MemoryStore::new();
    let product = store.insert_product(draft_product("Mountain Bike Premium", 599));

    let frame = store
        .insert_part_type(product.id, PartTypeDraft { name: "Frame".into() })
        .unwrap();
    let finish = store
        .insert_part_type(product.id, PartTypeDraft { name: "Finish".into() })
        .unwrap();
    let wheels = store
        .insert_part_type(product.id, PartTypeDraft { name: "Wheels".into() })
        .unwrap();
    let rim_color = store
        .insert_part_type(product.id, PartTypeDraft { name: "Rim Color".into() })
        .unwrap();

    let diamond_frame = store
        .insert_part_option(frame.id, draft_option("Diamond Frame", 150))
        .unwrap()
        .id;
    let suspension_frame = store
        .insert_part_option(frame.id, draft_option("Full-Suspension Frame", 250))
        .unwrap()
        .id;
    let matte = store
        .insert_part_option(finish.id, draft_option("Matte", 35))
        .unwrap()
        .id;
    let glossy = store
        .insert_part_option(finish.id, draft_option("Glossy", 30))
        .unwrap()
        .id;
    let mountain_wheels = store
        .insert_part_option(wheels.id, draft_option("Mountain Wheels", 100))
        .unwrap()
        .id;
    let fat_wheels = store
        .insert_part_option(wheels.id, draft_option("Fat Bike Wheels", 120))
        .unwrap()
        .id;
    let black_rim = store
        .insert_part_option(rim_color.id, draft_option("Black Rim", 25))
        .unwrap()
        .id;
    let red_rim = store
        .insert_part_option(rim_color.id, draft_option("Red Rim", 35))
        .unwrap()
        .id;

    store.insert_dependency(fat_wheels, excludes(red_rim)).unwrap();
    store
        .insert_conditional_price(matte, conditional(diamond_frame, 35))
        .unwrap();
    store
        .insert_conditional_price(matte, conditional(suspension_frame, 50))
        .unwrap();

    MountainBike {
        store,
        product_id: product.id,
        diamond_frame,
        suspension_frame,
        matte,
        glossy,
        mountain_wheels,
        fat_wheels,
        black_rim,
        red_rim,
    }
}
