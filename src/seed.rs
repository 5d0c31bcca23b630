//! Demo catalog fixtures
//!
//! Loads the sample shop: a mountain bike with the classic
//! fat-wheels/red-rim exclusion and matte-finish conditional prices,
//! and a road bike carrying the full requires/excludes rule set used by
//! the compatibility tests. Idempotent - a non-empty store is left
//! untouched.

use rust_decimal::Decimal;

use crate::error::StoreResult;
use crate::models::catalog::{
    ConditionalPriceDraft, DependencyKind, OptionDependencyDraft, PartOptionDraft, PartTypeDraft,
    ProductDraft,
};
use crate::store::MemoryStore;

fn product(name: &str, category: &str, featured: bool, base_price: i64, image: &str) -> ProductDraft {
    ProductDraft {
        name: name.to_string(),
        category: category.to_string(),
        is_active: true,
        featured,
        base_price: Decimal::from(base_price),
        image_url: Some(image.to_string()),
    }
}

fn option(name: &str, base_price: i64) -> PartOptionDraft {
    PartOptionDraft {
        name: name.to_string(),
        base_price: Decimal::from(base_price),
        in_stock: true,
    }
}

fn requires(depends_on: i64) -> OptionDependencyDraft {
    OptionDependencyDraft {
        depends_on_option_id: depends_on,
        kind: DependencyKind::Requires,
    }
}

fn excludes(depends_on: i64) -> OptionDependencyDraft {
    OptionDependencyDraft {
        depends_on_option_id: depends_on,
        kind: DependencyKind::Excludes,
    }
}

/// Seeds the demo catalog. Returns without touching a non-empty store.
pub fn load_demo_catalog(store: &MemoryStore) -> StoreResult<()> {
    if !store.is_empty() {
        return Ok(());
    }

    let mountain = store.insert_product(product(
        "Mountain Bike Premium",
        "mountain",
        true,
        599,
        "https://images.unsplash.com/photo-1576435728678-68d0fbf94e91?q=80&w=1200",
    ));
    let road = store.insert_product(product(
        "Road Bike Pro",
        "road",
        true,
        699,
        "https://images.unsplash.com/photo-1485965120184-e220f721d03e?q=80&w=1200",
    ));
    store.insert_product(product(
        "Urban Bike Deluxe",
        "urban",
        true,
        499,
        "https://images.unsplash.com/photo-1507035895480-2b3156c31fc8?q=80&w=1200",
    ));
    store.insert_product(product(
        "All-Terrain Hybrid",
        "hybrid",
        false,
        549,
        "https://images.unsplash.com/photo-1532298229144-0ec0c57515c7?q=80&w=1200",
    ));
    store.insert_product(product(
        "E-Bike Urban Commuter",
        "electric",
        true,
        1299,
        "https://images.unsplash.com/photo-1571068316344-75bc76f77890?q=80&w=1200",
    ));
    store.insert_product(product(
        "BMX Freestyle Pro",
        "bmx",
        false,
        449,
        "https://images.unsplash.com/photo-1583729501158-e040bf6a4d1a?q=80&w=1200",
    ));
    store.insert_product(product(
        "Gravel Adventure Explorer",
        "gravel",
        true,
        749,
        "https://images.unsplash.com/photo-1593764592116-bfb2a97c642a?q=80&w=1200",
    ));

    // Mountain bike: four slots, one exclusion, two conditional prices.
    let frame = store
        .insert_part_type(mountain.id, PartTypeDraft { name: "Frame".into() })?;
    let finish = store
        .insert_part_type(mountain.id, PartTypeDraft { name: "Finish".into() })?;
    let wheels = store
        .insert_part_type(mountain.id, PartTypeDraft { name: "Wheels".into() })?;
    let rim_color = store
        .insert_part_type(mountain.id, PartTypeDraft { name: "Rim Color".into() })?;

    let diamond = store
        .insert_part_option(frame.id, option("Diamond Frame", 150))?;
    let suspension = store
        .insert_part_option(frame.id, option("Full-Suspension Frame", 250))?;
    let matte = store
        .insert_part_option(finish.id, option("Matte", 35))?;
    store
        .insert_part_option(finish.id, option("Glossy", 30))?;
    store
        .insert_part_option(wheels.id, option("Mountain Wheels", 100))?;
    let fat = store
        .insert_part_option(wheels.id, option("Fat Bike Wheels", 120))?;
    store
        .insert_part_option(rim_color.id, option("Black Rim", 25))?;
    let red_rim = store
        .insert_part_option(rim_color.id, option("Red Rim", 35))?;

    store
        .insert_dependency(fat.id, excludes(red_rim.id))?;
    store
        .insert_conditional_price(
            matte.id,
            ConditionalPriceDraft {
                condition_option_id: diamond.id,
                price: Decimal::from(35),
            },
        )?;
    store
        .insert_conditional_price(
            matte.id,
            ConditionalPriceDraft {
                condition_option_id: suspension.id,
                price: Decimal::from(50),
            },
        )?;

    // Road bike: the full compatibility rule set.
    let r_frame = store
        .insert_part_type(road.id, PartTypeDraft { name: "Frame".into() })?;
    let r_fork = store
        .insert_part_type(road.id, PartTypeDraft { name: "Fork".into() })?;
    let r_wheels = store
        .insert_part_type(road.id, PartTypeDraft { name: "Wheels".into() })?;
    let r_groupset = store
        .insert_part_type(road.id, PartTypeDraft { name: "Groupset".into() })?;
    let r_brakes = store
        .insert_part_type(road.id, PartTypeDraft { name: "Brakes".into() })?;

    let aero_frame = store
        .insert_part_option(r_frame.id, option("Carbon Aero Frame", 1599))?;
    let endurance_frame = store
        .insert_part_option(r_frame.id, option("Carbon Endurance Frame", 1399))?;
    store
        .insert_part_option(r_frame.id, option("Aluminum Frame", 899))?;
    let aero_fork = store
        .insert_part_option(r_fork.id, option("Carbon Aero Fork", 499))?;
    let endurance_fork = store
        .insert_part_option(r_fork.id, option("Carbon Endurance Fork", 399))?;
    store
        .insert_part_option(r_fork.id, option("Aluminum Fork", 299))?;
    let carbon_wheels = store
        .insert_part_option(r_wheels.id, option("Carbon Wheels 50mm", 1099))?;
    store
        .insert_part_option(r_wheels.id, option("Aluminum Wheels 30mm", 399))?;
    let ultegra = store
        .insert_part_option(r_groupset.id, option("Shimano Ultegra", 999))?;
    store
        .insert_part_option(r_groupset.id, option("Shimano 105", 599))?;
    let disc_brakes = store
        .insert_part_option(r_brakes.id, option("Disc Brakes", 299))?;
    let caliper_brakes = store
        .insert_part_option(r_brakes.id, option("Caliper Brakes", 199))?;

    store
        .insert_dependency(aero_frame.id, requires(aero_fork.id))?;
    store
        .insert_dependency(endurance_frame.id, requires(endurance_fork.id))?;
    store
        .insert_dependency(carbon_wheels.id, requires(aero_frame.id))?;
    store
        .insert_dependency(ultegra.id, requires(disc_brakes.id))?;
    store
        .insert_dependency(caliper_brakes.id, excludes(aero_frame.id))?;

    tracing::info!("demo catalog loaded");
    Ok(())
}
