//! Conditional price calculation
//!
//! Sums the additional price of a selection on top of the product base
//! price, substituting a conditional override whenever its condition
//! option is co-selected. All arithmetic stays in `Decimal`.

use std::collections::BTreeSet;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::OptionId;
use crate::store::CatalogStore;

/// A conditional override that applied to a selection, for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppliedConditionalPrice {
    pub option_id: OptionId,
    pub option_name: String,
    pub base_price: Decimal,
    pub conditional_price: Decimal,
    pub condition_option_id: OptionId,
    pub condition_option_name: String,
}

/// Total additional price of the selected options.
///
/// Unknown ids are ignored and duplicates collapse; the empty selection
/// prices to zero. When several conditional edges could apply to one
/// option, the lowest edge id wins - the store returns edges id-ordered
/// so the first match is the deterministic one.
pub fn calculate_price(store: &dyn CatalogStore, selected_option_ids: &[OptionId]) -> Decimal {
    let ids: BTreeSet<OptionId> = selected_option_ids.iter().copied().collect();
    if ids.is_empty() {
        return Decimal::ZERO;
    }

    let options = store.get_options_by_ids(&ids);
    let conditional = store.get_conditional_prices_for(&ids);

    let mut total = Decimal::ZERO;
    for option in &options {
        let override_price = conditional
            .iter()
            .find(|cp| cp.option_id == option.id && ids.contains(&cp.condition_option_id))
            .map(|cp| cp.price);
        total += override_price.unwrap_or(option.base_price);
    }
    total
}

/// The overrides that `calculate_price` applied, one per option at
/// most, matched by the same lowest-edge-id rule.
pub fn applied_overrides(
    store: &dyn CatalogStore,
    selected_option_ids: &[OptionId],
) -> Vec<AppliedConditionalPrice> {
    let ids: BTreeSet<OptionId> = selected_option_ids.iter().copied().collect();
    if ids.is_empty() {
        return Vec::new();
    }

    let options = store.get_options_by_ids(&ids);
    let conditional = store.get_conditional_prices_for(&ids);
    let name_of = |id: OptionId| {
        options
            .iter()
            .find(|o| o.id == id)
            .map(|o| o.name.clone())
            .unwrap_or_else(|| format!("option {id}"))
    };

    options
        .iter()
        .filter_map(|option| {
            let edge = conditional
                .iter()
                .find(|cp| cp.option_id == option.id && ids.contains(&cp.condition_option_id))?;
            Some(AppliedConditionalPrice {
                option_id: option.id,
                option_name: option.name.clone(),
                base_price: option.base_price,
                conditional_price: edge.price,
                condition_option_id: edge.condition_option_id,
                condition_option_name: name_of(edge.condition_option_id),
            })
        })
        .collect()
}
