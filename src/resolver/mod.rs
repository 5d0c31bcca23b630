//! Option-compatibility resolver
//!
//! Pure function of (product graph, selection). Two fixed passes:
//! conflict discovery over the selected options, then per-option
//! verdict construction over the whole product. Auto-resolution of
//! `requires` edges is conflict-gated and deliberately runs once, not
//! to fixpoint: prerequisites of the selected options join the
//! effective selection only while the raw selection is conflict-free.
//!
//! Verdict checks are ordered and short-circuit: each option gets the
//! first reason that applies, never more than one.

use std::collections::{BTreeMap, BTreeSet};

use crate::error::StoreResult;
use crate::models::compatibility::{
    CompatibilityDetail, CompatibilityProduct, ComponentView, OptionRef, OptionView,
    ProductCompatibilityView,
};
use crate::models::catalog::PartOption;
use crate::models::{OptionId, PartTypeId, ProductId};
use crate::store::CatalogStore;

pub mod availability;
pub mod graph;
pub mod pricing;

pub use availability::available_options;
pub use graph::ProductGraph;
pub use pricing::{applied_overrides, calculate_price, AppliedConditionalPrice};

/// Resolves a selection against a product.
///
/// Unknown option ids are ignored. The only error is a missing
/// product: without its slot structure no per-option view exists.
pub fn resolve(
    store: &dyn CatalogStore,
    product_id: ProductId,
    selected_option_ids: &[OptionId],
) -> StoreResult<ProductCompatibilityView> {
    let graph = ProductGraph::load(store, product_id)?;
    Ok(resolve_with_graph(&graph, selected_option_ids))
}

/// Resolver core over an already-loaded graph. The availability probe
/// reuses this to avoid reloading per hypothetical selection.
pub fn resolve_with_graph(graph: &ProductGraph, raw: &[OptionId]) -> ProductCompatibilityView {
    let selected = graph.filter_selection(raw);

    // Pass 1: conflict discovery. Only selected options are origins;
    // per origin, unmet `requires` is recorded before `excludes`, and
    // an exclusion marks both ends.
    let mut conflicts: BTreeMap<OptionId, CompatibilityDetail> = BTreeMap::new();
    for &origin in &selected {
        for &required in graph.requires_of(origin) {
            if !selected.contains(&required) && !conflicts.contains_key(&origin) {
                conflicts.insert(
                    origin,
                    CompatibilityDetail::Requires {
                        dependency_id: required,
                        dependency_name: graph.option_name(required),
                    },
                );
            }
        }
        for &excluded in graph.excludes_of(origin) {
            if selected.contains(&excluded) {
                conflicts
                    .entry(origin)
                    .or_insert_with(|| CompatibilityDetail::Excludes {
                        dependency_id: excluded,
                        dependency_name: graph.option_name(excluded),
                    });
                conflicts
                    .entry(excluded)
                    .or_insert_with(|| CompatibilityDetail::ExcludedBy {
                        dependency_id: origin,
                        dependency_name: graph.option_name(origin),
                    });
            }
        }
    }
    let has_incompatibilities = !conflicts.is_empty();

    // Pass 2: requirement bookkeeping. Everything some selected option
    // requires, whether met or not, with the options that imposed it.
    let mut required_by: BTreeMap<OptionId, Vec<OptionId>> = BTreeMap::new();
    for &origin in &selected {
        for &required in graph.requires_of(origin) {
            required_by.entry(required).or_default().push(origin);
        }
    }

    // Conflict-free selections silently pull in their prerequisites;
    // while anything is broken the selection stays as given.
    let mut effective: BTreeSet<OptionId> = selected.clone();
    if !has_incompatibilities {
        effective.extend(required_by.keys().copied());
    }

    if has_incompatibilities {
        tracing::debug!(
            product_id = graph.product().id,
            conflicts = conflicts.len(),
            "selection has incompatibilities"
        );
    }

    // Pass 3: per-option verdicts.
    let components = graph
        .part_types()
        .iter()
        .map(|part_type| {
            let slot_filled = graph
                .options_in(part_type.id)
                .iter()
                .any(|o| selected.contains(&o.id));
            let options = graph
                .options_in(part_type.id)
                .iter()
                .map(|option| {
                    verdict(
                        graph,
                        option,
                        part_type.id,
                        slot_filled,
                        &selected,
                        &effective,
                        &conflicts,
                        &required_by,
                        has_incompatibilities,
                    )
                })
                .collect();
            ComponentView {
                id: part_type.id,
                name: part_type.name.clone(),
                options,
            }
        })
        .collect();

    ProductCompatibilityView {
        product: CompatibilityProduct {
            id: graph.product().id,
            name: graph.product().name.clone(),
            components,
        },
        has_incompatibilities,
        effective_selection: effective.into_iter().collect(),
    }
}

/// Ordered verdict chain for one option; the first rule that applies
/// wins and later checks are skipped.
#[allow(clippy::too_many_arguments)]
fn verdict(
    graph: &ProductGraph,
    option: &PartOption,
    slot: PartTypeId,
    slot_filled: bool,
    selected: &BTreeSet<OptionId>,
    effective: &BTreeSet<OptionId>,
    conflicts: &BTreeMap<OptionId, CompatibilityDetail>,
    required_by: &BTreeMap<OptionId, Vec<OptionId>>,
    has_incompatibilities: bool,
) -> OptionView {
    let option_id = option.id;
    let mut view = OptionView {
        id: option.id,
        name: option.name.clone(),
        base_price: option.base_price,
        in_stock: option.in_stock,
        selected: selected.contains(&option_id),
        is_compatible: true,
        available_for_selection: true,
        compatibility_details: None,
        required_by: Vec::new(),
    };

    // Selected options short-circuit: their verdict is pass 1's alone.
    if view.selected {
        if let Some(detail) = conflicts.get(&option_id) {
            view.is_compatible = false;
            view.compatibility_details = Some(detail.clone());
        }
        return view;
    }

    // Stock precedence: checked before any relational rule.
    if !option.in_stock {
        view.is_compatible = false;
        view.compatibility_details = Some(CompatibilityDetail::OutOfStock);
        return view;
    }

    // All remaining checks are selection-relative; an empty selection
    // constrains nothing.
    if selected.is_empty() {
        return view;
    }

    // Slot already filled by some other option: moot, not wrong.
    if slot_filled && !effective.contains(&option_id) {
        view.available_for_selection = false;
        view.compatibility_details = Some(CompatibilityDetail::AnotherOptionSelected);
        return view;
    }

    if let Some(detail) = conflicts.get(&option_id) {
        view.is_compatible = false;
        view.compatibility_details = Some(detail.clone());
        return view;
    }

    // While the selection is broken, options it requires stay
    // compatible and are annotated with who needs them - picking one
    // would help resolve the conflict.
    if has_incompatibilities {
        if let Some(origins) = required_by.get(&option_id) {
            view.required_by = origins
                .iter()
                .map(|&id| OptionRef {
                    id,
                    name: graph.option_name(id),
                })
                .collect();
            return view;
        }
    }

    // Cross-slot forced choice: a selected option mandates a specific
    // option in this slot, and it is not this one.
    for &origin in selected {
        for &required in graph.requires_of(origin) {
            if graph.slot_of(required) == Some(slot) && required != option_id {
                view.is_compatible = false;
                view.compatibility_details = Some(CompatibilityDetail::RequiresOther {
                    dependency_id: required,
                    dependency_name: graph.option_name(required),
                });
                return view;
            }
        }
    }

    // Own unmet dependency against the effective selection.
    for &required in graph.requires_of(option_id) {
        if !effective.contains(&required) {
            view.is_compatible = false;
            view.compatibility_details = Some(CompatibilityDetail::Requires {
                dependency_id: required,
                dependency_name: graph.option_name(required),
            });
            return view;
        }
    }
    for &excluded in graph.excludes_of(option_id) {
        if effective.contains(&excluded) {
            view.is_compatible = false;
            view.compatibility_details = Some(CompatibilityDetail::Excludes {
                dependency_id: excluded,
                dependency_name: graph.option_name(excluded),
            });
            return view;
        }
    }

    // Transitive conflict infection from the selected options.
    for &origin in selected {
        if graph.excludes_of(origin).contains(&option_id) {
            view.is_compatible = false;
            view.compatibility_details = Some(CompatibilityDetail::ExcludedBy {
                dependency_id: origin,
                dependency_name: graph.option_name(origin),
            });
            return view;
        }
    }
    for &origin in selected {
        if graph.requires_of(origin).contains(&option_id) && conflicts.contains_key(&origin) {
            view.is_compatible = false;
            view.compatibility_details = Some(CompatibilityDetail::RequiredByIncompatible {
                dependency_id: origin,
                dependency_name: graph.option_name(origin),
            });
            return view;
        }
    }

    view
}
