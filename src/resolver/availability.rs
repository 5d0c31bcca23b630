//! Option-picker availability view
//!
//! For every slot, reports which in-stock options could be picked next
//! by probing the resolver with the hypothetical selection. O(options x
//! resolver cost) over one shared graph load - fine for catalog-sized
//! products.

use crate::error::StoreResult;
use crate::models::compatibility::{AvailableOption, ComponentAvailability};
use crate::models::{OptionId, ProductId};
use crate::store::CatalogStore;

use super::graph::ProductGraph;
use super::resolve_with_graph;

/// Builds the per-slot availability view for `current_selection`.
///
/// Out-of-stock options are omitted entirely; already-selected options
/// report compatible unconditionally.
pub fn available_options(
    store: &dyn CatalogStore,
    product_id: ProductId,
    current_selection: &[OptionId],
) -> StoreResult<Vec<ComponentAvailability>> {
    let graph = ProductGraph::load(store, product_id)?;
    let selected = graph.filter_selection(current_selection);

    let mut components = Vec::with_capacity(graph.part_types().len());
    for part_type in graph.part_types() {
        let mut options = Vec::new();
        for option in graph.options_in(part_type.id) {
            if !option.in_stock {
                continue;
            }
            let is_compatible = if selected.contains(&option.id) {
                true
            } else {
                let mut probe: Vec<OptionId> = selected.iter().copied().collect();
                probe.push(option.id);
                let view = resolve_with_graph(&graph, &probe);
                view.option(option.id).is_some_and(|v| v.is_compatible)
            };
            options.push(AvailableOption {
                id: option.id,
                name: option.name.clone(),
                base_price: option.base_price,
                is_compatible,
            });
        }
        components.push(ComponentAvailability {
            id: part_type.id,
            name: part_type.name.clone(),
            options,
        });
    }
    Ok(components)
}
