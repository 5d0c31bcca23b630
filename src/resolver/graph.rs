//! Product graph snapshot
//!
//! One upfront load of a product's part types, options and edges into
//! adjacency maps. The resolver then runs purely in memory: no store
//! probing inside loops, so the cost model stays predictable.

use std::collections::{BTreeSet, HashMap};

use crate::error::StoreResult;
use crate::models::catalog::{ConditionalPrice, DependencyKind, PartOption, PartType, Product};
use crate::models::{OptionId, PartTypeId, ProductId};
use crate::store::CatalogStore;

#[derive(Debug)]
pub struct ProductGraph {
    product: Product,
    part_types: Vec<PartType>,
    options_by_part: HashMap<PartTypeId, Vec<PartOption>>,
    slot_of: HashMap<OptionId, PartTypeId>,
    names: HashMap<OptionId, String>,
    /// Outgoing `requires` targets per option, in edge-id order.
    requires: HashMap<OptionId, Vec<OptionId>>,
    /// Outgoing `excludes` targets per option, in edge-id order.
    excludes: HashMap<OptionId, Vec<OptionId>>,
    /// Conditional-price edges priced on each option, in edge-id order.
    conditional: HashMap<OptionId, Vec<ConditionalPrice>>,
}

impl ProductGraph {
    /// Loads the whole product structure in one pass. Fails only when
    /// the product itself does not exist.
    pub fn load(store: &dyn CatalogStore, product_id: ProductId) -> StoreResult<Self> {
        let product = store.get_product(product_id)?;
        let part_types = store.get_part_types(product_id)?;

        let mut options_by_part = HashMap::new();
        let mut slot_of = HashMap::new();
        let mut names = HashMap::new();
        let mut option_ids = BTreeSet::new();
        for part_type in &part_types {
            let options = store.get_options(part_type.id);
            for option in &options {
                option_ids.insert(option.id);
                slot_of.insert(option.id, part_type.id);
                names.insert(option.id, option.name.clone());
            }
            options_by_part.insert(part_type.id, options);
        }

        let mut requires: HashMap<OptionId, Vec<OptionId>> = HashMap::new();
        let mut excludes: HashMap<OptionId, Vec<OptionId>> = HashMap::new();
        for edge in store.get_dependencies_for(&option_ids) {
            // Both directions come back; adjacency only keys sources
            // that belong to this product.
            if !option_ids.contains(&edge.option_id) {
                continue;
            }
            let bucket = match edge.kind {
                DependencyKind::Requires => requires.entry(edge.option_id).or_default(),
                DependencyKind::Excludes => excludes.entry(edge.option_id).or_default(),
            };
            bucket.push(edge.depends_on_option_id);
        }

        let mut conditional: HashMap<OptionId, Vec<ConditionalPrice>> = HashMap::new();
        for edge in store.get_conditional_prices_for(&option_ids) {
            if option_ids.contains(&edge.option_id) {
                conditional.entry(edge.option_id).or_default().push(edge);
            }
        }

        Ok(Self {
            product,
            part_types,
            options_by_part,
            slot_of,
            names,
            requires,
            excludes,
            conditional,
        })
    }

    pub fn product(&self) -> &Product {
        &self.product
    }

    pub fn part_types(&self) -> &[PartType] {
        &self.part_types
    }

    pub fn options_in(&self, part_type_id: PartTypeId) -> &[PartOption] {
        self.options_by_part
            .get(&part_type_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn slot_of(&self, option_id: OptionId) -> Option<PartTypeId> {
        self.slot_of.get(&option_id).copied()
    }

    pub fn requires_of(&self, option_id: OptionId) -> &[OptionId] {
        self.requires
            .get(&option_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn excludes_of(&self, option_id: OptionId) -> &[OptionId] {
        self.excludes
            .get(&option_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn conditional_prices_of(&self, option_id: OptionId) -> &[ConditionalPrice] {
        self.conditional
            .get(&option_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Display name for an option; edges may point at records deleted
    /// since the rule was written.
    pub fn option_name(&self, option_id: OptionId) -> String {
        self.names
            .get(&option_id)
            .cloned()
            .unwrap_or_else(|| format!("option {option_id}"))
    }

    /// Drops ids that do not belong to this product: stale client state
    /// is noise, not an error.
    pub fn filter_selection(&self, raw: &[OptionId]) -> BTreeSet<OptionId> {
        raw.iter()
            .copied()
            .filter(|id| self.slot_of.contains_key(id))
            .collect()
    }
}
