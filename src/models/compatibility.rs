//! Compatibility resolver output shapes
//!
//! A fixed, strongly-typed view tree: `ProductCompatibilityView`
//! mirrors the product's part types, and every option carries exactly
//! one `CompatibilityDetail` at most - the first rule that fired.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{OptionId, PartTypeId, ProductId};

/// Why an option is incompatible (or moot) under the current selection.
///
/// `dependency_id`/`dependency_name` point at the other end of the rule
/// that fired. Serialized under a `reason` tag inside
/// `compatibility_details`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum CompatibilityDetail {
    /// Out-of-stock options are never selectable, regardless of rules.
    OutOfStock,

    /// This option requires another option that is not selected.
    Requires {
        dependency_id: OptionId,
        dependency_name: String,
    },

    /// This option excludes another option that is selected.
    Excludes {
        dependency_id: OptionId,
        dependency_name: String,
    },

    /// A selected option mandates a different option in this slot.
    RequiresOther {
        dependency_id: OptionId,
        dependency_name: String,
    },

    /// A selected option excludes this one.
    ExcludedBy {
        dependency_id: OptionId,
        dependency_name: String,
    },

    /// This option is required by a selected option whose own
    /// requirements are unmet.
    RequiredByIncompatible {
        dependency_id: OptionId,
        dependency_name: String,
    },

    /// Not wrong, just moot: another option of the same slot is
    /// already selected.
    AnotherOptionSelected,
}

/// Lightweight id/name pair for cross-references in views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionRef {
    pub id: OptionId,
    pub name: String,
}

/// Per-option verdict.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionView {
    pub id: OptionId,
    pub name: String,
    pub base_price: Decimal,
    pub in_stock: bool,
    /// Membership in the raw input selection, never the effective one.
    pub selected: bool,
    pub is_compatible: bool,
    /// False only when the slot is already filled by another option.
    pub available_for_selection: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compatibility_details: Option<CompatibilityDetail>,
    /// Selected options that require this one (informational; only
    /// populated while the selection has conflicts).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub required_by: Vec<OptionRef>,
}

/// One slot of the product with its option verdicts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentView {
    pub id: PartTypeId,
    pub name: String,
    pub options: Vec<OptionView>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompatibilityProduct {
    pub id: ProductId,
    pub name: String,
    pub components: Vec<ComponentView>,
}

/// Result of resolving a selection against a product.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductCompatibilityView {
    pub product: CompatibilityProduct,
    /// True the moment any selected option is in conflict.
    pub has_incompatibilities: bool,
    /// Raw selection plus auto-added requirements (only when the raw
    /// selection is conflict-free), sorted by option id.
    pub effective_selection: Vec<OptionId>,
}

impl ProductCompatibilityView {
    /// Looks up the verdict for one option.
    pub fn option(&self, option_id: OptionId) -> Option<&OptionView> {
        self.product
            .components
            .iter()
            .flat_map(|c| c.options.iter())
            .find(|o| o.id == option_id)
    }

    /// First selected option that is in conflict, if any.
    pub fn first_selected_conflict(&self) -> Option<&OptionView> {
        self.product
            .components
            .iter()
            .flat_map(|c| c.options.iter())
            .find(|o| o.selected && !o.is_compatible)
    }

    /// True when every selected option is conflict-free.
    pub fn is_selection_compatible(&self) -> bool {
        !self.has_incompatibilities
    }
}

/// One option of the up-selling/option-picker view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailableOption {
    pub id: OptionId,
    pub name: String,
    pub base_price: Decimal,
    pub is_compatible: bool,
}

/// Per-slot availability, built by probing the resolver with
/// hypothetical selections.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentAvailability {
    pub id: PartTypeId,
    pub name: String,
    pub options: Vec<AvailableOption>,
}
