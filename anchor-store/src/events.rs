use serde::Deserialize;

use anchor_catalog::{HolPricingDocument, PricingConfiguration};

/// A configuration-changed notification.
///
/// Two payloads exist: the pricing editor broadcasts its HOL-shaped document
/// under `pricing`, and the admin screen broadcasts an already-normalized
/// configuration under `config`. The editor shape is normalized on receipt;
/// the resolved shape is stored verbatim.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ConfigUpdate {
    Editor { pricing: HolPricingDocument },
    Resolved { config: PricingConfiguration },
}
