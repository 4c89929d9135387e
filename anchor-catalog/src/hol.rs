use serde::{Deserialize, Serialize};

use crate::defaults;

/// One named entry in a flat-priced HOL section.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HolPriceItem {
    pub name: String,
    pub price: f64,
}

/// One named entry quoted by the square foot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HolRateItem {
    pub name: String,
    pub price_per_sq_ft: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HolSettings {
    #[serde(default = "defaults::markup_rate")]
    pub markup: f64,
    #[serde(default = "defaults::friends_and_family_rate")]
    pub friends_and_family_discount: f64,
}

impl Default for HolSettings {
    fn default() -> Self {
        Self {
            markup: defaults::markup_rate(),
            friends_and_family_discount: defaults::friends_and_family_rate(),
        }
    }
}

/// The external HOL pricing document: flat sections of display-named entries.
///
/// The shape is list-based and loosely ordered; entries are matched by name
/// when normalizing, and sections a document omits fall back to the default
/// table wholesale.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct HolPricingDocument {
    pub adu_types: Vec<HolRateItem>,
    pub square_footage_rates: Vec<HolRateItem>,
    pub bathrooms: Vec<HolPriceItem>,
    pub hvac: Vec<HolPriceItem>,
    pub utilities: Vec<HolPriceItem>,
    pub design_services: Vec<HolPriceItem>,
    pub add_ons: Vec<HolPriceItem>,
    pub settings: HolSettings,
}
