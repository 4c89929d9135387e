use serde::{Deserialize, Serialize};

use crate::defaults;

/// The resolved set of prices and rates the estimate pipeline reads.
///
/// Every numeric leaf carries a hard default, so deserializing a sparse or
/// empty document yields a complete table and a lookup can never observe a
/// missing value. An empty configuration is exactly the default price book.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct PricingConfiguration {
    pub adu_type_pricing: AduTypePricing,
    pub size_adjustments: SizeAdjustments,
    pub bathroom_pricing: BathroomPricing,
    pub hvac_pricing: HvacPricing,
    pub utilities_pricing: UtilitiesPricing,
    pub additional_services_pricing: AdditionalServicesPricing,
    pub custom_services_pricing: Vec<CustomService>,
    pub discount_pricing: DiscountPricing,
    pub settings: PricingSettings,
}

/// Price per square foot by ADU category, for units at or above 600 sq ft.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AduTypePricing {
    #[serde(default = "defaults::detached_rate")]
    pub detached: f64,
    #[serde(default = "defaults::attached_rate")]
    pub attached: f64,
    #[serde(default = "defaults::jadu_rate")]
    pub jadu: f64,
}

impl Default for AduTypePricing {
    fn default() -> Self {
        Self {
            detached: defaults::detached_rate(),
            attached: defaults::attached_rate(),
            jadu: defaults::jadu_rate(),
        }
    }
}

/// Per-square-foot rates by size tier. Below 600 sq ft the tier rate
/// replaces the category rate outright.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SizeAdjustments {
    #[serde(default = "defaults::base_rate")]
    pub base_rate: f64,
    #[serde(default = "defaults::small_unit_premium")]
    pub small_unit_premium: f64,
    #[serde(default = "defaults::tiny_unit_premium")]
    pub tiny_unit_premium: f64,
}

impl Default for SizeAdjustments {
    fn default() -> Self {
        Self {
            base_rate: defaults::base_rate(),
            small_unit_premium: defaults::small_unit_premium(),
            tiny_unit_premium: defaults::tiny_unit_premium(),
        }
    }
}

/// Flat adds by bathroom count. A single bathroom is included in the base.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BathroomPricing {
    #[serde(default = "defaults::one_half_bathroom_price")]
    pub one_half: f64,
    #[serde(default = "defaults::two_bathroom_price")]
    pub two: f64,
}

impl Default for BathroomPricing {
    fn default() -> Self {
        Self {
            one_half: defaults::one_half_bathroom_price(),
            two: defaults::two_bathroom_price(),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HvacPricing {
    #[serde(default = "defaults::central_ac_price")]
    pub central_ac: f64,
    #[serde(default = "defaults::mini_split_price")]
    pub mini_split: f64,
}

impl Default for HvacPricing {
    fn default() -> Self {
        Self {
            central_ac: defaults::central_ac_price(),
            mini_split: defaults::mini_split_price(),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UtilitiesPricing {
    #[serde(default = "defaults::water_meter_separate_price")]
    pub water_meter_separate: f64,
    #[serde(default = "defaults::gas_meter_separate_price")]
    pub gas_meter_separate: f64,
    #[serde(default = "defaults::electric_meter_separate_price")]
    pub electric_meter_separate: f64,
    #[serde(default = "defaults::sewer_connection_price")]
    pub sewer_connection: f64,
    #[serde(default = "defaults::electrical_panel_price")]
    pub electrical_panel: f64,
}

impl Default for UtilitiesPricing {
    fn default() -> Self {
        Self {
            water_meter_separate: defaults::water_meter_separate_price(),
            gas_meter_separate: defaults::gas_meter_separate_price(),
            electric_meter_separate: defaults::electric_meter_separate_price(),
            sewer_connection: defaults::sewer_connection_price(),
            electrical_panel: defaults::electrical_panel_price(),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AdditionalServicesPricing {
    #[serde(default = "defaults::design_services_price")]
    pub design_services: f64,
    #[serde(default = "defaults::solar_ready_price")]
    pub solar_ready: f64,
    #[serde(default = "defaults::fema_compliance_price")]
    pub fema_compliance: f64,
    #[serde(default = "defaults::extra_bathroom_price")]
    pub extra_bathroom: f64,
    #[serde(default = "defaults::dedicated_driveway_price")]
    pub dedicated_driveway: f64,
    #[serde(default = "defaults::basic_landscaping_price")]
    pub basic_landscaping: f64,
}

impl Default for AdditionalServicesPricing {
    fn default() -> Self {
        Self {
            design_services: defaults::design_services_price(),
            solar_ready: defaults::solar_ready_price(),
            fema_compliance: defaults::fema_compliance_price(),
            extra_bathroom: defaults::extra_bathroom_price(),
            dedicated_driveway: defaults::dedicated_driveway_price(),
            basic_landscaping: defaults::basic_landscaping_price(),
        }
    }
}

/// User-defined line item from the pricing editor.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CustomService {
    pub description: String,
    pub price: f64,
}

impl CustomService {
    /// Both fields are required: a label to print and a non-negative price.
    pub fn is_valid(&self) -> bool {
        !self.description.trim().is_empty() && self.price >= 0.0
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DiscountPricing {
    #[serde(default = "defaults::friends_and_family_rate")]
    pub friends_and_family: f64,
}

impl Default for DiscountPricing {
    fn default() -> Self {
        Self {
            friends_and_family: defaults::friends_and_family_rate(),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PricingSettings {
    #[serde(default = "defaults::markup_rate")]
    pub markup_rate: f64,
}

impl Default for PricingSettings {
    fn default() -> Self {
        Self {
            markup_rate: defaults::markup_rate(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_is_the_default_table() {
        let cfg: PricingConfiguration = serde_json::from_str("{}").expect("Failed to deserialize");
        assert_eq!(cfg, PricingConfiguration::default());
        assert_eq!(cfg.adu_type_pricing.detached, 240.0);
        assert_eq!(cfg.adu_type_pricing.jadu, 200.0);
        assert_eq!(cfg.bathroom_pricing.one_half, 4000.0);
        assert_eq!(cfg.discount_pricing.friends_and_family, 0.10);
        assert_eq!(cfg.settings.markup_rate, 0.0);
        assert!(cfg.custom_services_pricing.is_empty());
    }

    #[test]
    fn test_partial_section_keeps_sibling_defaults() {
        let json = r#"{ "bathroomPricing": { "two": 9000 } }"#;
        let cfg: PricingConfiguration = serde_json::from_str(json).expect("Failed to deserialize");
        assert_eq!(cfg.bathroom_pricing.two, 9000.0);
        assert_eq!(cfg.bathroom_pricing.one_half, 4000.0);
        assert_eq!(cfg.utilities_pricing.water_meter_separate, 3500.0);
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let json = r#"{ "bathroomPricing": { "two": 9000, "three": 12000 }, "spaPricing": {} }"#;
        let cfg: PricingConfiguration = serde_json::from_str(json).expect("Failed to deserialize");
        assert_eq!(cfg.bathroom_pricing.two, 9000.0);
    }

    #[test]
    fn test_custom_service_validity() {
        let ok = CustomService {
            description: "Skylight".to_string(),
            price: 2500.0,
        };
        assert!(ok.is_valid());

        let blank = CustomService {
            description: "   ".to_string(),
            price: 2500.0,
        };
        assert!(!blank.is_valid());

        let negative = CustomService {
            description: "Skylight".to_string(),
            price: -1.0,
        };
        assert!(!negative.is_valid());
    }
}
