use tracing::warn;

use crate::config::{CustomService, PricingConfiguration};
use crate::hol::{HolPriceItem, HolPricingDocument, HolRateItem, HolSettings};

/// Normalize a HOL pricing document into the native configuration.
///
/// Total by construction: the result starts from the default table and every
/// entry that classifies by name overlays its field, so a sparse or partly
/// unrecognizable document still yields a complete configuration. Later
/// entries win when two classify the same way. Add-on entries that match no
/// named service become custom services in order of appearance.
pub fn to_anchor_format(doc: &HolPricingDocument) -> PricingConfiguration {
    let mut cfg = PricingConfiguration::default();

    for item in &doc.adu_types {
        let name = item.name.to_lowercase();
        if name.contains("jadu") || name.contains("junior") {
            cfg.adu_type_pricing.jadu = item.price_per_sq_ft;
        } else if name.contains("attach") {
            cfg.adu_type_pricing.attached = item.price_per_sq_ft;
        } else if name.contains("detach") {
            cfg.adu_type_pricing.detached = item.price_per_sq_ft;
        }
    }

    // "tiny" is checked before "400" because the tiny tier is usually
    // labelled "under 400 sq ft".
    for item in &doc.square_footage_rates {
        let name = item.name.to_lowercase();
        if name.contains("tiny") || name.contains("under") {
            cfg.size_adjustments.tiny_unit_premium = item.price_per_sq_ft;
        } else if name.contains("small") || name.contains("400") {
            cfg.size_adjustments.small_unit_premium = item.price_per_sq_ft;
        } else if name.contains("base") || name.contains("standard") {
            cfg.size_adjustments.base_rate = item.price_per_sq_ft;
        }
    }

    for item in &doc.bathrooms {
        let name = item.name.to_lowercase();
        if name.contains("1.5") || name.contains("half") {
            cfg.bathroom_pricing.one_half = item.price;
        } else if name.contains('2') {
            cfg.bathroom_pricing.two = item.price;
        }
    }

    for item in &doc.hvac {
        let name = item.name.to_lowercase();
        if name.contains("mini") {
            cfg.hvac_pricing.mini_split = item.price;
        } else if name.contains("central") {
            cfg.hvac_pricing.central_ac = item.price;
        }
    }

    // "panel" first: the panel entry also contains "electric".
    for item in &doc.utilities {
        let name = item.name.to_lowercase();
        if name.contains("panel") {
            cfg.utilities_pricing.electrical_panel = item.price;
        } else if name.contains("water") {
            cfg.utilities_pricing.water_meter_separate = item.price;
        } else if name.contains("gas") {
            cfg.utilities_pricing.gas_meter_separate = item.price;
        } else if name.contains("sewer") {
            cfg.utilities_pricing.sewer_connection = item.price;
        } else if name.contains("electric") {
            cfg.utilities_pricing.electric_meter_separate = item.price;
        }
    }

    for item in &doc.design_services {
        cfg.additional_services_pricing.design_services = item.price;
    }

    let mut customs = Vec::new();
    for item in &doc.add_ons {
        let name = item.name.to_lowercase();
        if name.contains("solar") {
            cfg.additional_services_pricing.solar_ready = item.price;
        } else if name.contains("fema") {
            cfg.additional_services_pricing.fema_compliance = item.price;
        } else if name.contains("extra bath") {
            cfg.additional_services_pricing.extra_bathroom = item.price;
        } else if name.contains("driveway") {
            cfg.additional_services_pricing.dedicated_driveway = item.price;
        } else if name.contains("landscap") {
            cfg.additional_services_pricing.basic_landscaping = item.price;
        } else {
            let entry = CustomService {
                description: item.name.clone(),
                price: item.price,
            };
            if entry.is_valid() {
                customs.push(entry);
            } else {
                warn!("Dropping custom add-on with empty name or negative price: '{}'", item.name);
            }
        }
    }
    cfg.custom_services_pricing = customs;

    cfg.settings.markup_rate = clamp_fraction(doc.settings.markup, "markup");
    cfg.discount_pricing.friends_and_family = clamp_fraction(
        doc.settings.friends_and_family_discount,
        "friendsAndFamilyDiscount",
    );

    cfg
}

/// Render the native configuration in the external HOL shape.
///
/// Every field present in both shapes converts losslessly; custom services
/// are appended to the add-ons section under their own descriptions. The
/// emitted display names are the canonical ones, chosen so a rendered
/// document always classifies back field-for-field.
pub fn to_hol_format(cfg: &PricingConfiguration) -> HolPricingDocument {
    let mut add_ons = vec![
        HolPriceItem {
            name: "Solar Ready".to_string(),
            price: cfg.additional_services_pricing.solar_ready,
        },
        HolPriceItem {
            name: "FEMA Compliance".to_string(),
            price: cfg.additional_services_pricing.fema_compliance,
        },
        HolPriceItem {
            name: "Extra Bathroom".to_string(),
            price: cfg.additional_services_pricing.extra_bathroom,
        },
        HolPriceItem {
            name: "Dedicated Driveway".to_string(),
            price: cfg.additional_services_pricing.dedicated_driveway,
        },
        HolPriceItem {
            name: "Basic Landscaping".to_string(),
            price: cfg.additional_services_pricing.basic_landscaping,
        },
    ];
    add_ons.extend(cfg.custom_services_pricing.iter().map(|s| HolPriceItem {
        name: s.description.clone(),
        price: s.price,
    }));

    HolPricingDocument {
        adu_types: vec![
            HolRateItem {
                name: "Detached ADU".to_string(),
                price_per_sq_ft: cfg.adu_type_pricing.detached,
            },
            HolRateItem {
                name: "Attached ADU".to_string(),
                price_per_sq_ft: cfg.adu_type_pricing.attached,
            },
            HolRateItem {
                name: "Junior ADU (JADU)".to_string(),
                price_per_sq_ft: cfg.adu_type_pricing.jadu,
            },
        ],
        square_footage_rates: vec![
            HolRateItem {
                name: "Standard Base Rate".to_string(),
                price_per_sq_ft: cfg.size_adjustments.base_rate,
            },
            HolRateItem {
                name: "Tiny Unit (under 400 sq ft)".to_string(),
                price_per_sq_ft: cfg.size_adjustments.tiny_unit_premium,
            },
            HolRateItem {
                name: "Small Unit (400-599 sq ft)".to_string(),
                price_per_sq_ft: cfg.size_adjustments.small_unit_premium,
            },
        ],
        bathrooms: vec![
            HolPriceItem {
                name: "1.5 Bathrooms".to_string(),
                price: cfg.bathroom_pricing.one_half,
            },
            HolPriceItem {
                name: "2 Bathrooms".to_string(),
                price: cfg.bathroom_pricing.two,
            },
        ],
        hvac: vec![
            HolPriceItem {
                name: "Central AC".to_string(),
                price: cfg.hvac_pricing.central_ac,
            },
            HolPriceItem {
                name: "Mini-Split System".to_string(),
                price: cfg.hvac_pricing.mini_split,
            },
        ],
        utilities: vec![
            HolPriceItem {
                name: "Separate Water Meter".to_string(),
                price: cfg.utilities_pricing.water_meter_separate,
            },
            HolPriceItem {
                name: "Separate Gas Meter".to_string(),
                price: cfg.utilities_pricing.gas_meter_separate,
            },
            HolPriceItem {
                name: "Separate Electric Meter".to_string(),
                price: cfg.utilities_pricing.electric_meter_separate,
            },
            HolPriceItem {
                name: "Sewer Connection".to_string(),
                price: cfg.utilities_pricing.sewer_connection,
            },
            HolPriceItem {
                name: "Electrical Panel Upgrade".to_string(),
                price: cfg.utilities_pricing.electrical_panel,
            },
        ],
        design_services: vec![HolPriceItem {
            name: "Design Services".to_string(),
            price: cfg.additional_services_pricing.design_services,
        }],
        add_ons,
        settings: HolSettings {
            markup: cfg.settings.markup_rate,
            friends_and_family_discount: cfg.discount_pricing.friends_and_family,
        },
    }
}

/// The bundled pricing document: the default table rendered in HOL shape.
/// Seeds a fresh editor install.
pub fn default_hol_document() -> HolPricingDocument {
    to_hol_format(&PricingConfiguration::default())
}

fn clamp_fraction(value: f64, field: &str) -> f64 {
    if (0.0..=1.0).contains(&value) {
        value
    } else {
        warn!("{} rate {} outside [0, 1], clamping", field, value);
        value.clamp(0.0, 1.0)
    }
}
