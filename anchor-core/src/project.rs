use serde::{Deserialize, Serialize};

/// ADU category as submitted by the intake form.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AduType {
    #[serde(rename = "detached-1story")]
    Detached1Story,
    #[serde(rename = "detached-2story")]
    Detached2Story,
    #[serde(rename = "attached")]
    Attached,
    #[serde(rename = "jadu")]
    Jadu,
}

impl AduType {
    /// Pricing category key. Both detached variants price as "detached".
    pub fn pricing_category(&self) -> &'static str {
        match self {
            AduType::Detached1Story | AduType::Detached2Story => "detached",
            AduType::Attached => "attached",
            AduType::Jadu => "jadu",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AduType::Detached1Story => "Detached ADU (1 story)",
            AduType::Detached2Story => "Detached ADU (2 story)",
            AduType::Attached => "Attached ADU",
            AduType::Jadu => "Junior ADU",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum HvacSystem {
    CentralAc,
    MiniSplit,
}

impl HvacSystem {
    pub fn pricing_key(&self) -> &'static str {
        match self {
            HvacSystem::CentralAc => "centralAc",
            HvacSystem::MiniSplit => "miniSplit",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            HvacSystem::CentralAc => "Central AC",
            HvacSystem::MiniSplit => "Mini-Split System",
        }
    }
}

/// Whether a utility connection is shared with the main house or metered
/// separately. Shared connections are never priced.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum UtilityMode {
    #[default]
    Shared,
    Separate,
}

impl UtilityMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            UtilityMode::Shared => "shared",
            UtilityMode::Separate => "separate",
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct UtilitySelections {
    pub water_meter: UtilityMode,
    pub gas_meter: UtilityMode,
    pub electric_meter: UtilityMode,
    pub sewer_connection: UtilityMode,
    pub electrical_panel: UtilityMode,
}

impl UtilitySelections {
    /// Pricing key, display label, and selected mode for each utility, in
    /// proposal order.
    pub fn entries(&self) -> [(&'static str, &'static str, UtilityMode); 5] {
        [
            ("water", "Separate Water Meter", self.water_meter),
            ("gas", "Separate Gas Meter", self.gas_meter),
            ("electric", "Separate Electric Meter", self.electric_meter),
            ("sewerConnection", "Sewer Connection", self.sewer_connection),
            ("electricalPanel", "Electrical Panel Upgrade", self.electrical_panel),
        ]
    }
}

/// Named add-on services offered on the intake form.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum AddOnService {
    SolarReady,
    FemaCompliance,
    ExtraBathroom,
    DedicatedDriveway,
    BasicLandscaping,
}

impl AddOnService {
    pub fn pricing_key(&self) -> &'static str {
        match self {
            AddOnService::SolarReady => "solarReady",
            AddOnService::FemaCompliance => "femaCompliance",
            AddOnService::ExtraBathroom => "extraBathroom",
            AddOnService::DedicatedDriveway => "dedicatedDriveway",
            AddOnService::BasicLandscaping => "basicLandscaping",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AddOnService::SolarReady => "Solar Ready",
            AddOnService::FemaCompliance => "FEMA Compliance",
            AddOnService::ExtraBathroom => "Extra Bathroom",
            AddOnService::DedicatedDriveway => "Dedicated Driveway",
            AddOnService::BasicLandscaping => "Basic Landscaping",
        }
    }
}

/// A fully filled intake form for one ADU project. Only validated selections
/// reach the estimate pipeline.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSelection {
    pub adu_type: AduType,
    pub square_footage: f64,
    #[serde(default)]
    pub bedrooms: u8,
    pub bathrooms: f64,
    pub hvac_system: HvacSystem,
    #[serde(default)]
    pub utilities: UtilitySelections,
    #[serde(default)]
    pub add_ons: Vec<AddOnService>,
    #[serde(default)]
    pub needs_design: bool,
    #[serde(default)]
    pub friends_and_family_discount: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_deserialization() {
        let json = r#"
            {
                "aduType": "detached-1story",
                "squareFootage": 650,
                "bedrooms": 2,
                "bathrooms": 1.5,
                "hvacSystem": "mini-split",
                "utilities": { "waterMeter": "separate" },
                "addOns": ["solar-ready", "basic-landscaping"],
                "needsDesign": true
            }
        "#;
        let selection: ProjectSelection = serde_json::from_str(json).expect("Failed to deserialize");
        assert_eq!(selection.adu_type, AduType::Detached1Story);
        assert_eq!(selection.adu_type.pricing_category(), "detached");
        assert_eq!(selection.hvac_system, HvacSystem::MiniSplit);
        assert_eq!(selection.utilities.water_meter, UtilityMode::Separate);
        assert_eq!(selection.utilities.gas_meter, UtilityMode::Shared);
        assert_eq!(selection.add_ons.len(), 2);
        assert!(!selection.friends_and_family_discount);
    }
}
