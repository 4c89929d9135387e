use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Grouping used by the proposal template to section line items.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum ItemCategory {
    BaseConstruction,
    Utilities,
    AddOns,
    Services,
}

/// One priced row in the estimate.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimateItem {
    pub category: ItemCategory,
    pub label: String,
    pub amount: f64,
}

/// The itemized price breakdown for one project selection. This is the
/// document the proposal template renders.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Estimate {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub items: Vec<EstimateItem>,
    pub base_construction: f64,
    pub utilities_total: f64,
    pub add_ons_total: f64,
    pub services_total: f64,
    pub subtotal: f64,
    pub markup_amount: f64,
    pub discount_amount: f64,
    pub final_total: f64,
    pub price_per_square_foot: f64,
}

impl Estimate {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            items: Vec::new(),
            base_construction: 0.0,
            utilities_total: 0.0,
            add_ons_total: 0.0,
            services_total: 0.0,
            subtotal: 0.0,
            markup_amount: 0.0,
            discount_amount: 0.0,
            final_total: 0.0,
            price_per_square_foot: 0.0,
        }
    }

    /// Append a row and keep its category subtotal current.
    pub fn add_item(&mut self, category: ItemCategory, label: impl Into<String>, amount: f64) {
        match category {
            ItemCategory::BaseConstruction => self.base_construction += amount,
            ItemCategory::Utilities => self.utilities_total += amount,
            ItemCategory::AddOns => self.add_ons_total += amount,
            ItemCategory::Services => self.services_total += amount,
        }
        self.items.push(EstimateItem {
            category,
            label: label.into(),
            amount,
        });
    }
}

impl Default for Estimate {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_item_keeps_category_totals_current() {
        let mut estimate = Estimate::new();
        estimate.add_item(ItemCategory::Utilities, "Separate Water Meter", 3500.0);
        estimate.add_item(ItemCategory::Utilities, "Separate Gas Meter", 3500.0);
        estimate.add_item(ItemCategory::AddOns, "Skylight", 2500.0);

        assert_eq!(estimate.utilities_total, 7000.0);
        assert_eq!(estimate.add_ons_total, 2500.0);
        assert_eq!(estimate.items.len(), 3);
    }

    #[test]
    fn test_estimate_serializes_with_camel_case_keys() {
        let estimate = Estimate::new();
        let json = serde_json::to_string(&estimate).expect("Failed to serialize");
        assert!(json.contains("\"finalTotal\""));
        assert!(json.contains("\"pricePerSquareFoot\""));
        assert!(json.contains("\"createdAt\""));
    }
}
