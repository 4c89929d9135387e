use anchor_core::project::{ProjectSelection, UtilityMode};
use anchor_store::OverrideStore;

use crate::models::{Estimate, ItemCategory};

/// Composes price-book queries into an itemized estimate.
pub struct EstimateGenerator<'a> {
    store: &'a OverrideStore,
}

impl<'a> EstimateGenerator<'a> {
    pub fn new(store: &'a OverrideStore) -> Self {
        Self { store }
    }

    /// Build the full breakdown for a validated selection.
    ///
    /// Composition order is fixed: base construction, utilities, add-ons,
    /// design services, then markup and the friends-and-family discount.
    /// The discount is taken on the pre-markup subtotal. Every lookup is
    /// already defaulted, so this never fails.
    pub fn generate(&self, selection: &ProjectSelection) -> Estimate {
        let mut estimate = Estimate::new();

        let rate = self
            .store
            .get_adu_price(selection.adu_type.pricing_category(), selection.square_footage);
        estimate.add_item(
            ItemCategory::BaseConstruction,
            format!("{} construction", selection.adu_type.label()),
            rate * selection.square_footage,
        );

        for (key, label, mode) in selection.utilities.entries() {
            if mode != UtilityMode::Separate {
                continue;
            }
            let price = self.store.get_utility_price(key, mode.as_str());
            estimate.add_item(ItemCategory::Utilities, label, price);
        }

        for add_on in &selection.add_ons {
            let price = self.store.get_service_price(add_on.pricing_key());
            estimate.add_item(ItemCategory::AddOns, add_on.label(), price);
        }

        for custom in self.store.get_configuration().custom_services_pricing {
            estimate.add_item(ItemCategory::AddOns, custom.description, custom.price);
        }

        let bathroom_price = self.store.get_bathroom_price(selection.bathrooms);
        if bathroom_price != 0.0 {
            estimate.add_item(
                ItemCategory::AddOns,
                format!("{} bathrooms", selection.bathrooms),
                bathroom_price,
            );
        }

        estimate.add_item(
            ItemCategory::AddOns,
            selection.hvac_system.label(),
            self.store.get_hvac_price(selection.hvac_system.pricing_key()),
        );

        if selection.needs_design {
            estimate.add_item(
                ItemCategory::Services,
                "Design Services",
                self.store.get_service_price("designServices"),
            );
        }

        estimate.subtotal = estimate.base_construction
            + estimate.utilities_total
            + estimate.add_ons_total
            + estimate.services_total;
        estimate.markup_amount = estimate.subtotal * self.store.get_markup_rate();
        estimate.discount_amount = if selection.friends_and_family_discount {
            estimate.subtotal * self.store.get_discount_rate("friendsAndFamily")
        } else {
            0.0
        };
        estimate.final_total = estimate.subtotal + estimate.markup_amount - estimate.discount_amount;
        estimate.price_per_square_foot = if selection.square_footage > 0.0 {
            estimate.final_total / selection.square_footage
        } else {
            0.0
        };

        estimate
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchor_catalog::{CustomService, PricingConfiguration};
    use anchor_core::project::{AddOnService, AduType, HvacSystem, UtilitySelections};
    use anchor_store::{ConfigUpdate, MemoryBlobStore, OverrideStore};

    fn store() -> OverrideStore {
        OverrideStore::open(Box::new(MemoryBlobStore::new()))
    }

    fn selection() -> ProjectSelection {
        ProjectSelection {
            adu_type: AduType::Detached1Story,
            square_footage: 500.0,
            bedrooms: 1,
            bathrooms: 1.0,
            hvac_system: HvacSystem::CentralAc,
            utilities: UtilitySelections::default(),
            add_ons: Vec::new(),
            needs_design: false,
            friends_and_family_discount: false,
        }
    }

    #[test]
    fn test_small_unit_base_construction() {
        let store = store();
        let estimate = EstimateGenerator::new(&store).generate(&selection());
        // 500 sq ft prices at the small-unit premium of 250/sq ft.
        assert_eq!(estimate.base_construction, 125_000.0);
    }

    #[test]
    fn test_separate_utilities_sum_over_the_defaults() {
        let store = store();
        let mut s = selection();
        s.adu_type = AduType::Attached;
        s.square_footage = 800.0;
        s.utilities = UtilitySelections {
            water_meter: UtilityMode::Separate,
            gas_meter: UtilityMode::Separate,
            electric_meter: UtilityMode::Separate,
            sewer_connection: UtilityMode::Shared,
            electrical_panel: UtilityMode::Shared,
        };
        let estimate = EstimateGenerator::new(&store).generate(&s);
        assert_eq!(estimate.utilities_total, 7000.0);
        assert_eq!(estimate.base_construction, 240.0 * 800.0);
    }

    #[test]
    fn test_custom_services_flow_into_add_ons() {
        let store = store();
        let mut config = PricingConfiguration::default();
        config.custom_services_pricing.push(CustomService {
            description: "Skylight".to_string(),
            price: 2500.0,
        });
        store.apply_update(ConfigUpdate::Resolved { config });

        let mut s = selection();
        s.add_ons = vec![AddOnService::DedicatedDriveway];
        let estimate = EstimateGenerator::new(&store).generate(&s);

        // Driveway 5000 + Skylight 2500 + central AC 6000.
        assert_eq!(estimate.add_ons_total, 13_500.0);
        assert!(estimate
            .items
            .iter()
            .any(|i| i.label == "Skylight" && i.amount == 2500.0));
    }

    #[test]
    fn test_bathroom_and_design_contributions() {
        let store = store();
        let mut s = selection();
        s.bathrooms = 2.0;
        s.needs_design = true;
        let estimate = EstimateGenerator::new(&store).generate(&s);

        // Central AC 6000 + 2 bathrooms 8000.
        assert_eq!(estimate.add_ons_total, 14_000.0);
        assert_eq!(estimate.services_total, 12_500.0);
        assert_eq!(
            estimate.subtotal,
            estimate.base_construction + estimate.add_ons_total + estimate.services_total
        );
    }

    #[test]
    fn test_markup_and_discount_compose_on_the_subtotal() {
        let store = store();
        let mut config = PricingConfiguration::default();
        config.settings.markup_rate = 0.10;
        store.apply_update(ConfigUpdate::Resolved { config });

        let mut s = selection();
        s.friends_and_family_discount = true;
        let estimate = EstimateGenerator::new(&store).generate(&s);

        // Base 125000 + central AC 6000.
        assert_eq!(estimate.subtotal, 131_000.0);
        assert_eq!(estimate.markup_amount, 13_100.0);
        assert_eq!(estimate.discount_amount, 13_100.0);
        assert_eq!(estimate.final_total, 131_000.0);
    }

    #[test]
    fn test_price_per_square_foot_derives_from_the_final_total() {
        let store = store();
        let estimate = EstimateGenerator::new(&store).generate(&selection());
        assert_eq!(
            estimate.price_per_square_foot,
            estimate.final_total / 500.0
        );
    }

    #[test]
    fn test_shared_utilities_contribute_nothing() {
        let store = store();
        let estimate = EstimateGenerator::new(&store).generate(&selection());
        assert_eq!(estimate.utilities_total, 0.0);
        assert!(estimate
            .items
            .iter()
            .all(|i| i.category != ItemCategory::Utilities));
    }
}
