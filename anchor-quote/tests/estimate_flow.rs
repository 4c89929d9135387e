use anchor_core::project::ProjectSelection;
use anchor_quote::EstimateGenerator;
use anchor_store::{ConfigUpdate, FileBlobStore, OverrideStore};

fn selection_json() -> &'static str {
    r#"
        {
            "aduType": "detached-1story",
            "squareFootage": 500,
            "bedrooms": 1,
            "bathrooms": 1,
            "hvacSystem": "central-ac",
            "utilities": { "waterMeter": "separate" }
        }
    "#
}

#[test]
fn test_editor_update_flows_into_later_sessions() {
    let tmp = tempfile::tempdir().expect("create temp dir");

    // Session one: the pricing editor pushes an override and exits.
    {
        let store = OverrideStore::open(Box::new(FileBlobStore::new(tmp.path())));
        let update: ConfigUpdate = serde_json::from_str(
            r#"
                {
                    "pricing": {
                        "squareFootageRates": [
                            { "name": "Small Unit (400-599 sq ft)", "pricePerSqFt": 260 }
                        ],
                        "utilities": [
                            { "name": "Separate Water Meter", "price": 5000 }
                        ]
                    }
                }
            "#,
        )
        .expect("valid update document");
        store.apply_update(update);
    }

    // Session two: a fresh open sees the persisted override.
    let store = OverrideStore::open(Box::new(FileBlobStore::new(tmp.path())));
    let selection: ProjectSelection =
        serde_json::from_str(selection_json()).expect("valid selection");
    let estimate = EstimateGenerator::new(&store).generate(&selection);

    assert_eq!(estimate.base_construction, 260.0 * 500.0);
    assert_eq!(estimate.utilities_total, 5000.0);
    // Central AC stays at its default since the update did not touch it.
    assert_eq!(estimate.add_ons_total, 6000.0);
    assert_eq!(estimate.final_total, 130_000.0 + 5000.0 + 6000.0);
    assert_eq!(estimate.price_per_square_foot, 141_000.0 / 500.0);
}

#[test]
fn test_fresh_install_prices_from_the_default_table() {
    let tmp = tempfile::tempdir().expect("create temp dir");
    let store = OverrideStore::open(Box::new(FileBlobStore::new(tmp.path())));
    let selection: ProjectSelection =
        serde_json::from_str(selection_json()).expect("valid selection");
    let estimate = EstimateGenerator::new(&store).generate(&selection);

    // 500 sq ft prices at the small-unit premium of 250/sq ft.
    assert_eq!(estimate.base_construction, 125_000.0);
    assert_eq!(estimate.utilities_total, 3500.0);
    assert_eq!(estimate.final_total, 125_000.0 + 3500.0 + 6000.0);
}
