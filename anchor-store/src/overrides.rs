use std::sync::{Mutex, RwLock, RwLockReadGuard};

use tracing::{info, warn};

use anchor_catalog::{to_anchor_format, PricingConfiguration};

use crate::blob::BlobStore;
use crate::events::ConfigUpdate;

/// Storage key for the normalized configuration document.
pub const CONFIG_KEY: &str = "anchor-pricing-config";

/// Key written by the old HOL pricing editor; read once and migrated.
pub const LEGACY_EDITOR_KEY: &str = "hol-pricing-editor";

type Listener = Box<dyn Fn(&PricingConfiguration) + Send + Sync>;

/// Process-wide holder of the resolved pricing configuration.
///
/// Constructed once at startup and passed by handle to every consumer.
/// Every query method is a pure function of the current snapshot and its
/// arguments, and total: a missing or unrecognized key resolves to the hard
/// default for that exact field, never to an error. There is one logical
/// writer per session; the lock only preserves the read-after-update
/// ordering guarantee.
pub struct OverrideStore {
    blob: Box<dyn BlobStore>,
    config: RwLock<PricingConfiguration>,
    listeners: Mutex<Vec<Listener>>,
}

impl OverrideStore {
    /// Load the newest persisted configuration, migrating a legacy editor
    /// document if that is all that exists, else start from the defaults.
    /// Malformed blobs are logged and skipped, never surfaced.
    pub fn open(blob: Box<dyn BlobStore>) -> Self {
        let config = load_initial(blob.as_ref());
        Self {
            blob,
            config: RwLock::new(config),
            listeners: Mutex::new(Vec::new()),
        }
    }

    /// Replace the configuration from a notification payload, persist it,
    /// and notify subscribers. Applying the same payload twice leaves the
    /// configuration and every query result unchanged after the second call.
    pub fn apply_update(&self, update: ConfigUpdate) {
        let next = match update {
            ConfigUpdate::Editor { pricing } => to_anchor_format(&pricing),
            ConfigUpdate::Resolved { config } => config,
        };

        {
            let mut current = self.config.write().unwrap_or_else(|p| p.into_inner());
            *current = next.clone();
        }
        info!("Pricing configuration updated");
        persist(self.blob.as_ref(), &next);

        let listeners = self.listeners.lock().unwrap_or_else(|p| p.into_inner());
        for listener in listeners.iter() {
            listener(&next);
        }
    }

    /// Register a callback invoked with each new configuration snapshot.
    pub fn subscribe(&self, listener: impl Fn(&PricingConfiguration) + Send + Sync + 'static) {
        self.listeners
            .lock()
            .unwrap_or_else(|p| p.into_inner())
            .push(Box::new(listener));
    }

    /// $/sq ft for the requested category and size. The category rate is
    /// looked up first, then the size tier overrides it outright for
    /// anything under 600 sq ft.
    pub fn get_adu_price(&self, adu_type: &str, square_footage: f64) -> f64 {
        let cfg = self.read();
        let base = match adu_type {
            "detached" => cfg.adu_type_pricing.detached,
            "attached" => cfg.adu_type_pricing.attached,
            "jadu" => cfg.adu_type_pricing.jadu,
            _ => cfg.size_adjustments.base_rate,
        };
        if square_footage < 400.0 {
            cfg.size_adjustments.tiny_unit_premium
        } else if square_footage < 600.0 {
            cfg.size_adjustments.small_unit_premium
        } else {
            base
        }
    }

    /// Shared connections are never priced; separate ones read the table.
    pub fn get_utility_price(&self, utility: &str, mode: &str) -> f64 {
        if mode != "separate" {
            return 0.0;
        }
        let cfg = self.read();
        match utility {
            "water" => cfg.utilities_pricing.water_meter_separate,
            "gas" => cfg.utilities_pricing.gas_meter_separate,
            "electric" => cfg.utilities_pricing.electric_meter_separate,
            "sewerConnection" => cfg.utilities_pricing.sewer_connection,
            "electricalPanel" => cfg.utilities_pricing.electrical_panel,
            _ => 0.0,
        }
    }

    pub fn get_service_price(&self, service: &str) -> f64 {
        let cfg = self.read();
        match service {
            "designServices" => cfg.additional_services_pricing.design_services,
            "solarReady" => cfg.additional_services_pricing.solar_ready,
            "femaCompliance" => cfg.additional_services_pricing.fema_compliance,
            "extraBathroom" => cfg.additional_services_pricing.extra_bathroom,
            "dedicatedDriveway" => cfg.additional_services_pricing.dedicated_driveway,
            "basicLandscaping" => cfg.additional_services_pricing.basic_landscaping,
            _ => 0.0,
        }
    }

    pub fn get_hvac_price(&self, system: &str) -> f64 {
        let cfg = self.read();
        match system {
            "centralAc" => cfg.hvac_pricing.central_ac,
            "miniSplit" => cfg.hvac_pricing.mini_split,
            _ => 0.0,
        }
    }

    /// Flat add for 1.5 or 2 bathrooms; any other count prices at zero.
    pub fn get_bathroom_price(&self, count: f64) -> f64 {
        let cfg = self.read();
        if count == 1.5 {
            cfg.bathroom_pricing.one_half
        } else if count == 2.0 {
            cfg.bathroom_pricing.two
        } else {
            0.0
        }
    }

    pub fn get_discount_rate(&self, kind: &str) -> f64 {
        if kind == "friendsAndFamily" {
            self.read().discount_pricing.friends_and_family
        } else {
            0.0
        }
    }

    pub fn get_markup_rate(&self) -> f64 {
        self.read().settings.markup_rate
    }

    /// Snapshot of the full resolved configuration.
    pub fn get_configuration(&self) -> PricingConfiguration {
        self.read().clone()
    }

    fn read(&self) -> RwLockReadGuard<'_, PricingConfiguration> {
        self.config.read().unwrap_or_else(|p| p.into_inner())
    }
}

fn load_initial(blob: &dyn BlobStore) -> PricingConfiguration {
    match blob.get(CONFIG_KEY) {
        Ok(Some(raw)) => match serde_json::from_str(&raw) {
            Ok(cfg) => return cfg,
            Err(e) => warn!("Persisted pricing configuration is malformed, ignoring: {}", e),
        },
        Ok(None) => {}
        Err(e) => warn!("Failed to read pricing configuration: {}", e),
    }

    match blob.get(LEGACY_EDITOR_KEY) {
        Ok(Some(raw)) => match serde_json::from_str(&raw) {
            Ok(doc) => {
                info!("Migrating legacy editor pricing document");
                let cfg = to_anchor_format(&doc);
                persist(blob, &cfg);
                return cfg;
            }
            Err(e) => warn!("Legacy editor document is malformed, ignoring: {}", e),
        },
        Ok(None) => {}
        Err(e) => warn!("Failed to read legacy editor document: {}", e),
    }

    PricingConfiguration::default()
}

fn persist(blob: &dyn BlobStore, cfg: &PricingConfiguration) {
    match serde_json::to_string_pretty(cfg) {
        Ok(raw) => {
            if let Err(e) = blob.put(CONFIG_KEY, &raw) {
                warn!("Failed to persist pricing configuration: {}", e);
            }
        }
        Err(e) => warn!("Failed to serialize pricing configuration: {}", e),
    }
}
