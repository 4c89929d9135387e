pub mod config;
pub mod convert;
pub mod defaults;
pub mod hol;

pub use config::{CustomService, PricingConfiguration};
pub use convert::{default_hol_document, to_anchor_format, to_hol_format};
pub use hol::{HolPriceItem, HolPricingDocument, HolRateItem, HolSettings};
