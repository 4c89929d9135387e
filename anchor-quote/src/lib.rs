pub mod generator;
pub mod models;

pub use generator::EstimateGenerator;
pub use models::{Estimate, EstimateItem, ItemCategory};
