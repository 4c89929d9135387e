//! Hard defaults for every pricing leaf.
//!
//! These figures are the fallback used whenever a loaded configuration omits
//! a field. The pricing editor overrides them at runtime; changing a number
//! here changes every estimate produced without an override in place.

/// $/sq ft for a detached unit at or above 600 sq ft.
pub fn detached_rate() -> f64 {
    240.0
}

/// $/sq ft for an attached unit at or above 600 sq ft.
pub fn attached_rate() -> f64 {
    240.0
}

/// $/sq ft for a junior ADU (converted space within the main house).
pub fn jadu_rate() -> f64 {
    200.0
}

/// Fallback $/sq ft when the ADU category is unrecognized.
pub fn base_rate() -> f64 {
    240.0
}

/// $/sq ft for units between 400 and 599 sq ft. Small footprints carry the
/// same fixed costs over fewer feet.
pub fn small_unit_premium() -> f64 {
    250.0
}

/// $/sq ft for units under 400 sq ft.
pub fn tiny_unit_premium() -> f64 {
    280.0
}

/// Flat add for 1.5 bathrooms. One bathroom is included in the base rate.
pub fn one_half_bathroom_price() -> f64 {
    4000.0
}

/// Flat add for 2 bathrooms.
pub fn two_bathroom_price() -> f64 {
    8000.0
}

pub fn central_ac_price() -> f64 {
    6000.0
}

pub fn mini_split_price() -> f64 {
    4000.0
}

pub fn water_meter_separate_price() -> f64 {
    3500.0
}

pub fn gas_meter_separate_price() -> f64 {
    3500.0
}

/// Separate electric metering is handled by the utility at no charge.
pub fn electric_meter_separate_price() -> f64 {
    0.0
}

pub fn sewer_connection_price() -> f64 {
    0.0
}

pub fn electrical_panel_price() -> f64 {
    0.0
}

pub fn design_services_price() -> f64 {
    12500.0
}

pub fn solar_ready_price() -> f64 {
    1500.0
}

pub fn fema_compliance_price() -> f64 {
    2000.0
}

pub fn extra_bathroom_price() -> f64 {
    8000.0
}

pub fn dedicated_driveway_price() -> f64 {
    5000.0
}

pub fn basic_landscaping_price() -> f64 {
    10000.0
}

/// Friends-and-family discount as a fraction of the subtotal.
pub fn friends_and_family_rate() -> f64 {
    0.10
}

/// Company markup as a fraction of the subtotal.
pub fn markup_rate() -> f64 {
    0.0
}
