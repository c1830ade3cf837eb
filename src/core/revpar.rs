//! Revenue Per Available Room.
//!
//! RevPAR can be derived two ways: room revenue spread over the available
//! rooms, or ADR weighted by occupancy. Both are pure and only fail on an
//! unusable denominator or an occupancy outside [0, 1]. Negative revenue and
//! ADR are passed through unchanged.

use crate::utils::error::Result;
use crate::utils::validation::{validate_positive_count, validate_unit_interval};

/// RevPAR as `total_room_revenue / available_rooms`.
///
/// # Errors
///
/// `InvalidArgument` when `available_rooms <= 0`.
pub fn compute_revpar_from_revenue(total_room_revenue: f64, available_rooms: i64) -> Result<f64> {
    validate_positive_count("available_rooms", available_rooms)?;

    let revpar = total_room_revenue / available_rooms as f64;
    tracing::debug!(total_room_revenue, available_rooms, revpar, "RevPAR from revenue");
    Ok(revpar)
}

/// RevPAR as `adr * occupancy_rate`.
///
/// # Errors
///
/// `InvalidArgument` when `occupancy_rate` is outside [0, 1] or NaN.
pub fn compute_revpar_from_adr(adr: f64, occupancy_rate: f64) -> Result<f64> {
    validate_unit_interval("occupancy_rate", occupancy_rate)?;

    let revpar = adr * occupancy_rate;
    tracing::debug!(adr, occupancy_rate, revpar, "RevPAR from ADR");
    Ok(revpar)
}
