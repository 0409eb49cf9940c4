//! Suitability score: maps a raw accessibility cost onto 0..=100

/// Cost at which a route's score reaches zero
pub const DEFAULT_MAX_COST: f64 = 1000.0;

/// Linear decay from 100 at zero cost to 0 at `max_cost` and beyond.
///
/// A non-finite cost scores 0. A non-positive `max_cost` leaves no room for decay: zero cost scores
/// 100, anything else scores 0.
pub fn normalize_score(cost: f64, max_cost: f64) -> f64 {
    if !cost.is_finite() {
        return 0.0;
    }
    if max_cost.is_nan() || max_cost <= 0.0 {
        return if cost > 0.0 { 0.0 } else { 100.0 };
    }
    (100.0 - (cost / max_cost) * 100.0).clamp(0.0, 100.0)
}
