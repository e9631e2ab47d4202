use crate::types::SLPoint;

/// Weighted blend `start * (1 - weight) + end * weight` of both coordinates.
///
/// `weight` is not range-checked: values outside [0, 1] extrapolate along the
/// line through the two points.
pub fn interpolate_sl_point(start: &SLPoint, end: &SLPoint, weight: f64) -> SLPoint {
    SLPoint {
        s: start.s * (1.0 - weight) + end.s * weight,
        l: start.l * (1.0 - weight) + end.l * weight,
    }
}
