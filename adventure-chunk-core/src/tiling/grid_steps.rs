use super::KM_PER_DEGREE_LATITUDE;

/// chunk dimensions in degrees for a given chunk size and reference latitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridSteps {
    pub lat_step: f64,
    pub lon_step: f64,
}

impl GridSteps {
    /// converts a chunk edge length in kilometers into degree steps. returns
    /// None when either step would not be a positive finite number, which
    /// would otherwise stall the grid walk.
    pub fn new(chunk_size_km: f64, center_latitude: f64) -> Option<GridSteps> {
        let lat_step = chunk_size_km / KM_PER_DEGREE_LATITUDE;
        let km_per_degree_lon = KM_PER_DEGREE_LATITUDE * center_latitude.to_radians().cos();
        let lon_step = chunk_size_km / km_per_degree_lon;
        if is_valid_step(lat_step) && is_valid_step(lon_step) {
            Some(GridSteps { lat_step, lon_step })
        } else {
            None
        }
    }
}

/// number of steps walked from `min` while the cell origin is still below `max`.
pub(crate) fn steps_between(min: f64, max: f64, step: f64) -> usize {
    if !(min < max) {
        return 0;
    }
    let mut n = ((max - min) / step).ceil() as usize;
    while n > 0 && min + ((n - 1) as f64) * step >= max {
        n -= 1;
    }
    while min + (n as f64) * step < max {
        n += 1;
    }
    n
}

/// true when adding `step` to any coordinate in `[min, max + step]` yields a
/// larger value, so every grid cell keeps a non-zero extent.
pub(crate) fn resolves(min: f64, max: f64, step: f64) -> bool {
    let magnitude = min.abs().max(max.abs()) + step;
    step > magnitude * f64::EPSILON
}

fn is_valid_step(step: f64) -> bool {
    step.is_finite() && step > 0.0
}
