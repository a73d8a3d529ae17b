//! Empirical travel-time model.

/// Distance unit calibration constant.
pub const PARSEC: f64 = 3_085_659_622.014_257;

/// Light speed calibration constant.
pub const LIGHTSPEED: f64 = 29.979_246;

/// Density used for bodies without a recorded cochrane value.
pub const AVG_COCHRANE_DENSITY: f64 = 1298.737_508;

/// Exponent applied to warp speed in the velocity formula.
const SPEED_EXPONENT: f64 = 3.33;

/// Substitute the average density for an unset (zero) value.
pub fn effective_density(cochranes: f64) -> f64 {
    if cochranes == 0.0 {
        AVG_COCHRANE_DENSITY
    } else {
        cochranes
    }
}

/// Velocity reached at `speed` through space of the given average density.
pub fn velocity(speed: f64, density_a: f64, density_b: f64) -> f64 {
    let average = (effective_density(density_a) + effective_density(density_b)) / 2.0;
    speed.powf(SPEED_EXPONENT) * average * LIGHTSPEED / PARSEC
}

/// Seconds needed to cover `distance` between two bodies at `speed`.
pub fn travel_time(distance: f64, density_a: f64, density_b: f64, speed: f64) -> f64 {
    if distance == 0.0 {
        return 0.0;
    }
    distance / velocity(speed, density_a, density_b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_distance_takes_no_time() {
        assert_eq!(travel_time(0.0, 0.0, 0.0, 0.0), 0.0);
        assert_eq!(travel_time(0.0, 10.0, 20.0, 9.0), 0.0);
    }

    #[test]
    fn unset_density_matches_average_constant() {
        let implicit = travel_time(42.0, 0.0, 0.0, 2.0);
        let explicit = travel_time(42.0, AVG_COCHRANE_DENSITY, AVG_COCHRANE_DENSITY, 2.0);
        assert_eq!(implicit, explicit);
    }

    #[test]
    fn time_follows_formula() {
        let expected_velocity = ((1000.0 + 3000.0) / 2.0) * LIGHTSPEED / PARSEC;
        let time = travel_time(10.0, 1000.0, 3000.0, 1.0);
        assert!((time - 10.0 / expected_velocity).abs() / time < 1e-12);
    }

    #[test]
    fn faster_speed_is_quicker_and_symmetric() {
        let slow = travel_time(100.0, 900.0, 1500.0, 2.0);
        let fast = travel_time(100.0, 1500.0, 900.0, 4.0);
        let reversed = travel_time(100.0, 1500.0, 900.0, 2.0);
        assert!(fast < slow);
        assert_eq!(slow, reversed);
    }
}
