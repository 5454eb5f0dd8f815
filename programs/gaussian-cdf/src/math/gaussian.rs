// Gaussian CDF over 18-decimal fixed-point inputs: domain validation,
// z-score normalization, and saturation handling.

use crate::error::GaussianError;
use crate::math::erf::{std_normal_cdf, Z_SAT};
use crate::math::fixed_point::{mul_div, Fixed18, MathError, SCALE};

/// Accepted standard deviation range in raw units: [1e-18, 10] in real terms.
pub const MIN_STD_DEV: i128 = 1;
pub const MAX_STD_DEV: i128 = 10_000_000_000_000_000_000; // 1e19

/// Accepted mean range in raw units: [-100, 100] in real terms.
pub const MIN_MEAN: i128 = -100_000_000_000_000_000_000; // -1e20
pub const MAX_MEAN: i128 = 100_000_000_000_000_000_000; // 1e20

// z = (x - mean) / stdDev in raw units. The sigma-scaled comparison runs
// before the widening division, so an |x - mean| past the saturation
// threshold short-circuits instead of producing an unrepresentable z.
fn z_score(x: i128, mean: i128, std_dev: i128) -> Result<i128, MathError> {
    let diff = match x.checked_sub(mean) {
        Some(d) => d,
        // past i128: |z| is far beyond the saturation threshold either way,
        // and the sign of x decides the side
        None => return Ok(if x > 0 { Z_SAT } else { -Z_SAT }),
    };
    let limit = (Z_SAT / SCALE) * std_dev; // 8 sigma in raw units, <= 8e19
    if diff >= limit {
        Ok(Z_SAT)
    } else if diff <= -limit {
        Ok(-Z_SAT)
    } else {
        mul_div(diff, SCALE, std_dev)
    }
}

/// Cumulative distribution function of the normal distribution with the
/// given mean and standard deviation, evaluated at x.
///
/// All three arguments are 18-decimal fixed-point values. The result lies in
/// [0, 1e18] and differs from the true CDF by at most 1e-8 in real terms;
/// `cdf(mean, mean, std_dev)` is exactly one half.
pub fn cdf(x: Fixed18, mean: Fixed18, std_dev: Fixed18) -> Result<Fixed18, GaussianError> {
    if std_dev.0 < MIN_STD_DEV || std_dev.0 > MAX_STD_DEV {
        return Err(GaussianError::InvalidStandardDeviation);
    }
    if mean.0 < MIN_MEAN || mean.0 > MAX_MEAN {
        return Err(GaussianError::InvalidMean);
    }
    let z = z_score(x.0, mean.0, std_dev.0)?;
    Ok(std_normal_cdf(Fixed18(z))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::fixed_point::{HALF, ONE};

    #[test]
    fn test_validation_bounds() {
        let x = Fixed18::ZERO;

        assert_eq!(
            cdf(x, Fixed18::ZERO, Fixed18::ZERO),
            Err(GaussianError::InvalidStandardDeviation)
        );
        assert_eq!(
            cdf(x, Fixed18::ZERO, Fixed18(MAX_STD_DEV + 1)),
            Err(GaussianError::InvalidStandardDeviation)
        );
        assert_eq!(
            cdf(x, Fixed18::ZERO, Fixed18(-1)),
            Err(GaussianError::InvalidStandardDeviation)
        );
        assert_eq!(
            cdf(x, Fixed18(MIN_MEAN - 1), Fixed18::ONE),
            Err(GaussianError::InvalidMean)
        );
        assert_eq!(
            cdf(x, Fixed18(MAX_MEAN + 1), Fixed18::ONE),
            Err(GaussianError::InvalidMean)
        );

        // the bounds themselves are accepted
        assert!(cdf(x, Fixed18::ZERO, Fixed18(MIN_STD_DEV)).is_ok());
        assert!(cdf(x, Fixed18::ZERO, Fixed18(MAX_STD_DEV)).is_ok());
        assert!(cdf(x, Fixed18(MIN_MEAN), Fixed18::ONE).is_ok());
        assert!(cdf(x, Fixed18(MAX_MEAN), Fixed18::ONE).is_ok());
    }

    #[test]
    fn test_half_at_the_mean() {
        for (mean, sd) in [
            (0i128, 1i128),
            (0, SCALE),
            (MAX_MEAN, MAX_STD_DEV),
            (MIN_MEAN, 7 * SCALE),
            (123_456_789, 3),
        ] {
            let v = cdf(Fixed18(mean), Fixed18(mean), Fixed18(sd)).unwrap();
            assert_eq!(v.0, HALF);
        }
    }

    #[test]
    fn test_standard_normal_at_zero() {
        assert_eq!(cdf(Fixed18::ZERO, Fixed18::ZERO, Fixed18::ONE).unwrap().0, HALF);
    }

    #[test]
    fn test_saturation() {
        // |x - mean| at eight sigma and beyond snaps to the exact limits
        let sd = Fixed18::ONE;
        assert_eq!(cdf(Fixed18(8 * SCALE), Fixed18::ZERO, sd).unwrap().0, ONE);
        assert_eq!(cdf(Fixed18(-8 * SCALE), Fixed18::ZERO, sd).unwrap().0, 0);
        assert_eq!(
            cdf(Fixed18(100_000_000_000_000_000_000_000), Fixed18::ZERO, sd)
                .unwrap()
                .0,
            ONE
        );
        assert_eq!(
            cdf(Fixed18(-100_000_000_000_000_000_000_000), Fixed18::ZERO, sd)
                .unwrap()
                .0,
            0
        );
        // extreme x cannot overflow the normalizer
        assert_eq!(cdf(Fixed18(i128::MAX), Fixed18(MIN_MEAN), sd).unwrap().0, ONE);
        assert_eq!(cdf(Fixed18(i128::MIN), Fixed18(MAX_MEAN), sd).unwrap().0, 0);
    }

    #[test]
    fn test_tiny_sigma_lattice() {
        // sd of one raw unit: each raw step of x is one full z unit
        let sd = Fixed18(1);
        assert_eq!(cdf(Fixed18(1), Fixed18::ZERO, sd).unwrap().0, 841_344_746_068_542_908);
        assert_eq!(cdf(Fixed18(-1), Fixed18::ZERO, sd).unwrap().0, 158_655_253_931_457_092);
        assert_eq!(cdf(Fixed18(-7), Fixed18::ZERO, sd).unwrap().0, 1_279_813);
        assert_eq!(cdf(Fixed18(8), Fixed18::ZERO, sd).unwrap().0, ONE);
    }

    #[test]
    fn test_monotonic_in_x() {
        let mean = Fixed18(MAX_MEAN);
        let sd = Fixed18(3 * SCALE);
        let mut prev = -1i128;
        let mut x = mean.0 - 9 * sd.0;
        while x <= mean.0 + 9 * sd.0 {
            let v = cdf(Fixed18(x), mean, sd).unwrap().0;
            assert!(v >= prev, "inversion at x = {}", x);
            prev = v;
            x += sd.0 / 64;
        }
    }

    #[test]
    fn test_symmetry_about_the_mean() {
        let mean = Fixed18(42 * SCALE);
        let sd = Fixed18(5 * SCALE / 2);
        let mut d = 1i128;
        while d < 9 * sd.0 {
            let lo = cdf(Fixed18(mean.0 - d), mean, sd).unwrap().0;
            let hi = cdf(Fixed18(mean.0 + d), mean, sd).unwrap().0;
            assert_eq!(lo + hi, ONE, "symmetry broken at offset {}", d);
            d = d * 5 + 3;
        }
    }
}
