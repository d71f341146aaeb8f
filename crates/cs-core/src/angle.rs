//! Angle unit conversions for floating-point types.

use num_traits::{Float, FloatConst, NumCast};

/// Degree/radian conversions for `f32` and `f64`.
///
/// The method names carry an `_angle` suffix so they do not shadow the
/// inherent `to_degrees`/`to_radians` on the primitive float types.
pub trait AngleExt: Sized {
    /// Interpret `self` as radians and return degrees.
    fn to_degrees_angle(self) -> Self;

    /// Interpret `self` as degrees and return radians.
    fn to_radians_angle(self) -> Self;
}

impl<T: Float + FloatConst> AngleExt for T {
    fn to_degrees_angle(self) -> Self {
        self * half_turn::<T>() / T::PI()
    }

    fn to_radians_angle(self) -> Self {
        self / half_turn::<T>() * T::PI()
    }
}

fn half_turn<T: Float>() -> T {
    // 180 is exactly representable in every IEEE float width.
    <T as NumCast>::from(180.0).unwrap_or_else(T::nan)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn half_turn_is_exact() {
        assert_eq!(half_turn::<f32>(), 180.0);
        assert_eq!(half_turn::<f64>(), 180.0);
    }

    #[test]
    fn f32_degrees_truncate() {
        let degrees = 10.5_f32.to_degrees_angle();
        assert_eq!(degrees.trunc(), 601.0);
    }

    #[test]
    fn f32_radians_truncate() {
        let radians = 600.5_f32.to_radians_angle();
        assert_eq!(radians.trunc(), 10.0);
    }

    #[test]
    fn f64_known_angles() {
        assert_relative_eq!(std::f64::consts::PI.to_degrees_angle(), 180.0);
        assert_relative_eq!(90.0_f64.to_radians_angle(), std::f64::consts::FRAC_PI_2);
        assert_relative_eq!(0.0_f64.to_radians_angle(), 0.0);
    }

    #[test]
    fn round_trip_is_close() {
        for deg in [-720.0_f64, -45.0, 1.0, 33.3, 359.9] {
            assert_relative_eq!(deg.to_radians_angle().to_degrees_angle(), deg, epsilon = 1e-9);
        }
    }
}
