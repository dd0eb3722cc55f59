use rustfft::num_complex::Complex64;
use std::f64::consts::PI;

/// 자릿수 하나당 각도 간격 (π/10 = 18°)
///
/// 0..9 는 상반원 [0°, 162°] 만 사용한다. 복원은 가장 가까운 간격으로 반올림 후 mod 10.
pub const PHASE_STEP: f64 = PI / 10.0;

/// 자릿수 → 단위원 위의 위상점 `cos(πd/10) + i·sin(πd/10)`
pub fn digit_to_complex(digit: u8) -> Complex64 {
    debug_assert!(digit < 10, "digit out of range: {}", digit);
    let angle = PHASE_STEP * digit as f64;
    Complex64::new(angle.cos(), angle.sin())
}

/// 위상점 → 자릿수. `round(atan2(im, re) / π · 10) mod 10`
pub fn complex_to_digit(c: Complex64) -> u8 {
    let steps = (c.arg() / PI * 10.0).round() as i64;
    steps.rem_euclid(10) as u8
}

/// 가장 가까운 π/10 격자점까지의 각도 거리 (라디안, 최대 π/20)
pub fn phase_residual(c: Complex64) -> f64 {
    let steps = c.arg() / PHASE_STEP;
    (steps - steps.round()).abs() * PHASE_STEP
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const EPSILON: f64 = 1e-12;

    #[test]
    fn test_digits_lie_on_unit_circle() {
        for d in 0..10u8 {
            assert_relative_eq!(digit_to_complex(d).norm(), 1.0, epsilon = EPSILON);
        }
        assert_relative_eq!(digit_to_complex(0).re, 1.0, epsilon = EPSILON);
        assert_relative_eq!(digit_to_complex(5).im, 1.0, epsilon = EPSILON);
    }

    #[test]
    fn test_mapping_is_bijective() {
        let points: Vec<Complex64> = (0..10u8).map(digit_to_complex).collect();
        for i in 0..10 {
            for j in (i + 1)..10 {
                assert!((points[i] - points[j]).norm() > 0.1, "{} and {} collide", i, j);
            }
        }
        for d in 0..10u8 {
            assert_eq!(complex_to_digit(digit_to_complex(d)), d);
            assert!(phase_residual(digit_to_complex(d)) < EPSILON);
        }
    }

    #[test]
    fn test_negative_zero_angle_rounds_to_zero() {
        let c = Complex64::new(1.0, -1e-15);
        assert_eq!(complex_to_digit(c), 0);
    }

    #[test]
    fn test_lower_semicircle_wraps_modulo_ten() {
        // -18° → -1 step → 9
        let c = Complex64::from_polar(1.0, -PHASE_STEP);
        assert_eq!(complex_to_digit(c), 9);
        // 180° → 10 steps → 0
        let c = Complex64::from_polar(1.0, PI);
        assert_eq!(complex_to_digit(c), 0);
    }

    #[test]
    fn test_residual_peaks_between_steps() {
        let c = Complex64::from_polar(1.0, 1.5 * PHASE_STEP);
        assert_relative_eq!(phase_residual(c), PHASE_STEP / 2.0, epsilon = 1e-9);
        let c = Complex64::from_polar(1.0, 3.1 * PHASE_STEP);
        assert_relative_eq!(phase_residual(c), 0.1 * PHASE_STEP, epsilon = 1e-9);
    }
}
