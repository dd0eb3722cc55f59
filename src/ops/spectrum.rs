use rustfft::{num_complex::Complex64, FftPlanner};

/// 순방향 DFT `X_k = Σ x_j · e^{-2πi jk/n}` (정규화 없음)
pub fn forward(input: &[Complex64]) -> Vec<Complex64> {
    let mut buffer = input.to_vec();
    if buffer.is_empty() {
        return buffer;
    }
    let fft = FftPlanner::<f64>::new().plan_fft_forward(buffer.len());
    fft.process(&mut buffer);
    buffer
}

/// 역 DFT, 1/n 정규화 포함 (`forward` 의 정확한 역)
pub fn inverse(input: &[Complex64]) -> Vec<Complex64> {
    let mut buffer = input.to_vec();
    if buffer.is_empty() {
        return buffer;
    }
    let n = buffer.len();
    let ifft = FftPlanner::<f64>::new().plan_fft_inverse(n);
    ifft.process(&mut buffer);
    let scale = 1.0 / n as f64;
    for c in buffer.iter_mut() {
        *c *= scale;
    }
    buffer
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::PI;

    const EPSILON: f64 = 1e-9;

    fn naive_dft(input: &[Complex64]) -> Vec<Complex64> {
        let n = input.len();
        (0..n)
            .map(|k| {
                input
                    .iter()
                    .enumerate()
                    .map(|(j, x)| {
                        let angle = -2.0 * PI * (j * k) as f64 / n as f64;
                        x * Complex64::from_polar(1.0, angle)
                    })
                    .sum::<Complex64>()
            })
            .collect()
    }

    fn sample(n: usize) -> Vec<Complex64> {
        (0..n)
            .map(|i| Complex64::new((i as f64 * 0.7).sin(), (i as f64 * 1.3).cos()))
            .collect()
    }

    #[test]
    fn test_forward_matches_naive_dft() {
        // 2의 거듭제곱이 아닌 길이 포함
        for n in [1, 2, 3, 5, 8, 13, 64] {
            let x = sample(n);
            let fast = forward(&x);
            let slow = naive_dft(&x);
            for (a, b) in fast.iter().zip(slow.iter()) {
                assert_abs_diff_eq!(a.re, b.re, epsilon = EPSILON);
                assert_abs_diff_eq!(a.im, b.im, epsilon = EPSILON);
            }
        }
    }

    #[test]
    fn test_inverse_undoes_forward() {
        let x = sample(37);
        let restored = inverse(&forward(&x));
        for (a, b) in x.iter().zip(restored.iter()) {
            assert_abs_diff_eq!(a.re, b.re, epsilon = EPSILON);
            assert_abs_diff_eq!(a.im, b.im, epsilon = EPSILON);
        }
    }

    #[test]
    fn test_single_point_is_identity() {
        let x = [Complex64::new(0.3, 0.4)];
        assert_eq!(forward(&x), x.to_vec());
        assert_eq!(inverse(&x), x.to_vec());
    }

    #[test]
    fn test_empty_input() {
        assert!(forward(&[]).is_empty());
        assert!(inverse(&[]).is_empty());
    }
}
