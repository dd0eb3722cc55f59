pub mod digits;
pub mod phase;
pub mod spectrum;

pub use self::digits::DigitSplit;
pub use self::phase::{complex_to_digit, digit_to_complex, phase_residual, PHASE_STEP};
