pub mod ninth_digit;

pub use ninth_digit::{apply_ninth_digit, NINTH_DIGIT};
