pub mod ddd;
pub mod phone;

pub use ddd::{Ddd, DddRegion, FIXED_LINE_DDD_THRESHOLD};
pub use phone::{
    classify_phone, national_digits, normalize_phone, PhoneOutcome, COUNTRY_CODE,
    COUNTRY_CODE_PREFIX,
};
