use crate::domain::ddd::Ddd;
use crate::rules::ninth_digit::apply_ninth_digit;

pub const COUNTRY_CODE: &str = "55";
pub const COUNTRY_CODE_PREFIX: &str = "+55";

const TRUNK_PREFIX: char = '0';
const DDD_LEN: usize = 2;
const MIN_NATIONAL_LEN: usize = 10;
const MAX_NATIONAL_LEN: usize = 11;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhoneOutcome {
    /// Canonical `+55<DDD><local>` form.
    Formatted(String),
    /// The input does not have the shape of a Brazilian national number.
    Rejected,
}

impl PhoneOutcome {
    pub fn is_formatted(&self) -> bool {
        matches!(self, PhoneOutcome::Formatted(_))
    }

    pub fn into_string_or(self, raw: &str) -> String {
        match self {
            PhoneOutcome::Formatted(value) => value,
            PhoneOutcome::Rejected => raw.to_string(),
        }
    }
}

/// Digits of `raw` with one trunk `0` and then one `55` country code removed.
pub fn national_digits(raw: &str) -> String {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    let digits = digits.strip_prefix(TRUNK_PREFIX).unwrap_or(&digits);
    let digits = digits.strip_prefix(COUNTRY_CODE).unwrap_or(digits);
    digits.to_string()
}

pub fn classify_phone(raw: &str) -> PhoneOutcome {
    let digits = national_digits(raw);
    if !(MIN_NATIONAL_LEN..=MAX_NATIONAL_LEN).contains(&digits.len()) {
        return PhoneOutcome::Rejected;
    }

    let (ddd_raw, local) = digits.split_at(DDD_LEN);
    let Some(ddd) = Ddd::parse(ddd_raw) else {
        return PhoneOutcome::Rejected;
    };

    let local = apply_ninth_digit(ddd.region(), local);
    let mut out = String::with_capacity(COUNTRY_CODE_PREFIX.len() + DDD_LEN + local.len());
    out.push_str(COUNTRY_CODE_PREFIX);
    out.push_str(ddd_raw);
    out.push_str(&local);
    PhoneOutcome::Formatted(out)
}

/// Rewrites `raw` as `+55<DDD><local>`, or returns it untouched when it does
/// not look like a Brazilian number.
pub fn normalize_phone(raw: &str) -> String {
    classify_phone(raw).into_string_or(raw)
}
