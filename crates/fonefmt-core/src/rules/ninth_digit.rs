use crate::domain::DddRegion;

pub const NINTH_DIGIT: char = '9';

/// Adds or removes the leading mobile digit of a local number.
///
/// The two branches are not symmetric: mobile-heavy regions
/// prepend the digit whenever it is missing (a nine-digit local not starting
/// with `9` grows to ten digits), while fixed-line-heavy regions only strip it
/// from a local that is exactly nine digits long.
pub fn apply_ninth_digit(region: DddRegion, local: &str) -> String {
    match region {
        DddRegion::MobileHeavy => {
            if local.starts_with(NINTH_DIGIT) {
                local.to_string()
            } else {
                let mut out = String::with_capacity(local.len() + 1);
                out.push(NINTH_DIGIT);
                out.push_str(local);
                out
            }
        }
        DddRegion::FixedLineHeavy => {
            if local.len() == 9 && local.starts_with(NINTH_DIGIT) {
                local[1..].to_string()
            } else {
                local.to_string()
            }
        }
    }
}
