/// Area codes at or above this value drop the mobile ninth digit.
pub const FIXED_LINE_DDD_THRESHOLD: u8 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Ddd(u8);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DddRegion {
    /// `ddd < 30`: subscriber numbers carry the leading `9`.
    MobileHeavy,
    /// `ddd >= 30`: a leading `9` on a nine-digit local number is dropped.
    FixedLineHeavy,
}

impl Ddd {
    /// Parses exactly two ASCII digits.
    pub fn parse(raw: &str) -> Option<Self> {
        let bytes = raw.as_bytes();
        if bytes.len() != 2 || !bytes.iter().all(u8::is_ascii_digit) {
            return None;
        }
        raw.parse::<u8>().ok().map(Self)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn region(self) -> DddRegion {
        if self.0 < FIXED_LINE_DDD_THRESHOLD {
            DddRegion::MobileHeavy
        } else {
            DddRegion::FixedLineHeavy
        }
    }
}
