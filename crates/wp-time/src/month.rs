//! `Month`: month of the year.
//!
//! Months are a distinct type so that the 0-indexed convention of browser
//! date APIs and the 1-indexed civil convention cannot be confused:
//! [`Month::from_index`] takes `0..=11`, [`Month::from_number`] takes `1..=12`.

/// `(English, Thai)` month names, January first.
const NAMES: [(&str, &str); 12] = [
    ("January", "มกราคม"),
    ("February", "กุมภาพันธ์"),
    ("March", "มีนาคม"),
    ("April", "เมษายน"),
    ("May", "พฤษภาคม"),
    ("June", "มิถุนายน"),
    ("July", "กรกฎาคม"),
    ("August", "สิงหาคม"),
    ("September", "กันยายน"),
    ("October", "ตุลาคม"),
    ("November", "พฤศจิกายน"),
    ("December", "ธันวาคม"),
];

/// Month of the year; the discriminant is the civil month number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[allow(missing_docs)]
#[repr(u8)]
pub enum Month {
    January = 1,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl Month {
    /// January through December.
    pub const ALL: [Month; 12] = {
        use Month::*;
        [
            January, February, March, April, May, June, July, August, September, October,
            November, December,
        ]
    };

    /// Month from its civil number, 1 = January.
    pub fn from_number(n: u8) -> Option<Self> {
        n.checked_sub(1).and_then(Self::from_index)
    }

    /// Month from a zero-based index, 0 = January.
    pub fn from_index(i: u8) -> Option<Self> {
        Self::ALL.get(usize::from(i)).copied()
    }

    /// Civil month number, 1 = January.
    pub fn number(&self) -> u8 {
        *self as u8
    }

    /// Zero-based index, 0 = January.
    pub fn index(&self) -> u8 {
        self.number() - 1
    }

    /// English name, e.g. `"April"`.
    pub fn long_name(&self) -> &'static str {
        NAMES[usize::from(self.index())].0
    }

    /// First three letters of the English name.
    pub fn short_name(&self) -> &'static str {
        &self.long_name()[..3]
    }

    /// Thai name, e.g. `"เมษายน"`.
    pub fn thai_name(&self) -> &'static str {
        NAMES[usize::from(self.index())].1
    }
}

impl std::fmt::Display for Month {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.long_name())
    }
}

impl From<Month> for u8 {
    fn from(m: Month) -> u8 {
        m.number()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_conventions_agree() {
        for m in Month::ALL {
            assert_eq!(Month::from_number(m.number()), Some(m));
            assert_eq!(Month::from_index(m.index()), Some(m));
            assert_eq!(m.index() + 1, m.number());
        }
        assert_eq!(Month::from_index(0), Month::from_number(1));
    }

    #[test]
    fn out_of_range() {
        assert!(Month::from_number(0).is_none());
        assert!(Month::from_number(13).is_none());
        assert!(Month::from_index(12).is_none());
    }

    #[test]
    fn names() {
        assert_eq!(Month::January.short_name(), "Jan");
        assert_eq!(Month::April.thai_name(), "เมษายน");
        assert_eq!(Month::December.to_string(), "December");
    }
}
