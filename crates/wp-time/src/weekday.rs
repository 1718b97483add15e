//! `Weekday`: day of the week, with Thai names.

/// Day of the week, Monday first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[allow(missing_docs)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

/// `(English, Thai)` names, Monday first.  Thai names carry the usual
/// "วัน" prefix.
const NAMES: [(&str, &str); 7] = [
    ("Monday", "วันจันทร์"),
    ("Tuesday", "วันอังคาร"),
    ("Wednesday", "วันพุธ"),
    ("Thursday", "วันพฤหัสบดี"),
    ("Friday", "วันศุกร์"),
    ("Saturday", "วันเสาร์"),
    ("Sunday", "วันอาทิตย์"),
];

impl Weekday {
    /// ISO day number, 1 (Monday) to 7 (Sunday).
    pub fn iso_number(&self) -> u8 {
        *self as u8 + 1
    }

    /// Thai name.
    pub fn thai_name(&self) -> &'static str {
        NAMES[*self as usize].1
    }
}

impl From<chrono::Weekday> for Weekday {
    fn from(day: chrono::Weekday) -> Self {
        match day {
            chrono::Weekday::Mon => Weekday::Monday,
            chrono::Weekday::Tue => Weekday::Tuesday,
            chrono::Weekday::Wed => Weekday::Wednesday,
            chrono::Weekday::Thu => Weekday::Thursday,
            chrono::Weekday::Fri => Weekday::Friday,
            chrono::Weekday::Sat => Weekday::Saturday,
            chrono::Weekday::Sun => Weekday::Sunday,
        }
    }
}

impl std::fmt::Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(NAMES[*self as usize].0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_line_up() {
        assert_eq!(Weekday::Monday.to_string(), "Monday");
        assert_eq!(Weekday::Sunday.thai_name(), "วันอาทิตย์");
        assert_eq!(Weekday::from(chrono::Weekday::Thu).iso_number(), 4);
    }
}
