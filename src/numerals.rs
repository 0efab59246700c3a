//!
//! Digit conversion between latin, persian and arabic-indic numerals.
//!
//! Only the digits are replaced, everything else is passed through.
//!

#[cfg(feature = "serde")]
use serde_derive::{Deserialize, Serialize};

const PERSIAN_ZERO: u32 = '۰' as u32;
const ARABIC_INDIC_ZERO: u32 = '٠' as u32;

/// Numeral system for rendering digits.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Numerals {
    /// 0123456789
    #[default]
    Latin,
    /// ۰۱۲۳۴۵۶۷۸۹
    Persian,
    /// ٠١٢٣٤٥٦٧٨٩
    ArabicIndic,
}

impl Numerals {
    /// Replace all digits with the digits of this numeral system.
    pub fn apply(&self, s: &str) -> String {
        match self {
            Numerals::Latin => to_latin(s),
            Numerals::Persian => to_persian(s),
            Numerals::ArabicIndic => to_arabic_indic(s),
        }
    }
}

/// Digit value of any of the supported numerals.
pub fn digit_value(c: char) -> Option<u32> {
    if c.is_ascii_digit() {
        Some(c as u32 - '0' as u32)
    } else if ('۰'..='۹').contains(&c) {
        Some(c as u32 - PERSIAN_ZERO)
    } else if ('٠'..='٩').contains(&c) {
        Some(c as u32 - ARABIC_INDIC_ZERO)
    } else {
        None
    }
}

fn map_digits(s: &str, zero: u32) -> String {
    s.chars()
        .map(|c| match digit_value(c) {
            Some(v) => char::from_u32(zero + v).unwrap_or(c),
            None => c,
        })
        .collect()
}

/// Persian digits.
pub fn to_persian(s: &str) -> String {
    map_digits(s, PERSIAN_ZERO)
}

/// Arabic-indic digits.
pub fn to_arabic_indic(s: &str) -> String {
    map_digits(s, ARABIC_INDIC_ZERO)
}

/// Latin digits.
pub fn to_latin(s: &str) -> String {
    map_digits(s, '0' as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits() {
        assert_eq!(to_persian("1403/01/05"), "۱۴۰۳/۰۱/۰۵");
        assert_eq!(to_arabic_indic("29"), "٢٩");
        assert_eq!(to_latin("۱۴۰۳-٠١-05"), "1403-01-05");
        assert_eq!(to_persian("1شنبه"), "۱شنبه");
        assert_eq!(Numerals::Latin.apply("۷"), "7");
        assert_eq!(digit_value('x'), None);
    }
}
