//!
//! Month and weekday names.
//!

/// Persian month names, Farvardin first.
pub const MONTH_NAMES: [&str; 12] = [
    "فروردین",
    "اردیبهشت",
    "خرداد",
    "تیر",
    "مرداد",
    "شهریور",
    "مهر",
    "آبان",
    "آذر",
    "دی",
    "بهمن",
    "اسفند",
];

/// Transliterated month names.
pub const MONTH_NAMES_LATIN: [&str; 12] = [
    "Farvardin",
    "Ordibehesht",
    "Khordad",
    "Tir",
    "Mordad",
    "Shahrivar",
    "Mehr",
    "Aban",
    "Azar",
    "Dey",
    "Bahman",
    "Esfand",
];

/// Persian weekday names, Saturday first.
pub const WEEKDAY_NAMES: [&str; 7] = [
    "شنبه",
    "یکشنبه",
    "دوشنبه",
    "سه‌شنبه",
    "چهارشنبه",
    "پنجشنبه",
    "جمعه",
];

/// Short weekday labels for a calendar header, Saturday first.
pub const WEEKDAY_LABELS: [&str; 7] = ["ش", "ی", "د", "س", "چ", "پ", "ج"];

/// Persian month name for month 1..=12.
pub fn month_name(month: u32) -> Option<&'static str> {
    MONTH_NAMES.get((month as usize).checked_sub(1)?).copied()
}

/// Transliterated month name for month 1..=12.
pub fn month_name_latin(month: u32) -> Option<&'static str> {
    MONTH_NAMES_LATIN.get((month as usize).checked_sub(1)?).copied()
}
