#![allow(dead_code, unreachable_pub)]

use rat_jalali::calendar::JalaliDate;
use std::sync::Once;

/// Log to stderr, shown for failing tests.
pub fn setup_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        _ = fern::Dispatch::new()
            .format(|out, message, record| {
                out.finish(format_args!("[{}] {}", record.level(), message))
            })
            .level(log::LevelFilter::Debug)
            .chain(std::io::stderr())
            .apply();
    });
}

/// Shortcut for a date known to be valid.
pub fn jd(year: i32, month: u32, day: u32) -> JalaliDate {
    JalaliDate::new(year, month, day).unwrap()
}
