//!
//! Prints one month as weekly pages.
//!
//! ```text
//! cargo run --example month -- 1403/04
//! ```
//!

use rat_jalali::calendar::names::WEEKDAY_LABELS;
use rat_jalali::calendar::selection::RangeSelection;
use rat_jalali::calendar::{DayCell, DayKind, JalaliDate, MonthView};
use rat_jalali::format::DateFormat;
use rat_jalali::numerals::Numerals;
use std::fs;
use std::path::PathBuf;

fn main() -> Result<(), anyhow::Error> {
    setup_logging()?;

    let view = match std::env::args().nth(1) {
        Some(arg) => {
            let date: JalaliDate = format!("{}/01", arg).parse()?;
            MonthView::new(date)
        }
        None => MonthView::today()?,
    };
    let today = JalaliDate::today()?;

    // highlight the first week, like a range picked with two clicks.
    let mut selection = RangeSelection::new();
    selection.pick(view.start_date(), true);
    selection.pick(view.start_date().add_days(6)?, true);

    let fmt = DateFormat::persian();
    println!(
        "{} {}",
        view.start_date().month_name(),
        fmt.format_number(view.year())
    );
    println!(
        "{}",
        WEEKDAY_LABELS
            .iter()
            .map(|v| format!("{:>3}", v))
            .collect::<String>()
    );

    let grid = view.grid();
    for (page, week) in grid.pages().iter().enumerate() {
        let mut line = String::new();
        for (column, cell) in week.iter().enumerate() {
            match cell {
                DayCell::Empty => line.push_str("   "),
                DayCell::Day(day) => {
                    let date = grid.date_at(page, column).expect("day cell");
                    let mark = if date == today {
                        '*'
                    } else {
                        match selection.classify(date) {
                            DayKind::Start => '[',
                            DayKind::End => ']',
                            DayKind::Between => '-',
                            DayKind::None => ' ',
                        }
                    };
                    line.push(mark);
                    line.push_str(&format!("{:>2}", Numerals::Persian.apply(&day.to_string())));
                }
            }
        }
        println!("{}", line);
    }

    Ok(())
}

fn setup_logging() -> Result<(), anyhow::Error> {
    let log = PathBuf::from("month.log");
    if log.exists() {
        fs::remove_file(&log)?;
    }
    fern::Dispatch::new()
        .format(|out, message, _record| out.finish(format_args!("{}", message)))
        .level(log::LevelFilter::Debug)
        .chain(fern::log_file(&log)?)
        .apply()?;
    Ok(())
}
