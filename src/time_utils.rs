use crate::domain::market_data::{Bar, Timeframe};
use chrono::{Datelike, Timelike};

/// When a bar earns a vertical gridline on the time axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DelimiterMark {
    /// Minute is zero.
    TopOfHour,
    /// Minute is zero and the hour is even.
    TopOfEvenHour,
    /// Calendar day differs from the chronologically previous bar.
    DayChange,
}

/// What the gridline label shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DelimiterLabel {
    /// `HH:00`
    HourOfDay,
    /// `D Mon`
    DayOfMonth,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DelimiterRule {
    pub mark: DelimiterMark,
    pub label: DelimiterLabel,
}

/// Timeframe -> gridline rule, in one place instead of per call site.
pub fn delimiter_rule(timeframe: Timeframe) -> DelimiterRule {
    match timeframe {
        Timeframe::Min5 => {
            DelimiterRule { mark: DelimiterMark::TopOfHour, label: DelimiterLabel::HourOfDay }
        }
        Timeframe::Min15 => {
            DelimiterRule { mark: DelimiterMark::TopOfEvenHour, label: DelimiterLabel::HourOfDay }
        }
        Timeframe::Min30 | Timeframe::Hour1 => {
            DelimiterRule { mark: DelimiterMark::DayChange, label: DelimiterLabel::DayOfMonth }
        }
    }
}

/// Whether `bar` gets a time delimiter. `older` is the next bar in
/// newest-first order; the oldest bar of a day-change timeframe always
/// delimits.
pub fn should_draw_delimiter(bar: &Bar, older: Option<&Bar>, timeframe: Timeframe) -> bool {
    let datetime = bar.datetime();
    match delimiter_rule(timeframe).mark {
        DelimiterMark::TopOfHour => datetime.minute() == 0,
        DelimiterMark::TopOfEvenHour => datetime.minute() == 0 && datetime.hour() % 2 == 0,
        DelimiterMark::DayChange => {
            older.map_or(true, |older| older.datetime().day() != datetime.day())
        }
    }
}

/// Label text for a delimiter at `bar`.
pub fn delimiter_label(bar: &Bar, timeframe: Timeframe) -> String {
    let datetime = bar.datetime();
    match delimiter_rule(timeframe).label {
        DelimiterLabel::HourOfDay => format!("{:02}:00", datetime.hour()),
        DelimiterLabel::DayOfMonth => format!("{} {}", datetime.day(), datetime.format("%b")),
    }
}
