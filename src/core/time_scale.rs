use chrono::{Datelike, Days, Months, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::core::primitives::{date_to_day_number, day_number_to_date};
use crate::core::scale::{LinearScale, tick_step};
use crate::error::ChartResult;

/// Narrowest time domain, in days, a scale is allowed to collapse to.
pub const TIME_MIN_SPAN_DAYS: f64 = 1.0;

/// Calendar cadence used to place time-axis ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeTickInterval {
    /// Days of month `1, 1 + k, 1 + 2k, ...`.
    Days(u32),
    /// Sundays.
    Weeks,
    /// First day of months whose zero-based index is a multiple of `k`.
    Months(u32),
    /// January 1st of years that are a multiple of `k`.
    Years(u32),
}

const TICK_INTERVAL_LADDER: [TimeTickInterval; 6] = [
    TimeTickInterval::Days(1),
    TimeTickInterval::Days(2),
    TimeTickInterval::Weeks,
    TimeTickInterval::Months(1),
    TimeTickInterval::Months(3),
    TimeTickInterval::Years(1),
];

const DAYS_PER_YEAR: f64 = 365.0;

impl TimeTickInterval {
    #[must_use]
    pub fn approx_days(self) -> f64 {
        match self {
            Self::Days(k) => f64::from(k),
            Self::Weeks => 7.0,
            Self::Months(k) => 30.0 * f64::from(k),
            Self::Years(k) => DAYS_PER_YEAR * f64::from(k),
        }
    }

    #[must_use]
    pub fn contains(self, date: NaiveDate) -> bool {
        match self {
            Self::Days(k) => date.day0() % k.max(1) == 0,
            Self::Weeks => date.weekday() == Weekday::Sun,
            Self::Months(k) => date.day() == 1 && date.month0() % k.max(1) == 0,
            Self::Years(k) => {
                date.ordinal() == 1 && date.year().rem_euclid(k.max(1) as i32) == 0
            }
        }
    }

    /// Earliest tick date on or after `date`.
    #[must_use]
    pub fn first_on_or_after(self, date: NaiveDate) -> Option<NaiveDate> {
        if self.contains(date) {
            return Some(date);
        }
        match self {
            Self::Days(k) => {
                let k = k.max(1);
                let day0 = date.day0().div_ceil(k) * k;
                date.with_day(day0 + 1)
                    .or_else(|| first_of_next_month(date))
            }
            Self::Weeks => {
                let ahead = 7 - date.weekday().num_days_from_sunday();
                date.checked_add_days(Days::new(u64::from(ahead)))
            }
            Self::Months(k) => {
                let k = k.max(1);
                let month = first_of_next_month(date)?;
                let skip = (k - month.month0() % k) % k;
                month.checked_add_months(Months::new(skip))
            }
            Self::Years(k) => {
                let k = i32::try_from(k.max(1)).ok()?;
                let year = date.year().checked_add(1)?;
                let aligned = year.checked_add((k - year.rem_euclid(k)) % k)?;
                NaiveDate::from_ymd_opt(aligned, 1, 1)
            }
        }
    }

    /// Tick date following `date`.
    #[must_use]
    pub fn next_after(self, date: NaiveDate) -> Option<NaiveDate> {
        self.first_on_or_after(date.succ_opt()?)
    }

    /// Picks the ladder entry closest (by ratio) to `span_days / count`.
    #[must_use]
    pub fn for_span(start_day: f64, end_day: f64, count: usize) -> Self {
        let span = (end_day - start_day).abs();
        let target = span / count.max(1) as f64;
        let index = TICK_INTERVAL_LADDER
            .iter()
            .position(|interval| interval.approx_days() > target)
            .unwrap_or(TICK_INTERVAL_LADDER.len());

        if index == 0 {
            return TICK_INTERVAL_LADDER[0];
        }
        if index == TICK_INTERVAL_LADDER.len() {
            let years = tick_step(
                start_day / DAYS_PER_YEAR,
                end_day / DAYS_PER_YEAR,
                count.max(1),
            )
            .abs()
            .round()
            .max(1.0);
            return Self::Years(years as u32);
        }

        let below = TICK_INTERVAL_LADDER[index - 1];
        let above = TICK_INTERVAL_LADDER[index];
        if target / below.approx_days() < above.approx_days() / target {
            below
        } else {
            above
        }
    }
}

/// Formats a time tick at the coarsest granularity it starts:
/// year on Jan 1st, month name on the 1st, `Mon DD` on Sundays, else `Wkd DD`.
#[must_use]
pub fn format_time_tick(date: NaiveDate) -> String {
    let pattern = if date.ordinal() == 1 {
        "%Y"
    } else if date.day() == 1 {
        "%B"
    } else if date.weekday() == Weekday::Sun {
        "%b %d"
    } else {
        "%a %d"
    };
    date.format(pattern).to_string()
}

/// Horizontal axis mapping calendar dates linearly onto pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeScale {
    scale: LinearScale,
}

impl TimeScale {
    pub fn new(start: NaiveDate, end: NaiveDate, range: (f64, f64)) -> ChartResult<Self> {
        let scale = LinearScale::with_min_span(
            (date_to_day_number(start), date_to_day_number(end)),
            range,
            TIME_MIN_SPAN_DAYS,
        )?;
        Ok(Self { scale })
    }

    #[must_use]
    pub fn date_to_pixel(self, date: NaiveDate) -> f64 {
        self.scale.map(date_to_day_number(date))
    }

    /// Nearest calendar day under a pixel.
    #[must_use]
    pub fn pixel_to_date(self, pixel: f64) -> Option<NaiveDate> {
        day_number_to_date(self.scale.invert(pixel).round())
    }

    /// Domain as continuous day numbers (see [`date_to_day_number`]).
    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        self.scale.domain()
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        self.scale.range()
    }

    #[must_use]
    pub fn tick_interval(self, count: usize) -> TimeTickInterval {
        let (start, end) = self.domain();
        TimeTickInterval::for_span(start, end, count)
    }

    #[must_use]
    pub fn ticks(self, count: usize) -> Vec<NaiveDate> {
        if count == 0 {
            return Vec::new();
        }
        let interval = self.tick_interval(count);
        let (start, end) = self.domain();
        let (Some(first), Some(last)) = (
            day_number_to_date(start.ceil()),
            day_number_to_date(end.floor()),
        ) else {
            return Vec::new();
        };

        let mut ticks = Vec::new();
        let mut cursor = interval.first_on_or_after(first);
        while let Some(date) = cursor {
            if date > last {
                break;
            }
            ticks.push(date);
            cursor = interval.next_after(date);
        }
        ticks
    }
}

fn first_of_next_month(date: NaiveDate) -> Option<NaiveDate> {
    date.with_day(1)?.checked_add_months(Months::new(1))
}

#[cfg(test)]
mod tests {
    use super::{TimeScale, TimeTickInterval, format_time_tick};
    use chrono::{Datelike, NaiveDate};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("date")
    }

    #[test]
    fn month_of_daily_data_ticks_weekly() {
        let scale =
            TimeScale::new(date(2024, 1, 2), date(2024, 2, 13), (60.0, 940.0)).expect("scale");
        assert_eq!(scale.tick_interval(6), TimeTickInterval::Weeks);
        let ticks = scale.ticks(6);
        assert_eq!(ticks.first(), Some(&date(2024, 1, 7)));
        assert!(ticks.iter().all(|d| format_time_tick(*d).len() >= 4));
    }

    #[test]
    fn short_span_ticks_every_day() {
        let scale =
            TimeScale::new(date(2024, 1, 1), date(2024, 1, 4), (60.0, 940.0)).expect("scale");
        assert_eq!(scale.tick_interval(6), TimeTickInterval::Days(1));
        assert_eq!(scale.ticks(6).len(), 4);
    }

    #[test]
    fn ticks_step_by_interval_across_month_ends() {
        let scale =
            TimeScale::new(date(2024, 1, 27), date(2024, 2, 6), (60.0, 940.0)).expect("scale");
        assert_eq!(scale.tick_interval(6), TimeTickInterval::Days(2));
        assert_eq!(
            scale.ticks(6),
            vec![
                date(2024, 1, 27),
                date(2024, 1, 29),
                date(2024, 1, 31),
                date(2024, 2, 1),
                date(2024, 2, 3),
                date(2024, 2, 5),
            ]
        );
    }

    #[test]
    fn quarterly_ticks_land_on_quarter_starts() {
        let interval = TimeTickInterval::Months(3);
        assert_eq!(
            interval.first_on_or_after(date(2024, 2, 10)),
            Some(date(2024, 4, 1))
        );
        assert_eq!(interval.next_after(date(2024, 10, 1)), Some(date(2025, 1, 1)));
    }

    #[test]
    fn millennia_wide_domain_yields_few_ticks() {
        let scale =
            TimeScale::new(date(-200_000, 1, 1), date(200_000, 1, 1), (60.0, 940.0))
                .expect("scale");
        let TimeTickInterval::Years(step) = scale.tick_interval(6) else {
            panic!("expected a yearly interval");
        };
        let ticks = scale.ticks(6);
        assert!(!ticks.is_empty() && ticks.len() <= 12, "{} ticks", ticks.len());
        assert!(ticks.iter().all(|d| d.ordinal() == 1 && d.year() % step as i32 == 0));
    }

    #[test]
    fn tick_labels_use_coarsest_boundary() {
        assert_eq!(format_time_tick(date(2024, 1, 1)), "2024");
        assert_eq!(format_time_tick(date(2024, 3, 1)), "March");
        assert_eq!(format_time_tick(date(2024, 3, 3)), "Mar 03");
        assert_eq!(format_time_tick(date(2024, 3, 5)), "Tue 05");
    }

    #[test]
    fn single_day_domain_maps_to_center() {
        let day = date(2024, 5, 6);
        let scale = TimeScale::new(day, day, (60.0, 940.0)).expect("scale");
        assert_eq!(scale.date_to_pixel(day), 500.0);
        assert_eq!(scale.pixel_to_date(500.0), Some(day));
        assert_eq!(scale.ticks(6), vec![day]);
    }
}
