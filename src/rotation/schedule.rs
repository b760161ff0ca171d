//! When to rotate and what the next file is called.

use crate::fmt;
use crate::level;
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, TimeZone};

/// A validated hour/minute/second.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeOfDay {
    time: NaiveTime,
}

fn check(field: &'static str, value: u32, max: u32) -> Result<(), crate::Error> {
    if value > max {
        return Err(crate::Error::TimeRange { field, value, max });
    }
    Ok(())
}

impl TimeOfDay {
    /// # Errors
    /// [`crate::Error::TimeRange`] naming the first out-of-range field.
    pub fn new(hour: u32, minute: u32, second: u32) -> Result<Self, crate::Error> {
        check("hour", hour, 23)?;
        check("minute", minute, 59)?;
        check("second", second, 59)?;
        let seconds = i64::from(hour * 3600 + minute * 60 + second);
        Ok(Self {
            time: NaiveTime::MIN + TimeDelta::seconds(seconds),
        })
    }

    #[must_use]
    pub const fn midnight() -> Self {
        Self {
            time: NaiveTime::MIN,
        }
    }

    #[must_use]
    pub const fn as_naive(self) -> NaiveTime {
        self.time
    }
}

impl Default for TimeOfDay {
    fn default() -> Self {
        Self::midnight()
    }
}

/// Resolves a wall-clock date and time in the local zone.
///
/// Ambiguous times (clocks going back) take the earlier instant. Times inside a
/// spring-forward gap move forward until they exist.
fn at_local(date: NaiveDate, time: NaiveTime) -> DateTime<Local> {
    let mut naive: NaiveDateTime = date.and_time(time);
    for _ in 0..4 {
        if let Some(resolved) = Local.from_local_datetime(&naive).earliest() {
            return resolved;
        }
        naive += TimeDelta::minutes(30);
    }
    Local.from_utc_datetime(&naive)
}

/// Time of day plus the file-name template rendered at each rotation.
#[derive(Debug, Clone)]
pub struct RotationSchedule {
    at: TimeOfDay,
    path_template: String,
}

impl RotationSchedule {
    #[must_use]
    pub fn new(path_template: impl Into<String>, at: TimeOfDay) -> Self {
        Self {
            at,
            path_template: path_template.into(),
        }
    }

    #[must_use]
    pub const fn at(&self) -> TimeOfDay {
        self.at
    }

    #[must_use]
    pub fn path_template(&self) -> &str {
        &self.path_template
    }

    /// Next occurrence of the time of day strictly after `now`: today if still ahead,
    /// otherwise tomorrow.
    #[must_use]
    pub fn first_deadline(&self, now: DateTime<Local>) -> DateTime<Local> {
        let today = at_local(now.date_naive(), self.at.time);
        if today > now {
            today
        } else {
            self.following(today)
        }
    }

    /// One calendar day after `deadline`, at the configured time.
    #[must_use]
    pub fn following(&self, deadline: DateTime<Local>) -> DateTime<Local> {
        let date = deadline.date_naive();
        let next = date.succ_opt().unwrap_or(date);
        at_local(next, self.at.time)
    }

    /// Deadline after a rotation at `now`. Advances one day from the old deadline, skipping
    /// ahead if the process slept through more than one.
    #[must_use]
    pub fn advance(&self, deadline: DateTime<Local>, now: DateTime<Local>) -> DateTime<Local> {
        let next = self.following(deadline);
        if next > now {
            next
        } else {
            self.first_deadline(now)
        }
    }

    /// The file name for a file opened at `now`.
    #[must_use]
    pub fn render_path(&self, now: DateTime<Local>) -> String {
        fmt::render_path(&self.path_template, level::logging_level(), now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn local(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Local> {
        Local
            .with_ymd_and_hms(y, mo, d, h, mi, s)
            .earliest()
            .expect("valid local time")
    }

    #[test]
    fn out_of_range_fields_are_rejected() {
        assert!(matches!(
            TimeOfDay::new(24, 0, 0),
            Err(crate::Error::TimeRange { field: "hour", .. })
        ));
        assert!(matches!(
            TimeOfDay::new(0, 60, 0),
            Err(crate::Error::TimeRange { field: "minute", .. })
        ));
        assert!(matches!(
            TimeOfDay::new(0, 0, 60),
            Err(crate::Error::TimeRange { field: "second", .. })
        ));
        assert!(TimeOfDay::new(23, 59, 59).is_ok());
    }

    #[test]
    fn fields_map_to_wall_clock_time() {
        assert_eq!(
            TimeOfDay::new(6, 30, 15).unwrap().as_naive(),
            NaiveTime::from_hms_opt(6, 30, 15).unwrap()
        );
        assert_eq!(
            TimeOfDay::new(23, 59, 59).unwrap().as_naive(),
            NaiveTime::from_hms_opt(23, 59, 59).unwrap()
        );
        assert_eq!(TimeOfDay::new(0, 0, 0).unwrap(), TimeOfDay::midnight());
    }

    #[test]
    fn first_deadline_today_when_ahead() {
        let schedule = RotationSchedule::new("x.log", TimeOfDay::new(12, 0, 0).unwrap());
        assert_eq!(
            schedule.first_deadline(local(2026, 5, 10, 9, 0, 0)),
            local(2026, 5, 10, 12, 0, 0)
        );
    }

    #[test]
    fn first_deadline_tomorrow_when_passed() {
        let schedule = RotationSchedule::new("x.log", TimeOfDay::new(12, 0, 0).unwrap());
        assert_eq!(
            schedule.first_deadline(local(2026, 5, 10, 12, 0, 0)),
            local(2026, 5, 11, 12, 0, 0)
        );
    }

    #[test]
    fn following_crosses_month_end() {
        let schedule = RotationSchedule::new("x.log", TimeOfDay::midnight());
        assert_eq!(
            schedule.following(local(2026, 1, 31, 0, 0, 0)),
            local(2026, 2, 1, 0, 0, 0)
        );
    }

    #[test]
    fn advance_skips_missed_days() {
        let schedule = RotationSchedule::new("x.log", TimeOfDay::midnight());
        let deadline = local(2026, 1, 1, 0, 0, 0);
        assert_eq!(
            schedule.advance(deadline, local(2026, 1, 4, 8, 0, 0)),
            local(2026, 1, 5, 0, 0, 0)
        );
    }
}
