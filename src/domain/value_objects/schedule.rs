//! Schedule Value Object
//!
//! When scheduled passes run. Accepts:
//! - the cron crate's 6/7-field syntax (`sec min hour day month dow [year]`)
//! - classic 5-field cron (a `0` seconds field is prepended)
//! - shorthands: `@yearly`, `@monthly`, `@weekly`, `@daily`, `@hourly`
//! - fixed intervals: `@every 30s`, `@every 5m`, `@every 2h`, `@every 1d`
//!
//! Numeric days of the week use classic cron numbering in every form:
//! 0 to 6 starting at Sunday, with 7 also meaning Sunday. Names (`Mon`) pass
//! through unchanged.
//!
//! Cron expressions are evaluated in whatever time zone the caller's
//! `DateTime` carries; the scheduler uses local time, so `@daily` fires at
//! local midnight.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Duration, TimeZone};

use crate::error::{CleanerError, CleanerResult};

/// Index of the day-of-week field once seconds are present
const DAY_OF_WEEK_FIELD: usize = 5;

/// A parsed schedule expression
#[derive(Debug, Clone)]
pub enum Schedule {
    Cron {
        expression: String,
        schedule: cron::Schedule,
    },
    Every {
        expression: String,
        interval: Duration,
    },
}

impl Schedule {
    pub fn parse(expression: &str) -> CleanerResult<Self> {
        let trimmed = expression.trim();
        let invalid = |message: String| CleanerError::InvalidSchedule {
            expression: expression.to_string(),
            message,
        };

        if let Some(rest) = trimmed.strip_prefix("@every") {
            let interval = parse_interval(rest.trim()).map_err(invalid)?;
            return Ok(Self::Every {
                expression: trimmed.to_string(),
                interval,
            });
        }

        let normalized = normalize_cron(trimmed).map_err(invalid)?;
        let schedule =
            cron::Schedule::from_str(&normalized).map_err(|e| invalid(e.to_string()))?;

        Ok(Self::Cron {
            expression: trimmed.to_string(),
            schedule,
        })
    }

    /// The expression as written in the config
    pub fn expression(&self) -> &str {
        match self {
            Self::Cron { expression, .. } | Self::Every { expression, .. } => expression,
        }
    }

    /// First run strictly after `after`, in the same time zone
    pub fn next_after<Tz: TimeZone>(&self, after: &DateTime<Tz>) -> Option<DateTime<Tz>> {
        match self {
            Self::Cron { schedule, .. } => schedule.after(after).next(),
            Self::Every { interval, .. } => after.clone().checked_add_signed(*interval),
        }
    }
}

/// Rewrite an expression into the cron crate's dialect: prepend seconds to
/// 5-field cron and renumber the day-of-week field.
fn normalize_cron(expression: &str) -> Result<String, String> {
    let mut fields: Vec<String> = expression.split_whitespace().map(str::to_string).collect();
    if fields.len() == 5 {
        fields.insert(0, "0".to_string());
    }
    if let Some(day_of_week) = fields.get_mut(DAY_OF_WEEK_FIELD) {
        *day_of_week = classic_day_of_week(day_of_week)?;
    }
    Ok(fields.join(" "))
}

/// Map classic numbering (Sunday = 0 or 7) onto the cron crate's (Sunday = 1).
///
/// Numeric items are expanded into explicit day lists so ranges ending on
/// Sunday (`5-7`) stay valid. `*`, `?`, `*/n` and named days are unchanged.
fn classic_day_of_week(field: &str) -> Result<String, String> {
    let mut days: Vec<String> = Vec::new();
    let mut push = |day: String| {
        if !days.contains(&day) {
            days.push(day);
        }
    };

    for item in field.split(',') {
        if item.starts_with('*') || item == "?" || item.chars().any(|c| c.is_ascii_alphabetic()) {
            push(item.to_string());
            continue;
        }

        let out_of_range = || format!("day of week '{}' must be between 0 and 7", item);
        let day = |s: &str| {
            s.parse::<u32>()
                .ok()
                .filter(|d| *d <= 7)
                .ok_or_else(out_of_range)
        };

        let (range, step) = match item.split_once('/') {
            Some((range, step)) => {
                let step = step
                    .parse::<usize>()
                    .ok()
                    .filter(|s| *s > 0)
                    .ok_or_else(|| format!("day of week step '{}' must be positive", item))?;
                (range, Some(step))
            }
            None => (item, None),
        };
        let (start, end) = match range.split_once('-') {
            Some((start, end)) => (day(start)?, day(end)?),
            // `n/step` runs to Saturday
            None if step.is_some() => (day(range)?, 6),
            None => {
                let d = day(range)?;
                (d, d)
            }
        };
        if start > end {
            return Err(format!("day of week range '{}' is reversed", item));
        }

        for d in (start..=end).step_by(step.unwrap_or(1)) {
            push((d % 7 + 1).to_string());
        }
    }

    Ok(days.join(","))
}

fn parse_interval(s: &str) -> Result<Duration, String> {
    let split = s
        .find(|c: char| !c.is_ascii_digit())
        .ok_or_else(|| format!("interval '{}' needs a unit (s, m, h, d)", s))?;
    let (amount, unit) = s.split_at(split);
    let amount: i64 = amount
        .parse()
        .map_err(|_| format!("interval '{}' needs a positive amount", s))?;
    if amount <= 0 {
        return Err(format!("interval '{}' must be greater than zero", s));
    }
    let duration = match unit.trim() {
        "s" => Duration::try_seconds(amount),
        "m" => Duration::try_minutes(amount),
        "h" => Duration::try_hours(amount),
        "d" => Duration::try_days(amount),
        other => return Err(format!("unknown interval unit '{}'", other)),
    };
    duration.ok_or_else(|| format!("interval '{}' is too large", s))
}

impl FromStr for Schedule {
    type Err = CleanerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Schedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.expression())
    }
}
