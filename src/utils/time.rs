use chrono::{DateTime, Duration, NaiveDate, Utc};
use rand::Rng;

use crate::error::{AppError, AppResult};

pub const FIXED_STAY_HOURS: i64 = 2;
pub const MIN_STAY_HOURS: i64 = 1;
pub const MAX_STAY_HOURS: i64 = 10;
pub const SEED_YEAR: i32 = 2023;

/// Issue and end of one parking stay, in epoch seconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stay {
    pub issue_timestamp: i64,
    pub end_timestamp: i64,
    pub hours: i64,
}

/// `(now, now + 2h)`
pub fn fixed_stay(now: DateTime<Utc>) -> Stay {
    Stay {
        issue_timestamp: now.timestamp(),
        end_timestamp: (now + Duration::hours(FIXED_STAY_HOURS)).timestamp(),
        hours: FIXED_STAY_HOURS,
    }
}

/// A stay starting at a random moment of 2023 and lasting 1 to 10 whole hours.
///
/// Days are drawn from 1..=28 so every month accepts them.
pub fn random_stay<R: Rng + ?Sized>(rng: &mut R) -> AppResult<Stay> {
    let month = rng.gen_range(1..=12);
    let day = rng.gen_range(1..=28);
    let hour = rng.gen_range(0..=23);
    let minute = rng.gen_range(0..=59);
    let second = rng.gen_range(0..=59);

    let issued = NaiveDate::from_ymd_opt(SEED_YEAR, month, day)
        .and_then(|date| date.and_hms_opt(hour, minute, second))
        .ok_or_else(|| {
            AppError::Internal(format!(
                "invalid moment {}-{:02}-{:02} {:02}:{:02}:{:02}",
                SEED_YEAR, month, day, hour, minute, second
            ))
        })?
        .and_utc();

    let hours = rng.gen_range(MIN_STAY_HOURS..=MAX_STAY_HOURS);

    Ok(Stay {
        issue_timestamp: issued.timestamp(),
        end_timestamp: (issued + Duration::hours(hours)).timestamp(),
        hours,
    })
}
