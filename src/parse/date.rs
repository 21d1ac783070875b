use std::sync::LazyLock;

use chrono::{DateTime, Datelike, Days, TimeDelta, TimeZone, Weekday};
use regex::Regex;

/// Hour of day (local) that named-day due dates are pinned to
pub const NAMED_DAY_HOUR: u32 = 18;

/// Matches relative offsets: `30m`, `2h`, `3d`
static RELATIVE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)([mhd])$").unwrap());

/// Resolve a due-directive value against `now`.
///
/// Relative offsets (`15m`, `2h`, `3d`) are added to `now`, with day offsets
/// keeping the local time of day across month/year boundaries. Named days
/// (`today`, `tom`/`tomorrow`, `mon`..`sun`) land at 18:00 local time; a
/// weekday always means the next one strictly after today.
pub fn resolve_due<Tz: TimeZone>(token: &str, now: &DateTime<Tz>) -> Option<DateTime<Tz>> {
    let token = token.to_lowercase();

    if let Some(caps) = RELATIVE_REGEX.captures(&token) {
        let n: u64 = caps[1].parse().ok()?;
        return add_offset(now, n, &caps[2]);
    }

    let offset = named_day_offset(&token, now.weekday())?;
    let date = now.date_naive().checked_add_days(Days::new(offset))?;
    let at = date.and_hms_opt(NAMED_DAY_HOUR, 0, 0)?;
    now.timezone().from_local_datetime(&at).earliest()
}

fn add_offset<Tz: TimeZone>(now: &DateTime<Tz>, n: u64, unit: &str) -> Option<DateTime<Tz>> {
    match unit {
        "m" => now
            .clone()
            .checked_add_signed(TimeDelta::try_minutes(i64::try_from(n).ok()?)?),
        "h" => now
            .clone()
            .checked_add_signed(TimeDelta::try_hours(i64::try_from(n).ok()?)?),
        "d" => now.clone().checked_add_days(Days::new(n)),
        _ => None,
    }
}

/// Days from today for a named-day token
fn named_day_offset(token: &str, today: Weekday) -> Option<u64> {
    match token {
        "today" => Some(0),
        "tom" | "tomorrow" => Some(1),
        _ => parse_weekday(token).map(|target| days_until_next(today, target)),
    }
}

fn parse_weekday(s: &str) -> Option<Weekday> {
    match s {
        "mon" => Some(Weekday::Mon),
        "tue" => Some(Weekday::Tue),
        "wed" => Some(Weekday::Wed),
        "thu" => Some(Weekday::Thu),
        "fri" => Some(Weekday::Fri),
        "sat" => Some(Weekday::Sat),
        "sun" => Some(Weekday::Sun),
        _ => None,
    }
}

/// Days until the next `target` after `from` (1..=7, never 0)
fn days_until_next(from: Weekday, target: Weekday) -> u64 {
    let diff = (7 + target.num_days_from_monday() - from.num_days_from_monday()) % 7;
    if diff == 0 { 7 } else { u64::from(diff) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Timelike};

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<FixedOffset> {
        FixedOffset::east_opt(2 * 3600)
            .unwrap()
            .with_ymd_and_hms(y, m, d, h, min, 0)
            .unwrap()
    }

    #[test]
    fn test_relative_minutes_and_hours() {
        let now = at(2025, 6, 11, 9, 30);
        assert_eq!(resolve_due("45m", &now), Some(at(2025, 6, 11, 10, 15)));
        assert_eq!(resolve_due("2h", &now), Some(at(2025, 6, 11, 11, 30)));
        assert_eq!(resolve_due("16h", &now), Some(at(2025, 6, 12, 1, 30)));
    }

    #[test]
    fn test_relative_days_cross_month_and_year() {
        let now = at(2025, 1, 31, 9, 30);
        assert_eq!(resolve_due("2d", &now), Some(at(2025, 2, 2, 9, 30)));
        let now = at(2025, 12, 31, 23, 5);
        assert_eq!(resolve_due("1d", &now), Some(at(2026, 1, 1, 23, 5)));
    }

    #[test]
    fn test_relative_is_case_insensitive() {
        let now = at(2025, 6, 11, 9, 30);
        assert_eq!(resolve_due("3D", &now), resolve_due("3d", &now));
    }

    #[test]
    fn test_today_and_tomorrow_pinned_to_evening() {
        for now in [at(2025, 6, 11, 0, 1), at(2025, 6, 11, 23, 59)] {
            assert_eq!(resolve_due("today", &now), Some(at(2025, 6, 11, 18, 0)));
            assert_eq!(resolve_due("tom", &now), Some(at(2025, 6, 12, 18, 0)));
            assert_eq!(resolve_due("Tomorrow", &now), Some(at(2025, 6, 12, 18, 0)));
        }
    }

    #[test]
    fn test_weekday_is_strictly_after_today() {
        // 2025-06-11 is a Wednesday
        let now = at(2025, 6, 11, 8, 0);
        assert_eq!(now.weekday(), Weekday::Wed);
        assert_eq!(resolve_due("wed", &now), Some(at(2025, 6, 18, 18, 0)));
        assert_eq!(resolve_due("thu", &now), Some(at(2025, 6, 12, 18, 0)));
        assert_eq!(resolve_due("mon", &now), Some(at(2025, 6, 16, 18, 0)));
        assert_eq!(resolve_due("tue", &now), Some(at(2025, 6, 17, 18, 0)));
    }

    #[test]
    fn test_every_weekday_resolves_into_the_next_week() {
        let now = at(2025, 6, 16, 20, 0); // Monday evening
        for token in ["mon", "tue", "wed", "thu", "fri", "sat", "sun"] {
            let due = resolve_due(token, &now).unwrap();
            assert!(due > now, "{token} should be in the future");
            assert!(due.date_naive() > now.date_naive());
            assert!(due - now <= TimeDelta::days(7));
            assert_eq!((due.hour(), due.minute(), due.second()), (18, 0, 0));
        }
        assert_eq!(resolve_due("mon", &now), Some(at(2025, 6, 23, 18, 0)));
    }

    #[test]
    fn test_unrecognized_tokens() {
        let now = at(2025, 6, 11, 9, 30);
        for token in ["", "monday", "next-week", "2w", "-1d", "1.5h", "h2", "yesterday"] {
            assert_eq!(resolve_due(token, &now), None, "token {token:?}");
        }
    }

    #[test]
    fn test_overflowing_offset_is_dropped() {
        let now = at(2025, 6, 11, 9, 30);
        assert_eq!(resolve_due("99999999999999999999d", &now), None);
        assert_eq!(resolve_due("9223372036854775807m", &now), None);
    }

    #[test]
    fn test_named_days_keep_local_evening_across_dst() {
        use chrono::{NaiveDate, Offset};
        use chrono_tz::America::New_York;

        let local = |d: u32, h: u32| {
            NaiveDate::from_ymd_opt(2025, 3, d)
                .unwrap()
                .and_hms_opt(h, 0, 0)
                .unwrap()
        };
        // Wednesday before clocks spring forward on Sunday 2025-03-09
        let now = New_York.with_ymd_and_hms(2025, 3, 5, 9, 0, 0).unwrap();
        assert_eq!(now.offset().fix().local_minus_utc(), -5 * 3600);

        let mon = resolve_due("mon", &now).unwrap();
        assert_eq!(mon.naive_local(), local(10, 18));
        assert_eq!(mon.offset().fix().local_minus_utc(), -4 * 3600);

        let week = resolve_due("7d", &now).unwrap();
        assert_eq!(week.naive_local(), local(12, 9));
        assert_eq!(week - now, TimeDelta::hours(7 * 24 - 1));

        // Hour offsets are elapsed time, not wall-clock time
        let later = resolve_due("72h", &now).unwrap();
        assert_eq!(later.naive_local(), local(8, 9));
        let later = resolve_due("120h", &now).unwrap();
        assert_eq!(later.naive_local(), local(10, 10));
    }

    #[test]
    fn test_named_days_across_fall_back() {
        use chrono::Offset;
        use chrono_tz::America::New_York;

        // Wednesday before clocks fall back on Sunday 2025-11-02
        let now = New_York.with_ymd_and_hms(2025, 10, 29, 9, 0, 0).unwrap();
        let sun = resolve_due("sun", &now).unwrap();
        assert_eq!(sun.format("%Y-%m-%d %H:%M").to_string(), "2025-11-02 18:00");
        assert_eq!(sun.offset().fix().local_minus_utc(), -5 * 3600);
    }

    #[test]
    fn test_days_until_next() {
        assert_eq!(days_until_next(Weekday::Wed, Weekday::Wed), 7);
        assert_eq!(days_until_next(Weekday::Sun, Weekday::Mon), 1);
        assert_eq!(days_until_next(Weekday::Mon, Weekday::Sun), 6);
    }
}
