//! Norwegian long-date formatting for backend timestamps.
//!
//! Timestamps carry their own UTC offset; the calendar day shown is the one
//! in the viewer's time zone, so a result stored at 23:30 UTC reads as the
//! next day in Oslo.

#[cfg(test)]
#[path = "dates_test.rs"]
mod dates_test;

const MONTHS_NB: [&str; 12] = [
    "januar", "februar", "mars", "april", "mai", "juni", "juli", "august", "september", "oktober", "november",
    "desember",
];

const MINUTES_PER_DAY: i64 = 24 * 60;

/// Format an ISO 8601 timestamp as `18. oktober 2026` in the viewer's local
/// calendar.
///
/// Returns the input unchanged when it does not start with `YYYY-MM-DD`.
pub fn format_long_date_nb(timestamp: &str) -> String {
    format_long_date_nb_at(timestamp, local_offset_minutes(timestamp))
}

/// Same as `format_long_date_nb` for a viewer `local_offset` minutes east of
/// UTC.
pub fn format_long_date_nb_at(timestamp: &str, local_offset: i64) -> String {
    calendar_date(timestamp, local_offset).map_or_else(
        || timestamp.to_owned(),
        |(year, month, day)| format!("{day}. {} {year}", MONTHS_NB[usize::from(month - 1)]),
    )
}

/// Browser offset at that instant, so daylight saving is applied per date.
#[cfg(feature = "hydrate")]
#[allow(clippy::cast_possible_truncation)]
fn local_offset_minutes(timestamp: &str) -> i64 {
    let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_str(timestamp));
    let west = date.get_timezone_offset();
    if west.is_nan() { 0 } else { -(west as i64) }
}

#[cfg(not(feature = "hydrate"))]
fn local_offset_minutes(_timestamp: &str) -> i64 {
    0
}

fn calendar_date(timestamp: &str, local_offset: i64) -> Option<(i64, u8, u8)> {
    let (year, month, day) = parse_ymd(timestamp)?;
    // Date-only values and values without a zone are already local.
    let Some((minute_of_day, Some(source_offset))) = timestamp.get(10..).and_then(parse_time) else {
        return Some((year, month, day));
    };
    let minutes = days_from_civil(year, month, day) * MINUTES_PER_DAY + minute_of_day - source_offset + local_offset;
    civil_from_days(minutes.div_euclid(MINUTES_PER_DAY))
}

fn parse_ymd(timestamp: &str) -> Option<(i64, u8, u8)> {
    let date = timestamp.get(..10)?;
    let mut parts = date.split('-');
    let year = parts.next().filter(|p| p.len() == 4)?.parse::<i64>().ok()?;
    let month = parts.next().filter(|p| p.len() == 2)?.parse::<u8>().ok()?;
    let day = parts.next().filter(|p| p.len() == 2)?.parse::<u8>().ok()?;
    if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
        return None;
    }
    Some((year, month, day))
}

/// `THH:MM[:SS[.fff]][Z|±HH:MM]` into minute of day and zone offset.
fn parse_time(rest: &str) -> Option<(i64, Option<i64>)> {
    let rest = rest.strip_prefix('T').or_else(|| rest.strip_prefix(' '))?;
    let hour = rest.get(..2)?.parse::<i64>().ok()?;
    let minute = rest.get(3..5).filter(|_| rest.get(2..3) == Some(":"))?.parse::<i64>().ok()?;
    let tail = rest.get(5..)?;
    let zone = match tail.find(['Z', 'z', '+', '-']) {
        None => None,
        Some(at) => Some(parse_zone(&tail[at..])?),
    };
    Some((hour * 60 + minute, zone))
}

fn parse_zone(zone: &str) -> Option<i64> {
    if zone.eq_ignore_ascii_case("z") {
        return Some(0);
    }
    let sign = if zone.starts_with('-') { -1 } else { 1 };
    let digits = zone[1..].chars().filter(char::is_ascii_digit).collect::<String>();
    let hours = digits.get(..2)?.parse::<i64>().ok()?;
    let minutes = match digits.get(2..4) {
        Some(m) => m.parse::<i64>().ok()?,
        None => 0,
    };
    Some(sign * (hours * 60 + minutes))
}

// Proleptic Gregorian day numbers relative to 1970-01-01.

fn days_from_civil(year: i64, month: u8, day: u8) -> i64 {
    let (month, day) = (i64::from(month), i64::from(day));
    let year = if month <= 2 { year - 1 } else { year };
    let era = year.div_euclid(400);
    let yoe = year - era * 400;
    let doy = (153 * (if month > 2 { month - 3 } else { month + 9 }) + 2) / 5 + day - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146_097 + doe - 719_468
}

fn civil_from_days(days: i64) -> Option<(i64, u8, u8)> {
    let z = days + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = doy - (153 * mp + 2) / 5 + 1;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    let year = yoe + era * 400 + i64::from(month <= 2);
    Some((year, u8::try_from(month).ok()?, u8::try_from(day).ok()?))
}
