use super::*;

#[test]
fn formats_rfc3339_timestamp() {
    assert_eq!(format_long_date_nb("2026-10-18T09:30:00+00:00"), "18. oktober 2026");
}

#[test]
fn strips_leading_zero_from_day() {
    assert_eq!(format_long_date_nb("2025-01-05"), "5. januar 2025");
    assert_eq!(format_long_date_nb("2025-12-31T23:59:59Z"), "31. desember 2025");
}

#[test]
fn passes_through_unparseable_input() {
    assert_eq!(format_long_date_nb("yesterday"), "yesterday");
    assert_eq!(format_long_date_nb("2025-13-01"), "2025-13-01");
    assert_eq!(format_long_date_nb(""), "");
}

#[test]
fn late_utc_evening_is_next_day_east_of_utc() {
    assert_eq!(format_long_date_nb_at("2026-10-17T23:30:00+00:00", 120), "18. oktober 2026");
    assert_eq!(format_long_date_nb_at("2026-10-17T23:30:00+00:00", 0), "17. oktober 2026");
}

#[test]
fn local_day_crosses_year_and_zone_boundaries() {
    assert_eq!(format_long_date_nb_at("2025-12-31T23:30:00.123456Z", 60), "1. januar 2026");
    assert_eq!(format_long_date_nb_at("2026-10-18T01:00:00+02:00", 0), "17. oktober 2026");
    assert_eq!(format_long_date_nb_at("2024-03-01T00:30:00Z", -60), "29. februar 2024");
}

#[test]
fn values_without_zone_keep_their_calendar_day() {
    assert_eq!(format_long_date_nb_at("2026-10-17T23:30:00", 120), "17. oktober 2026");
    assert_eq!(format_long_date_nb_at("2026-10-17", -300), "17. oktober 2026");
}
