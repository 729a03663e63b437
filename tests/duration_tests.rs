use tsreport::utils::duration::{
    parse_duration_to_seconds, round_to_nearest_minute, try_parse_duration,
};

#[test]
fn test_parse_valid_durations() {
    assert_eq!(parse_duration_to_seconds("01:00:00"), 3600);
    assert_eq!(parse_duration_to_seconds("0:45:30"), 45 * 60 + 30);
    assert_eq!(parse_duration_to_seconds("2:3:4"), 2 * 3600 + 3 * 60 + 4);
}

#[test]
fn test_parse_unbounded_segments() {
    // hours above 24 and minutes above 60 are accepted as-is
    assert_eq!(parse_duration_to_seconds("36:90:00"), 36 * 3600 + 90 * 60);
    assert_eq!(parse_duration_to_seconds("100:00:75"), 100 * 3600 + 75);
}

#[test]
fn test_parse_malformed_returns_zero() {
    for bad in ["", "1:00", "1:00:00:00", "aa:bb:cc", "1.5:00:00", "01h30m", "::"] {
        assert_eq!(parse_duration_to_seconds(bad), 0, "input {bad:?}");
        assert_eq!(try_parse_duration(bad), None, "input {bad:?}");
    }
}

#[test]
fn test_parse_tolerates_surrounding_spaces() {
    assert_eq!(parse_duration_to_seconds(" 01:30:00 "), 5400);
}

#[test]
fn test_round_to_nearest_minute() {
    assert_eq!(round_to_nearest_minute(0), 0);
    assert_eq!(round_to_nearest_minute(29), 0);
    assert_eq!(round_to_nearest_minute(31), 60);
    assert_eq!(round_to_nearest_minute(3599), 3600);
    assert_eq!(round_to_nearest_minute(3629), 3600);
}

#[test]
fn test_round_ties_go_to_even_minute() {
    assert_eq!(round_to_nearest_minute(30), 0);
    assert_eq!(round_to_nearest_minute(90), 120);
    assert_eq!(round_to_nearest_minute(150), 120);
    assert_eq!(round_to_nearest_minute(210), 240);
}

#[test]
fn test_round_is_idempotent() {
    for s in [0, 45, 60, 89, 90, 3600, 5430, 86399] {
        let once = round_to_nearest_minute(s);
        assert_eq!(once % 60, 0);
        assert_eq!(round_to_nearest_minute(once), once);
    }
}
