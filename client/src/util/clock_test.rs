use super::*;

#[test]
fn iso_date_formats_epoch() {
    assert_eq!(iso_date(0), "1970-01-01");
}

#[test]
fn iso_date_pads_month_and_day() {
    // 2024-01-05T12:00:00Z
    assert_eq!(iso_date(1_704_456_000_000), "2024-01-05");
}

#[test]
fn iso_date_clamps_out_of_range() {
    assert_eq!(iso_date(i64::MAX), "1970-01-01");
}

#[test]
fn now_millis_is_after_2020() {
    assert!(now_millis() > 1_577_836_800_000);
}

#[test]
fn today_has_iso_shape() {
    let value = today();
    assert_eq!(value.len(), 10);
    assert_eq!(&value[4..5], "-");
    assert_eq!(&value[7..8], "-");
}
