//! JSON round-trips of the value types, behind the `serde` feature.

#![cfg(feature = "serde")]

use dl_time::{
    BusinessDayConvention, CalendarDate, DayCountConvention, HolidayCalendar, HolidayRule,
    Occurrence, Period, Weekday, WeekendDays,
};

#[test]
fn dates_serialize_as_iso_strings() {
    let d = CalendarDate::new(2024, 2, 29).unwrap();
    let json = serde_json::to_string(&d).unwrap();
    assert_eq!(json, "\"2024-02-29\"");
    assert_eq!(serde_json::from_str::<CalendarDate>(&json).unwrap(), d);
    assert!(serde_json::from_str::<CalendarDate>("\"2023-02-29\"").is_err());
}

#[test]
fn calendar_survives_json() {
    let cal = HolidayCalendar::new()
        .with_holiday(CalendarDate::new(2024, 7, 4).unwrap())
        .with_rule(HolidayRule::fixed("Christmas", 12, 25).unwrap())
        .with_rule(
            HolidayRule::nth_weekday("Thanksgiving", 11, Weekday::Thursday, Occurrence::Fourth)
                .unwrap(),
        );
    let json = serde_json::to_string(&cal).unwrap();
    let back: HolidayCalendar = serde_json::from_str(&json).unwrap();
    assert_eq!(back, cal);
    assert_eq!(back.holidays(2024), cal.holidays(2024));
}

#[test]
fn enums_and_periods() {
    let value = (
        Period::months(-3),
        BusinessDayConvention::ModifiedFollowing,
        DayCountConvention::Actual360,
        WeekendDays::friday_saturday(),
    );
    let json = serde_json::to_string(&value).unwrap();
    let back: (Period, BusinessDayConvention, DayCountConvention, WeekendDays) =
        serde_json::from_str(&json).unwrap();
    assert_eq!(back, value);
}
