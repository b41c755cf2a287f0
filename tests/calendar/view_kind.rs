use chrono::NaiveDate;
use eventboard::calendar::ViewKind;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_parse_view_names() {
    assert_eq!("month".parse::<ViewKind>(), Ok(ViewKind::Month));
    assert_eq!("timeGridWeek".parse::<ViewKind>(), Ok(ViewKind::Week));
    assert_eq!("timeGridDay".parse::<ViewKind>(), Ok(ViewKind::Day));
    assert_eq!("dayGridMonth".parse::<ViewKind>(), Ok(ViewKind::Month));
    assert!("year".parse::<ViewKind>().is_err());
}

#[test]
fn test_display_round_trips_names() {
    for kind in ViewKind::ALL {
        assert_eq!(kind.to_string().parse::<ViewKind>(), Ok(kind));
    }
}

#[test]
fn test_only_month_is_a_day_grid() {
    assert!(!ViewKind::Month.is_time_grid());
    assert!(ViewKind::Week.is_time_grid());
    assert!(ViewKind::Day.is_time_grid());
}

#[test]
fn test_titles() {
    let focus = date(2022, 9, 28);
    assert_eq!(ViewKind::Month.title(focus, date(2022, 8, 28), date(2022, 10, 8)), "September 2022");
    assert_eq!(ViewKind::Day.title(focus, focus, focus), "September 28, 2022");
    assert_eq!(
        ViewKind::Week.title(focus, date(2022, 9, 25), date(2022, 10, 1)),
        "Sep 25 – Oct 1, 2022"
    );
    assert_eq!(
        ViewKind::Week.title(focus, date(2022, 9, 11), date(2022, 9, 17)),
        "Sep 11 – 17, 2022"
    );
    assert_eq!(
        ViewKind::Week.title(focus, date(2022, 12, 25), date(2022, 12, 31)),
        "Dec 25 – 31, 2022"
    );
    assert_eq!(
        ViewKind::Week.title(focus, date(2023, 12, 31), date(2024, 1, 6)),
        "Dec 31, 2023 – Jan 6, 2024"
    );
}
