use rehab_calendar::{GRID_DAYS, YearMonth, build_month_grid};
use rehab_shared::{Event, RawEvent, Status};
use time::macros::date;

const FEED: &str = r#"[
    {"kind": "session", "id": 1, "name": "B", "date": "2024-04-12", "status": "completed"},
    {"kind": "session", "id": 2, "name": "A", "date": "2024-04-12T18:00:00-07:00", "status": "pending"},
    {"kind": "session", "id": 3, "name": "Hamstring", "date": "2024-04-12", "status": "cancelled"},
    {"kind": "routine-start", "id": "pkg-1", "name": "Knee program", "start_date": "2024-04-12", "end_date": "2024-05-10"},
    {"kind": "session", "id": 4, "name": "Broken", "date": "12/04/2024"},
    {"kind": "session", "id": 5, "name": "No date"},
    {"kind": "message", "id": 6, "name": "Chat"},
    {"kind": "session", "id": 7, "name": "Next month", "date": "2024-06-20"}
]"#;

fn feed() -> Vec<RawEvent> {
    serde_json::from_str(FEED).unwrap()
}

#[test]
fn test_feed_to_grid() {
    let events = Event::from_raw_lossy(feed());

    assert_eq!(events.len(), 5);

    let month = YearMonth::new(2024, 4).unwrap();
    let grid = build_month_grid(month, &events, date!(2024 - 04 - 12));

    assert_eq!(grid.len(), GRID_DAYS);

    let day = grid.iter().find(|day| day.is_today).unwrap();
    let names = day.events.iter().map(|event| event.name()).collect::<Vec<_>>();

    assert_eq!(day.date, date!(2024 - 04 - 12));
    assert_eq!(names, vec!["A", "B", "Hamstring", "Knee program"]);

    let on_grid = grid.iter().map(|day| day.events.len()).sum::<usize>();
    assert_eq!(on_grid, 4);
}

#[test]
fn test_raw_feed_on_grid_drops_bad_dates() {
    let raw = feed();
    let month = YearMonth::new(2024, 4).unwrap();
    let grid = build_month_grid(month, &raw, date!(2024 - 04 - 12));

    assert_eq!(grid.len(), GRID_DAYS);

    let day = grid.iter().find(|day| day.is_today).unwrap();
    let names = day
        .events
        .iter()
        .filter_map(|event| event.name.as_deref())
        .collect::<Vec<_>>();

    assert_eq!(names, vec!["A", "B", "Hamstring", "Knee program"]);
    assert_eq!(grid.iter().map(|day| day.events.len()).sum::<usize>(), 4);
}

#[test]
fn test_grid_serializes_events_by_reference() {
    let events = Event::from_raw_lossy(feed());
    let month = YearMonth::new(2024, 4).unwrap();
    let grid = build_month_grid(month, &events, date!(2024 - 04 - 12));
    let value = serde_json::to_value(&grid).unwrap();

    assert_eq!(value.as_array().unwrap().len(), GRID_DAYS);
    assert_eq!(value[0]["date"], "2024-03-31");
    assert_eq!(value[0]["is_current_month"], false);
    assert_eq!(value[12]["is_today"], true);
    assert_eq!(value[12]["events"][0]["kind"], "session");
    assert_eq!(value[12]["events"][0]["status"], "pending");
    assert_eq!(value[12]["events"][3]["kind"], "routine-start");
}

#[test]
fn test_status_defaults_on_feed() {
    let events = Event::from_raw_lossy(feed());

    assert_eq!(events[2].status(), Some(&Status::Cancelled));
    assert_eq!(events[3].status(), None);
}
