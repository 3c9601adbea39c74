use clap::ValueEnum;
use rehab_calendar::{CalendarDay, DAYS_PER_WEEK, WEEKDAY_LABELS, YearMonth, weeks};
use rehab_shared::{Event, MonthSummary};
use serde::{Deserialize, Serialize};

const CELL_WIDTH: usize = 8;
/// Largest event count that fits a cell; busier days show `+99`.
const MAX_CELL_COUNT: usize = 99;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    #[default]
    Text,
    Json,
}

#[derive(Serialize)]
struct MonthView<'g, 'a> {
    month: YearMonth,
    title: String,
    summary: MonthSummary,
    days: &'g [CalendarDay<'a, Event>],
}

fn weekday_label(day: &CalendarDay<'_, Event>) -> &'static str {
    WEEKDAY_LABELS[day.date.weekday().number_days_from_sunday() as usize]
}

/// ` 15 *+2 `: padding days are wrapped in parentheses, `*` marks today and
/// the suffix counts the day's events.
fn cell(day: &CalendarDay<'_, Event>) -> String {
    let label = if day.is_current_month {
        format!(" {:>2} ", day.date.day())
    } else {
        format!("({:>2})", day.date.day())
    };
    let marker = if day.is_today { '*' } else { ' ' };
    let count = match day.events.len() {
        0 => String::new(),
        n => format!("+{}", n.min(MAX_CELL_COUNT)),
    };

    format!("{label}{marker}{count:<3}")
}

fn agenda_line(event: &Event) -> String {
    let status = event.status().map_or("-", |status| status.as_ref());

    match event {
        Event::Session(session) => match session.duration_minutes {
            Some(minutes) => format!("  - {} [{status}] {minutes} min", session.name),
            None => format!("  - {} [{status}]", session.name),
        },
        Event::RoutineStart(routine) => match routine.end_date {
            Some(end) => format!("  > {} starts [{status}] until {end}", routine.name),
            None => format!("  > {} starts [{status}]", routine.name),
        },
    }
}

/// Month view followed by the agenda of the displayed month.
pub fn text(month: YearMonth, days: &[CalendarDay<'_, Event>]) -> String {
    let width = CELL_WIDTH * DAYS_PER_WEEK;
    let mut lines = vec![format!("{:^width$}", month.to_string())
        .trim_end()
        .to_owned()];

    lines.push(
        WEEKDAY_LABELS
            .iter()
            .map(|label| format!(" {label:<w$}", w = CELL_WIDTH - 1))
            .collect::<String>()
            .trim_end()
            .to_owned(),
    );

    for week in weeks(days) {
        lines.push(week.iter().map(cell).collect::<String>().trim_end().to_owned());
    }

    let agenda = days
        .iter()
        .filter(|day| day.is_current_month && day.has_events())
        .collect::<Vec<_>>();

    if !agenda.is_empty() {
        lines.push(String::new());
    }

    for day in agenda {
        lines.push(format!("{} {}", day.date, weekday_label(day)));
        lines.extend(day.events.iter().map(|event| agenda_line(event)));
    }

    lines.join("\n")
}

pub fn json(month: YearMonth, days: &[CalendarDay<'_, Event>]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&MonthView {
        month,
        title: month.to_string(),
        summary: MonthSummary::from_grid(days),
        days,
    })
}

pub fn summary_text(month: YearMonth, summary: &MonthSummary) -> String {
    let progress = summary
        .completion_ratio()
        .map_or("n/a".to_owned(), |ratio| format!("{:.0}%", ratio * 100.0));

    [
        month.to_string(),
        format!("sessions:       {}", summary.sessions),
        format!("  pending:      {}", summary.pending),
        format!("  completed:    {}", summary.completed),
        format!("  cancelled:    {}", summary.cancelled),
        format!("  other:        {}", summary.other),
        format!("routine starts: {}", summary.routine_starts),
        format!("active days:    {}", summary.active_days),
        format!("completion:     {progress}"),
    ]
    .join("\n")
}
