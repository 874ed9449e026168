use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// Weekdays on which classes can be scheduled and marked.
pub const MARKING_DAYS: [&str; 6] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

pub struct WeekDay {
    pub day: &'static str,
    /// Calendar date formatted `DD/MM/YYYY`, the format the marking form posts back.
    pub date_label: String,
}

pub struct WeekRow {
    pub week_id: u32,
    pub days: Vec<WeekDay>,
}

/// Week -> day -> date grid for the marking page: `total_weeks` weeks of
/// Monday through Saturday starting at the semester start date.
pub fn generate_week_dates(start: NaiveDate, total_weeks: u32) -> Vec<WeekRow> {
    (1..=total_weeks)
        .map(|week| {
            let week_start = start + Duration::weeks(i64::from(week) - 1);
            let days = MARKING_DAYS
                .iter()
                .enumerate()
                .map(|(i, day)| WeekDay {
                    day,
                    date_label: (week_start + Duration::days(i as i64))
                        .format("%d/%m/%Y")
                        .to_string(),
                })
                .collect();
            WeekRow {
                week_id: week,
                days,
            }
        })
        .collect()
}

/// Weekday name matching the `class_schedule.day_of_week` column values.
pub fn weekday_name(date: NaiveDate) -> &'static str {
    match date.weekday() {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Report query parameter format.
pub fn parse_iso_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

/// Marking form format (`DD/MM/YYYY`).
pub fn parse_day_month_year(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%d/%m/%Y").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn grid_covers_every_week_and_day() {
        let grid = generate_week_dates(date(2026, 1, 19), 20);
        assert_eq!(grid.len(), 20);
        assert_eq!(grid[0].week_id, 1);
        assert_eq!(grid[19].week_id, 20);
        for week in &grid {
            assert_eq!(week.days.len(), 6);
            assert_eq!(week.days[0].day, "Monday");
            assert_eq!(week.days[5].day, "Saturday");
        }
    }

    #[test]
    fn grid_dates_advance_by_days_and_weeks() {
        let grid = generate_week_dates(date(2026, 1, 19), 3);
        assert_eq!(grid[0].days[0].date_label, "19/01/2026");
        assert_eq!(grid[0].days[5].date_label, "24/01/2026");
        assert_eq!(grid[1].days[0].date_label, "26/01/2026");
        assert_eq!(grid[2].days[0].date_label, "02/02/2026");
    }

    #[test]
    fn weekday_names_match_schedule_values() {
        assert_eq!(weekday_name(date(2026, 2, 2)), "Monday");
        assert_eq!(weekday_name(date(2026, 2, 7)), "Saturday");
        assert_eq!(weekday_name(date(2026, 2, 8)), "Sunday");
    }

    #[test]
    fn date_parsing_formats() {
        assert_eq!(parse_iso_date("2026-02-02"), Some(date(2026, 2, 2)));
        assert_eq!(parse_iso_date("02/02/2026"), None);
        assert_eq!(parse_day_month_year("02/02/2026"), Some(date(2026, 2, 2)));
        assert_eq!(parse_day_month_year("2026-02-02"), None);
    }
}
