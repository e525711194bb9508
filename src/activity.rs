use chrono::{Datelike, Months, NaiveDate, Weekday};
use rand::Rng;

/// Probability that a generated day has any contributions at all.
const ACTIVE_DAY_PROBABILITY: f64 = 0.3;
/// Exclusive upper bound of contributions on an active day.
const MAX_DAILY_CONTRIBUTIONS: u32 = 10;

pub const WEEKDAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivityDay {
    pub date: NaiveDate,
    pub count: u32,
    pub level: u8,
}

impl ActivityDay {
    pub fn new(date: NaiveDate, count: u32) -> Self {
        Self {
            date,
            count,
            level: level_for(count),
        }
    }

    /// Row of the day inside its week column, Sunday first.
    pub fn row(&self) -> usize {
        self.date.weekday().num_days_from_sunday() as usize
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Streaks {
    pub current: u32,
    pub longest: u32,
}

/// Maps a contribution count to the 0-4 intensity scale.
pub fn level_for(count: u32) -> u8 {
    match count {
        0 => 0,
        1..=2 => 1,
        3..=4 => 2,
        5..=6 => 3,
        _ => 4,
    }
}

pub fn level_color(level: u8) -> &'static str {
    match level {
        1 => "rgba(100, 108, 255, 0.3)",
        2 => "rgba(100, 108, 255, 0.5)",
        3 => "rgba(100, 108, 255, 0.7)",
        4 => "rgba(100, 108, 255, 0.9)",
        _ => "rgba(127, 127, 127, 0.12)",
    }
}

/// Generates one day per date from a year before `today` through `today`, inclusive.
pub fn generate_year<R: Rng>(today: NaiveDate, rng: &mut R) -> Vec<ActivityDay> {
    let start = today
        .checked_sub_months(Months::new(12))
        .unwrap_or(NaiveDate::MIN);
    start
        .iter_days()
        .take_while(|d| *d <= today)
        .map(|date| {
            let count = if rng.gen_bool(ACTIVE_DAY_PROBABILITY) {
                rng.gen_range(0..MAX_DAILY_CONTRIBUTIONS)
            } else {
                0
            };
            ActivityDay::new(date, count)
        })
        .collect()
}

/// Groups consecutive days into week columns, starting a new column on every Sunday.
pub fn weeks(days: &[ActivityDay]) -> Vec<Vec<ActivityDay>> {
    let mut weeks = Vec::new();
    let mut current = Vec::new();
    for day in days {
        if day.date.weekday() == Weekday::Sun && !current.is_empty() {
            weeks.push(std::mem::take(&mut current));
        }
        current.push(*day);
    }
    if !current.is_empty() {
        weeks.push(current);
    }
    weeks
}

/// Week columns where a new month begins, paired with the month's short name.
pub fn month_labels(weeks: &[Vec<ActivityDay>]) -> Vec<(usize, String)> {
    let mut labels: Vec<(usize, String)> = Vec::new();
    let mut last_month = None;
    for (i, week) in weeks.iter().enumerate() {
        let Some(first) = week.first() else {
            continue;
        };
        let month = first.date.month();
        if last_month != Some(month) {
            labels.push((i, first.date.format("%b").to_string()));
            last_month = Some(month);
        }
    }
    labels
}

pub fn total(days: &[ActivityDay]) -> u32 {
    days.iter().map(|d| d.count).sum()
}

/// The current streak is the run of active days ending on the last day, or on the day
/// before it when the last day has no contributions yet. The longest streak spans the
/// whole range.
pub fn streaks(days: &[ActivityDay]) -> Streaks {
    let mut longest = 0;
    let mut run = 0;
    for day in days {
        if day.count > 0 {
            run += 1;
            longest = longest.max(run);
        } else {
            run = 0;
        }
    }

    let mut tail = days.iter().rev().peekable();
    if tail.peek().is_some_and(|d| d.count == 0) {
        tail.next();
    }
    let current = tail.take_while(|d| d.count > 0).count() as u32;

    Streaks { current, longest }
}

/// Whether a new contribution total calls for a fresh calendar. The first value always does.
pub fn contributions_changed(previous: Option<u32>, current: u32) -> bool {
    previous != Some(current)
}

pub fn find(days: &[ActivityDay], date: NaiveDate) -> Option<&ActivityDay> {
    days.iter().find(|d| d.date == date)
}

pub fn format_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::SmallRng, SeedableRng};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
    }

    fn days_from(start: NaiveDate, counts: &[u32]) -> Vec<ActivityDay> {
        start
            .iter_days()
            .zip(counts)
            .map(|(d, c)| ActivityDay::new(d, *c))
            .collect()
    }

    #[test]
    fn test_levels() {
        assert_eq!(level_for(0), 0);
        assert_eq!(level_for(1), 1);
        assert_eq!(level_for(2), 1);
        assert_eq!(level_for(3), 2);
        assert_eq!(level_for(4), 2);
        assert_eq!(level_for(5), 3);
        assert_eq!(level_for(6), 3);
        assert_eq!(level_for(7), 4);
        assert_eq!(level_for(9), 4);
        assert_ne!(level_color(0), level_color(4));
        assert_eq!(level_color(9), level_color(0));
    }

    #[test]
    fn test_generate_year_covers_range() {
        let mut rng = SmallRng::seed_from_u64(7);
        let today = date(2024, 6, 15);
        let days = generate_year(today, &mut rng);

        assert_eq!(days.first().map(|d| d.date), Some(date(2023, 6, 15)));
        assert_eq!(days.last().map(|d| d.date), Some(today));
        assert_eq!(days.len(), 367); // 2024 is a leap year
        assert!(days.iter().all(|d| d.count < MAX_DAILY_CONTRIBUTIONS));
        assert!(days.iter().all(|d| d.level == level_for(d.count)));
    }

    #[test]
    fn test_generate_year_leap_day() {
        let mut rng = SmallRng::seed_from_u64(1);
        let days = generate_year(date(2024, 2, 29), &mut rng);
        assert_eq!(days.first().map(|d| d.date), Some(date(2023, 2, 28)));
    }

    #[test]
    fn test_generate_year_is_seeded() {
        let today = date(2025, 1, 1);
        let a = generate_year(today, &mut SmallRng::seed_from_u64(42));
        let b = generate_year(today, &mut SmallRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_weeks_split_on_sunday() {
        // 2024-06-12 is a Wednesday
        let days = days_from(date(2024, 6, 12), &[1; 12]);
        let weeks = weeks(&days);

        assert_eq!(weeks.len(), 3);
        assert_eq!(weeks[0].len(), 4);
        assert_eq!(weeks[0][0].row(), 3);
        assert_eq!(weeks[1].len(), 7);
        assert_eq!(weeks[1][0].date.weekday(), Weekday::Sun);
        assert_eq!(weeks[2].len(), 1);

        assert!(super::weeks(&[]).is_empty());
    }

    #[test]
    fn test_month_labels() {
        let days = days_from(date(2024, 5, 26), &[0; 21]);
        let weeks = weeks(&days);
        let labels = month_labels(&weeks);
        assert_eq!(labels, vec![(0, "May".to_string()), (1, "Jun".to_string())]);
    }

    #[test]
    fn test_total() {
        let days = days_from(date(2024, 1, 1), &[1, 0, 3, 9]);
        assert_eq!(total(&days), 13);
        assert_eq!(total(&[]), 0);
    }

    #[test]
    fn test_streaks() {
        let days = days_from(date(2024, 1, 1), &[1, 1, 1, 0, 2, 2]);
        assert_eq!(
            streaks(&days),
            Streaks {
                current: 2,
                longest: 3
            }
        );

        // today without contributions does not break the streak
        let days = days_from(date(2024, 1, 1), &[0, 4, 4, 0]);
        assert_eq!(
            streaks(&days),
            Streaks {
                current: 2,
                longest: 2
            }
        );

        // two idle days do
        let days = days_from(date(2024, 1, 1), &[5, 0, 0]);
        assert_eq!(
            streaks(&days),
            Streaks {
                current: 0,
                longest: 1
            }
        );

        assert_eq!(streaks(&[]), Streaks::default());
    }

    #[test]
    fn test_find_and_format() {
        let days = days_from(date(2024, 3, 1), &[2, 5]);
        let found = find(&days, date(2024, 3, 2)).expect("day should exist");
        assert_eq!(found.count, 5);
        assert!(find(&days, date(2024, 3, 9)).is_none());
        assert_eq!(format_date(date(2024, 3, 2)), "March 2, 2024");
    }

    #[test]
    fn test_contributions_changed() {
        assert!(contributions_changed(None, 0));
        assert!(contributions_changed(None, 1247));
        assert!(contributions_changed(Some(1247), 1300));
        // saving other profile fields re-notifies with the same total
        assert!(!contributions_changed(Some(1247), 1247));
    }
}
