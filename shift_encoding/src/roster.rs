use std::error::Error;
use std::fmt::Display;

use chrono::{Datelike, NaiveDate};
use log::debug;

// ********* Roster data structures ***********

/// The three daily shift slots, in emission order.
#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub enum ShiftKind {
    Night,
    Day,
    Swing,
}

impl ShiftKind {
    pub const ALL: [ShiftKind; 3] = [ShiftKind::Night, ShiftKind::Day, ShiftKind::Swing];

    pub fn name(&self) -> &'static str {
        match self {
            ShiftKind::Night => "Night",
            ShiftKind::Day => "Day",
            ShiftKind::Swing => "Swing",
        }
    }

    pub fn index(&self) -> u32 {
        match self {
            ShiftKind::Night => 0,
            ShiftKind::Day => 1,
            ShiftKind::Swing => 2,
        }
    }
}

/// Whether a day counts as a weekday or a weekend slot. Decided by the
/// position of the day within its week row, not by the actual weekday.
#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub enum DayKind {
    Weekday,
    Weekend,
}

impl DayKind {
    pub fn name(&self) -> &'static str {
        match self {
            DayKind::Weekday => "Weekday",
            DayKind::Weekend => "Weekend",
        }
    }
}

/// Point values per shift kind, indexed by [ShiftKind::index].
///
/// The values are configuration, not constants: earlier rosters used a
/// non-flat scheme (weekday 6/4/4, weekend 3.5/3/3) and the scheme may
/// change again between periods.
#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub struct PointsTable {
    pub weekday: [u32; 3],
    pub weekend: [u32; 3],
}

impl PointsTable {
    /// The current flat scheme: every shift is worth the same.
    pub const FLAT: PointsTable = PointsTable {
        weekday: [10, 10, 10],
        weekend: [10, 10, 10],
    };

    pub fn points(&self, day_kind: DayKind, shift: ShiftKind) -> u32 {
        let row = match day_kind {
            DayKind::Weekday => &self.weekday,
            DayKind::Weekend => &self.weekend,
        };
        row[shift.index() as usize]
    }
}

impl Default for PointsTable {
    fn default() -> PointsTable {
        PointsTable::FLAT
    }
}

/// What to expand: a year, the target months (in emission order) and the
/// point scheme.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct RosterSpec {
    pub year: i32,
    pub months: Vec<u32>,
    pub points: PointsTable,
}

/// One roster row: a date, a shift slot on that date and its point value.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct ShiftRecord {
    pub date: NaiveDate,
    pub shift: ShiftKind,
    pub day_kind: DayKind,
    pub points: u32,
}

impl ShiftRecord {
    /// Day-month label, e.g. "04-Jan".
    pub fn date_label(&self) -> String {
        self.date.format("%d-%b").to_string()
    }

    /// Combined label, e.g. "Weekday Night".
    pub fn combined_label(&self) -> String {
        format!("{} {}", self.day_kind.name(), self.shift.name())
    }

    /// Numeric date, e.g. "01/04/21".
    pub fn full_date(&self) -> String {
        self.date.format("%m/%d/%y").to_string()
    }
}

/// Errors that prevent the roster expansion from completing.
#[derive(Eq, PartialEq, Debug, Clone)]
pub enum RosterError {
    /// The month number is outside 1-12.
    InvalidMonth(u32),
    /// The year/month pair cannot be represented as a date.
    InvalidDate { year: i32, month: u32 },
    /// The spec selects no months at all.
    EmptyMonths,
}

impl Error for RosterError {}

impl Display for RosterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RosterError::InvalidMonth(m) => write!(f, "month number {} is not in 1-12", m),
            RosterError::InvalidDate { year, month } => {
                write!(f, "no valid dates in year {} month {}", year, month)
            }
            RosterError::EmptyMonths => write!(f, "no months selected"),
        }
    }
}

// ********* Calendar expansion ***********

/// Number of leading week-row positions that count as weekday slots.
/// Positions 4 and onwards count as weekend slots.
const WEEKDAY_POSITIONS: usize = 4;

/// The week-row positions that produce roster records.
///
/// Days at every position get classified, but only the first column and
/// the fifth column of each week row (Monday and Friday on a Monday-first
/// calendar) are emitted. Later weekend columns are dropped. The solver's
/// point quotas were tuned against rosters with exactly this shape, so the
/// filter must not be widened without re-checking them.
const EMITTED_POSITIONS: [usize; 2] = [0, 4];

/// Lays a month out as Monday-first week rows of day-of-month numbers,
/// with 0 marking positions that fall outside the month.
pub fn month_weeks(year: i32, month: u32) -> Result<Vec<[u32; 7]>, RosterError> {
    if !(1..=12).contains(&month) {
        return Err(RosterError::InvalidMonth(month));
    }
    let first =
        NaiveDate::from_ymd_opt(year, month, 1).ok_or(RosterError::InvalidDate { year, month })?;
    let days = days_in_month(year, month).ok_or(RosterError::InvalidDate { year, month })?;

    let mut weeks: Vec<[u32; 7]> = Vec::new();
    let mut week = [0u32; 7];
    let mut position = first.weekday().num_days_from_monday() as usize;
    for day in 1..=days {
        week[position] = day;
        position += 1;
        if position == 7 {
            weeks.push(week);
            week = [0u32; 7];
            position = 0;
        }
    }
    if position > 0 {
        weeks.push(week);
    }
    Ok(weeks)
}

fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    Some(next.signed_duration_since(first).num_days() as u32)
}

/// Expands the spec into roster records, ordered month -> week row -> day
/// position -> shift kind.
pub fn generate_roster(spec: &RosterSpec) -> Result<Vec<ShiftRecord>, RosterError> {
    if spec.months.is_empty() {
        return Err(RosterError::EmptyMonths);
    }
    let mut records: Vec<ShiftRecord> = Vec::new();
    for &month in spec.months.iter() {
        let weeks = month_weeks(spec.year, month)?;
        debug!("generate_roster: year {} month {} weeks {:?}", spec.year, month, weeks);
        for week in weeks.iter() {
            for (position, &day) in week.iter().enumerate() {
                if day == 0 {
                    continue;
                }
                let day_kind = if position < WEEKDAY_POSITIONS {
                    DayKind::Weekday
                } else {
                    DayKind::Weekend
                };
                if !EMITTED_POSITIONS.contains(&position) {
                    continue;
                }
                let date = NaiveDate::from_ymd_opt(spec.year, month, day)
                    .ok_or(RosterError::InvalidDate { year: spec.year, month })?;
                for shift in ShiftKind::ALL {
                    records.push(ShiftRecord {
                        date,
                        shift,
                        day_kind,
                        points: spec.points.points(day_kind, shift),
                    });
                }
            }
        }
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(year: i32, months: &[u32]) -> RosterSpec {
        RosterSpec {
            year,
            months: months.to_vec(),
            points: PointsTable::FLAT,
        }
    }

    #[test]
    fn month_weeks_january_2021() {
        // January 2021 starts on a Friday.
        let weeks = month_weeks(2021, 1).unwrap();
        assert_eq!(
            weeks,
            vec![
                [0, 0, 0, 0, 1, 2, 3],
                [4, 5, 6, 7, 8, 9, 10],
                [11, 12, 13, 14, 15, 16, 17],
                [18, 19, 20, 21, 22, 23, 24],
                [25, 26, 27, 28, 29, 30, 31],
            ]
        );
    }

    #[test]
    fn month_weeks_february_2021() {
        // February 2021 fits exactly into four Monday-first weeks.
        let weeks = month_weeks(2021, 2).unwrap();
        assert_eq!(weeks.len(), 4);
        assert_eq!(weeks[0], [1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(weeks[3], [22, 23, 24, 25, 26, 27, 28]);
    }

    #[test]
    fn month_weeks_rejects_bad_months() {
        assert_eq!(month_weeks(2021, 0), Err(RosterError::InvalidMonth(0)));
        assert_eq!(month_weeks(2021, 13), Err(RosterError::InvalidMonth(13)));
    }

    #[test]
    fn roster_january_2021() {
        let records = generate_roster(&spec(2021, &[1])).unwrap();

        // Mondays 4, 11, 18, 25 and Fridays 1, 8, 15, 22, 29: nine days,
        // three shifts each.
        assert_eq!(records.len(), 27);

        let days: std::collections::BTreeSet<u32> =
            records.iter().map(|r| r.date.day()).collect();
        let expected: std::collections::BTreeSet<u32> =
            [1, 4, 8, 11, 15, 18, 22, 25, 29].into_iter().collect();
        assert_eq!(days, expected);

        // Friday January 1st sits at week position 4 and counts as weekend.
        assert_eq!(records[0].date_label(), "01-Jan");
        assert_eq!(records[0].full_date(), "01/01/21");
        assert_eq!(records[0].day_kind, DayKind::Weekend);
        assert_eq!(records[0].shift, ShiftKind::Night);
        assert_eq!(records[0].combined_label(), "Weekend Night");
        assert_eq!(records[1].shift, ShiftKind::Day);
        assert_eq!(records[2].shift, ShiftKind::Swing);

        // Monday January 4th is the first weekday record.
        assert_eq!(records[3].date_label(), "04-Jan");
        assert_eq!(records[3].full_date(), "01/04/21");
        assert_eq!(records[3].day_kind, DayKind::Weekday);
        assert_eq!(records[3].combined_label(), "Weekday Night");

        for r in records.iter() {
            assert_eq!(r.points, 10);
        }
    }

    #[test]
    fn roster_keeps_only_first_and_fifth_positions() {
        // Saturday January 2nd 2021 (week position 5) and Sunday the 3rd
        // (position 6) never show up, even though they are weekend days.
        let records = generate_roster(&spec(2021, &[1])).unwrap();
        assert!(records.iter().all(|r| r.date.day() != 2));
        assert!(records.iter().all(|r| r.date.day() != 3));
        // All weekend records are Fridays at position 4.
        for r in records.iter().filter(|r| r.day_kind == DayKind::Weekend) {
            assert_eq!(r.date.weekday(), chrono::Weekday::Fri);
        }
    }

    #[test]
    fn roster_multiple_months_in_order() {
        let records = generate_roster(&spec(2021, &[1, 2])).unwrap();
        // February 2021: Mondays 1, 8, 15, 22 and Fridays 5, 12, 19, 26.
        assert_eq!(records.len(), 27 + 24);
        assert!(records.windows(2).all(|w| w[0].date <= w[1].date));
    }

    #[test]
    fn roster_points_follow_the_table() {
        let mut s = spec(2021, &[1]);
        s.points = PointsTable {
            weekday: [6, 4, 4],
            weekend: [3, 3, 3],
        };
        let records = generate_roster(&s).unwrap();
        let monday = records.iter().find(|r| r.date.day() == 4).unwrap();
        assert_eq!(monday.shift, ShiftKind::Night);
        assert_eq!(monday.points, 6);
        let friday_swing = records
            .iter()
            .find(|r| r.date.day() == 1 && r.shift == ShiftKind::Swing)
            .unwrap();
        assert_eq!(friday_swing.points, 3);
    }

    #[test]
    fn roster_rejects_empty_month_list() {
        assert_eq!(generate_roster(&spec(2021, &[])), Err(RosterError::EmptyMonths));
    }
}
