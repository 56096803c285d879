//! Day-by-department view over committed records.

use std::collections::BTreeMap;

use crate::models::{Day, Department, ShiftRecord};

/// Records arranged into a Sunday-to-Saturday grid split by department.
///
/// Records without a day appear under every day.
#[derive(Debug, Clone, Default)]
pub struct WeeklySchedule<'a> {
    dated: BTreeMap<(Day, Department), Vec<&'a ShiftRecord>>,
    every_day: BTreeMap<Department, Vec<&'a ShiftRecord>>,
}

impl<'a> WeeklySchedule<'a> {
    /// Builds the grid. Record order within a cell follows input order.
    pub fn from_records(records: &'a [ShiftRecord]) -> Self {
        let mut schedule = Self::default();
        for record in records {
            match record.day {
                Some(day) => schedule
                    .dated
                    .entry((day, record.department))
                    .or_default()
                    .push(record),
                None => schedule
                    .every_day
                    .entry(record.department)
                    .or_default()
                    .push(record),
            }
        }
        schedule
    }

    /// All shifts on `day`, FOH first.
    pub fn shifts_on(&self, day: Day) -> Vec<&'a ShiftRecord> {
        [Department::Foh, Department::Boh]
            .into_iter()
            .flat_map(|department| self.shifts_on_in(day, department))
            .collect()
    }

    /// Shifts on `day` in one department.
    pub fn shifts_on_in(&self, day: Day, department: Department) -> Vec<&'a ShiftRecord> {
        let dated = self.dated.get(&(day, department)).into_iter().flatten();
        let every_day = self.every_day.get(&department).into_iter().flatten();
        dated.chain(every_day).copied().collect()
    }

    /// Shifts on `day` in one department grouped by `time_block`, sorted by
    /// block.
    pub fn time_blocks(
        &self,
        day: Day,
        department: Department,
    ) -> BTreeMap<&'a str, Vec<&'a ShiftRecord>> {
        let mut blocks: BTreeMap<&'a str, Vec<&'a ShiftRecord>> = BTreeMap::new();
        for record in self.shifts_on_in(day, department) {
            blocks.entry(record.time_block.as_str()).or_default().push(record);
        }
        blocks
    }

    /// Number of shifts per day, Sunday first.
    pub fn daily_counts(&self) -> Vec<(Day, usize)> {
        Day::ALL
            .iter()
            .map(|&day| (day, self.shifts_on(day).len()))
            .collect()
    }
}
