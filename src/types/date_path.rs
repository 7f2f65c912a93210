//! DatePath - the three-level folder a file is filed under

use chrono::{DateTime, Datelike, Local, NaiveDate};
use std::fmt;
use std::path::PathBuf;
use std::time::SystemTime;

/// Calendar date that maps to `YYYY/MM-YYYY/MM-DD-YYYY`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DatePath {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl DatePath {
    /// Build from a calendar date
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
            day: date.day(),
        }
    }

    /// Build from a modification time, read in the local time zone
    pub fn from_system_time(time: SystemTime) -> Self {
        let local: DateTime<Local> = time.into();
        Self::from_date(local.date_naive())
    }

    /// Folder names, outermost first: `YYYY`, `MM-YYYY`, `MM-DD-YYYY`
    pub fn segments(&self) -> [String; 3] {
        let year = format!("{:04}", self.year);
        let month = format!("{:02}", self.month);
        let day = format!("{:02}", self.day);

        [
            year.clone(),
            format!("{month}-{year}"),
            format!("{month}-{day}-{year}"),
        ]
    }

    /// Path relative to the destination root
    pub fn relative_path(&self) -> PathBuf {
        self.segments().iter().collect()
    }

    /// US-style `MM/DD/YYYY`, used in log output
    pub fn display_date(&self) -> String {
        format!("{:02}/{:02}/{:04}", self.month, self.day, self.year)
    }
}

impl fmt::Display for DatePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments().join("/"))
    }
}
