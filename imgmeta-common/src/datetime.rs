/// Point in time attached to image metadata
///
/// Stored in UTC. PNG's `tIME` chunk is defined to carry UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct DateTime(chrono::DateTime<chrono::Utc>);

impl DateTime {
    /// Returns `None` for out-of-range components like month 13
    pub fn from_ymd_hms(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
    ) -> Option<Self> {
        let date = chrono::NaiveDate::from_ymd_opt(year, month, day)?;
        let time = chrono::NaiveTime::from_hms_opt(hour, minute, second)?;
        Some(Self(chrono::NaiveDateTime::new(date, time).and_utc()))
    }
}

impl From<chrono::DateTime<chrono::Utc>> for DateTime {
    fn from(datetime: chrono::DateTime<chrono::Utc>) -> Self {
        Self(datetime)
    }
}

impl std::fmt::Display for DateTime {
    /// ```
    /// # use imgmeta_common::datetime::DateTime;
    /// let d = DateTime::from_ymd_hms(2024, 1, 31, 13, 37, 0).unwrap();
    /// assert_eq!(d.to_string(), "2024-01-31 13:37:00");
    /// ```
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d %H:%M:%S"))
    }
}
