use chrono::NaiveDate;

use crate::{
    api::AttendanceRecord,
    components::forms::SelectOption,
    utils::time::{parse_date_input, utc_date},
};

pub const NO_RECORDS_FOR_EMPLOYEE: &str = "No attendance records found for this employee.";
pub const NO_MATCHING_RECORDS: &str = "No attendance records found.";
pub const HISTORY_FETCH_FALLBACK: &str = "Failed to fetch attendance records";
pub const MISSING_ID: &str = "No employee ID provided.";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    ClockedIn,
    ClockedOut,
}

impl StatusFilter {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "clocked_in" => StatusFilter::ClockedIn,
            "clocked_out" => StatusFilter::ClockedOut,
            _ => StatusFilter::All,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            StatusFilter::All => "",
            StatusFilter::ClockedIn => "clocked_in",
            StatusFilter::ClockedOut => "clocked_out",
        }
    }

    fn matches(self, record: &AttendanceRecord) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::ClockedIn => record.clock_out.is_none(),
            StatusFilter::ClockedOut => record.clock_out.is_some(),
        }
    }
}

pub fn status_filter_options() -> Vec<SelectOption> {
    vec![
        SelectOption::new(StatusFilter::All.as_str(), "All Records"),
        SelectOption::new(StatusFilter::ClockedIn.as_str(), "Clocked In Only"),
        SelectOption::new(StatusFilter::ClockedOut.as_str(), "Clocked Out Only"),
    ]
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttendanceFilter {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
    pub status: StatusFilter,
}

impl AttendanceFilter {
    /// Builds a filter from raw form values; unparseable dates count as unset.
    pub fn from_inputs(start: &str, end: &str, status: &str) -> Self {
        Self {
            start: parse_date_input(start),
            end: parse_date_input(end),
            status: StatusFilter::parse(status),
        }
    }

    /// The date range only applies once both bounds are set; both are inclusive.
    fn in_range(&self, record: &AttendanceRecord) -> bool {
        match (self.start, self.end) {
            (Some(start), Some(end)) => {
                let day = utc_date(record.clock_in);
                start <= day && day <= end
            }
            _ => true,
        }
    }
}

pub fn filter_records(records: &[AttendanceRecord], filter: &AttendanceFilter) -> Vec<AttendanceRecord> {
    records
        .iter()
        .filter(|record| filter.in_range(record) && filter.status.matches(record))
        .cloned()
        .collect()
}
