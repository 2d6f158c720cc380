use chrono::{DateTime, Utc};

use crate::api::{AttendanceStatus, AttendanceStatusResponse};

pub const STATUS_FETCH_FAILED: &str = "❌ Failed to fetch attendance status";
pub const MISSING_TOKEN: &str = "❌ No authentication token found.";
pub const PHOTO_REQUIRED: &str = "Please take a photo before clocking in.";
pub const CLOCK_IN_FAILED: &str = "❌ Failed to clock in";
pub const CLOCK_OUT_FAILED: &str = "❌ Failed to clock out";
pub const CLOCK_IN_DONE: &str = "You have clocked in successfully";
pub const CLOCK_OUT_DONE: &str = "You have clocked out successfully";
pub const ALREADY_RECORDED: &str = "You've already recorded attendance today.";

/// Today's attendance as last reported by the server, plus local optimistic updates.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrackerState {
    pub status: Option<AttendanceStatus>,
    pub clock_in: Option<DateTime<Utc>>,
    pub clock_out: Option<DateTime<Utc>>,
    pub loading: bool,
}

/// What the tracker offers the user next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackerAction {
    Busy,
    ClockIn,
    ClockOut,
    AlreadyRecorded,
}

impl TrackerState {
    pub fn apply_status(&mut self, response: AttendanceStatusResponse) {
        self.status = Some(response.status);
        self.clock_in = response.clock_in_time;
        self.clock_out = response.clock_out_time;
    }

    pub fn apply_clock_in(&mut self, at: Option<DateTime<Utc>>) {
        self.status = Some(AttendanceStatus::ClockedIn);
        self.clock_in = at;
    }

    pub fn apply_clock_out(&mut self, at: Option<DateTime<Utc>>) {
        self.status = Some(AttendanceStatus::ClockedOut);
        self.clock_out = at;
    }

    pub fn status_label(&self) -> String {
        self.status
            .map(|status| status.label())
            .unwrap_or_else(|| "-".to_string())
    }

    pub fn next_action(&self) -> TrackerAction {
        if self.loading {
            return TrackerAction::Busy;
        }
        match self.status {
            Some(AttendanceStatus::NotRecorded) => TrackerAction::ClockIn,
            Some(AttendanceStatus::ClockedIn) => TrackerAction::ClockOut,
            Some(AttendanceStatus::ClockedOut) | None => TrackerAction::AlreadyRecorded,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn clocked_in_status_offers_only_clock_out() {
        let mut state = TrackerState::default();
        state.apply_status(AttendanceStatusResponse {
            status: AttendanceStatus::ClockedIn,
            clock_in_time: Some(Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap()),
            clock_out_time: None,
        });
        assert_eq!(state.next_action(), TrackerAction::ClockOut);
        assert_eq!(state.status_label(), "clocked in");
    }

    #[test]
    fn loading_hides_every_action() {
        let state = TrackerState {
            status: Some(AttendanceStatus::NotRecorded),
            loading: true,
            ..TrackerState::default()
        };
        assert_eq!(state.next_action(), TrackerAction::Busy);
    }

    #[test]
    fn optimistic_updates_set_status_and_time() {
        let at = Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap();
        let mut state = TrackerState {
            status: Some(AttendanceStatus::NotRecorded),
            ..TrackerState::default()
        };
        assert_eq!(state.next_action(), TrackerAction::ClockIn);

        state.apply_clock_in(Some(at));
        assert_eq!(state.status, Some(AttendanceStatus::ClockedIn));
        assert_eq!(state.clock_in, Some(at));

        state.apply_clock_out(None);
        assert_eq!(state.next_action(), TrackerAction::AlreadyRecorded);
    }

    #[test]
    fn unknown_status_renders_dash() {
        assert_eq!(TrackerState::default().status_label(), "-");
    }
}
