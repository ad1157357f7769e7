//! Status-aware completion display rules for weeks and targets.
//!
//! The stored flag is whatever the backend last acknowledged; what the user
//! sees is derived from it and the owning course's status on every render.
//! The same rule applies independently at the week and the target level; a
//! week's derived value never cascades into its targets.

use crate::models::{CourseStatus, Week};
use crate::schedule::week_range_label;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Projection {
    pub displayed: bool,
    pub editable: bool,
}

/// Derives the displayed completion flag and whether the user may flip it.
pub fn project(stored: bool, status: CourseStatus) -> Projection {
    match status {
        CourseStatus::Draft => Projection {
            displayed: false,
            editable: false,
        },
        CourseStatus::Complete => Projection {
            displayed: true,
            editable: false,
        },
        CourseStatus::Inactive => Projection {
            displayed: stored,
            editable: false,
        },
        CourseStatus::Active => Projection {
            displayed: stored,
            editable: true,
        },
    }
}

/// Whether a week's date label is shown at all. Inactive courses only reveal
/// dates on weeks already completed.
pub fn date_visible(status: CourseStatus, stored: bool) -> bool {
    match status {
        CourseStatus::Active | CourseStatus::Complete => true,
        CourseStatus::Inactive => stored,
        CourseStatus::Draft => false,
    }
}

/// The date label for a week, when the course status allows showing one.
pub fn week_date_label(week: &Week, status: CourseStatus) -> Option<String> {
    if !date_visible(status, week.is_complete) {
        return None;
    }
    week.date.map(week_range_label)
}

/// Per-entity toggle state.
///
/// At most one flip request per week/target may be outstanding; a flip
/// requested while one is in flight is held back and submitted once the
/// backend answers, with the last-requested value winning. The stored value
/// only moves on acknowledgement, so a failed request leaves the display
/// exactly where it started.
#[derive(Debug, Clone, Default)]
pub struct ToggleFlag {
    stored: bool,
    in_flight: Option<bool>,
    queued: Option<bool>,
}

impl ToggleFlag {
    pub fn new(stored: bool) -> Self {
        ToggleFlag {
            stored,
            in_flight: None,
            queued: None,
        }
    }

    /// The last backend-acknowledged value.
    pub fn stored(&self) -> bool {
        self.stored
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight.is_some()
    }

    /// The value the user last asked for, acknowledged or not.
    fn intent(&self) -> bool {
        self.queued.or(self.in_flight).unwrap_or(self.stored)
    }

    /// Registers a flip. Returns the value to submit to the backend now, or
    /// `None` if a request is already outstanding and this one was queued.
    pub fn request(&mut self) -> Option<bool> {
        let desired = !self.intent();

        if self.in_flight.is_none() {
            self.in_flight = Some(desired);
            Some(desired)
        } else {
            self.queued = Some(desired);
            None
        }
    }

    /// The in-flight request succeeded: adopt it as stored. If a flip was
    /// queued meanwhile and still differs, it becomes the next in-flight
    /// request and is returned for submission.
    pub fn acknowledge(&mut self) -> Option<bool> {
        if let Some(value) = self.in_flight.take() {
            self.stored = value;
        }

        match self.queued.take() {
            Some(next) if next != self.stored => {
                self.in_flight = Some(next);
                Some(next)
            }
            _ => None,
        }
    }

    /// The in-flight request failed: drop it and anything queued behind it.
    /// The stored value, and with it the display, reverts untouched.
    pub fn reject(&mut self) {
        self.in_flight = None;
        self.queued = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_hides_everything() {
        for stored in [false, true] {
            let p = project(stored, CourseStatus::Draft);
            assert!(!p.displayed);
            assert!(!p.editable);
        }
    }

    #[test]
    fn complete_forces_displayed() {
        for stored in [false, true] {
            let p = project(stored, CourseStatus::Complete);
            assert!(p.displayed);
            assert!(!p.editable);
        }
    }

    #[test]
    fn inactive_shows_stored_readonly() {
        assert_eq!(
            project(true, CourseStatus::Inactive),
            Projection {
                displayed: true,
                editable: false
            }
        );
        assert_eq!(
            project(false, CourseStatus::Inactive),
            Projection {
                displayed: false,
                editable: false
            }
        );
    }

    #[test]
    fn active_shows_stored_editable() {
        assert_eq!(
            project(false, CourseStatus::Active),
            Projection {
                displayed: false,
                editable: true
            }
        );
    }

    #[test]
    fn date_visibility_rules() {
        assert!(date_visible(CourseStatus::Active, false));
        assert!(date_visible(CourseStatus::Complete, false));
        assert!(date_visible(CourseStatus::Inactive, true));
        assert!(!date_visible(CourseStatus::Inactive, false));
        assert!(!date_visible(CourseStatus::Draft, true));
    }

    #[test]
    fn week_date_label_follows_visibility() {
        let week = Week {
            id: "w1".to_string(),
            serial: 1,
            text: "Processes".to_string(),
            date: chrono::NaiveDate::from_ymd_opt(2025, 1, 6),
            is_complete: false,
            targets: Vec::new(),
        };

        assert_eq!(
            week_date_label(&week, CourseStatus::Active).as_deref(),
            Some("Jan 6, 2025 - Jan 12, 2025")
        );
        assert_eq!(week_date_label(&week, CourseStatus::Draft), None);
        assert_eq!(week_date_label(&week, CourseStatus::Inactive), None);

        let done = Week {
            is_complete: true,
            ..week.clone()
        };
        assert!(week_date_label(&done, CourseStatus::Inactive).is_some());

        let undated = Week {
            date: None,
            ..week
        };
        assert_eq!(week_date_label(&undated, CourseStatus::Active), None);
    }

    #[test]
    fn toggle_happy_path() {
        let mut flag = ToggleFlag::new(false);
        assert_eq!(flag.request(), Some(true));
        assert!(flag.is_in_flight());
        assert!(!flag.stored());

        assert_eq!(flag.acknowledge(), None);
        assert!(flag.stored());
        assert!(!flag.is_in_flight());
    }

    #[test]
    fn toggle_failure_reverts() {
        let mut flag = ToggleFlag::new(true);
        assert_eq!(flag.request(), Some(false));
        flag.reject();
        assert!(flag.stored());
        assert!(!flag.is_in_flight());
    }

    #[test]
    fn second_request_queues_behind_in_flight() {
        let mut flag = ToggleFlag::new(false);
        assert_eq!(flag.request(), Some(true));
        // Flip back while the first request is outstanding.
        assert_eq!(flag.request(), None);

        // First ack lands on true; the queued flip to false goes out next.
        assert_eq!(flag.acknowledge(), Some(false));
        assert!(flag.stored());
        assert_eq!(flag.acknowledge(), None);
        assert!(!flag.stored());
    }

    #[test]
    fn queued_flip_matching_ack_is_dropped() {
        let mut flag = ToggleFlag::new(false);
        assert_eq!(flag.request(), Some(true));
        assert_eq!(flag.request(), None); // back to false
        assert_eq!(flag.request(), None); // forward to true again

        // Latest intent equals the acknowledged value; nothing to resend.
        assert_eq!(flag.acknowledge(), None);
        assert!(flag.stored());
    }
}
