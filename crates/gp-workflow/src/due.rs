//! Due-date urgency and display.
//!
//! Comparison always uses the stored UTC instant. The timezone label only
//! affects the rendered text: an IANA name converts the wall-clock time,
//! anything else falls back to UTC.

use chrono::{DateTime, Duration, Utc};
use chrono_tz::Tz;
use gp_core::entities::Task;
use gp_core::enums::DueUrgency;
use gp_core::responses::DueBadge;

/// Reference clock for urgency checks.
#[derive(Debug, Clone, Copy)]
pub struct DueClock {
    now: DateTime<Utc>,
    due_soon: Duration,
}

impl DueClock {
    #[must_use]
    pub fn new(now: DateTime<Utc>, due_soon_hours: u32) -> Self {
        Self {
            now,
            due_soon: Duration::hours(i64::from(due_soon_hours)),
        }
    }

    #[must_use]
    pub fn now(due_soon_hours: u32) -> Self {
        Self::new(Utc::now(), due_soon_hours)
    }

    #[must_use]
    pub fn urgency(&self, task: &Task) -> DueUrgency {
        match task.due_date {
            None => DueUrgency::Normal,
            Some(due) if due < self.now => DueUrgency::Overdue,
            Some(due) if due - self.now <= self.due_soon => DueUrgency::DueSoon,
            Some(_) => DueUrgency::Normal,
        }
    }

    /// Badge for a task with a due date; `None` otherwise.
    #[must_use]
    pub fn badge(&self, task: &Task) -> Option<DueBadge> {
        let due = task.due_date?;
        Some(DueBadge {
            urgency: self.urgency(task),
            display: display_due(due, task.due_date_timezone.as_deref()),
        })
    }
}

const DISPLAY_FORMAT: &str = "%b %-d, %-I:%M %p";

/// `Mar 4, 12:05 PM America/New York`: local time in the labelled zone, with
/// underscores shown as spaces. Unknown or missing labels render in UTC.
#[must_use]
pub fn display_due(due: DateTime<Utc>, timezone: Option<&str>) -> String {
    let zone = timezone
        .map(str::trim)
        .filter(|label| !label.is_empty())
        .and_then(|label| match label.parse::<Tz>() {
            Ok(tz) => Some((label, tz)),
            Err(_) => {
                tracing::debug!(label, "unknown timezone label, showing UTC");
                None
            }
        });
    match zone {
        Some((label, tz)) => format!(
            "{} {}",
            due.with_timezone(&tz).format(DISPLAY_FORMAT),
            label.replace('_', " ")
        ),
        None => format!("{} UTC", due.format(DISPLAY_FORMAT)),
    }
}
