//! Progress fraction and status computation.
//!
//! Two scales apply to countdowns, selected by deadline proximity:
//!
//! - **Near-deadline** (due within 24 hours): progress runs against the
//!   current day. If the deadline falls on today's calendar date, the bar
//!   fills from local midnight toward the deadline's time of day, and the
//!   deadline marker sits where that clock time lands on a 0-24h axis. If
//!   the deadline is on a later calendar day but still inside the window,
//!   the bar fills from midnight across the whole 24h day with the marker
//!   pinned to the end. The later-day branch measures the day, not the
//!   distance to the deadline; kept as-is pending a product decision.
//! - **Long-range** (due in more than 24 hours): fraction of the
//!   creation-to-deadline span already elapsed.
//!
//! Status thresholds apply to the computed fraction on every non-completed
//! countdown branch: below 50 is early, 50 to 80 is mid, above 80 is late.

use chrono::{NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::clock::{self, DAY_MS};
use crate::item::{Item, ItemKind};

/// Qualitative progress bucket, driving the bar fill color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProgressStatus {
    /// Ongoing item; always fully complete, distinct visual treatment.
    Ongoing,
    /// Countdown whose deadline has passed.
    Done,
    /// Less than half of the scale elapsed.
    Early,
    /// Between 50% and 80% elapsed.
    Mid,
    /// More than 80% elapsed.
    Late,
}

impl ProgressStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ProgressStatus::Ongoing => "ongoing",
            ProgressStatus::Done => "done",
            ProgressStatus::Early => "early",
            ProgressStatus::Mid => "mid",
            ProgressStatus::Late => "late",
        }
    }
}

/// Computed progress for one item at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Progress {
    /// 0.0 ..= 100.0
    pub percent: f64,
    pub status: ProgressStatus,
    /// Where the deadline sits on the 0-100 axis. Countdowns only; pinned
    /// to 100 except on the same-day near-deadline scale.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline_marker: Option<f64>,
}

/// Progress for an ongoing item.
pub fn ongoing() -> Progress {
    Progress {
        percent: 100.0,
        status: ProgressStatus::Ongoing,
        deadline_marker: None,
    }
}

/// Progress for a countdown item. All instants are local calendar time.
pub fn countdown(created: NaiveDateTime, target: NaiveDateTime, now: NaiveDateTime) -> Progress {
    if target <= now {
        return Progress {
            percent: 100.0,
            status: ProgressStatus::Done,
            deadline_marker: Some(100.0),
        };
    }

    if ms_between(now, target) <= DAY_MS {
        let elapsed_today = ms_between(midnight_of(now), now) as f64;
        if now.date() == target.date() {
            // target > now >= midnight, so the deadline's time of day is
            // strictly positive here.
            let deadline_tod = ms_between(midnight_of(target), target) as f64;
            let percent = elapsed_today / deadline_tod * 100.0;
            Progress {
                percent: percent.min(100.0),
                status: status_for(percent),
                deadline_marker: Some(deadline_tod / DAY_MS as f64 * 100.0),
            }
        } else {
            let percent = elapsed_today / DAY_MS as f64 * 100.0;
            Progress {
                percent: percent.min(100.0),
                status: status_for(percent),
                deadline_marker: Some(100.0),
            }
        }
    } else {
        let total = ms_between(created, target);
        if total <= 0 {
            // Degenerate span (deadline at or before creation): already at
            // cap, never a division.
            return Progress {
                percent: 100.0,
                status: ProgressStatus::Late,
                deadline_marker: Some(100.0),
            };
        }
        let percent = ms_between(created, now) as f64 / total as f64 * 100.0;
        Progress {
            percent: percent.clamp(0.0, 100.0),
            status: status_for(percent),
            deadline_marker: Some(100.0),
        }
    }
}

/// Progress for an item at an epoch-millisecond instant.
///
/// Items without a recorded creation time are treated as created 24 hours
/// before `now` (legacy-import compatibility).
pub fn for_item(item: &Item, now_ms: i64) -> Progress {
    match item.kind {
        ItemKind::Ongoing => ongoing(),
        ItemKind::Countdown => {
            let created_ms = item.created_at.unwrap_or(now_ms - DAY_MS);
            countdown(
                clock::to_local(created_ms),
                clock::to_local(item.date),
                clock::to_local(now_ms),
            )
        }
    }
}

fn status_for(percent: f64) -> ProgressStatus {
    if percent < 50.0 {
        ProgressStatus::Early
    } else if percent <= 80.0 {
        ProgressStatus::Mid
    } else {
        ProgressStatus::Late
    }
}

fn midnight_of(t: NaiveDateTime) -> NaiveDateTime {
    t.date().and_time(NaiveTime::MIN)
}

fn ms_between(a: NaiveDateTime, b: NaiveDateTime) -> i64 {
    b.signed_duration_since(a).num_milliseconds()
}
