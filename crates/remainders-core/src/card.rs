//! The per-render display contract.
//!
//! A [`CardView`] is everything the presentation layer needs to draw one
//! card: progress fraction and status for the bar fill, the background
//! tone, and the formatted duration string. The two color axes are
//! independent: the bar fill follows the progress status thresholds, the
//! background tone follows raw deadline proximity.

use serde::Serialize;

use crate::clock::{self, DAY_MS};
use crate::duration;
use crate::item::{Item, ItemKind};
use crate::progress::{self, Progress};

/// Background-color category of a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CardTone {
    /// Ongoing items; fixed color.
    Lifetime,
    /// Deadline already passed.
    Past,
    /// Deadline within 24 hours.
    Soon,
    /// Deadline further out.
    Future,
}

impl CardTone {
    pub fn as_str(self) -> &'static str {
        match self {
            CardTone::Lifetime => "lifetime",
            CardTone::Past => "past",
            CardTone::Soon => "soon",
            CardTone::Future => "future",
        }
    }
}

/// Background tone for an item at an instant.
pub fn tone_for(item: &Item, now_ms: i64) -> CardTone {
    match item.kind {
        ItemKind::Ongoing => CardTone::Lifetime,
        ItemKind::Countdown => {
            let until = item.date - now_ms;
            if until < 0 {
                CardTone::Past
            } else if until < DAY_MS {
                CardTone::Soon
            } else {
                CardTone::Future
            }
        }
    }
}

/// Display data for one card on one render pass.
#[derive(Debug, Clone, Serialize)]
pub struct CardView {
    pub id: i64,
    pub kind: ItemKind,
    pub name: String,
    pub description: String,
    /// Epoch ms of the item's target date.
    pub date: i64,
    pub progress: Progress,
    pub tone: CardTone,
    /// Formatted duration between now and the target date.
    pub countdown: String,
}

impl CardView {
    pub fn build(item: &Item, now_ms: i64) -> Self {
        let parts = duration::decompose(clock::to_local(now_ms), clock::to_local(item.date));
        Self {
            id: item.id,
            kind: item.kind,
            name: item.name.clone(),
            description: item.description.clone(),
            date: item.date,
            progress: progress::for_item(item, now_ms),
            tone: tone_for(item, now_ms),
            countdown: parts.to_string(),
        }
    }
}
