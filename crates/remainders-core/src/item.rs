//! The item record and its two kinds.
//!
//! Wire field names (`type`, `name`, `date`, `createdAt`) follow the
//! persisted JSON format, so stored state and backup files deserialize
//! directly into [`Item`].

use serde::{Deserialize, Serialize};

/// The two ways an item tracks time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemKind {
    /// Tracked since a past start date; always shown fully complete.
    #[serde(rename = "lifetime")]
    Ongoing,
    /// Tracked toward a future or past deadline, with dynamic progress.
    #[serde(rename = "event")]
    Countdown,
}

impl ItemKind {
    pub fn is_countdown(self) -> bool {
        matches!(self, ItemKind::Countdown)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ItemKind::Ongoing => "lifetime",
            ItemKind::Countdown => "event",
        }
    }
}

/// A tracked item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Unique within the active item set. Assigned from the epoch-millisecond
    /// clock at creation.
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: ItemKind,
    pub name: String,
    /// Epoch ms. Start date for ongoing items, deadline for countdowns.
    pub date: i64,
    #[serde(default)]
    pub description: String,
    /// Epoch ms at creation. Absent on records imported from legacy backups;
    /// progress computation substitutes "24 hours before now" in that case.
    #[serde(rename = "createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<i64>,
}

/// A partial update applied through [`crate::ItemStore::update`].
#[derive(Debug, Clone, Default)]
pub struct ItemPatch {
    pub kind: Option<ItemKind>,
    pub name: Option<String>,
    pub date: Option<i64>,
    pub description: Option<String>,
}
