use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::item::ItemKind;
use crate::settings::BoxShape;

/// Every store mutation produces an Event. The presentation layer prints
/// them (or raises a notification); render passes read the store directly.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    ItemAdded {
        id: i64,
        kind: ItemKind,
        name: String,
        at: DateTime<Utc>,
    },
    ItemUpdated {
        id: i64,
        kind: ItemKind,
        at: DateTime<Utc>,
    },
    ItemDeleted {
        id: i64,
        kind: ItemKind,
        at: DateTime<Utc>,
    },
    OrderChanged {
        order: Vec<i64>,
        at: DateTime<Utc>,
    },
    SettingsChanged {
        shape: BoxShape,
        size: u32,
        at: DateTime<Utc>,
    },
    ThemeChanged {
        theme: String,
        at: DateTime<Utc>,
    },
    BackupImported {
        items: usize,
        /// True when the file was a bare item array (legacy format).
        legacy: bool,
        at: DateTime<Utc>,
    },
}
