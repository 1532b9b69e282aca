//! Backup export and import.
//!
//! The export format wraps the full state in one object:
//!
//! ```json
//! { "events": [...], "remainderOrder": [...], "boxSettings": {...}, "theme": "..." }
//! ```
//!
//! Import also accepts a bare array of item records (the legacy format).
//! In that case the priority order is rebuilt from the countdown items in
//! their array order, and settings/theme are left unchanged. Parsing is
//! separated from application: a rejected file never mutates the store.

use serde::{Deserialize, Serialize};

use crate::error::ImportError;
use crate::item::Item;
use crate::settings::BoxSettings;
use crate::store::ItemStore;

/// Wire format of a full backup file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackupFile {
    pub events: Vec<Item>,
    #[serde(rename = "remainderOrder", default, skip_serializing_if = "Option::is_none")]
    pub remainder_order: Option<Vec<i64>>,
    #[serde(rename = "boxSettings", default, skip_serializing_if = "Option::is_none")]
    pub box_settings: Option<BoxSettings>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
}

/// A parsed, validated backup, ready for [`ItemStore::apply_backup`].
/// `None` fields mean the backup didn't carry that section.
#[derive(Debug, Clone)]
pub struct Restored {
    pub items: Vec<Item>,
    pub order: Option<Vec<i64>>,
    pub box_settings: Option<BoxSettings>,
    pub theme: Option<String>,
    pub legacy: bool,
}

/// Serialize the full store state as a backup file.
pub fn export(store: &ItemStore) -> Result<String, serde_json::Error> {
    let file = BackupFile {
        events: store.items().to_vec(),
        remainder_order: Some(store.order().to_vec()),
        box_settings: Some(store.settings()),
        theme: Some(store.theme().to_string()),
    };
    serde_json::to_string_pretty(&file)
}

/// Parse backup JSON in either format.
///
/// Items missing `createdAt` get `now_ms` stamped at import time, so
/// long-range progress has a span to measure against.
pub fn parse(json: &str, now_ms: i64) -> Result<Restored, ImportError> {
    let value: serde_json::Value = serde_json::from_str(json)?;

    if value.get("events").is_some_and(|v| v.is_array()) {
        let file: BackupFile = serde_json::from_value(value)?;
        let mut items = file.events;
        fill_created_at(&mut items, now_ms);
        Ok(Restored {
            items,
            order: file.remainder_order,
            box_settings: file.box_settings,
            theme: file.theme,
            legacy: false,
        })
    } else if value.is_array() {
        let mut items: Vec<Item> = serde_json::from_value(value)?;
        fill_created_at(&mut items, now_ms);
        let order = items
            .iter()
            .filter(|i| i.kind.is_countdown())
            .map(|i| i.id)
            .collect();
        Ok(Restored {
            items,
            order: Some(order),
            box_settings: None,
            theme: None,
            legacy: true,
        })
    } else {
        Err(ImportError::UnrecognizedFormat)
    }
}

fn fill_created_at(items: &mut [Item], now_ms: i64) {
    for item in items {
        if item.created_at.is_none() {
            item.created_at = Some(now_ms);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::ItemKind;

    const NOW: i64 = 1_750_000_000_000;

    #[test]
    fn wrapper_format_parses_all_sections() {
        let json = r#"{
            "events": [
                {"id": 1, "type": "event", "name": "Ship", "date": 2000000000000, "description": "", "createdAt": 1700000000000},
                {"id": 2, "type": "lifetime", "name": "Job", "date": 1600000000000, "description": ""}
            ],
            "remainderOrder": [1],
            "boxSettings": {"shape": "square", "size": 300},
            "theme": "dark-theme"
        }"#;
        let restored = parse(json, NOW).unwrap();
        assert!(!restored.legacy);
        assert_eq!(restored.items.len(), 2);
        assert_eq!(restored.order, Some(vec![1]));
        assert_eq!(restored.theme.as_deref(), Some("dark-theme"));
        // The lifetime record had no createdAt: stamped at import.
        assert_eq!(restored.items[1].created_at, Some(NOW));
        // The countdown's original createdAt survives.
        assert_eq!(restored.items[0].created_at, Some(1_700_000_000_000));
    }

    #[test]
    fn wrapper_without_optional_sections_leaves_them_none() {
        let json = r#"{"events": []}"#;
        let restored = parse(json, NOW).unwrap();
        assert!(restored.order.is_none());
        assert!(restored.box_settings.is_none());
        assert!(restored.theme.is_none());
    }

    #[test]
    fn legacy_array_rebuilds_order_from_countdowns() {
        let json = r#"[
            {"id": 1, "type": "event", "name": "A", "date": 2000000000000, "description": ""},
            {"id": 2, "type": "lifetime", "name": "B", "date": 0, "description": ""},
            {"id": 3, "type": "event", "name": "C", "date": 2100000000000, "description": ""}
        ]"#;
        let restored = parse(json, NOW).unwrap();
        assert!(restored.legacy);
        assert_eq!(restored.order, Some(vec![1, 3]));
        assert!(restored.box_settings.is_none());
        assert!(restored.items.iter().all(|i| i.created_at == Some(NOW)));
    }

    #[test]
    fn single_legacy_record_gets_order_and_created_at() {
        let json = r#"[{"id": 1, "type": "event", "name": "X", "date": 2000000000000, "description": ""}]"#;
        let restored = parse(json, NOW).unwrap();
        assert_eq!(restored.order, Some(vec![1]));
        assert_eq!(restored.items[0].created_at, Some(NOW));
    }

    #[test]
    fn unrecognized_shapes_are_rejected() {
        assert!(matches!(
            parse(r#"{"foo": 1}"#, NOW),
            Err(ImportError::UnrecognizedFormat)
        ));
        assert!(matches!(
            parse(r#""just a string""#, NOW),
            Err(ImportError::UnrecognizedFormat)
        ));
        assert!(matches!(
            parse("not json at all", NOW),
            Err(ImportError::InvalidJson(_))
        ));
    }

    #[test]
    fn export_then_parse_reproduces_the_state() {
        let mut store = ItemStore::new();
        store.create(
            ItemKind::Countdown,
            "Ship".into(),
            2_000_000_000_000,
            "v1.0".into(),
        );
        store.create(ItemKind::Ongoing, "Job".into(), 1_600_000_000_000, String::new());
        store.set_theme("blue-theme".into());

        let json = export(&store).unwrap();
        let restored = parse(&json, NOW).unwrap();
        assert_eq!(restored.items, store.items());
        assert_eq!(restored.order.as_deref(), Some(store.order()));
        assert_eq!(restored.theme.as_deref(), Some("blue-theme"));
    }
}
