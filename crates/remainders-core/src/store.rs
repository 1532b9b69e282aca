//! The owning item store.
//!
//! An [`ItemStore`] exclusively owns the item collection, the countdown
//! priority order, and display settings for the lifetime of the process.
//! The presentation layer holds no copy; it reads through the store on
//! every render pass.
//!
//! Mutations apply in memory and return an [`Event`]; persistence is a
//! separate step ([`ItemStore::persist`]) so a failed save degrades to a
//! warning while the in-memory state stays authoritative for the session.

use chrono::Utc;

use crate::backup::Restored;
use crate::card::CardView;
use crate::clock;
use crate::error::{Result, StorageError, ValidationError};
use crate::events::Event;
use crate::item::{Item, ItemKind, ItemPatch};
use crate::order;
use crate::settings::{default_theme, BoxSettings};
use crate::storage::{Database, KEY_BOX_SETTINGS, KEY_EVENTS, KEY_ORDER, KEY_THEME};

#[derive(Debug, Clone)]
pub struct ItemStore {
    items: Vec<Item>,
    order: Vec<i64>,
    settings: BoxSettings,
    theme: String,
}

impl Default for ItemStore {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            order: Vec::new(),
            settings: BoxSettings::default(),
            theme: default_theme(),
        }
    }
}

impl ItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn order(&self) -> &[i64] {
        &self.order
    }

    pub fn settings(&self) -> BoxSettings {
        self.settings
    }

    pub fn theme(&self) -> &str {
        &self.theme
    }

    pub fn get(&self, id: i64) -> Option<&Item> {
        self.items.iter().find(|i| i.id == id)
    }

    fn countdown_ids(&self) -> Vec<i64> {
        self.items
            .iter()
            .filter(|i| i.kind.is_countdown())
            .map(|i| i.id)
            .collect()
    }

    // ── Mutations ────────────────────────────────────────────────────

    /// Create an item. New countdowns take top priority.
    ///
    /// The id is the creation instant in epoch ms; two creations within
    /// the same millisecond can collide. Accepted limitation of the id
    /// scheme.
    pub fn create(&mut self, kind: ItemKind, name: String, date: i64, description: String) -> Event {
        let now = clock::now_ms();
        self.items.push(Item {
            id: now,
            kind,
            name: name.clone(),
            date,
            description,
            created_at: Some(now),
        });
        if kind.is_countdown() {
            self.order.insert(0, now);
        }
        Event::ItemAdded {
            id: now,
            kind,
            name,
            at: Utc::now(),
        }
    }

    /// Apply a partial update. A kind change into `Countdown` puts the id
    /// at the front of the order; a change away removes it.
    pub fn update(&mut self, id: i64, patch: ItemPatch) -> Result<Event> {
        let item = self
            .items
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or(ValidationError::UnknownItem { id })?;
        let old_kind = item.kind;
        if let Some(kind) = patch.kind {
            item.kind = kind;
        }
        if let Some(name) = patch.name {
            item.name = name;
        }
        if let Some(date) = patch.date {
            item.date = date;
        }
        if let Some(description) = patch.description {
            item.description = description;
        }
        if item.created_at.is_none() {
            item.created_at = Some(clock::now_ms());
        }
        let kind = item.kind;

        if kind.is_countdown() && !old_kind.is_countdown() && !self.order.contains(&id) {
            self.order.insert(0, id);
        }
        if old_kind.is_countdown() && !kind.is_countdown() {
            self.order.retain(|&x| x != id);
        }

        Ok(Event::ItemUpdated {
            id,
            kind,
            at: Utc::now(),
        })
    }

    pub fn delete(&mut self, id: i64) -> Result<Event> {
        let index = self
            .items
            .iter()
            .position(|i| i.id == id)
            .ok_or(ValidationError::UnknownItem { id })?;
        let item = self.items.remove(index);
        if item.kind.is_countdown() {
            self.order.retain(|&x| x != id);
        }
        Ok(Event::ItemDeleted {
            id,
            kind: item.kind,
            at: Utc::now(),
        })
    }

    /// Replace the priority order wholesale (the CLI counterpart of drag
    /// and drop). The result is reconciled against the live set before it
    /// takes effect.
    pub fn set_order(&mut self, ids: Vec<i64>) -> Event {
        self.order = ids;
        self.reconcile_order();
        Event::OrderChanged {
            order: self.order.clone(),
            at: Utc::now(),
        }
    }

    /// Move a countdown item to `position` in the order (0 = top).
    pub fn move_to(&mut self, id: i64, position: usize) -> Result<Event> {
        self.reconcile_order();
        if !self.order.contains(&id) {
            return Err(ValidationError::UnknownItem { id }.into());
        }
        self.order.retain(|&x| x != id);
        let position = position.min(self.order.len());
        self.order.insert(position, id);
        Ok(Event::OrderChanged {
            order: self.order.clone(),
            at: Utc::now(),
        })
    }

    pub fn set_box_settings(&mut self, settings: BoxSettings) -> Event {
        self.settings = settings;
        Event::SettingsChanged {
            shape: settings.shape,
            size: settings.size,
            at: Utc::now(),
        }
    }

    pub fn set_theme(&mut self, theme: String) -> Event {
        self.theme = theme.clone();
        Event::ThemeChanged {
            theme,
            at: Utc::now(),
        }
    }

    /// Replace state from a parsed backup. Fields the backup didn't carry
    /// keep their current values; the order is reconciled afterwards, so a
    /// backup with a stale order array converges immediately.
    pub fn apply_backup(&mut self, restored: Restored) -> Event {
        let Restored {
            items,
            order,
            box_settings,
            theme,
            legacy,
        } = restored;
        let count = items.len();
        self.items = items;
        if let Some(order) = order {
            self.order = order;
        }
        if let Some(settings) = box_settings {
            self.settings = settings;
        }
        if let Some(theme) = theme {
            self.theme = theme;
        }
        self.reconcile_order();
        Event::BackupImported {
            items: count,
            legacy,
            at: Utc::now(),
        }
    }

    // ── Render pass ──────────────────────────────────────────────────

    /// Heal the priority order against the live item set. Runs on every
    /// render pass; a no-op when the order is already consistent.
    pub fn reconcile_order(&mut self) {
        self.order = order::reconcile(&self.order, &self.countdown_ids());
    }

    /// One render pass: reconcile the order, then produce display data for
    /// every item -- ongoing items first (by start date), then countdowns
    /// in priority order.
    pub fn render(&mut self, now_ms: i64) -> Vec<CardView> {
        self.reconcile_order();

        let mut ongoing: Vec<&Item> = self
            .items
            .iter()
            .filter(|i| !i.kind.is_countdown())
            .collect();
        ongoing.sort_by_key(|i| i.date);

        let mut countdowns: Vec<&Item> =
            self.items.iter().filter(|i| i.kind.is_countdown()).collect();
        countdowns.sort_by(|a, b| order::display_cmp(a, b, &self.order));

        ongoing
            .into_iter()
            .chain(countdowns)
            .map(|item| CardView::build(item, now_ms))
            .collect()
    }

    // ── Persistence ──────────────────────────────────────────────────

    /// Load state from the kv store. Missing or corrupt keys fall back to
    /// defaults; the session stays usable either way.
    pub fn load(db: &Database) -> Self {
        let mut store = Self::default();
        if let Ok(Some(json)) = db.kv_get(KEY_EVENTS) {
            if let Ok(items) = serde_json::from_str(&json) {
                store.items = items;
            }
        }
        if let Ok(Some(json)) = db.kv_get(KEY_ORDER) {
            if let Ok(order) = serde_json::from_str(&json) {
                store.order = order;
            }
        }
        if let Ok(Some(json)) = db.kv_get(KEY_BOX_SETTINGS) {
            if let Ok(settings) = serde_json::from_str(&json) {
                store.settings = settings;
            }
        }
        if let Ok(Some(theme)) = db.kv_get(KEY_THEME) {
            store.theme = theme;
        }
        store.reconcile_order();
        store
    }

    /// Write the full state to the kv store.
    pub fn persist(&self, db: &Database) -> Result<()> {
        db.kv_set(KEY_EVENTS, &serde_json::to_string(&self.items)?)
            .map_err(StorageError::from)?;
        db.kv_set(KEY_ORDER, &serde_json::to_string(&self.order)?)
            .map_err(StorageError::from)?;
        db.kv_set(KEY_BOX_SETTINGS, &serde_json::to_string(&self.settings)?)
            .map_err(StorageError::from)?;
        db.kv_set(KEY_THEME, &self.theme)
            .map_err(StorageError::from)?;
        Ok(())
    }
}
