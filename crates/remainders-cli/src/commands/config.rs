//! Display settings, addressed by dot-separated keys.
//!
//! The settings view is a small JSON document:
//!
//! ```json
//! { "box": { "shape": "rectangle", "size": 250 }, "theme": "light-theme" }
//! ```
//!
//! so `config get box.shape`, `config set box.size 300`, and
//! `config set theme dark-theme` all address into it.

use clap::Subcommand;
use serde::{Deserialize, Serialize};
use remainders_core::{BoxSettings, ItemStore};

use super::common;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print a setting (e.g. box.shape, box.size, theme)
    Get { key: String },
    /// Update a setting
    Set { key: String, value: String },
    /// Print all settings
    List,
}

#[derive(Serialize, Deserialize)]
struct SettingsView {
    #[serde(rename = "box")]
    box_settings: BoxSettings,
    theme: String,
}

impl SettingsView {
    fn of(store: &ItemStore) -> Self {
        Self {
            box_settings: store.settings(),
            theme: store.theme().to_string(),
        }
    }
}

pub fn run(action: ConfigAction) -> Result<(), Box<dyn std::error::Error>> {
    let (db, mut store) = common::open()?;

    match action {
        ConfigAction::Get { key } => {
            let json = serde_json::to_value(SettingsView::of(&store))?;
            let value = get_json_value_by_path(&json, &key)
                .ok_or_else(|| format!("unknown config key: {key}"))?;
            match value {
                serde_json::Value::String(s) => println!("{s}"),
                other => println!("{other}"),
            }
        }
        ConfigAction::Set { key, value } => {
            let mut json = serde_json::to_value(SettingsView::of(&store))?;
            set_json_value_by_path(&mut json, &key, &value)?;
            let view: SettingsView = serde_json::from_value(json)?;
            let changed_theme = view.theme != store.theme();
            if view.box_settings != store.settings() {
                let event = store.set_box_settings(view.box_settings);
                println!("{}", serde_json::to_string_pretty(&event)?);
            }
            if changed_theme {
                let event = store.set_theme(view.theme);
                println!("{}", serde_json::to_string_pretty(&event)?);
            }
            common::persist_lenient(&store, &db);
        }
        ConfigAction::List => {
            let json = serde_json::to_value(SettingsView::of(&store))?;
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
    }

    Ok(())
}

fn get_json_value_by_path<'a>(
    root: &'a serde_json::Value,
    key: &str,
) -> Option<&'a serde_json::Value> {
    if key.is_empty() {
        return None;
    }
    let mut current = root;
    for part in key.split('.') {
        current = current.get(part)?;
    }
    Some(current)
}

fn set_json_value_by_path(
    root: &mut serde_json::Value,
    key: &str,
    value: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut parts = key.split('.').peekable();
    if parts.peek().is_none() {
        return Err("config key is empty".into());
    }

    let mut current = root;
    while let Some(part) = parts.next() {
        let is_leaf = parts.peek().is_none();
        if is_leaf {
            let obj = current
                .as_object_mut()
                .ok_or_else(|| format!("unknown config key: {key}"))?;
            let existing = obj
                .get(part)
                .ok_or_else(|| format!("unknown config key: {key}"))?;

            let new_value = match existing {
                serde_json::Value::Number(_) => {
                    let n = value
                        .parse::<u64>()
                        .map_err(|_| format!("cannot parse '{value}' as number"))?;
                    serde_json::Value::Number(n.into())
                }
                _ => serde_json::Value::String(value.into()),
            };

            obj.insert(part.to_string(), new_value);
            return Ok(());
        }

        current = current
            .get_mut(part)
            .ok_or_else(|| format!("unknown config key: {key}"))?;
    }

    Err(format!("unknown config key: {key}").into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use remainders_core::BoxShape;

    fn view_json() -> serde_json::Value {
        serde_json::to_value(SettingsView {
            box_settings: BoxSettings::default(),
            theme: "light-theme".into(),
        })
        .unwrap()
    }

    #[test]
    fn get_supports_dot_path_keys() {
        let json = view_json();
        assert_eq!(
            get_json_value_by_path(&json, "box.shape").unwrap(),
            &serde_json::Value::String("rectangle".into())
        );
        assert_eq!(
            get_json_value_by_path(&json, "theme").unwrap(),
            &serde_json::Value::String("light-theme".into())
        );
        assert!(get_json_value_by_path(&json, "box.missing").is_none());
        assert!(get_json_value_by_path(&json, "").is_none());
    }

    #[test]
    fn set_updates_nested_number() {
        let mut json = view_json();
        set_json_value_by_path(&mut json, "box.size", "300").unwrap();
        let view: SettingsView = serde_json::from_value(json).unwrap();
        assert_eq!(view.box_settings.size, 300);
    }

    #[test]
    fn set_updates_shape_through_the_enum() {
        let mut json = view_json();
        set_json_value_by_path(&mut json, "box.shape", "square").unwrap();
        let view: SettingsView = serde_json::from_value(json).unwrap();
        assert_eq!(view.box_settings.shape, BoxShape::Square);
    }

    #[test]
    fn set_rejects_unknown_keys_and_bad_numbers() {
        let mut json = view_json();
        assert!(set_json_value_by_path(&mut json, "box.nope", "1").is_err());
        assert!(set_json_value_by_path(&mut json, "box.size", "wide").is_err());
    }

    #[test]
    fn invalid_shape_fails_at_deserialization() {
        let mut json = view_json();
        set_json_value_by_path(&mut json, "box.shape", "triangle").unwrap();
        assert!(serde_json::from_value::<SettingsView>(json).is_err());
    }
}
