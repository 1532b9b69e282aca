use clap::Subcommand;
use remainders_core::card::CardView;
use remainders_core::{clock, ItemPatch};

use super::common;

#[derive(Subcommand)]
pub enum ItemAction {
    /// Add a new item
    Add {
        /// Display name
        name: String,
        /// Target date: deadline for countdowns, start date for ongoing items
        #[arg(long)]
        date: String,
        /// Track as an ongoing "lifetime" instead of a countdown
        #[arg(long)]
        ongoing: bool,
        /// Free-text description
        #[arg(long, default_value = "")]
        description: String,
    },
    /// Edit an existing item
    Edit {
        id: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        date: Option<String>,
        /// Change the item kind (lifetime|event)
        #[arg(long)]
        kind: Option<String>,
        #[arg(long)]
        description: Option<String>,
    },
    /// Delete an item
    Delete { id: i64 },
    /// List all items
    List {
        /// Print raw item records as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show one item with its computed progress
    Show { id: i64 },
}

pub fn run(action: ItemAction) -> Result<(), Box<dyn std::error::Error>> {
    let (db, mut store) = common::open()?;

    match action {
        ItemAction::Add {
            name,
            date,
            ongoing,
            description,
        } => {
            let kind = if ongoing {
                remainders_core::ItemKind::Ongoing
            } else {
                remainders_core::ItemKind::Countdown
            };
            let date = common::parse_datetime(&date)?;
            let event = store.create(kind, name, date, description);
            println!("{}", serde_json::to_string_pretty(&event)?);
            common::persist_lenient(&store, &db);
        }
        ItemAction::Edit {
            id,
            name,
            date,
            kind,
            description,
        } => {
            let patch = ItemPatch {
                kind: kind.as_deref().map(common::parse_kind).transpose()?,
                name,
                date: date.as_deref().map(common::parse_datetime).transpose()?,
                description,
            };
            let event = store.update(id, patch)?;
            println!("{}", serde_json::to_string_pretty(&event)?);
            common::persist_lenient(&store, &db);
        }
        ItemAction::Delete { id } => {
            let event = store.delete(id)?;
            println!("{}", serde_json::to_string_pretty(&event)?);
            common::persist_lenient(&store, &db);
        }
        ItemAction::List { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(store.items())?);
            } else {
                for item in store.items() {
                    println!(
                        "{:>15}  {:<9}  {}",
                        item.id,
                        item.kind.as_str(),
                        item.name
                    );
                }
            }
        }
        ItemAction::Show { id } => {
            let item = store
                .get(id)
                .ok_or_else(|| format!("no item with id {id}"))?;
            let view = CardView::build(item, clock::now_ms());
            println!("{}", serde_json::to_string_pretty(&view)?);
        }
    }

    Ok(())
}
