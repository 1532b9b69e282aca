use clap::Subcommand;

use super::common;

#[derive(Subcommand)]
pub enum OrderAction {
    /// Print the current priority order (highest first)
    Show,
    /// Replace the order with the given ids
    Set { ids: Vec<i64> },
    /// Move an item to a position in the order (0 = top)
    Move { id: i64, position: usize },
}

pub fn run(action: OrderAction) -> Result<(), Box<dyn std::error::Error>> {
    let (db, mut store) = common::open()?;

    match action {
        OrderAction::Show => {
            for (position, id) in store.order().iter().enumerate() {
                let name = store.get(*id).map(|i| i.name.as_str()).unwrap_or("?");
                println!("{position:>3}  {id:>15}  {name}");
            }
        }
        OrderAction::Set { ids } => {
            let event = store.set_order(ids);
            println!("{}", serde_json::to_string_pretty(&event)?);
            common::persist_lenient(&store, &db);
        }
        OrderAction::Move { id, position } => {
            let event = store.move_to(id, position)?;
            println!("{}", serde_json::to_string_pretty(&event)?);
            common::persist_lenient(&store, &db);
        }
    }

    Ok(())
}
