//! Card rendering.
//!
//! `render` draws every card once; `watch` re-renders on a fixed cadence
//! (1 second by default). The cadence is deliberate polling, not reactive
//! observation: the computation is cheap and idempotent, and each tick
//! fully completes -- compute, reconcile, persist -- before the next.

use clap::Subcommand;
use remainders_core::card::CardView;
use remainders_core::clock;

use super::common;

#[derive(Subcommand)]
pub enum ViewAction {
    /// Render all cards once
    Render {
        /// Print card data as JSON instead of drawing bars
        #[arg(long)]
        json: bool,
    },
    /// Re-render on a fixed cadence
    Watch {
        /// Seconds between ticks
        #[arg(long, default_value = "1")]
        interval: u64,
        /// Stop after this many ticks (runs until interrupted if omitted)
        #[arg(long)]
        ticks: Option<u64>,
    },
}

pub fn run(action: ViewAction) -> Result<(), Box<dyn std::error::Error>> {
    let (db, mut store) = common::open()?;

    match action {
        ViewAction::Render { json } => {
            let cards = store.render(clock::now_ms());
            // The render pass may have healed the order; persist it.
            common::persist_lenient(&store, &db);
            if json {
                println!("{}", serde_json::to_string_pretty(&cards)?);
            } else {
                print_cards(&cards);
            }
        }
        ViewAction::Watch { interval, ticks } => {
            let mut tick = 0u64;
            loop {
                let cards = store.render(clock::now_ms());
                common::persist_lenient(&store, &db);
                println!("── {} ──", chrono::Local::now().format("%H:%M:%S"));
                print_cards(&cards);
                tick += 1;
                if ticks.is_some_and(|n| tick >= n) {
                    break;
                }
                std::thread::sleep(std::time::Duration::from_secs(interval.max(1)));
            }
        }
    }

    Ok(())
}

fn print_cards(cards: &[CardView]) {
    for card in cards {
        println!("[{}] {} ({})", card.id, card.name, card.tone.as_str());
        if !card.description.is_empty() {
            println!("    {}", card.description);
        }
        println!(
            "    {} {:>5.1}% {}",
            bar(&card.progress),
            card.progress.percent,
            card.progress.status.as_str()
        );
        println!("    {}", card.countdown);
    }
}

/// A fixed-width progress bar with the deadline marker overlaid.
fn bar(progress: &remainders_core::Progress) -> String {
    const WIDTH: usize = 30;
    let filled = ((progress.percent / 100.0 * WIDTH as f64).round() as usize).min(WIDTH);
    let mut cells: Vec<char> = (0..WIDTH)
        .map(|i| if i < filled { '#' } else { '-' })
        .collect();
    if let Some(marker) = progress.deadline_marker {
        let slot = ((marker / 100.0 * WIDTH as f64).round() as usize)
            .min(WIDTH)
            .saturating_sub(1);
        cells[slot] = '|';
    }
    format!("[{}]", cells.into_iter().collect::<String>())
}

#[cfg(test)]
mod tests {
    use super::*;
    use remainders_core::{Progress, ProgressStatus};

    #[test]
    fn bar_width_is_stable() {
        let p = Progress {
            percent: 50.0,
            status: ProgressStatus::Mid,
            deadline_marker: Some(100.0),
        };
        let s = bar(&p);
        assert_eq!(s.chars().count(), 32);
        assert!(s.ends_with("|]"));
    }

    #[test]
    fn empty_bar_has_no_fill() {
        let p = Progress {
            percent: 0.0,
            status: ProgressStatus::Early,
            deadline_marker: None,
        };
        assert!(!bar(&p).contains('#'));
    }
}
