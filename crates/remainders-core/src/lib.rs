//! # Remainders Core Library
//!
//! This library provides the core logic for Remainders, a countdown and
//! reminder tracker. It follows a CLI-first philosophy: all operations are
//! available through a standalone CLI binary, with any graphical front end
//! being a thin presentation layer over the same core library.
//!
//! ## Architecture
//!
//! - **Progress Engine**: pure computation mapping an item and a wall-clock
//!   instant to a progress fraction, a qualitative status, and a calendar
//!   duration breakdown. The caller drives it on a fixed polling cadence.
//! - **Order Reconciler**: keeps the persisted countdown priority order
//!   consistent with the live item set on every render pass.
//! - **Item Store**: owns the item collection, order, and display settings;
//!   persists through a SQLite-backed key-value store.
//! - **Backup**: JSON export/import, including the legacy bare-array format.
//!
//! ## Key Components
//!
//! - [`ItemStore`]: the owning collection with mutation operations
//! - [`Database`]: key-value persistence
//! - [`Progress`]: per-item progress fraction and status
//! - [`DurationParts`]: calendar-correct duration breakdown
//! - [`CardView`]: the per-render display contract

pub mod backup;
pub mod card;
pub mod clock;
pub mod duration;
pub mod error;
pub mod events;
pub mod item;
pub mod order;
pub mod progress;
pub mod settings;
pub mod storage;
pub mod store;

pub use card::{CardTone, CardView};
pub use duration::{decompose, DurationParts};
pub use error::{CoreError, ImportError, Result, StorageError, ValidationError};
pub use events::Event;
pub use item::{Item, ItemKind, ItemPatch};
pub use progress::{Progress, ProgressStatus};
pub use settings::{BoxSettings, BoxShape};
pub use storage::Database;
pub use store::ItemStore;
