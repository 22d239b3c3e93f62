//! Item index registry for Generation 1 and Generation 2 game data.
//!
//! Each generation stores items as a single byte. [`ItemRegistry`] maps
//! those bytes to symbolic names and back, after checking that every
//! table is dense, unique and fits the 8-bit range.

mod data;
pub mod definition;
pub mod error;
pub mod generation;
pub mod registry;
pub mod table;

pub use definition::{EntryDefinition, TableDefinition};
pub use error::{CoreError, CoreErrorCode};
pub use generation::Generation;
pub use registry::ItemRegistry;
pub use table::{Entries, ItemEntry, ItemTable, MAX_STORABLE_INDEX, is_placeholder_name};
