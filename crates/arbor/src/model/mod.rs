//! The item model: ordered collections of named items with derived,
//! hierarchically composed identifiers.
//!
//! # Core Types
//!
//! - [`ListItem`]: a leaf item (name, opaque value, shared style, derived id)
//! - [`ItemManager`]: the collection capability — insertion, removal,
//!   replacement, lookup, and identifier re-derivation
//! - [`ItemCollection`]: owner-side storage implementing [`ItemManager`]
//! - [`TreeItem`]: an item that owns a nested collection, for menus and trees
//! - [`ItemRecord`]: the flat per-item record client scripts consume
//!
//! # Identifier scheme
//!
//! A collection owned by `lst` stamps its items `lst_0`, `lst_1`, … in
//! display order, restamping after every structural change. Tree items chain
//! the scheme: the children of `menu_2` are `menu_2_0`, `menu_2_1`, … and
//! [`ItemManager::find_item`] walks a composite identifier back down the
//! levels.

mod item;
mod manager;
mod record;
mod tree;

pub use item::ListItem;
pub use manager::{ItemCollection, ItemManager, ManagedItem};
pub use record::ItemRecord;
pub use tree::TreeItem;
