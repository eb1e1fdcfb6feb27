//! arbor — ordered, hierarchically addressable item collections for
//! server-rendered UI controls.
//!
//! A control (a select box, a radio list, a nested menu) owns one
//! [`model::ItemCollection`]; callers mutate it through the
//! [`model::ItemManager`] operations, and every structural change re-derives
//! the position-based identifiers and flags the owner as modified. Composite
//! identifiers resolve back through nested collections, so `menu_2_0` names
//! the first child of the third menu entry.
//!
//! # Example
//!
//! ```
//! use arbor::prelude::*;
//!
//! let mut list = ItemCollection::with_owner("lst");
//! list.add_item(ListItem::with_value("Red", "#f00"));
//! list.add_item(ListItem::with_value("Green", "#0f0"));
//! list.add_item(ListItem::with_value("Blue", "#00f"));
//!
//! assert_eq!(list.find_item("lst_1").unwrap().name(), Some("Green"));
//!
//! list.remove_item(0)?;
//! assert_eq!(list.item(0)?.id(), Some("lst_0"));
//! assert_eq!(list.item(0)?.name(), Some("Green"));
//! # Ok::<(), arbor::Error>(())
//! ```
//!
//! Collections are meant to be owned exclusively by their enclosing container
//! for the container's lifetime; nothing here locks, so concurrent use of one
//! collection must be serialized by the caller. The only shared state is the
//! per-item style handle ([`style::SharedStyle`]).

pub mod model;
pub mod prelude;
pub mod style;

pub use arbor_core::{Error, Properties, PropertyValue, Result};

use static_assertions::assert_impl_all;

assert_impl_all!(model::ListItem: Send, Sync);
assert_impl_all!(model::TreeItem: Send, Sync);
assert_impl_all!(model::ItemCollection<model::ListItem>: Send, Sync);
assert_impl_all!(model::ItemCollection<model::TreeItem>: Send, Sync);
