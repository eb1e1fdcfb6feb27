//! Convenient re-exports for typical usage.
//!
//! ```
//! use arbor::prelude::*;
//!
//! let mut list = ItemCollection::with_owner("lst");
//! list.add_item(ListItem::new("Red"));
//! assert_eq!(list.item_count(), 1);
//! ```

pub use crate::model::{
    ItemCollection, ItemManager, ItemRecord, ListItem, ManagedItem, TreeItem,
};
pub use crate::style::{ItemStyle, SharedStyle};
pub use arbor_core::{Error, Properties, PropertyValue, Result};
