//! Ordered item collections with derived, hierarchical identifiers.
//!
//! Every control that presents a list of items owns one collection. The
//! collection keeps its items in display order, and after every structural
//! mutation it re-derives each item's identifier from the owner's identifier
//! and the item's current position: the item at position `i` under owner `P`
//! is `P_i`. Nested collections extend the scheme recursively, so a child of
//! that item sits at `P_i_j`.
//!
//! Identifier assignment is lazy: a collection whose owner has no identifier
//! yet leaves item ids unset, and stamps them all once the owner is attached
//! (see [`ItemCollection::attach`]).
//!
//! # Example
//!
//! ```
//! use arbor::model::{ItemCollection, ItemManager, ListItem};
//!
//! let mut list = ItemCollection::with_owner("lst");
//! list.add_item(ListItem::with_value("Red", "#f00"));
//! list.add_item(ListItem::with_value("Green", "#0f0"));
//!
//! assert_eq!(list.item(1).unwrap().id(), Some("lst_1"));
//! assert_eq!(list.find_item("lst_1").unwrap().name(), Some("Green"));
//! ```

use arbor_core::{Error, Result};
use tracing::{debug, trace};

use super::item::ListItem;

/// An item that can live in an [`ItemManager`] collection.
///
/// The manager drives identifier assignment through this trait; items that
/// themselves own a nested collection additionally forward reindexing and
/// composite lookups into their children.
pub trait ManagedItem {
    /// The identifier assigned by the owning collection, if any.
    fn id(&self) -> Option<&str>;

    /// Assigns or clears the identifier.
    ///
    /// Used by the owning collection; callers must not assume an identifier
    /// is stable across mutations performed by others.
    fn set_id(&mut self, id: Option<String>);

    /// The opaque value carried by the item, if any.
    fn value(&self) -> Option<&str>;

    /// Re-derives identifiers in this item's nested collection, if it owns
    /// one. The default is a no-op for leaf items.
    fn reindex_children(&mut self) {}

    /// Resolves a composite identifier inside this item's nested collection,
    /// if it owns one. The default reports not-found for leaf items.
    fn find_child(&self, composite: &str) -> Option<&Self> {
        let _ = composite;
        None
    }
}

/// The collection capability: an ordered, mutable sequence of items owned by
/// a parent container.
///
/// Implementors supply storage access plus two owner hooks — the owner's
/// identifier (the basis for every derived item id) and a modified
/// notification fired on every structural change. The operations themselves
/// are provided.
///
/// After any successful mutating operation the sequence is contiguous and,
/// wherever the manager id is set, every item id matches its position.
/// Out-of-range positions fail with [`Error::IndexOutOfRange`] before any
/// state changes.
pub trait ItemManager {
    /// The item type stored in this collection.
    type Item: ManagedItem;

    /// The items in display order.
    fn items(&self) -> &[Self::Item];

    /// Direct access to the backing storage.
    ///
    /// Mutating through this bypasses identifier derivation; callers doing so
    /// must invoke [`reindex`](ItemManager::reindex) themselves.
    fn items_mut(&mut self) -> &mut Vec<Self::Item>;

    /// The owning container's identifier, if assigned yet.
    fn manager_id(&self) -> Option<&str>;

    /// Notifies the owning container of a structural change.
    fn mark_modified(&mut self);

    /// The number of items.
    fn item_count(&self) -> usize {
        self.items().len()
    }

    /// Appends an item.
    ///
    /// If the manager id is assigned, the new item is stamped with its
    /// position id and its nested collection (if any) is reindexed beneath
    /// it; no other item is touched.
    fn add_item(&mut self, mut item: Self::Item) {
        if let Some(owner) = self.manager_id().map(str::to_owned) {
            let index = self.items().len();
            item.set_id(Some(format!("{owner}_{index}")));
            item.reindex_children();
        }
        self.items_mut().push(item);
        self.mark_modified();
    }

    /// Inserts an item at `index`, shifting later items right.
    ///
    /// `index` may be anywhere in `0..=count`; `count` appends. Anything
    /// larger fails with [`Error::IndexOutOfRange`].
    fn insert_item(&mut self, index: usize, item: Self::Item) -> Result<()> {
        let len = self.items().len();
        if index > len {
            return Err(Error::index_out_of_range(index, len));
        }
        self.items_mut().insert(index, item);
        self.reindex();
        self.mark_modified();
        Ok(())
    }

    /// Bulk-appends items, preserving their order.
    fn add_items<I>(&mut self, items: I)
    where
        I: IntoIterator<Item = Self::Item>,
        Self: Sized,
    {
        self.items_mut().extend(items);
        self.reindex();
        self.mark_modified();
    }

    /// Returns the item at `index`, or [`Error::IndexOutOfRange`].
    fn item(&self, index: usize) -> Result<&Self::Item> {
        let len = self.items().len();
        self.items()
            .get(index)
            .ok_or_else(|| Error::index_out_of_range(index, len))
    }

    /// Removes and returns the item at `index`, shifting later items left.
    fn remove_item(&mut self, index: usize) -> Result<Self::Item> {
        let len = self.items().len();
        if index >= len {
            return Err(Error::index_out_of_range(index, len));
        }
        let item = self.items_mut().remove(index);
        self.mark_modified();
        self.reindex();
        Ok(item)
    }

    /// Overwrites the slot at `index` with `item`.
    ///
    /// The replacement is stamped with the slot's id; the rest of the
    /// sequence is untouched. Fails with [`Error::IndexOutOfRange`] outside
    /// `0..count`.
    fn replace_item(&mut self, index: usize, mut item: Self::Item) -> Result<()> {
        let len = self.items().len();
        if index >= len {
            return Err(Error::index_out_of_range(index, len));
        }
        if let Some(owner) = self.manager_id().map(str::to_owned) {
            item.set_id(Some(format!("{owner}_{index}")));
            item.reindex_children();
        }
        self.items_mut()[index] = item;
        self.mark_modified();
        Ok(())
    }

    /// Removes all items.
    fn clear_items(&mut self) {
        self.items_mut().clear();
        self.mark_modified();
    }

    /// Re-derives every item's identifier from its current position,
    /// recursing into nested collections. A no-op while the manager id is
    /// unset.
    fn reindex(&mut self) {
        let Some(owner) = self.manager_id().map(str::to_owned) else {
            return;
        };
        for (index, item) in self.items_mut().iter_mut().enumerate() {
            item.set_id(Some(format!("{owner}_{index}")));
            item.reindex_children();
        }
        trace!(owner = %owner, count = self.items().len(), "reindexed items");
    }

    /// Resolves a composite identifier such as `"menu_2_0"` to an item,
    /// recursing through nested collections level by level.
    ///
    /// The segment after the owner prefix is the position in this collection;
    /// a non-numeric or out-of-range position is not-found. Resolution
    /// assumes the owner identifier itself carries no underscore.
    fn find_item(&self, composite: &str) -> Option<&Self::Item> {
        let mut segments = composite.splitn(3, '_');
        segments.next()?;
        let position = segments.next()?;
        let index: usize = position.parse().ok()?;
        let item = self.items().get(index)?;
        match segments.next() {
            Some(rest) => item.find_child(&format!("{position}_{rest}")),
            None => Some(item),
        }
    }

    /// Returns the first (lowest-index) item carrying the given value.
    fn find_item_by_value(&self, value: &str) -> Option<&Self::Item> {
        self.items().iter().find(|item| item.value() == Some(value))
    }
}

/// Owner-side storage for a collection of items.
///
/// A control embeds one of these per item list. The collection records
/// structural changes in a modified flag the control polls (and clears) when
/// deciding whether to re-render.
#[derive(Debug, Clone)]
pub struct ItemCollection<T = ListItem> {
    owner_id: Option<String>,
    items: Vec<T>,
    modified: bool,
}

impl<T: ManagedItem> ItemCollection<T> {
    /// Creates an empty collection with no owner identifier yet.
    ///
    /// Item ids stay unset until [`attach`](Self::attach) supplies one.
    pub fn new() -> Self {
        Self {
            owner_id: None,
            items: Vec::new(),
            modified: false,
        }
    }

    /// Creates an empty collection owned by the given identifier.
    pub fn with_owner(id: impl Into<String>) -> Self {
        let mut collection = Self::new();
        collection.owner_id = Some(id.into());
        collection
    }

    /// The owner identifier, if assigned.
    pub fn owner_id(&self) -> Option<&str> {
        self.owner_id.as_deref()
    }

    /// Assigns the owner identifier and stamps every item id from it.
    ///
    /// Called when the owning container is attached to a parent and learns
    /// its own identifier.
    pub fn attach(&mut self, id: impl Into<String>) {
        let id = id.into();
        debug!(owner = %id, count = self.items.len(), "attached item collection");
        self.owner_id = Some(id);
        self.reindex();
    }

    /// Whether a structural change happened since the flag was last cleared.
    pub fn is_modified(&self) -> bool {
        self.modified
    }

    /// Clears the modified flag.
    pub fn clear_modified(&mut self) {
        self.modified = false;
    }
}

impl<T: ManagedItem> Default for ItemCollection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ManagedItem> ItemManager for ItemCollection<T> {
    type Item = T;

    fn items(&self) -> &[T] {
        &self.items
    }

    fn items_mut(&mut self) -> &mut Vec<T> {
        &mut self.items
    }

    fn manager_id(&self) -> Option<&str> {
        self.owner_id.as_deref()
    }

    fn mark_modified(&mut self) {
        self.modified = true;
    }
}

impl ItemCollection<ListItem> {
    /// The selected items, in display order.
    pub fn selected_items(&self) -> Vec<&ListItem> {
        self.items.iter().filter(|item| item.is_selected()).collect()
    }

    /// The first selected item, if any.
    pub fn first_selected(&self) -> Option<&ListItem> {
        self.items.iter().find(|item| item.is_selected())
    }

    /// Deselects every item.
    pub fn clear_selection(&mut self) {
        for item in &mut self.items {
            item.set_selected(false);
        }
        self.modified = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .try_init();
    }

    fn color_list() -> ItemCollection<ListItem> {
        let mut list = ItemCollection::with_owner("lst");
        list.add_item(ListItem::with_value("Red", "#f00"));
        list.add_item(ListItem::with_value("Green", "#0f0"));
        list.add_item(ListItem::with_value("Blue", "#00f"));
        list
    }

    fn ids(list: &ItemCollection<ListItem>) -> Vec<Option<&str>> {
        list.items().iter().map(|item| item.id()).collect()
    }

    #[test]
    fn test_add_assigns_position_ids() {
        setup();
        let list = color_list();
        assert_eq!(list.item_count(), 3);
        assert_eq!(
            ids(&list),
            [Some("lst_0"), Some("lst_1"), Some("lst_2")]
        );
    }

    #[test]
    fn test_find_item_by_composite_id() {
        setup();
        let list = color_list();
        assert_eq!(list.find_item("lst_1").unwrap().name(), Some("Green"));
        assert_eq!(list.find_item("lst_3"), None);
        assert_eq!(list.find_item("lst_x"), None);
        assert_eq!(list.find_item("lst"), None);
    }

    #[test]
    fn test_find_item_on_empty_collection() {
        let list: ItemCollection<ListItem> = ItemCollection::with_owner("lst");
        assert_eq!(list.find_item("lst_0"), None);
    }

    #[test]
    fn test_remove_shifts_and_reindexes() {
        setup();
        let mut list = color_list();
        let removed = list.remove_item(0).unwrap();
        assert_eq!(removed.name(), Some("Red"));

        assert_eq!(list.item_count(), 2);
        assert_eq!(list.item(0).unwrap().name(), Some("Green"));
        assert_eq!(list.item(1).unwrap().name(), Some("Blue"));
        assert_eq!(ids(&list), [Some("lst_0"), Some("lst_1")]);

        let err = list.remove_item(2).unwrap_err();
        assert_eq!(err, Error::IndexOutOfRange { index: 2, len: 2 });
    }

    #[test]
    fn test_insert_at_count_appends() {
        let mut list = color_list();
        list.insert_item(3, ListItem::new("White")).unwrap();
        assert_eq!(list.item(3).unwrap().id(), Some("lst_3"));
    }

    #[test]
    fn test_insert_beyond_count_fails() {
        let mut list = color_list();
        let err = list.insert_item(5, ListItem::new("White")).unwrap_err();
        assert_eq!(err, Error::IndexOutOfRange { index: 5, len: 3 });
        // Nothing was mutated
        assert_eq!(list.item_count(), 3);
        assert_eq!(
            ids(&list),
            [Some("lst_0"), Some("lst_1"), Some("lst_2")]
        );
    }

    #[test]
    fn test_insert_in_middle_reindexes_all() {
        let mut list = color_list();
        list.insert_item(1, ListItem::with_value("Yellow", "#ff0"))
            .unwrap();
        assert_eq!(list.item(1).unwrap().name(), Some("Yellow"));
        assert_eq!(
            ids(&list),
            [Some("lst_0"), Some("lst_1"), Some("lst_2"), Some("lst_3")]
        );
        assert_eq!(list.item(2).unwrap().name(), Some("Green"));
    }

    #[test]
    fn test_add_items_bulk_preserves_order() {
        let mut list = ItemCollection::with_owner("lst");
        list.add_items([
            ListItem::new("a"),
            ListItem::new("b"),
            ListItem::new("c"),
        ]);
        assert_eq!(list.item_count(), 3);
        assert_eq!(list.item(2).unwrap().name(), Some("c"));
        assert_eq!(
            ids(&list),
            [Some("lst_0"), Some("lst_1"), Some("lst_2")]
        );
    }

    #[test]
    fn test_replace_item_stamps_slot_id() {
        let mut list = color_list();
        list.replace_item(1, ListItem::with_value("Lime", "#3f3"))
            .unwrap();
        assert_eq!(list.item(1).unwrap().name(), Some("Lime"));
        assert_eq!(list.item(1).unwrap().id(), Some("lst_1"));
        assert_eq!(list.item_count(), 3);

        let err = list
            .replace_item(3, ListItem::new("nope"))
            .unwrap_err();
        assert_eq!(err, Error::IndexOutOfRange { index: 3, len: 3 });
    }

    #[test]
    fn test_item_out_of_range() {
        let list = color_list();
        let err = list.item(3).unwrap_err();
        assert_eq!(err, Error::IndexOutOfRange { index: 3, len: 3 });
    }

    #[test]
    fn test_contiguity_through_mixed_mutations() {
        let mut list = color_list();
        list.insert_item(0, ListItem::new("head")).unwrap();
        list.remove_item(2).unwrap();
        list.add_item(ListItem::new("tail"));
        list.replace_item(1, ListItem::new("mid")).unwrap();

        let count = list.item_count();
        assert_eq!(count, 4);
        for i in 0..count {
            assert!(list.item(i).is_ok());
            assert_eq!(list.item(i).unwrap().id(), Some(format!("lst_{i}").as_str()));
        }
        assert!(list.item(count).is_err());
    }

    #[test]
    fn test_round_trip_lookup() {
        let list = color_list();
        for i in 0..list.item_count() {
            let item = list.item(i).unwrap();
            let found = list.find_item(item.id().unwrap()).unwrap();
            assert_eq!(found.name(), item.name());
        }
    }

    #[test]
    fn test_find_by_value_returns_first_match() {
        let mut list = color_list();
        list.add_item(ListItem::with_value("Crimson", "#f00"));
        let found = list.find_item_by_value("#f00").unwrap();
        assert_eq!(found.name(), Some("Red"));
        assert_eq!(list.find_item_by_value("#fff"), None);
    }

    #[test]
    fn test_lazy_ids_assigned_on_attach() {
        let mut list: ItemCollection<ListItem> = ItemCollection::new();
        list.add_item(ListItem::new("Red"));
        list.add_item(ListItem::new("Green"));
        assert_eq!(ids(&list), [None, None]);

        list.attach("lst");
        assert_eq!(ids(&list), [Some("lst_0"), Some("lst_1")]);
    }

    #[test]
    fn test_clear_items() {
        let mut list = color_list();
        list.clear_modified();
        list.clear_items();
        assert_eq!(list.item_count(), 0);
        assert!(list.is_modified());
    }

    #[test]
    fn test_modified_flag_tracks_mutations() {
        let mut list = color_list();
        list.clear_modified();
        assert!(!list.is_modified());

        list.add_item(ListItem::new("White"));
        assert!(list.is_modified());

        list.clear_modified();
        list.remove_item(0).unwrap();
        assert!(list.is_modified());

        // Failed operations do not notify
        list.clear_modified();
        assert!(list.remove_item(99).is_err());
        assert!(!list.is_modified());
    }

    #[test]
    fn test_selection_helpers() {
        let mut list = color_list();
        list.items_mut()[0].set_selected(true);
        list.items_mut()[2].set_selected(true);

        let selected = list.selected_items();
        assert_eq!(selected.len(), 2);
        assert_eq!(selected[0].name(), Some("Red"));
        assert_eq!(list.first_selected().unwrap().name(), Some("Red"));

        list.clear_selection();
        assert!(list.selected_items().is_empty());
        assert!(list.is_modified());
    }
}
