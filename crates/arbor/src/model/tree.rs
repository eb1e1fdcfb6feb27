//! Hierarchical items for nested menus and tree controls.
//!
//! A [`TreeItem`] plays both roles at once: it is an item (named, addressable
//! by the identifier its parent derives for it) and the owner of a private
//! child collection. Because its manager id is its own item id, child
//! identifiers chain naturally: the item `menu_2` derives `menu_2_0`,
//! `menu_2_1`, and so on, to arbitrary depth.
//!
//! # Example
//!
//! ```
//! use arbor::model::{ItemCollection, ItemManager, TreeItem};
//!
//! let mut file = TreeItem::new("File");
//! file.add_child(("Open", "open"));
//! file.add_child(("Save", "save"));
//!
//! let mut menu = ItemCollection::with_owner("menu");
//! menu.add_item(file);
//!
//! let open = menu.find_item("menu_0_0").unwrap();
//! assert_eq!(open.name(), Some("Open"));
//! ```

use std::fmt;

use arbor_core::{Error, Properties, PropertyValue, Result};

use super::manager::{ItemManager, ManagedItem};
use crate::style::{ItemStyle, SharedStyle};

/// An item that owns a nested collection of further items.
#[derive(Debug, Clone, Default)]
pub struct TreeItem {
    name: Option<String>,
    value: Option<String>,
    anchor: Option<String>,
    id: Option<String>,
    style: Option<SharedStyle>,
    children: Vec<TreeItem>,
    modified: bool,
}

impl TreeItem {
    /// Creates an item with the given display name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }

    /// Creates an item with a display name and an opaque value.
    pub fn with_value(name: impl Into<String>, value: impl Into<String>) -> Self {
        let mut item = Self::new(name);
        item.value = Some(value.into());
        item
    }

    /// Creates an item with a display name, value, and navigation anchor.
    pub fn with_anchor(
        name: impl Into<String>,
        value: impl Into<String>,
        anchor: impl Into<String>,
    ) -> Self {
        let mut item = Self::with_value(name, value);
        item.anchor = Some(anchor.into());
        item
    }

    /// Gets the display name.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Sets the display name.
    pub fn set_name(&mut self, name: Option<String>) {
        self.name = name;
    }

    /// Gets the opaque value.
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Sets the opaque value.
    pub fn set_value(&mut self, value: Option<String>) {
        self.value = value;
    }

    /// Gets the navigation anchor.
    pub fn anchor(&self) -> Option<&str> {
        self.anchor.as_deref()
    }

    /// Sets the navigation anchor.
    pub fn set_anchor(&mut self, anchor: Option<String>) {
        self.anchor = anchor;
    }

    /// The identifier assigned by the parent collection, if any.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Assigns or clears the identifier. Used by the owning collection,
    /// which restamps the subtree afterwards.
    pub fn set_id(&mut self, id: Option<String>) {
        self.id = id;
    }

    /// Returns `true` iff both name and value are unset.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.value.is_none()
    }

    /// Returns the item's style, allocating a default one on first access.
    ///
    /// The returned handle is cached: every call yields the same shared
    /// instance for the lifetime of the item.
    pub fn style(&mut self) -> SharedStyle {
        self.style
            .get_or_insert_with(|| ItemStyle::new().into_shared())
            .clone()
    }

    /// Replaces the item's style with an existing shared handle.
    pub fn set_style(&mut self, style: SharedStyle) {
        self.style = Some(style);
    }

    /// Whether a style has been allocated for this item.
    pub fn has_style(&self) -> bool {
        self.style.is_some()
    }

    /// Returns the number of children.
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Returns whether the item has children.
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Gets a reference to the child at the given index.
    pub fn child(&self, index: usize) -> Option<&TreeItem> {
        self.children.get(index)
    }

    /// Gets a mutable reference to the child at the given index.
    ///
    /// Structural edits made through the returned child (adding or removing
    /// grandchildren) keep their own subtree indexed; the child's slot here
    /// is untouched.
    pub fn child_mut(&mut self, index: usize) -> Option<&mut TreeItem> {
        self.children.get_mut(index)
    }

    /// Appends a child, built from anything convertible into an item: an
    /// existing [`TreeItem`], a bare name, a `(name, value)` pair, or a
    /// `(name, value, anchor)` triple.
    pub fn add_child(&mut self, child: impl Into<TreeItem>) {
        self.add_item(child.into());
    }

    /// Inserts a child at the given index, shifting later children right.
    pub fn insert_child(&mut self, index: usize, child: impl Into<TreeItem>) -> Result<()> {
        self.insert_item(index, child.into())
    }

    /// Bulk-appends children from a sequence of convertible inputs.
    pub fn add_children<C, I>(&mut self, children: I)
    where
        C: Into<TreeItem>,
        I: IntoIterator<Item = C>,
    {
        let children: Vec<TreeItem> = children.into_iter().map(Into::into).collect();
        self.add_items(children);
    }

    /// Bulk-appends children from keyed name→value input (a map or any
    /// sequence of pairs).
    pub fn add_children_from_pairs<K, V, I>(&mut self, pairs: I)
    where
        K: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        let children: Vec<TreeItem> = pairs
            .into_iter()
            .map(|(name, value)| TreeItem::with_value(name, value))
            .collect();
        self.add_items(children);
    }

    /// Whether this item's subtree changed since the flag was last cleared.
    pub fn is_modified(&self) -> bool {
        self.modified || self.children.iter().any(TreeItem::is_modified)
    }

    /// Clears the modified flag on this item and every descendant.
    pub fn clear_modified(&mut self) {
        self.modified = false;
        for child in &mut self.children {
            child.clear_modified();
        }
    }
}

// Style handles compare by identity, everything else by value.
impl PartialEq for TreeItem {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.value == other.value
            && self.anchor == other.anchor
            && self.id == other.id
            && self.children == other.children
            && match (&self.style, &other.style) {
                (Some(a), Some(b)) => std::sync::Arc::ptr_eq(a, b),
                (None, None) => true,
                _ => false,
            }
    }
}

impl fmt::Display for TreeItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name().unwrap_or(""))
    }
}

impl From<&str> for TreeItem {
    fn from(name: &str) -> Self {
        TreeItem::new(name)
    }
}

impl From<String> for TreeItem {
    fn from(name: String) -> Self {
        TreeItem::new(name)
    }
}

impl<N: Into<String>, V: Into<String>> From<(N, V)> for TreeItem {
    fn from((name, value): (N, V)) -> Self {
        TreeItem::with_value(name, value)
    }
}

impl<N: Into<String>, V: Into<String>, A: Into<String>> From<(N, V, A)> for TreeItem {
    fn from((name, value, anchor): (N, V, A)) -> Self {
        TreeItem::with_anchor(name, value, anchor)
    }
}

impl ManagedItem for TreeItem {
    fn id(&self) -> Option<&str> {
        TreeItem::id(self)
    }

    fn set_id(&mut self, id: Option<String>) {
        TreeItem::set_id(self, id);
    }

    fn value(&self) -> Option<&str> {
        TreeItem::value(self)
    }

    fn reindex_children(&mut self) {
        self.reindex();
    }

    fn find_child(&self, composite: &str) -> Option<&Self> {
        self.find_item(composite)
    }
}

impl ItemManager for TreeItem {
    type Item = TreeItem;

    fn items(&self) -> &[TreeItem] {
        &self.children
    }

    fn items_mut(&mut self) -> &mut Vec<TreeItem> {
        &mut self.children
    }

    fn manager_id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn mark_modified(&mut self) {
        self.modified = true;
    }
}

impl Properties for TreeItem {
    fn entity_name(&self) -> &'static str {
        "TreeItem"
    }

    fn property(&self, name: &str) -> Result<PropertyValue> {
        match name {
            "name" | "text" => Ok(PropertyValue::from(self.name())),
            "value" => Ok(PropertyValue::from(TreeItem::value(self))),
            "anchor" => Ok(PropertyValue::from(self.anchor())),
            "id" => Ok(PropertyValue::from(TreeItem::id(self))),
            "empty" => Ok(PropertyValue::from(self.is_empty())),
            _ => Err(Error::unknown_property(self.entity_name(), name)),
        }
    }

    fn set_property(&mut self, name: &str, value: PropertyValue) -> Result<()> {
        match name {
            "name" | "text" => self.name = value.into_string(name)?,
            "value" => self.value = value.into_string(name)?,
            "anchor" => self.anchor = value.into_string(name)?,
            "id" => self.id = value.into_string(name)?,
            "empty" => return Err(Error::read_only(self.entity_name(), name)),
            _ => return Err(Error::unknown_property(self.entity_name(), name)),
        }
        Ok(())
    }
}
