//! Leaf items for flat list controls.
//!
//! A [`ListItem`] holds a display name, an opaque value (typically a database
//! key), optional label/group text for client-side records, a selection flag,
//! a lazily created shared style, and the identifier derived for it by the
//! owning collection.

use std::fmt;

use arbor_core::{Error, Properties, PropertyValue, Result};

use super::manager::ManagedItem;
use super::record::ItemRecord;
use crate::style::{ItemStyle, SharedStyle};

/// An item in a flat list control.
///
/// Items are created by the caller and owned by exactly one collection slot
/// thereafter; the identifier is assigned (and re-assigned) by that
/// collection as the sequence changes.
#[derive(Debug, Clone, Default)]
pub struct ListItem {
    name: Option<String>,
    value: Option<String>,
    label: Option<String>,
    group: Option<String>,
    selected: bool,
    id: Option<String>,
    style: Option<SharedStyle>,
}

impl ListItem {
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

    /// Gets the display name.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Sets the display name.
    pub fn set_name(&mut self, name: Option<String>) {
        self.name = name;
    }

    /// The display name under its raw-text alias.
    pub fn text(&self) -> Option<&str> {
        self.name()
    }

    /// Sets the display name through its raw-text alias.
    pub fn set_text(&mut self, text: Option<String>) {
        self.set_name(text);
    }

    /// Gets the opaque value.
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Sets the opaque value.
    pub fn set_value(&mut self, value: Option<String>) {
        self.value = value;
    }

    /// Gets the client-record label.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Sets the client-record label.
    pub fn set_label(&mut self, label: Option<String>) {
        self.label = label;
    }

    /// Gets the client-record group.
    pub fn group(&self) -> Option<&str> {
        self.group.as_deref()
    }

    /// Sets the client-record group.
    pub fn set_group(&mut self, group: Option<String>) {
        self.group = group;
    }

    /// Returns whether the item is selected.
    pub fn is_selected(&self) -> bool {
        self.selected
    }

    /// Sets the selection flag.
    pub fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }

    /// The identifier assigned by the owning collection, if any.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Assigns or clears the identifier. Used by the owning collection.
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

    /// The flat record handed to client-side renderers.
    pub fn record(&self) -> ItemRecord<'_> {
        ItemRecord {
            value: self.name(),
            id: self.id(),
            label: self.label(),
            group: self.group(),
        }
    }
}

// Style handles compare by identity, everything else by value.
impl PartialEq for ListItem {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.value == other.value
            && self.label == other.label
            && self.group == other.group
            && self.selected == other.selected
            && self.id == other.id
            && match (&self.style, &other.style) {
                (Some(a), Some(b)) => std::sync::Arc::ptr_eq(a, b),
                (None, None) => true,
                _ => false,
            }
    }
}

impl fmt::Display for ListItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name().unwrap_or(""))
    }
}

impl ManagedItem for ListItem {
    fn id(&self) -> Option<&str> {
        ListItem::id(self)
    }

    fn set_id(&mut self, id: Option<String>) {
        ListItem::set_id(self, id);
    }

    fn value(&self) -> Option<&str> {
        ListItem::value(self)
    }
}

impl Properties for ListItem {
    fn entity_name(&self) -> &'static str {
        "ListItem"
    }

    fn property(&self, name: &str) -> Result<PropertyValue> {
        match name {
            "name" | "text" => Ok(PropertyValue::from(self.name())),
            "value" => Ok(PropertyValue::from(self.value())),
            "label" => Ok(PropertyValue::from(self.label())),
            "group" => Ok(PropertyValue::from(self.group())),
            "id" => Ok(PropertyValue::from(self.id())),
            "selected" => Ok(PropertyValue::from(self.selected)),
            "empty" => Ok(PropertyValue::from(self.is_empty())),
            _ => Err(Error::unknown_property(self.entity_name(), name)),
        }
    }

    fn set_property(&mut self, name: &str, value: PropertyValue) -> Result<()> {
        match name {
            "name" | "text" => self.name = value.into_string(name)?,
            "value" => self.value = value.into_string(name)?,
            "label" => self.label = value.into_string(name)?,
            "group" => self.group = value.into_string(name)?,
            "id" => self.id = value.into_string(name)?,
            "selected" => self.selected = value.into_bool(name)?,
            "empty" => return Err(Error::read_only(self.entity_name(), name)),
            _ => return Err(Error::unknown_property(self.entity_name(), name)),
        }
        Ok(())
    }
}
