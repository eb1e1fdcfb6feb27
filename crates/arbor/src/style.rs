//! Per-item style bags.
//!
//! An [`ItemStyle`] is an opaque set of presentation hints a renderer may
//! consult when drawing an item. The item model only allocates, stores, and
//! hands out style handles; it never interprets the contents.
//!
//! Styles are shared by reference: an item exposes its style as a
//! [`SharedStyle`] handle, and every holder of that handle observes the same
//! mutations for as long as the item lives.

use std::collections::BTreeMap;
use std::sync::Arc;

use parking_lot::RwLock;

/// A shared handle to an item's style.
///
/// Cloning the handle shares the underlying style rather than copying it.
pub type SharedStyle = Arc<RwLock<ItemStyle>>;

/// Presentation hints for a single item.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemStyle {
    css_classes: Vec<String>,
    foreground: Option<String>,
    background: Option<String>,
    attributes: BTreeMap<String, String>,
}

impl ItemStyle {
    /// Creates an empty style.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a style with a single CSS class.
    pub fn with_class(class: impl Into<String>) -> Self {
        let mut style = Self::new();
        style.add_class(class);
        style
    }

    /// Wraps this style in a shared handle.
    pub fn into_shared(self) -> SharedStyle {
        Arc::new(RwLock::new(self))
    }

    /// Returns the CSS classes in the order they were added.
    pub fn css_classes(&self) -> &[String] {
        &self.css_classes
    }

    /// Adds a CSS class if not already present.
    pub fn add_class(&mut self, class: impl Into<String>) {
        let class = class.into();
        if !self.css_classes.contains(&class) {
            self.css_classes.push(class);
        }
    }

    /// Removes a CSS class.
    pub fn remove_class(&mut self, class: &str) {
        self.css_classes.retain(|c| c != class);
    }

    /// Returns whether the given CSS class is set.
    pub fn has_class(&self, class: &str) -> bool {
        self.css_classes.iter().any(|c| c == class)
    }

    /// Gets the foreground value.
    pub fn foreground(&self) -> Option<&str> {
        self.foreground.as_deref()
    }

    /// Sets the foreground value.
    pub fn set_foreground(&mut self, value: Option<String>) {
        self.foreground = value;
    }

    /// Gets the background value.
    pub fn background(&self) -> Option<&str> {
        self.background.as_deref()
    }

    /// Sets the background value.
    pub fn set_background(&mut self, value: Option<String>) {
        self.background = value;
    }

    /// Gets an extra attribute.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Sets an extra attribute, replacing any previous value.
    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(name.into(), value.into());
    }

    /// Removes an extra attribute, returning its previous value.
    pub fn remove_attribute(&mut self, name: &str) -> Option<String> {
        self.attributes.remove(name)
    }

    /// Iterates over the extra attributes in name order.
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Returns whether the style carries no hints at all.
    pub fn is_empty(&self) -> bool {
        self.css_classes.is_empty()
            && self.foreground.is_none()
            && self.background.is_none()
            && self.attributes.is_empty()
    }

    /// Lays `other` over this style: set fields in `other` win, missing CSS
    /// classes are appended, attributes are merged with `other` taking
    /// precedence on name conflicts.
    pub fn merge_from(&mut self, other: &ItemStyle) {
        for class in &other.css_classes {
            self.add_class(class.clone());
        }
        if other.foreground.is_some() {
            self.foreground = other.foreground.clone();
        }
        if other.background.is_some() {
            self.background = other.background.clone();
        }
        for (name, value) in &other.attributes {
            self.attributes.insert(name.clone(), value.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classes_dedup_and_order() {
        let mut style = ItemStyle::new();
        style.add_class("first");
        style.add_class("second");
        style.add_class("first");
        assert_eq!(style.css_classes(), ["first", "second"]);

        style.remove_class("first");
        assert!(!style.has_class("first"));
        assert!(style.has_class("second"));
    }

    #[test]
    fn test_attributes() {
        let mut style = ItemStyle::new();
        style.set_attribute("title", "hint");
        style.set_attribute("data-key", "7");
        assert_eq!(style.attribute("title"), Some("hint"));

        let pairs: Vec<_> = style.attributes().collect();
        assert_eq!(pairs, [("data-key", "7"), ("title", "hint")]);

        assert_eq!(style.remove_attribute("title"), Some("hint".to_string()));
        assert_eq!(style.attribute("title"), None);
    }

    #[test]
    fn test_merge_from_overrides() {
        let mut base = ItemStyle::with_class("item");
        base.set_foreground(Some("gray".to_string()));
        base.set_attribute("title", "base");

        let mut over = ItemStyle::with_class("selected");
        over.set_foreground(Some("white".to_string()));
        over.set_background(Some("blue".to_string()));
        over.set_attribute("title", "override");

        base.merge_from(&over);
        assert_eq!(base.css_classes(), ["item", "selected"]);
        assert_eq!(base.foreground(), Some("white"));
        assert_eq!(base.background(), Some("blue"));
        assert_eq!(base.attribute("title"), Some("override"));
    }

    #[test]
    fn test_shared_handle() {
        let shared = ItemStyle::new().into_shared();
        let other = shared.clone();
        shared.write().add_class("hot");
        assert!(other.read().has_class("hot"));
    }
}
