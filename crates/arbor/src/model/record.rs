//! Flat client records for items.
//!
//! Controls that feed a client-side script (autocomplete lists, typed-ahead
//! selectors) ship their items as an array of flat records. The record
//! exposes the item's display name under the `value` key, its derived
//! identifier under `id`, and the optional label and group (`category`)
//! fields when present. The model only exposes the fields; encoding and
//! transport stay with the caller.

use serde::Serialize;

use super::item::ListItem;
use super::manager::{ItemCollection, ItemManager};

/// One item flattened for client-side consumption.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ItemRecord<'a> {
    /// The item's display name.
    pub value: Option<&'a str>,
    /// The derived (or explicitly assigned) identifier.
    pub id: Option<&'a str>,
    /// Optional richer label shown in place of the name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<&'a str>,
    /// Optional group header the item sorts under.
    #[serde(rename = "category", skip_serializing_if = "Option::is_none")]
    pub group: Option<&'a str>,
}

impl ItemCollection<ListItem> {
    /// The whole collection flattened to records, in display order.
    pub fn records(&self) -> Vec<ItemRecord<'_>> {
        self.items().iter().map(ListItem::record).collect()
    }

    /// Encodes the collection as the JSON array client scripts consume.
    pub fn to_client_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.records())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    #[test]
    fn test_record_keys() {
        let mut item = ListItem::with_value("Green", "#0f0");
        item.set_id(Some("lst_1".to_string()));
        item.set_label(Some("Green (grass)".to_string()));
        item.set_group(Some("Primary".to_string()));

        let encoded: Value = serde_json::to_value(item.record()).unwrap();
        assert_eq!(
            encoded,
            json!({
                "value": "Green",
                "id": "lst_1",
                "label": "Green (grass)",
                "category": "Primary",
            })
        );
    }

    #[test]
    fn test_optional_keys_are_omitted() {
        let item = ListItem::new("Red");
        let encoded: Value = serde_json::to_value(item.record()).unwrap();
        assert_eq!(encoded, json!({ "value": "Red", "id": null }));
    }

    #[test]
    fn test_collection_to_client_json() {
        let mut list = ItemCollection::with_owner("lst");
        list.add_item(ListItem::new("Red"));
        list.add_item(ListItem::new("Green"));

        let encoded: Value =
            serde_json::from_str(&list.to_client_json().unwrap()).unwrap();
        assert_eq!(
            encoded,
            json!([
                { "value": "Red", "id": "lst_0" },
                { "value": "Green", "id": "lst_1" },
            ])
        );
    }
}
