//! Attribute merging for updates
//!
//! The server replaces an object wholesale on update, so the client merges
//! the requested attribute changes into the current object first.

use crate::client::Record;
use serde_json::{Map, Value};

/// Payload field carrying the attribute action
pub const ATTR_ACTION_FIELD: &str = "attr_action";

/// Payload field marking attributes as list-valued
pub const MULTI_FIELD: &str = "multi";

/// How requested attributes combine with the current ones
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AttrAction {
    /// Add new keys and overwrite existing ones
    #[default]
    Add,
    /// Remove keys, or values from list attributes
    Delete,
    /// Overwrite keys, or whole lists for list attributes
    Replace,
}

impl AttrAction {
    /// Wire name of the action
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Delete => "delete",
            Self::Replace => "replace",
        }
    }

    /// Parse a wire name, defaulting to `Add`
    #[must_use]
    pub fn from_wire(value: Option<&str>) -> Self {
        match value {
            Some("delete") => Self::Delete,
            Some("replace") => Self::Replace,
            _ => Self::Add,
        }
    }
}

/// Apply an update payload to the current object
///
/// Plain fields overwrite the current values; `attributes` are merged
/// according to the payload's `attr_action` and `multi` flags, which are
/// not sent to the server.
#[must_use]
#[inline]
pub fn merge_update(existing: &Record, changes: &Record) -> Record {
    let action = AttrAction::from_wire(changes.get(ATTR_ACTION_FIELD).and_then(Value::as_str));
    let multi = changes
        .get(MULTI_FIELD)
        .and_then(Value::as_bool)
        .unwrap_or(false);

    let mut merged = existing.clone();
    for (key, value) in changes {
        if matches!(key.as_str(), ATTR_ACTION_FIELD | MULTI_FIELD | "attributes") {
            continue;
        }
        merged.insert(key.clone(), value.clone());
    }

    if let Some(Value::Object(incoming)) = changes.get("attributes") {
        let mut current = match merged.get("attributes") {
            Some(Value::Object(map)) => map.clone(),
            _ => Map::new(),
        };
        merge_attributes(&mut current, incoming, action, multi);
        merged.insert("attributes".to_owned(), Value::Object(current));
    }

    merged
}

fn merge_attributes(
    current: &mut Map<String, Value>,
    incoming: &Map<String, Value>,
    action: AttrAction,
    multi: bool,
) {
    for (key, value) in incoming {
        match (action, multi) {
            (AttrAction::Add | AttrAction::Replace, false) => {
                current.insert(key.clone(), value.clone());
            }
            (AttrAction::Add, true) => {
                let mut list = as_list(current.get(key));
                for item in as_list(Some(value)) {
                    if !list.contains(&item) {
                        list.push(item);
                    }
                }
                current.insert(key.clone(), Value::Array(list));
            }
            (AttrAction::Replace, true) => {
                current.insert(key.clone(), Value::Array(as_list(Some(value))));
            }
            (AttrAction::Delete, false) => {
                current.remove(key);
            }
            (AttrAction::Delete, true) => {
                let doomed: Vec<Value> = as_list(Some(value))
                    .into_iter()
                    .filter(|v| v.as_str() != Some(""))
                    .collect();
                let mut list = as_list(current.get(key));
                list.retain(|item| !doomed.contains(item));
                if doomed.is_empty() || list.is_empty() {
                    current.remove(key);
                } else {
                    current.insert(key.clone(), Value::Array(list));
                }
            }
        }
    }
}

fn as_list(value: Option<&Value>) -> Vec<Value> {
    match value {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => items.clone(),
        Some(other) => vec![other.clone()],
    }
}
