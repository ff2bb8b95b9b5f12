//! Payload assembly shared by the per-resource planners

use crate::callbacks::{Attributes, collect_last_as_list, collect_multi_attributes};
use crate::client::Record;
use crate::client::merge::{ATTR_ACTION_FIELD, AttrAction, MULTI_FIELD};
use serde_json::Value;

/// Display toggles that only affect local rendering
pub const LOCAL_DISPLAY_FIELDS: [&str; 3] = ["delimited", "grep", "natural_key"];

/// Builder for a single request record
///
/// Absent options are left out so the server only sees what the user asked
/// for.
#[derive(Debug, Clone, Default)]
pub struct PayloadBuilder {
    record: Record,
}

impl PayloadBuilder {
    #[must_use]
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `key` when `value` is present
    #[must_use]
    #[inline]
    pub fn field<V: Into<Value>>(mut self, key: &str, value: Option<V>) -> Self {
        if let Some(value) = value {
            self.record.insert(key.to_owned(), value.into());
        }
        self
    }

    /// Insert a boolean flag unconditionally
    #[must_use]
    #[inline]
    pub fn flag(mut self, key: &str, value: bool) -> Self {
        self.record.insert(key.to_owned(), Value::Bool(value));
        self
    }

    /// Insert the attribute mapping, even when empty
    #[must_use]
    #[inline]
    pub fn attributes(mut self, attributes: Attributes) -> Self {
        self.record
            .insert("attributes".to_owned(), Value::Object(attributes));
        self
    }

    /// Insert the attribute mapping only when it holds at least one pair
    #[must_use]
    #[inline]
    pub fn attribute_filter(self, attributes: Attributes) -> Self {
        if attributes.is_empty() {
            self
        } else {
            self.attributes(attributes)
        }
    }

    /// Record how attributes combine with the stored ones on update
    #[must_use]
    #[inline]
    pub fn attribute_action(self, action: AttrAction, multi: bool) -> Self {
        self.field(ATTR_ACTION_FIELD, Some(action.as_str()))
            .flag(MULTI_FIELD, multi)
    }

    #[must_use]
    #[inline]
    pub fn build(self) -> Record {
        self.record
    }
}

/// Remove rendering toggles so they never reach the client
#[inline]
pub fn strip_local_toggles(record: &mut Record) {
    for key in LOCAL_DISPLAY_FIELDS {
        record.remove(key);
    }
}

/// Build the attribute changes sent with an update
///
/// Without `multi` the last value of a key wins. With `multi` every value
/// is kept as a list, except on replace where the last value becomes the
/// whole list.
#[must_use]
pub fn attribute_changes(
    pairs: Vec<(String, String)>,
    action: AttrAction,
    multi: bool,
) -> Attributes {
    match (multi, action) {
        (true, AttrAction::Replace) => collect_last_as_list(pairs),
        (true, _) => collect_multi_attributes(pairs),
        (false, _) => pairs
            .into_iter()
            .map(|(key, value)| (key, Value::String(value)))
            .collect(),
    }
}
