//! `key=value` attribute parsing

use crate::error::TransformError;
use serde_json::{Map, Value};

/// Attribute mapping sent to the server, in first-seen key order
pub type Attributes = Map<String, Value>;

/// Parse attribute arguments into ordered `(key, value)` pairs
///
/// Each argument may hold several comma-separated pairs. Empty tokens are
/// skipped; values may be empty (`owner=`).
///
/// # Errors
///
/// Returns an error if:
/// - A token has no `=`
/// - A token has an empty key
#[inline]
pub fn parse_attribute_pairs<S: AsRef<str>>(
    values: &[S],
) -> Result<Vec<(String, String)>, TransformError> {
    let mut pairs = Vec::new();

    for value in values {
        for token in value.as_ref().split(',') {
            let token = token.trim();
            if token.is_empty() {
                continue;
            }

            let Some((key, val)) = token.split_once('=') else {
                return Err(TransformError::invalid_format(token, "key=value"));
            };

            let key = key.trim();
            if key.is_empty() {
                return Err(TransformError::invalid_format(token, "a non-empty key"));
            }

            pairs.push((key.to_owned(), val.trim().to_owned()));
        }
    }

    Ok(pairs)
}

/// Transform attribute arguments into a mapping
///
/// Duplicate keys keep the last occurrence.
///
/// # Errors
///
/// Returns an error if any token is malformed (see [`parse_attribute_pairs`]).
#[inline]
pub fn transform_attributes<S: AsRef<str>>(values: &[S]) -> Result<Attributes, TransformError> {
    let mut attributes = Attributes::new();
    for (key, value) in parse_attribute_pairs(values)? {
        attributes.insert(key, Value::String(value));
    }
    Ok(attributes)
}

/// Collect pairs into a mapping of lists, keeping every value per key
#[must_use]
pub fn collect_multi_attributes(pairs: Vec<(String, String)>) -> Attributes {
    let mut attributes = Attributes::new();
    for (key, value) in pairs {
        match attributes
            .entry(key)
            .or_insert_with(|| Value::Array(Vec::new()))
        {
            Value::Array(items) => items.push(Value::String(value)),
            other => *other = Value::Array(vec![Value::String(value)]),
        }
    }
    attributes
}

/// Collect pairs into a mapping of single-item lists, last value wins
#[must_use]
pub fn collect_last_as_list(pairs: Vec<(String, String)>) -> Attributes {
    let mut attributes = Attributes::new();
    for (key, value) in pairs {
        attributes.insert(key, Value::Array(vec![Value::String(value)]));
    }
    attributes
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "This is a test module")]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_repeated_and_comma_separated_pairs() {
        let values = vec!["owner=jathan".to_owned(), "vlan=100,metro=lax".to_owned()];
        let attrs = transform_attributes(&values).unwrap();

        assert_eq!(
            Value::Object(attrs),
            json!({"owner": "jathan", "vlan": "100", "metro": "lax"})
        );
    }

    #[test]
    fn duplicate_keys_keep_last_value() {
        let attrs = transform_attributes(&["owner=a", "owner=b"]).unwrap();
        assert_eq!(attrs.len(), 1);
        assert_eq!(attrs.get("owner"), Some(&json!("b")));
    }

    #[test]
    fn key_order_follows_first_occurrence() {
        let attrs = transform_attributes(&["b=1,a=2,b=3"]).unwrap();
        let keys: Vec<&String> = attrs.keys().collect();
        assert_eq!(keys, vec!["b", "a"]);
    }

    #[test]
    fn empty_input_is_empty_mapping() {
        let none: Vec<String> = Vec::new();
        assert!(transform_attributes(&none).unwrap().is_empty());
        assert!(transform_attributes(&["", " , "]).unwrap().is_empty());
    }

    #[test]
    fn value_may_be_empty_or_contain_equals() {
        let attrs = transform_attributes(&["owner=", "expr=a=b"]).unwrap();
        assert_eq!(attrs.get("owner"), Some(&json!("")));
        assert_eq!(attrs.get("expr"), Some(&json!("a=b")));
    }

    #[test]
    fn token_without_equals_is_rejected() {
        let err = transform_attributes(&["owner=jathan,bogus"]).unwrap_err();
        assert_eq!(
            err,
            TransformError::invalid_format("bogus", "key=value")
        );
    }

    #[test]
    fn empty_key_is_rejected() {
        assert!(matches!(
            transform_attributes(&["=value"]),
            Err(TransformError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn multi_collects_every_value() {
        let pairs = parse_attribute_pairs(&["role=web", "role=db", "owner=ops"]).unwrap();
        let attrs = collect_multi_attributes(pairs);
        assert_eq!(
            Value::Object(attrs),
            json!({"role": ["web", "db"], "owner": ["ops"]})
        );
    }

    #[test]
    fn last_as_list_keeps_final_value() {
        let pairs = parse_attribute_pairs(&["role=web", "role=db"]).unwrap();
        let attrs = collect_last_as_list(pairs);
        assert_eq!(Value::Object(attrs), json!({"role": ["db"]}));
    }
}
