//! Bulk-add file parsing
//!
//! A bulk file is colon-delimited text with one record per line. The first
//! line may name the columns (optionally prefixed by `#`); otherwise the
//! resource's default column order applies. A `mac_address` column must come
//! last so the colons inside the address stay part of its value.
//!
//! ```text
//! device:name:attributes
//! 1:eth0:owner=jathan,vlan=100
//! 1:eth1:
//! ```

use crate::callbacks::attributes::transform_attributes;
use crate::callbacks::choices::transform_cidr;
use crate::client::{Record, Resource};
use crate::error::TransformError;
use serde_json::Value;

/// How a bulk column value is converted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Text,
    Integer,
    Attributes,
    Cidr,
}

/// A column accepted in a bulk file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BulkColumn {
    pub name: &'static str,
    pub kind: ColumnKind,
}

const fn column(name: &'static str, kind: ColumnKind) -> BulkColumn {
    BulkColumn { name, kind }
}

const INTERFACE_COLUMNS: &[BulkColumn] = &[
    column("device", ColumnKind::Integer),
    column("name", ColumnKind::Text),
    column("attributes", ColumnKind::Attributes),
    column("description", ColumnKind::Text),
    column("mac_address", ColumnKind::Text),
    column("speed", ColumnKind::Integer),
    column("type", ColumnKind::Integer),
    column("parent_id", ColumnKind::Integer),
];

/// Column whose values contain the delimiter
const MAC_ADDRESS_COLUMN: &str = "mac_address";

const INTERFACE_DEFAULT_ORDER: &[&str] = &["device", "name", "attributes"];

const NETWORK_COLUMNS: &[BulkColumn] = &[
    column("cidr", ColumnKind::Cidr),
    column("attributes", ColumnKind::Attributes),
];

const NETWORK_DEFAULT_ORDER: &[&str] = &["cidr", "attributes"];

/// Columns a resource accepts and their default order
#[must_use]
pub const fn bulk_columns(
    resource: Resource,
) -> Option<(&'static [BulkColumn], &'static [&'static str])> {
    match resource {
        Resource::Interfaces => Some((INTERFACE_COLUMNS, INTERFACE_DEFAULT_ORDER)),
        Resource::Networks => Some((NETWORK_COLUMNS, NETWORK_DEFAULT_ORDER)),
        Resource::Changes => None,
    }
}

/// Parse bulk file contents into records for `resource`
///
/// Blank lines are skipped and an empty file yields no records.
///
/// # Errors
///
/// Returns an error if:
/// - The resource does not support bulk add
/// - The header names a column twice
/// - The header puts `mac_address` anywhere but last
/// - A line has the wrong number of fields (reported with its line number)
/// - A field cannot be converted to its column type
#[inline]
pub fn process_bulk_add(contents: &str, resource: Resource) -> Result<Vec<Record>, TransformError> {
    let Some((known, default_order)) = bulk_columns(resource) else {
        return Err(TransformError::invalid_format(
            resource.path(),
            "a resource that supports bulk add",
        ));
    };

    let mut lines = contents
        .lines()
        .enumerate()
        .map(|(index, line)| (index + 1, line))
        .filter(|(_, line)| !line.trim().is_empty())
        .peekable();

    let Some(&(first_line, first)) = lines.peek() else {
        return Ok(Vec::new());
    };

    let columns = match header_columns(first, known) {
        Some(columns) => {
            lines.next();
            check_duplicates(&columns, first_line)?;
            check_mac_address_last(&columns, first_line)?;
            columns
        }
        None => default_order
            .iter()
            .filter_map(|name| find_column(known, name))
            .collect(),
    };

    let mut records = Vec::new();
    for (line_number, line) in lines {
        records.push(parse_line(line, line_number, &columns)?);
    }

    Ok(records)
}

fn find_column(known: &[BulkColumn], name: &str) -> Option<BulkColumn> {
    known.iter().copied().find(|c| c.name == name)
}

/// Columns named by `line` when every token is a known column
fn header_columns(line: &str, known: &[BulkColumn]) -> Option<Vec<BulkColumn>> {
    let header = line.trim().trim_start_matches('#');
    header
        .split(':')
        .map(|name| find_column(known, name.trim()))
        .collect()
}

fn check_duplicates(columns: &[BulkColumn], line_number: usize) -> Result<(), TransformError> {
    for (index, col) in columns.iter().enumerate() {
        if columns[..index].iter().any(|c| c.name == col.name) {
            return Err(TransformError::parse(
                line_number,
                format!("column '{}' appears more than once in the header", col.name),
            ));
        }
    }
    Ok(())
}

fn check_mac_address_last(
    columns: &[BulkColumn],
    line_number: usize,
) -> Result<(), TransformError> {
    let position = columns.iter().position(|c| c.name == MAC_ADDRESS_COLUMN);
    match position {
        Some(index) if index + 1 != columns.len() => Err(TransformError::parse(
            line_number,
            format!("column '{MAC_ADDRESS_COLUMN}' must be the last column in the header"),
        )),
        _ => Ok(()),
    }
}

fn parse_line(
    line: &str,
    line_number: usize,
    columns: &[BulkColumn],
) -> Result<Record, TransformError> {
    let fields: Vec<&str> = if columns
        .last()
        .is_some_and(|c| c.name == MAC_ADDRESS_COLUMN)
    {
        line.splitn(columns.len(), ':').collect()
    } else {
        line.split(':').collect()
    };
    if fields.len() != columns.len() {
        let names: Vec<&str> = columns.iter().map(|c| c.name).collect();
        return Err(TransformError::parse(
            line_number,
            format!(
                "expected {} fields ({}), found {}",
                columns.len(),
                names.join(":"),
                fields.len()
            ),
        ));
    }

    let mut record = Record::new();
    for (col, raw) in columns.iter().zip(fields) {
        if let Some(value) = convert_field(col, raw.trim(), line_number)? {
            record.insert(col.name.to_owned(), value);
        }
    }
    Ok(record)
}

fn convert_field(
    col: &BulkColumn,
    raw: &str,
    line_number: usize,
) -> Result<Option<Value>, TransformError> {
    let value = match col.kind {
        ColumnKind::Text => Value::String(raw.to_owned()),
        ColumnKind::Integer if raw.is_empty() => return Ok(None),
        ColumnKind::Integer => raw.parse::<i64>().map(Value::from).map_err(|_| {
            TransformError::parse(
                line_number,
                format!("'{}' must be an integer, got '{raw}'", col.name),
            )
        })?,
        ColumnKind::Attributes => transform_attributes(&[raw])
            .map(Value::Object)
            .map_err(|e| TransformError::parse(line_number, e.to_string()))?,
        ColumnKind::Cidr => transform_cidr(raw)
            .map(Value::String)
            .map_err(|e| TransformError::parse(line_number, e.to_string()))?,
    };
    Ok(Some(value))
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "This is a test module")]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_file_with_header() {
        let contents = "device:name:attributes\n1:eth0:owner=jathan,vlan=100\n1:eth1:\n";
        let records = process_bulk_add(contents, Resource::Interfaces).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(
            Value::Object(records[0].clone()),
            json!({"device": 1, "name": "eth0", "attributes": {"owner": "jathan", "vlan": "100"}})
        );
        assert_eq!(
            Value::Object(records[1].clone()),
            json!({"device": 1, "name": "eth1", "attributes": {}})
        );
    }

    #[test]
    fn header_may_reorder_and_be_commented() {
        let contents = "#name:device\neth0:5\n";
        let records = process_bulk_add(contents, Resource::Interfaces).unwrap();
        assert_eq!(
            Value::Object(records[0].clone()),
            json!({"name": "eth0", "device": 5})
        );
    }

    #[test]
    fn without_header_uses_default_order() {
        let contents = "10.0.0.0/8:owner=jathan\n192.168.0.0/16:\n";
        let records = process_bulk_add(contents, Resource::Networks).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].get("cidr"), Some(&json!("10.0.0.0/8")));
        assert_eq!(records[1].get("attributes"), Some(&json!({})));
    }

    #[test]
    fn empty_file_yields_no_records() {
        assert!(process_bulk_add("", Resource::Interfaces).unwrap().is_empty());
        assert!(process_bulk_add("\n\n", Resource::Networks).unwrap().is_empty());
        assert!(
            process_bulk_add("device:name\n", Resource::Interfaces)
                .unwrap()
                .is_empty()
        );
    }

    #[test]
    fn wrong_field_count_reports_line_number() {
        let contents = "device:name\n1:eth0\n\n1:eth1:extra\n";
        let err = process_bulk_add(contents, Resource::Interfaces).unwrap_err();
        assert!(matches!(err, TransformError::Parse { line: 4, .. }));
        assert!(err.to_string().contains("expected 2 fields"));
    }

    #[test]
    fn bad_integer_and_attribute_fields_fail() {
        let err = process_bulk_add("device:name\nabc:eth0\n", Resource::Interfaces).unwrap_err();
        assert!(matches!(err, TransformError::Parse { line: 2, .. }));

        let err =
            process_bulk_add("device:name:attributes\n1:eth0:bogus\n", Resource::Interfaces)
                .unwrap_err();
        assert!(matches!(err, TransformError::Parse { line: 2, .. }));
    }

    #[test]
    fn duplicate_header_column_is_rejected() {
        let err = process_bulk_add("name:name\n", Resource::Interfaces).unwrap_err();
        assert!(matches!(err, TransformError::Parse { line: 1, .. }));
    }

    #[test]
    fn trailing_mac_address_keeps_its_colons() {
        let contents = "device:name:mac_address\n1:eth0:00:11:22:33:44:55\n2:eth1:\n";
        let records = process_bulk_add(contents, Resource::Interfaces).unwrap();

        assert_eq!(
            Value::Object(records[0].clone()),
            json!({"device": 1, "name": "eth0", "mac_address": "00:11:22:33:44:55"})
        );
        assert_eq!(records[1].get("mac_address"), Some(&json!("")));
    }

    #[test]
    fn trailing_mac_address_still_counts_leading_fields() {
        let err = process_bulk_add("device:name:mac_address\n1\n", Resource::Interfaces)
            .unwrap_err();
        assert!(matches!(err, TransformError::Parse { line: 2, .. }));
    }

    #[test]
    fn mac_address_must_be_the_last_header_column() {
        let err = process_bulk_add(
            "device:mac_address:name\n1:00:11:22:33:44:55:eth0\n",
            Resource::Interfaces,
        )
        .unwrap_err();
        assert!(matches!(err, TransformError::Parse { line: 1, .. }));
        assert!(err.to_string().contains("must be the last column"));
    }

    #[test]
    fn changes_do_not_support_bulk_add() {
        assert!(process_bulk_add("", Resource::Changes).is_err());
    }
}
