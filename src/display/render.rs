//! Output rendering for result sets

use crate::client::{Mutation, Record, Resource};
use crate::display::fields::DisplayTable;
use comfy_table::{ContentArrangement, Table, presets::UTF8_FULL};
use ipnetwork::IpNetwork;
use serde_json::Value;
use std::collections::BTreeMap;
use std::net::IpAddr;

/// Human identity of a record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NaturalKey {
    /// `<device>:<name>`
    DeviceName,
    /// `<network_address>/<prefix_length>`
    Cidr,
}

/// Ordering of natural keys by the typed values they are built from
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
enum SortKey {
    /// Parsed network: address, then prefix length
    Network(IpAddr, u8),
    /// Numeric part when it parses, then the raw texts
    Parts(Option<i64>, String, String),
}

impl NaturalKey {
    /// Compose the key for one record
    #[must_use]
    pub fn of(self, record: &Record) -> String {
        let text = |key: &str| format_inline(record.get(key));
        match self {
            Self::DeviceName => format!("{}:{}", text("device"), text("name")),
            Self::Cidr => {
                if record.contains_key("network_address") {
                    format!("{}/{}", text("network_address"), text("prefix_length"))
                } else if record.contains_key("cidr") {
                    text("cidr")
                } else {
                    text("id")
                }
            }
        }
    }

    fn sort_key(self, record: &Record) -> SortKey {
        match self {
            Self::DeviceName => {
                let device = record.get("device");
                let numeric = device.and_then(|value| {
                    value
                        .as_i64()
                        .or_else(|| value.as_str().and_then(|s| s.parse().ok()))
                });
                SortKey::Parts(
                    numeric,
                    format_inline(device),
                    format_inline(record.get("name")),
                )
            }
            Self::Cidr => {
                let text = self.of(record);
                match text.parse::<IpNetwork>() {
                    Ok(network) => SortKey::Network(network.ip(), network.prefix()),
                    Err(_) => SortKey::Parts(None, text, String::new()),
                }
            }
        }
    }
}

/// How a result set is presented
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Output {
    /// Table with one column per display field
    Table {
        table: &'static DisplayTable,
        noun: &'static str,
    },
    /// One line per attribute, prefixed by the natural key
    Grep(NaturalKey),
    /// One natural key per line
    NaturalKeys(NaturalKey),
    /// Sorted, de-duplicated natural keys from a set query
    SetQuery { key: NaturalKey, delimited: bool },
    /// Success message for a mutating verb
    Confirmation {
        mutation: Mutation,
        resource: Resource,
        count: Option<usize>,
    },
}

/// Render `results` as text according to `output`
#[must_use]
#[inline]
pub fn render(results: &[Record], output: &Output) -> String {
    match *output {
        Output::Table { table, noun } => render_table(results, table, noun),
        Output::Grep(key) => render_grep(results, key),
        Output::NaturalKeys(key) => results
            .iter()
            .map(|record| key.of(record))
            .collect::<Vec<_>>()
            .join("\n"),
        Output::SetQuery { key, delimited } => render_set_query(results, key, delimited),
        Output::Confirmation {
            mutation,
            resource,
            count,
        } => match count {
            Some(n) => format!(
                "[SUCCESS] {} {n} {}!",
                mutation.past_tense(),
                if n == 1 { resource.singular() } else { resource.path() }
            ),
            None => format!(
                "[SUCCESS] {} {}!",
                mutation.past_tense(),
                resource.singular()
            ),
        },
    }
}

/// Render records as a table in display-table field order
///
/// Fields a record does not carry are left empty.
#[must_use]
pub fn render_table(results: &[Record], table: &DisplayTable, noun: &str) -> String {
    if results.is_empty() {
        return format!("No {noun} found.");
    }

    let mut grid = Table::new();
    grid.load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    grid.set_header(table.labels());

    for record in results {
        grid.add_row(
            table
                .fields
                .iter()
                .map(|f| format_value(record.get(f.field)))
                .collect::<Vec<_>>(),
        );
    }

    grid.to_string()
}

/// Render records as `<natural key> key=value` lines, one per attribute
#[must_use]
pub fn render_grep(results: &[Record], key: NaturalKey) -> String {
    let mut lines = Vec::new();
    for record in results {
        let prefix = key.of(record);
        match record.get("attributes") {
            Some(Value::Object(attributes)) if !attributes.is_empty() => {
                let mut names: Vec<&String> = attributes.keys().collect();
                names.sort();
                for name in names {
                    lines.push(format!(
                        "{prefix} {name}={}",
                        format_inline(attributes.get(name))
                    ));
                }
            }
            _ => lines.push(prefix),
        }
    }
    lines.join("\n")
}

/// Render set query results as sorted, unique natural keys
///
/// Keys are ordered by their typed parts: device IDs numerically and
/// networks by address, so `2:eth0` precedes `10:eth0`.
#[must_use]
pub fn render_set_query(results: &[Record], key: NaturalKey, delimited: bool) -> String {
    let keys: BTreeMap<SortKey, String> = results
        .iter()
        .map(|record| (key.sort_key(record), key.of(record)))
        .collect();
    let joiner = if delimited { "," } else { "\n" };
    keys.into_values().collect::<Vec<_>>().join(joiner)
}

/// Format a field for a table cell
///
/// Lists become one item per line and objects become sorted `key=value`
/// lines.
#[must_use]
pub fn format_value(value: Option<&Value>) -> String {
    match value {
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| format_inline(Some(item)))
            .collect::<Vec<_>>()
            .join("\n"),
        Some(Value::Object(map)) => {
            let mut pairs: Vec<String> = map
                .iter()
                .map(|(k, v)| format!("{k}={}", format_inline(Some(v))))
                .collect();
            pairs.sort();
            pairs.join("\n")
        }
        other => format_inline(other),
    }
}

/// Format a field on a single line
fn format_inline(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| format_inline(Some(item)))
            .collect::<Vec<_>>()
            .join(","),
        Some(other) => other.to_string(),
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "This is a test module")]
mod tests {
    use super::*;
    use crate::display::fields::{CHANGE_FIELDS, INTERFACE_FIELDS};
    use serde_json::json;

    fn record(value: Value) -> Record {
        match value {
            Value::Object(map) => map,
            _ => panic!("test records must be objects"),
        }
    }

    #[test]
    fn table_follows_display_order_not_record_order() {
        let results = vec![record(json!({
            "name": "eth0",
            "attributes": {"vlan": "100", "owner": "ops"},
            "device": 3,
            "id": 12
        }))];
        let text = render_table(&results, &INTERFACE_FIELDS, "interfaces");

        let id = text.find("ID").unwrap();
        let device = text.find("Device").unwrap();
        let name = text.find("Name").unwrap();
        let attributes = text.find("Attributes").unwrap();
        assert!(id < device && device < name && name < attributes);
        assert!(text.contains("owner=ops"));
        assert!(text.contains("vlan=100"));
        assert!(text.contains("eth0"));
    }

    #[test]
    fn absent_fields_render_empty() {
        assert_eq!(format_value(None), "");
        assert_eq!(format_value(Some(&Value::Null)), "");

        let results = vec![record(json!({"id": 1}))];
        let text = render_table(&results, &CHANGE_FIELDS, "changes");
        assert!(text.contains("Change At"));
        assert!(!text.contains("null"));
    }

    #[test]
    fn empty_results_print_notice() {
        assert_eq!(
            render_table(&[], &INTERFACE_FIELDS, "interfaces"),
            "No interfaces found."
        );
    }

    #[test]
    fn values_format_by_type() {
        assert_eq!(format_value(Some(&json!(["10.0.0.1/32", "10.0.0.2/32"]))), "10.0.0.1/32\n10.0.0.2/32");
        assert_eq!(format_value(Some(&json!({"b": "2", "a": ["x", "y"]}))), "a=x,y\nb=2");
        assert_eq!(format_value(Some(&json!(true))), "true");
        assert_eq!(format_value(Some(&json!(10000))), "10000");
    }

    #[test]
    fn set_query_is_sorted_and_unique() {
        let results = vec![
            record(json!({"device": "lax-r2", "name": "eth1"})),
            record(json!({"device": "lax-r1", "name": "eth0"})),
            record(json!({"device": "lax-r2", "name": "eth1"})),
        ];
        assert_eq!(
            render_set_query(&results, NaturalKey::DeviceName, false),
            "lax-r1:eth0\nlax-r2:eth1"
        );
        assert_eq!(
            render_set_query(&results, NaturalKey::DeviceName, true),
            "lax-r1:eth0,lax-r2:eth1"
        );
    }

    #[test]
    fn set_query_orders_devices_numerically() {
        let results = vec![
            record(json!({"device": 10, "name": "eth0"})),
            record(json!({"device": 5, "name": "eth0"})),
            record(json!({"device": 2, "name": "eth1"})),
            record(json!({"device": 2, "name": "eth0"})),
        ];
        assert_eq!(
            render_set_query(&results, NaturalKey::DeviceName, false),
            "2:eth0\n2:eth1\n5:eth0\n10:eth0"
        );
    }

    #[test]
    fn set_query_orders_networks_by_address() {
        let results = vec![
            record(json!({"network_address": "10.0.0.0", "prefix_length": 24})),
            record(json!({"network_address": "9.0.0.0", "prefix_length": 8})),
            record(json!({"network_address": "10.0.0.0", "prefix_length": 8})),
            record(json!({"network_address": "10.0.0.0", "prefix_length": 24})),
        ];
        assert_eq!(
            render_set_query(&results, NaturalKey::Cidr, true),
            "9.0.0.0/8,10.0.0.0/8,10.0.0.0/24"
        );
    }

    #[test]
    fn grep_prints_one_line_per_attribute() {
        let results = vec![
            record(json!({"device": 1, "name": "eth0", "attributes": {"vlan": "100", "owner": "ops"}})),
            record(json!({"device": 1, "name": "eth1", "attributes": {}})),
        ];
        assert_eq!(
            render_grep(&results, NaturalKey::DeviceName),
            "1:eth0 owner=ops\n1:eth0 vlan=100\n1:eth1"
        );
    }

    #[test]
    fn network_keys_prefer_address_and_prefix() {
        let with_parts = record(json!({"network_address": "10.0.0.0", "prefix_length": 8}));
        let with_cidr = record(json!({"cidr": "192.168.0.0/16"}));
        assert_eq!(NaturalKey::Cidr.of(&with_parts), "10.0.0.0/8");
        assert_eq!(NaturalKey::Cidr.of(&with_cidr), "192.168.0.0/16");
    }

    #[test]
    fn confirmation_messages() {
        let single = Output::Confirmation {
            mutation: Mutation::Add,
            resource: Resource::Interfaces,
            count: None,
        };
        assert_eq!(render(&[], &single), "[SUCCESS] Added interface!");

        let bulk = Output::Confirmation {
            mutation: Mutation::Add,
            resource: Resource::Networks,
            count: Some(3),
        };
        assert_eq!(render(&[], &bulk), "[SUCCESS] Added 3 networks!");
    }
}
