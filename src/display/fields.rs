//! Display field tables
//!
//! Ordered `(field, label)` pairs used to translate object fields into
//! their human-readable column headers. Each resource has a summary table
//! and a verbose table shown when a single record is targeted.

/// One displayed field and its column label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayField {
    pub field: &'static str,
    pub label: &'static str,
}

/// Ordered set of fields printed for a resource
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayTable {
    pub name: &'static str,
    pub fields: &'static [DisplayField],
}

impl DisplayTable {
    /// Column labels in display order
    #[must_use]
    pub fn labels(&self) -> Vec<&'static str> {
        self.fields.iter().map(|f| f.label).collect()
    }
}

const fn field(field: &'static str, label: &'static str) -> DisplayField {
    DisplayField { field, label }
}

pub static CHANGE_FIELDS: DisplayTable = DisplayTable {
    name: "changes",
    fields: &[
        field("id", "ID"),
        field("change_at", "Change At"),
        field("event", "Event"),
        field("resource_name", "Resource"),
        field("user", "User"),
        field("resource_id", "Obj"),
    ],
};

pub static CHANGE_VERBOSE_FIELDS: DisplayTable = DisplayTable {
    name: "changes-verbose",
    fields: &[
        field("id", "ID"),
        field("change_at", "Change At"),
        field("event", "Event"),
        field("resource_name", "Resource"),
        field("user", "User"),
        field("resource_id", "Obj"),
        field("resource", "Data"),
    ],
};

pub static INTERFACE_FIELDS: DisplayTable = DisplayTable {
    name: "interfaces",
    fields: &[
        field("id", "ID"),
        field("device", "Device"),
        field("name", "Name"),
        field("mac_address", "MAC"),
        field("addresses", "Addresses"),
        field("attributes", "Attributes"),
    ],
};

pub static INTERFACE_VERBOSE_FIELDS: DisplayTable = DisplayTable {
    name: "interfaces-verbose",
    fields: &[
        field("id", "ID"),
        field("device", "Device"),
        field("name", "Name"),
        field("mac_address", "MAC"),
        field("addresses", "Addresses"),
        field("speed", "Speed"),
        field("type", "Type"),
        field("parent_id", "Parent ID"),
        field("attributes", "Attributes"),
    ],
};

pub static NETWORK_FIELDS: DisplayTable = DisplayTable {
    name: "networks",
    fields: &[
        field("id", "ID"),
        field("network_address", "Network"),
        field("prefix_length", "Prefix"),
        field("is_ip", "Is IP?"),
        field("ip_version", "IP Ver."),
        field("parent_id", "Parent ID"),
        field("attributes", "Attributes"),
    ],
};

pub static NETWORK_VERBOSE_FIELDS: DisplayTable = DisplayTable {
    name: "networks-verbose",
    fields: &[
        field("id", "ID"),
        field("network_address", "Network"),
        field("prefix_length", "Prefix"),
        field("is_ip", "Is IP?"),
        field("ip_version", "IP Ver."),
        field("parent_id", "Parent ID"),
        field("site_id", "Site ID"),
        field("attributes", "Attributes"),
    ],
};

/// Pick the verbose table when a single record is targeted
#[must_use]
#[inline]
pub fn select_table(
    single_record: bool,
    summary: &'static DisplayTable,
    verbose: &'static DisplayTable,
) -> &'static DisplayTable {
    if single_record { verbose } else { summary }
}
