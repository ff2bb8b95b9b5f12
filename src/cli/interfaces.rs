//! `interfaces` sub-commands

use crate::cli::args::AttributeActionArgs;
use clap::{Args, Subcommand};
use std::path::PathBuf;

#[derive(Subcommand, Debug, Clone)]
pub enum InterfacesCommand {
    /// Add a new Interface.
    ///
    /// You must provide a Device ID using the -D/--device option and a name
    /// using the -n/--name option, unless Interfaces are read from a file
    /// with -b/--bulk-add.
    ///
    /// If you wish to add attributes, you may specify the -a/--attributes
    /// option once for each key/value pair.
    Add(InterfaceAddArgs),

    /// List existing Interfaces for a Site.
    ///
    /// When listing Interfaces, all objects are displayed by default. You
    /// optionally may lookup a single Interface by ID using the -i/--id
    /// option.
    ///
    /// You may limit the number of results using the -l/--limit option.
    List(InterfaceListArgs),

    /// Update an Interface.
    ///
    /// You must provide the unique ID (-i/--id) and at least one of the
    /// optional arguments.
    ///
    /// The -a/--attributes option may be provided multiple times, once for
    /// each key-value pair, or once with pairs separated by commas.
    Update(InterfaceUpdateArgs),

    /// Remove an Interface.
    ///
    /// You must provide the unique ID using -i/--id.
    Remove(InterfaceRemoveArgs),
}

#[derive(Args, Debug, Clone, Default)]
pub struct InterfaceAddArgs {
    /// A key/value pair attached to this Interface (format: key=value).
    #[arg(short = 'a', long, value_name = "ATTRS")]
    pub attributes: Vec<String>,

    /// Bulk add Interfaces from the specified colon-delimited file.
    #[arg(
        short = 'b',
        long,
        value_name = "FILENAME",
        conflicts_with_all = ["device", "name"]
    )]
    pub bulk_add: Option<PathBuf>,

    /// Unique ID of the Device to which this Interface is attached.  [required]
    #[arg(short = 'D', long, value_name = "DEVICE_ID")]
    pub device: Option<i64>,

    /// The name of the Interface.  [required]
    #[arg(short = 'n', long, value_name = "NAME")]
    pub name: Option<String>,

    /// A description for the Interface.
    #[arg(short = 'e', long, value_name = "DESCRIPTION")]
    pub description: Option<String>,

    /// MAC address of the Interface.
    #[arg(short = 'm', long, value_name = "MAC_ADDRESS")]
    pub mac_address: Option<String>,

    /// Interface speed in Mbps (e.g. 20000 for 20 Gbps).
    #[arg(short = 'S', long, value_name = "SPEED")]
    pub speed: Option<i64>,

    /// Interface type (e.g. 6 for ethernet).
    #[arg(short = 't', long = "type", value_name = "TYPE")]
    pub interface_type: Option<i64>,

    /// Unique ID of the parent Interface.
    #[arg(short = 'p', long, value_name = "PARENT_ID")]
    pub parent_id: Option<i64>,

    /// Unique ID of the Site this Interface is under.  [required]
    #[arg(short = 's', long, value_name = "SITE_ID")]
    pub site_id: Option<String>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct InterfaceListArgs {
    /// A key/value pair attached to this Interface (format: key=value).
    #[arg(short = 'a', long, value_name = "ATTRS")]
    pub attributes: Vec<String>,

    /// Display set query results separated by commas vs. newlines.
    #[arg(short = 'd', long)]
    pub delimited: bool,

    /// Unique ID of the Device being retrieved.
    #[arg(short = 'D', long, value_name = "DEVICE_ID")]
    pub device: Option<i64>,

    /// Filter by Interfaces matching this description.
    #[arg(short = 'e', long, value_name = "DESCRIPTION")]
    pub description: Option<String>,

    /// Display list results in a grep-friendly format.
    #[arg(short = 'g', long, conflicts_with = "natural_key")]
    pub grep: bool,

    /// Unique ID of the Interface being retrieved.
    #[arg(short = 'i', long, value_name = "ID")]
    pub id: Option<i64>,

    /// Limit result to N resources.
    #[arg(short = 'l', long, value_name = "LIMIT")]
    pub limit: Option<u64>,

    /// Filter to Interfaces matching this name.
    #[arg(short = 'n', long, value_name = "NAME")]
    pub name: Option<String>,

    /// Display list results by their natural key.
    #[arg(short = 'N', long)]
    pub natural_key: bool,

    /// Skip the first N resources.
    #[arg(short = 'o', long, value_name = "OFFSET")]
    pub offset: Option<u64>,

    /// Filter by integer of the ID of the parent Interface.
    #[arg(short = 'p', long, value_name = "PARENT_ID")]
    pub parent_id: Option<i64>,

    /// Perform a set query using Attributes and output matching Interfaces.
    #[arg(short = 'q', long, value_name = "QUERY")]
    pub query: Option<String>,

    /// Unique ID of the Site this Interface is under.  [required]
    #[arg(short = 's', long, value_name = "SITE_ID")]
    pub site_id: Option<String>,

    /// Filter by integer of Mbps of interface (e.g. 20000 for 20 Gbps).
    #[arg(short = 'S', long, value_name = "SPEED")]
    pub speed: Option<i64>,

    /// Filter by integer of the interface type (e.g. 6 for ethernet).
    #[arg(short = 't', long = "type", value_name = "TYPE")]
    pub interface_type: Option<i64>,

    #[command(subcommand)]
    pub command: Option<InterfaceListCommand>,
}

/// Collections listed for a single Interface
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterfaceListCommand {
    /// Get addresses assigned to an Interface.
    Addresses,

    /// Get networks attached to an Interface.
    Networks,
}

#[derive(Args, Debug, Clone, Default)]
pub struct InterfaceUpdateArgs {
    /// A key/value pair attached to this Interface (format: key=value).
    #[arg(short = 'a', long, value_name = "ATTRS")]
    pub attributes: Vec<String>,

    /// Unique ID of the Interface being updated.
    #[arg(short = 'i', long, value_name = "ID")]
    pub id: i64,

    /// The new name of the Interface.
    #[arg(short = 'n', long, value_name = "NAME")]
    pub name: Option<String>,

    /// A description for the Interface.
    #[arg(short = 'e', long, value_name = "DESCRIPTION")]
    pub description: Option<String>,

    /// MAC address of the Interface.
    #[arg(long, value_name = "MAC_ADDRESS")]
    pub mac_address: Option<String>,

    /// Interface speed in Mbps.
    #[arg(long, value_name = "SPEED")]
    pub speed: Option<i64>,

    /// Interface type.
    #[arg(long = "type", value_name = "TYPE")]
    pub interface_type: Option<i64>,

    /// Unique ID of the parent Interface.
    #[arg(long, value_name = "PARENT_ID")]
    pub parent_id: Option<i64>,

    #[command(flatten)]
    pub actions: AttributeActionArgs,

    /// Treat the specified attributes as a list type.
    #[arg(short = 'm', long)]
    pub multi: bool,

    /// Unique ID of the Site this Interface is under.  [required]
    #[arg(short = 's', long, value_name = "SITE_ID")]
    pub site_id: Option<String>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct InterfaceRemoveArgs {
    /// Unique ID of the Interface being deleted.
    #[arg(short = 'i', long, value_name = "ID")]
    pub id: i64,

    /// Unique ID of the Site this Interface is under.  [required]
    #[arg(short = 's', long, value_name = "SITE_ID")]
    pub site_id: Option<String>,
}
