//! `networks` sub-commands

use crate::cli::args::AttributeActionArgs;
use clap::{Args, Subcommand};
use std::path::PathBuf;

#[derive(Subcommand, Debug, Clone)]
pub enum NetworksCommand {
    /// Add a new Network.
    ///
    /// You must provide a CIDR using the -c/--cidr option, unless Networks
    /// are read from a file with -b/--bulk-add.
    Add(NetworkAddArgs),

    /// List existing Networks for a Site.
    ///
    /// When listing Networks, all objects are displayed by default. You may
    /// lookup a single Network by ID (-i/--id) or by CIDR (-c/--cidr).
    List(NetworkListArgs),

    /// Update a Network.
    ///
    /// You must provide the unique ID (-i/--id) and at least one attribute.
    Update(NetworkUpdateArgs),

    /// Remove a Network.
    ///
    /// You must provide the unique ID using -i/--id.
    Remove(NetworkRemoveArgs),
}

#[derive(Args, Debug, Clone, Default)]
pub struct NetworkAddArgs {
    /// A key/value pair attached to this Network (format: key=value).
    #[arg(short = 'a', long, value_name = "ATTRS")]
    pub attributes: Vec<String>,

    /// Bulk add Networks from the specified colon-delimited file.
    #[arg(short = 'b', long, value_name = "FILENAME", conflicts_with = "cidr")]
    pub bulk_add: Option<PathBuf>,

    /// A network or IP address in CIDR notation.  [required]
    #[arg(short = 'c', long, value_name = "CIDR")]
    pub cidr: Option<String>,

    /// Unique ID of the Site this Network is under.  [required]
    #[arg(short = 's', long, value_name = "SITE_ID")]
    pub site_id: Option<String>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct NetworkListArgs {
    /// A key/value pair attached to this Network (format: key=value).
    #[arg(short = 'a', long, value_name = "ATTRS")]
    pub attributes: Vec<String>,

    /// Filter by a network or IP address in CIDR notation.
    #[arg(short = 'c', long, value_name = "CIDR")]
    pub cidr: Option<String>,

    /// Display set query results separated by commas vs. newlines.
    #[arg(short = 'd', long)]
    pub delimited: bool,

    /// Display list results in a grep-friendly format.
    #[arg(short = 'g', long, conflicts_with = "natural_key")]
    pub grep: bool,

    /// Unique ID of the Network being retrieved.
    #[arg(short = 'i', long, value_name = "ID")]
    pub id: Option<i64>,

    /// Limit result to N resources.
    #[arg(short = 'l', long, value_name = "LIMIT")]
    pub limit: Option<u64>,

    /// Display list results by their natural key.
    #[arg(short = 'N', long)]
    pub natural_key: bool,

    /// Skip the first N resources.
    #[arg(short = 'o', long, value_name = "OFFSET")]
    pub offset: Option<u64>,

    /// Perform a set query using Attributes and output matching Networks.
    #[arg(short = 'q', long, value_name = "QUERY")]
    pub query: Option<String>,

    /// Unique ID of the Site this Network is under.  [required]
    #[arg(short = 's', long, value_name = "SITE_ID")]
    pub site_id: Option<String>,

    /// Only return top-level Networks.
    #[arg(long)]
    pub root_only: bool,

    /// Leave IP addresses out of the results.
    #[arg(long)]
    pub no_include_ips: bool,

    /// Leave networks out of the results, showing only IP addresses.
    #[arg(long)]
    pub no_include_networks: bool,

    /// Filter by IP version.
    #[arg(long, value_name = "VERSION", value_parser = ["4", "6"])]
    pub ip_version: Option<String>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct NetworkUpdateArgs {
    /// A key/value pair attached to this Network (format: key=value).
    #[arg(short = 'a', long, value_name = "ATTRS", required = true)]
    pub attributes: Vec<String>,

    /// Unique ID of the Network being updated.
    #[arg(short = 'i', long, value_name = "ID")]
    pub id: i64,

    #[command(flatten)]
    pub actions: AttributeActionArgs,

    /// Treat the specified attributes as a list type.
    #[arg(short = 'm', long)]
    pub multi: bool,

    /// Unique ID of the Site this Network is under.  [required]
    #[arg(short = 's', long, value_name = "SITE_ID")]
    pub site_id: Option<String>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct NetworkRemoveArgs {
    /// Unique ID of the Network being deleted.
    #[arg(short = 'i', long, value_name = "ID")]
    pub id: i64,

    /// Unique ID of the Site this Network is under.  [required]
    #[arg(short = 's', long, value_name = "SITE_ID")]
    pub site_id: Option<String>,
}
