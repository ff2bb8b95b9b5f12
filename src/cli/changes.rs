//! `changes` sub-commands

use clap::{Args, Subcommand};

#[derive(Subcommand, Debug, Clone)]
pub enum ChangesCommand {
    /// List Change events for a Site.
    ///
    /// You must provide a Site ID using the -s/--site-id option unless a
    /// default site is configured.
    ///
    /// When listing Changes, all events are displayed by default. You may
    /// optionally lookup a single Change by ID using the -i/--id option.
    ///
    /// You may limit the number of results using the -l/--limit option.
    List(ChangesListArgs),
}

#[derive(Args, Debug, Clone, Default)]
pub struct ChangesListArgs {
    /// Filter result to specific event.
    #[arg(short = 'e', long, value_name = "EVENT")]
    pub event: Option<String>,

    /// Unique ID of the Change being retrieved.
    #[arg(short = 'i', long, value_name = "ID")]
    pub id: Option<i64>,

    /// Limit result to N resources.
    #[arg(short = 'l', long, value_name = "LIMIT")]
    pub limit: Option<u64>,

    /// Skip the first N resources.
    #[arg(short = 'o', long, value_name = "OFFSET")]
    pub offset: Option<u64>,

    /// Filter to Changes for a specific resource ID (e.g. Network ID 1).
    #[arg(short = 'R', long, value_name = "RESOURCE_ID")]
    pub resource_id: Option<i64>,

    /// Filter to Changes for a specific resource name (e.g. Network).
    #[arg(short = 'r', long, value_name = "RESOURCE_NAME")]
    pub resource_name: Option<String>,

    /// Unique ID of the Site this Change is under.  [required]
    #[arg(short = 's', long, value_name = "SITE_ID")]
    pub site_id: Option<String>,
}
