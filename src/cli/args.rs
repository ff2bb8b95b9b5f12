use crate::cli::changes::ChangesCommand;
use crate::cli::interfaces::InterfacesCommand;
use crate::cli::networks::NetworksCommand;
use crate::client::merge::AttrAction;
use clap::{Parser, Subcommand};

/// Command-line arguments for nsot
#[derive(Parser, Debug, Clone)]
#[command(name = "nsot")]
#[command(about = "A command-line client for the Network Source of Truth inventory service")]
#[command(long_about = None)]
#[command(version)]
pub struct Args {
    /// Configuration file path [default: ~/.nsotrc.yaml]
    #[arg(long, value_name = "PATH", env = "NSOT_CONFIG", global = true)]
    pub config: Option<String>,

    /// Base URL of the inventory API (overrides the configuration file)
    #[arg(long, value_name = "URL", env = "NSOT_URL", global = true)]
    pub url: Option<String>,

    /// Enable verbose logging output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Resource groups
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Change events.
    #[command(subcommand)]
    Changes(ChangesCommand),

    /// Interface objects.
    ///
    /// An Interface resource can represent a network interface attached to a
    /// Device. Working with interfaces is usually the device and an interface
    /// name.
    ///
    /// Interfaces can have any number of arbitrary attributes.
    #[command(subcommand)]
    Interfaces(InterfacesCommand),

    /// Network objects.
    ///
    /// A Network resource can represent an IP Network and an IP Address.
    /// Networks can have any number of arbitrary attributes.
    #[command(subcommand)]
    Networks(NetworksCommand),
}

/// How `-a/--attributes` combine with the attributes already stored
///
/// At most one action may be given; adding is the default.
#[derive(clap::Args, Debug, Clone, Default)]
#[group(id = "attr_action", multiple = false)]
pub struct AttributeActionArgs {
    /// Causes attributes to be added. This is the default and providing it
    /// will have no effect.
    #[arg(short = 'A', long = "add-attributes")]
    pub add: bool,

    /// Causes attributes to be deleted instead of updated. If combined with
    /// --multi the attribute will be deleted if either no value is provided,
    /// or if the attribute no longer has any valid values.
    #[arg(short = 'd', long = "delete-attributes")]
    pub delete: bool,

    /// Causes attributes to be replaced instead of updated. If combined with
    /// --multi, the entire list will be replaced.
    #[arg(short = 'r', long = "replace-attributes")]
    pub replace: bool,
}

impl AttributeActionArgs {
    /// The selected action
    #[must_use]
    pub const fn action(&self) -> AttrAction {
        if self.delete {
            AttrAction::Delete
        } else if self.replace {
            AttrAction::Replace
        } else {
            AttrAction::Add
        }
    }
}
