//! `changes` handlers

use crate::callbacks::{process_site_id, transform_event, transform_resource_name};
use crate::cli::{ChangesCommand, ChangesListArgs};
use crate::client::{Payload, Request, Resource, Verb};
use crate::config::Config;
use crate::display::{CHANGE_FIELDS, CHANGE_VERBOSE_FIELDS, Output, select_table};
use crate::error::NsotError;
use crate::operations::Invocation;
use crate::operations::payload::PayloadBuilder;

/// Plan a `changes` sub-command
///
/// # Errors
///
/// Returns an error if an option value is invalid or no site is available.
#[inline]
pub fn plan(command: &ChangesCommand, config: &Config) -> Result<Invocation, NsotError> {
    match *command {
        ChangesCommand::List(ref args) => plan_list(args, config),
    }
}

fn plan_list(args: &ChangesListArgs, config: &Config) -> Result<Invocation, NsotError> {
    let site_id = process_site_id(args.site_id.as_deref(), config.default_site, true)?;
    let event = args.event.as_deref().map(transform_event).transpose()?;
    let resource_name = args
        .resource_name
        .as_deref()
        .map(transform_resource_name)
        .transpose()?;

    let payload = PayloadBuilder::new()
        .field("event", event)
        .field("id", args.id)
        .field("limit", args.limit)
        .field("offset", args.offset)
        .field("resource_id", args.resource_id)
        .field("resource_name", resource_name)
        .field("site_id", site_id)
        .build();

    let table = select_table(args.id.is_some(), &CHANGE_FIELDS, &CHANGE_VERBOSE_FIELDS);

    Ok(Invocation {
        verb: Verb::List,
        request: Request::new(Resource::Changes, site_id, Payload::Single(payload)),
        output: Output::Table {
            table,
            noun: "changes",
        },
    })
}
