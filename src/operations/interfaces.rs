//! `interfaces` handlers

use crate::callbacks::{parse_attribute_pairs, process_bulk_add, process_site_id, transform_attributes};
use crate::cli::{
    InterfaceAddArgs, InterfaceListArgs, InterfaceListCommand, InterfaceRemoveArgs,
    InterfaceUpdateArgs, InterfacesCommand,
};
use crate::client::{Mutation, Payload, Request, Resource, SubResource, Verb};
use crate::config::Config;
use crate::display::{
    INTERFACE_FIELDS, INTERFACE_VERBOSE_FIELDS, NETWORK_FIELDS, NaturalKey, Output, select_table,
};
use crate::error::NsotError;
use crate::operations::payload::{PayloadBuilder, attribute_changes, strip_local_toggles};
use crate::operations::{Invocation, missing_option, read_bulk_file};
use crate::system::System;

/// Plan an `interfaces` sub-command
///
/// # Errors
///
/// Returns an error if:
/// - An option value is invalid or no site is available
/// - A required option is missing
/// - The bulk file cannot be read or parsed
#[inline]
pub fn plan(
    command: &InterfacesCommand,
    config: &Config,
    system: &dyn System,
) -> Result<Invocation, NsotError> {
    match *command {
        InterfacesCommand::Add(ref args) => plan_add(args, config, system),
        InterfacesCommand::List(ref args) => plan_list(args, config),
        InterfacesCommand::Update(ref args) => plan_update(args, config),
        InterfacesCommand::Remove(ref args) => plan_remove(args, config),
    }
}

fn plan_add(
    args: &InterfaceAddArgs,
    config: &Config,
    system: &dyn System,
) -> Result<Invocation, NsotError> {
    let site_id = process_site_id(args.site_id.as_deref(), config.default_site, true)?;

    if let Some(path) = args.bulk_add.as_deref() {
        let contents = read_bulk_file(system, path)?;
        let records = process_bulk_add(&contents, Resource::Interfaces)?;
        let count = records.len();
        return Ok(Invocation {
            verb: Mutation::Add.verb(),
            request: Request::new(Resource::Interfaces, site_id, Payload::Bulk(records)),
            output: Output::Confirmation {
                mutation: Mutation::Add,
                resource: Resource::Interfaces,
                count: Some(count),
            },
        });
    }

    if args.device.is_none() {
        return Err(missing_option("-D\" / \"--device"));
    }
    if args.name.is_none() {
        return Err(missing_option("-n\" / \"--name"));
    }

    let payload = PayloadBuilder::new()
        .attributes(transform_attributes(&args.attributes)?)
        .field("device", args.device)
        .field("name", args.name.clone())
        .field("description", args.description.clone())
        .field("mac_address", args.mac_address.clone())
        .field("speed", args.speed)
        .field("type", args.interface_type)
        .field("parent_id", args.parent_id)
        .field("site_id", site_id)
        .build();

    Ok(Invocation {
        verb: Mutation::Add.verb(),
        request: Request::new(Resource::Interfaces, site_id, Payload::Single(payload)),
        output: Output::Confirmation {
            mutation: Mutation::Add,
            resource: Resource::Interfaces,
            count: None,
        },
    })
}

fn plan_list(args: &InterfaceListArgs, config: &Config) -> Result<Invocation, NsotError> {
    let site_id = process_site_id(args.site_id.as_deref(), config.default_site, true)?;
    let attributes = transform_attributes(&args.attributes)?;

    if let Some(command) = args.command {
        return plan_list_related(args, command, site_id);
    }

    let mut payload = PayloadBuilder::new()
        .attribute_filter(attributes)
        .flag("delimited", args.delimited)
        .field("device", args.device)
        .field("description", args.description.clone())
        .flag("grep", args.grep)
        .field("id", args.id)
        .field("limit", args.limit)
        .field("name", args.name.clone())
        .flag("natural_key", args.natural_key)
        .field("offset", args.offset)
        .field("parent_id", args.parent_id)
        .field("query", args.query.clone())
        .field("site_id", site_id)
        .field("speed", args.speed)
        .field("type", args.interface_type)
        .build();
    strip_local_toggles(&mut payload);

    let key = NaturalKey::DeviceName;
    let (verb, output) = if args.query.is_some() {
        (
            Verb::SetQuery,
            Output::SetQuery {
                key,
                delimited: args.delimited,
            },
        )
    } else if args.grep {
        (Verb::List, Output::Grep(key))
    } else if args.natural_key {
        (Verb::List, Output::NaturalKeys(key))
    } else {
        let single = args.id.is_some() || (args.device.is_some() && args.name.is_some());
        let table = select_table(single, &INTERFACE_FIELDS, &INTERFACE_VERBOSE_FIELDS);
        (
            Verb::List,
            Output::Table {
                table,
                noun: "interfaces",
            },
        )
    };

    Ok(Invocation {
        verb,
        request: Request::new(Resource::Interfaces, site_id, Payload::Single(payload)),
        output,
    })
}

/// List the addresses or networks attached to one interface
fn plan_list_related(
    args: &InterfaceListArgs,
    command: InterfaceListCommand,
    site_id: Option<i64>,
) -> Result<Invocation, NsotError> {
    let Some(id) = args.id else {
        return Err(missing_option("-i\" / \"--id"));
    };

    let sub_resource = match command {
        InterfaceListCommand::Addresses => SubResource::Addresses,
        InterfaceListCommand::Networks => SubResource::Networks,
    };

    let payload = PayloadBuilder::new()
        .field("id", Some(id))
        .field("limit", args.limit)
        .field("offset", args.offset)
        .field("site_id", site_id)
        .build();

    let key = NaturalKey::Cidr;
    let output = if args.grep {
        Output::Grep(key)
    } else if args.natural_key {
        Output::NaturalKeys(key)
    } else {
        Output::Table {
            table: &NETWORK_FIELDS,
            noun: sub_resource.path(),
        }
    };

    Ok(Invocation {
        verb: Verb::List,
        request: Request::new(Resource::Interfaces, site_id, Payload::Single(payload))
            .with_sub_resource(sub_resource),
        output,
    })
}

fn plan_update(args: &InterfaceUpdateArgs, config: &Config) -> Result<Invocation, NsotError> {
    let site_id = process_site_id(args.site_id.as_deref(), config.default_site, true)?;
    let pairs = parse_attribute_pairs(&args.attributes)?;

    let has_field_change = args.name.is_some()
        || args.description.is_some()
        || args.mac_address.is_some()
        || args.speed.is_some()
        || args.interface_type.is_some()
        || args.parent_id.is_some();
    if pairs.is_empty() && !has_field_change {
        return Err(NsotError::usage(
            "You must supply at least one of the optional arguments.",
        ));
    }

    let action = args.actions.action();
    let payload = PayloadBuilder::new()
        .field("id", Some(args.id))
        .field("site_id", site_id)
        .field("name", args.name.clone())
        .field("description", args.description.clone())
        .field("mac_address", args.mac_address.clone())
        .field("speed", args.speed)
        .field("type", args.interface_type)
        .field("parent_id", args.parent_id)
        .attribute_filter(attribute_changes(pairs, action, args.multi))
        .attribute_action(action, args.multi)
        .build();

    Ok(Invocation {
        verb: Mutation::Update.verb(),
        request: Request::new(Resource::Interfaces, site_id, Payload::Single(payload)),
        output: Output::Confirmation {
            mutation: Mutation::Update,
            resource: Resource::Interfaces,
            count: None,
        },
    })
}

fn plan_remove(args: &InterfaceRemoveArgs, config: &Config) -> Result<Invocation, NsotError> {
    let site_id = process_site_id(args.site_id.as_deref(), config.default_site, true)?;
    let payload = PayloadBuilder::new()
        .field("id", Some(args.id))
        .field("site_id", site_id)
        .build();

    Ok(Invocation {
        verb: Mutation::Remove.verb(),
        request: Request::new(Resource::Interfaces, site_id, Payload::Single(payload)),
        output: Output::Confirmation {
            mutation: Mutation::Remove,
            resource: Resource::Interfaces,
            count: None,
        },
    })
}
