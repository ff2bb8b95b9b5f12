//! `networks` handlers

use crate::callbacks::{
    parse_attribute_pairs, process_bulk_add, process_site_id, transform_attributes, transform_cidr,
};
use crate::cli::{
    NetworkAddArgs, NetworkListArgs, NetworkRemoveArgs, NetworkUpdateArgs, NetworksCommand,
};
use crate::client::{Mutation, Payload, Request, Resource, Verb};
use crate::config::Config;
use crate::display::{NETWORK_FIELDS, NETWORK_VERBOSE_FIELDS, NaturalKey, Output, select_table};
use crate::error::NsotError;
use crate::operations::payload::{PayloadBuilder, attribute_changes, strip_local_toggles};
use crate::operations::{Invocation, missing_option, read_bulk_file};
use crate::system::System;

/// Plan a `networks` sub-command
///
/// # Errors
///
/// Returns an error if:
/// - An option value is invalid or no site is available
/// - A required option is missing
/// - The bulk file cannot be read or parsed
#[inline]
pub fn plan(
    command: &NetworksCommand,
    config: &Config,
    system: &dyn System,
) -> Result<Invocation, NsotError> {
    match *command {
        NetworksCommand::Add(ref args) => plan_add(args, config, system),
        NetworksCommand::List(ref args) => plan_list(args, config),
        NetworksCommand::Update(ref args) => plan_update(args, config),
        NetworksCommand::Remove(ref args) => plan_remove(args, config),
    }
}

fn plan_add(
    args: &NetworkAddArgs,
    config: &Config,
    system: &dyn System,
) -> Result<Invocation, NsotError> {
    let site_id = process_site_id(args.site_id.as_deref(), config.default_site, true)?;

    if let Some(path) = args.bulk_add.as_deref() {
        let contents = read_bulk_file(system, path)?;
        let records = process_bulk_add(&contents, Resource::Networks)?;
        let count = records.len();
        return Ok(Invocation {
            verb: Mutation::Add.verb(),
            request: Request::new(Resource::Networks, site_id, Payload::Bulk(records)),
            output: Output::Confirmation {
                mutation: Mutation::Add,
                resource: Resource::Networks,
                count: Some(count),
            },
        });
    }

    let Some(cidr) = args.cidr.as_deref() else {
        return Err(missing_option("-c\" / \"--cidr"));
    };

    let payload = PayloadBuilder::new()
        .attributes(transform_attributes(&args.attributes)?)
        .field("cidr", Some(transform_cidr(cidr)?))
        .field("site_id", site_id)
        .build();

    Ok(Invocation {
        verb: Mutation::Add.verb(),
        request: Request::new(Resource::Networks, site_id, Payload::Single(payload)),
        output: Output::Confirmation {
            mutation: Mutation::Add,
            resource: Resource::Networks,
            count: None,
        },
    })
}

fn plan_list(args: &NetworkListArgs, config: &Config) -> Result<Invocation, NsotError> {
    let site_id = process_site_id(args.site_id.as_deref(), config.default_site, true)?;
    let cidr = args.cidr.as_deref().map(transform_cidr).transpose()?;

    let mut payload = PayloadBuilder::new()
        .attribute_filter(transform_attributes(&args.attributes)?)
        .field("cidr", cidr)
        .flag("delimited", args.delimited)
        .flag("grep", args.grep)
        .field("id", args.id)
        .field("limit", args.limit)
        .flag("natural_key", args.natural_key)
        .field("offset", args.offset)
        .field("query", args.query.clone())
        .field("site_id", site_id)
        .field("root_only", args.root_only.then_some(true))
        .flag("include_ips", !args.no_include_ips)
        .flag("include_networks", !args.no_include_networks)
        .field("ip_version", args.ip_version.clone())
        .build();
    strip_local_toggles(&mut payload);

    let key = NaturalKey::Cidr;
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
        let single = args.id.is_some() || args.cidr.is_some();
        let table = select_table(single, &NETWORK_FIELDS, &NETWORK_VERBOSE_FIELDS);
        (
            Verb::List,
            Output::Table {
                table,
                noun: "networks",
            },
        )
    };

    Ok(Invocation {
        verb,
        request: Request::new(Resource::Networks, site_id, Payload::Single(payload)),
        output,
    })
}

fn plan_update(args: &NetworkUpdateArgs, config: &Config) -> Result<Invocation, NsotError> {
    let site_id = process_site_id(args.site_id.as_deref(), config.default_site, true)?;
    let pairs = parse_attribute_pairs(&args.attributes)?;
    if pairs.is_empty() {
        return Err(missing_option("-a\" / \"--attributes"));
    }

    let action = args.actions.action();
    let payload = PayloadBuilder::new()
        .field("id", Some(args.id))
        .field("site_id", site_id)
        .attributes(attribute_changes(pairs, action, args.multi))
        .attribute_action(action, args.multi)
        .build();

    Ok(Invocation {
        verb: Mutation::Update.verb(),
        request: Request::new(Resource::Networks, site_id, Payload::Single(payload)),
        output: Output::Confirmation {
            mutation: Mutation::Update,
            resource: Resource::Networks,
            count: None,
        },
    })
}

fn plan_remove(args: &NetworkRemoveArgs, config: &Config) -> Result<Invocation, NsotError> {
    let site_id = process_site_id(args.site_id.as_deref(), config.default_site, true)?;
    let payload = PayloadBuilder::new()
        .field("id", Some(args.id))
        .field("site_id", site_id)
        .build();

    Ok(Invocation {
        verb: Mutation::Remove.verb(),
        request: Request::new(Resource::Networks, site_id, Payload::Single(payload)),
        output: Output::Confirmation {
            mutation: Mutation::Remove,
            resource: Resource::Networks,
            count: None,
        },
    })
}
