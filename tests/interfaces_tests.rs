//! `interfaces` command tests against a mock client

use clap::Parser as _;
use nsot_cli::cli::{Args, Command};
use nsot_cli::client::{MockClient, Payload, Resource, SubResource, Verb};
use nsot_cli::config::Config;
use nsot_cli::display::{INTERFACE_FIELDS, INTERFACE_VERBOSE_FIELDS, NETWORK_FIELDS, Output};
use nsot_cli::error::NsotError;
use nsot_cli::operations::{dispatch, plan};
use nsot_cli::system::MockSystem;
use serde_json::{Map, Value, json};

fn parse(argv: &[&str]) -> Command {
    Args::try_parse_from(std::iter::once("nsot").chain(argv.iter().copied()))
        .unwrap()
        .command
}

fn record(value: Value) -> Map<String, Value> {
    value.as_object().unwrap().clone()
}

fn run(argv: &[&str], client: &MockClient) -> Result<String, NsotError> {
    dispatch(&parse(argv), &Config::default(), &MockSystem::new(), client)
}

fn interface(id: i64, device: i64, name: &str) -> Map<String, Value> {
    record(json!({
        "id": id,
        "device": device,
        "name": name,
        "mac_address": "00:00:00:00:00:00",
        "addresses": [],
        "attributes": {"vlan": "100"}
    }))
}

#[test]
fn test_list_without_filters_uses_summary_table() {
    let invocation = plan(
        &parse(&["interfaces", "list", "-s", "1"]),
        &Config::default(),
        &MockSystem::new(),
    )
    .unwrap();

    assert_eq!(
        invocation.output,
        Output::Table {
            table: &INTERFACE_FIELDS,
            noun: "interfaces"
        }
    );
}

#[test]
fn test_device_and_name_select_verbose_table() {
    let invocation = plan(
        &parse(&["interfaces", "list", "-s", "1", "--device", "5", "--name", "eth0"]),
        &Config::default(),
        &MockSystem::new(),
    )
    .unwrap();

    assert_eq!(invocation.verb, Verb::List);
    assert_eq!(
        invocation.output,
        Output::Table {
            table: &INTERFACE_VERBOSE_FIELDS,
            noun: "interfaces"
        }
    );
}

#[test]
fn test_device_alone_keeps_summary_table() {
    let invocation = plan(
        &parse(&["interfaces", "list", "-s", "1", "-D", "5"]),
        &Config::default(),
        &MockSystem::new(),
    )
    .unwrap();

    assert_eq!(
        invocation.output,
        Output::Table {
            table: &INTERFACE_FIELDS,
            noun: "interfaces"
        }
    );
}

#[test]
fn test_id_selects_verbose_table() {
    let client = MockClient::new().with_response(Verb::List, vec![interface(9, 5, "eth0")]);

    let output = run(&["interfaces", "list", "-s", "1", "-i", "9"], &client).unwrap();

    assert!(output.contains("Parent ID"));
    assert!(output.contains("eth0"));
    assert!(output.contains("vlan=100"));
}

#[test]
fn test_display_toggles_never_reach_the_client() {
    let client = MockClient::new();

    run(
        &["interfaces", "list", "-s", "1", "-q", "vlan=100", "-d"],
        &client,
    )
    .unwrap();

    let calls = client.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].verb, Verb::SetQuery);
    assert_eq!(
        calls[0].request.payload,
        Payload::Single(record(json!({"query": "vlan=100", "site_id": 1})))
    );
}

#[test]
fn test_set_query_prints_sorted_unique_natural_keys() {
    let results = vec![
        interface(4, 10, "eth0"),
        interface(2, 5, "eth1"),
        interface(1, 5, "eth0"),
        interface(3, 4, "eth0"),
        interface(1, 5, "eth0"),
    ];
    let client = MockClient::new().with_response(Verb::SetQuery, results);

    let output = run(&["interfaces", "list", "-s", "1", "-q", "vlan=100"], &client).unwrap();
    assert_eq!(output, "4:eth0\n5:eth0\n5:eth1\n10:eth0");

    let output = run(
        &["interfaces", "list", "-s", "1", "-q", "vlan=100", "--delimited"],
        &client,
    )
    .unwrap();
    assert_eq!(output, "4:eth0,5:eth0,5:eth1,10:eth0");
}

#[test]
fn test_grep_output_lists_each_attribute() {
    let client = MockClient::new().with_response(Verb::List, vec![interface(1, 5, "eth0")]);

    let output = run(&["interfaces", "list", "-s", "1", "-g"], &client).unwrap();

    assert_eq!(output, "5:eth0 vlan=100");
}

#[test]
fn test_add_requires_device_and_name() {
    let client = MockClient::new();

    let err = run(&["interfaces", "add", "-s", "1", "-n", "eth0"], &client).unwrap_err();
    assert_eq!(err.to_string(), "Usage error: Missing option \"-D\" / \"--device\"");

    let err = run(&["interfaces", "add", "-s", "1", "-D", "5"], &client).unwrap_err();
    assert_eq!(err.to_string(), "Usage error: Missing option \"-n\" / \"--name\"");

    assert!(client.calls().is_empty());
}

#[test]
fn test_add_sends_transformed_attributes() {
    let client = MockClient::new();

    let output = run(
        &[
            "interfaces", "add", "-s", "1", "-D", "5", "-n", "eth0", "-a", "owner=ops",
            "-a", "vlan=100,owner=netops", "-S", "10000",
        ],
        &client,
    )
    .unwrap();

    assert_eq!(output, "[SUCCESS] Added interface!");
    let calls = client.calls();
    assert_eq!(calls[0].verb, Verb::Add);
    assert_eq!(
        calls[0].request.payload,
        Payload::Single(record(json!({
            "attributes": {"owner": "netops", "vlan": "100"},
            "device": 5,
            "name": "eth0",
            "speed": 10000,
            "site_id": 1
        })))
    );
}

#[test]
fn test_empty_bulk_file_still_invokes_the_client() {
    let system = MockSystem::new().with_file("/data/empty.txt", b"").unwrap();
    let client = MockClient::new();
    let command = parse(&["interfaces", "add", "-s", "1", "-b", "/data/empty.txt"]);

    let output = dispatch(&command, &Config::default(), &system, &client).unwrap();

    let calls = client.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].verb, Verb::Add);
    assert_eq!(calls[0].request.payload, Payload::Bulk(vec![]));
    assert_eq!(output, "[SUCCESS] Added 0 interfaces!");
}

#[test]
fn test_bulk_file_records_are_sent_as_one_batch() {
    let contents = b"#device:name:attributes\n1:eth0:owner=ops\n\n1:eth1:\n";
    let system = MockSystem::new().with_file("/data/ifaces.txt", contents).unwrap();
    let client = MockClient::new();
    let command = parse(&["interfaces", "add", "-s", "1", "-b", "/data/ifaces.txt"]);

    dispatch(&command, &Config::default(), &system, &client).unwrap();

    assert_eq!(
        client.calls()[0].request.payload,
        Payload::Bulk(vec![
            record(json!({"device": 1, "name": "eth0", "attributes": {"owner": "ops"}})),
            record(json!({"device": 1, "name": "eth1", "attributes": {}})),
        ])
    );
}

#[test]
fn test_unreadable_bulk_file_is_a_usage_error() {
    let client = MockClient::new();

    let err = run(&["interfaces", "add", "-s", "1", "-b", "/nope.txt"], &client).unwrap_err();

    assert_eq!(err.exit_code(), 2);
    assert!(client.calls().is_empty());
}

#[test]
fn test_addresses_of_an_interface() {
    let invocation = plan(
        &parse(&["interfaces", "list", "-s", "1", "-i", "9", "addresses"]),
        &Config::default(),
        &MockSystem::new(),
    )
    .unwrap();

    assert_eq!(invocation.request.resource, Resource::Interfaces);
    assert_eq!(invocation.request.sub_resource, Some(SubResource::Addresses));
    assert_eq!(invocation.request.object_id(), Some(9));
    assert_eq!(
        invocation.output,
        Output::Table {
            table: &NETWORK_FIELDS,
            noun: "addresses"
        }
    );
}

#[test]
fn test_networks_of_an_interface_require_an_id() {
    let client = MockClient::new();

    let err = run(&["interfaces", "list", "-s", "1", "networks"], &client).unwrap_err();

    assert_eq!(err.to_string(), "Usage error: Missing option \"-i\" / \"--id\"");
    assert!(client.calls().is_empty());
}

#[test]
fn test_update_carries_attribute_action() {
    let client = MockClient::new();

    let output = run(
        &[
            "interfaces", "update", "-s", "1", "-i", "9", "-a", "vlan=100", "-a", "vlan=200",
            "--multi", "--delete-attributes",
        ],
        &client,
    )
    .unwrap();

    assert_eq!(output, "[SUCCESS] Updated interface!");
    assert_eq!(
        client.calls()[0].request.payload,
        Payload::Single(record(json!({
            "id": 9,
            "site_id": 1,
            "attributes": {"vlan": ["100", "200"]},
            "attr_action": "delete",
            "multi": true
        })))
    );
}

#[test]
fn test_update_field_only() {
    let client = MockClient::new();

    run(
        &["interfaces", "update", "-s", "1", "-i", "9", "--speed", "1000"],
        &client,
    )
    .unwrap();

    assert_eq!(
        client.calls()[0].request.payload,
        Payload::Single(record(json!({
            "id": 9,
            "site_id": 1,
            "speed": 1000,
            "attr_action": "add",
            "multi": false
        })))
    );
}

#[test]
fn test_update_without_changes_is_rejected() {
    let client = MockClient::new();

    let err = run(&["interfaces", "update", "-s", "1", "-i", "9"], &client).unwrap_err();

    assert_eq!(err.exit_code(), 2);
    assert!(client.calls().is_empty());
}

#[test]
fn test_remove() {
    let client = MockClient::new();

    let output = run(&["interfaces", "remove", "-s", "1", "-i", "9"], &client).unwrap();

    assert_eq!(output, "[SUCCESS] Removed interface!");
    assert_eq!(client.calls()[0].verb, Verb::Remove);
    assert_eq!(client.calls()[0].request.object_id(), Some(9));
}

#[test]
fn test_conflicting_display_toggles_are_rejected_by_the_parser() {
    let result = Args::try_parse_from(["nsot", "interfaces", "list", "-s", "1", "-g", "-N"]);
    assert!(result.is_err());
}
