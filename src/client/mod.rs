//! API client abstraction
//!
//! Commands talk to the inventory service only through [`ApiClient`], one
//! method per verb. [`HttpClient`] is the production implementation and
//! [`MockClient`] records calls for tests.

pub mod http;
pub mod merge;
pub mod mock;

pub use http::HttpClient;
pub use mock::MockClient;

use crate::error::NsotError;
use serde_json::{Map, Value};
use std::fmt;

/// One object as sent to or returned by the server
pub type Record = Map<String, Value>;

/// Records returned by a call
pub type ResultSet = Vec<Record>;

/// Top-level resource types exposed by the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Resource {
    Changes,
    Interfaces,
    Networks,
}

impl Resource {
    /// URL path segment for this resource
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Changes => "changes",
            Self::Interfaces => "interfaces",
            Self::Networks => "networks",
        }
    }

    /// Singular noun used in messages
    #[must_use]
    pub const fn singular(self) -> &'static str {
        match self {
            Self::Changes => "change",
            Self::Interfaces => "interface",
            Self::Networks => "network",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Collections nested under a single object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum SubResource {
    Addresses,
    Networks,
}

impl SubResource {
    /// URL path segment for this sub-resource
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Addresses => "addresses",
            Self::Networks => "networks",
        }
    }
}

/// Verbs exposed by the API client
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verb {
    List,
    Add,
    Update,
    Remove,
    SetQuery,
}

/// Verbs that change server state and are reported with a confirmation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutation {
    Add,
    Update,
    Remove,
}

impl Mutation {
    /// Client verb performing the change
    #[must_use]
    pub const fn verb(self) -> Verb {
        match self {
            Self::Add => Verb::Add,
            Self::Update => Verb::Update,
            Self::Remove => Verb::Remove,
        }
    }

    /// Past-tense form used in confirmation messages
    #[must_use]
    pub const fn past_tense(self) -> &'static str {
        match self {
            Self::Add => "Added",
            Self::Update => "Updated",
            Self::Remove => "Removed",
        }
    }
}

/// Request body assembled from the parsed options
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// One mapping of option name to transformed value
    Single(Record),
    /// Records parsed from a bulk file, submitted as one batch
    Bulk(Vec<Record>),
}

impl Payload {
    /// The single mapping, if this is not a bulk payload
    #[must_use]
    pub const fn as_single(&self) -> Option<&Record> {
        match self {
            Self::Single(record) => Some(record),
            Self::Bulk(_) => None,
        }
    }

    /// Look up a field of a single payload
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_single().and_then(|record| record.get(key))
    }
}

/// Everything the client needs to perform one verb
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    pub resource: Resource,
    pub sub_resource: Option<SubResource>,
    pub site_id: Option<i64>,
    pub payload: Payload,
}

impl Request {
    /// Create a request for a top-level resource
    #[must_use]
    pub const fn new(resource: Resource, site_id: Option<i64>, payload: Payload) -> Self {
        Self {
            resource,
            sub_resource: None,
            site_id,
            payload,
        }
    }

    /// Target a collection nested under the object named by `id`
    #[must_use]
    pub fn with_sub_resource(mut self, sub_resource: SubResource) -> Self {
        self.sub_resource = Some(sub_resource);
        self
    }

    /// Object ID carried in the payload, if any
    #[must_use]
    pub fn object_id(&self) -> Option<i64> {
        self.payload.get("id").and_then(Value::as_i64)
    }
}

/// Contract between command handlers and the inventory service
///
/// Failures are returned as [`NsotError::Server`] and are never retried here.
pub trait ApiClient {
    /// List objects matching the payload filters
    fn list(&self, request: &Request) -> Result<ResultSet, NsotError>;

    /// Create one object, or a batch for bulk payloads
    fn add(&self, request: &Request) -> Result<ResultSet, NsotError>;

    /// Update the object named by the payload `id`
    fn update(&self, request: &Request) -> Result<ResultSet, NsotError>;

    /// Delete the object named by the payload `id`
    fn remove(&self, request: &Request) -> Result<ResultSet, NsotError>;

    /// Evaluate the payload `query` set expression
    fn set_query(&self, request: &Request) -> Result<ResultSet, NsotError>;

    /// Perform `verb` with `request`
    fn call(&self, verb: Verb, request: &Request) -> Result<ResultSet, NsotError> {
        match verb {
            Verb::List => self.list(request),
            Verb::Add => self.add(request),
            Verb::Update => self.update(request),
            Verb::Remove => self.remove(request),
            Verb::SetQuery => self.set_query(request),
        }
    }
}
