//! Mock API client for testing

#![expect(clippy::module_name_repetitions)]

use crate::client::{ApiClient, Request, ResultSet, Verb};
use crate::error::NsotError;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// A call received by [`MockClient`]
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub verb: Verb,
    pub request: Request,
}

/// In-memory implementation of [`ApiClient`] for testing
///
/// Every call is recorded; responses are canned per verb and default to an
/// empty result set.
///
/// # Example
/// ```
/// use nsot_cli::client::{ApiClient, MockClient, Payload, Request, Resource, Verb};
///
/// let client = MockClient::new();
/// let request = Request::new(Resource::Changes, Some(1), Payload::Bulk(Vec::new()));
/// client.list(&request).unwrap();
///
/// assert_eq!(client.calls().len(), 1);
/// assert_eq!(client.calls()[0].verb, Verb::List);
/// ```
#[derive(Clone, Default)]
pub struct MockClient {
    state: Arc<RwLock<MockClientState>>,
}

#[derive(Default)]
struct MockClientState {
    calls: Vec<RecordedCall>,
    responses: HashMap<Verb, ResultSet>,
    failures: HashMap<Verb, (Option<u16>, String)>,
}

impl MockClient {
    /// Create a new `MockClient` with no canned responses
    #[must_use]
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return `results` for every call of `verb` (builder pattern)
    #[must_use]
    #[inline]
    pub fn with_response(self, verb: Verb, results: ResultSet) -> Self {
        if let Ok(mut state) = self.state.write() {
            state.responses.insert(verb, results);
        }
        self
    }

    /// Fail every call of `verb` with a server error (builder pattern)
    #[must_use]
    #[inline]
    pub fn with_failure(self, verb: Verb, status: Option<u16>, message: &str) -> Self {
        if let Ok(mut state) = self.state.write() {
            state.failures.insert(verb, (status, message.to_owned()));
        }
        self
    }

    /// Calls received so far, in order
    #[must_use]
    #[inline]
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.state
            .read()
            .map(|state| state.calls.clone())
            .unwrap_or_default()
    }

    fn respond(&self, verb: Verb, request: &Request) -> Result<ResultSet, NsotError> {
        let mut state = self
            .state
            .write()
            .map_err(|e| NsotError::server(None, e.to_string()))?;
        state.calls.push(RecordedCall {
            verb,
            request: request.clone(),
        });

        if let Some((status, message)) = state.failures.get(&verb) {
            return Err(NsotError::server(*status, message.clone()));
        }
        Ok(state.responses.get(&verb).cloned().unwrap_or_default())
    }
}

impl ApiClient for MockClient {
    fn list(&self, request: &Request) -> Result<ResultSet, NsotError> {
        self.respond(Verb::List, request)
    }

    fn add(&self, request: &Request) -> Result<ResultSet, NsotError> {
        self.respond(Verb::Add, request)
    }

    fn update(&self, request: &Request) -> Result<ResultSet, NsotError> {
        self.respond(Verb::Update, request)
    }

    fn remove(&self, request: &Request) -> Result<ResultSet, NsotError> {
        self.respond(Verb::Remove, request)
    }

    fn set_query(&self, request: &Request) -> Result<ResultSet, NsotError> {
        self.respond(Verb::SetQuery, request)
    }
}
