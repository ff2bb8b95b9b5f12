//! Blocking HTTP implementation of the API client

use crate::client::merge::merge_update;
use crate::client::{ApiClient, Payload, Record, Request, ResultSet};
use crate::config::Config;
use crate::error::NsotError;
use indicatif::ProgressBar;
use reqwest::blocking::{Client, RequestBuilder};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, info};

/// Payload fields that name the URL rather than filter or body content
const PATH_FIELDS: &[&str] = &["id", "site_id"];

/// API client speaking JSON over HTTP
///
/// URLs follow `{url}/sites/{site_id}/{resource}/[{id}/][{sub_resource}/]`.
#[derive(Debug, Clone)]
pub struct HttpClient {
    base_url: String,
    http: Client,
}

impl HttpClient {
    /// Create a client for `base_url`
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    #[inline]
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, NsotError> {
        let http = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("nsot-cli/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| NsotError::configuration(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
            http,
        })
    }

    /// Create a client from the resolved configuration
    ///
    /// # Errors
    ///
    /// Returns an error if no API URL is configured.
    #[inline]
    pub fn from_config(config: &Config) -> Result<Self, NsotError> {
        let url = config.url.as_deref().ok_or_else(|| {
            NsotError::configuration(
                "No API URL configured. Set 'url' in ~/.nsotrc.yaml, NSOT_URL, or pass --url",
            )
        })?;
        Self::new(url, Duration::from_secs(config.timeout_secs()))
    }

    /// URL of the collection a request targets
    #[must_use]
    pub fn collection_url(&self, request: &Request) -> String {
        match request.site_id {
            Some(site) => format!("{}/sites/{site}/{}/", self.base_url, request.resource.path()),
            None => format!("{}/{}/", self.base_url, request.resource.path()),
        }
    }

    /// URL of the object (or its nested collection) a request targets
    #[must_use]
    pub fn object_url(&self, request: &Request, id: i64) -> String {
        let mut url = format!("{}{id}/", self.collection_url(request));
        if let Some(sub) = request.sub_resource {
            url.push_str(sub.path());
            url.push('/');
        }
        url
    }

    fn require_id(request: &Request) -> Result<i64, NsotError> {
        request
            .object_id()
            .ok_or_else(|| NsotError::usage("Missing option \"-i\" / \"--id\""))
    }

    fn send(&self, builder: RequestBuilder, label: String) -> Result<Value, NsotError> {
        let spinner = ProgressBar::new_spinner();
        spinner.enable_steady_tick(Duration::from_millis(120));
        spinner.set_message(label.clone());

        let result = builder.send();
        spinner.finish_and_clear();

        let response = result.map_err(|e| NsotError::server(None, e.to_string()))?;
        let status = response.status();
        let body = response
            .text()
            .map_err(|e| NsotError::server(Some(status.as_u16()), e.to_string()))?;

        if !status.is_success() {
            return Err(NsotError::server(Some(status.as_u16()), server_message(&body)));
        }

        info!("{label}: {status}");
        if body.trim().is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&body).map_err(|e| {
            NsotError::server(Some(status.as_u16()), format!("Invalid JSON response: {e}"))
        })
    }

    fn get_records(
        &self,
        url: &str,
        params: &[(String, String)],
        request: &Request,
    ) -> Result<ResultSet, NsotError> {
        debug!("GET {url} {params:?}");
        let value = self.send(self.http.get(url).query(params), format!("GET {url}"))?;
        Ok(extract_records(value, &envelope_keys(request)))
    }
}

impl ApiClient for HttpClient {
    fn list(&self, request: &Request) -> Result<ResultSet, NsotError> {
        let url = match request.object_id() {
            Some(id) => self.object_url(request, id),
            None => self.collection_url(request),
        };
        let params = request
            .payload
            .as_single()
            .map(query_params)
            .unwrap_or_default();
        self.get_records(&url, &params, request)
    }

    fn add(&self, request: &Request) -> Result<ResultSet, NsotError> {
        let url = self.collection_url(request);
        let body = match &request.payload {
            Payload::Single(record) => Value::Object(record.clone()),
            Payload::Bulk(records) => {
                Value::Array(records.iter().cloned().map(Value::Object).collect())
            }
        };
        debug!("POST {url} {body}");
        let value = self.send(self.http.post(&url).json(&body), format!("POST {url}"))?;
        Ok(extract_records(value, &envelope_keys(request)))
    }

    fn update(&self, request: &Request) -> Result<ResultSet, NsotError> {
        let id = Self::require_id(request)?;
        let url = self.object_url(request, id);
        let changes = request.payload.as_single().cloned().unwrap_or_default();

        let existing = self
            .get_records(&url, &[], request)?
            .into_iter()
            .next()
            .ok_or_else(|| {
                NsotError::server(
                    Some(404),
                    format!("{} {id} not found", request.resource.singular()),
                )
            })?;

        let body = Value::Object(merge_update(&existing, &changes));
        debug!("PUT {url} {body}");
        let value = self.send(self.http.put(&url).json(&body), format!("PUT {url}"))?;
        Ok(extract_records(value, &envelope_keys(request)))
    }

    fn remove(&self, request: &Request) -> Result<ResultSet, NsotError> {
        let id = Self::require_id(request)?;
        let url = self.object_url(request, id);
        debug!("DELETE {url}");
        self.send(self.http.delete(&url), format!("DELETE {url}"))?;
        Ok(Vec::new())
    }

    fn set_query(&self, request: &Request) -> Result<ResultSet, NsotError> {
        let url = format!("{}query/", self.collection_url(request));
        let params = request
            .payload
            .as_single()
            .map(query_params)
            .unwrap_or_default();
        self.get_records(&url, &params, request)
    }
}

/// Turn payload filters into query parameters
///
/// Path fields are left out, attributes become repeated `attributes=key=value`
/// parameters and lists repeat their key.
#[must_use]
pub fn query_params(record: &Record) -> Vec<(String, String)> {
    let mut params = Vec::new();
    for (key, value) in record {
        if PATH_FIELDS.contains(&key.as_str()) {
            continue;
        }
        match value {
            Value::Null => {}
            Value::Object(attributes) => {
                for (name, attr) in attributes {
                    params.push((key.clone(), format!("{name}={}", scalar(attr))));
                }
            }
            Value::Array(items) => {
                for item in items {
                    params.push((key.clone(), scalar(item)));
                }
            }
            other => params.push((key.clone(), scalar(other))),
        }
    }
    params
}

fn scalar(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Extract a useful message from an error response body
#[must_use]
pub fn server_message(body: &str) -> String {
    let trimmed = body.trim();
    if let Ok(value) = serde_json::from_str::<Value>(trimmed) {
        let candidates = [
            value.pointer("/error/message"),
            value.get("detail"),
            value.get("message"),
            value.get("error"),
        ];
        if let Some(message) = candidates.into_iter().flatten().find_map(Value::as_str) {
            return message.to_owned();
        }
    }
    if trimmed.is_empty() {
        return "empty response".to_owned();
    }
    trimmed.to_owned()
}

/// Keys a response may wrap the records of `request` in
#[must_use]
pub fn envelope_keys(request: &Request) -> Vec<&'static str> {
    let mut keys = vec!["data", "results"];
    match request.sub_resource {
        Some(sub) => keys.push(sub.path()),
        None => {
            keys.push(request.resource.path());
            keys.push(request.resource.singular());
        }
    }
    keys
}

/// Unwrap the records from a response body
///
/// Accepts `{"data": …}` envelopes, `{"results": […]}` pages, lists keyed by
/// one of `keys`, bare lists, and single objects.
#[must_use]
pub fn extract_records(value: Value, keys: &[&str]) -> ResultSet {
    match value {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::Object(map) => Some(map),
                _ => None,
            })
            .collect(),
        Value::Object(mut map) => {
            for key in keys {
                if let Some(inner) = map.remove(*key) {
                    return extract_records(inner, keys);
                }
            }
            vec![map]
        }
        _ => Vec::new(),
    }
}
