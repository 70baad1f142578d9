//! The JSON-RPC client and session handling.

use crate::config::ApiConfig;
use crate::error::{ApiError, ApiResult};
use reqwest::header::CONTENT_TYPE;
use serde::Deserialize;
use serde_json::{Map, Value, json};
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tracing::{debug, info};
use zbxvault_types::{EntityId, EntityKind};

/// An authenticated API session.
///
/// Returned by [`ZabbixClient::login`] and threaded by reference into every
/// subsequent call for the duration of one run.
#[derive(Debug, Clone)]
pub struct Session {
    token: String,
}

impl Session {
    fn new(token: String) -> Self {
        Self { token }
    }

    /// The raw session token.
    pub fn token(&self) -> &str {
        &self.token
    }
}

/// JSON-RPC response envelope.
#[derive(Debug, Deserialize)]
struct RpcEnvelope {
    result: Option<Value>,
    error: Option<RpcErrorObject>,
}

#[derive(Debug, Deserialize)]
struct RpcErrorObject {
    code: i64,
    message: String,
    data: Option<String>,
}

/// A host row from a tag-projected `host.get` call.
#[derive(Debug, Clone)]
pub struct TaggedHost {
    pub id: EntityId,
    /// Tag name to tag value.
    pub tags: HashMap<String, String>,
}

#[derive(Debug, Deserialize)]
struct TaggedHostRow {
    hostid: String,
    #[serde(default)]
    tags: Vec<TagPair>,
}

#[derive(Debug, Deserialize)]
struct TagPair {
    tag: String,
    value: String,
}

/// Client for the platform's JSON-RPC endpoint.
#[derive(Debug, Clone)]
pub struct ZabbixClient {
    config: ApiConfig,
    client: reqwest::Client,
    request_id: Arc<AtomicU64>,
}

impl ZabbixClient {
    /// Creates a new client from configuration.
    pub fn new(config: ApiConfig) -> ApiResult<Self> {
        let mut builder = reqwest::Client::builder().timeout(Duration::from_secs(config.timeout_secs));
        if !config.verify_tls {
            builder = builder.danger_accept_invalid_certs(true);
        }
        let client = builder
            .build()
            .map_err(|e| ApiError::Transport(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            config,
            client,
            request_id: Arc::new(AtomicU64::new(1)),
        })
    }

    /// The configured endpoint URL.
    pub fn endpoint(&self) -> &str {
        &self.config.url
    }

    /// Issues one JSON-RPC call and returns the `result` value.
    ///
    /// `session` is `None` only for `user.login`. A JSON-RPC error object in
    /// the response surfaces as [`ApiError::Rpc`].
    pub async fn call(
        &self,
        method: &str,
        params: Value,
        session: Option<&Session>,
    ) -> ApiResult<Value> {
        let id = self.request_id.fetch_add(1, Ordering::Relaxed);
        let body = json!({
            "jsonrpc": "2.0",
            "method": method,
            "params": params,
            "id": id,
            "auth": session.map(Session::token),
        });

        debug!(method, id, "JSON-RPC request");
        let response = self
            .client
            .post(&self.config.url)
            .header(CONTENT_TYPE, "application/json-rpc")
            .json(&body)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Http(status.as_u16()));
        }

        let envelope: RpcEnvelope = response
            .json()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        if let Some(error) = envelope.error {
            return Err(ApiError::Rpc {
                code: error.code,
                message: error.message,
                data: error.data,
            });
        }

        envelope
            .result
            .ok_or_else(|| ApiError::UnexpectedResponse(format!("{method}: response has no result")))
    }

    /// Authenticates and returns a session.
    ///
    /// Must succeed before any listing or export call; a failure here is
    /// fatal for the whole run.
    pub async fn login(&self) -> ApiResult<Session> {
        let params = json!({
            "user": self.config.username,
            "password": self.config.password,
        });

        let result = self.call("user.login", params, None).await.map_err(|e| match e {
            ApiError::Rpc { message, .. } => ApiError::Auth(message),
            other => other,
        })?;

        let token = result
            .as_str()
            .ok_or_else(|| ApiError::Auth("login result is not a token".to_string()))?;

        info!(endpoint = %self.config.url, "authenticated");
        Ok(Session::new(token.to_string()))
    }

    /// Lists the IDs of every entity of the given kind.
    ///
    /// The call projects only the ID field; either the whole list is
    /// returned or the call fails, never a partial result.
    pub async fn list_ids(&self, kind: EntityKind, session: &Session) -> ApiResult<Vec<EntityId>> {
        let profile = kind.profile();
        let params = json!({ "output": [profile.id_field] });
        let result = self.call(profile.list_method, params, Some(session)).await?;

        let rows = result.as_array().ok_or_else(|| {
            ApiError::UnexpectedResponse(format!("{}: result is not an array", profile.list_method))
        })?;

        rows.iter()
            .map(|row| {
                row.get(profile.id_field)
                    .and_then(Value::as_str)
                    .map(EntityId::from)
                    .ok_or_else(|| {
                        ApiError::UnexpectedResponse(format!(
                            "{}: row has no {}",
                            profile.list_method, profile.id_field
                        ))
                    })
            })
            .collect()
    }

    /// Exports the configuration document for exactly one entity.
    ///
    /// The RPC result is itself a JSON-encoded string; the second parse step
    /// failing is [`ApiError::MalformedExport`].
    pub async fn export(
        &self,
        kind: EntityKind,
        id: &EntityId,
        session: &Session,
    ) -> ApiResult<Value> {
        let profile = kind.profile();
        let mut options = Map::new();
        options.insert(profile.export_option.to_string(), json!([id.as_str()]));
        let params = json!({ "options": options, "format": "json" });

        let result = self.call("configuration.export", params, Some(session)).await?;
        let payload = result.as_str().ok_or_else(|| {
            ApiError::UnexpectedResponse("configuration.export: result is not a string".to_string())
        })?;

        serde_json::from_str(payload).map_err(|e| ApiError::MalformedExport(e.to_string()))
    }

    /// Lists all hosts together with their tags.
    pub async fn tagged_hosts(&self, session: &Session) -> ApiResult<Vec<TaggedHost>> {
        let params = json!({
            "output": ["hostid"],
            "selectTags": ["tag", "value"],
        });
        let result = self.call("host.get", params, Some(session)).await?;

        let rows: Vec<TaggedHostRow> = serde_json::from_value(result)
            .map_err(|e| ApiError::UnexpectedResponse(format!("host.get: {e}")))?;

        Ok(rows
            .into_iter()
            .map(|row| TaggedHost {
                id: EntityId::new(row.hostid),
                tags: row.tags.into_iter().map(|t| (t.tag, t.value)).collect(),
            })
            .collect())
    }

    /// Replaces a host's manual inventory fields.
    pub async fn update_host_inventory(
        &self,
        host_id: &EntityId,
        inventory: Value,
        session: &Session,
    ) -> ApiResult<()> {
        let params = json!({
            "hostid": host_id.as_str(),
            "inventory_mode": 1,
            "inventory": inventory,
        });
        self.call("host.update", params, Some(session)).await?;
        Ok(())
    }
}
