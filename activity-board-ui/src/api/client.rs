//! HTTP API Client
//!
//! [`ActivityApi`] over `gloo-net`, plus loading the client configuration
//! from local storage.

use activity_board::{decode_activities, decode_mutation, Activity, ActivityApi, ApiError, ApiResult, BoardConfig, Endpoints};
use async_trait::async_trait;
use gloo_net::http::{Request, Response};

/// Local storage key holding an optional JSON config override
pub const CONFIG_STORAGE_KEY: &str = "activity_board_config";

/// Read the config override from local storage or use the defaults
pub fn load_config() -> BoardConfig {
    let stored = web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(CONFIG_STORAGE_KEY).ok().flatten());

    match stored {
        Some(json) => BoardConfig::from_json(&json).unwrap_or_else(|e| {
            tracing::warn!(error = %e, key = CONFIG_STORAGE_KEY, "Ignoring stored config");
            BoardConfig::default()
        }),
        None => BoardConfig::default(),
    }
}

/// Activities API over `fetch`
pub struct HttpActivityApi {
    endpoints: Endpoints,
}

impl HttpActivityApi {
    pub fn new(config: &BoardConfig) -> Self {
        Self {
            endpoints: Endpoints::new(config),
        }
    }
}

#[async_trait(?Send)]
impl ActivityApi for HttpActivityApi {
    async fn list_activities(&self) -> ApiResult<Vec<Activity>> {
        let response = Request::get(&self.endpoints.activities())
            .send()
            .await
            .map_err(transport)?;

        let body = success_body(response).await?;
        decode_activities(&body)
    }

    async fn sign_up(&self, activity: &str, email: &str) -> ApiResult<()> {
        let response = Request::post(&self.endpoints.signup(activity, email))
            .send()
            .await
            .map_err(transport)?;

        let body = success_body(response).await?;
        decode_mutation(&body)
    }

    async fn remove_participant(&self, activity: &str, email: &str) -> ApiResult<()> {
        let response = Request::delete(&self.endpoints.participant(activity, email))
            .send()
            .await
            .map_err(transport)?;

        let body = success_body(response).await?;
        decode_mutation(&body)
    }
}

fn transport(e: gloo_net::Error) -> ApiError {
    ApiError::Transport(e.to_string())
}

/// Body of a 2xx response; anything else becomes a rejection
async fn success_body(response: Response) -> ApiResult<String> {
    let body = response
        .text()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))?;

    if !response.ok() {
        return Err(ApiError::rejected(response.status(), &body));
    }

    Ok(body)
}
