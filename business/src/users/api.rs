//! Admin users API client.
//!
//! Performs the network IO for the users commands. Callers map results into
//! compute updates; nothing here touches state.

use log::debug;
use reqwest::{Client, RequestBuilder, Response};
use thiserror::Error;

use super::model::{ApiMessage, ListUsersResponse};

pub const DELETED_FALLBACK_MESSAGE: &str = "User deleted";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UsersApiError {
    #[error("{0}")]
    Transport(String),
    /// Non-2xx answer. `message` is the server's own text when it sent one.
    #[error("{message}")]
    Status { status: u16, message: String },
    #[error("Failed to parse {what}: {reason}")]
    Decode { what: &'static str, reason: String },
}

pub type ApiResult<T> = Result<T, UsersApiError>;

fn with_auth(request: RequestBuilder, token: Option<&str>) -> RequestBuilder {
    match token {
        Some(token) => request.bearer_auth(token),
        None => request,
    }
}

async fn status_error(response: Response) -> UsersApiError {
    let status = response.status().as_u16();
    let message = match response.bytes().await {
        Ok(body) => serde_json::from_slice::<ApiMessage>(&body)
            .ok()
            .map(|body| body.message)
            .filter(|message| !message.is_empty()),
        Err(_) => None,
    };

    UsersApiError::Status {
        status,
        message: message.unwrap_or_else(|| format!("API returned status: {status}")),
    }
}

/// GET `{api_url}{list_path}`, where `list_path` is `/admin/users?page=<n>&limit=<m>`.
pub async fn list_users(
    api_url: &str,
    token: Option<&str>,
    list_path: &str,
) -> ApiResult<ListUsersResponse> {
    let url = format!("{api_url}{list_path}");
    debug!("GET {url}");

    let response = with_auth(Client::new().get(&url), token)
        .send()
        .await
        .map_err(|e| UsersApiError::Transport(e.to_string()))?;

    if !response.status().is_success() {
        return Err(status_error(response).await);
    }

    response
        .json::<ListUsersResponse>()
        .await
        .map_err(|e| UsersApiError::Decode {
            what: "ListUsersResponse",
            reason: e.to_string(),
        })
}

/// DELETE `{api_url}/admin/users/{id}`.
///
/// An empty success body is accepted and reported with a generic message.
pub async fn delete_user(api_url: &str, token: Option<&str>, id: &str) -> ApiResult<ApiMessage> {
    let url = format!("{api_url}/admin/users/{id}");
    debug!("DELETE {url}");

    let response = with_auth(Client::new().delete(&url), token)
        .send()
        .await
        .map_err(|e| UsersApiError::Transport(e.to_string()))?;

    if !response.status().is_success() {
        return Err(status_error(response).await);
    }

    let body = response
        .bytes()
        .await
        .map_err(|e| UsersApiError::Transport(e.to_string()))?;

    if body.is_empty() {
        return Ok(ApiMessage {
            message: DELETED_FALLBACK_MESSAGE.to_owned(),
        });
    }

    let mut message: ApiMessage =
        serde_json::from_slice(&body).map_err(|e| UsersApiError::Decode {
            what: "ApiMessage",
            reason: e.to_string(),
        })?;
    if message.message.is_empty() {
        DELETED_FALLBACK_MESSAGE.clone_into(&mut message.message);
    }
    Ok(message)
}
