//! REST implementation of the todo API.

use async_trait::async_trait;
use serde::Serialize;
use std::time::Duration;

use super::{ApiError, Todo, TodoApi};

/// Request payload for create and edit calls.
#[derive(Serialize)]
struct TodoPayload<'a> {
    text: &'a str,
}

/// reqwest-backed client for a REST todo service.
///
/// Endpoints are `{base_url}/todos` for the collection and
/// `{base_url}/todos/{id}` for single items.
pub struct RestApi {
    client: reqwest::Client,
    base_url: String,
}

impl RestApi {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn collection_url(&self) -> String {
        format!("{}/todos", self.base_url)
    }

    fn item_url(&self, id: &str) -> String {
        format!("{}/todos/{}", self.base_url, id)
    }

    /// Turn a non-success response into the matching `ApiError`.
    async fn fail(response: reqwest::Response, what: &str) -> ApiError {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        classify_status(status, what, &body)
    }
}

fn classify_status(status: u16, what: &str, body: &str) -> ApiError {
    match status {
        404 => ApiError::NotFound(what.to_string()),
        400 | 422 => ApiError::Validation(if body.is_empty() {
            what.to_string()
        } else {
            body.to_string()
        }),
        _ => ApiError::Api {
            status,
            body: body.to_string(),
        },
    }
}

fn transport_error(e: reqwest::Error) -> ApiError {
    if e.is_timeout() {
        ApiError::Network("request timed out".to_string())
    } else if e.is_connect() {
        ApiError::Network(format!("connection failed: {}", e))
    } else if e.is_decode() {
        ApiError::InvalidData(e.to_string())
    } else {
        ApiError::Network(e.to_string())
    }
}

#[async_trait]
impl TodoApi for RestApi {
    async fn fetch_todos(&self) -> Result<Vec<Todo>, ApiError> {
        let response = self
            .client
            .get(self.collection_url())
            .send()
            .await
            .map_err(transport_error)?;

        if !response.status().is_success() {
            return Err(Self::fail(response, "todo collection").await);
        }

        response.json::<Vec<Todo>>().await.map_err(transport_error)
    }

    async fn create_todo(&self, text: &str) -> Result<Todo, ApiError> {
        let response = self
            .client
            .post(self.collection_url())
            .json(&TodoPayload { text })
            .send()
            .await
            .map_err(transport_error)?;

        if !response.status().is_success() {
            return Err(Self::fail(response, "new todo").await);
        }

        response.json::<Todo>().await.map_err(transport_error)
    }

    async fn update_todo(&self, id: &str, text: &str) -> Result<(), ApiError> {
        let response = self
            .client
            .put(self.item_url(id))
            .json(&TodoPayload { text })
            .send()
            .await
            .map_err(transport_error)?;

        if !response.status().is_success() {
            return Err(Self::fail(response, id).await);
        }

        Ok(())
    }

    async fn delete_todo(&self, id: &str) -> Result<(), ApiError> {
        let response = self
            .client
            .delete(self.item_url(id))
            .send()
            .await
            .map_err(transport_error)?;

        if !response.status().is_success() {
            return Err(Self::fail(response, id).await);
        }

        Ok(())
    }
}
