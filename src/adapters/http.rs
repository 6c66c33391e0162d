use crate::utils::error::{Result, SurveyError};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Shared client for the job-board adapters.
pub fn build_client(user_agent: &str, timeout: Duration) -> Result<Client> {
    Ok(Client::builder()
        .user_agent(user_agent.to_string())
        .timeout(timeout)
        .build()?)
}

/// Fails on any non-2xx status, otherwise decodes the body.
/// Transport failures surface as `ApiError`, bad JSON as `SerializationError`.
pub async fn read_json<T: DeserializeOwned>(provider: &str, response: Response) -> Result<T> {
    let status = response.status();
    tracing::debug!("{} response status: {}", provider, status);

    if !status.is_success() {
        return Err(SurveyError::UnexpectedStatus {
            provider: provider.to_string(),
            status,
            url: response.url().to_string(),
        });
    }

    let body = response.bytes().await?;
    Ok(serde_json::from_slice(&body)?)
}
