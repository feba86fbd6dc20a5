use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::AppConfig;
use crate::services::ScheduleError;

#[derive(Serialize)]
struct GraphQLRequest<'a, V> {
    query: &'a str,
    variables: V,
}

#[derive(Deserialize)]
struct GraphQLResponse<T> {
    data: Option<T>,
    #[serde(default)]
    errors: Vec<GraphQLErrorMessage>,
}

#[derive(Deserialize)]
struct GraphQLErrorMessage {
    message: String,
}

/// Thin HTTP transport for the on-call GraphQL API.
#[derive(Clone)]
pub struct GraphQLClient {
    http: reqwest::Client,
    endpoint: String,
    auth_token: Option<String>,
}

impl GraphQLClient {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: config.graphql_url.clone(),
            auth_token: config.auth_token.clone(),
        }
    }

    pub async fn execute<V, T>(&self, document: &str, variables: V) -> Result<T, ScheduleError>
    where
        V: Serialize,
        T: DeserializeOwned,
    {
        let mut request = self.http.post(&self.endpoint).json(&GraphQLRequest {
            query: document,
            variables,
        });
        if let Some(token) = &self.auth_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(|source| ScheduleError::Transport {
            endpoint: self.endpoint.clone(),
            source,
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!("GraphQL request to {} returned {}", self.endpoint, status);
            return Err(ScheduleError::HttpStatus {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(|source| ScheduleError::Transport {
            endpoint: self.endpoint.clone(),
            source,
        })?;
        debug!("GraphQL response: {} bytes", body.len());
        parse_response(&body)
    }
}

/// Decodes a GraphQL response body. Any entry in `errors` fails the call,
/// even when partial `data` came back.
pub fn parse_response<T: DeserializeOwned>(body: &[u8]) -> Result<T, ScheduleError> {
    let response: GraphQLResponse<T> = serde_json::from_slice(body)?;
    if !response.errors.is_empty() {
        return Err(ScheduleError::GraphQL {
            messages: response.errors.into_iter().map(|e| e.message).collect(),
        });
    }
    response.data.ok_or_else(|| ScheduleError::MissingData {
        field: "data".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Named {
        name: String,
    }

    #[derive(Debug, Deserialize)]
    struct Data {
        schedule: Option<Named>,
    }

    #[test]
    fn returns_data() {
        let data: Data = parse_response(br#"{"data":{"schedule":{"name":"Primary"}}}"#).unwrap();
        assert_eq!(data.schedule.unwrap().name, "Primary");
    }

    #[test]
    fn errors_take_precedence_over_data() {
        let err = parse_response::<Data>(
            br#"{"data":{"schedule":null},"errors":[{"message":"not allowed","path":["schedule"]}]}"#,
        )
        .unwrap_err();
        match err {
            ScheduleError::GraphQL { messages } => assert_eq!(messages, vec!["not allowed"]),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn missing_data_is_an_error() {
        let err = parse_response::<Data>(br#"{}"#).unwrap_err();
        assert!(matches!(err, ScheduleError::MissingData { .. }));
    }

    #[test]
    fn malformed_body_is_a_decode_error() {
        let err = parse_response::<Data>(b"<html>").unwrap_err();
        assert!(matches!(err, ScheduleError::Decode(_)));
    }
}
