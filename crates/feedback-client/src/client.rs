use reqwest::{Client, RequestBuilder, StatusCode};
use tracing::{debug, warn};

use feedback_types::api::{self, CreateFeedbackRequest, ErrorResponse, Method, Route};
use feedback_types::messages;
use feedback_types::models::{Feedback, sort_newest_first};
use feedback_types::validation::validate;

use crate::error::ClientError;

/// HTTP access to the feedback API.
///
/// Cookies are kept across requests so session credentials are always sent.
#[derive(Clone)]
pub struct FeedbackClient {
    http: Client,
    base_url: String,
}

impl FeedbackClient {
    pub fn new(base_url: impl Into<String>) -> reqwest::Result<Self> {
        let http = Client::builder().cookie_store(true).build()?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn request(&self, route: Route) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, route.path);
        match route.method {
            Method::Get => self.http.get(url),
            Method::Post => self.http.post(url),
        }
    }

    /// Fetch every entry, newest first.
    pub async fn list(&self) -> Result<Vec<Feedback>, ClientError> {
        let res = self
            .request(api::LIST)
            .send()
            .await
            .map_err(ClientError::transport(messages::LIST_FAILED))?;

        if !res.status().is_success() {
            warn!("List request failed with {}", res.status());
            return Err(ClientError::Failed(messages::LIST_FAILED));
        }

        let mut feedbacks: Vec<Feedback> = res
            .json()
            .await
            .map_err(ClientError::transport(messages::LIST_FAILED))?;

        // The server already orders by created_at; this only guards the display.
        sort_newest_first(&mut feedbacks);
        debug!("Fetched {} feedbacks", feedbacks.len());
        Ok(feedbacks)
    }

    /// Validate locally, then submit. No request is made for invalid input.
    pub async fn create(&self, req: &CreateFeedbackRequest) -> Result<Feedback, ClientError> {
        let input = validate(req)?;
        let body = CreateFeedbackRequest::new(input.name(), input.content());

        let res = self
            .request(api::CREATE)
            .json(&body)
            .send()
            .await
            .map_err(ClientError::transport(messages::CREATE_FAILED))?;

        match res.status() {
            status if status.is_success() => res
                .json()
                .await
                .map_err(ClientError::transport(messages::CREATE_FAILED)),
            StatusCode::BAD_REQUEST => {
                let message = res
                    .json::<ErrorResponse>()
                    .await
                    .ok()
                    .map(|e| e.message)
                    .filter(|m| !m.is_empty())
                    .unwrap_or_else(|| messages::CHECK_INPUT.to_string());
                Err(ClientError::Rejected(message))
            }
            status => {
                warn!("Create request failed with {}", status);
                Err(ClientError::Failed(messages::CREATE_FAILED))
            }
        }
    }
}
