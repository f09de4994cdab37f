// SPDX-License-Identifier: MPL-2.0
//! Thin typed wrappers around the backend HTTP API.
//!
//! The client is stateless: it holds a base URL and a connection pool and
//! maps each endpoint to a typed request/response pair. Authenticated
//! endpoints take the bearer token explicitly; session bookkeeping lives in
//! [`crate::auth`].
//!
//! Error mapping is uniform (see [`ApiError`]), with one deliberate
//! exception: the race-detail endpoint treats 404 as "no such race" and
//! returns `None` instead of failing, since callers routinely probe ids.

use super::types::{
    AuthResponse, ErrorBody, LeaderboardEntry, NewPrediction, Prediction, PredictionReceipt, Race,
    RaceDetail, User,
};
use crate::error::{ApiError, Result};
use serde::de::DeserializeOwned;
use serde_json::json;

/// Client for the PitLane backend API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    /// Creates a client against the given base URL (scheme + host + port,
    /// without the `/api` prefix).
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            http: reqwest::Client::new(),
        }
    }

    /// Returns the configured base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api{}", self.base_url, path)
    }

    /// Decodes a success body, or maps the failure status to an [`ApiError`]
    /// using the backend's `{"error"}` body when present.
    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        let status = response.status();
        if status.is_success() {
            return Ok(response.json().await?);
        }

        let message = response
            .json::<ErrorBody>()
            .await
            .ok()
            .map(|body| body.error);
        Err(ApiError::from_status(status.as_u16(), message).into())
    }

    /// `GET /api/races` - all races, ordered by date.
    pub async fn races(&self) -> Result<Vec<Race>> {
        let response = self.http.get(self.url("/races")).send().await?;
        Self::decode(response).await
    }

    /// `GET /api/races/{id}` - a single race with its current leaders.
    ///
    /// Returns `Ok(None)` when the race does not exist.
    pub async fn race(&self, id: i64) -> Result<Option<RaceDetail>> {
        let response = self
            .http
            .get(self.url(&format!("/races/{}", id)))
            .send()
            .await?;
        if response.status().as_u16() == 404 {
            return Ok(None);
        }
        Self::decode(response).await.map(Some)
    }

    /// `GET /api/leaderboard` - top users by total score.
    pub async fn leaderboard(&self) -> Result<Vec<LeaderboardEntry>> {
        let response = self.http.get(self.url("/leaderboard")).send().await?;
        Self::decode(response).await
    }

    /// `GET /api/predictions/race/{id}` - all predictions for a race.
    pub async fn race_predictions(&self, race_id: i64) -> Result<Vec<Prediction>> {
        let response = self
            .http
            .get(self.url(&format!("/predictions/race/{}", race_id)))
            .send()
            .await?;
        Self::decode(response).await
    }

    /// `GET /api/predictions/mine` - the authenticated user's recent
    /// predictions.
    pub async fn my_predictions(&self, token: &str) -> Result<Vec<Prediction>> {
        let response = self
            .http
            .get(self.url("/predictions/mine"))
            .bearer_auth(token)
            .send()
            .await?;
        Self::decode(response).await
    }

    /// `POST /api/predictions` - submit a prediction.
    pub async fn submit_prediction(
        &self,
        token: &str,
        prediction: &NewPrediction,
    ) -> Result<PredictionReceipt> {
        let response = self
            .http
            .post(self.url("/predictions"))
            .bearer_auth(token)
            .json(prediction)
            .send()
            .await?;
        Self::decode(response).await
    }

    /// `POST /api/auth/register` - create an account, returning a session.
    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<AuthResponse> {
        let response = self
            .http
            .post(self.url("/auth/register"))
            .json(&json!({
                "username": username,
                "email": email,
                "password": password,
            }))
            .send()
            .await?;
        Self::decode(response).await
    }

    /// `POST /api/auth/login` - exchange credentials for a session.
    ///
    /// The backend accepts either a username or an email as `identifier`.
    pub async fn login(&self, identifier: &str, password: &str) -> Result<AuthResponse> {
        let response = self
            .http
            .post(self.url("/auth/login"))
            .json(&json!({
                "identifier": identifier,
                "password": password,
            }))
            .send()
            .await?;
        Self::decode(response).await
    }

    /// `GET /api/auth/me` - the user behind a token.
    pub async fn me(&self, token: &str) -> Result<User> {
        let response = self
            .http
            .get(self.url("/auth/me"))
            .bearer_auth(token)
            .send()
            .await?;
        Self::decode(response).await
    }
}
