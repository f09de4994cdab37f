// SPDX-License-Identifier: MPL-2.0
//! Data transfer types mirroring the backend JSON.
//!
//! Field names follow the wire format exactly, which mixes snake_case
//! (user records) and camelCase (race and leaderboard records); renames are
//! applied per-struct rather than normalized, so captured backend payloads
//! decode as-is.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// An account as returned by the auth endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub total_score: i64,
    #[serde(default)]
    pub accuracy_rate: f64,
}

/// Successful login/register response.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
}

/// Race lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RaceStatus {
    Upcoming,
    Live,
    Completed,
}

/// A race as listed by `GET /api/races`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Race {
    pub id: i64,
    pub name: String,
    pub circuit: String,
    /// Flag emoji for the host country.
    pub country: String,
    pub date: NaiveDate,
    pub laps: u32,
    #[serde(rename = "currentLap", default)]
    pub current_lap: u32,
    pub status: RaceStatus,
}

/// A driver's live standing within a race.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Standing {
    pub position: u32,
    pub driver: String,
    pub team: String,
    /// Gap to the car ahead, or `"LEADER"` for P1.
    pub gap: String,
    pub tire_compound: String,
    pub tire_age: u32,
    pub last_pit_lap: u32,
}

/// A race plus its current leaders, from `GET /api/races/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RaceDetail {
    #[serde(flatten)]
    pub race: Race,
    #[serde(default)]
    pub leaders: Vec<Standing>,
}

/// One row of `GET /api/leaderboard`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub rank: u32,
    pub username: String,
    pub total_points: i64,
    pub accuracy: f64,
    pub predictions_count: u32,
}

/// Strategy call a prediction commits to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PredictionAction {
    PitSoft,
    PitMedium,
    PitHard,
    StayOut,
}

/// Scoring state of a submitted prediction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PredictionStatus {
    Pending,
    Correct,
    Incorrect,
    Close,
}

/// A stored prediction as returned by the predictions endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub id: i64,
    pub driver: String,
    pub action: PredictionAction,
    pub lap: u32,
    pub confidence: u32,
    pub status: PredictionStatus,
    #[serde(default)]
    pub points: i64,
    pub timestamp: NaiveDateTime,
}

/// Request body for `POST /api/predictions`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPrediction {
    pub race_id: i64,
    pub driver: String,
    pub action: PredictionAction,
    pub lap: u32,
    /// Confidence percentage, 0-100.
    pub confidence: u32,
}

/// Response of `POST /api/predictions`.
#[derive(Debug, Clone, Deserialize)]
pub struct PredictionReceipt {
    pub success: bool,
    /// Potential points for this call.
    pub points: i64,
    #[serde(default)]
    pub prediction: Option<Prediction>,
}

/// Failure body shape the backend uses across endpoints.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ErrorBody {
    pub error: String,
}
