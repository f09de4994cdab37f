// SPDX-License-Identifier: MPL-2.0
//! Typed access to the backend HTTP API.
//!
//! - [`types`] - serde types mirroring the wire JSON
//! - [`client`] - the [`ApiClient`] request wrappers

mod client;
mod types;

pub use client::ApiClient;
pub use types::{
    AuthResponse, LeaderboardEntry, NewPrediction, Prediction, PredictionAction,
    PredictionReceipt, PredictionStatus, Race, RaceDetail, RaceStatus, Standing, User,
};
