//! Subgraph Request/Response Types
//!
//! Defines the serialization types for the GraphQL-over-HTTP
//! protocol both indexers speak, plus the error taxonomy for a
//! query round trip. Raw entity types convert into domain types at
//! the adapter boundary; nothing past this module sees indexer
//! field names.

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::artifact::{Artifact, ArtifactKind, Rarity};
use crate::domain::listing::Listing;

/// Everything that can go wrong between query and decoded data.
#[derive(Debug, Error)]
pub enum GraphError {
    /// The request never produced an HTTP response.
    #[error("graph request failed: {0}")]
    Transport(#[source] reqwest::Error),
    /// The endpoint answered with a non-success status.
    #[error("graph endpoint returned {status}: {body}")]
    Status {
        status: StatusCode,
        body: String,
    },
    /// The body was not a valid GraphQL envelope.
    #[error("graph response was not a valid envelope: {0}")]
    Malformed(#[source] serde_json::Error),
    /// The indexer executed the request and reported query errors.
    #[error("graph query rejected: {0}")]
    Query(String),
    /// A well-formed envelope with neither data nor errors.
    #[error("graph response contained no data")]
    Empty,
}

/// Request body: GraphQL queries POST as a JSON-wrapped string.
#[derive(Debug, Clone, Serialize)]
pub struct GraphRequest {
    /// The query document.
    pub query: String,
}

/// Standard GraphQL response envelope.
#[derive(Debug, Clone, Deserialize)]
struct GraphEnvelope<T> {
    /// Query result, absent when execution failed.
    data: Option<T>,
    /// Query errors, absent or empty on success.
    #[serde(default)]
    errors: Vec<GraphQueryError>,
}

/// A single error from the envelope's `errors` array.
#[derive(Debug, Clone, Deserialize)]
struct GraphQueryError {
    /// Human-readable message from the indexer.
    message: String,
}

/// Decode a response body into the typed `data` payload.
///
/// GraphQL reports query failures as a 200 with an `errors` array,
/// so status handling alone is not enough; every body goes through
/// this decode.
pub fn decode_body<T: serde::de::DeserializeOwned>(body: &str) -> Result<T, GraphError> {
    let envelope: GraphEnvelope<T> =
        serde_json::from_str(body).map_err(GraphError::Malformed)?;

    if let Some(error) = envelope.errors.first() {
        return Err(GraphError::Query(error.message.clone()));
    }

    envelope.data.ok_or(GraphError::Empty)
}

/// Artifact entity as served by the game indexer.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawArtifact {
    /// Decimal token ID.
    pub id_dec: String,
    /// Hex game ID.
    pub id: String,
    /// Rarity label, e.g. "LEGENDARY".
    pub rarity: String,
    /// Kind label, e.g. "PLANETARYSHIELD".
    pub artifact_type: String,
    /// Energy cap multiplier (percent, 100 = neutral).
    pub energy_cap_multiplier: i32,
    /// Energy growth multiplier.
    pub energy_growth_multiplier: i32,
    /// Range multiplier.
    pub range_multiplier: i32,
    /// Speed multiplier.
    pub speed_multiplier: i32,
    /// Defense multiplier.
    pub defense_multiplier: i32,
}

impl RawArtifact {
    /// Convert to the domain artifact type.
    pub fn into_domain(self) -> Artifact {
        Artifact {
            token_id: self.id_dec,
            game_id: self.id,
            rarity: Rarity::from_label(&self.rarity),
            kind: ArtifactKind::from_label(&self.artifact_type),
            energy_cap: self.energy_cap_multiplier,
            energy_growth: self.energy_growth_multiplier,
            range: self.range_multiplier,
            speed: self.speed_multiplier,
            defense: self.defense_multiplier,
            price: None,
        }
    }
}

/// Listed token entity as served by the market indexer.
///
/// `price` is only requested for other players' listings; the
/// player's own listings come back as bare token IDs.
#[derive(Debug, Clone, Deserialize)]
pub struct RawListedToken {
    /// Decimal token ID. The market indexer spells this `tokenID`.
    #[serde(rename = "tokenID")]
    pub token_id: String,
    /// Asking price in wei.
    pub price: Option<String>,
}

impl RawListedToken {
    /// Convert to a domain listing, if the price was requested.
    pub fn into_listing(self) -> Option<Listing> {
        self.price.map(|price| Listing {
            token_id: self.token_id,
            price,
        })
    }
}

/// One page of artifacts from the game indexer.
#[derive(Debug, Clone, Deserialize)]
pub struct ArtifactsPage {
    /// The `artifacts` collection for the requested owner.
    pub artifacts: Vec<RawArtifact>,
}

/// One page of listed tokens from the market indexer.
#[derive(Debug, Clone, Deserialize)]
pub struct ListingsPage {
    /// The `listedTokens` collection for the requested filter.
    #[serde(rename = "listedTokens")]
    pub listed_tokens: Vec<RawListedToken>,
}
