//! Subgraph HTTP Client - Paged GraphQL Reads
//!
//! Speaks plain GraphQL-over-HTTP to the game and market indexers
//! and walks first/skip pagination to completion. Implements the
//! `ArtifactIndex` port; the rest of the panel never sees HTTP or
//! indexer field names.

use std::future::Future;
use std::time::Duration;

use alloy::primitives::Address;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use super::queries;
use super::types::{
    ArtifactsPage, decode_body, GraphError, GraphRequest, ListingsPage, RawArtifact,
    RawListedToken,
};
use crate::config::GraphConfig;
use crate::domain::artifact::TokenId;
use crate::domain::listing::Listing;
use crate::ports::artifact_index::{ArtifactIndex, ArtifactsSnapshot, ListingsSnapshot};

/// HTTP client over the two indexer endpoints.
pub struct GraphClient {
    /// Underlying HTTP client.
    http: Client,
    /// Game indexer endpoint (artifact metadata).
    game_url: String,
    /// Market indexer endpoint (listing state).
    market_url: String,
    /// The market contract, whose escrow holds every listed artifact.
    market_address: Address,
    /// Entities per page when walking collections.
    page_size: usize,
}

impl GraphClient {
    /// Create a client from config.
    ///
    /// # Errors
    /// Returns an error if the HTTP client can't be built.
    pub fn new(config: &GraphConfig, market_address: Address) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            game_url: config.game_url.clone(),
            market_url: config.market_url.clone(),
            market_address,
            page_size: config.page_size,
        })
    }

    /// POST one query document and decode the envelope.
    async fn post_query<T: serde::de::DeserializeOwned>(
        &self,
        url: &str,
        query: String,
    ) -> Result<T, GraphError> {
        let response = self
            .http
            .post(url)
            .json(&GraphRequest { query })
            .send()
            .await
            .map_err(GraphError::Transport)?;

        let status = response.status();
        let body = response.text().await.map_err(GraphError::Transport)?;

        if !status.is_success() {
            return Err(GraphError::Status { status, body });
        }

        decode_body(&body)
    }

    /// Query one page of a collection and unwrap it to entities.
    async fn fetch_page<Page, Entity>(
        &self,
        url: &str,
        query: String,
        into_entities: impl Fn(Page) -> Vec<Entity>,
    ) -> Result<Vec<Entity>, GraphError>
    where
        Page: serde::de::DeserializeOwned,
    {
        let page: Page = self.post_query(url, query).await?;
        Ok(into_entities(page))
    }
}

/// Walk a paged collection to completion.
///
/// Pages until the fetcher returns a short page. A collection that
/// ends exactly at the page boundary costs one extra (empty) round
/// trip; that beats trusting the indexer's silent cap and missing
/// entities. A failure on any page fails the whole walk.
async fn collect_pages<Entity, Fetch, Fut>(
    page_size: usize,
    fetch: Fetch,
) -> Result<Vec<Entity>, GraphError>
where
    Fetch: Fn(usize, usize) -> Fut,
    Fut: Future<Output = Result<Vec<Entity>, GraphError>>,
{
    let mut entities = Vec::new();
    let mut skip = 0;

    loop {
        let batch = fetch(page_size, skip).await?;
        let full_page = batch.len() == page_size;
        entities.extend(batch);

        if !full_page {
            return Ok(entities);
        }
        skip += page_size;
    }
}

#[async_trait]
impl ArtifactIndex for GraphClient {
    async fn fetch_artifacts(&self, player: Address) -> Result<ArtifactsSnapshot> {
        let market = self.market_address;

        let (owned, market_held) = tokio::try_join!(
            collect_pages(self.page_size, |first, skip| self.fetch_page(
                &self.game_url,
                queries::artifacts_by_owner(player, first, skip),
                |page: ArtifactsPage| page.artifacts,
            )),
            collect_pages(self.page_size, |first, skip| self.fetch_page(
                &self.game_url,
                queries::artifacts_by_owner(market, first, skip),
                |page: ArtifactsPage| page.artifacts,
            )),
        )
        .context("Failed to fetch artifacts from game indexer")?;

        debug!(
            owned = owned.len(),
            market_held = market_held.len(),
            "Fetched artifact metadata"
        );

        Ok(ArtifactsSnapshot {
            owned: owned.into_iter().map(RawArtifact::into_domain).collect(),
            market_held: market_held.into_iter().map(RawArtifact::into_domain).collect(),
        })
    }

    async fn fetch_listings(&self, player: Address) -> Result<ListingsSnapshot> {
        let (others, mine) = tokio::try_join!(
            collect_pages(self.page_size, |first, skip| self.fetch_page(
                &self.market_url,
                queries::listings_by_others(player, first, skip),
                |page: ListingsPage| page.listed_tokens,
            )),
            collect_pages(self.page_size, |first, skip| self.fetch_page(
                &self.market_url,
                queries::listings_by_player(player, first, skip),
                |page: ListingsPage| page.listed_tokens,
            )),
        )
        .context("Failed to fetch listings from market indexer")?;

        debug!(
            others = others.len(),
            mine = mine.len(),
            "Fetched listing state"
        );

        let others: Vec<Listing> = others
            .into_iter()
            .filter_map(RawListedToken::into_listing)
            .collect();
        let mine: Vec<TokenId> = mine.into_iter().map(|token| token.token_id).collect();

        Ok(ListingsSnapshot { mine, others })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Serve `total` numbered entities through the first/skip window.
    fn serve(total: usize, first: usize, skip: usize) -> Vec<usize> {
        (skip..total.min(skip + first)).collect()
    }

    #[tokio::test]
    async fn test_collects_across_pages() {
        let calls = AtomicUsize::new(0);

        let collected = collect_pages(100, |first, skip| {
            calls.fetch_add(1, Ordering::SeqCst);
            let batch = serve(250, first, skip);
            async move { Ok::<_, GraphError>(batch) }
        })
        .await
        .unwrap();

        // Two full pages plus the short third one
        assert_eq!(collected, (0..250).collect::<Vec<_>>());
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_short_first_page_stops_after_one_fetch() {
        let calls = AtomicUsize::new(0);

        let collected = collect_pages(100, |first, skip| {
            calls.fetch_add(1, Ordering::SeqCst);
            let batch = serve(7, first, skip);
            async move { Ok::<_, GraphError>(batch) }
        })
        .await
        .unwrap();

        assert_eq!(collected.len(), 7);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_exact_page_boundary_confirms_with_empty_fetch() {
        let calls = AtomicUsize::new(0);

        let collected = collect_pages(100, |first, skip| {
            calls.fetch_add(1, Ordering::SeqCst);
            let batch = serve(200, first, skip);
            async move { Ok::<_, GraphError>(batch) }
        })
        .await
        .unwrap();

        // A collection ending exactly on the boundary takes one
        // extra round trip to observe the empty page
        assert_eq!(collected.len(), 200);
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_mid_walk_failure_fails_the_fetch() {
        let result = collect_pages(100, |first, skip| async move {
            if skip == 0 {
                Ok(serve(100, first, skip))
            } else {
                Err(GraphError::Query("indexer timed out".to_string()))
            }
        })
        .await;

        assert!(matches!(result, Err(GraphError::Query(_))));
    }

    #[tokio::test]
    async fn test_empty_collection_yields_no_entities() {
        let collected = collect_pages(100, |_, _| async { Ok::<Vec<usize>, _>(vec![]) })
            .await
            .unwrap();

        assert!(collected.is_empty());
    }
}
