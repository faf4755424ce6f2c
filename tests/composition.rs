//! Composition Tests - State Layer Against Mock Ports
//!
//! Tests the contract registry and the view composition over mocked
//! ports. Uses mockall for trait mocking and tokio::test for async
//! tests.

use std::sync::Arc;

use mockall::mock;
use tokio_test::{assert_err, assert_ok};

use alloy::json_abi::JsonAbi;
use alloy::primitives::Address;

use artifact_market::domain::artifact::{Artifact, ArtifactKind, Rarity};
use artifact_market::domain::listing::Listing;
use artifact_market::ports::artifact_index::{ArtifactIndex, ArtifactsSnapshot, ListingsSnapshot};
use artifact_market::ports::game_host::ContractHandle;
use artifact_market::state::contracts::{ContractKey, ContractRegistry, ContractSpec};
use artifact_market::state::inventory::compose_inventory;
use artifact_market::state::market::compose_market;
use artifact_market::state::snapshot::Snapshot;

// ---- Mock Definitions ----

mock! {
    pub Host {}

    #[async_trait::async_trait]
    impl artifact_market::ports::game_host::GameHost for Host {
        fn player_address(&self) -> alloy::primitives::Address;

        async fn native_balance(&self) -> anyhow::Result<f64>;

        fn balance_updates(&self) -> tokio::sync::watch::Receiver<String>;

        async fn load_contract(
            &self,
            address: alloy::primitives::Address,
            abi: alloy::json_abi::JsonAbi,
        ) -> anyhow::Result<artifact_market::ports::game_host::ContractHandle>;
    }
}

mock! {
    pub Index {}

    #[async_trait::async_trait]
    impl artifact_market::ports::artifact_index::ArtifactIndex for Index {
        async fn fetch_artifacts(
            &self,
            player: alloy::primitives::Address,
        ) -> anyhow::Result<artifact_market::ports::artifact_index::ArtifactsSnapshot>;

        async fn fetch_listings(
            &self,
            player: alloy::primitives::Address,
        ) -> anyhow::Result<artifact_market::ports::artifact_index::ListingsSnapshot>;
    }
}

mock! {
    pub Abis {}

    #[async_trait::async_trait]
    impl artifact_market::ports::abi_source::AbiSource for Abis {
        async fn fetch_abi(&self, url: &str) -> anyhow::Result<alloy::json_abi::JsonAbi>;
    }
}

// ---- Helpers ----

fn spec(address: Address, url: &str) -> ContractSpec {
    ContractSpec {
        address,
        abi_url: url.to_string(),
    }
}

fn registry(host: MockHost, abis: MockAbis) -> ContractRegistry {
    ContractRegistry::new(
        Arc::new(host),
        Arc::new(abis),
        spec(Address::repeat_byte(0x11), "https://abis.test/approval.json"),
        spec(Address::repeat_byte(0x22), "https://abis.test/market.json"),
    )
}

fn artifact(token_id: &str) -> Artifact {
    Artifact {
        token_id: token_id.to_string(),
        game_id: format!("0x{token_id}"),
        rarity: Rarity::Rare,
        kind: ArtifactKind::Spaceship,
        energy_cap: 110,
        energy_growth: 100,
        range: 90,
        speed: 100,
        defense: 100,
        price: None,
    }
}

fn listing(token_id: &str, price: &str) -> Listing {
    Listing {
        token_id: token_id.to_string(),
        price: price.to_string(),
    }
}

// ---- Contract Registry ----

#[tokio::test]
async fn contract_loads_exactly_once() {
    let mut host = MockHost::new();
    let mut abis = MockAbis::new();

    abis.expect_fetch_abi()
        .times(1)
        .returning(|_| Ok(JsonAbi::new()));
    host.expect_load_contract()
        .times(1)
        .returning(|address, abi| Ok(ContractHandle::new(address, abi)));

    let registry = registry(host, abis);

    let first = registry.get_or_load(ContractKey::Market).await.unwrap();
    let second = registry.get_or_load(ContractKey::Market).await.unwrap();

    // Same cached handle, no second load
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(first.address(), Address::repeat_byte(0x22));
}

#[tokio::test]
async fn concurrent_first_loads_coalesce() {
    let mut host = MockHost::new();
    let mut abis = MockAbis::new();

    abis.expect_fetch_abi()
        .times(1)
        .returning(|_| Ok(JsonAbi::new()));
    host.expect_load_contract()
        .times(1)
        .returning(|address, abi| Ok(ContractHandle::new(address, abi)));

    let registry = registry(host, abis);

    let (first, second) = tokio::join!(
        registry.get_or_load(ContractKey::Artifacts),
        registry.get_or_load(ContractKey::Artifacts),
    );

    assert!(Arc::ptr_eq(&first.unwrap(), &second.unwrap()));
}

#[tokio::test]
async fn keys_load_independently() {
    let mut host = MockHost::new();
    let mut abis = MockAbis::new();

    abis.expect_fetch_abi()
        .times(2)
        .returning(|_| Ok(JsonAbi::new()));
    host.expect_load_contract()
        .times(2)
        .returning(|address, abi| Ok(ContractHandle::new(address, abi)));

    let registry = registry(host, abis);

    let artifacts = registry.get_or_load(ContractKey::Artifacts).await.unwrap();
    let market = registry.get_or_load(ContractKey::Market).await.unwrap();

    assert_ne!(artifacts.address(), market.address());
}

#[tokio::test]
async fn failed_load_leaves_slot_retryable() {
    let mut host = MockHost::new();
    let mut abis = MockAbis::new();

    abis.expect_fetch_abi()
        .times(1)
        .returning(|_| Err(anyhow::anyhow!("gist unreachable")));
    abis.expect_fetch_abi()
        .times(1)
        .returning(|_| Ok(JsonAbi::new()));
    host.expect_load_contract()
        .times(1)
        .returning(|address, abi| Ok(ContractHandle::new(address, abi)));

    let registry = registry(host, abis);

    assert_err!(registry.get_or_load(ContractKey::Market).await);
    assert_ok!(registry.get_or_load(ContractKey::Market).await);
}

// ---- Composed State ----

#[tokio::test]
async fn contract_failure_short_circuits_loading() {
    let mut host = MockHost::new();
    let mut abis = MockAbis::new();

    abis.expect_fetch_abi()
        .times(1)
        .returning(|_| Err(anyhow::anyhow!("gist unreachable")));
    host.expect_load_contract().never();

    let mut index = MockIndex::new();
    index.expect_fetch_artifacts().returning(|_| {
        Ok(ArtifactsSnapshot {
            owned: vec![artifact("1"), artifact("2")],
            market_held: vec![],
        })
    });

    let registry = registry(host, abis);
    let player = Address::repeat_byte(0xaa);

    let contract = match registry.get_or_load(ContractKey::Artifacts).await {
        Ok(handle) => Snapshot::ready(handle),
        Err(error) => Snapshot::failed(Arc::new(error)),
    };
    let artifacts = match index.fetch_artifacts(player).await {
        Ok(snapshot) => Snapshot::ready(snapshot),
        Err(error) => Snapshot::failed(Arc::new(error)),
    };

    let view = compose_inventory(contract, artifacts);

    // The graph query succeeded, but the view still fails as a whole
    assert!(view.error.is_some());
    assert!(!view.loading);
    assert!(view.data.is_none());
    assert!(view.error_text().unwrap().contains("artifacts-contract"));
}

#[tokio::test]
async fn market_and_inventory_partition_scenario() {
    // Player owns 2 artifacts; the market escrow holds 5, of which
    // 2 are the player's own listings.
    let mut host = MockHost::new();
    let mut abis = MockAbis::new();

    abis.expect_fetch_abi()
        .times(2)
        .returning(|_| Ok(JsonAbi::new()));
    host.expect_load_contract()
        .times(2)
        .returning(|address, abi| Ok(ContractHandle::new(address, abi)));

    let mut index = MockIndex::new();
    index.expect_fetch_artifacts().returning(|_| {
        Ok(ArtifactsSnapshot {
            owned: vec![artifact("1"), artifact("2")],
            market_held: vec![
                artifact("10"),
                artifact("11"),
                artifact("12"),
                artifact("13"),
                artifact("14"),
            ],
        })
    });
    index.expect_fetch_listings().returning(|_| {
        Ok(ListingsSnapshot {
            mine: vec!["11".to_string(), "13".to_string()],
            others: vec![
                listing("10", "1000000000000000000"),
                listing("12", "2000000000000000000"),
                listing("14", "500000000000000000"),
            ],
        })
    });

    let registry = registry(host, abis);
    let player = Address::repeat_byte(0xaa);

    let market_contract = registry.get_or_load(ContractKey::Market).await.unwrap();
    let artifacts_contract = registry.get_or_load(ContractKey::Artifacts).await.unwrap();
    let artifacts = index.fetch_artifacts(player).await.unwrap();
    let listings = index.fetch_listings(player).await.unwrap();

    let market = compose_market(
        Snapshot::ready(market_contract),
        Snapshot::ready(listings),
        Snapshot::ready(artifacts.clone()),
    );
    let inventory = compose_inventory(
        Snapshot::ready(artifacts_contract),
        Snapshot::ready(artifacts),
    );

    let market = market.data.unwrap();
    assert_eq!(market.for_sale.len(), 3);
    assert_eq!(market.listed.len(), 2);

    // Prices joined by token ID
    let for_sale_10 = market
        .for_sale
        .iter()
        .find(|artifact| artifact.token_id == "10")
        .unwrap();
    assert_eq!(for_sale_10.price.as_deref(), Some("1000000000000000000"));

    let inventory = inventory.data.unwrap();
    assert_eq!(inventory.owned.len(), 2);
}

#[tokio::test]
async fn indexer_failure_fails_the_view() {
    let mut index = MockIndex::new();
    index
        .expect_fetch_listings()
        .returning(|_| Err(anyhow::anyhow!("indexer returned 502")));

    let player = Address::repeat_byte(0xaa);
    let handle = Arc::new(ContractHandle::new(Address::ZERO, JsonAbi::new()));

    let listings = match index.fetch_listings(player).await {
        Ok(snapshot) => Snapshot::ready(snapshot),
        Err(error) => Snapshot::failed(Arc::new(error)),
    };

    let view = compose_market(
        Snapshot::ready(handle),
        listings,
        Snapshot::ready(ArtifactsSnapshot::default()),
    );

    assert!(view.error_text().unwrap().contains("502"));
    assert!(view.data.is_none());
}
