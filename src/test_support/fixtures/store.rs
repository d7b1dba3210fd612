// Shared store fixture: a store over in memory storage and a fixed clock.

use crate::modules::time_tracking::adapters::outbound::key_value_repository::KeyValueRepository;
use crate::modules::time_tracking::application::store::TimeTrackingStore;
use crate::modules::time_tracking::core::seed::SeedAccounts;
use crate::shared::core::primitives::FixedClock;
use crate::shared::infrastructure::key_value_store::in_memory::InMemoryKeyValueStore;
use chrono::NaiveDate;
use std::sync::Arc;

pub type TestStore = TimeTrackingStore<KeyValueRepository<InMemoryKeyValueStore>, FixedClock>;

pub struct StoreFixture {
    pub store: TestStore,
    pub storage: Arc<InMemoryKeyValueStore>,
    pub clock: Arc<FixedClock>,
}

pub fn fixture_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 2).unwrap()
}

pub async fn make_store() -> StoreFixture {
    make_store_with(Arc::new(InMemoryKeyValueStore::new()), SeedAccounts::default()).await
}

pub async fn make_store_with(
    storage: Arc<InMemoryKeyValueStore>,
    seed_accounts: SeedAccounts,
) -> StoreFixture {
    let clock = Arc::new(FixedClock::at(fixture_date(), 9, 0));
    let repository = Arc::new(KeyValueRepository::new(storage.clone()));
    let store = TimeTrackingStore::load(repository, clock.clone(), seed_accounts)
        .await
        .expect("store should load from in memory storage");
    StoreFixture {
        store,
        storage,
        clock,
    }
}
