#![allow(dead_code)]

use chrono::NaiveDate;
use std::path::Path;
use std::sync::Arc;
use time_clock::modules::time_tracking::adapters::outbound::key_value_repository::KeyValueRepository;
use time_clock::modules::time_tracking::application::store::TimeTrackingStore;
use time_clock::modules::time_tracking::core::seed::SeedAccounts;
use time_clock::shared::core::primitives::FixedClock;
use time_clock::shared::infrastructure::key_value_store::KeyValueStore;
use time_clock::shared::infrastructure::key_value_store::file_system::FileSystemKeyValueStore;
use time_clock::shared::infrastructure::key_value_store::in_memory::InMemoryKeyValueStore;

pub type Store<TStore> = TimeTrackingStore<KeyValueRepository<TStore>, FixedClock>;

pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 17).unwrap()
}

pub async fn store_over<TStore: KeyValueStore + 'static>(
    storage: Arc<TStore>,
    clock: Arc<FixedClock>,
    seed_accounts: SeedAccounts,
) -> Store<TStore> {
    TimeTrackingStore::load(Arc::new(KeyValueRepository::new(storage)), clock, seed_accounts)
        .await
        .expect("store load failed")
}

pub async fn in_memory_store() -> (Store<InMemoryKeyValueStore>, Arc<FixedClock>) {
    let clock = Arc::new(FixedClock::at(today(), 8, 0));
    let store = store_over(
        Arc::new(InMemoryKeyValueStore::new()),
        clock.clone(),
        SeedAccounts::default(),
    )
    .await;
    (store, clock)
}

pub async fn file_system_store(dir: &Path, clock: Arc<FixedClock>) -> Store<FileSystemKeyValueStore> {
    store_over(
        Arc::new(FileSystemKeyValueStore::new(dir)),
        clock,
        SeedAccounts::default(),
    )
    .await
}
