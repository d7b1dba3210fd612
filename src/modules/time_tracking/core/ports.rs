// Ports define what the time tracking core needs from the outside world, without implementing it.
//
// Responsibilities
// - Load the roster and ledger once at startup.
// - Save a whole collection after every mutation of it.
//
// Boundaries
// - No concrete input or output here. Adapters implement these traits in the adapters layer.

use crate::modules::time_tracking::core::employee::Employee;
use crate::modules::time_tracking::core::time_entry::TimeEntry;
use crate::shared::infrastructure::key_value_store::StorageError;
use async_trait::async_trait;

#[async_trait]
pub trait TimeTrackingRepository: Send + Sync {
    /// Empty when nothing was stored yet.
    async fn load_roster(&self) -> Result<Vec<Employee>, StorageError>;
    /// Empty when nothing was stored yet.
    async fn load_ledger(&self) -> Result<Vec<TimeEntry>, StorageError>;
    async fn save_roster(&self, roster: &[Employee]) -> Result<(), StorageError>;
    async fn save_ledger(&self, ledger: &[TimeEntry]) -> Result<(), StorageError>;
}
