// Composition root for the time_clock binary.
//
// Responsibilities
// - Read config from the environment.
// - Instantiate the concrete storage adapter and the store.
// - Drive the store from the line based console.

pub mod config;
pub mod console;
