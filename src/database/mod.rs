/// In-memory implementation of the repository
pub mod memory;
/// Project and daily log records plus their creation requests
pub mod models;
/// Storage contract the handlers depend on
pub mod repository;
