//! Persistence adapters. Implement UserRepository.

pub mod memory_repo;
pub mod sqlite_repo;

pub use memory_repo::InMemoryUserRepo;
pub use sqlite_repo::SqliteUserRepo;
