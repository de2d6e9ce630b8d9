//! Application use cases. Orchestrate domain logic via ports.

pub mod create_user;
pub mod delete_user;
pub mod event_dispatcher;
pub mod get_user;
pub mod update_user;

#[cfg(test)]
pub(crate) mod test_support;

pub use create_user::{CreateUserCommand, CreateUserUseCase};
pub use delete_user::{DeleteUserCommand, DeleteUserUseCase};
pub use event_dispatcher::EventDispatcher;
pub use get_user::{GetUserQuery, GetUserUseCase};
pub use update_user::{UpdateUserCommand, UpdateUserUseCase};
