//! Shared application state: the use cases handlers depend on.

use crate::ports::UserRepository;
use crate::usecases::{
    CreateUserUseCase, DeleteUserUseCase, EventDispatcher, GetUserUseCase, UpdateUserUseCase,
};
use std::sync::Arc;

/// Dependency container handed to every request handler.
#[derive(Clone)]
pub struct AppState {
    pub create_user: Arc<CreateUserUseCase>,
    pub get_user: Arc<GetUserUseCase>,
    pub update_user: Arc<UpdateUserUseCase>,
    pub delete_user: Arc<DeleteUserUseCase>,
}

impl AppState {
    /// Build every use case over one repository and one dispatcher.
    pub fn new(repo: Arc<dyn UserRepository>, dispatcher: Arc<EventDispatcher>) -> Self {
        Self {
            create_user: Arc::new(CreateUserUseCase::new(
                Arc::clone(&repo),
                Arc::clone(&dispatcher),
            )),
            get_user: Arc::new(GetUserUseCase::new(Arc::clone(&repo))),
            update_user: Arc::new(UpdateUserUseCase::new(
                Arc::clone(&repo),
                Arc::clone(&dispatcher),
            )),
            delete_user: Arc::new(DeleteUserUseCase::new(repo, dispatcher)),
        }
    }
}
