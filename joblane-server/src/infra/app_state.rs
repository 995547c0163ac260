use std::fmt;
use std::sync::Arc;

use joblane_core::{JobsRepository, UsersRepository};

use crate::infra::config::Config;

/// Shared per-request state: repository handles plus config.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UsersRepository>,
    pub jobs: Arc<dyn JobsRepository>,
    pub config: Arc<Config>,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState").finish_non_exhaustive()
    }
}

impl AppState {
    pub fn new(
        users: Arc<dyn UsersRepository>,
        jobs: Arc<dyn JobsRepository>,
        config: Config,
    ) -> Self {
        Self {
            users,
            jobs,
            config: Arc::new(config),
        }
    }
}
