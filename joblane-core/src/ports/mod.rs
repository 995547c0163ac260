//! Repository ports. Storage backends implement these; the server depends on
//! the traits only.

mod jobs;
mod users;

pub use jobs::{JobVisibility, JobsRepository};
pub use users::UsersRepository;
