mod client_user_repo;
mod repo_error;

pub use client_user_repo::*;
pub use repo_error::RepositoryError;
