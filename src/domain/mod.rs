mod client_user;
mod update_status;
mod validation;

pub use client_user::*;
pub use update_status::*;
pub use validation::*;
