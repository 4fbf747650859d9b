mod domain;
mod repositories;

pub use domain::*;
pub use repositories::*;
