//! Accounts, sessions and the login/registration routes.

pub mod db;
pub mod handlers;
pub mod middleware;
pub mod password;

pub use handlers::*;
pub use middleware::{AuthContext, OptionalAuth};
