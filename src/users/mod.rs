//! The user record and the client that fetches it. Endpoint paths stay here so the
//! component and the CLI never build URLs themselves.

pub mod client;
pub mod types;

pub use client::{UserSource, UsersClient, USERS_PATH};
pub use types::User;
