//! # userlist
//!
//! Fetches the user collection from `GET /api/users` and renders it, reflecting
//! request progress while the call is in flight.
//!
//! ## Request lifecycle
//!
//! Every mount of [`UserList`] issues exactly one request and moves through a
//! single [`FetchState`]:
//!
//! 1. **Loading:** published immediately on mount, before the request resolves.
//! 2. **Success:** the decoded users replace the state atomically (possibly empty).
//! 3. **Failed:** a human-readable message derived from the [`FetchError`].
//!
//! A settled state never returns to `Loading`; a fresh mount is the only way to
//! fetch again. Dropping (or unmounting) the [`Mounted`] handle aborts the request,
//! so a late response can never update a view that is gone.
//!
//! Rendering reads the current state and never triggers network work, which keeps
//! the "one fetch per mount" guarantee independent of how often views are drawn.

pub mod build_info;
pub mod cli;
pub mod component;
pub mod config;
pub mod errors;
pub mod render;
pub mod state;
pub mod users;

pub use component::{Mounted, UserList};
pub use config::AppConfig;
pub use errors::FetchError;
pub use state::FetchState;
pub use users::{User, UserSource, UsersClient};
