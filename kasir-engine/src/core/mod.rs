//! Core - configuration, session state and command dispatch
//!
//! - [`Config`] - environment-driven settings
//! - [`Session`] - owner of catalog, cart and shift ledger
//! - [`SessionCommand`] / [`CommandResponse`] - the boundary front ends talk to

pub mod command;
pub mod config;
pub mod state;

pub use command::{CommandResponse, Notification, NotificationLevel, SessionCommand};
pub use config::Config;
pub use state::Session;
