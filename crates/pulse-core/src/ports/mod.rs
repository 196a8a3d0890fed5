//! Ports - seams the runner depends on.
//!
//! Each trait hides something the runner should not hard-wire, so tests can
//! swap in deterministic implementations.
//!
//! - **Clock**: wall-clock time for round summaries
//! - **TokenStore**: optional persistence of a rotated refresh token

pub mod clock;
pub mod token_store;

pub use self::clock::{Clock, FixedClock, SystemClock};
pub use self::token_store::{NoopTokenStore, TokenStore};
