//! Port implementations.

pub mod file_token_store;

pub use self::file_token_store::FileTokenStore;
