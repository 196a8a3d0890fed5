//! Domain model (credentials, catalog, outcomes, summaries, errors).

pub mod catalog;
pub mod credentials;
pub mod errors;
pub mod outcome;
pub mod secret;
pub mod summary;

pub use catalog::{Endpoint, EndpointCatalog, GRAPH_ENDPOINTS};
pub use credentials::Credentials;
pub use errors::{AuthError, ConfigError, TokenStoreError};
pub use outcome::{CallKind, CallRecord, CallResult};
pub use secret::{AccessToken, SecretString};
pub use summary::{RoundReport, RoundSummary, RunReport};
