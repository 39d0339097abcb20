//! HTTP service for term-sheet comparison.
//!
//! Accepts two term sheets (as uploads routed through a [`FieldExtractor`],
//! or as pre-extracted field maps), compares them with `tsheet-diff`, and
//! returns the JSON report the dashboard renders.

pub mod auth;
pub mod config;
pub mod error;
pub mod extract;
pub mod handler;
pub mod router;
pub mod server;
pub mod state;

pub use auth::{AllowAllAuth, AuthProvider, Credentials, Identity, Session, StaticTokenAuth};
pub use config::{AuthConfig, CompareConfig, ExtractorKind, ServerConfig, TsheetConfig};
pub use error::{ServerError, ServerResult};
pub use extract::{FieldExtractor, JsonFieldExtractor, UnavailableExtractor, UploadedDocument};
pub use router::{build_router, build_router_with_state};
pub use server::TsheetServer;
pub use state::AppState;
