// Application layer - validated input, queries and orchestration over the store.

pub mod entry;
pub mod error;
pub mod query;
pub mod reporting;
pub mod service;

pub use error::*;
pub use query::QueryEngine;
pub use reporting::*;
pub use service::LedgerService;
