pub mod client;
pub mod models;
pub mod query;

pub use client::{AccidentSource, FetchFuture, OpenDataClient};
pub use models::parse_report;
pub use query::{AccidentQuery, Region, BUPYEONG_GU, DEFAULT_ENDPOINT};

/// The single failure kind of a statistics fetch. The variants only exist
/// for the debug log; callers treat every one of them as "not ok".
#[derive(Debug, thiserror::Error)]
pub enum TransportFailure {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("service answered with HTTP {0}")]
    Status(u16),

    #[error("response body is not a statistics payload: {0}")]
    Body(#[from] serde_json::Error),
}
