//! The error taxonomy for price lookups.

use thiserror::Error;

/// An error that can occur while fetching a quote.
///
/// Every variant renders as the short message shown to the user; callers
/// are not expected to branch on the variant beyond that.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FetchError {
    /// Transport failure, or the server answered with a non-success status.
    #[error("Failed to fetch price: {0}")]
    Network(String),
    /// The response parsed, but carried no usable rate for the request.
    #[error("No data available")]
    NoData,
    /// The response body was not the JSON shape the API documents.
    #[error("Malformed price response: {0}")]
    Parse(String),
}
