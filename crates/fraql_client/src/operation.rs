//! The request descriptor handed to transports.

use serde::Serialize;

/// A composed GraphQL request, built fresh for every [`run`] call.
///
/// Serializes to the conventional GraphQL HTTP POST body:
/// `{"operationName": ..., "query": ..., "variables": ...}` with
/// `variables` omitted when absent.
///
/// [`run`]: crate::Client::run
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
    /// Name extracted from the `query`/`mutation` header.
    pub operation_name: String,
    /// The document text with all registered fragments inlined.
    pub query: String,
    /// Caller-supplied variables, passed through unmodified.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variables: Option<serde_json::Value>,
}
