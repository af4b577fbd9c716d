//! Fragment-aware GraphQL client core.
//!
//! This crate composes GraphQL requests and delegates sending them. A
//! [`Client`] pairs a caller-supplied [`Transport`] with a per-client
//! [`FragmentRegistry`]: `run` extracts the operation name from the raw
//! query text, inlines every registered fragment the document references,
//! and hands the composed [`Operation`] to the transport. What the transport
//! returns is passed back verbatim — a value, a future, anything.
//!
//! There is no network code here. Retries, batching, caching and headers
//! belong to the transport.
//!
//! ```
//! use fraql_client::{Client, Operation};
//!
//! // A transport is any `Fn(Operation, Extra) -> T`; this one just echoes.
//! let mut client = Client::new(|operation: Operation, _extra: ()| operation);
//! client.register_fragment("fragment person on Person { name, age }")?;
//!
//! let sent = client.query("query me { me { ...person } }", None)?;
//! assert_eq!(sent.operation_name, "me");
//! assert_eq!(
//!     sent.query,
//!     "query me { me { ...person } }\nfragment person on Person { name, age }"
//! );
//! # Ok::<(), fraql_client::ComposeError>(())
//! ```

pub mod client;
pub mod operation;
pub mod transport;

pub use client::Client;
pub use operation::Operation;
pub use transport::Transport;

// Re-exports from the text layer for convenience
pub use fraql_compose::{ComposeError, ComposeResult, FragmentRegistry};
