//! Text layer for fraql.
//!
//! This crate provides the pure, transport-free pieces of request
//! composition:
//! - `extract`: operation/fragment name extraction and spread scanning
//! - `registry`: the per-client fragment store
//! - `expand`: fixed-point inlining of referenced fragments
//!
//! Nothing here parses GraphQL. The composer works over raw text with a
//! minimal pattern grammar and leaves validation to the server.
//!
//! ```
//! use fraql_compose::{expand, operation_name, FragmentRegistry};
//!
//! let mut registry = FragmentRegistry::new();
//! registry.register("fragment person on Person { name, age }")?;
//!
//! let query = "query me { me { ...person } }";
//! assert_eq!(operation_name(query)?, "me");
//! assert_eq!(
//!     expand(query, &registry),
//!     "query me { me { ...person } }\nfragment person on Person { name, age }"
//! );
//! # Ok::<(), fraql_compose::ComposeError>(())
//! ```

pub mod error;
pub mod expand;
pub mod extract;
pub mod registry;

pub use error::{ComposeError, ComposeResult};
pub use expand::expand;
pub use extract::{fragment_name, operation_name, spread_names};
pub use registry::FragmentRegistry;
