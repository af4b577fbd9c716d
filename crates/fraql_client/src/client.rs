//! The fraql client.

use crate::operation::Operation;
use crate::transport::Transport;
use fraql_compose::{expand, operation_name, ComposeResult, FragmentRegistry};

/// A GraphQL client that composes requests and hands them to a transport.
///
/// Each client owns its own [`FragmentRegistry`]; clients created separately
/// share nothing. The client itself is synchronous and lock-free: wrap it in
/// your own synchronization if fragments are registered from multiple
/// threads.
///
/// ```
/// use fraql_client::{Client, Operation};
///
/// let client = Client::new(|operation: Operation, _extra: ()| operation);
/// let sent = client.query("query me { me { name } }", None)?;
/// assert_eq!(sent.operation_name, "me");
/// # Ok::<(), fraql_client::ComposeError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Client<S> {
    send: S,
    fragments: FragmentRegistry,
}

impl<S> Client<S> {
    /// Creates a client around a transport, with an empty fragment registry.
    pub fn new(send: S) -> Self {
        Self {
            send,
            fragments: FragmentRegistry::new(),
        }
    }

    /// Registers a fragment definition for use in later [`run`] calls.
    ///
    /// # Errors
    ///
    /// Returns [`ComposeError::InvalidFragment`](fraql_compose::ComposeError::InvalidFragment)
    /// when `source` carries no `fragment <Name>` header; the registry is
    /// left unchanged.
    ///
    /// [`run`]: Client::run
    pub fn register_fragment(&mut self, source: &str) -> ComposeResult<()> {
        self.fragments.register(source)
    }

    /// Read-only access to the registered fragments.
    #[must_use]
    pub fn fragments(&self) -> &FragmentRegistry {
        &self.fragments
    }

    /// Composes and dispatches an operation.
    ///
    /// Extracts the operation name, inlines every registered fragment the
    /// document references (directly or transitively), then invokes the
    /// transport with the composed [`Operation`] and `extra`. The
    /// transport's output is returned verbatim; the client never looks at
    /// it.
    ///
    /// # Errors
    ///
    /// Returns [`ComposeError::InvalidQuery`](fraql_compose::ComposeError::InvalidQuery)
    /// when `query` has no named operation. The transport is not invoked in
    /// that case.
    pub fn run<Extra>(
        &self,
        query: &str,
        variables: Option<serde_json::Value>,
        extra: Extra,
    ) -> ComposeResult<S::Output>
    where
        S: Transport<Extra>,
    {
        let name = operation_name(query)?;
        let expanded = expand(query, &self.fragments);
        tracing::debug!(operation = name, "dispatching operation");

        let operation = Operation {
            operation_name: name.to_string(),
            query: expanded,
            variables,
        };
        Ok(self.send.send(operation, extra))
    }

    /// [`run`](Client::run) for transports that take no extra payload.
    pub fn query(
        &self,
        query: &str,
        variables: Option<serde_json::Value>,
    ) -> ComposeResult<S::Output>
    where
        S: Transport<()>,
    {
        self.run(query, variables, ())
    }
}
