//! The caller-supplied send collaborator.

use crate::operation::Operation;

/// Sends a composed [`Operation`] somewhere and produces a result.
///
/// The client never inspects `Output`: it may be a plain value, a boxed
/// future the caller awaits, or `()` for a fire-and-forget transport.
/// Retries, batching, caching and header construction all live behind this
/// trait, not in the client.
///
/// `Extra` is an opaque per-call payload (headers, URLs, callbacks) threaded
/// through [`Client::run`](crate::Client::run) untouched; transports that
/// need nothing use `()`.
///
/// Any `Fn(Operation, Extra) -> T` closure is a transport:
///
/// ```
/// use fraql_client::{Operation, Transport};
///
/// let echo = |operation: Operation, _extra: ()| operation.operation_name;
/// let operation = Operation {
///     operation_name: "me".to_string(),
///     query: "query me { me }".to_string(),
///     variables: None,
/// };
/// assert_eq!(echo.send(operation, ()), "me");
/// ```
pub trait Transport<Extra> {
    /// Whatever the transport produces; returned verbatim by the client.
    type Output;

    /// Dispatches one composed operation.
    fn send(&self, operation: Operation, extra: Extra) -> Self::Output;
}

impl<F, Extra, T> Transport<Extra> for F
where
    F: Fn(Operation, Extra) -> T,
{
    type Output = T;

    fn send(&self, operation: Operation, extra: Extra) -> T {
        self(operation, extra)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn operation() -> Operation {
        Operation {
            operation_name: "me".to_string(),
            query: "query me { me { name } }".to_string(),
            variables: None,
        }
    }

    #[test]
    fn test_closure_is_a_transport() {
        let transport = |operation: Operation, _extra: ()| operation.query.len();
        assert_eq!(transport.send(operation(), ()), 24);
    }

    #[test]
    fn test_extra_is_threaded_through() {
        let transport = |_operation: Operation, extra: &str| extra.to_uppercase();
        assert_eq!(transport.send(operation(), "authorization"), "AUTHORIZATION");
    }
}
