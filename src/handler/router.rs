//! Route dispatch module
//!
//! Maps (method, path) pairs onto the registered routes. Only GET is
//! registered, so every other method is rejected with 405 on known paths.

use hyper::Method;

/// Outcome of matching a request against the route table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    /// `GET /` - static greeting
    Greeting,
    /// `GET /time` - current server time as JSON
    Time,
    /// Registered path, unregistered method
    MethodNotAllowed,
    /// Unregistered path
    NotFound,
}

/// Match a request against the route table.
///
/// Paths are matched exactly; `/time/` is not `/time`.
pub fn route(method: &Method, path: &str) -> RouteDecision {
    if !matches!(path, "/" | "/time") {
        return RouteDecision::NotFound;
    }
    if *method != Method::GET {
        return RouteDecision::MethodNotAllowed;
    }
    match path {
        "/" => RouteDecision::Greeting,
        _ => RouteDecision::Time,
    }
}
