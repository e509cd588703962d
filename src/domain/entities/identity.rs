//! Authenticated caller identity resolved from a session.

/// The identity of an authenticated caller.
///
/// Resolved once per request by the authentication middleware and attached
/// to the request as an extension. `user_id` is the ownership key for every
/// scoped mutation; `email` and `name` are carried for response shaping only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub user_id: String,
    pub email: String,
    pub name: Option<String>,
}
