//! Handler for the public short URL redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use tracing::{debug, error, warn};

use crate::state::AppState;

/// Redirects a short token to its destination, counting the visit.
///
/// # Endpoint
///
/// `GET /{code}` (public, no authentication)
///
/// # Behavior
///
/// The lookup and the click increment are one atomic statement, so each
/// successfully resolved request counts exactly once. Every failure mode —
/// unknown token, storage error, a destination that cannot be carried in a
/// Location header — degrades to a `302 Found` pointing at the home
/// location. A link visitor never sees an error page; failures are logged
/// server-side instead.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Response {
    match state.url_service.resolve_click(&code).await {
        Ok(Some(destination)) => redirect_to(&destination).unwrap_or_else(|| {
            warn!(%code, "destination is not a valid Location header");
            home_redirect(&state.home_url)
        }),
        Ok(None) => {
            debug!(%code, "unknown short token");
            home_redirect(&state.home_url)
        }
        Err(e) => {
            error!(error = %e, %code, "redirect resolution failed");
            home_redirect(&state.home_url)
        }
    }
}

/// Builds a `302 Found` response, or `None` when the location cannot be
/// encoded as a header value (destinations are stored unvalidated).
fn redirect_to(location: &str) -> Option<Response> {
    let value = HeaderValue::from_str(location).ok()?;

    let mut response = StatusCode::FOUND.into_response();
    response.headers_mut().insert(header::LOCATION, value);

    Some(response)
}

fn home_redirect(home_url: &str) -> Response {
    redirect_to(home_url).unwrap_or_else(|| {
        let mut response = StatusCode::FOUND.into_response();
        response
            .headers_mut()
            .insert(header::LOCATION, HeaderValue::from_static("/"));
        response
    })
}
