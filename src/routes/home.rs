//! Handler for the home page.

use tracing::instrument;

/// Body returned for `GET /`. Byte-for-byte stable across requests.
pub const HOME_BODY: &str = "ShiftX Platform Running on OpenShift!";

/// Home page handler.
///
/// Stateless: always returns the same plaintext body with a 200 status.
#[instrument(name = "home::index")]
pub async fn index() -> &'static str {
    HOME_BODY
}
