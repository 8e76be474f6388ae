use tracing::{debug, warn};

use crate::http_client::{HttpAuth, HttpClient, HttpError, HttpRequest};

/// Exchanges credentials for a passport session cookie.
///
/// Returns `Ok(true)` only for status 200. Any other status, bad credentials
/// included, is `Ok(false)`; `Err` is reserved for transport failures raised
/// by the HTTP client itself. The cookie is retained by the client's cookie
/// store, not inspected here.
pub async fn authenticate(
    http: &dyn HttpClient,
    passport_url: &str,
    username: &str,
    password: &str,
    timeout_ms: u64,
) -> Result<bool, HttpError> {
    let request = HttpRequest::get(passport_url)
        .with_auth(&HttpAuth::Basic {
            username: username.to_owned(),
            password: password.to_owned(),
        })
        .with_timeout_ms(timeout_ms);

    let response = http.execute(request).await?;
    let accepted = response.status == 200;
    if accepted {
        debug!(url = passport_url, "passport authentication succeeded");
    } else {
        warn!(url = passport_url, status = response.status, "passport authentication rejected");
    }

    Ok(accepted)
}
