use crate::error::{ApiError, Error, ParseError, Result};
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, error, instrument, warn};

const BODY_PREVIEW_SIZE: usize = 200;

/// Decodes a response into `T`.
///
/// - `[200, 300)` with an empty body: `Ok(None)`.
/// - `[200, 300)` with a body: the body must deserialize into `T`, otherwise
///   [`ParseError::Body`].
/// - anything else: [`Error::Api`] built from the error envelope.
///
/// # Errors
///
/// Returns an API error for non-2xx statuses, a parse error for bodies that
/// do not match, and a network error if the body cannot be read.
#[instrument(name = "godaddy_decode", skip(response), fields(status = response.status().as_u16()))]
pub async fn decode_response<T: DeserializeOwned>(response: Response) -> Result<Option<T>> {
    let (status, body) = read_body(response).await?;
    if !status.is_success() {
        return Err(api_error(status, &body));
    }
    if body.is_empty() {
        return Ok(None);
    }

    serde_json::from_slice(&body).map(Some).map_err(|source| {
        error!(
            status = status.as_u16(),
            error = %source,
            body_preview = %preview(&body),
            "Failed to decode response body"
        );
        Error::from(ParseError::Body {
            status: status.as_u16(),
            source,
        })
    })
}

/// Checks the status of a response whose body is not wanted.
///
/// A 2xx body is read and discarded without being parsed.
///
/// # Errors
///
/// Same as [`decode_response`] for non-2xx statuses.
#[instrument(name = "godaddy_check", skip(response), fields(status = response.status().as_u16()))]
pub async fn check_response(response: Response) -> Result<()> {
    let (status, body) = read_body(response).await?;
    if status.is_success() {
        Ok(())
    } else {
        Err(api_error(status, &body))
    }
}

async fn read_body(response: Response) -> Result<(StatusCode, Vec<u8>)> {
    let status = response.status();
    let body = response.bytes().await.map_err(|e| {
        error!(status = status.as_u16(), error = %e, "Failed to read response body");
        Error::from(e)
    })?;
    let body = body.to_vec();

    debug!(
        status = status.as_u16(),
        body_length = body.len(),
        body_preview = %preview(&body),
        "HTTP response received"
    );
    Ok((status, body))
}

/// Builds the error for a non-2xx response from its envelope.
///
/// An envelope without a code, or a JSON `null` body, is tagged
/// `HTTPStatus: <status>` so callers still get something to match on.
fn api_error(status: StatusCode, body: &[u8]) -> Error {
    let mut api_error = match serde_json::from_slice::<Option<ApiError>>(body) {
        Ok(api_error) => api_error.unwrap_or_default(),
        Err(source) => {
            error!(
                status = status.as_u16(),
                error = %source,
                body_preview = %preview(body),
                "Error response is not a GoDaddy error envelope"
            );
            return ParseError::ErrorEnvelope {
                status: status.as_u16(),
                source,
            }
            .into();
        }
    };

    if api_error.code.is_empty() {
        api_error.code = ApiError::status_code(status.as_u16());
    }

    warn!(
        status = status.as_u16(),
        code = %api_error.code,
        envelope = %api_error.to_json(),
        "GoDaddy API error"
    );
    api_error.into()
}

fn preview(body: &[u8]) -> String {
    let end = body.len().min(BODY_PREVIEW_SIZE);
    String::from_utf8_lossy(&body[..end]).into_owned()
}
