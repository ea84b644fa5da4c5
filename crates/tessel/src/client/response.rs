use crate::Result;

use tessel_core::{json, Error, ErrorData, RequestResult, Value};

/// Turns a completed exchange into a decoded value or a typed error.
pub(super) fn handle(result: RequestResult) -> Result<Value> {
    if (200..300).contains(&result.status_code) {
        success(result)
    } else {
        Err(failure(result))
    }
}

fn success(result: RequestResult) -> Result<Value> {
    match result.response_content {
        Some(ref content) => json::decode(unwrap_resource(content)),
        None => Err(Error::unexpected("response is not valid JSON", result)),
    }
}

/// Legacy endpoints wrap the result as `{"resource": ..}`; newer ones return
/// it bare. Only one level is removed.
fn unwrap_resource(content: &serde_json::Value) -> &serde_json::Value {
    match content.as_object() {
        Some(map) if map.len() == 1 => map.get("resource").unwrap_or(content),
        _ => content,
    }
}

fn failure(result: RequestResult) -> Error {
    let status = result.status_code;

    let errors = result
        .response_content
        .as_ref()
        .and_then(ErrorData::from_envelope);

    if matches!(status, 502..=504) {
        return Error::unavailable(errors.unwrap_or_default(), Some(result));
    }

    let errors = match errors {
        Some(errors) if !errors.is_empty() => errors,
        Some(_) => return Error::unexpected("error response has an empty `errors` array", result),
        None if result.response_content.is_none() => {
            return Error::unexpected("error response is not valid JSON", result)
        }
        None => return Error::unexpected("error response has no `errors` array", result),
    };

    match status {
        400 => Error::bad_request(errors, result),
        401 => Error::unauthorized(errors, result),
        403 => Error::permission_denied(errors, result),
        404 => Error::not_found(errors, result),
        405 => Error::method_not_allowed(errors, result),
        500 => Error::internal(errors, result),
        _ => Error::unexpected(format!("unrecognized status code {status}"), result),
    }
}
