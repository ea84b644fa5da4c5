//! Human-readable rendering of [`RequestResult`]s.

use tessel_core::RequestResult;

use std::fmt::Write;

/// Renders an exchange, with the credential redacted.
///
/// ```text
/// Fauna POST /
///   Credentials: <redacted>
///   Request JSON: {
///     "add": [1, 2]
///   }
///   Response headers: {
///     "content-type": "application/json;charset=utf-8"
///   }
///   Response JSON: {
///     "resource": 3
///   }
///   Response (200): Network latency 12ms
/// ```
pub fn show_request_result(result: &RequestResult) -> String {
    render(result, false)
}

/// Same as [`show_request_result`] but prints the credential verbatim.
pub fn show_request_result_with_credentials(result: &RequestResult) -> String {
    render(result, true)
}

fn render(result: &RequestResult, reveal_credentials: bool) -> String {
    let mut out = String::new();

    let _ = write!(out, "Fauna {} /{}", result.method, result.path);
    if let Some(query) = result.query.as_ref().filter(|query| !query.is_empty()) {
        let pairs: Vec<_> = query.iter().map(|(k, v)| format!("{k}={v}")).collect();
        let _ = write!(out, "?{}", pairs.join("&"));
    }
    out.push('\n');

    if let Some(auth) = &result.auth {
        let shown = if reveal_credentials { &auth[..] } else { "<redacted>" };
        let _ = writeln!(out, "  Credentials: {shown}");
    }

    if let Some(content) = &result.request_content {
        let _ = writeln!(out, "  Request JSON: {}", indent(&pretty(content)));
    }

    if !result.response_headers.is_empty() {
        let headers: serde_json::Map<_, _> = result
            .response_headers
            .iter()
            .map(|(k, v)| (k.clone(), serde_json::Value::String(v.clone())))
            .collect();
        let _ = writeln!(
            out,
            "  Response headers: {}",
            indent(&pretty(&serde_json::Value::Object(headers)))
        );
    }

    match &result.response_content {
        Some(content) => {
            let _ = writeln!(out, "  Response JSON: {}", indent(&pretty(content)));
        }
        None if !result.response_raw.is_empty() => {
            let _ = writeln!(out, "  Response body: {}", result.response_raw);
        }
        None => {}
    }

    let _ = write!(
        out,
        "  Response ({}): Network latency {}ms",
        result.status_code,
        result.time_taken().as_millis()
    );

    out
}

fn pretty(value: &serde_json::Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

/// Indents every line after the first so nested JSON lines up under its label.
fn indent(text: &str) -> String {
    text.replace('\n', "\n  ")
}
