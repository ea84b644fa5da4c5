use pretty_assertions::assert_eq;
use tessel::{query::*, Error, PathSegment, Value};
use tests::{client, DbTest, StubTransport};

fn envelope(code: &str, description: &str) -> String {
    serde_json::json!({
        "errors": [{"position": [], "code": code, "description": description}]
    })
    .to_string()
}

// --- Status mapping ---

#[tokio::test]
async fn forbidden_is_permission_denied() {
    let stub = StubTransport::new().respond(403, envelope("permission denied", "Insufficient privileges."));
    let err = client(stub).query(get(ref_(class("spells"), "1"), Params::new())).await.unwrap_err();

    assert!(err.is_permission_denied());
    assert_eq!(err.code(), Some("permission denied"));
    assert_eq!(err.description(), Some("Insufficient privileges."));
    assert_eq!(err.request_result().unwrap().status_code, 403);
}

#[tokio::test]
async fn unauthorized_and_not_found() {
    let stub = StubTransport::new()
        .respond(401, envelope("unauthorized", "Unauthorized"))
        .respond(404, envelope("not found", "Endpoint not found."));
    let client = client(stub);

    assert!(client.ping(None).await.unwrap_err().is_unauthorized());
    assert!(client.get("nowhere", Params::new()).await.unwrap_err().is_not_found());
}

#[tokio::test]
async fn bad_request_keeps_position_and_failures() {
    let body = serde_json::json!({
        "errors": [{
            "position": ["create", 1],
            "code": "validation failed",
            "description": "Instance data is not valid.",
            "failures": [{
                "field": ["data", "name"],
                "code": "duplicate value",
                "description": "Value is not unique."
            }]
        }]
    });
    let stub = StubTransport::new().respond(400, body.to_string());

    let err = client(stub).query(Expr::from(1)).await.unwrap_err();
    assert!(err.is_bad_request());

    let [data] = err.errors() else {
        panic!("expected a single error, got {:?}", err.errors());
    };
    assert_eq!(
        data.position,
        vec![PathSegment::Field("create".into()), PathSegment::Index(1)]
    );
    assert_eq!(data.failures.len(), 1);
    assert_eq!(data.failures[0].field, vec!["data", "name"]);
    assert_eq!(data.failures[0].code, "duplicate value");
}

#[tokio::test]
async fn server_error_is_internal() {
    let stub = StubTransport::new().respond(500, envelope("internal server error", "boom"));
    let err = client(stub).query(Expr::from(1)).await.unwrap_err();
    assert!(err.is_internal());
}

#[tokio::test]
async fn gateway_statuses_are_unavailable() {
    let stub = StubTransport::new()
        .respond(502, "<html>bad gateway</html>")
        .respond(503, envelope("unavailable", "Service unavailable."))
        .respond(504, "");
    let client = client(stub);

    let bad_gateway = client.query(Expr::from(1)).await.unwrap_err();
    assert!(bad_gateway.is_unavailable());
    assert!(bad_gateway.errors().is_empty());

    let unavailable = client.query(Expr::from(1)).await.unwrap_err();
    assert!(unavailable.is_unavailable());
    assert_eq!(unavailable.code(), Some("unavailable"));

    let timeout = client.query(Expr::from(1)).await.unwrap_err();
    assert!(timeout.is_unavailable());
    assert_eq!(timeout.request_result().unwrap().status_code, 504);
}

// --- Protocol violations ---

#[tokio::test]
async fn unparseable_success_is_unexpected() {
    let stub = StubTransport::new().respond(200, "I like fish");
    let err = client(stub).query(Expr::from(1)).await.unwrap_err();

    assert!(err.is_unexpected());
    let result = err.request_result().unwrap();
    assert_eq!(result.response_raw, "I like fish");
    assert_eq!(result.response_content, None);
}

#[tokio::test]
async fn failure_without_usable_errors_is_unexpected() {
    let stub = StubTransport::new()
        .respond(400, r#"{"errors": []}"#)
        .respond(400, r#"{"message": "nope"}"#)
        .respond(403, "forbidden");
    let client = client(stub);

    for _ in 0..3 {
        let err = client.query(Expr::from(1)).await.unwrap_err();
        assert!(err.is_unexpected(), "{err}");
    }
}

#[tokio::test]
async fn unknown_status_is_unexpected() {
    let stub = StubTransport::new().respond(418, envelope("teapot", "Short and stout."));
    let err = client(stub).query(Expr::from(1)).await.unwrap_err();

    assert!(err.is_unexpected());
    assert_eq!(err.request_result().unwrap().status_code, 418);
}

#[tokio::test]
async fn malformed_tag_payload_is_a_format_error() {
    let stub = StubTransport::new().respond(200, r#"{"resource": {"@ts": 12}}"#);
    let err = client(stub).query(Expr::from(1)).await.unwrap_err();
    assert!(err.is_unexpected_format());
}

// --- Transport failures ---

#[tokio::test]
async fn transport_failure_is_unavailable_with_cause() {
    let refused = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "connection refused");
    let stub = StubTransport::new().fail(Error::transport(refused));

    let err = client(stub).query(Expr::from(1)).await.unwrap_err();

    assert!(err.is_unavailable());
    assert!(err.request_result().is_none());
    assert!(err.cause().unwrap().is_transport());
    assert!(err.to_string().contains("connection refused"), "{err}");
}

#[tokio::test]
async fn transport_failure_skips_the_observer() {
    let stub = StubTransport::new().fail(Error::transport(std::io::Error::other("reset")));
    let calls = std::sync::Arc::new(std::sync::atomic::AtomicUsize::new(0));

    let client = tessel::Client::builder()
        .observer(tessel::client::Observer::new({
            let calls = calls.clone();
            move |_| {
                calls.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
            }
        }))
        .build(stub);

    assert!(client.query(Expr::from(1)).await.unwrap_err().is_unavailable());
    assert_eq!(calls.load(std::sync::atomic::Ordering::SeqCst), 0);
}

// --- Errors raised by the service ---

#[tokio::test]
async fn service_errors_round_trip_through_the_envelope() {
    let test = DbTest::new();

    let err = test.client.query(abort("no more spells")).await.unwrap_err();
    assert!(err.is_bad_request());
    assert_eq!(err.code(), Some("transaction aborted"));
    assert_eq!(err.description(), Some("no more spells"));

    let err = test
        .client
        .query(get(ref_(class("spells"), "404"), Params::new()))
        .await
        .unwrap_err();
    assert!(err.is_not_found());

    let err = test.client.query(divide([1, 0])).await.unwrap_err();
    assert!(err.is_bad_request());
    assert_eq!(err.code(), Some("invalid argument"));

    let err = test.client.query(add(Vec::<Expr>::new())).await.unwrap_err();
    assert_eq!(err.code(), Some("invalid argument"));

    let ok = test
        .client
        .query(select("missing", object([("a", 1)]), Params::new().set("default", "fallback")))
        .await
        .unwrap();
    assert_eq!(ok, Value::from("fallback"));
}
