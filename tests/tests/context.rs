use pretty_assertions::assert_eq;
use tessel::{context, query::*, Value};
use tests::{client, StubTransport};

fn answering(value: &str) -> tessel::Client {
    client(StubTransport::new().respond(200, format!(r#"{{"resource": "{value}"}}"#)))
}

#[tokio::test]
async fn no_client_outside_a_scope() {
    assert!(context::current().is_none());

    let err = context::query(Expr::from(1)).await.unwrap_err();
    assert!(err.is_adhoc(), "{err}");
    assert!(context::paginate(Expr::from(1), Params::new()).is_err());
}

#[tokio::test]
async fn scope_provides_the_client() {
    let value = context::scope(answering("outer"), async {
        assert_eq!(context::current().unwrap().secret(), Some("secret"));
        context::query(Expr::from(1)).await.unwrap()
    })
    .await;

    assert_eq!(value, Value::from("outer"));
    assert!(context::current().is_none());
}

#[tokio::test]
async fn inner_scope_shadows_outer() {
    let outer = answering("outer");
    let inner = answering("inner").with_secret("inner-secret");

    context::scope(outer, async {
        let seen = context::scope(inner, async {
            context::current().unwrap().secret().map(str::to_string)
        })
        .await;
        assert_eq!(seen.as_deref(), Some("inner-secret"));

        // The outer client is current again
        assert_eq!(context::current().unwrap().secret(), Some("secret"));
        assert_eq!(
            context::query(Expr::from(1)).await.unwrap(),
            Value::from("outer")
        );
    })
    .await;
}

#[tokio::test]
async fn scope_is_local_to_the_task() {
    context::scope(answering("outer"), async {
        let spawned = tokio::spawn(async { context::current().is_none() });
        assert!(spawned.await.unwrap());
    })
    .await;
}

#[tokio::test]
async fn paginate_uses_the_current_client() {
    let stub = StubTransport::new().respond(200, r#"{"resource": {"data": [1, 2]}}"#);
    let log = stub.exec_log();

    let data = context::scope(client(stub), async {
        let page = context::paginate(match_(index("all"), Vec::<Expr>::new()), Params::new()).unwrap();
        page.data().await.unwrap().to_vec()
    })
    .await;

    assert_eq!(data, vec![Value::from(1), Value::from(2)]);
    assert_eq!(log.queries(), 1);
}
