use pretty_assertions::assert_eq;
use tessel::{query::*, Value};
use tests::{client, StubTransport};

fn page(params: Params) -> tessel::Page {
    client(StubTransport::new()).paginate(match_(index("all"), Vec::<Expr>::new()), params)
}

#[test]
fn setting_before_clears_after() {
    let page = page(Params::new().after(5)).with_params(Params::new().before(3));
    assert_eq!(page.params(), Params::new().before(3));
}

#[test]
fn setting_after_clears_before() {
    let page = page(Params::new().before(3).size(2)).with_params(Params::new().after(7));
    assert_eq!(page.params(), Params::new().size(2).after(7));
}

#[test]
fn explicit_null_survives_an_empty_merge() {
    let page = page(Params::new().after(Value::Null)).with_params(Params::new());

    let params = page.params();
    assert!(params.contains("after"));
    assert_eq!(params.get("after"), Some(&Value::Null));
}

#[test]
fn explicit_null_cursor_replaces_a_value() {
    let page = page(Params::new().after(5)).with_params(Params::new().before(Value::Null));

    let params = page.params();
    assert!(!params.contains("after"));
    assert_eq!(params.get("before"), Some(&Value::Null));
}

#[test]
fn non_cursor_keys_merge_over() {
    let page = page(Params::new().size(2).after(1)).with_params(Params::new().size(5).ts(9));
    assert_eq!(page.params(), Params::new().size(5).after(1).ts(9));
}

#[test]
fn returned_params_are_a_copy() {
    let page = page(Params::new().size(2));

    let mut params = page.params();
    params.insert("size", 100);
    params.insert("after", 1);

    assert_eq!(page.params(), Params::new().size(2));
}

#[test]
fn refinement_leaves_the_original_untouched() {
    let original = page(Params::new().size(2));
    let _ = original.with_params(Params::new().after(1)).map(lambda("x", |x| x));

    assert_eq!(original.params(), Params::new().size(2));
    assert_eq!(
        tessel::json::encode_expr(&original.to_expr()),
        serde_json::json!({"paginate": {"match": {"index": "all"}}, "size": 2})
    );
}
