use tessel_core::Expr;

/// Creates an instance of `class_ref`. `params` usually carries `data`.
pub fn create(class_ref: impl Into<Expr>, params: impl Into<Expr>) -> Expr {
    Expr::object([("create", class_ref.into()), ("params", params.into())])
}

/// Merges `params` into the instance at `reference`.
pub fn update(reference: impl Into<Expr>, params: impl Into<Expr>) -> Expr {
    Expr::object([("update", reference.into()), ("params", params.into())])
}

/// Overwrites the instance at `reference` with `params`.
pub fn replace(reference: impl Into<Expr>, params: impl Into<Expr>) -> Expr {
    Expr::object([("replace", reference.into()), ("params", params.into())])
}

pub fn delete(reference: impl Into<Expr>) -> Expr {
    Expr::call("delete", reference)
}

/// Adds an event to the history of `reference`.
pub fn insert(
    reference: impl Into<Expr>,
    ts: impl Into<Expr>,
    action: impl Into<Expr>,
    params: impl Into<Expr>,
) -> Expr {
    Expr::object([
        ("insert", reference.into()),
        ("ts", ts.into()),
        ("action", action.into()),
        ("params", params.into()),
    ])
}

/// Removes an event from the history of `reference`.
pub fn remove(reference: impl Into<Expr>, ts: impl Into<Expr>, action: impl Into<Expr>) -> Expr {
    Expr::object([
        ("remove", reference.into()),
        ("ts", ts.into()),
        ("action", action.into()),
    ])
}

pub fn create_class(params: impl Into<Expr>) -> Expr {
    Expr::call("create_class", params)
}

pub fn create_index(params: impl Into<Expr>) -> Expr {
    Expr::call("create_index", params)
}

pub fn create_database(params: impl Into<Expr>) -> Expr {
    Expr::call("create_database", params)
}

pub fn create_key(params: impl Into<Expr>) -> Expr {
    Expr::call("create_key", params)
}

pub fn create_function(params: impl Into<Expr>) -> Expr {
    Expr::call("create_function", params)
}
