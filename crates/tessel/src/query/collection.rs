use tessel_core::Expr;

fn over(name: &str, arg: impl Into<Expr>, collection: impl Into<Expr>) -> Expr {
    Expr::object([(name, arg.into()), ("collection", collection.into())])
}

/// Applies `lambda` to every element of `collection`.
///
/// `collection` is an array, or a page of results such as a `paginate`.
pub fn map(collection: impl Into<Expr>, lambda: impl Into<Expr>) -> Expr {
    over("map", lambda, collection)
}

/// Like [`map`], for side effects. Returns the original collection.
pub fn foreach(collection: impl Into<Expr>, lambda: impl Into<Expr>) -> Expr {
    over("foreach", lambda, collection)
}

/// Keeps the elements for which `lambda` returns `true`.
pub fn filter(collection: impl Into<Expr>, lambda: impl Into<Expr>) -> Expr {
    over("filter", lambda, collection)
}

pub fn take(number: impl Into<Expr>, collection: impl Into<Expr>) -> Expr {
    over("take", number, collection)
}

pub fn drop(number: impl Into<Expr>, collection: impl Into<Expr>) -> Expr {
    over("drop", number, collection)
}

pub fn prepend(elements: impl Into<Expr>, collection: impl Into<Expr>) -> Expr {
    over("prepend", elements, collection)
}

pub fn append(elements: impl Into<Expr>, collection: impl Into<Expr>) -> Expr {
    over("append", elements, collection)
}

pub fn is_empty(collection: impl Into<Expr>) -> Expr {
    Expr::call("is_empty", collection)
}

pub fn is_nonempty(collection: impl Into<Expr>) -> Expr {
    Expr::call("is_nonempty", collection)
}
