//! Task-scoped current client.
//!
//! Code deep in a call stack can run queries without threading a [`Client`]
//! through every function, as long as an enclosing [`scope`] provides one.
//! Scopes nest: the innermost one wins until it ends, then the outer client
//! is current again. The client is local to the task and never shared
//! through a global.
//!
//! ```no_run
//! # async fn example(admin: tessel::Client) -> tessel::Result<()> {
//! use tessel::{context, query::*};
//!
//! context::scope(admin, async {
//!     context::query(create_class(object([("name", "spells")]))).await
//! })
//! .await?;
//! # Ok(())
//! # }
//! ```

use crate::{Client, Page, Result};

use tessel_core::{err, Expr, Params, Value};

use std::future::Future;

tokio::task_local! {
    static CURRENT: Client;
}

/// Runs `f` with `client` as the current client.
pub async fn scope<F: Future>(client: Client, f: F) -> F::Output {
    CURRENT.scope(client, f).await
}

/// The client of the innermost enclosing [`scope`].
pub fn current() -> Option<Client> {
    CURRENT.try_with(Client::clone).ok()
}

/// Executes `expr` on the current client.
pub async fn query(expr: impl Into<Expr>) -> Result<Value> {
    current_or_err()?.query(expr).await
}

/// A [`Page`] over `set` on the current client.
pub fn paginate(set: impl Into<Expr>, params: Params) -> Result<Page> {
    Ok(current_or_err()?.paginate(set, params))
}

fn current_or_err() -> Result<Client> {
    current().ok_or_else(|| err!("no client in scope; wrap the call in `context::scope`"))
}
