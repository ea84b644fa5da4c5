use super::logger;

use tessel_core::RequestResult;

use std::{
    fmt,
    panic::{self, AssertUnwindSafe},
    sync::Arc,
};

/// Receives the record of every exchange a client performs.
///
/// Observers are fire-and-forget: a panic inside one is caught and logged,
/// and never reaches the query that triggered it.
#[derive(Clone)]
pub struct Observer {
    f: Arc<dyn Fn(&RequestResult) + Send + Sync>,
}

impl Observer {
    pub fn new(f: impl Fn(&RequestResult) + Send + Sync + 'static) -> Observer {
        Observer { f: Arc::new(f) }
    }

    /// An observer that renders each exchange with
    /// [`show_request_result`](logger::show_request_result) and hands the
    /// text to `sink`.
    pub fn logger(sink: impl Fn(&str) + Send + Sync + 'static) -> Observer {
        Observer::new(move |result| sink(&logger::show_request_result(result)))
    }

    pub(crate) fn notify(&self, result: &RequestResult) {
        let f = &self.f;

        if panic::catch_unwind(AssertUnwindSafe(|| f(result))).is_err() {
            tracing::warn!(
                method = %result.method,
                path = %result.path,
                "observer panicked; ignoring"
            );
        }
    }
}

impl<F> From<F> for Observer
where
    F: Fn(&RequestResult) + Send + Sync + 'static,
{
    fn from(f: F) -> Observer {
        Observer::new(f)
    }
}

impl fmt::Debug for Observer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Observer(..)")
    }
}
