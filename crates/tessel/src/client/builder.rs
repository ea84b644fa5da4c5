use super::{Client, Observer, Shared};

use tessel_core::Transport;

use std::sync::Arc;

#[derive(Default)]
pub struct Builder {
    secret: Option<String>,
    observer: Option<Observer>,
}

impl Builder {
    /// The credential sent with every request.
    pub fn secret(&mut self, secret: impl Into<String>) -> &mut Self {
        self.secret = Some(secret.into());
        self
    }

    /// Called with the [`RequestResult`](tessel_core::RequestResult) of every
    /// exchange, including failed ones.
    pub fn observer(&mut self, observer: impl Into<Observer>) -> &mut Self {
        self.observer = Some(observer.into());
        self
    }

    pub fn build(&mut self, transport: impl Transport) -> Client {
        Client {
            shared: Arc::new(Shared {
                transport: Box::new(transport),
                observer: self.observer.clone(),
            }),
            secret: self.secret.clone().map(Into::into),
        }
    }
}
