mod exec_log;
pub use exec_log::ExecLog;

pub mod fake;
pub use fake::{FakeServer, IndexDef};


mod stub;
pub use stub::StubTransport;

use tessel::Client;

/// A client over `transport` with a fixed test secret.
pub fn client(transport: impl tessel::Transport) -> Client {
    Client::builder().secret("secret").build(transport)
}

/// A fresh [`FakeServer`] and a client connected to it.
pub struct DbTest {
    pub server: FakeServer,
    pub client: Client,
}

impl DbTest {
    pub fn new() -> DbTest {
        let server = FakeServer::new();
        let client = client(server.clone());
        DbTest { server, client }
    }

    /// Stores `n` instances of `class`, with `{"element": i}` for `i` in
    /// `1..=n`, and an index over them named `all_{class}`.
    pub fn seed(&self, class: &str, n: i64) -> Vec<tessel::Ref> {
        self.server
            .define_index(IndexDef::new(&format!("all_{class}"), class));

        (1..=n)
            .map(|i| {
                self.server
                    .insert(class, tessel::Value::object([("element", i)]))
            })
            .collect()
    }

    /// Get a handle to the request log
    pub fn log(&self) -> ExecLog {
        self.server.exec_log()
    }
}

impl Default for DbTest {
    fn default() -> Self {
        Self::new()
    }
}
