pub mod client;
pub use client::Client;

pub mod context;

pub mod page;
pub use page::Page;

pub mod query;

pub use tessel_core::{
    json, Bytes, Error, ErrorData, Expr, Failure, Method, Params, PathSegment, QueryFragment,
    Ref, RequestResult, Result, SetRef, Transport, Value,
};

/// Types needed to implement a [`Transport`].
pub mod transport {
    pub use tessel_core::transport::*;
    pub use tessel_core::{async_trait, Error, Result};
}
