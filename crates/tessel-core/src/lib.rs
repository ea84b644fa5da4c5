mod error;
pub use error::{Error, ErrorData, Failure, IntoError, PathSegment};

mod expr;
pub use expr::Expr;

pub mod json;

mod params;
pub use params::Params;

pub mod transport;
pub use transport::{HttpRequest, HttpResponse, Method, RequestResult, Transport};

pub mod value;
pub use value::{Bytes, QueryFragment, Ref, SetRef, Value};

/// A Result type alias that uses Tessel's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

pub use async_trait::async_trait;
