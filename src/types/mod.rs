//! Domain vocabulary shared by the request builder, payload serializer and response parser.

mod models;
mod operation;
mod request;
mod source;

pub use models::*;
pub use operation::*;
pub use request::*;
pub use source::*;
