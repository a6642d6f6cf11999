pub mod handler;
pub mod http;
pub mod request;

pub use handler::{evaluate, handle, FunctionResponse, ResponseBody};
