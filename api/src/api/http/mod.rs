pub mod envelope;
pub mod routes;
pub mod rpc;

pub use routes::{app, routes};
