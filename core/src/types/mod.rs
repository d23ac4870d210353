pub mod signature_request;

pub use signature_request::SignatureRequest;
