// Application layer: request handling that every transport (axum, Lambda) shares.

pub mod lookup;

pub use lookup::{Endpoint, LookupResponse, LookupService, ResponseBody};
