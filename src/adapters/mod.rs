// Adapters layer: transports that expose the lookup service.

pub mod http;
