// Adapters layer: concrete implementations for the external systems the
// core only knows as ports (record decoding, HTTP boundary).

pub mod decoder;
pub mod server;
