// file: src/api/mod.rs
// description: image library api module exports
// reference: internal module structure

pub mod client;

pub use client::MediaApiClient;
