//! semroute - embedding encoders for semantic routing
//!
//! This crate provides the encoder layer of a semantic router: adapters
//! over remote embedding APIs with uniform error handling and bounded
//! retries.

pub mod config;
pub mod encoders;

pub use encoders::{Encoder, EncoderError, EncoderResult};
