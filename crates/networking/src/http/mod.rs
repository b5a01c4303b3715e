//! HTTP client for the Honeygain dashboard API

mod client;

pub use client::*;
