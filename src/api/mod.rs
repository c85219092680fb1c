//! REST client for communicating with the remote API

mod client;

pub use client::*;
