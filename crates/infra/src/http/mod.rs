//! HTTP transport

pub mod client;

pub use client::{
    HttpClient, HttpClientBuilder, HttpTransport, PreparedRequest, TransportError,
    TransportResponse,
};
