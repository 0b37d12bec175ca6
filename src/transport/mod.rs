//! HTTP transport shared by the REST and webhook clients.
//!
//! This module provides types and traits for:
//! - Building HTTP requests ([`HttpRequest`], [`RequestParams`])
//! - Handling HTTP responses ([`HttpResponse`])
//! - Abstracting HTTP clients ([`HttpClient`])
//! - Production HTTP client implementation ([`ReqwestClient`])

mod client;
mod error;
mod http;
mod request;


pub use client::ReqwestClient;
pub use error::HttpError;
pub use http::{HttpClient, HttpRequest, HttpResponse};
pub use request::RequestParams;
