//! Squadcast API client.
//!
//! A library for talking to the Squadcast incident management platform:
//! service lookup through the OAuth-authenticated v3 REST API and
//! incident creation through the key-scoped v2 webhook.

pub mod api;
pub mod auth;
pub mod config;
pub mod time;
pub mod transport;
pub mod webhook;
