#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! Typed async client for the Cryptomus cryptocurrency payment gateway.
//!
//! Every call is a single signed JSON exchange with
//! `https://api.cryptomus.com/`. Requests carry a `Merchant` header and a
//! `Sign` header computed as `md5(base64(body) + payment_token)`; the same
//! scheme authenticates webhooks sent by the gateway.
//!
//! # Modules
//!
//! - [`client`] - The [`Cryptomus`] client and generic request dispatcher
//! - [`endpoints`] - Named API operations (payments, static wallets, recurring payments)
//! - [`signature`] - Request and webhook signatures
//! - [`types`] - Request and response shapes
//! - [`config`] - Explicit and environment-based configuration
//! - [`constants`] - Base URL, header names, routes
//! - [`error`] - The [`CryptomusError`] type
//!
//! # Webhooks
//!
//! ```
//! use cryptomus::Cryptomus;
//!
//! let client = Cryptomus::new("merchant-uuid", "payment-token");
//! let body = br#"{"uuid":"u-1","status":"paid","sign":"0000"}"#;
//! assert!(!client.verify_webhook(body));
//! ```
//!
//! # Feature Flags
//!
//! - `telemetry` - Enables tracing instrumentation of every request

pub mod client;
pub mod config;
pub mod constants;
pub mod endpoints;
pub mod error;
pub mod signature;
pub mod types;

pub use client::Cryptomus;
pub use config::CryptomusConfig;
pub use error::CryptomusError;
pub use http::Method;
pub use types::*;
