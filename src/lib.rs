//! # reapp-admin
//!
//! Leptos + WASM admin panel for the Reapp donation platform. Staff log in
//! with email/password, moderate institution accounts (approve, suspend,
//! ban) and browse the donation ledger with summary metrics.
//!
//! The crate is a pure presentation layer: every read and write goes through
//! the remote Reapp HTTP API. Browser-only code (localStorage, `gloo-net`
//! requests, wall-clock time from JS) is gated behind the `hydrate` feature
//! so the crate also compiles natively for unit tests.

pub mod app;
pub mod components;
pub mod metrics;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;
