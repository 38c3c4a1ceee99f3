//! Academic portal HTTP adapter.
//!
//! Implements the [`portal::PortalService`] trait over `reqwest` and the
//! [`portal::TextCodec`] trait over `encoding_rs` GBK. Callers construct an
//! [`HttpPortalClient`] from a [`ClientConfig`] and use it through the trait.
//!
//! ## Architectural Layer
//!
//! **Infrastructure.** URL construction, form encoding, cookie handling, and
//! body transcoding all live here. The [`portal`] crate sees only
//! [`portal::PortalService`].
//!
//! ## Request shape
//!
//! Every page is a fixed script under the base URL (see [`endpoints`]). Report
//! pages take the student number as `xh` in the query string and the session
//! as the `ASP.NET_SessionId` cookie. Postbacks carry the caller's view-state
//! and event target plus page-specific fields, with button captions and
//! semester labels transcoded to GBK before percent-encoding.
//!
//! No request is retried.

pub mod client;
pub mod codec;
pub mod config;
pub mod cookie;
pub mod endpoints;
pub mod form;

pub use client::HttpPortalClient;
pub use codec::GbkCodec;
pub use config::ClientConfig;
pub use endpoints::Page;
pub use form::FormBody;
