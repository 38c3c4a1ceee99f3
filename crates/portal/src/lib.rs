//! Domain types and port definitions for the academic portal client.
//!
//! This crate contains every value threaded through a portal request, the
//! error type every operation returns, and the two traits infrastructure
//! crates implement: [`PortalService`] (HTTP) and [`TextCodec`] (legacy text
//! encoding).
//!
//! ## Architectural Layer
//!
//! **Domain + port definitions.** This crate has no I/O dependencies.
//! It defines *what* the portal offers; the `transport` crate defines *how*
//! to reach it.
//!
//! ## Module Layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`identifiers`] | Newtype values (`StudentId`, `SessionToken`, etc.) |
//! | [`types`] | Grouped inputs and the `PageResponse` output |
//! | [`errors`] | `PortalError` and the `PortalResult` alias |
//! | [`codec`] | `TextCodec` port |
//! | [`service`] | `PortalService` port |

pub mod codec;
pub mod errors;
pub mod identifiers;
pub mod service;
pub mod types;

/// Name of the cookie that carries the session token.
///
/// Fixed by the portal's ASP.NET runtime.
pub const SESSION_COOKIE_NAME: &str = "ASP.NET_SessionId";

// Re-export everything at the crate root for ergonomic usage by downstream crates.
pub use codec::TextCodec;
pub use errors::{PortalError, PortalResult};
pub use identifiers::{Password, SchoolYear, Semester, SessionToken, StudentId, Username};
pub use service::PortalService;
pub use types::{Credentials, FormContext, PageResponse, TermQuery};
