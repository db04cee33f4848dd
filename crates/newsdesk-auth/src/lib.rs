//! Access gate and authentication primitives for Newsdesk.
//!
//! Provides:
//! - [`Capability`] — authority computed from (role, approval status)
//! - [`AuthenticatedUser`] — identity extracted from a validated token
//! - [`AccessGate`] — per-request token validation against the live
//!   identity record
//! - [`AuthLayer`] / [`AuthService`] / [`AdminLayer`] — Tower middleware
//! - [`CredentialHasher`] / [`TokenKeys`] — injected capability
//!   interfaces for secret hashing and token issue/verify
//! - [`AccountService`] — registration, login, and the admin
//!   editor-approval surface
//! - [`AuthError`] — auth-specific error types

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

mod accounts;
mod capability;
mod error;
mod gate;
mod hasher;
mod middleware;
mod token;

pub use accounts::{AccountService, LoginSession, Registration};
pub use capability::Capability;
pub use error::AuthError;
pub use gate::{AccessGate, AuthenticatedUser};
pub use hasher::{Blake3Hasher, CredentialHasher};
pub use middleware::{Access, AdminLayer, AuthLayer, AuthService};
pub use token::{Claims, TokenKeys};
