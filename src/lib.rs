#![warn(missing_debug_implementations, missing_docs, rust_2018_idioms)]
#![deny(unsafe_code)]
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! An immutable URL component model based on [RFC 3986].
//!
//! [RFC 3986]: https://datatracker.ietf.org/doc/html/rfc3986/
//!
//! A [`Url`] is a plain record of seven escaped components: scheme, userinfo,
//! host, port, path, query and fragment. Parsing never fails: any string is
//! split into components, and a separate [`Url::validate`] call rejects
//! components that break their grammar. Records never change after
//! construction; [`Url::replace`], [`Url::setdefault`], [`Url::replace_from`]
//! and [`Url::join`] all return new records.
//!
//! # Examples
//!
//! ```
//! use urlparts::Url;
//!
//! let base = Url::parse("HTTP://user@Example.COM:8080/a/b?q#frag");
//! assert_eq!(base.scheme(), "http");
//! assert_eq!(base.host(), "example.com");
//! assert_eq!(base.authority(), "user@example.com:8080");
//! assert_eq!(base.full_path(), "/a/b?q#frag");
//!
//! let joined = base.join(&Url::parse("../c?x"));
//! assert_eq!(joined.to_string(), "http://user@example.com:8080/c?x");
//! ```
//!
//! Untrusted input should be validated explicitly:
//!
//! ```
//! use urlparts::{AuthorityError, Url, UrlError};
//!
//! assert!(Url::parse("//[::1]/").validate().is_ok());
//! assert_eq!(
//!     Url::parse("//[-1]/").validate().unwrap_err(),
//!     UrlError::InvalidAuthority(AuthorityError::InvalidHost),
//! );
//! ```
//!
//! # Feature flags
//!
//! - `std` (default): enables `std` support. This includes [`Error`] implementations
//!   and the [`cache`] module.
//! - `impl-error`: implements [`Error`] for the error types on `no_std`.
//! - `serde`: (de)serializes [`Url`] as its string form.
//! - `log`: emits diagnostics through the [`log`](https://docs.rs/log) crate.
//!
//! [`Error`]: core::error::Error

extern crate alloc;

#[macro_use]
mod log;

pub mod build;
#[cfg(feature = "std")]
pub mod cache;
mod component;
mod error;
mod fmt;
mod imp;
mod parse;
pub mod pct_enc;
pub mod resolve;
mod validate;

pub use build::{BuildError, Builder};
pub use error::{AuthorityError, UrlError};
pub use imp::Url;

#[cfg(all(feature = "impl-error", not(feature = "std")))]
use core::error::Error;
#[cfg(feature = "std")]
use std::error::Error;
