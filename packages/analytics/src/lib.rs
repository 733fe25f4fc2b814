#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Analytics over traffic-stop records.
//!
//! Everything here is a pure function of already-fetched data, except the
//! [`catalog`], which only hands out SQL text for the data-access layer to
//! run:
//!
//! - [`metrics`]: headline counts for the dashboard.
//! - [`catalog`]: the ordered menus of canned analytical queries.
//! - [`predict`]: the frequency-mode outcome/violation lookup.
//! - [`narrative`]: the plain-language prediction summary.

pub mod catalog;
pub mod metrics;
pub mod narrative;
pub mod predict;
