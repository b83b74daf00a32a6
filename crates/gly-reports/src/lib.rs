//! # gly-reports
//!
//! The analytics core of Galley: revenue trends, sales-funnel conversion,
//! lead-source performance, and client lifetime value.
//!
//! Everything here is a synchronous, stateless pass over already-materialized
//! slices of [`gly_core::entities::Client`] and [`gly_core::entities::Project`]
//! records handed over by the store. No I/O, no caching: every call recomputes
//! from scratch, and inputs may be iterated any number of times.
//!
//! The only failure mode is a malformed date range
//! ([`error::ReportError::InvalidRange`]); empty populations always produce
//! zeros, never errors.

pub mod error;
pub mod funnel;
pub mod ltv;
pub mod months;
pub mod revenue;

pub use error::ReportError;
