//! Update builder types for entity mutations.
//!
//! Each builder produces an update struct with `Option` fields. Only `Some`
//! fields generate SET clauses in the dynamic UPDATE SQL. Status is absent on
//! purpose: project status only moves through the transition method.

pub mod client;
pub mod project;
