//! # dsync-schema — Sync-List Schema Validation
//!
//! Provides runtime JSON Schema validation for the configuration lists
//! that describe which files and directories are synchronized between
//! the active and passive management controllers.
//!
//! ## Runtime Validation (`validate`)
//!
//! The [`validate`] module compiles the sync-list schema (Draft 2020-12,
//! with `format` assertions enforced) exactly once per run and validates
//! candidate JSON documents against it. Key type:
//!
//! - [`SyncListValidator`] — owns the compiled validator; candidate
//!   documents are checked one at a time via
//!   [`SyncListValidator::validate_file`], in the order supplied.
//!
//! ## Crate Policy
//!
//! - Validation is a trust boundary: invalid documents are rejected with
//!   structured errors naming the file, the JSON Pointer path of each
//!   violating field, and a human-readable message.
//! - Schema-artifact failures and candidate-document failures are
//!   distinct error categories; callers can report a broken schema
//!   before any candidate is touched.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod validate;

pub use validate::{SyncListValidator, ValidationError, Violation, Violations};
