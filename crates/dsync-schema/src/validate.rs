//! # Sync-List Schema Validation
//!
//! Runtime validation of JSON sync-list documents against the JSON
//! Schema definition (Draft 2020-12) that describes them.
//!
//! ## Validation Contract
//!
//! The schema file is read, parsed, and compiled exactly once per run;
//! the compiled validator is then reused for every candidate document.
//! Candidates are checked one at a time, in the order supplied. A
//! document that fails produces a structured error naming the file and
//! every violation inside it.
//!
//! ## Format Assertions
//!
//! `format` keywords (`duration`, `date-time`, `uri`, ...) are enforced
//! rather than treated as annotations. The sync lists carry ISO 8601
//! durations (`Periodicity`, `RetryInterval`) whose shape must hold
//! before the sync daemon consumes them.
//!
//! ## Error Categories
//!
//! Failures split into two categories with distinct message phrasing:
//! schema-artifact errors ([`ValidationError::SchemaLoad`],
//! [`ValidationError::SchemaCompile`]) and candidate-document errors
//! ([`ValidationError::DocumentLoad`], [`ValidationError::DocumentInvalid`]).
//! A broken schema aborts a run before any candidate is touched.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use jsonschema::{Draft, Validator};
use serde_json::Value;
use thiserror::Error;

/// Error raised while validating sync-list documents.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// The schema file could not be read or parsed as JSON.
    #[error("error in schema '{path}': {reason}")]
    SchemaLoad {
        /// Path to the schema file.
        path: String,
        /// Reason the schema could not be loaded.
        reason: String,
    },

    /// The schema parsed as JSON but is not a usable Draft 2020-12 schema.
    #[error("error in schema '{path}': {reason}")]
    SchemaCompile {
        /// Path to the schema file.
        path: String,
        /// Reason the validator could not be compiled.
        reason: String,
    },

    /// The candidate file could not be read or parsed as JSON.
    #[error("validation failed for '{path}': {reason}")]
    DocumentLoad {
        /// Path to the candidate that failed to load.
        path: String,
        /// Reason the candidate could not be loaded.
        reason: String,
    },

    /// The candidate parsed but does not conform to the schema.
    #[error("validation failed for '{path}':\n{violations}")]
    DocumentInvalid {
        /// Path to the non-conforming candidate.
        path: String,
        /// Structured list of individual violations.
        violations: Violations,
    },
}

impl ValidationError {
    /// True for the schema-artifact error category.
    ///
    /// Runs report these before any candidate is processed; candidate
    /// errors always name the offending document instead.
    pub fn is_schema_error(&self) -> bool {
        matches!(
            self,
            ValidationError::SchemaLoad { .. } | ValidationError::SchemaCompile { .. }
        )
    }
}

/// A single schema violation with structured context.
#[derive(Debug, Clone)]
pub struct Violation {
    /// JSON Pointer path to the violating field in the document.
    pub instance_path: String,
    /// JSON Pointer path within the schema that triggered the error.
    pub schema_path: String,
    /// Human-readable description of the violation.
    pub message: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.instance_path.is_empty() {
            write!(f, "  (root): {}", self.message)
        } else {
            write!(f, "  {}: {}", self.instance_path, self.message)
        }
    }
}

/// Ordered collection of the violations found in one document.
#[derive(Debug, Clone)]
pub struct Violations {
    violations: Vec<Violation>,
}

impl Violations {
    /// Returns the number of violations.
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// Returns true if there are no violations.
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Returns a slice of all violations.
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Consumes self and returns the inner Vec.
    pub fn into_inner(self) -> Vec<Violation> {
        self.violations
    }
}

impl fmt::Display for Violations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, v) in self.violations.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{v}")?;
        }
        Ok(())
    }
}

/// A compiled sync-list schema, ready to check candidate documents.
///
/// The schema is loaded and compiled at construction time with the
/// Draft 2020-12 dialect and `format` assertions enabled, then reused
/// for every candidate passed to [`validate_file`].
///
/// ## Thread Safety
///
/// `SyncListValidator` is `Send + Sync` — the compiled validator can be
/// shared across threads, though the CLI runner is strictly sequential.
///
/// [`validate_file`]: SyncListValidator::validate_file
pub struct SyncListValidator {
    /// Path the schema was loaded from, kept for error reporting.
    schema_path: PathBuf,
    /// Compiled Draft 2020-12 validator with format assertions enabled.
    validator: Validator,
}

impl fmt::Debug for SyncListValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SyncListValidator")
            .field("schema_path", &self.schema_path)
            .finish_non_exhaustive()
    }
}

impl SyncListValidator {
    /// Load a schema file and compile it into a reusable validator.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::SchemaLoad`] if the file cannot be read
    /// or is not valid JSON, and [`ValidationError::SchemaCompile`] if it
    /// parses but cannot be compiled as a Draft 2020-12 schema.
    pub fn from_file(schema_path: impl AsRef<Path>) -> Result<Self, ValidationError> {
        let schema_path = schema_path.as_ref().to_path_buf();

        let content =
            fs::read_to_string(&schema_path).map_err(|e| ValidationError::SchemaLoad {
                path: schema_path.display().to_string(),
                reason: format!("cannot read file: {e}"),
            })?;

        let schema: Value =
            serde_json::from_str(&content).map_err(|e| ValidationError::SchemaLoad {
                path: schema_path.display().to_string(),
                reason: format!("invalid JSON: {e}"),
            })?;

        let validator = jsonschema::options()
            .with_draft(Draft::Draft202012)
            .should_validate_formats(true)
            .build(&schema)
            .map_err(|e| ValidationError::SchemaCompile {
                path: schema_path.display().to_string(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            schema_path,
            validator,
        })
    }

    /// Returns the path the schema was loaded from.
    pub fn schema_path(&self) -> &Path {
        &self.schema_path
    }

    /// Validate a parsed JSON value, collecting every violation.
    ///
    /// All violations for the document are reported together, in the
    /// order the evaluator encounters them.
    ///
    /// # Errors
    ///
    /// Returns the list of violations if the document does not conform.
    pub fn validate_value(&self, document: &Value) -> Result<(), Violations> {
        let violations: Vec<Violation> = self
            .validator
            .iter_errors(document)
            .map(|e| Violation {
                instance_path: e.instance_path.to_string(),
                schema_path: e.schema_path.to_string(),
                message: e.to_string(),
            })
            .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(Violations { violations })
        }
    }

    /// Load one candidate file and validate it against the compiled schema.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::DocumentLoad`] if the file cannot be
    /// read or is not valid JSON, and [`ValidationError::DocumentInvalid`]
    /// with the full violation list if it does not conform.
    pub fn validate_file(&self, document_path: &Path) -> Result<(), ValidationError> {
        let content =
            fs::read_to_string(document_path).map_err(|e| ValidationError::DocumentLoad {
                path: document_path.display().to_string(),
                reason: format!("cannot read file: {e}"),
            })?;

        let document: Value =
            serde_json::from_str(&content).map_err(|e| ValidationError::DocumentLoad {
                path: document_path.display().to_string(),
                reason: format!("invalid JSON: {e}"),
            })?;

        self.validate_value(&document)
            .map_err(|violations| ValidationError::DocumentInvalid {
                path: document_path.display().to_string(),
                violations,
            })
    }
}
