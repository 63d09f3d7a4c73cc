//! # Validate Command
//!
//! Fail-fast validation of sync-list config files against the schema.
//!
//! The schema is compiled once; candidates are then checked strictly in
//! the order given on the command line. The first failure — unreadable
//! file, malformed JSON, or schema violation — aborts the run, so later
//! candidates are never opened.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use dsync_schema::SyncListValidator;

/// Arguments for sync-list validation.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// The sync-list JSON Schema file (Draft 2020-12).
    #[arg(short = 's', long = "schema")]
    pub schema: PathBuf,

    /// The sync-list JSON config files to validate, in order.
    #[arg(short = 'f', long = "json-files", num_args = 1.., required = true)]
    pub json_files: Vec<PathBuf>,
}

/// Validate every config file against the schema, stopping at the first
/// failure. Prints one success line per validated file.
pub fn run(args: &ValidateArgs) -> Result<()> {
    let validator = SyncListValidator::from_file(&args.schema)?;
    tracing::debug!(schema = %validator.schema_path().display(), "schema compiled");

    for path in &args.json_files {
        validator.validate_file(path)?;
        println!("Schema validation success for {}", path.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser, Debug)]
    #[command(name = "dsync")]
    struct TestCli {
        #[command(flatten)]
        args: ValidateArgs,
    }

    #[test]
    fn parse_long_forms() {
        let cli =
            TestCli::try_parse_from(["dsync", "--schema", "s.json", "--json-files", "a.json"])
                .unwrap();
        assert_eq!(cli.args.schema, PathBuf::from("s.json"));
        assert_eq!(cli.args.json_files, vec![PathBuf::from("a.json")]);
    }

    #[test]
    fn parse_short_forms_with_multiple_files() {
        let cli = TestCli::try_parse_from(["dsync", "-s", "s.json", "-f", "a.json", "b.json"])
            .unwrap();
        assert_eq!(
            cli.args.json_files,
            vec![PathBuf::from("a.json"), PathBuf::from("b.json")]
        );
    }

    #[test]
    fn file_order_is_preserved() {
        let cli = TestCli::try_parse_from([
            "dsync", "-s", "s.json", "-f", "z.json", "a.json", "m.json",
        ])
        .unwrap();
        let files: Vec<_> = cli
            .args
            .json_files
            .iter()
            .map(|p| p.display().to_string())
            .collect();
        assert_eq!(files, ["z.json", "a.json", "m.json"]);
    }

    #[test]
    fn schema_is_required() {
        TestCli::try_parse_from(["dsync", "-f", "a.json"]).unwrap_err();
    }

    #[test]
    fn json_files_are_required() {
        TestCli::try_parse_from(["dsync", "-s", "s.json"]).unwrap_err();
    }
}
