//! Command implementations.
//!
//! Each command writes its result to the given writer so it can be exercised
//! without a terminal.

use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use common::{AppError, AppResult};
use domain::{User, UserRecord, UserResponse};

use crate::args::{ValidateArgs, VerifyArgs};

/// Path that selects stdin instead of a file
const STDIN_PATH: &str = "-";

/// Outcome of a password check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Valid,
    Invalid,
}

/// Validate a user record and print its public view as JSON.
pub fn validate(args: ValidateArgs, out: &mut impl Write) -> AppResult<()> {
    let user = load_user(&args.file)?;
    tracing::info!(user = %user, user_id = user.user_id(), "User record is valid");

    serde_json::to_writer_pretty(&mut *out, &UserResponse::from(&user))?;
    writeln!(out)?;
    Ok(())
}

/// Check a candidate password against a user record.
pub fn verify(args: VerifyArgs, out: &mut impl Write) -> AppResult<Verdict> {
    let user = load_user(&args.file)?;

    let verdict = if user.is_valid_password(args.password.as_str()) {
        Verdict::Valid
    } else {
        Verdict::Invalid
    };
    tracing::debug!(user = %user, ?verdict, "Password checked");

    match verdict {
        Verdict::Valid => writeln!(out, "valid")?,
        Verdict::Invalid => writeln!(out, "invalid")?,
    }
    Ok(verdict)
}

/// Read and validate a user record from a file or stdin.
fn load_user(path: &Path) -> AppResult<User> {
    let raw = if path.as_os_str() == STDIN_PATH {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        fs::read_to_string(path)?
    };

    if raw.trim().is_empty() {
        return Err(AppError::bad_request("empty user record"));
    }

    let record: UserRecord = serde_json::from_str(&raw)?;
    tracing::debug!(?record, source = %path.display(), "Loaded user record");

    Ok(User::try_from(record)?)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use tempfile::NamedTempFile;

    use super::*;

    fn record_file(json: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();
        file
    }

    const ALICE: &str = r#"{
        "user_id": 3,
        "username": "alice",
        "password": "secret",
        "first_name": "Alice",
        "last_name": "Smith"
    }"#;

    #[test]
    fn test_validate_prints_response_without_password() {
        let file = record_file(ALICE);
        let mut out: Vec<u8> = Vec::new();

        validate(
            ValidateArgs {
                file: file.path().to_path_buf(),
            },
            &mut out,
        )
        .unwrap();

        let printed: UserResponse = serde_json::from_slice(&out).unwrap();
        assert_eq!(printed.user_id, 3);
        assert_eq!(printed.username, "alice");
        assert!(!printed.administrator);
        assert!(!String::from_utf8(out).unwrap().contains("secret"));
    }

    #[test]
    fn test_validate_rejects_short_password() {
        let file = record_file(
            r#"{"username":"alice","password":"abcd","first_name":"Alice","last_name":"Smith"}"#,
        );
        let mut out: Vec<u8> = Vec::new();

        let err = validate(
            ValidateArgs {
                file: file.path().to_path_buf(),
            },
            &mut out,
        )
        .unwrap_err();

        assert_eq!(err.code(), "VALIDATION_ERROR");
        assert!(out.is_empty());
    }

    #[test]
    fn test_validate_missing_field_is_validation_error() {
        let file = record_file(r#"{"username":"alice","password":"secret","last_name":"Smith"}"#);

        let err = validate(
            ValidateArgs {
                file: file.path().to_path_buf(),
            },
            &mut io::sink(),
        )
        .unwrap_err();

        assert_eq!(err.user_message(), "First name must be provided");
    }

    #[test]
    fn test_validate_malformed_json() {
        let file = record_file("{\"username\": ");

        let err = validate(
            ValidateArgs {
                file: file.path().to_path_buf(),
            },
            &mut io::sink(),
        )
        .unwrap_err();

        assert_eq!(err.code(), "BAD_REQUEST");
    }

    #[test]
    fn test_validate_empty_file() {
        let file = record_file("  \n");

        let err = validate(
            ValidateArgs {
                file: file.path().to_path_buf(),
            },
            &mut io::sink(),
        )
        .unwrap_err();

        assert_eq!(err.code(), "BAD_REQUEST");
    }

    #[test]
    fn test_validate_missing_file() {
        let err = validate(
            ValidateArgs {
                file: PathBuf::from("/nonexistent/user.json"),
            },
            &mut io::sink(),
        )
        .unwrap_err();

        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn test_verify_password() {
        let file = record_file(ALICE);

        let mut out: Vec<u8> = Vec::new();
        let verdict = verify(
            VerifyArgs {
                file: file.path().to_path_buf(),
                password: "secret".to_string(),
            },
            &mut out,
        )
        .unwrap();
        assert_eq!(verdict, Verdict::Valid);
        assert_eq!(out, b"valid\n");

        let mut out: Vec<u8> = Vec::new();
        let verdict = verify(
            VerifyArgs {
                file: file.path().to_path_buf(),
                password: "SECRET".to_string(),
            },
            &mut out,
        )
        .unwrap();
        assert_eq!(verdict, Verdict::Invalid);
        assert_eq!(out, b"invalid\n");
    }
}
