use std::process::{Command, Output};

use tempfile::TempDir;

const CREDENTIAL_VARS: [&str; 4] = [
    "UBS_AUTH_TOKEN",
    "UBS_X_UBS_DATA",
    "UBS_COOKIES_HDR",
    "UBS_USER_AGENT",
];

fn seogenius(dir: &TempDir, args: &[&str], env: &[(&str, &str)]) -> std::io::Result<Output> {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_seogenius"));
    cmd.current_dir(dir.path()).args(args);
    for name in ["UBS_LANGUAGE", "UBS_LOC_ID", "UBS_LIMIT", "UBS_SORTBY", "RUST_LOG"] {
        cmd.env_remove(name);
    }
    // Empty values shadow anything a .env file could supply.
    for name in CREDENTIAL_VARS {
        cmd.env(name, "");
    }
    for (name, value) in env {
        cmd.env(name, value);
    }
    cmd.output()
}

fn csv_files(dir: &TempDir) -> std::io::Result<usize> {
    Ok(std::fs::read_dir(dir.path())?
        .filter_map(Result::ok)
        .filter(|e| e.path().extension().is_some_and(|ext| ext == "csv"))
        .count())
}

#[test]
fn test_missing_keyword_exits_with_usage() -> std::io::Result<()> {
    let dir = TempDir::new()?;
    let output = seogenius(&dir, &[], &[])?;

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Usage"), "stderr was: {stderr}");
    assert_eq!(csv_files(&dir)?, 0);
    Ok(())
}

#[test]
fn test_missing_credentials_fail_before_request() -> std::io::Result<()> {
    let dir = TempDir::new()?;
    let output = seogenius(&dir, &["seo"], &[])?;

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("UBS_AUTH_TOKEN"), "stderr was: {stderr}");
    assert_eq!(csv_files(&dir)?, 0);
    Ok(())
}

#[test]
fn test_single_missing_credential_is_named() -> std::io::Result<()> {
    let dir = TempDir::new()?;
    let output = seogenius(
        &dir,
        &["seo"],
        &[
            ("UBS_AUTH_TOKEN", "token"),
            ("UBS_X_UBS_DATA", "data"),
            ("UBS_USER_AGENT", "Mozilla/5.0"),
        ],
    )?;

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("UBS_COOKIES_HDR"), "stderr was: {stderr}");
    assert!(output.stdout.is_empty());
    assert_eq!(csv_files(&dir)?, 0);
    Ok(())
}

#[test]
fn test_invalid_limit_is_a_config_error() -> std::io::Result<()> {
    let dir = TempDir::new()?;
    let output = seogenius(&dir, &["seo"], &[("UBS_LIMIT", "lots")])?;

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("UBS_LIMIT"), "stderr was: {stderr}");
    Ok(())
}
