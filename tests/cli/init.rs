use anyhow::{Context, Result};
use insta_cmd::assert_cmd_snapshot;
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::CliTest;

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let mut cmd = test.command();
    cmd.arg("init");

    assert_cmd_snapshot!(cmd, @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Created .poglotrc.json

    ----- stderr -----
    ");

    let content = test.read_file(".poglotrc.json")?;
    let parsed: Value = serde_json::from_str(&content).context("Config should be valid JSON")?;
    assert_eq!(parsed["translationsRoot"], "./translations");
    assert_eq!(parsed["defaultDomain"], "messages");
    assert!(parsed.get("language").is_none());

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::with_file(".poglotrc.json", "{}")?;

    let mut cmd = test.command();
    cmd.arg("init");

    assert_cmd_snapshot!(cmd, @r"
    success: false
    exit_code: 1
    ----- stdout -----

    ----- stderr -----
    error: .poglotrc.json already exists
    ");
    assert_eq!(test.read_file(".poglotrc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;
    test.command().arg("init").output()?;
    test.create_dir("translations/de")?;

    assert_cmd_snapshot!(test.languages_command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    de

    ----- stderr -----
    ");

    Ok(())
}
