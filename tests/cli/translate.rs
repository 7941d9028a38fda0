use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;
use pretty_assertions::assert_eq;

use crate::{BASIC_PO, CliTest, stderr, stdout};

#[test]
fn test_translate_with_language_flag() -> Result<()> {
    let test = CliTest::german()?;

    let mut cmd = test.translate_command();
    cmd.args(["Hack the planet!", "Crash and burn"])
        .args(["--language", "de"]);

    assert_cmd_snapshot!(cmd, @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Hacke den Planeten!
    Crash and burn

    ----- stderr -----
    ");
    Ok(())
}

#[test]
fn test_translate_blank_translation_prints_empty_line() -> Result<()> {
    let test = CliTest::german()?;

    let output = test
        .translate_command()
        .args(["Untranslated", "Hack the planet!", "--language", "de"])
        .output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "\nHacke den Planeten!\n");
    Ok(())
}

#[test]
fn test_translate_with_language_env() -> Result<()> {
    let test = CliTest::german()?;

    let mut cmd = test.translate_command();
    cmd.arg("Hack the planet!").env("POGLOT_LANGUAGE", "de");

    assert_cmd_snapshot!(cmd, @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Hacke den Planeten!

    ----- stderr -----
    ");
    Ok(())
}

#[test]
fn test_translate_with_config_language_and_domain() -> Result<()> {
    let test = CliTest::with_file(
        ".poglotrc.json",
        r#"{ "language": "de", "defaultDomain": "app" }"#,
    )?;
    test.write_file("translations/de/app.po", BASIC_PO)?;

    let mut cmd = test.translate_command();
    cmd.arg("Hack the planet!");

    assert_cmd_snapshot!(cmd, @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Hacke den Planeten!

    ----- stderr -----
    ");
    Ok(())
}

#[test]
fn test_translate_specific_domain() -> Result<()> {
    let test = CliTest::german()?;
    test.write_file(
        "translations/de/help.po",
        "msgid \"Help\"\nmsgstr \"\"\n\"Hil\"\n\"fe\"\n",
    )?;

    let mut cmd = test.translate_command();
    cmd.args(["Help", "--domain", "help", "--language", "de"]);

    assert_cmd_snapshot!(cmd, @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Hilfe

    ----- stderr -----
    ");
    Ok(())
}

#[test]
fn test_translate_unknown_domain_fails() -> Result<()> {
    let test = CliTest::german()?;

    let mut cmd = test.translate_command();
    cmd.args(["Help", "--domain", "other", "--language", "de"]);

    assert_cmd_snapshot!(cmd, @r"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    error: Domain other does not exist in language de
    ");
    Ok(())
}

#[test]
fn test_translate_unknown_language_fails() -> Result<()> {
    let test = CliTest::german()?;

    let mut cmd = test.translate_command();
    cmd.args(["Hack the planet!", "--language", "fr"]);

    assert_cmd_snapshot!(cmd, @r"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    error: Language fr is not available
    ");
    Ok(())
}

#[test]
fn test_translate_without_language_fails() -> Result<()> {
    let test = CliTest::german()?;

    let mut cmd = test.translate_command();
    cmd.arg("Hack the planet!");

    assert_cmd_snapshot!(cmd, @r"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    error: No language selected.
    Hint: Pass --language or set 'language' in .poglotrc.json.
    ");
    Ok(())
}

#[test]
fn test_translate_reports_broken_catalog() -> Result<()> {
    let test = CliTest::with_file(
        "translations/de/messages.po",
        "msgid \"a\"\nmsgstr \"\\a\"\n",
    )?;

    let mut cmd = test.translate_command();
    cmd.args(["a", "--language", "de"]);

    assert_cmd_snapshot!(cmd, @r"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    error: unknown escape char 'a' on line 2
    ");
    Ok(())
}

#[test]
fn test_verbose_logs_domain_loads() -> Result<()> {
    let test = CliTest::german()?;

    let output = test
        .translate_command()
        .args(["Hack the planet!", "--language", "de", "--verbose"])
        .output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "Hacke den Planeten!\n");
    assert!(
        stderr(&output).contains("domain loaded"),
        "stderr: {}",
        stderr(&output)
    );
    Ok(())
}
