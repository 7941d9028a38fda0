use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;

use crate::CliTest;

#[test]
fn test_dump_default_domain() -> Result<()> {
    let test = CliTest::german()?;

    let mut cmd = test.dump_command();
    cmd.args(["--language", "de"]);

    assert_cmd_snapshot!(cmd, @r#"
    success: true
    exit_code: 0
    ----- stdout -----
    {
      "": "Language: de\nContent-Type: text/plain; charset=UTF-8\n",
      "Hack the planet!": "Hacke den Planeten!",
      "Untranslated": ""
    }

    ----- stderr -----
    "#);
    Ok(())
}

#[test]
fn test_dump_keys_are_sorted() -> Result<()> {
    let test = CliTest::german()?;
    test.write_file(
        "translations/de/help.po",
        "msgid \"b\"\nmsgstr \"B\"\n\nmsgid \"a\"\nmsgstr \"A\"\n",
    )?;

    let mut cmd = test.dump_command();
    cmd.args(["--domain", "help", "--language", "de"]);

    assert_cmd_snapshot!(cmd, @r#"
    success: true
    exit_code: 0
    ----- stdout -----
    {
      "a": "A",
      "b": "B"
    }

    ----- stderr -----
    "#);
    Ok(())
}

#[test]
fn test_dump_rejects_malformed_catalog() -> Result<()> {
    let test = CliTest::with_file(
        "translations/de/messages.po",
        "\"\"\nmsgid \"a\"\nmsgstr \"b\"\n",
    )?;

    let mut cmd = test.dump_command();
    cmd.args(["--language", "de"]);

    assert_cmd_snapshot!(cmd, @r#"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    error: unexpected line 1: '""'
    "#);
    Ok(())
}
