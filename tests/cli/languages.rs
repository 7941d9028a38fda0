use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;

use crate::CliTest;

#[test]
fn test_languages_sorted_and_visible_only() -> Result<()> {
    let test = CliTest::new()?;
    test.create_dir("translations/fr")?;
    test.create_dir("translations/en-GB")?;
    test.create_dir("translations/de")?;
    test.create_dir("translations/.cache")?;
    test.write_file("translations/README", "not a language")?;

    assert_cmd_snapshot!(test.languages_command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    de
    en-GB
    fr

    ----- stderr -----
    ");
    Ok(())
}

#[test]
fn test_languages_with_root_flag() -> Result<()> {
    let test = CliTest::new()?;
    test.create_dir("i18n/nl")?;

    let mut cmd = test.languages_command();
    cmd.args(["--root", "i18n"]);

    assert_cmd_snapshot!(cmd, @r"
    success: true
    exit_code: 0
    ----- stdout -----
    nl

    ----- stderr -----
    ");
    Ok(())
}

#[test]
fn test_languages_uses_config_root() -> Result<()> {
    let test = CliTest::with_file(".poglotrc.json", r#"{ "translationsRoot": "locales" }"#)?;
    test.create_dir("locales/ja")?;

    assert_cmd_snapshot!(test.languages_command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ja

    ----- stderr -----
    ");
    Ok(())
}

#[test]
fn test_languages_missing_root() -> Result<()> {
    let test = CliTest::new()?;
    let root = test.root().display().to_string();

    insta::with_settings!({filters => vec![(root.as_str(), "[ROOT]")]}, {
        assert_cmd_snapshot!(test.languages_command(), @r"
        success: false
        exit_code: 2
        ----- stdout -----

        ----- stderr -----
        error: Cannot use translations root '[ROOT]/translations': Translations root [ROOT]/translations must be a directory
        ");
    });
    Ok(())
}
