use anyhow::{Context, Result};
use insta_cmd::assert_cmd_snapshot;
use serde_json::Value;

use crate::CliTest;

/// Validates config file structure and default values.
fn assert_config_content(content: &str) -> Result<()> {
    let parsed: Value = serde_json::from_str(content).context("Config should be valid JSON")?;

    for field in [
        "markupPatterns",
        "scriptRoot",
        "langDir",
        "markerClass",
        "translationFunction",
        "reservedKeys",
        "unusedAllowList",
        "excludePatterns",
    ] {
        assert!(
            parsed.get(field).is_some(),
            "Config should have '{}' field",
            field
        );
    }
    assert_eq!(parsed["markerClass"], "ds-i18n");
    assert!(
        content.contains("\n  \"ignores\""),
        "Config should use 2-space indentation"
    );

    Ok(())
}

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.command().arg("--init"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Created ./.transcheckrc.json

    ----- stderr -----
    ");

    assert!(test.root().join(".transcheckrc.json").exists());
    let content = test.read_file(".transcheckrc.json")?;
    assert_config_content(&content)?;

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".transcheckrc.json", "{}")?;

    let output = test.run({
        let mut cmd = test.command();
        cmd.arg("--init");
        cmd
    })?;

    assert_eq!(output.code, Some(1));
    assert_eq!(output.stderr, "Error: ./.transcheckrc.json already exists\n");
    assert_eq!(test.read_file(".transcheckrc.json")?, "{}");

    Ok(())
}

#[test]
fn test_generated_config_is_used() -> Result<()> {
    let test = CliTest::with_file("index.html", r#"<p class="ds-i18n">Hello</p>"#)?;
    test.write_file("lang/de.json", r#"{"Hello": "Hallo"}"#)?;

    let mut init = test.command();
    init.arg("--init");
    assert_eq!(test.run(init)?.code, Some(0));

    let mut check = test.command();
    check.arg("-v");
    let output = test.run(check)?;

    assert_eq!(output.code, Some(0));
    assert!(!output.stderr.contains("using default configuration"));

    Ok(())
}
