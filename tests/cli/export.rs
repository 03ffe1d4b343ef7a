use anyhow::Result;
use insta::assert_snapshot;

use crate::CliTest;

#[test]
fn test_export_creates_base_catalog() -> Result<()> {
    let test = CliTest::with_file(
        "index.html",
        r#"<h1 class="ds-i18n">Welcome</h1>
<p class="ds-i18n">Press <b>Start</b> to begin</p>"#,
    )?;
    test.write_file("js/app.js", "alert(l('Saved')); $(l('.hide')).hide();")?;

    let output = test.run(test.export_command())?;

    assert_eq!(output.code, Some(0));
    assert!(
        output
            .stdout
            .contains("✓ Exported 3 strings + 2 reserved keys to lang/base.json\n")
    );
    assert!(output.stdout.contains("   Total keys in file: 6 (including empty key)\n"));
    assert!(output.stdout.ends_with("   Added 5 new strings\n"));
    assert!(!output.stdout.contains("RESULTS"));

    assert_snapshot!(test.read_file("lang/base.json")?, @r#"
    {
      ".authorMsg": "",
      ".title": "",
      "Press <b>Start</b> to begin": "",
      "Saved": "",
      "Welcome": "",
      "": ""
    }
    "#);

    Ok(())
}

#[test]
fn test_export_preserves_values_and_is_idempotent() -> Result<()> {
    let test = CliTest::with_file("index.html", r#"<b class="ds-i18n">Save</b>"#)?;
    test.write_file(
        "lang/base.json",
        r#"{".title": "Tester", "Save": "Save", "Obsolete": "", "": ""}"#,
    )?;

    let mut cmd = test.export_command();
    cmd.arg("-v");
    let first = test.run(cmd)?;
    assert_eq!(first.code, Some(0));
    assert!(first.stdout.ends_with("   + Added: \".authorMsg\"\n"));

    let written = test.read_file("lang/base.json")?;
    assert!(written.contains("\".title\": \"Tester\""));
    assert!(written.contains("\"Save\": \"Save\""));
    assert!(!written.contains("Obsolete"));

    let second = test.run(test.export_command())?;
    assert_eq!(second.code, Some(0));
    assert!(!second.stdout.contains("Added"));
    assert_eq!(test.read_file("lang/base.json")?, written);

    Ok(())
}

#[test]
fn test_export_json_summary() -> Result<()> {
    let test = CliTest::with_file("index.html", r#"<b class="ds-i18n">Save</b>"#)?;

    let mut cmd = test.export_command();
    cmd.arg("--json");
    let output = test.run(cmd)?;

    assert_eq!(output.code, Some(0));
    assert_snapshot!(output.stdout, @r#"
    {
      "path": "lang/base.json",
      "exported_count": 1,
      "reserved_count": 2,
      "total_keys": 4,
      "added": [
        ".authorMsg",
        ".title",
        "Save"
      ],
      "excluded_count": 0
    }
    "#);

    Ok(())
}

#[test]
fn test_export_write_failure() -> Result<()> {
    let test = CliTest::with_file("index.html", r#"<b class="ds-i18n">Save</b>"#)?;
    test.write_file("lang/base.json/keep", "")?;

    let output = test.run(test.export_command())?;

    assert_eq!(output.code, Some(1));
    assert!(output.stdout.contains("✘ Failed to export to lang/base.json"));
    assert!(output.stderr.starts_with("warning: lang/base.json: failed to read file"));

    Ok(())
}
