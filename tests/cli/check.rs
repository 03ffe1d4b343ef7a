use anyhow::Result;
use insta::assert_snapshot;
use insta_cmd::assert_cmd_snapshot;

use crate::CliTest;

/// Project where every used string is translated in every language.
fn synced_project() -> Result<CliTest> {
    let test = CliTest::with_file(
        "index.html",
        r#"<!DOCTYPE html>
<html>
  <h1 class="ds-i18n">Welcome</h1>
  <!-- <p class="ds-i18n">Old banner</p> -->
</html>
"#,
    )?;
    test.write_file(
        "js/app.js",
        r#"// l('Commented out')
$(l('.hide')).show();
alert(l("Save"));
"#,
    )?;
    test.write_file(
        "lang/es.json",
        r#"{".title": "Herramientas", "Welcome": "Bienvenido", "Save": "Guardar", "Fortnite": "Fortnite", "": ""}"#,
    )?;
    test.write_file(
        "lang/fr.json",
        r#"{"Welcome": "Bienvenue", "Save": "Enregistrer"}"#,
    )?;
    Ok(test)
}

#[test]
fn test_in_sync() -> Result<()> {
    let test = synced_project()?;
    let output = test.run(test.command())?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("Found 1 HTML files\n"));
    assert!(output.stdout.contains("Found 1 JavaScript files\n"));
    assert!(output.stdout.contains("Found 1 strings with ds-i18n class in HTML files\n"));
    assert!(output.stdout.contains("Found 2 strings in l() function calls\n"));
    assert!(output.stdout.contains("Excluded 1 non-translatable strings"));
    assert!(output.stdout.contains("Found 2 language files\n"));
    assert!(output.stdout.ends_with("✓ All translations are in sync!\n"));
    assert!(output.stderr.is_empty());

    Ok(())
}

#[test]
fn test_missing_in_one_language() -> Result<()> {
    let test = synced_project()?;
    test.write_file("lang/fr.json", r#"{"Welcome": "Bienvenue"}"#)?;

    let output = test.run(test.command())?;

    assert_eq!(output.code, Some(1));
    assert!(output.stdout.contains("MISSING TRANSLATIONS (1 strings)"));
    assert!(output.stdout.contains(
        "  - \"Save\"\n    --> js/app.js:3:7\n    Missing from: fr\n"
    ));
    assert!(output.stdout.contains("✓ No unused translations found!"));
    assert!(output.stdout.ends_with("✘ Translation files need updates!\n"));

    Ok(())
}

#[test]
fn test_missing_everywhere_and_unused() -> Result<()> {
    let test = synced_project()?;
    test.write_file(
        "templates/modal.html",
        r#"<button class="ds-i18n">Cancel</button>"#,
    )?;
    test.write_file(
        "lang/fr.json",
        r#"{"Welcome": "Bienvenue", "Save": "Enregistrer", "Obsolete": "Obsolète"}"#,
    )?;

    let output = test.run(test.command())?;

    assert_eq!(output.code, Some(1));
    assert!(output.stdout.contains(
        "  - \"Cancel\"\n    --> templates/modal.html:1:1\n    Missing from: ALL languages (2)\n"
    ));
    assert!(output.stdout.contains("UNUSED TRANSLATIONS (1 strings)"));
    assert!(output.stdout.contains("  - \"Obsolete\"\n"));
    assert!(output.stdout.contains("Missing translations: 1\n"));
    assert!(output.stdout.contains("Unused translations: 1\n"));

    Ok(())
}

#[test]
fn test_compact_output() -> Result<()> {
    let test = synced_project()?;
    test.write_file("lang/fr.json", r#"{"Welcome": "Bienvenue"}"#)?;

    let mut cmd = test.command();
    cmd.arg("--compact");
    let output = test.run(cmd)?;

    assert_eq!(output.code, Some(1));
    assert!(output.stdout.contains("  - \"Save\"\n\n"));
    assert!(!output.stdout.contains("Missing from:"));

    Ok(())
}

#[test]
fn test_verbose_lists_excluded_strings() -> Result<()> {
    let test = synced_project()?;

    let mut cmd = test.command();
    cmd.arg("-v");
    let output = test.run(cmd)?;

    assert!(output.stdout.contains("  - \".hide\"\n"));
    assert!(
        output
            .stderr
            .contains("Note: No .transcheckrc.json found, using default configuration")
    );

    Ok(())
}

#[test]
fn test_json_output() -> Result<()> {
    let test = CliTest::with_file("index.html", r#"<b class="ds-i18n">Cancel</b>"#)?;
    test.write_file(
        ".transcheckrc.json",
        r#"{ "unusedAllowList": ["Fortnite"] }"#,
    )?;
    test.write_file("lang/es.json", r#"{"Obsolete": "Viejo", "Fortnite": ""}"#)?;

    let mut cmd = test.command();
    cmd.arg("--json");
    let output = test.run(cmd)?;

    assert_eq!(output.code, Some(1));
    assert!(output.stderr.is_empty());
    assert_snapshot!(output.stdout, @r#"
    {
      "summary": {
        "total_strings_used": 1,
        "total_translation_keys": 2,
        "total_languages": 1,
        "missing_count": 1,
        "unused_count": 1,
        "excluded_count": 0,
        "whitelisted_count": 1
      },
      "missing_translations": [
        {
          "string": "Cancel",
          "missing_from_languages": [
            "es"
          ],
          "locations": [
            {
              "file": "index.html",
              "line": 1,
              "col": 1
            }
          ]
        }
      ],
      "unused_translations": [
        "Obsolete"
      ],
      "excluded_strings": [],
      "whitelisted_strings": [
        "Fortnite"
      ]
    }
    "#);

    Ok(())
}

#[test]
fn test_excluded_catalog_key_not_unused() -> Result<()> {
    let test = CliTest::with_file("js/app.js", "$(l('.hide')).show(); alert(l('Save'));")?;
    test.write_file("lang/es.json", r#"{"Save": "Guardar", ".hide": ".hide"}"#)?;

    let mut cmd = test.command();
    cmd.arg("--json");
    let output = test.run(cmd)?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("\"unused_translations\": [],\n"));
    assert!(output.stdout.contains("\"excluded_strings\": [\n    \".hide\"\n  ]"));

    Ok(())
}

#[test]
fn test_invalid_catalog_is_skipped() -> Result<()> {
    let test = synced_project()?;
    test.write_file("lang/it.json", r#"{"Save": "Salva",}"#)?;

    let output = test.run(test.command())?;

    assert_eq!(output.code, Some(0));
    assert!(output.stderr.starts_with("warning: lang/it.json: failed to parse JSON"));
    assert!(output.stdout.contains("Found 2 language files\n"));

    Ok(())
}

#[test]
fn test_no_language_files() -> Result<()> {
    let test = CliTest::with_file("index.html", r#"<p class="ds-i18n">Hello</p>"#)?;

    let output = test.run(test.command())?;

    assert_eq!(output.code, Some(1));
    assert!(output.stderr.contains("warning: No language files found in lang"));
    assert!(output.stdout.contains("Missing from: ALL languages (0)"));

    Ok(())
}

#[test]
fn test_lang_dir_override() -> Result<()> {
    let test = CliTest::with_file("index.html", r#"<p class="ds-i18n">Hello</p>"#)?;
    test.write_file("i18n/de.json", r#"{"Hello": "Hallo"}"#)?;

    let mut cmd = test.command();
    cmd.args(["--lang-dir", "i18n"]);
    let output = test.run(cmd)?;

    assert_eq!(output.code, Some(0));

    Ok(())
}

#[test]
fn test_root_argument() -> Result<()> {
    let test = CliTest::with_file("site/index.html", r#"<p class="ds-i18n">Hello</p>"#)?;
    test.write_file("site/lang/de.json", r#"{"Hello": "Hallo"}"#)?;

    let mut cmd = test.command();
    cmd.args(["--root", "site"]);
    let output = test.run(cmd)?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("Found 1 HTML files\n"));

    Ok(())
}

#[test]
fn test_config_ignores() -> Result<()> {
    let test = synced_project()?;
    test.write_file(".transcheckrc.json", r#"{ "ignores": ["js/vendor/**"] }"#)?;
    test.write_file("js/vendor/lib.js", "l('Vendor string');")?;

    let output = test.run(test.command())?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("Found 1 JavaScript files\n"));

    Ok(())
}

#[test]
fn test_invalid_config() -> Result<()> {
    let test = CliTest::with_file(
        ".transcheckrc.json",
        r#"{ "excludePatterns": ["("] }"#,
    )?;

    let output = test.run(test.command())?;

    assert_eq!(output.code, Some(2));
    assert!(output.stdout.is_empty());
    assert!(
        output
            .stderr
            .starts_with("Error: Invalid regex in 'excludePatterns': \"(\"")
    );

    Ok(())
}

#[test]
fn test_missing_root() -> Result<()> {
    let test = CliTest::new()?;

    let mut cmd = test.command();
    cmd.args(["--root", "nowhere"]);

    assert_cmd_snapshot!(cmd, @r"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    Error: Project root not found: nowhere
    ");

    Ok(())
}
