use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, GERMAN_DONE, KOREAN_DONE, run};

const GERMAN_WITH_ISSUES: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<!DOCTYPE TS>
<TS version="2.1" language="de">
<context>
    <name>Setup</name>
    <message>
        <source>Step %1 of %2</source>
        <translation>Schritt %1</translation>
    </message>
    <message>
        <source>Continue</source>
        <translation type="unfinished"></translation>
    </message>
    <message>
        <source>Old Button</source>
        <translation type="vanished">Alter Knopf</translation>
    </message>
</context>
</TS>
"#;

#[test]
fn test_clean_catalogs() -> Result<()> {
    let test = CliTest::with_catalogs(&[("main_de.ts", GERMAN_DONE), ("main_ko.ts", KOREAN_DONE)])?;

    let output = run(test.check_command())?;

    assert_eq!(output.code, 0);
    assert_eq!(
        output.stdout,
        "✓ Checked 2 catalog files - no issues found\n"
    );

    Ok(())
}

#[test]
fn test_reports_issues() -> Result<()> {
    let test = CliTest::with_catalogs(&[("main_de.ts", GERMAN_WITH_ISSUES)])?;

    let output = run(test.check_command())?;

    assert_eq!(output.code, 1);
    let stdout = &output.stdout;
    assert!(stdout.contains("error: \"Setup::Step %1 of %2\"  placeholder-mismatch\n"));
    assert!(stdout.contains("  --> ./translations/main_de.ts:6:5\n"));
    assert!(stdout.contains(" 6 |     <message>\n"));
    assert!(stdout.contains("note: expected [%1, %2], found [%1] in de: \"Schritt %1\""));
    assert!(stdout.contains("warning: \"Setup::Continue\"  unfinished\n"));
    assert!(stdout.contains("note: not translated in de"));
    assert!(stdout.contains("warning: \"Setup::Old Button\"  vanished\n"));
    assert!(stdout.ends_with("✘ 3 problems (1 error, 2 warnings)\n"));

    // Issues are listed in file order.
    let placeholder = stdout.find("Step %1 of %2").unwrap();
    let unfinished = stdout.find("Setup::Continue").unwrap();
    let vanished = stdout.find("Setup::Old Button").unwrap();
    assert!(placeholder < unfinished && unfinished < vanished);

    Ok(())
}

#[test]
fn test_selected_rules_warnings_only() -> Result<()> {
    let test = CliTest::with_catalogs(&[("main_de.ts", GERMAN_WITH_ISSUES)])?;

    let mut cmd = test.check_command();
    cmd.args(["unfinished", "vanished"]);
    let output = run(cmd)?;

    assert_eq!(output.code, 0);
    assert!(!output.stdout.contains("placeholder-mismatch"));
    assert!(output.stdout.contains("2 problems (0 errors, 2 warnings)"));

    Ok(())
}

#[test]
fn test_out_of_sync_between_catalogs() -> Result<()> {
    let korean_missing = KOREAN_DONE.replace(
        r#"    <message>
        <location line="+6"/>
        <source>Power Off</source>
        <translation>전원 끄기</translation>
    </message>
"#,
        "",
    );
    let test = CliTest::with_catalogs(&[
        ("main_de.ts", GERMAN_DONE),
        ("main_ko.ts", &korean_missing),
    ])?;

    let mut cmd = test.check_command();
    cmd.arg("out-of-sync");
    let output = run(cmd)?;

    assert_eq!(output.code, 0);
    assert!(output.stdout.contains("warning: \"DevicePanel::Power Off\"  out-of-sync"));
    assert!(output.stdout.contains("--> ./translations/main_de.ts:11:5"));
    assert!(output.stdout.contains("note: missing in: ko_KR"));

    Ok(())
}

#[test]
fn test_parse_error() -> Result<()> {
    let test = CliTest::with_catalogs(&[
        ("main_de.ts", GERMAN_DONE),
        ("main_fr.ts", "<html></html>\n"),
    ])?;

    let output = run(test.check_command())?;

    assert_eq!(output.code, 1);
    assert!(output.stdout.contains(
        "error: \"./translations/main_fr.ts: root element is <html>, expected <TS>\"  parse-error"
    ));
    assert!(output.stdout.contains("  --> ./translations/main_fr.ts\n"));
    // Reported once, as an issue.
    assert_eq!(output.stdout.matches("main_fr.ts").count(), 2);
    assert!(!output.stderr.contains("main_fr.ts"));

    Ok(())
}

#[test]
fn test_missing_translations_dir() -> Result<()> {
    let test = CliTest::new()?;

    let output = run(test.check_command())?;

    assert_eq!(output.code, 2);
    assert!(output.stderr.contains("Translations directory not found"));

    Ok(())
}

#[test]
fn test_config_translations_root_and_ignored_contexts() -> Result<()> {
    let test = CliTest::with_file("i18n/main_de.ts", GERMAN_WITH_ISSUES)?;
    test.write_file(
        ".tscatrc.json",
        r#"{
  "translationsRoot": "./i18n",
  "ignoreContexts": ["Setup"]
}"#,
    )?;

    let output = run(test.check_command())?;

    assert_eq!(output.code, 0);
    assert_eq!(
        output.stdout,
        "✓ Checked 1 catalog file - no issues found\n"
    );

    Ok(())
}

#[test]
fn test_translations_root_flag_overrides_config() -> Result<()> {
    let test = CliTest::with_file("other/main_de.ts", GERMAN_DONE)?;
    test.write_file(".tscatrc.json", r#"{ "translationsRoot": "./missing" }"#)?;

    let mut cmd = test.check_command();
    cmd.args(["--translations-root", "other"]);
    let output = run(cmd)?;

    assert_eq!(output.code, 0);
    assert!(output.stdout.contains("Checked 1 catalog file"));

    Ok(())
}

#[test]
fn test_help() -> Result<()> {
    let test = CliTest::new()?;

    let mut cmd = test.command();
    cmd.arg("--help");
    let output = run(cmd)?;

    assert_eq!(output.code, 0);
    for command in ["check", "clean", "stats", "lookup", "init", "serve"] {
        assert!(output.stdout.contains(command), "missing {command}");
    }

    Ok(())
}
