use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, GERMAN_DONE, run};

const GERMAN_WITH_LEFTOVERS: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<!DOCTYPE TS>
<TS version="2.1" language="de">
<context>
    <name>DevicePanel</name>
    <message>
        <source>Reboot</source>
        <translation>Neustart</translation>
    </message>
    <message>
        <source>Reset Calibration</source>
        <translation type="vanished">Kalibrierung zurücksetzen</translation>
    </message>
</context>
<context>
    <name>OldPanel</name>
    <message>
        <source>Gone</source>
        <translation type="obsolete">Weg</translation>
    </message>
</context>
</TS>
"#;

#[test]
fn test_dry_run_lists_messages() -> Result<()> {
    let test = CliTest::with_catalogs(&[("main_de.ts", GERMAN_WITH_LEFTOVERS)])?;

    let output = run(test.clean_command())?;

    assert_eq!(output.code, 0);
    assert_eq!(
        output.stdout,
        "  - ./translations/main_de.ts:10  DevicePanel::Reset Calibration (vanished)\n\
         \x20 - ./translations/main_de.ts:17  OldPanel::Gone (obsolete)\n\
         Would remove 2 message(s) in 1 file(s):\n\
         \x20 - vanished: 1\n\
         \x20 - obsolete: 1\n\
         Run with --apply to remove these messages.\n"
    );
    // Dry run leaves the file alone.
    assert_eq!(
        test.read_file("translations/main_de.ts")?,
        GERMAN_WITH_LEFTOVERS
    );

    Ok(())
}

#[test]
fn test_apply_removes_messages_and_empty_contexts() -> Result<()> {
    let test = CliTest::with_catalogs(&[("main_de.ts", GERMAN_WITH_LEFTOVERS)])?;

    let mut cmd = test.clean_command();
    cmd.arg("--apply");
    let output = run(cmd)?;

    assert_eq!(output.code, 0);
    insta::assert_snapshot!(output.stdout, @r"
    Removed 2 message(s) from 1 file(s).
      - dropped 1 empty context(s)
    ");

    let content = test.read_file("translations/main_de.ts")?;
    assert!(content.contains("<translation>Neustart</translation>"));
    assert!(!content.contains("Reset Calibration"));
    assert!(!content.contains("OldPanel"));

    // A second run finds nothing left.
    let output = run(test.check_command())?;
    assert_eq!(output.code, 0);
    assert!(output.stdout.contains("no issues found"));

    Ok(())
}

#[test]
fn test_apply_selected_rule() -> Result<()> {
    let test = CliTest::with_catalogs(&[("main_de.ts", GERMAN_WITH_LEFTOVERS)])?;

    let mut cmd = test.clean_command();
    cmd.args(["--apply", "--rules", "obsolete"]);
    let output = run(cmd)?;

    assert_eq!(output.code, 0);
    assert!(output.stdout.starts_with("Removed 1 message(s) from 1 file(s)."));

    let content = test.read_file("translations/main_de.ts")?;
    assert!(content.contains("Reset Calibration"));
    assert!(!content.contains("OldPanel"));

    Ok(())
}

#[test]
fn test_nothing_to_clean() -> Result<()> {
    let test = CliTest::with_catalogs(&[("main_de.ts", GERMAN_DONE)])?;

    let output = run(test.clean_command())?;

    assert_eq!(output.code, 0);
    assert_eq!(output.stdout, "✓ No vanished or obsolete messages found\n");

    Ok(())
}
