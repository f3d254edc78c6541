use anyhow::Result;
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::{CliTest, run};

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let mut cmd = test.command();
    cmd.arg("init");
    let output = run(cmd)?;

    assert_eq!(output.code, 0);
    assert_eq!(output.stdout, "✓ Created .tscatrc.json\n");
    assert!(test.root().join(".tscatrc.json").exists());

    let config: Value = serde_json::from_str(&test.read_file(".tscatrc.json")?)?;
    assert_eq!(config["translationsRoot"], "./translations");
    assert_eq!(config["includeUnfinished"], true);

    Ok(())
}

#[test]
fn test_init_refuses_to_overwrite() -> Result<()> {
    let test = CliTest::with_file(".tscatrc.json", "{}")?;

    let mut cmd = test.command();
    cmd.arg("init");
    let output = run(cmd)?;

    assert_eq!(output.code, 1);
    assert!(output.stderr.contains(".tscatrc.json already exists"));
    assert_eq!(test.read_file(".tscatrc.json")?, "{}");

    Ok(())
}
