use anyhow::Result;

use crate::{CliTest, run};

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = run(test.command().arg("init"))?;

    assert_eq!(output.status_code, Some(0));
    assert!(output.stdout.contains("Created .docsyncrc.json"));

    let config = test.read_file(".docsyncrc.json")?;
    assert!(config.contains("sourceRoot"));
    assert!(config.contains("_apidoc.js"));
    Ok(())
}

#[test]
fn test_init_refuses_to_overwrite() -> Result<()> {
    let test = CliTest::with_file(".docsyncrc.json", "{}")?;

    let output = run(test.command().arg("init"))?;

    assert_eq!(output.status_code, Some(2));
    assert!(output.stderr.contains("already exists"));
    assert_eq!(test.read_file(".docsyncrc.json")?, "{}");
    Ok(())
}

#[test]
fn test_no_command_prints_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = run(&mut test.command())?;

    assert_eq!(output.status_code, Some(0));
    assert!(output.stdout.contains("Usage"));
    Ok(())
}
