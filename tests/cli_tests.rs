use assert_cmd::Command;
use predicates::prelude::*;
use std::error::Error;

#[test]
fn binary_writes_version_info_to_stdout() -> Result<(), Box<dyn Error>> {
    let version = format!(r#"VERSION=\"Genversion-{}\""#, env!("CARGO_PKG_VERSION"));

    let mut cmd = Command::cargo_bin("genversion")?;
    cmd.env_remove("RUST_LOG")
        .assert()
        .success()
        .stdout(
            predicate::str::starts_with(
                "/* version.c - generated by genversion.c - DO NOT EDIT! */\n",
            )
            .and(predicate::str::contains("const char * const version_info[] = {"))
            .and(predicate::str::contains("  \"build: "))
            .and(predicate::str::contains(version))
            .and(predicate::str::contains("  \"paths: "))
            .and(predicate::str::contains("  \"defs:  "))
            .and(predicate::str::ends_with("  0\n};\n")),
        )
        .stderr(predicate::str::contains("Error:").not());
    Ok(())
}

#[test]
fn binary_output_is_stable_across_runs() -> Result<(), Box<dyn Error>> {
    let first = Command::cargo_bin("genversion")?.output()?;
    let second = Command::cargo_bin("genversion")?.output()?;

    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
    Ok(())
}
