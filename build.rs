use std::{env, fs, path::PathBuf, process::Command};

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/refs");
    println!("cargo:rerun-if-env-changed=GENVERSION_CONFIG");

    let git_hash = git_output(&["rev-parse", "--short", "HEAD"]);
    println!("cargo:rustc-env=GENVERSION_BUILD_HASH={git_hash}");

    let git_branch = git_output(&["rev-parse", "--abbrev-ref", "HEAD"]);
    println!("cargo:rustc-env=GENVERSION_BUILD_BRANCH={git_branch}");

    let timestamp = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true);
    println!("cargo:rustc-env=GENVERSION_BUILD_TIMESTAMP={timestamp}");

    let target = env::var("TARGET").unwrap_or_else(|_| "unknown".to_string());
    println!("cargo:rustc-env=GENVERSION_BUILD_TARGET={target}");

    let rustc_version = rustc_version();
    println!("cargo:rustc-env=GENVERSION_BUILD_RUSTC={rustc_version}");

    embed_config();
}

/// Copies the JSON named by `GENVERSION_CONFIG` into `OUT_DIR` so the binary
/// embeds it; an empty object selects every default.
fn embed_config() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("OUT_DIR is set by cargo"));
    let dest = out_dir.join("genversion.json");

    let contents = match env::var("GENVERSION_CONFIG") {
        Ok(path) if !path.trim().is_empty() => {
            println!("cargo:rerun-if-changed={path}");
            fs::read_to_string(&path)
                .unwrap_or_else(|err| panic!("cannot read GENVERSION_CONFIG `{path}`: {err}"))
        }
        _ => "{}".to_string(),
    };

    fs::write(&dest, contents).expect("write embedded configuration");
}

fn git_output(args: &[&str]) -> String {
    Command::new("git")
        .args(args)
        .output()
        .ok()
        .and_then(|output| {
            if output.status.success() {
                String::from_utf8(output.stdout).ok()
            } else {
                None
            }
        })
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "unknown".to_string())
}

fn rustc_version() -> String {
    let rustc = env::var("RUSTC").unwrap_or_else(|_| "rustc".to_string());
    Command::new(rustc)
        .arg("--version")
        .output()
        .ok()
        .and_then(|output| {
            if output.status.success() {
                String::from_utf8(output.stdout).ok()
            } else {
                None
            }
        })
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}
