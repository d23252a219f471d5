#![allow(dead_code)]

use genversion::generator::generate_from_config;
use genversion_config::{Config, FlagTable};
use once_cell::sync::Lazy;

/// Flags of a typical configured build, shared by the integration suites.
pub static CONFIGURED_FLAGS: Lazy<FlagTable> = Lazy::new(|| {
    FlagTable::new()
        .with("VERSION", "3.5.1")
        .with("BUILT_DATE", "2026-10-19T08:00:00Z")
        .with("BUILT_MACH", "x86_64-unknown-linux-gnu")
        .with("BUILT_REV", "4f2c9e1")
        .with("BUILT_BRANCH", "main")
        .with("CC", "gcc -O2 -D_GNU_SOURCE")
        .with("bindir", "/usr/local/bin")
        .with("sbindir", "/usr/local/sbin")
        .with("libexecdir", "/usr/local/libexec")
        .with("mandir", "/usr/local/share/man")
        .with("TMPDIR", "/tmp/genversion")
        .with("CONFIG_DIR", "/usr/local/etc/genversion")
        .with("DUMP", "/sbin/dump")
        .with("RESTORE", "/sbin/restore")
        .with("GNUTAR", "/bin/tar")
        .with("COMPRESS_PATH", "/usr/bin/gzip")
        .with("UNCOMPRESS_PATH", "/usr/bin/gzip")
        .with(
            "GNUTAR_LISTED_INCREMENTAL_DIR",
            "/usr/local/var/genversion/gnutar-lists",
        )
        .with("DEFAULT_SERVER", "backup.example.com")
        .with("DEFAULT_CONFIG", "DailySet1")
        .with("DEFAULT_TAPE_SERVER", "backup.example.com")
        .with("HAVE_MMAP", true)
        .with("HAVE_STRERROR", true)
        .with("HAVE_STRSTR", true)
        .with("HAVE_SYSVSHM", true)
        .with("USE_POSIX_FCNTL", true)
        .with("USE_FLOCK", false)
        .with("ASSERTIONS", true)
        .with("DEBUG_DAYS", 4)
        .with("BSD_SECURITY", true)
        .with("USE_HOSTS_FILE", true)
        .with("CLIENT_LOGIN", "backup")
        .with("CHECK_USERID", true)
        .with("HAVE_GZIP", true)
        .with("COMPRESS_SUFFIX", ".gz")
        .with("COMPRESS_FAST_OPT", "--fast")
        .with("COMPRESS_BEST_OPT", "--best")
        .with("UNCOMPRESS_OPT", "-dc")
});

pub fn configured() -> Config {
    Config {
        flags: CONFIGURED_FLAGS.clone(),
        ..Config::default()
    }
}

/// Runs the generator for `config` and returns the file text.
pub fn generate(config: &Config) -> String {
    let bytes = generate_from_config(config, Vec::new()).expect("generate version info");
    String::from_utf8(bytes).expect("generated text is utf8")
}
