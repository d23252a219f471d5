use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// A key printed as `key=...` together with the flag it is read from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VarSpec {
    pub key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flag: Option<String>,
}

impl VarSpec {
    pub fn new(key: &str) -> Self {
        Self {
            key: key.to_string(),
            flag: None,
        }
    }

    /// Flag name to look up; defaults to the printed key.
    pub fn flag_name(&self) -> &str {
        self.flag.as_deref().unwrap_or(&self.key)
    }
}

/// Declares how one catalog position turns a flag lookup into a token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CatalogEntry {
    /// `key="value"` when set, `key=UNDEF` otherwise.
    Var {
        key: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        flag: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        prefix: Option<String>,
    },
    /// `key="value"` when set, nothing otherwise.
    OptionalVar {
        key: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        flag: Option<String>,
    },
    /// `key=<integer>` when set, nothing otherwise.
    Number {
        key: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        flag: Option<String>,
    },
    /// Bare literal when the flag is set.
    Flag {
        literal: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        flag: Option<String>,
    },
    /// Bare literal when the flag is not set.
    Unless { literal: String, flag: String },
    /// Bare literal when none of the listed flags is set.
    Fallback {
        literal: String,
        unless_any: Vec<String>,
    },
    /// Variables that only carry values when `gate` is set.
    Gated { gate: String, vars: Vec<VarSpec> },
}

impl CatalogEntry {
    pub fn var(key: &str) -> Self {
        CatalogEntry::Var {
            key: key.to_string(),
            flag: None,
            prefix: None,
        }
    }

    pub fn var_from(key: &str, flag: &str) -> Self {
        CatalogEntry::Var {
            key: key.to_string(),
            flag: Some(flag.to_string()),
            prefix: None,
        }
    }

    pub fn prefixed_var(key: &str, prefix: &str) -> Self {
        CatalogEntry::Var {
            key: key.to_string(),
            flag: None,
            prefix: Some(prefix.to_string()),
        }
    }

    pub fn optional_var(key: &str) -> Self {
        CatalogEntry::OptionalVar {
            key: key.to_string(),
            flag: None,
        }
    }

    pub fn number(key: &str) -> Self {
        CatalogEntry::Number {
            key: key.to_string(),
            flag: None,
        }
    }

    pub fn flag(literal: &str) -> Self {
        CatalogEntry::Flag {
            literal: literal.to_string(),
            flag: None,
        }
    }

    pub fn flag_from(literal: &str, flag: &str) -> Self {
        CatalogEntry::Flag {
            literal: literal.to_string(),
            flag: Some(flag.to_string()),
        }
    }

    pub fn unless(literal: &str, flag: &str) -> Self {
        CatalogEntry::Unless {
            literal: literal.to_string(),
            flag: flag.to_string(),
        }
    }

    pub fn fallback(literal: &str, unless_any: &[&str]) -> Self {
        CatalogEntry::Fallback {
            literal: literal.to_string(),
            unless_any: unless_any.iter().map(|name| name.to_string()).collect(),
        }
    }

    pub fn gated(gate: &str, keys: &[&str]) -> Self {
        CatalogEntry::Gated {
            gate: gate.to_string(),
            vars: keys.iter().map(|key| VarSpec::new(key)).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogSection {
    pub label: String,
    #[serde(default)]
    pub entries: Vec<CatalogEntry>,
}

impl CatalogSection {
    pub fn new(label: &str, entries: Vec<CatalogEntry>) -> Self {
        Self {
            label: label.to_string(),
            entries,
        }
    }
}

/// Ordered list of sections the generated array is made of.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    pub sections: Vec<CatalogSection>,
}

static STANDARD: Lazy<Catalog> = Lazy::new(build_standard);

impl Catalog {
    pub fn new(sections: Vec<CatalogSection>) -> Self {
        Self { sections }
    }

    /// The `build:`, `paths:` and `defs:` sections used when a configuration
    /// does not bring its own catalog.
    pub fn standard() -> &'static Catalog {
        &STANDARD
    }
}

fn build_standard() -> Catalog {
    use CatalogEntry as E;

    let build = CatalogSection::new(
        "build:",
        vec![
            E::prefixed_var("VERSION", "Genversion-"),
            E::var("BUILT_DATE"),
            E::var("BUILT_MACH"),
            E::var("BUILT_REV"),
            E::var("BUILT_BRANCH"),
            E::var("CC"),
        ],
    );

    let paths = CatalogSection::new(
        "paths:",
        vec![
            E::var("bindir"),
            E::var("sbindir"),
            E::var("libexecdir"),
            E::var("mandir"),
            E::var("TMPDIR"),
            E::var("DBGDIR"),
            E::var("CONFIG_DIR"),
            E::var("DEV_PREFIX"),
            E::var("RDEV_PREFIX"),
            E::gated("DUMP", &["DUMP", "RESTORE"]),
            E::gated("VDUMP", &["VDUMP", "VRESTORE"]),
            E::gated("XFSDUMP", &["XFSDUMP", "XFSRESTORE"]),
            E::gated("VXDUMP", &["VXDUMP", "VXRESTORE"]),
            E::var("SAMBA_CLIENT"),
            E::var("GNUTAR"),
            E::var("COMPRESS_PATH"),
            E::var("UNCOMPRESS_PATH"),
            E::var("LPRCMD"),
            E::var("MAILER"),
            E::var_from("listed_incr_dir", "GNUTAR_LISTED_INCREMENTAL_DIR"),
        ],
    );

    let locking = ["USE_POSIX_FCNTL", "USE_FLOCK", "USE_LOCKF", "USE_LNLOCK"];
    let defs = CatalogSection::new(
        "defs:",
        vec![
            E::var("DEFAULT_SERVER"),
            E::var("DEFAULT_CONFIG"),
            E::var("DEFAULT_TAPE_SERVER"),
            E::optional_var("DEFAULT_TAPE_DEVICE"),
            E::flag("AIX_BACKUP"),
            E::flag("BROKEN_VOID"),
            E::flag("DUMP_RETURNS_1"),
            E::flag("HAVE_MMAP"),
            E::unless("NEED_STRERROR", "HAVE_STRERROR"),
            E::unless("NEED_STRSTR", "HAVE_STRSTR"),
            E::flag("HAVE_SYSVSHM"),
            E::flag_from("LOCKING=POSIX_FCNTL", "USE_POSIX_FCNTL"),
            E::flag_from("LOCKING=FLOCK", "USE_FLOCK"),
            E::flag_from("LOCKING=LOCKF", "USE_LOCKF"),
            E::flag_from("LOCKING=LNLOCK", "USE_LNLOCK"),
            E::fallback("LOCKING=**NONE**", &locking),
            E::flag("STATFS_BSD"),
            E::flag("STATFS_OSF1"),
            E::flag("STATFS_ULTRIX"),
            E::flag("SETPGRP_VOID"),
            E::flag("ASSERTIONS"),
            E::number("DEBUG_DAYS"),
            E::flag("BSD_SECURITY"),
            E::flag("KRB4_SECURITY"),
            E::flag("KRB5_SECURITY"),
            E::flag("RSH_SECURITY"),
            E::flag("USE_HOSTS_FILE"),
            E::flag("USE_RUNDUMP"),
            E::var("CLIENT_LOGIN"),
            E::flag("CHECK_USERID"),
            E::flag("USE_VERSION_SUFFIXES"),
            E::flag("HAVE_GZIP"),
            E::optional_var("COMPRESS_SUFFIX"),
            E::optional_var("COMPRESS_FAST_OPT"),
            E::optional_var("COMPRESS_BEST_OPT"),
            E::optional_var("UNCOMPRESS_OPT"),
        ],
    );

    Catalog::new(vec![build, paths, defs])
}
