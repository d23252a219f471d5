#![doc(test(attr(deny(warnings))))]

//! Genversion writes the C source of a `0`-terminated string array that
//! describes how the software was built. Tokens are escaped, wrapped to a
//! fixed width and grouped under section labels.
//!
//! ```
//! use genversion::{generator::{Generator, Section}, render::Token, wrap::LineBudget};
//! use genversion_config::OutputNames;
//!
//! let sections = [Section::new(
//!     "build:",
//!     vec![Token::defined("VERSION", "Foo-1.0"), Token::undefined("BUILT_DATE")],
//! )];
//! let out = Generator::new(LineBudget::new(6, 70), OutputNames::default())
//!     .generate_to_string(&sections)
//!     .unwrap();
//! assert!(out.contains(r#"  "build: VERSION=\"Foo-1.0\" BUILT_DATE=UNDEF\n","#));
//! ```

pub mod catalog;
pub mod cli;
pub mod errors;
pub mod generator;
pub mod reader;
pub mod render;
pub mod utils;
pub mod wrap;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup debug log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::debug!("genversion tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
    }
}
