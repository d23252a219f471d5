mod common;

use genversion_config::Config;
use insta::assert_snapshot;

#[test]
fn test_standard_catalog_with_no_flags() {
    let output = common::generate(&Config::default());
    assert_snapshot!("standard_catalog_unset", output);
}

#[test]
fn test_standard_catalog_for_configured_build() {
    let output = common::generate(&common::configured());
    assert_snapshot!("standard_catalog_configured", output);
}
