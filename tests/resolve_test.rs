//! End-to-end resolution tests against on-disk SDK state fixtures

mod common;

use common::TestSdk;
use proptest::prelude::*;

use sdkenv::core::env::{vars, EnvValue};
use sdkenv::core::resolve::{resolve, resolve_default};
use sdkenv::error::{DescriptorError, ManifestError, OptionsError, SdkEnvError};

#[test]
fn test_resolve_valid_sdk() {
    let sdk = TestSdk::valid();

    let env = resolve_default(&sdk.path()).expect("resolution should succeed");

    assert!(!env.is_empty());
    assert_eq!(env.get(vars::TARGET_HW), Some(&EnvValue::Int(7)));
    assert_eq!(
        env.get(vars::HW_TARGET),
        Some(&EnvValue::Str("f7".to_string()))
    );
    assert_eq!(
        env.get(vars::LIB_DIR),
        Some(&EnvValue::Path(sdk.path().join("lib")))
    );
    assert_eq!(env.script_search_path, sdk.path().join("scripts"));
    assert_eq!(
        env.meta.extra.get("version"),
        Some(&serde_json::Value::String("65.2".to_string()))
    );
}

#[test]
fn test_resolve_substitutes_sdk_path_into_flags() {
    let sdk = TestSdk::valid();

    let env = resolve_default(&sdk.path()).unwrap();

    let headers = sdk.headers_dir().display().to_string().replace('\\', "/");
    match env.get(vars::CFLAGS_APP) {
        Some(EnvValue::Tokens(tokens)) => {
            assert_eq!(tokens.len(), 3);
            assert_eq!(tokens[0], "-mcpu=cortex-m4");
            assert_eq!(tokens[1], format!("-I{headers}/furi"));
            assert_eq!(tokens[2], "-O2");
        }
        other => panic!("expected CFLAGS_APP tokens, got {other:?}"),
    }
    match env.get(vars::SDK_DEFINITION) {
        Some(EnvValue::Path(p)) => {
            assert_eq!(p.display().to_string(), format!("{headers}/api_symbols.csv"));
        }
        other => panic!("expected SDK_DEFINITION path, got {other:?}"),
    }
}

#[test]
fn test_resolve_leaves_consumer_placeholders() {
    let sdk = TestSdk::valid();

    let env = resolve_default(&sdk.path()).unwrap();

    match env.get(vars::LINKFLAGS_APP) {
        Some(EnvValue::Tokens(tokens)) => {
            assert_eq!(tokens[0], "-Wl,-Map=${TARGET}.map");
            assert_eq!(tokens[1], "-Wl,--entry=${APP_ENTRY}");
        }
        other => panic!("expected LINKFLAGS_APP tokens, got {other:?}"),
    }
    match env.get(vars::SVD_FILE) {
        Some(EnvValue::Deferred(r)) => {
            assert_eq!(r.render(), "${SDK_DEBUG_DIR}/STM32WB55_CM4.svd");
        }
        other => panic!("expected deferred SVD_FILE, got {other:?}"),
    }
}

#[test]
fn test_resolve_missing_manifest() {
    let sdk = TestSdk::new();

    let err = resolve_default(&sdk.path()).unwrap_err();
    assert!(matches!(
        err,
        SdkEnvError::Descriptor(DescriptorError::NotFound { .. })
    ));
}

#[test]
fn test_resolve_custom_manifest_name() {
    let sdk = TestSdk::valid();
    sdk.write_file(
        std::path::Path::new("state.json"),
        &TestSdk::default_manifest(),
    );

    assert!(resolve(&sdk.path(), "state.json").is_ok());
}

#[test]
fn test_resolve_empty_components_fails_before_options_load() {
    let sdk = TestSdk::new();
    sdk.write_manifest(r#"{"meta": {"hw_target": "f7"}, "components": {}}"#);
    // No sdk.opts on disk at all: the components check must fire first.

    let err = resolve_default(&sdk.path()).unwrap_err();
    assert!(matches!(
        err,
        SdkEnvError::Manifest(ManifestError::MissingComponents { .. })
    ));
}

#[test]
fn test_resolve_absent_components_key() {
    let sdk = TestSdk::new();
    sdk.write_manifest(r#"{"meta": {"hw_target": "f7"}}"#);

    let err = resolve_default(&sdk.path()).unwrap_err();
    assert!(matches!(
        err,
        SdkEnvError::Manifest(ManifestError::MissingComponents { .. })
    ));
}

#[test]
fn test_resolve_hardware_mismatch() {
    let sdk = TestSdk::valid();
    sdk.write_manifest(&TestSdk::default_manifest().replace("\"f7\"", "\"f6\""));

    let err = resolve_default(&sdk.path()).unwrap_err();
    match err {
        SdkEnvError::Manifest(ManifestError::HardwareMismatch {
            hw_target,
            hardware,
        }) => {
            assert_eq!(hw_target, "f6");
            assert_eq!(hardware, "7");
        }
        other => panic!("expected HardwareMismatch, got {other:?}"),
    }
}

#[test]
fn test_resolve_missing_marker_key() {
    let sdk = TestSdk::valid();
    let opts = TestSdk::default_opts().replace("map_file_subst", "map_file_renamed");
    sdk.write_opts(&opts);

    let err = resolve_default(&sdk.path()).unwrap_err();
    match err {
        SdkEnvError::Options(OptionsError::MissingSubstKey { key }) => {
            assert_eq!(key, "map_file_subst");
        }
        other => panic!("expected MissingSubstKey, got {other:?}"),
    }
}

#[test]
fn test_resolve_missing_component_names_it() {
    let sdk = TestSdk::valid();
    let manifest = TestSdk::default_manifest().replace("\"firmware.elf\": \"firmware.elf\",", "");
    sdk.write_manifest(&manifest);

    let err = resolve_default(&sdk.path()).unwrap_err();
    match err {
        SdkEnvError::Manifest(ManifestError::MissingComponent { key }) => {
            assert_eq!(key, "firmware.elf");
        }
        other => panic!("expected MissingComponent, got {other:?}"),
    }
}

#[test]
fn test_resolve_malformed_options() {
    let sdk = TestSdk::valid();
    sdk.write_opts("{broken");

    let err = resolve_default(&sdk.path()).unwrap_err();
    assert!(matches!(
        err,
        SdkEnvError::Descriptor(DescriptorError::Parse { .. })
    ));
}

#[test]
fn test_resolve_non_numeric_hardware() {
    let sdk = TestSdk::valid();
    sdk.write_manifest(&TestSdk::default_manifest().replace("\"f7\"", "\"wb55\""));
    sdk.write_opts(&TestSdk::default_opts().replace("\"7\"", "\"wb55\""));

    let err = resolve_default(&sdk.path()).unwrap_err();
    assert!(matches!(
        err,
        SdkEnvError::Options(OptionsError::InvalidHardware { .. })
    ));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// Whenever the manifest hardware target ends with the options hardware
    /// id, resolution succeeds and TARGET_HW carries the integer id.
    #[test]
    fn prop_hw_suffix_resolves(prefix in "[a-z]{0,3}", hw in 0u8..=99) {
        let sdk = TestSdk::new();
        let hw_target = format!("{prefix}{hw}");
        sdk.write_manifest(
            &TestSdk::default_manifest().replace("\"f7\"", &format!("\"{hw_target}\"")),
        );
        sdk.write_opts(&TestSdk::default_opts().replace("\"7\"", &format!("\"{hw}\"")));

        let env = resolve_default(&sdk.path()).expect("matching suffix should resolve");
        prop_assert_eq!(env.get(vars::TARGET_HW), Some(&EnvValue::Int(i64::from(hw))));
    }
}
