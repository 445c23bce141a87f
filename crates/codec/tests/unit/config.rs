//! Configuration Tests.
//!
//! Loading the cfg and JSON forms from disk, value inference, and the ISA
//! width parser.

use std::io::Write;

use pretty_assertions::assert_eq;
use rstest::rstest;

use rvcodec_core::config::{ConfigValue, parse_cfg};
use rvcodec_core::{Config, ConfigError, IsaWidth, Xlen};

fn write_temp(suffix: &str, contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.isa, IsaWidth::Auto);
    assert!(!config.abi);
    assert!(config.extra.is_empty());
}

#[test]
fn test_load_cfg_file() {
    let file = write_temp(
        ".cfg",
        "# translator settings\n\nISA=RV32I\nABI = true\nLIMIT=42\nNAMES=a, 2, 0x10\nEMPTY=\nVERBOSE false\n",
    );
    let config = Config::load(file.path()).unwrap();
    assert_eq!(config.isa, IsaWidth::Rv32i);
    assert!(config.abi);
    assert_eq!(config.extra.get("LIMIT"), Some(&ConfigValue::Number(42.0)));
    assert_eq!(
        config.extra.get("NAMES"),
        Some(&ConfigValue::List(vec![
            ConfigValue::Text("a".to_string()),
            ConfigValue::Number(2.0),
            ConfigValue::Number(16.0),
        ]))
    );
    assert_eq!(config.extra.get("VERBOSE"), Some(&ConfigValue::Bool(false)));
    assert!(!config.extra.contains_key("EMPTY"));
}

#[test]
fn test_keys_are_case_insensitive() {
    let config = Config::from_cfg_str("isa=rv128i\nabi=TRUE\n").unwrap();
    assert_eq!(config.isa, IsaWidth::Rv128i);
    assert!(config.abi);
}

#[test]
fn test_load_json_file() {
    let file = write_temp(".json", r#"{"ISA": "RV64I", "ABI": true, "MODE": "fast"}"#);
    let config = Config::load(file.path()).unwrap();
    assert_eq!(config.isa, IsaWidth::Rv64i);
    assert!(config.abi);
    assert_eq!(config.extra.get("MODE"), Some(&ConfigValue::Text("fast".to_string())));
}

#[test]
fn test_json_defaults_missing_keys() {
    let config = Config::from_json("{}").unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_malformed_json() {
    assert!(matches!(Config::from_json("{\"ISA\": "), Err(ConfigError::Json(_))));
}

#[rstest]
#[case("ISA=RV16I\n")]
#[case("ISA=64\n")]
#[case("ABI=yes\n")]
fn test_invalid_values(#[case] text: &str) {
    let err = Config::from_cfg_str(text).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidValue { .. }), "{err:?}");
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = Config::load(dir.path().join("absent.cfg")).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }), "{err:?}");
}

#[test]
fn test_parse_cfg_skips_keys_without_values() {
    let entries = parse_cfg("ONLYKEY\n# ISA=RV32I\nA=1\n");
    assert_eq!(entries.len(), 1);
    assert_eq!(entries.get("A"), Some(&ConfigValue::Number(1.0)));
}

#[rstest]
#[case("AUTO", IsaWidth::Auto)]
#[case("rv32i", IsaWidth::Rv32i)]
#[case(" RV64I ", IsaWidth::Rv64i)]
#[case("Rv128I", IsaWidth::Rv128i)]
fn test_isa_width_from_str(#[case] text: &str, #[case] width: IsaWidth) {
    assert_eq!(text.parse::<IsaWidth>().unwrap(), width);
}

#[test]
fn test_isa_width_display_round_trips() {
    for width in [IsaWidth::Auto, IsaWidth::Rv32i, IsaWidth::Rv64i, IsaWidth::Rv128i] {
        assert_eq!(width.to_string().parse::<IsaWidth>().unwrap(), width);
    }
}

#[test]
fn test_fixed_width_has_one_candidate() {
    assert_eq!(IsaWidth::Rv32i.candidates(), vec![Xlen::Rv32]);
    assert_eq!(IsaWidth::Rv128i.fixed(), Some(Xlen::Rv128));
    assert_eq!(IsaWidth::Auto.fixed(), None);
    assert_eq!(IsaWidth::from(Xlen::Rv64), IsaWidth::Rv64i);
}

#[test]
fn test_auto_candidates_cover_every_width() {
    let mut order = IsaWidth::Auto.candidates();
    assert_eq!(order[0], Xlen::host());
    order.sort();
    assert_eq!(order, Xlen::ALL.to_vec());
}
