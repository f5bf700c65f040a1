use std::fs;

use vm::{load_layout, parse_layout, MemoryLayout, VmError};

#[test]
fn test_empty_object_gives_default_layout() {
    assert_eq!(parse_layout("{}").expect("parse"), MemoryLayout::default());
}

#[test]
fn test_override_single_field() {
    let layout = parse_layout(r#"{ "register_bank_words": 32 }"#).expect("parse");
    assert_eq!(layout.register_bank_words, 32);
    assert_eq!(layout.register_bank_base, 0xC000_0000);
}

#[test]
fn test_malformed_layout_is_config_error() {
    let err = parse_layout("{ not json").unwrap_err();
    assert!(matches!(err, VmError::Config(_)));
}

#[test]
fn test_register_bank_larger_than_address_space_is_rejected() {
    let err = parse_layout(r#"{ "register_bank_words": 1073741825 }"#).unwrap_err();
    assert!(matches!(err, VmError::RegisterBankTooLarge { words: 1073741825 }));
}

#[test]
fn test_largest_register_bank_is_accepted() {
    let layout = parse_layout(r#"{ "register_bank_words": 1073741823 }"#).expect("parse");
    assert_eq!(layout.register_bank_end(), 0xBFFF_FFFC);
}

#[test]
fn test_load_layout_from_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("layout.json");
    fs::write(&path, r#"{ "output_size_addr": 256, "output_data_addr": 260 }"#).expect("write");

    let layout = load_layout(&path).expect("load");
    assert_eq!(layout.output_size_addr, 0x100);
    assert_eq!(layout.output_data_addr, 0x104);
}
