use std::fs;

use vm::{
    extract_output, extract_output_with, save_output, MemoryLayout, SparseMemory, VmError,
};

fn memory_with_output(words: &[u32]) -> SparseMemory {
    let mut mem = SparseMemory::new();
    mem.write(0x3200_0000, (words.len() * 4) as u32);
    for (i, word) in words.iter().enumerate() {
        mem.write(0x3200_0004 + (i as u32) * 4, *word);
    }
    mem
}

#[test]
fn test_extract_writes_little_endian_words() {
    let mem = memory_with_output(&[0xAABBCCDD, 0x11223344]);
    let out = extract_output(&mem).expect("extract");
    assert_eq!(out, vec![0xDD, 0xCC, 0xBB, 0xAA, 0x44, 0x33, 0x22, 0x11]);
}

#[test]
fn test_zero_size_gives_empty_output() {
    let mem = SparseMemory::new();
    assert!(extract_output(&mem).expect("extract").is_empty());
}

#[test]
fn test_unwritten_payload_words_read_as_zero() {
    let mut mem = SparseMemory::new();
    mem.write(0x3200_0000, 8);
    mem.write(0x3200_0008, 0x01020304);
    let out = extract_output(&mem).expect("extract");
    assert_eq!(out, vec![0, 0, 0, 0, 0x04, 0x03, 0x02, 0x01]);
}

#[test]
fn test_misaligned_size_is_rejected() {
    let mut mem = SparseMemory::new();
    mem.write(0x3200_0000, 6);
    let err = extract_output(&mem).unwrap_err();
    assert!(matches!(err, VmError::MisalignedSize { size: 6 }));
}

#[test]
fn test_extract_with_custom_layout() {
    let layout = MemoryLayout {
        output_size_addr: 0x10,
        output_data_addr: 0x20,
        ..MemoryLayout::default()
    };
    let mut mem = SparseMemory::new();
    mem.write(0x10, 4);
    mem.write(0x20, 0x0A0B0C0D);
    assert_eq!(
        extract_output_with(&mem, &layout).expect("extract"),
        vec![0x0D, 0x0C, 0x0B, 0x0A]
    );
}

#[test]
fn test_save_output_writes_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("output");
    let mem = memory_with_output(&[0xAABBCCDD, 0x11223344]);

    save_output(&path, &mem).expect("save");
    assert_eq!(
        fs::read(&path).expect("read back"),
        vec![0xDD, 0xCC, 0xBB, 0xAA, 0x44, 0x33, 0x22, 0x11]
    );
}

#[test]
fn test_save_output_truncates_existing_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("output");
    fs::write(&path, vec![0xFF; 64]).expect("seed file");

    save_output(&path, &SparseMemory::new()).expect("save");
    assert_eq!(fs::metadata(&path).expect("metadata").len(), 0);
}

#[test]
fn test_save_output_to_missing_dir_fails() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("no_such_dir").join("output");
    let err = save_output(&path, &memory_with_output(&[1])).unwrap_err();
    assert!(matches!(err, VmError::Io { .. }));
}
