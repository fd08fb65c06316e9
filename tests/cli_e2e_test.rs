use std::process::Command;
use tempfile::TempDir;

#[test]
fn test_generate_prints_completion_message() {
    let temp_dir = TempDir::new().unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_receipt-gen"))
        .args(["--seed", "17"])
        .current_dir(temp_dir.path())
        .output()
        .expect("failed to run receipt-gen");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(
        stdout,
        "✅ File receiptsmini.txt with 100 receipts created successfully!\n"
    );

    let content = std::fs::read_to_string(temp_dir.path().join("receiptsmini.txt")).unwrap();
    assert_eq!(content.lines().count(), 100);
}

#[test]
fn test_missing_config_file_exits_with_friendly_message() {
    let temp_dir = TempDir::new().unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_receipt-gen"))
        .args(["--config", "missing.toml"])
        .current_dir(temp_dir.path())
        .output()
        .expect("failed to run receipt-gen");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Setting 'config' is invalid: File does not exist"));
    assert!(!temp_dir.path().join("receiptsmini.txt").exists());
}

#[test]
fn test_summarize_skips_non_utf8_lines() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(
        temp_dir.path().join("receipts.txt"),
        b"1 Kiwi 2.0 3\n2 \xff\xfe 1.0 1\n3 Kiwi 2.0 4\n",
    )
    .unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_receipt-gen"))
        .args(["summarize", "--input", "receipts.txt", "--format", "csv"])
        .current_dir(temp_dir.path())
        .output()
        .expect("failed to run receipt-gen");

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "product,total_quantity,receipt_count\nKiwi,7,2\n"
    );
}
