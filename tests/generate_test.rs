mod common;

use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::io::Write;
use std::process::Command;

#[test]
fn test_generate_from_fixture() {
    let out = tempfile::tempdir().unwrap();

    let mut cmd = Command::new(cargo_bin!("qr-faktura"));
    cmd.args(["generate", "tests/fixtures/invoices.csv", "--output-dir"])
        .arg(out.path());

    let first = out.path().join("faktura_2024001.html");
    let second = out.path().join("faktura_2024002.html");
    cmd.assert()
        .success()
        .stdout(predicate::str::starts_with("invoice_number,iban,path\n"))
        .stdout(predicate::str::contains(format!(
            "2024001,CZ9420100000002600420569,{}\n",
            first.display()
        )))
        .stdout(predicate::str::contains(format!(
            "2024002,CZ6508000000192000145399,{}\n",
            second.display()
        )));

    let html = std::fs::read_to_string(out.path().join("faktura_2024001.html")).unwrap();
    assert!(html.contains("Celkem k úhradě: 1500 Kč"));
    assert!(html.contains("CZ94 2010 0000 0026 0042 0569"));
    assert!(html.contains("<svg"));

    let html = std::fs::read_to_string(out.path().join("faktura_2024002.html")).unwrap();
    assert!(html.contains("Celkem k úhradě: 1200.5 Kč"));
    assert!(html.contains("CZ65 0800 0000 1920 0014 5399"));
}

#[test]
fn test_generate_skips_invalid_rows() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("invoices.csv");
    common::write_invoices(
        &input,
        &[
            ("1001", "2", "100", "2600420569/2010"),
            // three-digit bank code
            ("1002", "1", "100", "2600420569/201"),
            // not a number
            ("1003", "x", "100", "2600420569/2010"),
            // outside the variable symbol charset
            ("10/04", "1", "100", "2600420569/2010"),
            ("1005", "1", "0.5", "2600420569/2010"),
        ],
    )
    .unwrap();

    let mut cmd = Command::new(cargo_bin!("qr-faktura"));
    cmd.arg("generate")
        .arg(&input)
        .arg("--output-dir")
        .arg(dir.path());

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Error generating invoice 1002"))
        .stderr(predicate::str::contains("Error reading invoice"))
        .stderr(predicate::str::contains("Error generating invoice 10/04"));

    assert!(dir.path().join("faktura_1001.html").exists());
    assert!(dir.path().join("faktura_1005.html").exists());
    assert!(!dir.path().join("faktura_1002.html").exists());
}

#[test]
fn test_generate_continues_after_overflowing_total() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("invoices.csv");
    common::write_invoices(
        &input,
        &[
            ("1", "4294967295", "7922816251426433759354395033.5", "2600420569/2010"),
            ("2", "1", "100", "2600420569/2010"),
        ],
    )
    .unwrap();

    let mut cmd = Command::new(cargo_bin!("qr-faktura"));
    cmd.arg("generate")
        .arg(&input)
        .arg("--output-dir")
        .arg(dir.path());

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Error generating invoice 1:"))
        .stdout(predicate::str::contains("2,CZ9420100000002600420569,"));

    assert!(!dir.path().join("faktura_1.html").exists());
    assert!(dir.path().join("faktura_2.html").exists());
}

#[test]
fn test_generate_with_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out");
    let mut config = tempfile::NamedTempFile::new().unwrap();
    writeln!(config, "file_prefix = \"novak_faktura\"").unwrap();
    writeln!(config, "output_dir = {:?}", out.display().to_string()).unwrap();

    let mut cmd = Command::new(cargo_bin!("qr-faktura"));
    cmd.args(["generate", "tests/fixtures/invoices.csv", "--config"])
        .arg(config.path());

    cmd.assert().success();
    assert!(out.join("novak_faktura_2024001.html").exists());
}

#[test]
fn test_generate_rejects_invalid_config() {
    let mut config = tempfile::NamedTempFile::new().unwrap();
    writeln!(config, "currency = \"Kč\"").unwrap();

    let mut cmd = Command::new(cargo_bin!("qr-faktura"));
    cmd.args(["generate", "tests/fixtures/invoices.csv", "--config"])
        .arg(config.path());

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("currency"));
}
