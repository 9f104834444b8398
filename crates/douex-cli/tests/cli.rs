//! End-to-end tests for the douex binary.

use assert_cmd::Command;
use predicates::prelude::*;

const SAMPLE_DOC: &str = r#"
    <p class="identifica">PORTARIA GM/MS Nº 1.234, DE 5 DE MARÇO DE 2024</p>
    <table>
      <tr><th>UF</th><th>Município</th><th>Valor (R$)</th></tr>
      <tr><td>RJ</td><td>Niterói</td><td>1.000,00</td></tr>
      <tr><td>SP</td><td>Santos</td><td>2.000,00</td></tr>
    </table>
"#;

#[test]
fn process_markup_file_to_csv() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("portaria.html");
    std::fs::write(&input, SAMPLE_DOC).unwrap();

    Command::cargo_bin("douex")
        .unwrap()
        .args(["process", input.to_str().unwrap(), "--format", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("numero da portaria"))
        .stdout(predicate::str::contains("Niterói"))
        .stdout(predicate::str::contains("1000.00"));
}

#[test]
fn process_reports_no_data_for_tableless_document() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("aviso.html");
    std::fs::write(&input, "<p>Aviso sem tabela alguma.</p>").unwrap();

    Command::cargo_bin("douex")
        .unwrap()
        .args(["process", input.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("no gazette data found"));
}

#[test]
fn batch_merges_files_and_writes_output() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("a.html"), SAMPLE_DOC).unwrap();
    std::fs::write(dir.path().join("b.html"), "<p>Sem tabela.</p>").unwrap();
    let output = dir.path().join("dataset.csv");

    let pattern = format!("{}/*.html", dir.path().to_str().unwrap());
    Command::cargo_bin("douex")
        .unwrap()
        .args(["batch", &pattern, "--output", output.to_str().unwrap(), "--summary"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote 2 records"));

    let written = std::fs::read_to_string(&output).unwrap();
    assert!(written.lines().count() >= 3);
    assert!(written.contains("Santos"));
}

#[test]
fn missing_input_fails() {
    Command::cargo_bin("douex")
        .unwrap()
        .args(["process", "/definitely/not/there.html"])
        .assert()
        .failure();
}
