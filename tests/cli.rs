use assert_cmd::Command;
use predicates::prelude::*;

fn peticao(config_dir: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("peticao").unwrap();
    cmd.env("PETICAO_CONFIG_DIR", config_dir).env("NO_COLOR", "1");
    cmd
}

#[test]
fn test_words_plain() {
    let dir = tempfile::tempdir().unwrap();
    peticao(dir.path())
        .args(["words", "1234.56"])
        .assert()
        .success()
        .stdout("mil duzentos e trinta e quatro reais e cinquenta e seis centavos\n");
}

#[test]
fn test_words_brazilian_input_with_numeral() {
    let dir = tempfile::tempdir().unwrap();
    peticao(dir.path())
        .args(["words", "22.701,00", "--numeral"])
        .assert()
        .success()
        .stdout("R$ 22.701,00 (vinte e dois mil, setecentos e um reais)\n");
}

#[test]
fn test_words_rejects_negative() {
    let dir = tempfile::tempdir().unwrap();
    peticao(dir.path())
        .args(["words", "-5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: Amount out of domain"));
}

#[test]
fn test_words_rejects_huge_amount() {
    let dir = tempfile::tempdir().unwrap();
    peticao(dir.path())
        .args(["words", "1000000000000000000000000000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: Amount out of domain"));
}

#[test]
fn test_totals_rejects_oversized_damage() {
    let dir = tempfile::tempdir().unwrap();
    let sheet = dir.path().join("charges.json");
    std::fs::write(&sheet, r#"[{"value": 50}]"#).unwrap();
    peticao(dir.path())
        .arg("totals")
        .arg(&sheet)
        .args(["--moral", "5.000.000.000,00"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--moral"))
        .stderr(predicate::str::contains("out of domain"));
}

#[test]
fn test_totals_from_csv_with_default_damages() {
    let dir = tempfile::tempdir().unwrap();
    let sheet = dir.path().join("charges.csv");
    std::fs::write(
        &sheet,
        "date,description,value\n2025-01-10,TARIFA,100\n2025-02-10,TARIFA,\"250,50\"\n",
    )
    .unwrap();
    peticao(dir.path())
        .arg("totals")
        .arg(&sheet)
        .assert()
        .success()
        .stdout(predicate::str::contains("R$ 350,50"))
        .stdout(predicate::str::contains("R$ 701,00 (setecentos e um reais)"))
        .stdout(predicate::str::contains(
            "R$ 22.701,00 (vinte e dois mil, setecentos e um reais)",
        ));
}

#[test]
fn test_totals_damage_overrides() {
    let dir = tempfile::tempdir().unwrap();
    let sheet = dir.path().join("charges.json");
    std::fs::write(&sheet, r#"[{"value": 50}]"#).unwrap();
    peticao(dir.path())
        .arg("totals")
        .arg(&sheet)
        .args(["--moral", "1000", "--wasted-time", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("R$ 1.100,00 (mil e cem reais)"))
        .stdout(predicate::str::contains("Tempo desperdiçado").not());
}

#[test]
fn test_config_set_then_totals_uses_new_defaults() {
    let dir = tempfile::tempdir().unwrap();
    peticao(dir.path())
        .args(["config", "set", "--moral", "10.000,00", "--wasted-time", "0"])
        .assert()
        .success();
    assert!(dir.path().join("settings.json").exists());

    let sheet = dir.path().join("charges.csv");
    std::fs::write(&sheet, "date,description,value\n,X,1\n").unwrap();
    peticao(dir.path())
        .arg("totals")
        .arg(&sheet)
        .assert()
        .success()
        .stdout(predicate::str::contains("R$ 10.002,00 (dez mil e dois reais)"));
}

#[test]
fn test_config_show_defaults() {
    let dir = tempfile::tempdir().unwrap();
    peticao(dir.path())
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("SENA ADVOCACIA"))
        .stdout(predicate::str::contains("R$ 20.000,00"));
}

#[test]
fn test_summary() {
    let dir = tempfile::tempdir().unwrap();
    let case = dir.path().join("case.json");
    std::fs::write(
        &case,
        r#"{
            "client": {"name": "Maria da Silva", "cpf": "12345678901", "city": "Manaus", "state": "AM"},
            "bank": {"name": "BANCO BRADESCO S/A"},
            "charge_description": "CESTA FACIL",
            "charges": [
                {"date": "2025-01-10", "value": 100},
                {"date": "10/02/2025", "value": "250.50"}
            ],
            "date_of_petition": "2025-03-05"
        }"#,
    )
    .unwrap();
    peticao(dir.path())
        .arg("summary")
        .arg(&case)
        .assert()
        .success()
        .stdout(predicate::str::contains("123.456.789-01"))
        .stdout(predicate::str::contains("10/02/2025"))
        .stdout(predicate::str::contains("Manaus / AM, 05 de março de 2025"));
}

#[test]
fn test_banks_find() {
    let dir = tempfile::tempdir().unwrap();
    peticao(dir.path())
        .args(["banks", "--find", "santander"])
        .assert()
        .success()
        .stdout(predicate::str::contains("90.400.888/0001-42"));

    peticao(dir.path())
        .args(["banks", "--find", "banco inexistente"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown bank"));
}
