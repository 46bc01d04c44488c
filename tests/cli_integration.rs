use assert_cmd::Command;
use predicates::prelude::*;

fn stockpile(home: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("stockpile").unwrap();
    cmd.env("STOCKPILE_HOME", home);
    cmd
}

#[test]
fn test_add_and_list() {
    let temp_dir = tempfile::tempdir().unwrap();

    stockpile(temp_dir.path())
        .args(["add", "Keyboard", "45.0"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Product added: Keyboard"));

    stockpile(temp_dir.path())
        .args(["add", "Mouse", "25.0"])
        .assert()
        .success();

    stockpile(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicates::str::contains("Keyboard"))
        .stdout(predicates::str::contains("Mouse"))
        .stdout(predicates::str::contains("45.00"));
}

#[test]
fn test_filter_keeps_only_expensive_products() {
    let temp_dir = tempfile::tempdir().unwrap();

    stockpile(temp_dir.path())
        .args(["add", "Keyboard", "45.0"])
        .assert()
        .success();
    stockpile(temp_dir.path())
        .args(["add", "Mouse", "25.0"])
        .assert()
        .success();

    stockpile(temp_dir.path())
        .args(["filter", "40"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Keyboard"))
        .stdout(predicates::str::contains("Mouse").not());
}

#[test]
fn test_update_then_delete_scenario() {
    let temp_dir = tempfile::tempdir().unwrap();

    stockpile(temp_dir.path())
        .args(["add", "Keyboard", "45.0"])
        .assert()
        .success();
    stockpile(temp_dir.path())
        .args(["add", "Mouse", "25.0"])
        .assert()
        .success();

    stockpile(temp_dir.path())
        .args(["update", "Mouse", "30.0"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Product updated: Mouse"));

    stockpile(temp_dir.path())
        .args(["delete", "Keyboard"])
        .assert()
        .success();

    stockpile(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicates::str::contains("Mouse"))
        .stdout(predicates::str::contains("30.00"))
        .stdout(predicates::str::contains("Keyboard").not());
}

#[test]
fn test_find_is_case_insensitive() {
    let temp_dir = tempfile::tempdir().unwrap();

    stockpile(temp_dir.path())
        .args(["add", "Ordinateur", "1200.0"])
        .assert()
        .success();

    stockpile(temp_dir.path())
        .args(["find", "ORDINATEUR"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Ordinateur"))
        .stdout(predicates::str::contains("1200.00"));
}

#[test]
fn test_find_missing_product_fails() {
    let temp_dir = tempfile::tempdir().unwrap();

    stockpile(temp_dir.path())
        .args(["find", "Ecran"])
        .assert()
        .failure()
        .stderr(predicates::str::contains("Product not found: Ecran"));
}

#[test]
fn test_stats() {
    let temp_dir = tempfile::tempdir().unwrap();

    stockpile(temp_dir.path())
        .args(["add", "Ordinateur", "1200.0"])
        .assert()
        .success();
    stockpile(temp_dir.path())
        .args(["add", "Souris", "25.0"])
        .assert()
        .success();
    stockpile(temp_dir.path())
        .args(["add", "Clavier", "45.0"])
        .assert()
        .success();

    stockpile(temp_dir.path())
        .arg("stats")
        .assert()
        .success()
        .stdout(predicates::str::contains("1270.00"))
        .stdout(predicates::str::contains("423.33"))
        .stdout(predicates::str::contains("Clavier | Ordinateur | Souris"));
}

#[test]
fn test_catalogue_flow() {
    let temp_dir = tempfile::tempdir().unwrap();

    stockpile(temp_dir.path())
        .args(["catalogue", "create", "Informatique"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Catalogue created: Informatique"));

    stockpile(temp_dir.path())
        .args(["add", "Souris", "25.0", "--catalogue", "Informatique"])
        .assert()
        .success();

    stockpile(temp_dir.path())
        .args(["catalogue", "list"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Informatique"))
        .stdout(predicates::str::contains("1 products"));

    stockpile(temp_dir.path())
        .args(["catalogue", "delete", "Informatique"])
        .assert()
        .success()
        .stdout(predicates::str::contains("1 product(s) detached"));

    // The product survives its catalogue
    stockpile(temp_dir.path())
        .args(["find", "Souris"])
        .assert()
        .success();
}

#[test]
fn test_restock_fills_the_store() {
    let temp_dir = tempfile::tempdir().unwrap();

    stockpile(temp_dir.path())
        .args(["restock", "--count", "2", "--interval-ms", "1"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Product added: restock-1"))
        .stdout(predicates::str::contains("Product added: restock-2"));

    stockpile(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicates::str::contains("restock-1"))
        .stdout(predicates::str::contains("restock-2"));
}

#[test]
fn test_config_round_trip() {
    let temp_dir = tempfile::tempdir().unwrap();

    stockpile(temp_dir.path())
        .args(["config", "currency", "$"])
        .assert()
        .success()
        .stdout(predicates::str::contains("currency set to $"));

    stockpile(temp_dir.path())
        .args(["config", "currency"])
        .assert()
        .success()
        .stdout(predicates::str::contains("$"));

    // Prices now render with the configured symbol
    stockpile(temp_dir.path())
        .args(["add", "Mouse", "25.0"])
        .assert()
        .success();
    stockpile(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicates::str::contains("25.00$"));
}

#[test]
fn test_data_dir_flag_overrides_env() {
    let home = tempfile::tempdir().unwrap();
    let other = tempfile::tempdir().unwrap();

    stockpile(home.path())
        .args(["add", "Souris", "25.0"])
        .assert()
        .success();

    // Pointed elsewhere, the store is empty
    stockpile(home.path())
        .args(["--data-dir"])
        .arg(other.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicates::str::contains("No products found."));
}
