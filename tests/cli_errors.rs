use predicates::prelude::*;

#[test]
fn cli_prints_default_brine_without_input() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("rockfluid_rs");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Bulk Modulus: 2.5652 GPa"))
        .stdout(predicate::str::contains("Density: 1.0181 g/cc"))
        .stdout(predicate::str::contains("P-wave Velocity:"));
}

#[test]
fn cli_works_with_params_json_for_live_oil() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("rockfluid_rs");
    let params = serde_json::json!({
        "temperature": 45.0,
        "pressure": 10.0,
        "api_gravity": 39.6,
        "gas_gravity": 0.6,
        "solution_gas_ratio": 5.0,
        "live": true,
    })
    .to_string();

    cmd.arg("--json")
        .arg("--fluid")
        .arg("oil")
        .arg("--params-json")
        .arg(params);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"fluid\": \"oil\""))
        .stdout(predicate::str::contains("\"formation_volume_factor\""));
}

#[test]
fn cli_works_with_stdin_input_document() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("rockfluid_rs");

    let doc = serde_json::json!({
        "fluid": "brine",
        "parameters": {
            "temperature": 20.0,
            "salinity": 0.0
        }
    })
    .to_string();

    cmd.arg("--json").arg("--input").arg("-").write_stdin(doc);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"density_g_cc\""))
        .stdout(predicate::str::contains("\"formation_volume_factor\"").not());
}

#[test]
fn cli_reports_invalid_json_for_params_json() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("rockfluid_rs");
    cmd.arg("--params-json").arg("{not valid json}");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Invalid JSON for --params-json"));
}

#[test]
fn cli_reports_invalid_json_in_file() {
    use std::fs::File;
    use std::io::Write as _;
    use tempfile::tempdir;

    let dir = tempdir().unwrap();
    let file_path = dir.path().join("bad.json");
    let mut f = File::create(&file_path).unwrap();
    writeln!(f, "this is not json").unwrap();

    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("rockfluid_rs");
    cmd.arg("--input").arg(file_path);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Invalid JSON in input document"));
}

#[test]
fn cli_reports_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let file_path = dir.path().join("absent.json");

    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("rockfluid_rs");
    cmd.arg("--input").arg(file_path);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Error reading file"));
}

#[test]
fn cli_strict_mode_rejects_negative_pressure() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("rockfluid_rs");
    cmd.arg("--strict").arg("--pressure").arg("-1");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("pressure = -1"));
}

#[test]
fn cli_permissive_mode_accepts_negative_pressure() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("rockfluid_rs");
    cmd.arg("--pressure").arg("-1");

    cmd.assert().success();
}

#[test]
fn cli_strict_mode_reports_missing_gas_gravity() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("rockfluid_rs");
    cmd.args(["--strict", "--fluid", "oil", "--live", "--gas-gravity", "0"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Live fluid requires a positive gas_gravity"));
}

#[test]
fn cli_rejects_brine_option_for_oil() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("rockfluid_rs");
    cmd.args(["--fluid", "oil", "--salinity", "0.1"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("--salinity does not apply to oil"));
}
