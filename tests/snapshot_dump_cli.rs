use std::process::{Command, Output};

fn fixture(name: &str) -> String {
    format!("{}/tests/fixtures/{name}", env!("CARGO_MANIFEST_DIR"))
}

fn dump(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_snapshot_dump"))
        .arg("--world")
        .arg(fixture("world.yaml"))
        .args(args)
        .env("RUST_LOG", "off")
        .output()
        .expect("snapshot_dump runs")
}

#[test]
fn prints_account_as_yaml() {
    let out = dump(&["account", "arthas"]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));

    let fields: std::collections::BTreeMap<String, String> =
        serde_yaml::from_slice(&out.stdout).unwrap();
    assert_eq!(fields.get("name").map(String::as_str), Some("Arthas"));
    assert_eq!(fields.get("clan_id").map(String::as_str), Some("9"));
}

#[test]
fn runs_script_against_api_table() {
    let out = dump(&["script", &fixture("roster.lua")]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    assert_eq!(String::from_utf8_lossy(&out.stdout), "clan=9\nArthas:4\nJaina:3\n");
}

#[test]
fn script_error_fails_with_path() {
    let script = fixture("broken.lua");
    let out = dump(&["script", &script]);
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("Script failed"), "{stderr}");
    assert!(stderr.contains("boom"), "{stderr}");
}

#[test]
fn non_numeric_id_is_rejected() {
    let out = dump(&["game", "twelve"]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("game id must be a number"));
}
