use assert_cmd::Command;
use serde_json::Value;

#[test]
fn json_export_names_a_winner() {
    let output = Command::cargo_bin("jarama")
        .unwrap()
        .args(["--json", "--seed", "42", "Rayo", "Storm", "Bolt"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let export: Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(export["race"], "GranPrix");
    assert_eq!(export["state"], "Finished");
    assert_eq!(export["results"].as_array().unwrap().len(), 3);
    assert_eq!(export["winner"], export["results"][0]["name"]);
}

#[test]
fn text_report_lists_every_section() {
    let output = Command::cargo_bin("jarama")
        .unwrap()
        .args(["--seed", "7", "--distance", "1500", "Rayo", "Storm"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let text = String::from_utf8(output).unwrap();
    assert!(text.contains("* Final ranking:"));
    assert!(text.contains("* Detailed history:"));
    assert!(text.contains("wins GranPrix"));
}

#[test]
fn duplicate_names_are_rejected() {
    Command::cargo_bin("jarama")
        .unwrap()
        .args(["--seed", "1", "Rayo", " rayo"])
        .assert()
        .failure();
}

#[test]
fn short_races_are_rejected() {
    Command::cargo_bin("jarama")
        .unwrap()
        .args(["--distance", "999", "Rayo"])
        .assert()
        .failure();
}
