use std::process::Command;

fn run_sim(args: &[&str]) -> serde_json::Value {
    let output = Command::new(env!("CARGO_BIN_EXE_sim"))
        .args(args)
        .output()
        .expect("failed to run sim binary");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    serde_json::from_str(stdout.trim()).expect("invalid json")
}

#[test]
fn sim_binary_smoke() {
    let v = run_sim(&["1"]);
    assert!(v["winner"].is_string());
    assert_eq!(v["strategy"], "uniform");
    let turns = v["turns"].as_u64().unwrap();
    let guesses = v["player1"]["guesses"].as_u64().unwrap()
        + v["player2"]["guesses"].as_u64().unwrap();
    assert_eq!(turns, guesses);
}

#[test]
fn sim_binary_is_reproducible() {
    assert_eq!(run_sim(&["7", "unexplored"]), run_sim(&["7", "unexplored"]));
}

#[test]
fn sim_binary_rejects_bad_strategy() {
    let output = Command::new(env!("CARGO_BIN_EXE_sim"))
        .args(["1", "psychic"])
        .output()
        .expect("failed to run sim binary");
    assert!(!output.status.success());
}
