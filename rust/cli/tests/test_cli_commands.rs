use serial_test::serial;
use setgame_cli::run;

fn run_cli(args: &[&str]) -> (i32, String, String) {
    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();
    let code = run(args.iter().copied(), &mut out, &mut err);
    (
        code,
        String::from_utf8_lossy(&out).into_owned(),
        String::from_utf8_lossy(&err).into_owned(),
    )
}

#[test]
fn help_lists_commands() {
    let (code, stdout, _) = run_cli(&["setgame", "--help"]);
    assert_eq!(code, 0);
    for cmd in ["deal", "sim", "cfg"] {
        assert!(stdout.contains(cmd), "help should mention {}", cmd);
    }
}

#[test]
fn unknown_command_fails_with_usage() {
    let (code, _, stderr) = run_cli(&["setgame", "shuffle-everything"]);
    assert_eq!(code, 2);
    assert!(stderr.contains("Usage: setgame <command>"));
}

#[test]
#[serial]
fn deal_with_seed_is_reproducible() {
    let (c1, a, _) = run_cli(&["setgame", "deal", "--seed", "99"]);
    let (c2, b, _) = run_cli(&["setgame", "deal", "--seed", "99"]);
    assert_eq!((c1, c2), (0, 0));
    assert_eq!(a, b);
    assert!(a.contains("Deck: 69"));
}

#[test]
#[serial]
fn deal_json_outputs_snapshot() {
    let (code, stdout, _) = run_cli(&["setgame", "deal", "--seed", "3", "--json"]);
    assert_eq!(code, 0);
    let v: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(v["score"], 0);
    assert!(v["hint_count"].as_u64().is_some());
}

#[test]
#[serial]
fn sim_runs_requested_games() {
    let (code, stdout, _) = run_cli(&["setgame", "sim", "--games", "2", "--seed", "1"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("Game 1:"));
    assert!(stdout.contains("Game 2:"));
    assert!(stdout.contains("Simulated 2 game(s)"));
}

#[test]
fn sim_zero_games_is_an_error() {
    let (code, _, stderr) = run_cli(&["setgame", "sim", "--games", "0"]);
    assert_eq!(code, 2);
    assert!(stderr.contains("games must be >= 1"));
    assert_eq!(stderr.lines().filter(|l| l.starts_with("Error:")).count(), 1);
}

#[test]
#[serial]
fn invalid_config_is_reported_once() {
    // SAFETY: tests touching the environment are serialized.
    unsafe { std::env::set_var("SETGAME_TABLE_SIZE", "0") };
    let (code, stdout, stderr) = run_cli(&["setgame", "cfg"]);
    unsafe { std::env::remove_var("SETGAME_TABLE_SIZE") };
    assert_eq!(code, 2);
    assert!(stdout.is_empty());
    assert_eq!(stderr.lines().filter(|l| l.starts_with("Error:")).count(), 1);
    assert!(stderr.contains("Invalid configuration"));
}

#[test]
#[serial]
fn cfg_prints_json() {
    let (code, stdout, _) = run_cli(&["setgame", "cfg"]);
    assert_eq!(code, 0);
    let v: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert!(v.get("match_reward").is_some());
}
