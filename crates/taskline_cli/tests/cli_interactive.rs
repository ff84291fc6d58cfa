use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::time::{SystemTime, UNIX_EPOCH};

fn temp_path(file_name: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    std::env::temp_dir().join(format!("taskline-{nanos}-{file_name}"))
}

fn run_interactive(store_path: &PathBuf, args: &[&str], input: &str) -> std::process::Output {
    let exe = env!("CARGO_BIN_EXE_taskline");

    let mut child = Command::new(exe)
        .args(args)
        .env("TASKLINE_DATA_PATH", store_path)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn interactive session");

    {
        let stdin = child.stdin.as_mut().expect("stdin");
        stdin
            .write_all(input.as_bytes())
            .expect("failed to write to stdin");
    }

    child
        .wait_with_output()
        .expect("failed to read interactive output")
}

#[test]
fn interactive_session_shows_banner_and_farewell() {
    let store_path = temp_path("banner.txt");
    let output = run_interactive(&store_path, &[], "bye\n");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Hello I'm"));
    assert!(stdout.contains("What can I do for you?"));
    assert!(stdout.contains("Bye. Hope to see you again soon!"));
}

#[test]
fn interactive_add_then_list_round_trips() {
    let store_path = temp_path("add-list.txt");
    let output = run_interactive(
        &store_path,
        &["--plain"],
        "todo read book\nlist\nbye\n",
    );
    std::fs::remove_file(&store_path).ok();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Got it. I've added this task:"));
    assert!(stdout.contains("Here are the tasks in your list:"));
    assert!(stdout.contains("1.[T][ ] read book"));
}

#[test]
fn interactive_errors_do_not_terminate_the_session() {
    let store_path = temp_path("recover.txt");
    let output = run_interactive(
        &store_path,
        &["--plain"],
        "nope\nmark 5\ntodo read book\nbye\n",
    );
    std::fs::remove_file(&store_path).ok();

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("ERROR: unknown_command"));
    assert!(stderr.contains("ERROR: range_error"));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Got it. I've added this task:"));
}

#[test]
fn interactive_framed_mode_renders_errors_between_rules() {
    let store_path = temp_path("framed-error.txt");
    let output = run_interactive(&store_path, &[], "nope\nbye\n");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("\"nope\" is not a valid command!"));
    assert!(stdout.contains("Fix: Type 'help' to see the list of valid commands!"));
}

#[test]
fn interactive_help_lists_the_grammar() {
    let store_path = temp_path("help.txt");
    let output = run_interactive(&store_path, &["--plain"], "help\nbye\n");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("deadline <description> /by <yyyy-MM-dd HHmm>"));
    assert!(stdout.contains("unmark <task number>"));
}

#[test]
fn interactive_eof_terminates_without_farewell() {
    let store_path = temp_path("eof.txt");
    let output = run_interactive(&store_path, &["--plain"], "list\n");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Here are the tasks in your list:"));
    assert!(!stdout.contains("Bye."));
}

#[test]
fn interactive_corrupt_store_reports_fresh_state_and_continues() {
    let store_path = temp_path("corrupt.txt");
    std::fs::write(&store_path, "garbage\n").unwrap();

    let output = run_interactive(&store_path, &["--plain"], "list\nbye\n");
    std::fs::remove_file(&store_path).ok();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Error loading data from hard disk..."));
    assert!(stdout.contains("Defaulting to fresh state..."));
    assert!(stdout.contains("Here are the tasks in your list:"));
}

#[test]
fn interactive_json_emits_one_object_per_command() {
    let store_path = temp_path("json.txt");
    let output = run_interactive(
        &store_path,
        &["--json"],
        "todo read book\nnope\nbye\n",
    );
    std::fs::remove_file(&store_path).ok();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let objects: Vec<serde_json::Value> = stdout
        .lines()
        .map(|line| serde_json::from_str(line).expect("json line"))
        .collect();

    assert_eq!(objects.len(), 3);
    assert_eq!(objects[0]["ok"], true);
    assert_eq!(objects[0]["tasks"][0]["description"], "read book");
    assert_eq!(objects[1]["ok"], false);
    assert_eq!(objects[1]["code"], "unknown_command");
    assert_eq!(objects[2]["ok"], true);
    assert!(objects[2]["response"]
        .as_str()
        .unwrap()
        .contains("Bye. Hope to see you again soon!"));
}

#[test]
fn session_state_survives_across_runs() {
    let store_path = temp_path("persist.txt");

    let first = run_interactive(&store_path, &["--plain"], "todo read book\nbye\n");
    assert!(first.status.success());

    let second = run_interactive(&store_path, &["--plain"], "list\nbye\n");
    std::fs::remove_file(&store_path).ok();

    assert!(second.status.success());
    let stdout = String::from_utf8_lossy(&second.stdout);
    assert!(stdout.contains("1.[T][ ] read book"));
}
