//! Integration tests for pipetable CLI

use std::process::Command;

fn run_pipetable(args: &[&str]) -> (String, String, bool) {
    let mut cmd_args = vec!["run", "-q", "-p", "pipetable", "--"];
    cmd_args.extend(args);

    let output = Command::new("cargo")
        .args(&cmd_args)
        .current_dir(env!("CARGO_MANIFEST_DIR").to_string() + "/..")
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let success = output.status.success();

    (stdout, stderr, success)
}

#[test]
fn test_cli_help() {
    let (stdout, _, success) = run_pipetable(&["--help"]);

    assert!(success);
    assert!(stdout.contains("pipetable"));
    assert!(stdout.contains("--align"));
    assert!(stdout.contains("--output"));
}

#[test]
fn test_cli_version() {
    let (stdout, _, success) = run_pipetable(&["--version"]);

    assert!(success);
    assert!(stdout.contains("pipetable"));
}

#[test]
fn test_department_table() {
    let (stdout, _, success) = run_pipetable(&["department"]);

    assert!(success);
    assert_eq!(
        stdout,
        "Department: Engineering\n\
         | Employee name | Age | Years of experience |\n\
         |           Eva |  30 |                   6 |\n\
         |         Saleh |  40 |                  18 |\n\
         |          Amit |  50 |                  20 |\n"
    );
}

#[test]
fn test_books_table_widens_title_column() {
    let (stdout, _, success) = run_pipetable(&["books"]);

    assert!(success);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 7);
    assert_eq!(lines[0], "Book Collection: The Maze Runner");
    assert_eq!(
        lines[1],
        "|                    Title |        Author | Average Rating |"
    );
    assert_eq!(
        lines[6],
        "| El Palacio de los Cranks | James Dashner |            7.4 |"
    );
}

#[test]
fn test_all_tables_separated_by_blank_line() {
    let (stdout, _, success) = run_pipetable(&[]);

    assert!(success);
    assert!(stdout.starts_with("Department: Engineering\n"));
    assert!(stdout.contains("\n\nBook Collection: The Maze Runner\n"));
}

#[test]
fn test_left_alignment() {
    let (stdout, _, success) = run_pipetable(&["department", "--align", "left"]);

    assert!(success);
    assert!(stdout.contains("| Eva           | 30  | 6                   |"));
}

#[test]
fn test_json_output() {
    let (stdout, _, success) = run_pipetable(&["books", "--output", "json"]);

    assert!(success);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).expect("Invalid JSON output");
    let tables = parsed.as_array().expect("expected a JSON array");
    assert_eq!(tables.len(), 1);
    assert_eq!(tables[0]["title"], "Book Collection: The Maze Runner");
    assert_eq!(tables[0]["widths"], serde_json::json!([24, 13, 14]));
    assert_eq!(tables[0]["rows"].as_array().unwrap().len(), 5);
}

#[test]
fn test_invalid_dataset() {
    let (_, stderr, success) = run_pipetable(&["movies"]);

    assert!(!success);
    assert!(stderr.contains("movies"));
}

#[test]
fn test_logs_go_to_stderr() {
    let (stdout, stderr, success) =
        run_pipetable(&["department", "--log-level", "pipetablelib=debug"]);

    assert!(success);
    assert!(stdout.starts_with("Department: Engineering\n"));
    assert!(stderr.contains("computed column widths"));
}
