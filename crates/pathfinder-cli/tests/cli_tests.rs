use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Command with --no-color and a database inside `temp_dir`
fn pf_cmd(temp_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("pf").expect("Failed to find pf binary");
    cmd.env_remove("PATHFINDER_USER")
        .env_remove("PATHFINDER_DATABASE")
        .arg("--no-color")
        .arg("--database-file")
        .arg(temp_dir.path().join("cli_test.db"));
    cmd
}

#[test]
fn test_cli_list_empty_plans() {
    let temp_dir = TempDir::new().unwrap();

    pf_cmd(&temp_dir)
        .args(["plan", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No plans found."));

    // No subcommand lists plans too
    pf_cmd(&temp_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("No plans found."));
}

#[test]
fn test_cli_create_and_show_plan() {
    let temp_dir = TempDir::new().unwrap();

    pf_cmd(&temp_dir)
        .args(["resume", "add", "--user", "3", "--skills", "Python,SQL", "--level", "intermediate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Recorded resume with ID: 1"))
        .stdout(predicate::str::contains("Python, SQL"));

    pf_cmd(&temp_dir)
        .args(["plan", "create", "Data Scientist", "--user", "3", "--months", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created plan with ID: 1 (30 days)"))
        .stdout(predicate::str::contains("Statistics"));

    pf_cmd(&temp_dir)
        .args(["plan", "show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# 1. Data Scientist"))
        .stdout(predicate::str::contains("### Day 1:"));

    pf_cmd(&temp_dir)
        .args(["plan", "list", "--user", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("## Data Scientist (ID: 1) (0/30)"));
}

#[test]
fn test_cli_task_progress_flow() {
    let temp_dir = TempDir::new().unwrap();

    pf_cmd(&temp_dir)
        .args(["plan", "create", "Web Developer", "--months", "1"])
        .assert()
        .success();

    pf_cmd(&temp_dir)
        .args(["task", "update", "1", "--done", "--hours", "2.5", "--notes", "Semantic HTML"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1/30 tasks"))
        .stdout(predicate::str::contains("## Up Next"))
        .stdout(predicate::str::contains("### Day 2:"));

    pf_cmd(&temp_dir)
        .args(["task", "next", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("### Day 2:"));

    pf_cmd(&temp_dir)
        .args(["progress"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Progress for user 1"))
        .stdout(predicate::str::contains("1/30 days"));

    pf_cmd(&temp_dir)
        .args(["plan", "tasks", "1", "--page", "2", "--per-page", "10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("page 2 of 3, 30 total"))
        .stdout(predicate::str::contains("### Day 11:"));
}

#[test]
fn test_cli_reports_missing_records() {
    let temp_dir = TempDir::new().unwrap();

    pf_cmd(&temp_dir)
        .args(["plan", "show", "42"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Plan with ID 42 not found"));

    pf_cmd(&temp_dir)
        .args(["task", "update", "7", "--done"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Task with ID 7 not found"));
}

#[test]
fn test_cli_rejects_bad_input() {
    let temp_dir = TempDir::new().unwrap();

    pf_cmd(&temp_dir)
        .args(["plan", "create", "Data Scientist", "--months", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("duration_months"));

    pf_cmd(&temp_dir)
        .args(["plan", "create", "Data Scientist", "--months", "4294967295"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("duration_months"));

    pf_cmd(&temp_dir)
        .args(["resume", "add", "--skills", "Go", "--level", "wizard"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("experience_level"));

    pf_cmd(&temp_dir)
        .args(["task", "update", "1", "--done", "--reopen"])
        .assert()
        .failure();
}

#[test]
fn test_cli_trends_and_recommendations() {
    let temp_dir = TempDir::new().unwrap();

    pf_cmd(&temp_dir)
        .args(["trends", "--profession", "DevOps Engineer", "--min-relevance", "90"])
        .assert()
        .success()
        .stdout(predicate::str::contains("| AWS | Cloud | 95 |"))
        .stdout(predicate::str::contains("Ansible").not());

    pf_cmd(&temp_dir)
        .args(["plan", "create", "AI Engineer", "--months", "1"])
        .assert()
        .success();

    pf_cmd(&temp_dir)
        .args(["plan", "check", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Plan too new to check for updates"));

    pf_cmd(&temp_dir)
        .args(["plan", "recommend", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("## Must Learn"))
        .stdout(predicate::str::contains("| GPT-4 |"));
}

#[test]
fn test_cli_technology_updates() {
    let temp_dir = TempDir::new().unwrap();

    pf_cmd(&temp_dir)
        .args(["plan", "create", "Cloud Engineer", "--months", "1"])
        .assert()
        .success();

    pf_cmd(&temp_dir)
        .args(["plan", "apply-tech", "1", "--technologies", "AWS,Terraform"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated plan 1 to version 2"));

    pf_cmd(&temp_dir)
        .args(["plan", "accept-suggestion", "1", "--user", "2", "--technologies", "Azure"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Plan not found for this user."));

    pf_cmd(&temp_dir)
        .args(["plan", "accept-suggestion", "1", "--technologies", "Azure"])
        .assert()
        .success()
        .stdout(predicate::str::contains("marked update pending at version 3"));

    pf_cmd(&temp_dir)
        .args(["plan", "list", "--status", "update_pending"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cloud Engineer"));
}

#[test]
fn test_cli_advise_and_sweep() {
    let temp_dir = TempDir::new().unwrap();

    pf_cmd(&temp_dir)
        .args(["advise", "--user", "9"])
        .assert()
        .success()
        .stdout(predicate::str::contains("- **Proficiency**: unknown"));

    pf_cmd(&temp_dir)
        .args(["plan", "create", "AI Engineer", "--months", "1"])
        .assert()
        .success();

    pf_cmd(&temp_dir)
        .args(["plan", "analytics", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Analytics for plan 1"))
        .stdout(predicate::str::contains("0/30 tasks"));

    // A brand-new plan is never stale
    pf_cmd(&temp_dir)
        .arg("sweep")
        .assert()
        .success()
        .stdout(predicate::str::contains("No plans needed an update"));
}
