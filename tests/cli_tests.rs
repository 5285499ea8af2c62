use predicates::str::contains;

mod common;
use common::{clock_at, init_db_with_roster, setup_test_db, tb};

#[test]
fn init_creates_database() {
    let db_path = setup_test_db("init");

    tb()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"));

    assert!(std::path::Path::new(&db_path).exists());
}

#[test]
fn clock_classifies_on_site_and_remote() {
    let db_path = setup_test_db("clock_tags");
    init_db_with_roster(&db_path);

    // At the company reference coordinate → on-site.
    tb()
        .args([
            "--db", &db_path, "clock", "--employee", "1", "--company", "1", "--lat", "45.0",
            "--lon", "9.0", "--at", "2025-08-10 09:00",
        ])
        .assert()
        .success()
        .stdout(contains("on-site"));

    // ~15 km away → remote.
    tb()
        .args([
            "--db", &db_path, "clock", "--employee", "1", "--company", "1", "--lat", "45.1",
            "--lon", "9.1", "--at", "2025-08-10 18:00",
        ])
        .assert()
        .success()
        .stdout(contains("remote"));
}

#[test]
fn clock_rejects_unknown_employee() {
    let db_path = setup_test_db("clock_unknown");
    init_db_with_roster(&db_path);

    tb()
        .args([
            "--db", &db_path, "clock", "--employee", "99", "--company", "1", "--lat", "45.0",
            "--lon", "9.0",
        ])
        .assert()
        .failure()
        .stderr(contains("not found"));
}

#[test]
fn balance_reports_worked_and_expected() {
    let db_path = setup_test_db("balance");
    init_db_with_roster(&db_path);

    for at in [
        "2025-08-10 09:00",
        "2025-08-10 12:00",
        "2025-08-10 13:00",
        "2025-08-10 18:00",
    ] {
        clock_at(&db_path, "1", "1", at);
    }

    tb()
        .args([
            "--db",
            &db_path,
            "balance",
            "--employee",
            "1",
            "--company",
            "1",
            "--day",
            "2025-08-10",
            "--json",
        ])
        .assert()
        .success()
        .stdout(contains("\"worked_minutes\": 480"))
        .stdout(contains("\"balance_minutes\": 0"))
        .stdout(contains("\"dangling_event\": false"));
}

#[test]
fn balance_on_empty_day_is_full_deficit() {
    let db_path = setup_test_db("balance_empty");
    init_db_with_roster(&db_path);

    tb()
        .args([
            "--db",
            &db_path,
            "balance",
            "--employee",
            "1",
            "--company",
            "1",
            "--day",
            "2025-08-11",
            "--json",
        ])
        .assert()
        .success()
        .stdout(contains("\"worked_minutes\": 0"))
        .stdout(contains("\"balance_minutes\": -480"));
}

#[test]
fn close_folds_day_into_running_balance_once() {
    let db_path = setup_test_db("close_once");
    init_db_with_roster(&db_path);

    // Worked 09:00-17:30 = 510 min against 480 expected → +30.
    clock_at(&db_path, "1", "1", "2025-08-10 09:00");
    clock_at(&db_path, "1", "1", "2025-08-10 17:30");

    tb()
        .args([
            "--db",
            &db_path,
            "close",
            "--employee",
            "1",
            "--company",
            "1",
            "--day",
            "2025-08-10",
        ])
        .assert()
        .success()
        .stdout(contains("delta +00:30"));

    // Second run: nothing applied.
    tb()
        .args([
            "--db",
            &db_path,
            "close",
            "--employee",
            "1",
            "--company",
            "1",
            "--day",
            "2025-08-10",
        ])
        .assert()
        .success()
        .stdout(contains("already closed"));

    tb()
        .args(["--db", &db_path, "employee", "list"])
        .assert()
        .success()
        .stdout(contains("balance=+00:30"));

    // The balance report shows the banked total alongside the day.
    tb()
        .args([
            "--db",
            &db_path,
            "balance",
            "--employee",
            "1",
            "--company",
            "1",
            "--day",
            "2025-08-10",
        ])
        .assert()
        .success()
        .stdout(contains("Running balance: +00:30"));
}

#[test]
fn close_warns_on_dangling_event() {
    let db_path = setup_test_db("close_dangling");
    init_db_with_roster(&db_path);

    clock_at(&db_path, "1", "1", "2025-08-10 09:00");

    tb()
        .args([
            "--db",
            &db_path,
            "close",
            "--employee",
            "1",
            "--company",
            "1",
            "--day",
            "2025-08-10",
        ])
        .assert()
        .success()
        .stdout(contains("trailing event ignored"))
        .stdout(contains("delta -08:00"));
}

#[test]
fn close_all_sweeps_roster_and_audits() {
    let db_path = setup_test_db("close_all");
    init_db_with_roster(&db_path);

    tb()
        .args([
            "--db",
            &db_path,
            "employee",
            "add",
            "--company",
            "1",
            "--name",
            "Grace",
            "--expected",
            "300",
        ])
        .assert()
        .success();

    // Only employee 1 clocked anything.
    clock_at(&db_path, "1", "1", "2025-08-10 09:00");
    clock_at(&db_path, "1", "1", "2025-08-10 17:00");

    tb()
        .args(["--db", &db_path, "close", "--all", "--day", "2025-08-10"])
        .assert()
        .success()
        .stdout(contains("2 closed, 0 already closed, 0 failed"));

    // Re-running the batch for the same day double-counts nothing.
    tb()
        .args(["--db", &db_path, "close", "--all", "--day", "2025-08-10"])
        .assert()
        .success()
        .stdout(contains("0 closed, 2 already closed, 0 failed"));

    tb()
        .args(["--db", &db_path, "employee", "list"])
        .assert()
        .success()
        .stdout(contains("balance=+00:00")) // employee 1: 480 - 480
        .stdout(contains("balance=-05:00")); // employee 2: 0 - 300

    // The batch run is on the persisted audit trail.
    tb()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("closing_batch"))
        .stdout(contains("2025-08-10"));
}

#[test]
fn run_once_closes_yesterday() {
    let db_path = setup_test_db("run_once");
    init_db_with_roster(&db_path);

    tb()
        .args(["--db", &db_path, "run", "--once"])
        .assert()
        .success()
        .stdout(contains("1 closed, 0 already closed, 0 failed"));

    // Yesterday had no events: the full deficit was banked.
    tb()
        .args(["--db", &db_path, "employee", "list"])
        .assert()
        .success()
        .stdout(contains("balance=-08:00"));
}

#[test]
fn list_prints_a_days_events() {
    let db_path = setup_test_db("list_events");
    init_db_with_roster(&db_path);

    clock_at(&db_path, "1", "1", "2025-08-10 09:00");
    clock_at(&db_path, "1", "1", "2025-08-10 17:00");

    tb()
        .args([
            "--db",
            &db_path,
            "list",
            "--employee",
            "1",
            "--day",
            "2025-08-10",
        ])
        .assert()
        .success()
        .stdout(contains("2025-08-10 09:00:00"))
        .stdout(contains("2025-08-10 17:00:00"))
        .stdout(contains("on-site"));
}

#[test]
fn invalid_day_is_rejected() {
    let db_path = setup_test_db("bad_day");
    init_db_with_roster(&db_path);

    tb()
        .args([
            "--db",
            &db_path,
            "balance",
            "--employee",
            "1",
            "--company",
            "1",
            "--day",
            "10-08-2025",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid date"));
}

#[test]
fn employee_add_requires_existing_company() {
    let db_path = setup_test_db("emp_no_company");

    tb()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    tb()
        .args([
            "--db", &db_path, "employee", "add", "--company", "5", "--name", "Ada",
        ])
        .assert()
        .failure()
        .stderr(contains("Company 5 not found"));
}
