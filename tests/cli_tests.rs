use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{init_db, login, setup_test_db, temp_image, tk};

#[test]
fn test_init_and_admin_first_page() {
    let db_path = setup_test_db("admin_first_page");
    init_db(&db_path);
    login(&db_path, "admin");

    tk().args(["--db", &db_path, "tanker", "list"])
        .assert()
        .success()
        .stdout(contains("AP31XY1001"))
        .stdout(contains("AP31XY1005"))
        .stdout(contains("AP31XY1006").not())
        .stdout(contains("1 / 2"));

    tk().args(["--db", &db_path, "tanker", "list", "--page", "2"])
        .assert()
        .success()
        .stdout(contains("AP31XY1006"))
        .stdout(contains("AP31XY1010"))
        .stdout(contains("AP31XY1001").not())
        .stdout(contains("2 / 2"));
}

#[test]
fn test_branch_user_sees_own_branch_only() {
    let db_path = setup_test_db("branch_scope");
    init_db(&db_path);
    login(&db_path, "branch1");

    tk().args(["--db", &db_path, "branch", "set", "Branch B"])
        .assert()
        .success();

    tk().args(["--db", &db_path, "tanker", "list"])
        .assert()
        .success()
        .stdout(contains("AP31XY1002"))
        .stdout(contains("AP31XY1004"))
        .stdout(contains("AP31XY1008"))
        .stdout(contains("AP31XY1001").not())
        .stdout(contains("AP31XY1005").not())
        .stdout(contains("1 / 1"));

    // Out of scope records cannot be opened either
    tk().args(["--db", &db_path, "tanker", "view", "1"])
        .assert()
        .success()
        .stdout(contains("No tanker record with id 1"));
}

#[test]
fn test_list_requires_login() {
    let db_path = setup_test_db("needs_login");
    init_db(&db_path);

    tk().args(["--db", &db_path, "tanker", "list"])
        .assert()
        .failure()
        .stderr(contains("Not logged in"));
}

#[test]
fn test_bad_credentials() {
    let db_path = setup_test_db("bad_credentials");
    init_db(&db_path);

    tk().args(["--db", &db_path, "login", "admin", "wrong"])
        .assert()
        .failure()
        .stderr(contains("Invalid username or password"));

    tk().args(["--db", &db_path, "whoami"])
        .assert()
        .success()
        .stdout(contains("Not logged in."));
}

#[test]
fn test_page_out_of_range_is_clamped_by_cli() {
    let db_path = setup_test_db("page_clamp");
    init_db(&db_path);
    login(&db_path, "admin");

    tk().args(["--db", &db_path, "tanker", "list", "--page", "9"])
        .assert()
        .success()
        .stdout(contains("out of range"))
        .stdout(contains("AP31XY1010"))
        .stdout(contains("2 / 2"));
}

#[test]
fn test_date_filter() {
    let db_path = setup_test_db("date_filter");
    init_db(&db_path);
    login(&db_path, "admin");

    tk().args(["--db", &db_path, "tanker", "list", "--date", "2000-01-01"])
        .assert()
        .success()
        .stdout(contains("No tanker records found"))
        .stdout(contains("1 / 1"));

    tk().args(["--db", &db_path, "tanker", "list", "--date", "01/01/2000"])
        .assert()
        .failure()
        .stderr(contains("Invalid date format"));

    tk().args([
        "--db",
        &db_path,
        "tanker",
        "edit",
        "3",
        "--date-time",
        "2000-01-01 08:15",
    ])
    .assert()
    .success();

    tk().args(["--db", &db_path, "tanker", "list", "--date", "2000-01-01"])
        .assert()
        .success()
        .stdout(contains("AP31XY1003"))
        .stdout(contains("AP31XY1001").not());
}

#[test]
fn test_list_json_output() {
    let db_path = setup_test_db("list_json");
    init_db(&db_path);
    login(&db_path, "branch2");

    let output = tk()
        .args(["--db", &db_path, "tanker", "list", "--json"])
        .output()
        .expect("failed to run tanker list --json");
    assert!(output.status.success());

    let json: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is valid JSON");
    assert_eq!(json["total"], 4);
    assert_eq!(json["total_pages"], 1);
    assert_eq!(json["visible"][0]["branch"], "Branch A");
}

#[test]
fn test_admin_edit_without_validation() {
    let db_path = setup_test_db("admin_edit");
    init_db(&db_path);
    login(&db_path, "admin");

    tk().args([
        "--db",
        &db_path,
        "tanker",
        "edit",
        "4",
        "--owner-name",
        "Sathish K",
        "--set",
        "capacity=lots",
    ])
    .assert()
    .success()
    .stdout(contains("Tanker record 4 updated"));

    tk().args(["--db", &db_path, "tanker", "view", "4"])
        .assert()
        .success()
        .stdout(contains("Sathish K"))
        .stdout(contains("lots KL"));

    // Order is unchanged after the edit
    tk().args(["--db", &db_path, "tanker", "list"])
        .assert()
        .success()
        .stdout(contains("AP31XY1004"));

    tk().args(["--db", &db_path, "tanker", "edit", "404", "--owner-name", "X"])
        .assert()
        .success()
        .stdout(contains("nothing changed"));

    tk().args(["--db", &db_path, "tanker", "edit", "4", "--set", "colour=red"])
        .assert()
        .failure()
        .stderr(contains("Unknown record field"));
}

#[test]
fn test_branch_user_edits_within_own_branch() {
    let db_path = setup_test_db("branch_edit");
    init_db(&db_path);
    login(&db_path, "branch1");

    // Record 1 belongs to the default scope "Branch A"
    tk().args(["--db", &db_path, "tanker", "edit", "1", "--owner-name", "Suresh R"])
        .assert()
        .success()
        .stdout(contains("Tanker record 1 updated"));

    tk().args(["--db", &db_path, "tanker", "view", "1"])
        .assert()
        .success()
        .stdout(contains("Suresh R"));

    // Record 2 is Branch B: same path as an unknown id
    tk().args(["--db", &db_path, "tanker", "edit", "2", "--owner-name", "X"])
        .assert()
        .success()
        .stdout(contains("nothing changed"));

    tk().args(["--db", &db_path, "tanker", "edit", "1", "--branch", "Branch B"])
        .assert()
        .failure()
        .stderr(contains("Not authorized"));

    login(&db_path, "admin");
    tk().args(["--db", &db_path, "tanker", "view", "2"])
        .assert()
        .success()
        .stdout(contains("Ramesh"))
        .stdout(contains("Owner Name     : X").not());
}

#[test]
fn test_shift_cycle() {
    let db_path = setup_test_db("shift_cycle");
    let image = temp_image("shift_cycle");
    init_db(&db_path);
    login(&db_path, "branch1");

    tk().args(["--db", &db_path, "shift", "end"])
        .assert()
        .failure()
        .stderr(contains("not started"));

    tk().args(["--db", &db_path, "shift", "start", "--image", &image])
        .assert()
        .failure()
        .stderr(contains("Please enter your name"));

    tk().args(["--db", &db_path, "shift", "start", "--name", "Alice"])
        .assert()
        .failure()
        .stderr(contains("Camera cancelled"));

    tk().args([
        "--db",
        &db_path,
        "shift",
        "start",
        "--name",
        "Alice",
        "--image",
        &image,
    ])
    .assert()
    .success()
    .stdout(contains("Alice started"));

    tk().args(["--db", &db_path, "shift", "status"])
        .assert()
        .success()
        .stdout(contains("Alice"));

    tk().args(["--db", &db_path, "dashboard"])
        .assert()
        .success()
        .stdout(contains("Welcome Branch User"))
        .stdout(contains("Current Employee"))
        .stdout(contains("Alice"));

    tk().args(["--db", &db_path, "shift", "end"])
        .assert()
        .success()
        .stdout(contains("Alice ended"));

    tk().args(["--db", &db_path, "shift", "status"])
        .assert()
        .success()
        .stdout(contains("No active shift"));
}

#[test]
fn test_shift_missing_image_fails() {
    let db_path = setup_test_db("shift_missing_image");
    init_db(&db_path);
    login(&db_path, "branch2");

    tk().args([
        "--db",
        &db_path,
        "shift",
        "start",
        "--name",
        "Alice",
        "--image",
        "/definitely/not/here.jpg",
    ])
    .assert()
    .failure()
    .stderr(contains("Camera error"));
}

#[test]
fn test_logout_ends_session_and_shift() {
    let db_path = setup_test_db("logout");
    let image = temp_image("logout");
    init_db(&db_path);
    login(&db_path, "branch1");

    tk().args([
        "--db",
        &db_path,
        "shift",
        "start",
        "--name",
        "Bob",
        "--image",
        &image,
    ])
    .assert()
    .success();

    tk().args(["--db", &db_path, "logout"])
        .assert()
        .success();

    tk().args(["--db", &db_path, "whoami"])
        .assert()
        .success()
        .stdout(contains("Not logged in."));

    login(&db_path, "branch1");
    tk().args(["--db", &db_path, "shift", "status"])
        .assert()
        .success()
        .stdout(contains("No active shift"));
}

#[test]
fn test_admin_only_surfaces() {
    let db_path = setup_test_db("admin_only");
    init_db(&db_path);

    login(&db_path, "admin");
    tk().args(["--db", &db_path, "bunker", "list"])
        .assert()
        .success()
        .stdout(contains("Bunker A"))
        .stdout(contains("Bunker F").not())
        .stdout(contains("1 / 2"));

    tk().args(["--db", &db_path, "bunker", "view", "3"])
        .assert()
        .success()
        .stdout(contains("Bunker C"))
        .stdout(contains("Night"));

    tk().args(["--db", &db_path, "shift", "status"])
        .assert()
        .failure()
        .stderr(contains("Not authorized"));

    tk().args(["--db", &db_path, "dashboard"])
        .assert()
        .success()
        .stdout(contains("Welcome Admin"))
        .stdout(contains("Total Branches"))
        .stdout(contains("Bunker Details"));

    login(&db_path, "branch1");
    tk().args(["--db", &db_path, "bunker", "list"])
        .assert()
        .failure()
        .stderr(contains("Not authorized"));

    tk().args(["--db", &db_path, "whoami"])
        .assert()
        .success()
        .stdout(contains("Bunker Details").not());
}

#[test]
fn test_add_tanker_record() {
    let db_path = setup_test_db("add_tanker");
    let voucher = temp_image("add_tanker_voucher");
    let photo = temp_image("add_tanker_photo");
    init_db(&db_path);
    login(&db_path, "branch1");

    tk().args([
        "--db",
        &db_path,
        "tanker",
        "add",
        "--tanker-number",
        "AP31XY2001",
        "--owner-name",
        "Lakshmi",
        "--capacity",
        "6000",
    ])
    .assert()
    .failure()
    .stderr(contains("Please fill all required fields."));

    tk().args([
        "--db",
        &db_path,
        "tanker",
        "add",
        "--tanker-number",
        "AP31XY2001",
        "--owner-name",
        "Lakshmi",
        "--capacity",
        "6000",
        "--receipt-number",
        "RV2001",
        "--voucher-amount",
        "16000",
        "--meter-start",
        "210",
        "--meter-end",
        "640",
        "--voucher-photo",
        &voucher,
        "--tanker-photo",
        &photo,
    ])
    .assert()
    .success()
    .stdout(contains("Tanker record 11 added for Branch A"));

    tk().args(["--db", &db_path, "tanker", "list"])
        .assert()
        .success()
        .stdout(contains("AP31XY2001"))
        .stdout(contains("1 / 1"));
}

#[test]
fn test_internal_log() {
    let db_path = setup_test_db("internal_log");
    init_db(&db_path);
    login(&db_path, "admin");

    tk().args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("Internal log"))
        .stdout(contains("login"))
        .stdout(contains("role=admin"));
}
