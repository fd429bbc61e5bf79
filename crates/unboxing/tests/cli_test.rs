//! Integration tests for the `unboxing` CLI binary.
//!
//! Argument parsing, help output and completions run offline; the resource
//! commands run against a wiremock backend.
#![allow(clippy::unwrap_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ── Helpers ─────────────────────────────────────────────────────────

/// Build a [`Command`] for the `unboxing` binary with env isolation.
///
/// Clears all `UNBOXING_*` env vars, hides the session bus so the keyring
/// falls back to memory, and points config directories at a nonexistent
/// path so tests never touch the user's real configuration.
fn unboxing_cmd() -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("unboxing");
    cmd.env("HOME", "/tmp/unboxing-cli-test-nonexistent")
        .env("XDG_CONFIG_HOME", "/tmp/unboxing-cli-test-nonexistent")
        .env_remove("DBUS_SESSION_BUS_ADDRESS")
        .env_remove("UNBOXING_PROFILE")
        .env_remove("UNBOXING_API_URL")
        .env_remove("UNBOXING_TOKEN")
        .env_remove("UNBOXING_OUTPUT")
        .env_remove("UNBOXING_TIMEOUT")
        .env_remove("UNBOXING_PASSWORD");
    cmd
}

/// `unboxing_cmd()` aimed at a mock backend.
fn against(server: &MockServer) -> assert_cmd::Command {
    let mut cmd = unboxing_cmd();
    cmd.args(["--api-url", &server.uri(), "--color", "never"]);
    cmd
}

/// Concatenate stdout + stderr from a command output for flexible matching.
fn combined_output(output: &std::process::Output) -> String {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    format!("{stdout}{stderr}")
}

// ── Basic invocation ────────────────────────────────────────────────

#[test]
fn test_no_args_shows_help() {
    let output = unboxing_cmd().output().unwrap();
    assert_eq!(output.status.code(), Some(2), "Expected exit code 2");
    let text = combined_output(&output);
    assert!(text.contains("Usage"), "Expected 'Usage' in output:\n{text}");
}

#[test]
fn test_help_flag() {
    unboxing_cmd().arg("--help").assert().success().stdout(
        predicate::str::contains("customers")
            .and(predicate::str::contains("billing"))
            .and(predicate::str::contains("payroll"))
            .and(predicate::str::contains("users"))
            .and(predicate::str::contains("login")),
    );
}

#[test]
fn test_version_flag() {
    unboxing_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("unboxing"));
}

// ── Shell completions ───────────────────────────────────────────────

#[test]
fn test_completions_bash() {
    unboxing_cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty().not());
}

#[test]
fn test_completions_zsh() {
    unboxing_cmd()
        .args(["completions", "zsh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#compdef"));
}

// ── Error cases ─────────────────────────────────────────────────────

#[test]
fn test_invalid_subcommand() {
    let output = unboxing_cmd().arg("foobar").output().unwrap();
    assert!(!output.status.success());
    let text = combined_output(&output);
    assert!(
        text.contains("unrecognized") || text.contains("foobar"),
        "Expected error mentioning invalid subcommand:\n{text}"
    );
}

#[test]
fn test_invalid_output_format() {
    let output = unboxing_cmd()
        .args(["--output", "invalid", "customers", "list"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
    let text = combined_output(&output);
    assert!(
        text.contains("invalid") || text.contains("possible values"),
        "Expected error about valid output formats:\n{text}"
    );
}

#[test]
fn test_billing_add_rejects_bad_date() {
    unboxing_cmd()
        .args(["billing", "add", "--customer-id", "3", "--amount", "10", "--date", "soon"])
        .assert()
        .code(2);
}

#[test]
fn test_non_http_api_url_is_a_usage_error() {
    unboxing_cmd()
        .args(["--api-url", "ftp://files.test", "health"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("api_url"));
}

#[test]
fn test_config_show_no_config() {
    unboxing_cmd()
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[defaults]"));
}

#[test]
fn test_config_path() {
    unboxing_cmd()
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn test_dashboard_without_token_sends_to_login() {
    unboxing_cmd()
        .args(["--profile", "cli-test-signed-out", "dashboard"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("unboxing login"));
}

#[test]
fn test_dashboard_with_token_lists_sections() {
    unboxing_cmd()
        .args(["--token", "abc123", "dashboard"])
        .assert()
        .success()
        .stderr(predicate::str::contains("unboxing customers"));
}

#[test]
fn test_unreachable_api_is_a_connection_error() {
    unboxing_cmd()
        .args(["--api-url", "http://127.0.0.1:1", "health"])
        .assert()
        .code(7)
        .stderr(predicate::str::contains("127.0.0.1:1"));
}

// ── Subcommand help discovery ───────────────────────────────────────

#[test]
fn test_users_subcommands_exist() {
    unboxing_cmd()
        .args(["users", "--help"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("list")
                .and(predicate::str::contains("add"))
                .and(predicate::str::contains("show"))
                .and(predicate::str::contains("update"))
                .and(predicate::str::contains("delete"))
                .and(predicate::str::contains("edit")),
        );
}

#[test]
fn test_config_subcommands_exist() {
    unboxing_cmd()
        .args(["config", "--help"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("init")
                .and(predicate::str::contains("show"))
                .and(predicate::str::contains("path")),
        );
}

// ── Against a mock backend ──────────────────────────────────────────

#[tokio::test(flavor = "multi_thread")]
async fn test_customers_list_renders_table() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/customer"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "name": "Acme", "email": "ops@acme.test", "phone": "555-0100",
             "address": "1 Main St", "version": 1}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    against(&server)
        .args(["customers", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Acme").and(predicate::str::contains("555-0100")));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_customers_list_json_keeps_records() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/customer"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "name": "Acme", "email": "ops@acme.test", "phone": "", "address": "", "version": 1}
        ])))
        .mount(&server)
        .await;

    let output = against(&server)
        .args(["-o", "json-compact", "customers", "list"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let records: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(records[0]["name"], "Acme");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_empty_list_json_is_an_empty_array() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/payroll"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    against(&server)
        .args(["-o", "json-compact", "payroll", "list"])
        .assert()
        .success()
        .stdout(predicate::str::diff("[]\n"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_billing_add_reports_success_and_refreshes() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/billing"))
        .and(body_json(json!({"customer_id": 3, "amount": 49.5, "date": "2024-01-01"})))
        .respond_with(ResponseTemplate::new(201).set_body_string("created"))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/billing"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 8, "customer_id": 3, "amount": 49.5, "date": "2024-01-01T00:00:00Z"}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    against(&server)
        .args([
            "billing", "add", "--customer-id", "3", "--amount", "49.5", "--date", "2024-01-01",
        ])
        .assert()
        .success()
        .stderr(predicate::str::contains("Billing added successfully!"))
        .stdout(predicate::str::contains("49.50").and(predicate::str::contains("1/1/2024")));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_customer_delete_not_found_fails() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/v1/customer/7"))
        .respond_with(ResponseTemplate::new(404).set_body_string("customer not found\n"))
        .mount(&server)
        .await;

    against(&server)
        .args(["customers", "delete", "--id", "7"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error: customer not found"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_payroll_delete_with_yes_reloads_list() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/v1/payroll/12"))
        .respond_with(ResponseTemplate::new(200).set_body_string("deleted"))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/payroll"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    against(&server)
        .args(["--yes", "payroll", "delete", "--id", "12"])
        .assert()
        .success()
        .stderr(
            predicate::str::contains("Payroll deleted successfully!")
                .and(predicate::str::contains("No payrolls found.")),
        );
}

#[tokio::test(flavor = "multi_thread")]
async fn test_payroll_edit_without_changes_points_at_edit() {
    let server = MockServer::start().await;

    against(&server)
        .args(["payroll", "edit", "--id", "7"])
        .assert()
        .success()
        .stderr(predicate::str::contains("unboxing payroll edit --id 7"));

    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_users_show_sends_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/user/4"))
        .and(header("authorization", "Bearer abc123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 4, "created_at": "2024-02-01T09:30:00Z", "name": "Dana",
            "email": "dana@unboxing.test", "role": "HR"
        })))
        .expect(1)
        .mount(&server)
        .await;

    against(&server)
        .args(["--token", "abc123", "users", "show", "--id", "4"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("User Details")
                .and(predicate::str::contains("dana@unboxing.test"))
                .and(predicate::str::contains("2/1/2024")),
        );
}

#[tokio::test(flavor = "multi_thread")]
async fn test_health_reads_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/healthcheck"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            "status: available\nenvironment: development\nversion: 1.0.0\n",
        ))
        .mount(&server)
        .await;

    against(&server)
        .args(["-o", "plain", "health"])
        .assert()
        .success()
        .stdout(predicate::str::diff("available\n"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_login_posts_credentials() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/tokens/authentication"))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "authentication_token": {"token": "TOKEN26CHARSXXXXXXXXXXXXXX", "expiry": "2024-05-03T10:00:00Z"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    against(&server)
        .args([
            "--profile",
            "cli-test-login",
            "login",
            "--email",
            "admin@unboxing.test",
            "--password",
            "hunter22",
        ])
        .assert()
        .success()
        .stderr(predicate::str::contains("Signed in as admin@unboxing.test"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_failed_login_shows_server_text() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/tokens/authentication"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Invalid credentials\n"))
        .mount(&server)
        .await;

    against(&server)
        .args([
            "--profile",
            "cli-test-login",
            "login",
            "--email",
            "admin@unboxing.test",
            "--password",
            "wrong",
        ])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Login failed: Invalid credentials"));
}
