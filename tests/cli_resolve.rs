mod common;

use common::TestContext;
use predicates::prelude::*;
use serde_json::Value;

#[test]
fn resolve_prints_variables() {
    let ctx = TestContext::new();
    ctx.fake_cli_success("c1", "s1");

    ctx.cli()
        .args(["resolve", "-t", "dev", "-p", "DEFAULT"])
        .assert()
        .success()
        .stdout("catalog=c1\nschema=s1\n");
}

#[test]
fn resolve_prints_json() {
    let ctx = TestContext::new();

    let output = ctx
        .cli()
        .args(["rv", "-t", "prod", "-p", "PROD", "--strategy", "static", "--json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let value: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value, serde_json::json!({"catalog": "prod_catalog", "schema": "prod_schema"}));
}

#[test]
fn resolve_with_explicit_project_root() {
    let ctx = TestContext::new();
    let elsewhere = tempfile::TempDir::new().unwrap();

    ctx.cli_in(elsewhere.path())
        .args(["resolve", "-C"])
        .arg(ctx.project())
        .args(["-t", "dev", "-p", "DEFAULT", "-s", "static"])
        .assert()
        .success()
        .stdout(predicate::str::contains("catalog=test_catalog"));
}

#[test]
fn resolve_rejects_unknown_project_config_keys() {
    let ctx = TestContext::new();
    ctx.write("dashvars.toml", "catalog = \"nope\"\n");

    ctx.cli()
        .args(["resolve", "-t", "dev", "-p", "DEFAULT", "-s", "static"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to parse project configuration"));
}

#[test]
fn verbose_logs_the_cli_invocation() {
    let ctx = TestContext::new();
    ctx.fake_cli_success("c1", "s1");

    ctx.cli()
        .args(["--verbose", "resolve", "-t", "dev", "-p", "DEFAULT"])
        .assert()
        .success()
        .stderr(predicate::str::contains("running bundle CLI"))
        .stderr(predicate::str::contains("bundle validate -o json -t dev -p DEFAULT"));
}

#[test]
fn invalid_strategy_is_a_usage_error() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["resolve", "-t", "dev", "-p", "DEFAULT", "--strategy", "magic"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid value 'magic'"));
}

#[test]
fn static_resolve_ignores_complex_variables() {
    let ctx = TestContext::new();
    ctx.write_bundle(
        r#"bundle:
  name: metrics
variables:
  cluster:
    type: complex
    default:
      spark_version: 15.4.x-scala2.12
      num_workers: 2
  catalog:
    default: main
  schema:
    default: metrics
targets:
  dev:
    variables:
      catalog: dev_catalog
"#,
    );

    ctx.cli()
        .args(["resolve", "-t", "dev", "-p", "DEFAULT", "-s", "static"])
        .assert()
        .success()
        .stdout("catalog=dev_catalog\nschema=metrics\n");
}
