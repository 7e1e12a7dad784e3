mod common;

use chrono::DateTime;
use common::TestContext;
use mockito::Matcher;
use predicates::prelude::*;
use serial_test::serial;

#[test]
fn generate_prints_preview_for_requested_platforms() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["generate", "--topic", "Solar Backpack Launch", "-p", "instagram,twitter"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Topic: Solar Backpack Launch"))
        .stdout(predicate::str::contains("Voice: Friendly | Audience: —"))
        .stdout(predicate::str::contains("[instagram Post]"))
        .stdout(predicate::str::contains("[twitter Post]"))
        .stdout(predicate::str::contains("#Solar #Backpack #Launch"))
        .stdout(predicate::str::contains("[linkedin Post]").not());
}

#[test]
fn generate_without_platforms_warns_in_preview() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["generate", "--topic", "kayaks"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No platforms selected."));
}

#[test]
fn blank_topic_fails_with_error() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["generate", "--topic", "   ", "-p", "twitter"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error: Topic must not be blank"));
}

#[test]
fn json_flag_prints_full_package() {
    let ctx = TestContext::new();

    let output = ctx
        .cli()
        .args([
            "generate",
            "--topic",
            "Solar Backpack Launch",
            "--voice",
            "Playful",
            "--audience",
            "hikers",
            "-p",
            "instagram",
            "-p",
            "twitter",
            "--timezone",
            "Asia/Kolkata",
            "--json",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["topic"], "Solar Backpack Launch");
    assert_eq!(value["voice"], "Playful");
    assert_eq!(value["audience"], "hikers");
    assert_eq!(value["platforms"], serde_json::json!(["instagram", "twitter"]));

    let keys: Vec<_> = value["publisher_preview"].as_object().unwrap().keys().cloned().collect();
    assert_eq!(keys, vec!["instagram", "twitter"]);
    assert!(value["image_prompt"].as_str().unwrap().contains("Solar Backpack Launch"));

    let schedule = value["schedule"].as_array().unwrap();
    assert_eq!(schedule.len(), 3);
    for slot in schedule {
        let at = DateTime::parse_from_rfc3339(slot.as_str().unwrap()).unwrap();
        assert_eq!(at.offset().local_minus_utc(), 5 * 3600 + 1800);
    }
}

#[test]
fn output_flag_writes_pretty_json_export() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["generate", "--topic", "Café Opening", "-p", "linkedin", "--output", "out/post.json"])
        .assert()
        .success()
        .stderr(predicate::str::contains("✅ Exported content package to out/post.json"));

    let raw = std::fs::read_to_string(ctx.work_dir().join("out/post.json")).unwrap();
    assert!(raw.starts_with("{\n  \"topic\": \"Café Opening\""));

    let value = ctx.read_json("out/post.json");
    assert!(value["publisher_preview"]["linkedin"]
        .as_str()
        .unwrap()
        .contains("CTA: Share your thoughts in the comments."));
}

#[test]
fn config_defaults_apply_when_flags_are_omitted() {
    let ctx = TestContext::new();
    ctx.write_config(
        r#"[defaults]
voice = "Professional"
platforms = ["linkedin", "x/twitter"]
"#,
    );

    let output = ctx.cli().args(["generate", "--topic", "kayaks", "--json"]).output().unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["voice"], "Professional");
    assert_eq!(value["platforms"], serde_json::json!(["linkedin", "x/twitter"]));
}

#[test]
fn remote_flag_without_endpoint_warns_and_generates_locally() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["generate", "--topic", "kayaks", "-p", "twitter", "--remote"])
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "⚠️  Remote orchestrator not configured; using local generation",
        ))
        .stdout(predicate::str::contains("[twitter Post]"));
}

#[test]
#[serial]
fn remote_payload_is_adopted_and_gaps_filled() {
    let ctx = TestContext::new();
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/run")
        .match_body(Matcher::PartialJson(serde_json::json!({
            "agent": {"name": "content_agent"}
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            serde_json::json!({
                "outputs": [{
                    "text": "```json\n{\"publisher_preview\":{\"Instagram\":\"X\"},\"image_prompt\":\"Y\"}\n```"
                }]
            })
            .to_string(),
        )
        .create();
    ctx.write_config(&format!("[remote]\napi_url = \"{}/run\"\n", server.url()));

    let output = ctx
        .cli()
        .args(["generate", "--topic", "Solar Backpack Launch", "-p", "Instagram", "--remote", "--json"])
        .output()
        .unwrap();

    mock.assert();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["image_prompt"], "Y");
    assert_eq!(value["publisher_preview"]["Instagram"], "X");
    assert!(!value["schedule"].as_array().unwrap().is_empty());
}

#[test]
#[serial]
fn remote_server_error_falls_back_to_local() {
    let ctx = TestContext::new();
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/run")
        .with_status(500)
        .with_body(r#"{"error": {"message": "agent crashed"}}"#)
        .create();
    ctx.write_config(&format!("[remote]\napi_url = \"{}/run\"\n", server.url()));

    let output = ctx
        .cli()
        .args(["generate", "--topic", "kayaks", "-p", "twitter", "--remote", "--json"])
        .output()
        .unwrap();

    mock.assert();
    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("⚠️  Remote generation failed"), "stderr: {}", stderr);

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["schedule"].as_array().unwrap().len(), 3);
    assert!(value["publisher_preview"]["twitter"].as_str().unwrap().contains("#Kayaks"));
}

#[test]
fn missing_explicit_config_is_an_error() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["--config", "nope.toml", "generate", "--topic", "kayaks"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn bare_output_flag_writes_default_file() {
    let ctx = TestContext::new();

    ctx.cli().args(["generate", "--topic", "kayaks", "-p", "twitter", "--output"]).assert().success();

    let value = ctx.read_json("social_preview.json");
    assert_eq!(value["topic"], "kayaks");
}
