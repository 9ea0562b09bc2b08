//! CLI-level tests driving the real binary against a mocked service.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[test]
fn validation_failure_prints_usage_and_exits_2() {
    let mut cmd = Command::cargo_bin("exoport").unwrap();
    cmd.assert()
        .code(2)
        .stderr(predicate::str::contains("missing appName"))
        .stderr(predicate::str::contains("missing packageName"))
        .stderr(predicate::str::contains("missing output"))
        .stderr(predicate::str::contains("usage: exoport"));
}

#[test]
fn conflicting_content_sources_are_rejected() {
    let mut cmd = Command::cargo_bin("exoport").unwrap();
    cmd.args([
        "-a", "App", "-p", "com.app", "-o", "/tmp/out.mpk", "-c", "/tmp/c.pem", "-k",
        "/tmp/k.pem", "-f", "/tmp/app", "-u", "https://example.com/app.zip",
    ])
    .assert()
    .code(2)
    .stderr(predicate::str::contains(
        "cannot use both contentUrl and contentDir",
    ));
}

#[tokio::test(flavor = "multi_thread")]
async fn builds_and_downloads_an_mpk() {
    let artifact = b"the-built-mpk".to_vec();

    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/upload"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"url": "/r/1.mpk"})),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/r/1.mpk"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(artifact.clone()))
        .expect(1)
        .mount(&server)
        .await;

    let content = TempDir::new().unwrap();
    fs::write(content.path().join("index.html"), b"<html></html>").unwrap();
    let work = TempDir::new().unwrap();
    let output = work.path().join("out.mpk");
    let cert = work.path().join("c.pem");
    let privkey = work.path().join("k.pem");
    fs::write(&cert, b"CERTIFICATE").unwrap();
    fs::write(&privkey, b"PRIVATE KEY").unwrap();

    let uri = server.uri();
    let content_dir = content.path().to_path_buf();
    let output_path = output.clone();
    let cert_path = cert.clone();
    let privkey_path = privkey.clone();

    // assert_cmd blocks, so keep the mock server's runtime threads free
    tokio::task::spawn_blocking(move || {
        let mut cmd = Command::cargo_bin("exoport").unwrap();
        cmd.args(["-a", "App", "-p", "com.app"])
            .arg("-f")
            .arg(&content_dir)
            .arg("-o")
            .arg(&output_path)
            .arg("-c")
            .arg(&cert_path)
            .arg("-k")
            .arg(&privkey_path)
            .arg("--host")
            .arg(&uri)
            .assert()
            .success();
    })
    .await
    .unwrap();

    assert_eq!(fs::read(&output).unwrap(), artifact);
}

#[tokio::test(flavor = "multi_thread")]
async fn pipeline_failure_exits_non_zero_with_diagnostic() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/upload"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let content = TempDir::new().unwrap();
    fs::write(content.path().join("a.txt"), b"a").unwrap();
    let work = TempDir::new().unwrap();
    let cert = work.path().join("c.pem");
    let privkey = work.path().join("k.pem");
    fs::write(&cert, b"CERTIFICATE").unwrap();
    fs::write(&privkey, b"PRIVATE KEY").unwrap();

    let uri = server.uri();
    let content_dir = content.path().to_path_buf();
    let output_path = work.path().join("out.mpk");
    let cert_path = cert.clone();
    let privkey_path = privkey.clone();

    tokio::task::spawn_blocking(move || {
        let mut cmd = Command::cargo_bin("exoport").unwrap();
        cmd.args(["-a", "App", "-p", "com.app"])
            .arg("-f")
            .arg(&content_dir)
            .arg("-o")
            .arg(&output_path)
            .arg("-c")
            .arg(&cert_path)
            .arg("-k")
            .arg(&privkey_path)
            .arg("--host")
            .arg(&uri)
            .assert()
            .code(1)
            .stderr(predicate::str::contains("service error"));
    })
    .await
    .unwrap();
}
