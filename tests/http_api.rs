//! Exercises the client against a local HTTP server speaking the Anti-Captcha API.

use std::time::Duration;

use antigate::{AntiGate, AntiGateError, ImageToTextTask, PollSchedule, Task};
use mockito::{Matcher, Server};
use serde_json::json;

fn client(server: &Server) -> AntiGate {
    AntiGate::builder("test-key")
        .base_url(&server.url())
        .unwrap()
        .poll_schedule(PollSchedule::new(3, Duration::from_millis(10)))
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_balance() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/getBalance")
        .match_header("content-type", "application/json")
        .match_header("accept", "application/json")
        .match_header("user-agent", Matcher::Regex("^antigate-rs/".into()))
        .match_body(Matcher::Json(json!({ "clientKey": "test-key" })))
        .with_header("content-type", "application/json")
        .with_body(r#"{"balance": 12.34, "errorId": 0}"#)
        .create_async()
        .await;

    let balance = client(&server).balance().await.unwrap();

    assert_eq!(balance, 12.34);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_balance_remote_error() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/getBalance")
        .with_body(r#"{"errorId": 1, "errorCode": "ERROR_KEY_DOES_NOT_EXIST", "errorDescription": "Account authorization key not found in the system"}"#)
        .create_async()
        .await;

    let err = client(&server).balance().await.unwrap_err();
    assert_eq!(err.remote_code(), Some("ERROR_KEY_DOES_NOT_EXIST"));
}

#[tokio::test]
async fn test_create_task_sends_task_and_options() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/createTask")
        .match_body(Matcher::Json(json!({
            "clientKey": "test-key",
            "softId": 802,
            "languagePool": "en",
            "task": {
                "type": "NoCaptchaTaskProxyless",
                "websiteURL": "https://example.com",
                "websiteKey": "abc"
            }
        })))
        .with_body(r#"{"errorId": 0, "taskId": 7654321}"#)
        .create_async()
        .await;

    let client = AntiGate::builder("test-key")
        .base_url(&server.url())
        .unwrap()
        .soft_id(802)
        .language_pool("en")
        .build()
        .unwrap();

    let task_id = client
        .create_task(&Task::recaptcha("https://example.com", "abc"))
        .await
        .unwrap();

    assert_eq!(task_id.get(), 7654321);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_create_task_remote_error() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/createTask")
        .with_body(r#"{"errorId": 10, "errorCode": "ERROR_ZERO_BALANCE", "errorDescription": "Account has zero or negative balance"}"#)
        .create_async()
        .await;

    let err = client(&server)
        .create_task(&Task::recaptcha("https://example.com", "abc"))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        AntiGateError::Remote { id: 10, ref code, .. } if code == "ERROR_ZERO_BALANCE"
    ));
}

#[tokio::test]
async fn test_undecodable_body() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/getBalance")
        .with_status(502)
        .with_body("<html>Bad Gateway</html>")
        .create_async()
        .await;

    let err = client(&server).balance().await.unwrap_err();
    assert!(matches!(err, AntiGateError::Decode(_)));
}

#[tokio::test]
async fn test_unreachable_service() {
    let client = AntiGate::builder("test-key")
        .base_url("http://127.0.0.1:1")
        .unwrap()
        .build()
        .unwrap();

    let err = client.balance().await.unwrap_err();
    assert!(matches!(err, AntiGateError::Http(_)));
}

#[tokio::test]
async fn test_solve_image_task() {
    let mut server = Server::new_async().await;
    let create = server
        .mock("POST", "/createTask")
        .match_body(Matcher::PartialJson(json!({
            "task": { "type": "ImageToTextTask", "body": "cG5n", "numeric": 1 }
        })))
        .with_body(r#"{"errorId": 0, "taskId": 42}"#)
        .create_async()
        .await;
    let poll = server
        .mock("POST", "/getTaskResult")
        .match_body(Matcher::Json(json!({ "clientKey": "test-key", "taskId": 42 })))
        .with_body(r#"{"errorId": 0, "status": "ready", "solution": {"text": "deditur"}, "cost": "0.000700"}"#)
        .expect(1)
        .create_async()
        .await;

    let task = ImageToTextTask::from_bytes(b"png").numeric(antigate::NumericMode::OnlyDigits);
    let text = client(&server).solve(task.into()).await.unwrap();

    assert_eq!(text, "deditur");
    create.assert_async().await;
    poll.assert_async().await;
}

#[tokio::test]
async fn test_solve_gives_up_after_countdown() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/createTask")
        .with_body(r#"{"errorId": 0, "taskId": 42}"#)
        .create_async()
        .await;
    let poll = server
        .mock("POST", "/getTaskResult")
        .with_body(r#"{"errorId": 0, "status": "processing"}"#)
        .expect(3)
        .create_async()
        .await;

    let token = client(&server)
        .solve(Task::recaptcha("https://example.com", "abc"))
        .await
        .unwrap();

    assert_eq!(token, "");
    poll.assert_async().await;
}
