use super::*;
use hidori_core::{Message, MessageType};
use std::path::Path;

#[tokio::test]
async fn push_records_call_and_returns_canned_reply() {
    let driver = FakeDriver::new("deploy", "web-1")
        .with_push_reply(vec![Message::new(MessageType::Success, "ssh", "pushed")]);

    let messages = driver.push(Path::new("/tmp/src"), "/tmp/dest").await.unwrap();

    assert_eq!(messages.len(), 1);
    assert_eq!(driver.calls().len(), 1);
    assert!(matches!(driver.calls()[0], DriverCall::Push { .. }));
}

#[tokio::test]
async fn invoke_records_call_and_returns_canned_reply() {
    let driver = FakeDriver::new("deploy", "web-1")
        .with_invoke_reply(vec![Message::new(MessageType::Info, "ssh", "ran")]);

    let messages = driver
        .invoke("/tmp/executor.py", &["task.json".to_string()])
        .await
        .unwrap();

    assert_eq!(messages.len(), 1);
    assert!(matches!(driver.calls()[0], DriverCall::Invoke { .. }));
}

#[tokio::test]
async fn fail_next_call_surfaces_an_error() {
    let driver = FakeDriver::new("deploy", "web-1");
    driver.fail_next_call();

    let result = driver.push(Path::new("/tmp/src"), "/tmp/dest").await;
    assert!(result.is_err());
}
