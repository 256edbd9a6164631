mod common;

use common::{single_model_directory, RecordingProvider};
use llm_portal::{GenerationOptions, Portal, PortalError, StaticCredentials, TestPortal};
use serde_json::json;
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn grader(provider: RecordingProvider) -> TestPortal {
    let portal = Portal::with_client("stub-model", Box::new(provider));
    TestPortal::from_portal(
        portal,
        "You are a grader",
        "Grade 1-10",
        GenerationOptions { temperature: 0.2, max_tokens: 1000 },
    )
}

#[tokio::test]
async fn test_evaluate_makes_one_call_with_rubric_question_and_key() {
    let provider = RecordingProvider::replying("Score: 10. Correct.");
    let requests = provider.requests.clone();
    let harness = grader(provider);

    let grading = harness.evaluate("What is 2+2?", Some("4")).await.unwrap();
    assert_eq!(grading, "Score: 10. Correct.");

    let recorded = requests.lock().unwrap();
    assert_eq!(recorded.len(), 1);
    let request = &recorded[0];
    assert!(request.prompt.contains("Grade 1-10"));
    assert!(request.prompt.contains("What is 2+2?"));
    assert!(request.prompt.contains('4'));
    assert_eq!(request.prompt, "Grade 1-10\nWhat is 2+2?\n4");
    assert_eq!(request.system_context.as_deref(), Some("You are a grader"));
    assert_eq!(request.max_tokens, 1000);
}

#[tokio::test]
async fn test_evaluate_without_answer_key() {
    let provider = RecordingProvider::replying("ungraded");
    let requests = provider.requests.clone();
    let harness = grader(provider);

    harness.evaluate("Name a prime.", None).await.unwrap();
    assert_eq!(requests.lock().unwrap()[0].prompt, "Grade 1-10\nName a prime.\n");
}

#[tokio::test]
async fn test_evaluate_returns_raw_text() {
    let harness = grader(RecordingProvider::replying("I'd say 7/10, mostly right"));
    let grading = harness.evaluate("q", Some("a")).await.unwrap();
    assert_eq!(grading, "I'd say 7/10, mostly right");
}

#[tokio::test]
async fn test_evaluate_propagates_client_error() {
    let harness = grader(RecordingProvider::failing(502));
    let err = harness.evaluate("q", Some("a")).await.unwrap_err();
    assert!(matches!(err, PortalError::Client(_)));
}

#[tokio::test]
async fn test_into_portal_keeps_context() {
    let harness = grader(RecordingProvider::replying("ok"));
    assert_eq!(harness.rubric(), "Grade 1-10");
    let portal = harness.into_portal();
    assert_eq!(portal.context(), Some("You are a grader"));
}

#[tokio::test]
async fn test_evaluate_over_http() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(body_string_contains("Grade 1-10\\nWhat is 2+2?\\n4"))
        .and(body_string_contains("You are a grader"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{"message": {"role": "assistant", "content": "10"}}],
            "usage": {"prompt_tokens": 25, "completion_tokens": 1}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let directory = single_model_directory("gpt-4", "Open_AI", &server.uri());
    let creds = StaticCredentials::new().with("OPEN_AI_API_KEY", "sk-test");
    let portal = Portal::from_directory("gpt-4", &directory, &creds).unwrap();
    let harness = TestPortal::from_portal(portal, "You are a grader", "Grade 1-10", GenerationOptions::default());

    assert_eq!(harness.evaluate("What is 2+2?", Some("4")).await.unwrap(), "10");
}

#[tokio::test]
async fn test_new_resolves_through_default_directory() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("model_directory.yaml");
    std::fs::write(&path, "model_providers:\n  qwen2.5:latest: localhost\nendpoints:\n  localhost: http://localhost:11434\n").unwrap();

    std::env::set_var("LLM_PORTAL_DIRECTORY", &path);
    let harness = TestPortal::new("qwen2.5:latest", "You are a grader", "Grade 1-10", 0.1, 200).await;
    std::env::remove_var("LLM_PORTAL_DIRECTORY");

    let harness = harness.unwrap();
    assert_eq!(harness.portal().provider(), "localhost");
    assert_eq!(harness.portal().context(), Some("You are a grader"));
    assert_eq!(harness.options(), GenerationOptions { temperature: 0.1, max_tokens: 200 });
}
