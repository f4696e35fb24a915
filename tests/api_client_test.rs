use getitdone::api::{ApiError, RestApi, Todo};
use std::time::Duration;

#[test]
fn test_todo_decodes_plain_id() {
    let todo: Todo = serde_json::from_str(r#"{"id":"abc123","text":"Buy milk"}"#).unwrap();
    assert_eq!(todo.id, "abc123");
    assert_eq!(todo.text, "Buy milk");
}

#[test]
fn test_todo_decodes_underscore_id_alias() {
    // The original backend spells the field `_id` and adds bookkeeping
    // fields; both must decode
    let todo: Todo = serde_json::from_str(r#"{"_id":"64f1c0","text":"Walk the dog","__v":0}"#).unwrap();
    assert_eq!(todo.id, "64f1c0");
    assert_eq!(todo.text, "Walk the dog");
}

#[test]
fn test_todo_list_decodes() {
    let body = r#"[{"_id":"1","text":"one"},{"id":"2","text":"two"}]"#;
    let todos: Vec<Todo> = serde_json::from_str(body).unwrap();
    assert_eq!(todos.len(), 2);
    assert_eq!(todos[0].id, "1");
    assert_eq!(todos[1].id, "2");
}

#[test]
fn test_todo_serializes_with_plain_id() {
    let todo = Todo {
        id: "1".to_string(),
        text: "Buy milk".to_string(),
    };
    let value = serde_json::to_value(&todo).unwrap();
    assert_eq!(value, serde_json::json!({ "id": "1", "text": "Buy milk" }));
}

#[test]
fn test_rest_api_accepts_http_base_urls() {
    assert!(RestApi::new("http://localhost:4000/api", Duration::from_secs(5)).is_ok());
    assert!(RestApi::new("https://todos.example.com", Duration::from_secs(5)).is_ok());
}

#[test]
fn test_api_error_messages_name_the_failure() {
    let not_found = ApiError::NotFound("abc123".to_string());
    assert_eq!(not_found.to_string(), "Todo not found: abc123");

    let network = ApiError::Network("request timed out".to_string());
    assert!(network.to_string().contains("request timed out"));

    let api = ApiError::Api {
        status: 500,
        body: "boom".to_string(),
    };
    assert!(api.to_string().contains("500"));
}
