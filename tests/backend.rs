use serde_json::json;
use todoboard::backend::{BackendError, CreateTodoArgs, DummyJsonBackend, TodoBackend};
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn backend_for(server: &MockServer) -> DummyJsonBackend {
    DummyJsonBackend::new(&format!("{}/todos", server.uri()))
}

#[tokio::test]
async fn test_fetch_todos_requests_limit() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/todos"))
        .and(query_param("limit", "100"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "todos": [
                {"id": 1, "todo": "Do something nice for someone you care about", "completed": false, "userId": 152},
                {"id": 2, "todo": "Memorize a poem", "completed": true, "userId": 13}
            ],
            "total": 254,
            "skip": 0,
            "limit": 2
        })))
        .expect(1)
        .mount(&server)
        .await;

    let todos = backend_for(&server).await.fetch_todos(100).await.unwrap();

    assert_eq!(todos.len(), 2);
    assert_eq!(todos[0].id, 1);
    assert_eq!(todos[1].todo, "Memorize a poem");
    assert!(todos[1].completed);
    assert_eq!(todos[1].user_id, 13);
}

#[tokio::test]
async fn test_fetch_todos_without_paging_fields() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/todos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "todos": [] })))
        .mount(&server)
        .await;

    let todos = backend_for(&server).await.fetch_todos(10).await.unwrap();
    assert!(todos.is_empty());
}

#[tokio::test]
async fn test_create_todo_posts_to_add() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/todos/add"))
        .and(body_json(json!({ "todo": "Buy milk", "completed": false, "userId": 1 })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 255, "todo": "Buy milk", "completed": false, "userId": 1
        })))
        .expect(1)
        .mount(&server)
        .await;

    let echoed = backend_for(&server)
        .await
        .create_todo(CreateTodoArgs {
            todo: "Buy milk".to_string(),
            completed: false,
            user_id: 1,
        })
        .await
        .unwrap();

    assert_eq!(echoed.id, 255);
    assert_eq!(echoed.todo, "Buy milk");
}

#[tokio::test]
async fn test_delete_todo_uses_item_url() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/todos/7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 7, "todo": "Go shopping", "completed": false, "userId": 5, "isDeleted": true
        })))
        .expect(1)
        .mount(&server)
        .await;

    backend_for(&server).await.delete_todo(7).await.unwrap();
}

#[tokio::test]
async fn test_non_success_status_is_api_error() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/todos/500"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Todo with id '500' not found"))
        .mount(&server)
        .await;

    let err = backend_for(&server).await.delete_todo(500).await.unwrap_err();
    match err {
        BackendError::Api { status, body } => {
            assert_eq!(status, 404);
            assert!(body.contains("not found"));
        }
        other => panic!("expected Api error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_malformed_body_is_invalid_data() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/todos"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let err = backend_for(&server).await.fetch_todos(100).await.unwrap_err();
    assert!(matches!(err, BackendError::InvalidData(_)));
}

#[tokio::test]
async fn test_unreachable_host_is_network_error() {
    // Grab a free port and release it so nothing is listening there
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let backend = DummyJsonBackend::new(&format!("http://127.0.0.1:{}/todos", port));
    let err = backend.fetch_todos(100).await.unwrap_err();
    assert!(matches!(err, BackendError::Network(_)));
}
