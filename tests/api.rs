use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
    response::Response,
};
use demo_api::build_app;
use demo_api::config::{ServerConfig, SheetsConfig};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use std::path::Path;
use tempfile::TempDir;
use tower::ServiceExt;

fn app_in(dir: &Path) -> Router {
    let config = ServerConfig {
        sheets: SheetsConfig {
            dir: dir.to_path_buf(),
            ..SheetsConfig::default()
        },
        ..ServerConfig::default()
    };
    build_app(&config).unwrap()
}

fn test_app() -> (Router, TempDir) {
    let dir = tempfile::tempdir().unwrap();
    (app_in(dir.path()), dir)
}

async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    app.oneshot(request).await.unwrap()
}

async fn post_json(app: Router, uri: &str, body: Value) -> Response {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

async fn text_body(response: Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

async fn json_body(response: Response) -> Value {
    serde_json::from_str(&text_body(response).await).unwrap()
}

#[tokio::test]
async fn root_says_hello_world() {
    let (app, _dir) = test_app();
    let response = get(app, "/").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await, json!({"message": "Hello World"}));
}

#[tokio::test]
async fn responses_carry_a_request_id() {
    let (app, _dir) = test_app();
    let response = get(app, "/").await;
    let request_id = response.headers().get("x-request-id").unwrap().to_str().unwrap();
    assert_eq!(request_id.len(), 36);
}

#[tokio::test]
async fn hello_without_nickname() {
    let (app, _dir) = test_app();
    let response = get(app, "/hello/Sam").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await, json!({"message": "Hello Sam"}));
}

#[tokio::test]
async fn hello_with_nickname() {
    let (app, _dir) = test_app();
    let response = get(app, "/hello/Sam?nickname=Bob").await;
    assert_eq!(json_body(response).await, json!({"message": "Hello Sam (Bob)"}));
}

#[tokio::test]
async fn hello_with_empty_nickname() {
    let (app, _dir) = test_app();
    let response = get(app, "/hello/Sam?nickname=").await;
    assert_eq!(json_body(response).await, json!({"message": "Hello Sam"}));
}

#[tokio::test]
async fn add_sums_operands_in_range() {
    for (x, y) in [(0, 0), (1, 2), (50, 49), (99, 99)] {
        let (app, _dir) = test_app();
        let response = get(app, &format!("/add/{x}/{y}")).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await, json!({"message": x + y}));
    }
}

#[tokio::test]
async fn add_rejects_operands_out_of_range() {
    for uri in ["/add/100/1", "/add/1/100", "/add/-1/5", "/add/5/-1", "/add/1000/1000"] {
        let (app, _dir) = test_app();
        let response = get(app, uri).await;
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY, "{uri}");
    }
}

#[tokio::test]
async fn add_reports_the_failing_field() {
    let (app, _dir) = test_app();
    let response = get(app, "/add/150/3").await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        json_body(response).await,
        json!({"detail": [{
            "type": "less_than",
            "loc": ["path", "x"],
            "msg": "Input should be less than 100",
            "input": "150",
        }]})
    );
}

#[tokio::test]
async fn add_rejects_non_integers() {
    let (app, _dir) = test_app();
    let response = get(app, "/add/abc/1.5").await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = json_body(response).await;
    let detail = body["detail"].as_array().unwrap();
    assert_eq!(detail.len(), 2);
    assert!(detail.iter().all(|error| error["type"] == "int_parsing"));
}

#[tokio::test]
async fn multiply_from_query_and_path_agree() {
    for (x, y) in [(3_i64, 4_i64), (-7, 6), (0, 123), (1_000_000_000, 1_000_000_000)] {
        let (app, _dir) = test_app();
        let from_query = json_body(get(app, &format!("/multiply?x={x}&y={y}")).await).await;
        let (app, _dir) = test_app();
        let from_path = json_body(get(app, &format!("/multiply/{x}/{y}")).await).await;

        assert_eq!(from_query, json!({"message": x * y}));
        assert_eq!(from_query, from_path);
    }
}

#[tokio::test]
async fn multiply_is_exact_for_integers_of_any_size() {
    for uri in [
        "/multiply?x=100000000000000000000&y=2",
        "/multiply/100000000000000000000/2",
    ] {
        let (app, _dir) = test_app();
        let response = get(app, uri).await;
        assert_eq!(response.status(), StatusCode::OK, "{uri}");
        assert_eq!(text_body(response).await, r#"{"message":200000000000000000000}"#);
    }

    let (app, _dir) = test_app();
    let response = get(app, "/multiply?x=-99999999999999999999&y=99999999999999999999").await;
    assert_eq!(
        text_body(response).await,
        r#"{"message":-9999999999999999999800000000000000000001}"#
    );
}

#[tokio::test]
async fn multiply_requires_both_query_parameters() {
    let (app, _dir) = test_app();
    let response = get(app, "/multiply?x=3").await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        json_body(response).await,
        json!({"detail": [{"type": "missing", "loc": ["query", "y"], "msg": "Field required"}]})
    );
}

#[tokio::test]
async fn multiply_rejects_non_integers() {
    let (app, _dir) = test_app();
    let response = get(app, "/multiply/two/3").await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let (app, _dir) = test_app();
    let response = get(app, "/multiply?x=2&y=three").await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn add_user_echoes_name_and_friends() {
    let (app, _dir) = test_app();
    let response = post_json(
        app,
        "/users",
        json!({"name": "A", "age": 1, "address": "x", "friends": ["B"]}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await, json!({"name": "A", "friends": ["B"]}));
}

#[tokio::test]
async fn add_user_coerces_whole_number_ages() {
    for age in [json!("1"), json!(1.0), json!(" 42 ")] {
        let (app, _dir) = test_app();
        let response = post_json(
            app,
            "/users",
            json!({"name": "A", "age": age, "address": "x", "friends": []}),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK, "{age}");
        assert_eq!(json_body(response).await, json!({"name": "A", "friends": []}));
    }
}

#[tokio::test]
async fn add_user_rejects_fractional_ages() {
    let (app, _dir) = test_app();
    let response = post_json(
        app,
        "/users",
        json!({"name": "A", "age": 1.5, "address": "x", "friends": []}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json_body(response).await["detail"][0]["type"], "json_type");
}

#[tokio::test]
async fn add_user_rejects_schema_mismatch() {
    let (app, _dir) = test_app();
    let response = post_json(app, "/users", json!({"name": "A", "age": "old"})).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = json_body(response).await;
    assert_eq!(body["detail"][0]["loc"], json!(["body"]));
}

#[tokio::test]
async fn add_user_rejects_malformed_json() {
    let (app, _dir) = test_app();
    let request = Request::builder()
        .method("POST")
        .uri("/users")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"name\":"))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json_body(response).await["detail"][0]["type"], "json_invalid");
}

#[tokio::test]
async fn add_sheet_writes_the_file() {
    let (app, dir) = test_app();
    let response = post_json(app, "/sheets", json!({"filename": "out.csv", "ids": [1, 2, 3]})).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = json_body(response).await;
    let message = body["message"].as_str().unwrap();
    assert!(message.starts_with("elapsed time: "));
    assert!(message.ends_with('s'));

    let contents = std::fs::read_to_string(dir.path().join("out.csv")).unwrap();
    assert_eq!(contents, "id\n1\n2\n3");
}

#[tokio::test]
async fn add_sheet_accepts_boundary_filenames() {
    for filename in ["a", "abcdefghij", "한글한글한글한글한글"] {
        let (app, dir) = test_app();
        let response = post_json(app, "/sheets", json!({"filename": filename, "ids": [7]})).await;
        assert_eq!(response.status(), StatusCode::CREATED, "{filename}");

        let contents = std::fs::read_to_string(dir.path().join(filename)).unwrap();
        assert_eq!(contents, "id\n7");
    }
}

#[tokio::test]
async fn add_sheet_coerces_whole_number_ids() {
    let (app, dir) = test_app();
    let response = post_json(app, "/sheets", json!({"filename": "out.csv", "ids": ["1", 2.0]})).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let contents = std::fs::read_to_string(dir.path().join("out.csv")).unwrap();
    assert_eq!(contents, "id\n1\n2");
}

#[tokio::test]
async fn add_sheet_rejects_negative_ids() {
    let (app, dir) = test_app();
    let response = post_json(app, "/sheets", json!({"filename": "out.csv", "ids": [-1]})).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        json_body(response).await,
        json!({"detail": [{
            "type": "value_error",
            "loc": ["body", "ids", 0],
            "msg": "Value error, id is less than 0",
            "input": -1,
        }]})
    );
    assert!(!dir.path().join("out.csv").exists());
}

#[tokio::test]
async fn add_sheet_rejects_long_filenames() {
    let (app, _dir) = test_app();
    let response = post_json(app, "/sheets", json!({"filename": "much_too_long.csv", "ids": [1]})).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json_body(response).await["detail"][0]["type"], "string_too_long");
}

#[tokio::test]
async fn add_sheet_rejects_empty_filenames() {
    let (app, _dir) = test_app();
    let response = post_json(app, "/sheets", json!({"filename": "", "ids": [1]})).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json_body(response).await["detail"][0]["type"], "string_too_short");
}

#[tokio::test]
async fn add_sheet_surfaces_filesystem_errors_as_500() {
    let dir = tempfile::tempdir().unwrap();
    let app = app_in(&dir.path().join("missing"));
    let response = post_json(app, "/sheets", json!({"filename": "out.csv", "ids": [1]})).await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = json_body(response).await;
    assert_eq!(body["statusCode"], 500);
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let (app, _dir) = test_app();
    let response = get(app, "/nope").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
