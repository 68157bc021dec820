//! HTTP-level tests against the full router backed by in-memory SQLite.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use axum_extra::headers::{Authorization, HeaderMapExt};
use chrono::{DateTime, Utc};
use serde_json::{json, Value};
use tower::ServiceExt;

use blog_pessoal::{create_router, AppState, Config, Database};

async fn test_app(auth_required: bool) -> Router {
    let config = Config {
        database_url: "sqlite::memory:".to_string(),
        auth_required,
        ..Config::default()
    };
    let db = Arc::new(Database::connect(&config).await.unwrap());
    create_router(AppState::from_config(db, &config))
}

struct TestResponse {
    status: StatusCode,
    headers: axum::http::HeaderMap,
    body: Vec<u8>,
}

impl TestResponse {
    fn json(&self) -> Value {
        serde_json::from_slice(&self.body).unwrap()
    }
}

async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
    credentials: Option<(&str, &str)>,
) -> TestResponse {
    let mut builder = Request::builder().method(method).uri(uri);
    if body.is_some() {
        builder = builder.header("content-type", "application/json");
    }
    let mut request = builder
        .body(match body {
            Some(value) => Body::from(value.to_string()),
            None => Body::empty(),
        })
        .unwrap();
    if let Some((user, pass)) = credentials {
        request
            .headers_mut()
            .typed_insert(Authorization::basic(user, pass));
    }

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec();

    TestResponse {
        status,
        headers,
        body,
    }
}

async fn get(app: &Router, uri: &str) -> TestResponse {
    send(app, Method::GET, uri, None, None).await
}

async fn post(app: &Router, uri: &str, body: Value) -> TestResponse {
    send(app, Method::POST, uri, Some(body), None).await
}

async fn put(app: &Router, uri: &str, body: Value) -> TestResponse {
    send(app, Method::PUT, uri, Some(body), None).await
}

async fn delete(app: &Router, uri: &str) -> TestResponse {
    send(app, Method::DELETE, uri, None, None).await
}

// =============================================================================
// Operational endpoints
// =============================================================================

#[tokio::test]
async fn test_root_and_health() {
    let app = test_app(false).await;

    let root = get(&app, "/").await;
    assert_eq!(root.status, StatusCode::OK);
    assert!(!root.body.is_empty());

    let health = get(&app, "/health").await;
    assert_eq!(health.status, StatusCode::OK);
    let body = health.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["services"]["database"]["status"], "healthy");
}

#[tokio::test]
async fn test_openapi_document_is_served() {
    let app = test_app(false).await;

    let response = get(&app, "/api-docs/openapi.json").await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.json()["paths"]["/postagens"].is_object());
}

// =============================================================================
// Postagens
// =============================================================================

#[tokio::test]
async fn test_create_then_get_postagem() {
    let app = test_app(false).await;

    let created = post(
        &app,
        "/postagens",
        json!({"titulo": "Olá", "texto": "Mundo!"}),
    )
    .await;
    assert_eq!(created.status, StatusCode::CREATED);
    let created = created.json();
    let id = created["id"].as_i64().unwrap();
    assert!(created["data"].is_string());

    let fetched = get(&app, &format!("/postagens/{id}")).await;
    assert_eq!(fetched.status, StatusCode::OK);
    let fetched = fetched.json();
    assert_eq!(fetched["titulo"], "Olá");
    assert_eq!(fetched["texto"], "Mundo!");

    let all = get(&app, "/postagens").await.json();
    assert_eq!(all.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_create_postagem_ignores_client_id() {
    let app = test_app(false).await;

    let created = post(
        &app,
        "/postagens",
        json!({"id": 500, "titulo": "Título", "texto": "Texto válido"}),
    )
    .await;

    assert_eq!(created.status, StatusCode::CREATED);
    assert_ne!(created.json()["id"], 500);
    assert_eq!(get(&app, "/postagens/500").await.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_invalid_postagem_is_rejected_without_insert() {
    let app = test_app(false).await;

    for body in [
        json!({"titulo": "", "texto": "Mundo!"}),
        json!({"titulo": "ab", "texto": "Mundo!"}),
        json!({"titulo": "Olá", "texto": "    "}),
        json!({"texto": "Mundo!"}),
    ] {
        let response = post(&app, "/postagens", body).await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(response.json()["error"]["code"], "VALIDATION_ERROR");
    }

    let blank = post(&app, "/postagens", json!({"titulo": "   ", "texto": "Mundo!"})).await;
    assert!(blank.json()["error"]["message"]
        .as_str()
        .unwrap()
        .contains("O título é obrigatório"));

    let all = get(&app, "/postagens").await.json();
    assert!(all.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_malformed_json_is_bad_request() {
    let app = test_app(false).await;

    let request = Request::builder()
        .method(Method::POST)
        .uri("/postagens")
        .header("content-type", "application/json")
        .body(Body::from("{\"titulo\": "))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_get_missing_postagem_is_empty_404() {
    let app = test_app(false).await;

    let response = get(&app, "/postagens/999").await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert!(response.body.is_empty());
}

#[tokio::test]
async fn test_non_numeric_id_is_bad_request() {
    let app = test_app(false).await;

    assert_eq!(get(&app, "/postagens/abc").await.status, StatusCode::BAD_REQUEST);
    assert_eq!(delete(&app, "/temas/abc").await.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_postagem() {
    let app = test_app(false).await;

    let id = post(&app, "/postagens", json!({"titulo": "Antigo", "texto": "Texto antigo"}))
        .await
        .json()["id"]
        .as_i64()
        .unwrap();

    let updated = put(
        &app,
        "/postagens",
        json!({"id": id, "titulo": "Novo", "texto": "Texto novo"}),
    )
    .await;
    assert_eq!(updated.status, StatusCode::OK);
    assert_eq!(updated.json()["titulo"], "Novo");

    let fetched = get(&app, &format!("/postagens/{id}")).await.json();
    assert_eq!(fetched["texto"], "Texto novo");
}

fn data_of(postagem: &Value) -> DateTime<Utc> {
    postagem["data"].as_str().unwrap().parse().unwrap()
}

#[tokio::test]
async fn test_update_refreshes_data_and_ignores_client_value() {
    let app = test_app(false).await;
    let stale: DateTime<Utc> = "2000-01-01T00:00:00Z".parse().unwrap();

    let created = post(
        &app,
        "/postagens",
        json!({"titulo": "Antigo", "texto": "Texto antigo", "data": "2000-01-01T00:00:00Z"}),
    )
    .await;
    assert_eq!(created.status, StatusCode::CREATED);
    let created = created.json();
    let id = created["id"].as_i64().unwrap();
    let original = data_of(&created);
    assert_ne!(original, stale);

    tokio::time::sleep(Duration::from_millis(20)).await;

    let updated = put(
        &app,
        "/postagens",
        json!({
            "id": id,
            "titulo": "Novo",
            "texto": "Texto novo",
            "data": "2000-01-01T00:00:00Z"
        }),
    )
    .await;
    assert_eq!(updated.status, StatusCode::OK);
    let refreshed = data_of(&updated.json());
    assert_ne!(refreshed, stale);
    assert!(refreshed > original);

    let fetched = get(&app, &format!("/postagens/{id}")).await.json();
    assert!(data_of(&fetched) > original);
}

#[tokio::test]
async fn test_update_unknown_postagem_is_empty_404() {
    let app = test_app(false).await;

    let response = put(
        &app,
        "/postagens",
        json!({"id": 42, "titulo": "Título", "texto": "Texto válido"}),
    )
    .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert!(response.body.is_empty());
    assert!(get(&app, "/postagens").await.json().as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_update_without_id_is_bad_request() {
    let app = test_app(false).await;

    let response = put(
        &app,
        "/postagens",
        json!({"titulo": "Título", "texto": "Texto válido"}),
    )
    .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_delete_postagem() {
    let app = test_app(false).await;

    let id = post(&app, "/postagens", json!({"titulo": "Olá", "texto": "Mundo!"}))
        .await
        .json()["id"]
        .as_i64()
        .unwrap();

    let deleted = delete(&app, &format!("/postagens/{id}")).await;
    assert_eq!(deleted.status, StatusCode::NO_CONTENT);
    assert!(deleted.body.is_empty());

    assert_eq!(
        get(&app, &format!("/postagens/{id}")).await.status,
        StatusCode::NOT_FOUND
    );

    let again = delete(&app, &format!("/postagens/{id}")).await;
    assert_eq!(again.status, StatusCode::NOT_FOUND);
    assert_eq!(again.json()["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_search_by_titulo_ignores_case() {
    let app = test_app(false).await;

    post(&app, "/postagens", json!({"titulo": "Hello World", "texto": "Primeiro"})).await;
    post(&app, "/postagens", json!({"titulo": "Outro assunto", "texto": "Segundo"})).await;
    post(&app, "/postagens", json!({"titulo": "100% hello", "texto": "Terceiro"})).await;

    let found = get(&app, "/postagens/titulo/hello").await.json();
    assert_eq!(found.as_array().unwrap().len(), 2);

    let upper = get(&app, "/postagens/titulo/WORLD").await.json();
    assert_eq!(upper.as_array().unwrap().len(), 1);
    assert_eq!(upper[0]["titulo"], "Hello World");

    // Wildcards match literally
    let percent = get(&app, "/postagens/titulo/%25").await.json();
    assert_eq!(percent.as_array().unwrap().len(), 1);
    assert_eq!(percent[0]["titulo"], "100% hello");
}

// =============================================================================
// Temas
// =============================================================================

#[tokio::test]
async fn test_tema_lifecycle_with_posts() {
    let app = test_app(false).await;

    let created = post(&app, "/temas", json!({"descricao": "Rust"})).await;
    assert_eq!(created.status, StatusCode::CREATED);
    let tema_id = created.json()["id"].as_i64().unwrap();

    let postagem = post(
        &app,
        "/postagens",
        json!({"titulo": "Ownership", "texto": "Borrow checker", "tema_id": tema_id}),
    )
    .await;
    assert_eq!(postagem.status, StatusCode::CREATED);
    assert_eq!(postagem.json()["tema_id"], tema_id);

    let tema = get(&app, &format!("/temas/{tema_id}")).await.json();
    assert_eq!(tema["descricao"], "Rust");
    assert_eq!(tema["postagem"].as_array().unwrap().len(), 1);
    assert_eq!(tema["postagem"][0]["titulo"], "Ownership");

    let updated = put(&app, "/temas", json!({"id": tema_id, "descricao": "Rust lang"})).await;
    assert_eq!(updated.status, StatusCode::OK);
    assert_eq!(updated.json()["descricao"], "Rust lang");

    let search = get(&app, "/temas/descricao/LANG").await.json();
    assert_eq!(search.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_delete_tema_cascades_to_posts() {
    let app = test_app(false).await;

    let java = post(&app, "/temas", json!({"descricao": "Java"})).await;
    assert_eq!(java.status, StatusCode::CREATED);
    let tema_id = java.json()["id"].as_i64().unwrap();

    let golang = post(&app, "/temas", json!({"descricao": "Golang"})).await;
    assert_eq!(golang.status, StatusCode::CREATED);
    let other_id = golang.json()["id"].as_i64().unwrap();

    for titulo in ["Streams", "Records"] {
        let created = post(
            &app,
            "/postagens",
            json!({"titulo": titulo, "texto": "Conteúdo", "tema_id": tema_id}),
        )
        .await;
        assert_eq!(created.status, StatusCode::CREATED);
    }
    let kept = post(
        &app,
        "/postagens",
        json!({"titulo": "Goroutines", "texto": "Conteúdo", "tema_id": other_id}),
    )
    .await;
    assert_eq!(kept.status, StatusCode::CREATED);

    let deleted = delete(&app, &format!("/temas/{tema_id}")).await;
    assert_eq!(deleted.status, StatusCode::NO_CONTENT);

    assert_eq!(
        get(&app, &format!("/temas/{tema_id}")).await.status,
        StatusCode::NOT_FOUND
    );
    let remaining = get(&app, "/postagens").await.json();
    assert_eq!(remaining.as_array().unwrap().len(), 1);
    assert_eq!(remaining[0]["titulo"], "Goroutines");

    let other = get(&app, &format!("/temas/{other_id}")).await.json();
    assert_eq!(other["postagem"].as_array().unwrap().len(), 1);

    let missing = delete(&app, &format!("/temas/{tema_id}")).await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_invalid_tema_requests() {
    let app = test_app(false).await;

    let blank = post(&app, "/temas", json!({"descricao": "   "})).await;
    assert_eq!(blank.status, StatusCode::BAD_REQUEST);
    assert!(blank.json()["error"]["message"]
        .as_str()
        .unwrap()
        .contains("O atributo descrição é obrigatório"));

    let unknown = put(&app, "/temas", json!({"id": 77, "descricao": "Kotlin"})).await;
    assert_eq!(unknown.status, StatusCode::NOT_FOUND);
    assert!(unknown.body.is_empty());

    let no_id = put(&app, "/temas", json!({"descricao": "Kotlin"})).await;
    assert_eq!(no_id.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_postagem_with_unknown_tema_is_bad_request() {
    let app = test_app(false).await;

    let response = post(
        &app,
        "/postagens",
        json!({"titulo": "Título", "texto": "Texto válido", "tema_id": 12345}),
    )
    .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.json()["error"]["message"], "Tema não existe");
}

// =============================================================================
// Usuarios and authentication
// =============================================================================

async fn register(app: &Router, nome: &str, usuario: &str, senha: &str) -> TestResponse {
    post(
        app,
        "/usuarios/cadastrar",
        json!({"nome": nome, "usuario": usuario, "senha": senha}),
    )
    .await
}

#[tokio::test]
async fn test_register_and_lookup_usuario() {
    let app = test_app(false).await;

    let created = register(&app, "Maria da Silva", "maria@email.com", "segredo123").await;
    assert_eq!(created.status, StatusCode::CREATED);
    let created = created.json();
    assert_eq!(created["usuario"], "maria@email.com");
    assert!(created.get("senha").is_none());
    let id = created["id"].as_i64().unwrap();

    let fetched = get(&app, &format!("/usuarios/{id}")).await;
    assert_eq!(fetched.status, StatusCode::OK);
    assert_eq!(fetched.json()["nome"], "Maria da Silva");

    let all = get(&app, "/usuarios/all").await.json();
    assert_eq!(all.as_array().unwrap().len(), 1);
    assert!(all[0].get("senha").is_none());

    let by_name = get(&app, "/usuarios/nome/SILVA").await.json();
    assert_eq!(by_name.as_array().unwrap().len(), 1);

    assert_eq!(get(&app, "/usuarios/999").await.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_register_duplicate_usuario_conflicts() {
    let app = test_app(false).await;

    register(&app, "Maria", "maria@email.com", "segredo123").await;
    let duplicate = register(&app, "Outra Maria", "maria@email.com", "outrasenha").await;

    assert_eq!(duplicate.status, StatusCode::CONFLICT);
    assert_eq!(duplicate.json()["error"]["code"], "CONFLICT");
}

#[tokio::test]
async fn test_register_invalid_usuario() {
    let app = test_app(false).await;

    let response = register(&app, "Maria", "maria@email.com", "curta").await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(get(&app, "/usuarios/all").await.json().as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_me_requires_basic_auth() {
    let app = test_app(false).await;
    register(&app, "Ana", "ana@email.com", "segredo123").await;

    let anonymous = get(&app, "/usuarios/me").await;
    assert_eq!(anonymous.status, StatusCode::UNAUTHORIZED);
    assert_eq!(anonymous.json()["error"]["code"], "UNAUTHORIZED");
    assert!(anonymous.headers.contains_key("www-authenticate"));

    let wrong = send(
        &app,
        Method::GET,
        "/usuarios/me",
        None,
        Some(("ana@email.com", "errada123")),
    )
    .await;
    assert_eq!(wrong.status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong.json()["error"]["code"], "INVALID_CREDENTIALS");

    let unknown = send(
        &app,
        Method::GET,
        "/usuarios/me",
        None,
        Some(("ghost@email.com", "segredo123")),
    )
    .await;
    assert_eq!(unknown.status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown.json()["error"]["code"], "INVALID_CREDENTIALS");

    let ok = send(
        &app,
        Method::GET,
        "/usuarios/me",
        None,
        Some(("ana@email.com", "segredo123")),
    )
    .await;
    assert_eq!(ok.status, StatusCode::OK);
    assert_eq!(ok.json()["usuario"], "ana@email.com");
    assert_eq!(ok.json()["nome"], "Ana");
}

#[tokio::test]
async fn test_auth_required_guards_postagens_and_temas() {
    let app = test_app(true).await;
    register(&app, "Ana", "ana@email.com", "segredo123").await;

    assert_eq!(get(&app, "/postagens").await.status, StatusCode::UNAUTHORIZED);
    assert_eq!(get(&app, "/temas").await.status, StatusCode::UNAUTHORIZED);

    let authorized = send(
        &app,
        Method::GET,
        "/postagens",
        None,
        Some(("ana@email.com", "segredo123")),
    )
    .await;
    assert_eq!(authorized.status, StatusCode::OK);

    // Registration stays open
    let second = register(&app, "Bia", "bia@email.com", "segredo123").await;
    assert_eq!(second.status, StatusCode::CREATED);
}

#[tokio::test]
async fn test_postagens_open_without_auth_required() {
    let app = test_app(false).await;

    assert_eq!(get(&app, "/postagens").await.status, StatusCode::OK);
    assert_eq!(get(&app, "/temas").await.status, StatusCode::OK);
}
