//! Postagem (post) handlers.

use axum::{
    extract::{Path, State},
    response::Json,
    routing::get,
    Router,
};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::{not_blank, ValidatedJson};
use crate::api::AppState;
use crate::domain::{Postagem, SavePostagem};
use crate::errors::{AppError, AppResult};
use crate::types::{Created, NoContent, OrNotFound};

/// Post create/update request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct PostagemRequest {
    /// Required on update, ignored on create
    #[schema(example = 1)]
    pub id: Option<i64>,
    #[serde(default)]
    #[validate(
        custom(function = "not_blank", message = "O título é obrigatório"),
        length(
            min = 3,
            max = 255,
            message = "O título deve conter no mínimo 3 e no máximo 255 caracteres"
        )
    )]
    #[schema(example = "Primeira postagem", min_length = 3, max_length = 255)]
    pub titulo: String,
    #[serde(default)]
    #[validate(
        custom(function = "not_blank", message = "O texto é obrigatório"),
        length(
            min = 5,
            max = 1000,
            message = "O texto deve conter no mínimo 5 e no máximo 1000 caracteres"
        )
    )]
    #[schema(example = "Olá, mundo! Este é o meu blog.", min_length = 5, max_length = 1000)]
    pub texto: String,
    #[schema(example = 1)]
    pub tema_id: Option<i64>,
}

impl From<PostagemRequest> for SavePostagem {
    fn from(request: PostagemRequest) -> Self {
        Self {
            id: request.id,
            titulo: request.titulo,
            texto: request.texto,
            tema_id: request.tema_id,
        }
    }
}

pub fn postagem_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(list_postagens).post(create_postagem).put(update_postagem),
        )
        .route("/:id", get(get_postagem).delete(delete_postagem))
        .route("/titulo/:titulo", get(search_by_titulo))
}

/// List all posts
#[utoipa::path(
    get,
    path = "/postagens",
    tag = "Postagens",
    responses((status = 200, description = "All posts", body = Vec<Postagem>))
)]
pub async fn list_postagens(State(state): State<AppState>) -> AppResult<Json<Vec<Postagem>>> {
    let postagens = state.postagem_service.list_postagens().await?;
    Ok(Json(postagens))
}

/// Get a post by ID
#[utoipa::path(
    get,
    path = "/postagens/{id}",
    tag = "Postagens",
    params(("id" = i64, Path, description = "Post ID")),
    responses(
        (status = 200, description = "Post found", body = Postagem),
        (status = 404, description = "Post not found")
    )
)]
pub async fn get_postagem(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<OrNotFound<Postagem>> {
    Ok(OrNotFound(state.postagem_service.get_postagem(id).await?))
}

/// Posts whose title contains the given text, ignoring case
#[utoipa::path(
    get,
    path = "/postagens/titulo/{titulo}",
    tag = "Postagens",
    params(("titulo" = String, Path, description = "Text to look for in the title")),
    responses((status = 200, description = "Matching posts", body = Vec<Postagem>))
)]
pub async fn search_by_titulo(
    State(state): State<AppState>,
    Path(titulo): Path<String>,
) -> AppResult<Json<Vec<Postagem>>> {
    let postagens = state.postagem_service.search_by_titulo(&titulo).await?;
    Ok(Json(postagens))
}

/// Create a post
#[utoipa::path(
    post,
    path = "/postagens",
    tag = "Postagens",
    request_body = PostagemRequest,
    responses(
        (status = 201, description = "Post created", body = Postagem),
        (status = 400, description = "Validation error or unknown theme")
    )
)]
pub async fn create_postagem(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<PostagemRequest>,
) -> AppResult<Created<Postagem>> {
    let postagem = state
        .postagem_service
        .create_postagem(payload.into())
        .await?;
    Ok(Created(postagem))
}

/// Overwrite an existing post
#[utoipa::path(
    put,
    path = "/postagens",
    tag = "Postagens",
    request_body = PostagemRequest,
    responses(
        (status = 200, description = "Post updated", body = Postagem),
        (status = 400, description = "Validation error, missing id or unknown theme"),
        (status = 404, description = "Post not found")
    )
)]
pub async fn update_postagem(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<PostagemRequest>,
) -> AppResult<OrNotFound<Postagem>> {
    let id = payload
        .id
        .ok_or_else(|| AppError::bad_request("O id da postagem é obrigatório"))?;

    let postagem = state
        .postagem_service
        .update_postagem(id, payload.into())
        .await?;
    Ok(OrNotFound(postagem))
}

/// Delete a post
#[utoipa::path(
    delete,
    path = "/postagens/{id}",
    tag = "Postagens",
    params(("id" = i64, Path, description = "Post ID")),
    responses(
        (status = 204, description = "Post deleted"),
        (status = 404, description = "Post not found")
    )
)]
pub async fn delete_postagem(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<NoContent> {
    state.postagem_service.delete_postagem(id).await?;
    Ok(NoContent)
}
