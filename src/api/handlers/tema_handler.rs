//! Tema (theme) handlers.

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
use crate::domain::{SaveTema, Tema};
use crate::errors::{AppError, AppResult};
use crate::types::{Created, NoContent, OrNotFound};

/// Theme create/update request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct TemaRequest {
    /// Required on update, ignored on create
    #[schema(example = 1)]
    pub id: Option<i64>,
    #[serde(default)]
    #[validate(
        custom(function = "not_blank", message = "O atributo descrição é obrigatório"),
        length(
            min = 3,
            max = 255,
            message = "A descrição deve conter no mínimo 3 e no máximo 255 caracteres"
        )
    )]
    #[schema(example = "Rust", min_length = 3, max_length = 255)]
    pub descricao: String,
}

impl From<TemaRequest> for SaveTema {
    fn from(request: TemaRequest) -> Self {
        Self {
            id: request.id,
            descricao: request.descricao,
        }
    }
}

pub fn tema_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_temas).post(create_tema).put(update_tema))
        .route("/:id", get(get_tema).delete(delete_tema))
        .route("/descricao/:descricao", get(search_by_descricao))
}

/// List all themes with their posts
#[utoipa::path(
    get,
    path = "/temas",
    tag = "Temas",
    responses((status = 200, description = "All themes", body = Vec<Tema>))
)]
pub async fn list_temas(State(state): State<AppState>) -> AppResult<Json<Vec<Tema>>> {
    Ok(Json(state.tema_service.list_temas().await?))
}

#[utoipa::path(
    get,
    path = "/temas/{id}",
    tag = "Temas",
    params(("id" = i64, Path, description = "Theme ID")),
    responses(
        (status = 200, description = "Theme found", body = Tema),
        (status = 404, description = "Theme not found")
    )
)]
pub async fn get_tema(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<OrNotFound<Tema>> {
    Ok(OrNotFound(state.tema_service.get_tema(id).await?))
}

#[utoipa::path(
    get,
    path = "/temas/descricao/{descricao}",
    tag = "Temas",
    params(("descricao" = String, Path, description = "Text to look for in the description")),
    responses((status = 200, description = "Matching themes", body = Vec<Tema>))
)]
pub async fn search_by_descricao(
    State(state): State<AppState>,
    Path(descricao): Path<String>,
) -> AppResult<Json<Vec<Tema>>> {
    Ok(Json(state.tema_service.search_by_descricao(&descricao).await?))
}

#[utoipa::path(
    post,
    path = "/temas",
    tag = "Temas",
    request_body = TemaRequest,
    responses(
        (status = 201, description = "Theme created", body = Tema),
        (status = 400, description = "Validation error")
    )
)]
pub async fn create_tema(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<TemaRequest>,
) -> AppResult<Created<Tema>> {
    let tema = state.tema_service.create_tema(payload.into()).await?;
    Ok(Created(tema))
}

#[utoipa::path(
    put,
    path = "/temas",
    tag = "Temas",
    request_body = TemaRequest,
    responses(
        (status = 200, description = "Theme updated", body = Tema),
        (status = 400, description = "Validation error or missing id"),
        (status = 404, description = "Theme not found")
    )
)]
pub async fn update_tema(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<TemaRequest>,
) -> AppResult<OrNotFound<Tema>> {
    let id = payload
        .id
        .ok_or_else(|| AppError::bad_request("O id do tema é obrigatório"))?;

    let tema = state.tema_service.update_tema(id, payload.into()).await?;
    Ok(OrNotFound(tema))
}

/// Delete a theme together with its posts
#[utoipa::path(
    delete,
    path = "/temas/{id}",
    tag = "Temas",
    params(("id" = i64, Path, description = "Theme ID")),
    responses(
        (status = 204, description = "Theme and its posts deleted"),
        (status = 404, description = "Theme not found")
    )
)]
pub async fn delete_tema(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<NoContent> {
    state.tema_service.delete_tema(id).await?;
    Ok(NoContent)
}
