//! Usuario (user) handlers.

use axum::{
    extract::{Path, State},
    response::Json,
    routing::{get, post},
    Extension, Router,
};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::{not_blank, ValidatedJson};
use crate::api::middleware::CurrentUser;
use crate::api::AppState;
use crate::domain::UsuarioResponse;
use crate::errors::AppResult;
use crate::types::{Created, OrNotFound};

/// User registration request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CadastroRequest {
    /// Display name
    #[serde(default)]
    #[validate(
        custom(function = "not_blank", message = "O nome é obrigatório"),
        length(min = 1, max = 255, message = "O nome deve conter no máximo 255 caracteres")
    )]
    #[schema(example = "Maria da Silva")]
    pub nome: String,
    /// Login identity, unique
    #[serde(default)]
    #[validate(
        custom(function = "not_blank", message = "O usuário é obrigatório"),
        length(
            min = 3,
            max = 255,
            message = "O usuário deve conter no mínimo 3 e no máximo 255 caracteres"
        )
    )]
    #[schema(example = "maria@email.com")]
    pub usuario: String,
    #[serde(default)]
    #[validate(length(min = 8, message = "A senha deve conter no mínimo 8 caracteres"))]
    #[schema(example = "segredo123", min_length = 8)]
    pub senha: String,
}

/// Routes open to anonymous callers
pub fn usuario_routes() -> Router<AppState> {
    Router::new()
        .route("/cadastrar", post(cadastrar))
        .route("/all", get(list_usuarios))
        .route("/:id", get(get_usuario))
        .route("/nome/:nome", get(search_by_nome))
}

/// Routes that need an authenticated `CurrentUser`
pub fn usuario_me_routes() -> Router<AppState> {
    Router::new().route("/me", get(me))
}

/// Register a new user
#[utoipa::path(
    post,
    path = "/usuarios/cadastrar",
    tag = "Usuarios",
    request_body = CadastroRequest,
    responses(
        (status = 201, description = "User registered", body = UsuarioResponse),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Username already taken")
    )
)]
pub async fn cadastrar(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CadastroRequest>,
) -> AppResult<Created<UsuarioResponse>> {
    let usuario = state
        .usuario_service
        .register(&payload.nome, &payload.usuario, &payload.senha)
        .await?;

    Ok(Created(UsuarioResponse::from(usuario)))
}

#[utoipa::path(
    get,
    path = "/usuarios/all",
    tag = "Usuarios",
    responses((status = 200, description = "All users", body = Vec<UsuarioResponse>))
)]
pub async fn list_usuarios(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<UsuarioResponse>>> {
    let usuarios = state.usuario_service.list_usuarios().await?;
    Ok(Json(usuarios.into_iter().map(UsuarioResponse::from).collect()))
}

#[utoipa::path(
    get,
    path = "/usuarios/{id}",
    tag = "Usuarios",
    params(("id" = i64, Path, description = "User ID")),
    responses(
        (status = 200, description = "User found", body = UsuarioResponse),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_usuario(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<OrNotFound<UsuarioResponse>> {
    let usuario = state.usuario_service.get_usuario(id).await?;
    Ok(OrNotFound(usuario.map(UsuarioResponse::from)))
}

/// Users whose display name contains the given text, ignoring case
#[utoipa::path(
    get,
    path = "/usuarios/nome/{nome}",
    tag = "Usuarios",
    params(("nome" = String, Path, description = "Text to look for in the name")),
    responses((status = 200, description = "Matching users", body = Vec<UsuarioResponse>))
)]
pub async fn search_by_nome(
    State(state): State<AppState>,
    Path(nome): Path<String>,
) -> AppResult<Json<Vec<UsuarioResponse>>> {
    let usuarios = state.usuario_service.search_by_nome(&nome).await?;
    Ok(Json(usuarios.into_iter().map(UsuarioResponse::from).collect()))
}

/// The user behind the Basic credentials
#[utoipa::path(
    get,
    path = "/usuarios/me",
    tag = "Usuarios",
    security(("basic_auth" = [])),
    responses(
        (status = 200, description = "Authenticated user", body = UsuarioResponse),
        (status = 401, description = "Missing or invalid credentials")
    )
)]
pub async fn me(Extension(current_user): Extension<CurrentUser>) -> Json<UsuarioResponse> {
    Json(UsuarioResponse {
        id: current_user.id,
        nome: current_user.nome,
        usuario: current_user.usuario,
    })
}
