//! OpenAPI documentation configuration.
//!
//! Served through Swagger UI at `/swagger-ui`.

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::api::handlers::{postagem_handler, tema_handler, usuario_handler};
use crate::domain::{Postagem, Tema, UsuarioResponse};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Blog Pessoal",
        version = "0.1.0",
        description = "Personal blog API: posts, themes and users",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    paths(
        postagem_handler::list_postagens,
        postagem_handler::get_postagem,
        postagem_handler::search_by_titulo,
        postagem_handler::create_postagem,
        postagem_handler::update_postagem,
        postagem_handler::delete_postagem,
        tema_handler::list_temas,
        tema_handler::get_tema,
        tema_handler::search_by_descricao,
        tema_handler::create_tema,
        tema_handler::update_tema,
        tema_handler::delete_tema,
        usuario_handler::cadastrar,
        usuario_handler::list_usuarios,
        usuario_handler::get_usuario,
        usuario_handler::search_by_nome,
        usuario_handler::me,
    ),
    components(
        schemas(
            Postagem,
            Tema,
            UsuarioResponse,
            postagem_handler::PostagemRequest,
            tema_handler::TemaRequest,
            usuario_handler::CadastroRequest,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Postagens", description = "Blog posts"),
        (name = "Temas", description = "Themes grouping posts"),
        (name = "Usuarios", description = "User registration and lookup")
    )
)]
pub struct ApiDoc;

/// HTTP Basic security scheme
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "basic_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Basic)
                        .description(Some("Registered usuario and senha"))
                        .build(),
                ),
            );
        }
    }
}
