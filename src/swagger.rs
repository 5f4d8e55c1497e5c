use actix_web::web;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::entities::TipoProducto;
use crate::handlers;
use crate::models::*;

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::ruleta::get_items,
        handlers::ruleta::girar,
        handlers::admin::get_productos,
        handlers::admin::create_producto,
        handlers::admin::update_producto,
        handlers::admin::delete_producto,
        handlers::admin::get_estadisticas,
        handlers::admin::get_premios,
        handlers::admin::create_premio,
        handlers::admin::update_premio,
        handlers::admin::delete_premio,
    ),
    components(
        schemas(
            TipoProducto,
            ProductoResponse,
            CreateProductoRequest,
            UpdateProductoRequest,
            RuletaItemsResponse,
            GirarRequest,
            GirarResponse,
            PremioResponse,
            CreatePremioRequest,
            UpdatePremioRequest,
            EstadisticasResponse,
            MessageResponse,
            ErrorResponse,
        )
    ),
    tags(
        (name = "ruleta", description = "Prize wheel API"),
        (name = "admin", description = "Catalog / award administration API"),
    ),
    info(
        title = "Ruleta Backend API",
        version = "1.0.0",
        description = "Ruleta Backend REST API documentation"
    ),
    servers(
        (url = "/api", description = "Local server")
    )
)]
pub struct ApiDoc;

pub fn swagger_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
    )
    .route(
        "/swagger-ui",
        web::get().to(|| async {
            actix_web::HttpResponse::Found()
                .append_header(("Location", "/swagger-ui/"))
                .finish()
        }),
    );
}
