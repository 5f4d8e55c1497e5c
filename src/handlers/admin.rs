use crate::models::*;
use crate::services::{EstadisticasService, PremioService, ProductoService};
use actix_web::{HttpResponse, ResponseError, Result, web};

// -----------------------------
// Productos
// -----------------------------

#[utoipa::path(
    get,
    path = "/admin/productos",
    tag = "admin",
    responses(
        (status = 200, description = "全量奖品列表 (错误时降级为空列表)", body = [ProductoResponse])
    )
)]
/// 管理端奖品列表 (含停用项); 读取失败降级为空列表
pub async fn get_productos(service: web::Data<ProductoService>) -> Result<HttpResponse> {
    match service.list_productos().await {
        Ok(list) => Ok(HttpResponse::Ok().json(list)),
        Err(e) => {
            log::error!("Failed to list productos: {e}");
            Ok(HttpResponse::Ok().json(Vec::<ProductoResponse>::new()))
        }
    }
}

#[utoipa::path(
    post,
    path = "/admin/productos",
    tag = "admin",
    request_body = CreateProductoRequest,
    responses(
        (status = 200, description = "创建成功", body = ProductoResponse),
        (status = 400, description = "参数错误", body = ErrorResponse)
    )
)]
pub async fn create_producto(
    service: web::Data<ProductoService>,
    request: web::Json<CreateProductoRequest>,
) -> Result<HttpResponse> {
    match service.create_producto(request.into_inner()).await {
        Ok(producto) => Ok(HttpResponse::Ok().json(producto)),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    put,
    path = "/admin/productos/{id}",
    tag = "admin",
    params(("id" = i64, Path, description = "奖品ID")),
    request_body = UpdateProductoRequest,
    responses(
        (status = 200, description = "更新成功", body = ProductoResponse),
        (status = 400, description = "参数错误", body = ErrorResponse),
        (status = 404, description = "奖品不存在", body = ErrorResponse)
    )
)]
pub async fn update_producto(
    service: web::Data<ProductoService>,
    path: web::Path<i64>,
    request: web::Json<UpdateProductoRequest>,
) -> Result<HttpResponse> {
    match service
        .update_producto(path.into_inner(), request.into_inner())
        .await
    {
        Ok(producto) => Ok(HttpResponse::Ok().json(producto)),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    delete,
    path = "/admin/productos/{id}",
    tag = "admin",
    params(("id" = i64, Path, description = "奖品ID")),
    responses(
        (status = 200, description = "删除成功", body = MessageResponse),
        (status = 404, description = "奖品不存在", body = ErrorResponse)
    )
)]
pub async fn delete_producto(
    service: web::Data<ProductoService>,
    path: web::Path<i64>,
) -> Result<HttpResponse> {
    match service.delete_producto(path.into_inner()).await {
        Ok(message) => Ok(HttpResponse::Ok().json(message)),
        Err(e) => Ok(e.error_response()),
    }
}

// -----------------------------
// Estadisticas
// -----------------------------

#[utoipa::path(
    get,
    path = "/admin/estadisticas",
    tag = "admin",
    responses(
        (status = 200, description = "汇总计数 (错误时降级为全 0)", body = EstadisticasResponse)
    )
)]
/// 汇总计数; 读取失败降级为全 0, 保证面板可用
pub async fn get_estadisticas(service: web::Data<EstadisticasService>) -> Result<HttpResponse> {
    match service.resumen().await {
        Ok(resumen) => Ok(HttpResponse::Ok().json(resumen)),
        Err(e) => {
            log::error!("Failed to load estadisticas: {e}");
            Ok(HttpResponse::Ok().json(EstadisticasResponse::default()))
        }
    }
}

// -----------------------------
// Premios
// -----------------------------

#[utoipa::path(
    get,
    path = "/admin/premios",
    tag = "admin",
    responses(
        (status = 200, description = "中奖记录列表 (错误时降级为空列表)", body = [PremioResponse])
    )
)]
/// 中奖记录列表, 附奖品展示字段; 读取失败降级为空列表
pub async fn get_premios(service: web::Data<PremioService>) -> Result<HttpResponse> {
    match service.list_premios().await {
        Ok(list) => Ok(HttpResponse::Ok().json(list)),
        Err(e) => {
            log::error!("Failed to list premios: {e}");
            Ok(HttpResponse::Ok().json(Vec::<PremioResponse>::new()))
        }
    }
}

#[utoipa::path(
    post,
    path = "/admin/premios",
    tag = "admin",
    request_body = CreatePremioRequest,
    responses(
        (status = 200, description = "创建成功", body = PremioResponse),
        (status = 400, description = "参数错误", body = ErrorResponse)
    )
)]
pub async fn create_premio(
    service: web::Data<PremioService>,
    request: web::Json<CreatePremioRequest>,
) -> Result<HttpResponse> {
    match service.create_premio(request.into_inner()).await {
        Ok(premio) => Ok(HttpResponse::Ok().json(premio)),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    put,
    path = "/admin/premios/{id}",
    tag = "admin",
    params(("id" = i64, Path, description = "记录ID")),
    request_body = UpdatePremioRequest,
    responses(
        (status = 200, description = "更新成功", body = PremioResponse),
        (status = 400, description = "参数错误", body = ErrorResponse),
        (status = 404, description = "记录不存在", body = ErrorResponse)
    )
)]
pub async fn update_premio(
    service: web::Data<PremioService>,
    path: web::Path<i64>,
    request: web::Json<UpdatePremioRequest>,
) -> Result<HttpResponse> {
    match service
        .update_premio(path.into_inner(), request.into_inner())
        .await
    {
        Ok(premio) => Ok(HttpResponse::Ok().json(premio)),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    delete,
    path = "/admin/premios/{id}",
    tag = "admin",
    params(("id" = i64, Path, description = "记录ID")),
    responses(
        (status = 200, description = "删除成功", body = MessageResponse),
        (status = 404, description = "记录不存在", body = ErrorResponse)
    )
)]
pub async fn delete_premio(
    service: web::Data<PremioService>,
    path: web::Path<i64>,
) -> Result<HttpResponse> {
    match service.delete_premio(path.into_inner()).await {
        Ok(message) => Ok(HttpResponse::Ok().json(message)),
        Err(e) => Ok(e.error_response()),
    }
}

/// 路由配置
pub fn admin_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/admin")
            .route("/productos", web::get().to(get_productos))
            .route("/productos", web::post().to(create_producto))
            .route("/productos/{id}", web::put().to(update_producto))
            .route("/productos/{id}", web::delete().to(delete_producto))
            .route("/estadisticas", web::get().to(get_estadisticas))
            .route("/premios", web::get().to(get_premios))
            .route("/premios", web::post().to(create_premio))
            .route("/premios/{id}", web::put().to(update_premio))
            .route("/premios/{id}", web::delete().to(delete_premio)),
    );
}
