use crate::models::*;
use crate::services::RuletaService;
use actix_web::{HttpResponse, ResponseError, Result, web};

#[utoipa::path(
    get,
    path = "/ruleta/items",
    tag = "ruleta",
    responses(
        (status = 200, description = "转盘奖品列表 (内部错误时降级为空列表)", body = RuletaItemsResponse)
    )
)]
/// 转盘展示用的激活奖品列表
/// 读取失败时降级为空列表, 展示面永远返回 200
pub async fn get_items(service: web::Data<RuletaService>) -> Result<HttpResponse> {
    match service.list_items().await {
        Ok(items) => Ok(HttpResponse::Ok().json(RuletaItemsResponse { items })),
        Err(e) => {
            log::error!("Failed to load ruleta items: {e}");
            Ok(HttpResponse::Ok().json(RuletaItemsResponse { items: vec![] }))
        }
    }
}

#[utoipa::path(
    post,
    path = "/ruleta/girar",
    tag = "ruleta",
    request_body = GirarRequest,
    responses(
        (status = 200, description = "转盘成功", body = GirarResponse),
        (status = 400, description = "没有可用奖品", body = ErrorResponse),
        (status = 500, description = "内部错误 (事务已回滚)", body = ErrorResponse)
    )
)]
/// 转一次转盘:
/// 1. 用户不存在则以初始积分创建
/// 2. 按权重随机选取奖品, 限量奖品扣减库存
/// 3. 记积分 / 转盘次数 / 中奖记录, 整体一个事务
pub async fn girar(
    service: web::Data<RuletaService>,
    request: web::Json<GirarRequest>,
) -> Result<HttpResponse> {
    let user_id = request
        .into_inner()
        .user_id
        .unwrap_or_else(|| "anonymous".to_string());

    match service.girar(&user_id).await {
        Ok(result) => Ok(HttpResponse::Ok().json(result)),
        Err(e) => Ok(e.error_response()),
    }
}

/// 路由配置
pub fn ruleta_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/ruleta")
            .route("/items", web::get().to(get_items))
            .route("/girar", web::post().to(girar)),
    );
}
