use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::ProductoResponse;

/// 转盘旋转请求; user_id 缺省为 "anonymous"
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GirarRequest {
    pub user_id: Option<String>,
}

/// 转盘展示列表 (任何内部错误都降级为空列表)
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RuletaItemsResponse {
    pub items: Vec<ProductoResponse>,
}

/// 一次旋转的结果
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GirarResponse {
    /// 中奖奖品
    pub resultado: ProductoResponse,
    /// 更新后的用户积分
    pub puntos_actuales: i32,
    pub user_id: String,
}
