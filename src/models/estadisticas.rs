use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// 管理端汇总计数
/// 读取失败时接口降级返回全 0 (Default), 保证展示面可用
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct EstadisticasResponse {
    pub total_usuarios: i64,
    pub total_giros: i64,
    pub productos_activos: i64,
}
