use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{DeriveActiveEnum, EnumIter};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// 奖品类型
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, ToSchema, DeriveActiveEnum, EnumIter,
)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "tipo_producto")]
#[serde(rename_all = "snake_case")]
pub enum TipoProducto {
    #[sea_orm(string_value = "prize")]
    Prize,
    #[sea_orm(string_value = "penalty")]
    Penalty,
    #[sea_orm(string_value = "bonus")]
    Bonus,
    #[sea_orm(string_value = "wildcard")]
    Wildcard,
}

impl std::fmt::Display for TipoProducto {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TipoProducto::Prize => write!(f, "prize"),
            TipoProducto::Penalty => write!(f, "penalty"),
            TipoProducto::Bonus => write!(f, "bonus"),
            TipoProducto::Wildcard => write!(f, "wildcard"),
        }
    }
}

/// 转盘奖品实体
/// 概念说明:
/// - probabilidad: 相对权重 (未归一化), 激活状态下必须 > 0
/// - stock: > 0 限量, 0 已耗尽 (同时 activo 置 false), -1 无限
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "productos")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub nombre: String,
    pub tipo: TipoProducto,
    /// 中奖后记入用户的积分 (罚分类为负数)
    pub puntos: i32,
    pub stock: i32,
    /// 选取权重
    pub probabilidad: f64,
    pub activo: bool,
    /// 展示图片地址 (仅存 URL, 不负责托管)
    pub imagen_url: Option<String>,
    /// 转盘扇区颜色
    pub color: String,
    pub fecha_creacion: Option<DateTime<Utc>>,
    pub fecha_actualizacion: Option<DateTime<Utc>>,
}

impl Model {
    /// 库存是否无限 (负数哨兵值)
    pub fn es_ilimitado(&self) -> bool {
        self.stock < 0
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
