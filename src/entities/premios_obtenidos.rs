use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// 中奖记录 (只追加; 除 canjeado 兑换转换外不可变)
/// usuario_id / producto_id 为弱引用: 奖品被删除后记录仍须可读,
/// 因此不定义 sea-orm Relation, 关联展示字段由服务层内存拼接。
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "premios_obtenidos")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub usuario_id: String,
    pub producto_id: i64,
    pub fecha_obtencion: Option<DateTime<Utc>>,
    pub canjeado: bool,
    /// canjeado 置 true 时写入
    pub fecha_canje: Option<DateTime<Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
