use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// 用户积分账本
/// id 是调用方提供的不透明字符串 (匿名用户为 "anonymous"),
/// 首次转盘时惰性创建, 初始积分 100。
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "usuarios")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    /// 罚分奖品可使积分为负, 不设下限
    pub puntos: i32,
    pub giros_realizados: i32,
    pub nivel: i32,
    pub experiencia: i32,
    pub fecha_registro: Option<DateTime<Utc>>,
    pub ultimo_giro: Option<DateTime<Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
