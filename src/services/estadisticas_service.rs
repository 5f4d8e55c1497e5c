use crate::entities::{producto_entity as productos, usuario_entity as usuarios};
use crate::error::AppResult;
use crate::models::EstadisticasResponse;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, FromQueryResult, PaginatorTrait, QueryFilter,
    QuerySelect,
};

#[derive(Clone)]
pub struct EstadisticasService {
    pool: DatabaseConnection,
}

impl EstadisticasService {
    pub fn new(pool: DatabaseConnection) -> Self {
        Self { pool }
    }

    /// 管理端汇总: 用户数 / 总转盘次数 / 激活奖品数
    pub async fn resumen(&self) -> AppResult<EstadisticasResponse> {
        let total_usuarios = usuarios::Entity::find().count(&self.pool).await? as i64;

        #[derive(Debug, FromQueryResult)]
        struct TotalGiros {
            total: Option<i64>,
        }
        let total_giros = usuarios::Entity::find()
            .select_only()
            .column_as(
                Expr::col(usuarios::Column::GirosRealizados).sum(),
                "total",
            )
            .into_model::<TotalGiros>()
            .one(&self.pool)
            .await?
            .and_then(|row| row.total)
            .unwrap_or(0);

        let productos_activos = productos::Entity::find()
            .filter(productos::Column::Activo.eq(true))
            .count(&self.pool)
            .await? as i64;

        Ok(EstadisticasResponse {
            total_usuarios,
            total_giros,
            productos_activos,
        })
    }
}
