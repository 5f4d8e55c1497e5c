use crate::entities::{
    premio_entity as premios, producto_entity as productos, usuario_entity as usuarios,
};
use crate::error::{AppError, AppResult};
use crate::models::{GirarResponse, ProductoResponse};
use chrono::Utc;
use rand::Rng;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DatabaseTransaction, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder, Set, TransactionTrait, UpdateResult,
};

/// 新用户初始积分
pub const PUNTOS_INICIALES: i32 = 100;

/// 按归一化权重做累积分布逆采样。r ∈ [0, 1)。
///
/// 按列表固有顺序累加 probabilidad / total, 首次满足 r <= 累积值的奖品即中奖
/// (边界闭合在左侧: 累积值恰好等于 r 时, 顺序靠前的奖品获胜)。
/// 浮点误差导致遍历结束仍未命中时回退到最后一项, 这是定义内行为而非错误。
pub fn seleccionar_producto(lista: &[productos::Model], r: f64) -> Option<&productos::Model> {
    if lista.is_empty() {
        return None;
    }

    let total: f64 = lista.iter().map(|p| p.probabilidad).sum();
    if total <= 0.0 {
        // 调用方必须只传入 activo 且权重 > 0 的奖品
        return None;
    }

    let mut acumulado = 0.0;
    for producto in lista {
        acumulado += producto.probabilidad / total;
        if r <= acumulado {
            return Some(producto);
        }
    }

    lista.last()
}

#[derive(Clone)]
pub struct RuletaService {
    pool: DatabaseConnection,
}

impl RuletaService {
    pub fn new(pool: DatabaseConnection) -> Self {
        Self { pool }
    }

    /// 转盘展示列表 (仅 activo 的奖品, 按 id 升序)
    pub async fn list_items(&self) -> AppResult<Vec<ProductoResponse>> {
        let list = productos::Entity::find()
            .filter(productos::Column::Activo.eq(true))
            .order_by_asc(productos::Column::Id)
            .all(&self.pool)
            .await?;
        Ok(list.into_iter().map(Into::into).collect())
    }

    /// 转一次转盘 (Spin)
    ///
    /// 逻辑, 全部在一个事务内:
    /// 1. 加载用户, 不存在则以初始积分创建
    /// 2. 读取 activo 的奖品; 为空则提交 (保留惰性创建的用户) 并返回业务错误
    /// 3. 按权重随机选取中奖奖品
    /// 4. 限量奖品条件扣减库存, 扣到 0 时自动停用
    /// 5. 更新用户积分 / 转盘次数 / 最后转盘时间
    /// 6. 写中奖记录
    /// 7. 提交; 任何存储失败都会回滚上述全部变更
    pub async fn girar(&self, user_id: &str) -> AppResult<GirarResponse> {
        let txn = self.pool.begin().await?;

        let usuario = self.ensure_usuario_tx(&txn, user_id).await?;

        let activos = productos::Entity::find()
            .filter(productos::Column::Activo.eq(true))
            .order_by_asc(productos::Column::Id)
            .all(&txn)
            .await?;

        if activos.is_empty() {
            // 与历史行为一致: 空转盘的请求仍然保留刚创建的用户
            txn.commit().await?;
            return Err(AppError::NoProductosDisponibles);
        }

        let r = rand::thread_rng().r#gen::<f64>();
        let ganador = seleccionar_producto(&activos, r)
            .cloned()
            .ok_or(AppError::NoProductosDisponibles)?;

        let ganador = self
            .descontar_stock_tx(&txn, ganador)
            .await
            .map_err(|e| AppError::InternalError(format!("Prize redemption failed: {e}")))?;

        // 更新用户账本
        let puntos_actuales = usuario.puntos + ganador.puntos;
        let giros = usuario.giros_realizados;
        let mut am = usuario.into_active_model();
        am.puntos = Set(puntos_actuales);
        am.giros_realizados = Set(giros + 1);
        am.ultimo_giro = Set(Some(Utc::now()));
        am.update(&txn).await?;

        // 写中奖记录
        premios::ActiveModel {
            usuario_id: Set(user_id.to_string()),
            producto_id: Set(ganador.id),
            canjeado: Set(false),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;

        Ok(GirarResponse {
            resultado: ganador.into(),
            puntos_actuales,
            user_id: user_id.to_string(),
        })
    }

    // -----------------------------
    // 内部辅助方法
    // -----------------------------

    /// 加载用户, 不存在时在当前事务内创建 (初始积分 100)
    async fn ensure_usuario_tx(
        &self,
        txn: &DatabaseTransaction,
        user_id: &str,
    ) -> Result<usuarios::Model, DbErr> {
        if let Some(m) = usuarios::Entity::find_by_id(user_id.to_string())
            .one(txn)
            .await?
        {
            return Ok(m);
        }
        usuarios::ActiveModel {
            id: Set(user_id.to_string()),
            puntos: Set(PUNTOS_INICIALES),
            giros_realizados: Set(0),
            nivel: Set(1),
            experiencia: Set(0),
            ..Default::default()
        }
        .insert(txn)
        .await
    }

    /// 扣减中奖奖品库存。
    /// stock <= 0 (无限哨兵或已耗尽) 不参与扣减; 限量奖品用条件更新
    /// (WHERE stock > 0) 扣减, 两个并发 spin 不可能把同一件存量扣成负数。
    /// 扣到 0 时立即停用该奖品。
    async fn descontar_stock_tx(
        &self,
        txn: &DatabaseTransaction,
        ganador: productos::Model,
    ) -> Result<productos::Model, DbErr> {
        if ganador.es_ilimitado() || ganador.stock == 0 {
            return Ok(ganador);
        }

        let update_result: UpdateResult = productos::Entity::update_many()
            .col_expr(
                productos::Column::Stock,
                Expr::col(productos::Column::Stock).sub(1),
            )
            .filter(productos::Column::Id.eq(ganador.id))
            .filter(productos::Column::Stock.gt(0))
            .exec(txn)
            .await?;

        if update_result.rows_affected != 1 {
            // 另一个 spin 已取走最后一件
            return Err(DbErr::Custom(format!(
                "Stock update affected no rows for producto {}",
                ganador.id
            )));
        }

        let actualizado = productos::Entity::find_by_id(ganador.id)
            .one(txn)
            .await?
            .ok_or_else(|| {
                DbErr::Custom("Producto disappeared after stock update".to_string())
            })?;

        if actualizado.stock == 0 && actualizado.activo {
            let mut am = actualizado.into_active_model();
            am.activo = Set(false);
            am.fecha_actualizacion = Set(Some(Utc::now()));
            return am.update(txn).await;
        }

        Ok(actualizado)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::TipoProducto;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn producto(id: i64, probabilidad: f64, puntos: i32) -> productos::Model {
        productos::Model {
            id,
            nombre: format!("Producto {id}"),
            tipo: TipoProducto::Prize,
            puntos,
            stock: 1,
            probabilidad,
            activo: true,
            imagen_url: None,
            color: "#4CAF50".to_string(),
            fecha_creacion: None,
            fecha_actualizacion: None,
        }
    }

    #[test]
    fn test_lista_vacia() {
        assert!(seleccionar_producto(&[], 0.5).is_none());
    }

    #[test]
    fn test_peso_total_no_positivo() {
        let lista = vec![producto(1, 0.0, 10), producto(2, 0.0, 20)];
        assert!(seleccionar_producto(&lista, 0.5).is_none());
    }

    #[test]
    fn test_un_solo_producto_siempre_gana() {
        for peso in [0.0001, 0.5, 1.0, 1000.0] {
            let lista = vec![producto(1, peso, 10)];
            for r in [0.0, 0.3, 0.5, 0.9999] {
                let ganador = seleccionar_producto(&lista, r).unwrap();
                assert_eq!(ganador.id, 1);
            }
        }
    }

    #[test]
    fn test_dos_productos_con_r_bajo() {
        // 权重相等: 第一项累积值 0.5 >= 0.3
        let lista = vec![producto(1, 1.0, 50), producto(2, 1.0, -10)];
        let ganador = seleccionar_producto(&lista, 0.3).unwrap();
        assert_eq!(ganador.id, 1);
    }

    #[test]
    fn test_empate_en_el_limite_gana_el_primero() {
        let lista = vec![producto(1, 1.0, 0), producto(2, 1.0, 0)];
        // r 恰好等于第一项累积值: 左闭边界, 顺序靠前者获胜
        assert_eq!(seleccionar_producto(&lista, 0.5).unwrap().id, 1);
        // 略高于边界则落在第二项
        assert_eq!(seleccionar_producto(&lista, 0.5000001).unwrap().id, 2);
    }

    #[test]
    fn test_pesos_relativos_no_normalizados() {
        // 权重无需归一化: 第一项的概率质量为 3.0/4.0 = 0.75
        let lista = vec![producto(1, 3.0, 0), producto(2, 1.0, 0)];
        assert_eq!(seleccionar_producto(&lista, 0.74).unwrap().id, 1);
        assert_eq!(seleccionar_producto(&lista, 0.76).unwrap().id, 2);
    }

    #[test]
    fn test_nunca_devuelve_none_con_lista_valida() {
        let lista = vec![
            producto(1, 0.05, 100),
            producto(2, 0.15, -10),
            producto(3, 0.07, 0),
        ];
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..10_000 {
            let r = rng.r#gen::<f64>();
            assert!(seleccionar_producto(&lista, r).is_some());
        }
    }

    #[test]
    fn test_frecuencias_convergen_a_los_pesos() {
        // 权重 1:3 -> 期望频率 0.25 / 0.75
        let lista = vec![producto(1, 1.0, 0), producto(2, 3.0, 0)];
        let mut rng = StdRng::seed_from_u64(42);
        let ensayos = 20_000;
        let mut victorias_segundo = 0u32;
        for _ in 0..ensayos {
            let r = rng.r#gen::<f64>();
            if seleccionar_producto(&lista, r).unwrap().id == 2 {
                victorias_segundo += 1;
            }
        }
        let frecuencia = f64::from(victorias_segundo) / f64::from(ensayos);
        assert!(
            (frecuencia - 0.75).abs() < 0.02,
            "observed frequency {frecuencia} out of tolerance"
        );
    }

    #[test]
    fn test_acumulacion_de_puntos() {
        // 固定 r 序列: 依次中 1 (50), 2 (-10), 1 (50)
        let lista = vec![producto(1, 1.0, 50), producto(2, 1.0, -10)];
        let mut puntos = PUNTOS_INICIALES;
        for r in [0.3, 0.7, 0.1] {
            let ganador = seleccionar_producto(&lista, r).unwrap();
            puntos += ganador.puntos;
        }
        assert_eq!(puntos, 190);
    }
}
