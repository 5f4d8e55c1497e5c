use crate::entities::{premio_entity as premios, producto_entity as productos};
use crate::error::{AppError, AppResult};
use crate::models::{CreatePremioRequest, MessageResponse, PremioResponse, UpdatePremioRequest};
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel, ModelTrait,
    QueryFilter, QueryOrder, Set,
};
use std::collections::HashMap;

#[derive(Clone)]
pub struct PremioService {
    pool: DatabaseConnection,
}

impl PremioService {
    pub fn new(pool: DatabaseConnection) -> Self {
        Self { pool }
    }

    /// 中奖记录列表, 内存拼接奖品展示字段
    /// (producto_id 是弱引用, 奖品删除后对应字段缺省)
    pub async fn list_premios(&self) -> AppResult<Vec<PremioResponse>> {
        let premios_list = premios::Entity::find()
            .order_by_asc(premios::Column::Id)
            .all(&self.pool)
            .await?;

        let producto_ids: Vec<i64> = premios_list.iter().map(|p| p.producto_id).collect();
        let productos_map: HashMap<i64, productos::Model> = if producto_ids.is_empty() {
            HashMap::new()
        } else {
            productos::Entity::find()
                .filter(productos::Column::Id.is_in(producto_ids))
                .all(&self.pool)
                .await?
                .into_iter()
                .map(|p| (p.id, p))
                .collect()
        };

        Ok(premios_list
            .into_iter()
            .map(|premio| {
                let producto = productos_map.get(&premio.producto_id);
                PremioResponse::con_producto(premio, producto)
            })
            .collect())
    }

    /// 手动补登一条中奖记录 (管理端, 不经过转盘事务)
    pub async fn create_premio(&self, request: CreatePremioRequest) -> AppResult<PremioResponse> {
        if request.usuario_id.trim().is_empty() {
            return Err(AppError::ValidationError(
                "El usuario_id es requerido".to_string(),
            ));
        }

        let model = premios::ActiveModel {
            usuario_id: Set(request.usuario_id),
            producto_id: Set(request.producto_id),
            canjeado: Set(false),
            ..Default::default()
        }
        .insert(&self.pool)
        .await?;

        Ok(model.into())
    }

    /// 更新中奖记录; canjeado 置 true 时写入兑换时间
    pub async fn update_premio(
        &self,
        premio_id: i64,
        request: UpdatePremioRequest,
    ) -> AppResult<PremioResponse> {
        let model = premios::Entity::find_by_id(premio_id)
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Premio no encontrado".to_string()))?;

        let mut am = model.into_active_model();
        if let Some(usuario_id) = request.usuario_id {
            if usuario_id.trim().is_empty() {
                return Err(AppError::ValidationError(
                    "El usuario_id es requerido".to_string(),
                ));
            }
            am.usuario_id = Set(usuario_id);
        }
        if let Some(producto_id) = request.producto_id {
            am.producto_id = Set(producto_id);
        }
        if let Some(canjeado) = request.canjeado {
            am.canjeado = Set(canjeado);
            if canjeado {
                am.fecha_canje = Set(Some(Utc::now()));
            }
        }

        let updated = am.update(&self.pool).await?;
        Ok(updated.into())
    }

    /// 删除中奖记录
    pub async fn delete_premio(&self, premio_id: i64) -> AppResult<MessageResponse> {
        let model = premios::Entity::find_by_id(premio_id)
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Premio no encontrado".to_string()))?;

        model.delete(&self.pool).await?;
        Ok(MessageResponse::new("Premio eliminado correctamente"))
    }
}
