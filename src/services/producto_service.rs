use crate::entities::producto_entity as productos;
use crate::error::{AppError, AppResult};
use crate::models::{CreateProductoRequest, MessageResponse, ProductoResponse, UpdateProductoRequest};
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, IntoActiveModel, ModelTrait, QueryOrder, Set,
};

#[derive(Clone)]
pub struct ProductoService {
    pool: DatabaseConnection,
}

impl ProductoService {
    pub fn new(pool: DatabaseConnection) -> Self {
        Self { pool }
    }

    /// 全量奖品列表 (管理端, 含停用项)
    pub async fn list_productos(&self) -> AppResult<Vec<ProductoResponse>> {
        let list = productos::Entity::find()
            .order_by_asc(productos::Column::Id)
            .all(&self.pool)
            .await?;
        Ok(list.into_iter().map(Into::into).collect())
    }

    /// 创建奖品
    pub async fn create_producto(
        &self,
        request: CreateProductoRequest,
    ) -> AppResult<ProductoResponse> {
        if request.nombre.trim().is_empty() {
            return Err(AppError::ValidationError(
                "El nombre es requerido".to_string(),
            ));
        }
        if request.probabilidad <= 0.0 {
            return Err(AppError::ValidationError(
                "La probabilidad debe ser mayor que 0".to_string(),
            ));
        }

        // 不变式: stock 为 0 的奖品不可处于激活状态
        let activo = request.activo && request.stock != 0;

        let model = productos::ActiveModel {
            nombre: Set(request.nombre),
            tipo: Set(request.tipo),
            puntos: Set(request.puntos),
            stock: Set(request.stock),
            probabilidad: Set(request.probabilidad),
            activo: Set(activo),
            imagen_url: Set(request.imagen_url),
            color: Set(request.color),
            ..Default::default()
        }
        .insert(&self.pool)
        .await?;

        Ok(model.into())
    }

    /// 部分更新奖品字段
    pub async fn update_producto(
        &self,
        producto_id: i64,
        request: UpdateProductoRequest,
    ) -> AppResult<ProductoResponse> {
        let model = productos::Entity::find_by_id(producto_id)
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Producto no encontrado".to_string()))?;

        if let Some(nombre) = &request.nombre
            && nombre.trim().is_empty()
        {
            return Err(AppError::ValidationError(
                "El nombre es requerido".to_string(),
            ));
        }
        if let Some(probabilidad) = request.probabilidad
            && probabilidad <= 0.0
        {
            return Err(AppError::ValidationError(
                "La probabilidad debe ser mayor que 0".to_string(),
            ));
        }

        let stock_final = request.stock.unwrap_or(model.stock);

        let mut am = model.into_active_model();
        if let Some(nombre) = request.nombre {
            am.nombre = Set(nombre);
        }
        if let Some(tipo) = request.tipo {
            am.tipo = Set(tipo);
        }
        if let Some(puntos) = request.puntos {
            am.puntos = Set(puntos);
        }
        if let Some(stock) = request.stock {
            am.stock = Set(stock);
        }
        if let Some(probabilidad) = request.probabilidad {
            am.probabilidad = Set(probabilidad);
        }
        if let Some(activo) = request.activo {
            am.activo = Set(activo);
        }
        if let Some(imagen_url) = request.imagen_url {
            am.imagen_url = Set(Some(imagen_url));
        }
        if let Some(color) = request.color {
            am.color = Set(color);
        }
        // stock 扣到 0 与管理端置 0 遵循同一不变式: stock 为 0 的奖品不可激活
        if stock_final == 0 {
            am.activo = Set(false);
        }
        am.fecha_actualizacion = Set(Some(Utc::now()));

        let updated = am.update(&self.pool).await?;
        Ok(updated.into())
    }

    /// 删除奖品 (历史中奖记录保留, 弱引用展示字段随之缺省)
    pub async fn delete_producto(&self, producto_id: i64) -> AppResult<MessageResponse> {
        let model = productos::Entity::find_by_id(producto_id)
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Producto no encontrado".to_string()))?;

        model.delete(&self.pool).await?;
        Ok(MessageResponse::new("Producto eliminado"))
    }
}
