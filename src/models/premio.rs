use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entities::{TipoProducto, premio_entity, producto_entity};

/// 中奖记录视图
/// producto_* 为弱引用拼接的展示字段: 奖品已被删除时整组缺省, 而不是报错
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PremioResponse {
    pub id: i64,
    pub usuario_id: String,
    pub producto_id: i64,
    pub fecha_obtencion: Option<DateTime<Utc>>,
    pub canjeado: bool,
    pub fecha_canje: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub producto_nombre: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub producto_tipo: Option<TipoProducto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub producto_puntos: Option<i32>,
}

impl From<premio_entity::Model> for PremioResponse {
    fn from(m: premio_entity::Model) -> Self {
        PremioResponse {
            id: m.id,
            usuario_id: m.usuario_id,
            producto_id: m.producto_id,
            fecha_obtencion: m.fecha_obtencion,
            canjeado: m.canjeado,
            fecha_canje: m.fecha_canje,
            producto_nombre: None,
            producto_tipo: None,
            producto_puntos: None,
        }
    }
}

impl PremioResponse {
    /// 拼接奖品展示字段 (奖品可能已被删除)
    pub fn con_producto(
        premio: premio_entity::Model,
        producto: Option<&producto_entity::Model>,
    ) -> Self {
        let mut response = PremioResponse::from(premio);
        if let Some(p) = producto {
            response.producto_nombre = Some(p.nombre.clone());
            response.producto_tipo = Some(p.tipo);
            response.producto_puntos = Some(p.puntos);
        }
        response
    }
}

/// 手动补登中奖记录 (管理端, 与转盘流程无关)
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreatePremioRequest {
    pub usuario_id: String,
    pub producto_id: i64,
}

/// 部分更新; canjeado 置 true 时服务端写入 fecha_canje
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdatePremioRequest {
    pub usuario_id: Option<String>,
    pub producto_id: Option<i64>,
    pub canjeado: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn premio() -> premio_entity::Model {
        premio_entity::Model {
            id: 3,
            usuario_id: "anonymous".to_string(),
            producto_id: 9,
            fecha_obtencion: None,
            canjeado: false,
            fecha_canje: None,
        }
    }

    fn producto() -> producto_entity::Model {
        producto_entity::Model {
            id: 9,
            nombre: "Giro Extra".to_string(),
            tipo: TipoProducto::Bonus,
            puntos: 0,
            stock: -1,
            probabilidad: 0.07,
            activo: true,
            imagen_url: None,
            color: "#9C27B0".to_string(),
            fecha_creacion: None,
            fecha_actualizacion: None,
        }
    }

    #[test]
    fn test_render_sin_producto() {
        // 奖品已删除: 展示字段整组缺省, 序列化时键被省略
        let view = PremioResponse::con_producto(premio(), None);
        let value = serde_json::to_value(&view).unwrap();
        assert_eq!(value["id"], 3);
        assert_eq!(value["usuario_id"], "anonymous");
        assert_eq!(value["producto_id"], 9);
        assert_eq!(value["canjeado"], false);
        assert!(value.get("producto_nombre").is_none());
        assert!(value.get("producto_tipo").is_none());
        assert!(value.get("producto_puntos").is_none());
    }

    #[test]
    fn test_render_con_producto() {
        let p = producto();
        let view = PremioResponse::con_producto(premio(), Some(&p));
        let value = serde_json::to_value(&view).unwrap();
        assert_eq!(value["producto_nombre"], "Giro Extra");
        assert_eq!(value["producto_tipo"], "bonus");
        assert_eq!(value["producto_puntos"], 0);
    }
}
