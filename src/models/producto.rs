use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entities::{TipoProducto, producto_entity};

/// 奖品展示/管理视图
/// 字段命名统一使用西语集合 (nombre/tipo), 不再沿用历史版本的 text/type 别名
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProductoResponse {
    pub id: i64,
    pub nombre: String,
    pub tipo: TipoProducto,
    pub puntos: i32,
    pub stock: i32,
    pub probabilidad: f64,
    pub activo: bool,
    pub imagen_url: Option<String>,
    pub color: String,
}

impl From<producto_entity::Model> for ProductoResponse {
    fn from(m: producto_entity::Model) -> Self {
        ProductoResponse {
            id: m.id,
            nombre: m.nombre,
            tipo: m.tipo,
            puntos: m.puntos,
            stock: m.stock,
            probabilidad: m.probabilidad,
            activo: m.activo,
            imagen_url: m.imagen_url,
            color: m.color,
        }
    }
}

fn default_stock() -> i32 {
    1
}

fn default_probabilidad() -> f64 {
    1.0
}

fn default_color() -> String {
    "#4CAF50".to_string()
}

fn default_activo() -> bool {
    true
}

/// 创建奖品请求 (nombre/tipo/puntos 必填, 其余取默认值)
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateProductoRequest {
    pub nombre: String,
    pub tipo: TipoProducto,
    pub puntos: i32,
    #[serde(default = "default_stock")]
    pub stock: i32,
    #[serde(default = "default_probabilidad")]
    pub probabilidad: f64,
    #[serde(default = "default_activo")]
    pub activo: bool,
    #[serde(default)]
    pub imagen_url: Option<String>,
    #[serde(default = "default_color")]
    pub color: String,
}

/// 部分更新请求, 缺省字段保持原值
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateProductoRequest {
    pub nombre: Option<String>,
    pub tipo: Option<TipoProducto>,
    pub puntos: Option<i32>,
    pub stock: Option<i32>,
    pub probabilidad: Option<f64>,
    pub activo: Option<bool>,
    pub imagen_url: Option<String>,
    pub color: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_defaults() {
        let req: CreateProductoRequest =
            serde_json::from_str(r#"{"nombre":"Premio Mayor","tipo":"prize","puntos":100}"#)
                .unwrap();
        assert_eq!(req.nombre, "Premio Mayor");
        assert_eq!(req.tipo, TipoProducto::Prize);
        assert_eq!(req.puntos, 100);
        assert_eq!(req.stock, 1);
        assert_eq!(req.probabilidad, 1.0);
        assert!(req.activo);
        assert_eq!(req.color, "#4CAF50");
        assert!(req.imagen_url.is_none());
    }

    #[test]
    fn test_create_request_explicit_fields() {
        let req: CreateProductoRequest = serde_json::from_str(
            r##"{"nombre":"Pierdes Turno","tipo":"penalty","puntos":-10,"stock":-1,"probabilidad":0.15,"color":"#F44336"}"##,
        )
        .unwrap();
        assert_eq!(req.tipo, TipoProducto::Penalty);
        assert_eq!(req.puntos, -10);
        assert_eq!(req.stock, -1);
        assert_eq!(req.probabilidad, 0.15);
        assert_eq!(req.color, "#F44336");
    }

    #[test]
    fn test_tipo_desconocido_es_rechazado() {
        let result = serde_json::from_str::<CreateProductoRequest>(
            r#"{"nombre":"X","tipo":"jackpot","puntos":1}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_response_round_trip() {
        let model = producto_entity::Model {
            id: 7,
            nombre: "Tarjeta Regalo $50".to_string(),
            tipo: TipoProducto::Prize,
            puntos: 60,
            stock: 3,
            probabilidad: 0.1,
            activo: true,
            imagen_url: None,
            color: "#2196F3".to_string(),
            fecha_creacion: None,
            fecha_actualizacion: None,
        };
        let view = ProductoResponse::from(model);
        let value = serde_json::to_value(&view).unwrap();
        assert_eq!(value["id"], 7);
        assert_eq!(value["nombre"], "Tarjeta Regalo $50");
        assert_eq!(value["tipo"], "prize");
        assert_eq!(value["puntos"], 60);
        assert_eq!(value["stock"], 3);
        assert_eq!(value["probabilidad"], 0.1);
        assert_eq!(value["activo"], true);
        assert_eq!(value["color"], "#2196F3");

        let back: ProductoResponse = serde_json::from_value(value).unwrap();
        assert_eq!(back.id, 7);
        assert_eq!(back.tipo, TipoProducto::Prize);
        assert_eq!(back.probabilidad, 0.1);
    }
}
