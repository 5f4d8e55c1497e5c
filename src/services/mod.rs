pub mod estadisticas_service;
pub mod premio_service;
pub mod producto_service;
pub mod ruleta_service;

pub use estadisticas_service::*;
pub use premio_service::*;
pub use producto_service::*;
pub use ruleta_service::*;
