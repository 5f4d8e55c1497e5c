pub mod common;
pub mod estadisticas;
pub mod premio;
pub mod producto;
pub mod ruleta;

pub use common::*;
pub use estadisticas::*;
pub use premio::*;
pub use producto::*;
pub use ruleta::*;
