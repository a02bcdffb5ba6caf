pub mod drawable3d;
pub mod light;
pub mod role;
pub mod transform;
pub mod visibility;

pub use drawable3d::*;
pub use light::*;
pub use role::*;
pub use transform::*;
pub use visibility::*;
