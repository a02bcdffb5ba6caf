pub mod frame;
pub mod progress;
pub mod subscription;

pub use frame::*;
pub use progress::*;
pub use subscription::*;
