//! Page-level animation primitives: scroll progress, one-shot reveals,
//! count-up counters and hero parallax. Nothing here touches the DOM; the
//! host feeds in layout samples and intersection ratios.

pub mod config;
pub mod counter;
pub mod parallax;
pub mod reveal;
pub mod scroll;
pub mod tracker;
pub mod viewport;

pub use config::*;
pub use counter::*;
pub use parallax::*;
pub use reveal::*;
pub use scroll::*;
pub use tracker::*;
pub use viewport::*;
