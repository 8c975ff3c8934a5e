// ============================================================================
// Engine Module
// Shape resolution and the Time64 adapter
// ============================================================================

mod resolver;
mod transform_time64;

pub mod factory;

pub use factory::{create_from_config, TransformTime64Builder};
pub use resolver::{CallShape, Resolve, Route, ShapeOf};
pub use transform_time64::TransformTime64;
