pub mod error;
pub mod geometry;
pub mod math;
pub mod tessellation;

pub use error::{CenterLineError, Result};
pub use geometry::{fit_arc, Arc, CenterLine, CenterLineBuilder, Fillet, Line, PathCurve, Segment};
pub use math::{Point2, Vector2};
pub use tessellation::TessellationParams;
