pub mod center_line;
pub mod fillet;
pub mod segment;

pub use center_line::{CenterLine, CenterLineBuilder, DEFAULT_FILLET_RADIUS};
pub use fillet::{fit_arc, Fillet};
pub use segment::{Arc, Line, PathCurve, Segment};
