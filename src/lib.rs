pub mod detection;
pub mod diagnostics;
pub mod models;
pub mod source;

pub use detection::PlacementPipeline;
pub use diagnostics::{BufferSink, DiagnosticSink, StdoutSink};
pub use models::{BoundingRect, ClassifiedContours, Contour};
pub use source::{FsImageSource, ImageSource};
