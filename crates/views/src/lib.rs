//! View routing and render-package assembly.
//!
//! Sits between the Metric Engine and the render sink: resolves navigation
//! paths to a closed set of views and packages each view's metrics into
//! the three sink data shapes.

pub mod assembler;
pub mod package;
pub mod route;

pub use assembler::assemble;
pub use package::{Chart, ChartData, SeriesPoint, ViewPackage};
pub use route::{resolve, Route, ViewId};
