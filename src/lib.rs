//! path2d records vector path operations independently of any drawing surface.
//!
//! - Build a [`PathLog`] with canvas-style calls or from path-description strings
//! - Replay it onto any [`RenderContext2d`] with [`ReplayEngine`], stroking or filling each
//!   recorded operation
//! - Measure a path string with [`compute_bounding_box`], which renders it offscreen and scans
//!   the pixels for ink
//!
//! [`CpuCanvas`] is a CPU implementation of the context interface backed by `tiny-skia`.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

pub mod bbox;
pub(crate) mod path;
pub(crate) mod render;

pub use crate::foundation::core::{
    Affine, BezPath, Color, LineCap, LineJoin, PaintMode, PaintStyle, Point, Rect, Vec2,
};
pub use crate::foundation::error::{Path2dError, Path2dResult};
pub use crate::foundation::settings::{DEFAULT_SCAN_EXTENT, MAX_SCAN_EXTENT, ScanSettings};

pub use crate::bbox::{
    BoundingBox, BoundingBoxOptions, BoundingBoxScanner, compute_bounding_box, scan_ink_extent,
};
pub use crate::path::geometry::{CanvasPath, canvas_sweep};
pub use crate::path::log::{PathCommand, PathLog};
pub use crate::path::translate::{AbsCommand, Segment, to_bez_path, translate};
pub use crate::render::bitmap::{Bitmap, decode_image};
pub use crate::render::context::{ImageData, RenderContext2d, SavedState};
pub use crate::render::cpu::CpuCanvas;
pub use crate::render::replay::{CurrentPath, Paintable, ReplayEngine, draw, fill, stroke};
pub use crate::render::svg_doc::{PathDocument, PathRasterizer, ResvgRasterizer};
