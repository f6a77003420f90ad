#![forbid(unsafe_code)]

//! Render kernel for weft: cells, buffers, frames, hit testing, links,
//! and ANSI serialization.
//!
//! Widgets draw into a [`frame::Frame`], which owns a [`buffer::Buffer`] of
//! [`cell::Cell`]s plus the interaction surfaces built on top of the cell
//! grid: a [`hit::HitGrid`] mapping rectangles to widget-defined targets and
//! a [`link::LinkRegistry`] interning hyperlink URLs. [`ansi`] turns a
//! finished buffer into escape sequences for any `io::Write` sink.

pub mod ansi;
pub mod buffer;
pub mod cell;
pub mod frame;
pub mod grapheme_pool;
pub mod hit;
pub mod link;

pub use buffer::Buffer;
pub use cell::{Cell, CellAttrs, CellContent, PackedRgba, StyleFlags};
pub use frame::Frame;
pub use grapheme_pool::{GraphemeId, GraphemePool};
pub use hit::{HitGrid, HitId};
pub use link::LinkRegistry;
