#![forbid(unsafe_code)]

//! Core primitives for weft: geometry and canonical input events.
//!
//! This crate has no rendering or terminal-backend surface. Hosts construct
//! [`event::Event`] values from whatever input source they own and feed them
//! to widget states.

pub mod event;
pub mod geometry;

pub use event::{Event, KeyCode, KeyEvent, KeyEventKind, Modifiers, MouseButton, MouseEvent, MouseEventKind};
pub use geometry::{Rect, Sides};
