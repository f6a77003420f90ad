#![forbid(unsafe_code)]

//! weft public facade crate.
//!
//! weft is a terminal design-system widget kit: a catalog of small,
//! prop-driven widgets around a collapsing breadcrumb trail. This crate
//! re-exports the common types from the member crates and offers a
//! lightweight prelude for day-to-day usage.
//!
//! # Example
//!
//! ```
//! use weft::prelude::*;
//!
//! let items = vec![
//!     BreadcrumbItem::new("Home").with_href("/"),
//!     BreadcrumbItem::new("Library").with_href("/library"),
//!     BreadcrumbItem::new("Shelves").with_href("/shelves"),
//!     BreadcrumbItem::new("Fiction").with_href("/fiction"),
//!     BreadcrumbItem::new("Dune"),
//! ];
//! let trail = Breadcrumb::new(&items).collapse(1, 1).mode(CollapseMode::Dropdown);
//! let mut state = BreadcrumbState::new();
//!
//! let mut pool = GraphemePool::new();
//! let mut frame = Frame::new(60, 8, &mut pool);
//! trail.render(Rect::new(0, 0, 60, 8), &mut frame, &mut state);
//!
//! assert!(state.trigger_area().is_some());
//! ```

// --- Core re-exports -------------------------------------------------------

pub use weft_core::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, Modifiers, MouseButton, MouseEvent, MouseEventKind,
};
pub use weft_core::geometry::{Rect, Sides};

// --- Render re-exports -----------------------------------------------------

pub use weft_render::ansi;
pub use weft_render::buffer::Buffer;
pub use weft_render::cell::{Cell, CellAttrs, CellContent, PackedRgba, StyleFlags};
pub use weft_render::frame::Frame;
pub use weft_render::grapheme_pool::{GraphemeId, GraphemePool};
pub use weft_render::hit::{HitGrid, HitId, HitRegion};
pub use weft_render::link::LinkRegistry;

// --- Style re-exports ------------------------------------------------------

pub use weft_style::style::Style;
pub use weft_style::stylesheet::{StyleId, StyleSheet};
pub use weft_style::theme::{AdaptiveColor, ResolvedTheme, Theme, ThemeBuilder};

// --- Widget re-exports ------------------------------------------------------

pub use weft_widgets::avatar::{Avatar, AvatarShape};
pub use weft_widgets::badge::{Badge, BadgeVariant};
pub use weft_widgets::block::{Block, BorderType};
pub use weft_widgets::breadcrumb::{
    Breadcrumb, BreadcrumbAction, BreadcrumbItem, BreadcrumbState, CollapseMode, DisclosureState,
    HitTarget, Partition, partition, should_collapse,
};
pub use weft_widgets::button::{Button, ButtonSize, ButtonVariant};
pub use weft_widgets::input::{TextInput, TextInputView};
pub use weft_widgets::popup;
pub use weft_widgets::progress::Progress;
pub use weft_widgets::rule::Rule;
pub use weft_widgets::spinner::{DOTS, LINE, Spinner, SpinnerState};
pub use weft_widgets::switch::{Switch, SwitchState};
pub use weft_widgets::toast::{Toast, ToastId, ToastLevel, ToastQueue};
pub use weft_widgets::{StatefulWidget, Widget};

// --- Prelude --------------------------------------------------------------

/// The names most hosts want in scope.
pub mod prelude {
    pub use crate::{
        Badge, Breadcrumb, BreadcrumbAction, BreadcrumbItem, BreadcrumbState, Buffer, Button,
        Cell, CollapseMode, Event, Frame, GraphemePool, KeyCode, KeyEvent, LinkRegistry,
        Modifiers, MouseButton, MouseEvent, MouseEventKind, PackedRgba, Progress, Rect, Rule,
        Spinner, StatefulWidget, Style, StyleSheet, Switch, TextInput, TextInputView, Theme,
        Toast, ToastLevel, ToastQueue, Widget,
    };
}
