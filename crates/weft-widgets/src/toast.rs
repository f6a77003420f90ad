#![forbid(unsafe_code)]

//! Toast notifications.
//!
//! A toast is one severity-flavored message row; a [`ToastQueue`] owns the
//! live toasts, ages them on host ticks, and caps how many render at once.

use crate::{Widget, display_width, draw_text_span};
use std::collections::VecDeque;
use weft_core::geometry::Rect;
use weft_render::frame::Frame;
use weft_style::Style;
use weft_style::theme::ResolvedTheme;

/// Identifier for a queued toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ToastId(pub u64);

/// Severity of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastLevel {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

impl ToastLevel {
    /// The icon glyph for this level.
    #[must_use]
    pub const fn icon(self) -> char {
        match self {
            Self::Info => 'ℹ',
            Self::Success => '✓',
            Self::Warning => '⚠',
            Self::Error => '✗',
        }
    }

    /// ASCII-safe icon fallback.
    #[must_use]
    pub const fn ascii_icon(self) -> char {
        match self {
            Self::Info => 'i',
            Self::Success => '+',
            Self::Warning => '!',
            Self::Error => 'x',
        }
    }

    /// The theme style for this level.
    #[must_use]
    pub fn style(self, theme: &ResolvedTheme) -> Style {
        let fg = match self {
            Self::Info => theme.info,
            Self::Success => theme.success,
            Self::Warning => theme.warning,
            Self::Error => theme.error,
        };
        Style::new().fg(fg)
    }
}

/// Default lifetime of a non-persistent toast, in host ticks.
pub const DEFAULT_DURATION_TICKS: u32 = 50;

/// One notification message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    message: String,
    title: Option<String>,
    level: ToastLevel,
    duration_ticks: Option<u32>,
    dismissable: bool,
    style: Style,
}

impl Toast {
    /// Create an info toast with the default lifetime.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            title: None,
            level: ToastLevel::default(),
            duration_ticks: Some(DEFAULT_DURATION_TICKS),
            dismissable: true,
            style: Style::default(),
        }
    }

    /// Set a bold title before the message.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the severity level.
    #[must_use]
    pub fn level(mut self, level: ToastLevel) -> Self {
        self.level = level;
        self
    }

    /// Set the lifetime in host ticks.
    #[must_use]
    pub fn duration_ticks(mut self, ticks: u32) -> Self {
        self.duration_ticks = Some(ticks);
        self
    }

    /// Keep the toast until explicitly dismissed.
    #[must_use]
    pub fn persistent(mut self) -> Self {
        self.duration_ticks = None;
        self
    }

    /// Set whether the toast can be dismissed by the user.
    #[must_use]
    pub fn dismissable(mut self, dismissable: bool) -> Self {
        self.dismissable = dismissable;
        self
    }

    /// Set an explicit style, overriding the level's theme style.
    #[must_use]
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Pull the style for the configured level from a theme.
    #[must_use]
    pub fn with_theme(self, theme: &ResolvedTheme) -> Self {
        let style = self.level.style(theme);
        self.style(style)
    }

    /// The severity level.
    #[must_use]
    pub fn toast_level(&self) -> ToastLevel {
        self.level
    }

    /// Display width of the rendered row.
    #[must_use]
    pub fn width(&self) -> u16 {
        let title_width = self
            .title
            .as_deref()
            .map(|t| display_width(t) + 2)
            .unwrap_or(0);
        (2 + title_width + display_width(&self.message)) as u16
    }
}

impl Widget for Toast {
    fn render(&self, area: Rect, frame: &mut Frame<'_>) {
        if area.is_empty() {
            return;
        }

        let y = area.y;
        let max_x = area.right();
        let icon = self.level.icon().to_string();
        let mut x = draw_text_span(frame, area.x, y, &icon, self.style, max_x);
        x = x.saturating_add(1);

        if let Some(title) = &self.title {
            x = draw_text_span(frame, x, y, title, self.style.bold(), max_x);
            x = draw_text_span(frame, x, y, ": ", self.style, max_x);
        }
        draw_text_span(frame, x, y, &self.message, self.style, max_x);
    }
}

#[derive(Debug, Clone)]
struct ToastEntry {
    id: ToastId,
    toast: Toast,
    age: u32,
}

/// Owns live toasts: insertion order, aging, and the visibility cap.
#[derive(Debug, Clone)]
pub struct ToastQueue {
    entries: VecDeque<ToastEntry>,
    max_visible: usize,
    next_id: u64,
}

impl ToastQueue {
    /// Create a queue showing at most `max_visible` toasts at once.
    #[must_use]
    pub fn new(max_visible: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            max_visible: max_visible.max(1),
            next_id: 0,
        }
    }

    /// Queue a toast, returning its id.
    pub fn push(&mut self, toast: Toast) -> ToastId {
        let id = ToastId(self.next_id);
        self.next_id += 1;
        self.entries.push_back(ToastEntry { id, toast, age: 0 });
        id
    }

    /// Age every toast one tick and drop the expired ones.
    ///
    /// Only visible toasts age, so queued-up overflow does not expire
    /// before it was ever shown.
    pub fn tick(&mut self) {
        let visible = self.max_visible;
        for entry in self.entries.iter_mut().take(visible) {
            entry.age = entry.age.saturating_add(1);
        }
        self.entries.retain(|entry| {
            entry
                .toast
                .duration_ticks
                .is_none_or(|ticks| entry.age < ticks)
        });
    }

    /// Dismiss a toast by id. Returns `false` for unknown ids and toasts
    /// marked not dismissable.
    pub fn dismiss(&mut self, id: ToastId) -> bool {
        let Some(index) = self.entries.iter().position(|e| e.id == id) else {
            return false;
        };
        if !self.entries[index].toast.dismissable {
            return false;
        }
        self.entries.remove(index);
        true
    }

    /// The currently visible toasts, oldest first.
    pub fn visible(&self) -> impl Iterator<Item = (ToastId, &Toast)> {
        self.entries
            .iter()
            .take(self.max_visible)
            .map(|e| (e.id, &e.toast))
    }

    /// Number of live toasts, visible or queued.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no toasts are live.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::new(3)
    }
}

impl Widget for ToastQueue {
    /// Render visible toasts stacked top-down, one row each.
    fn render(&self, area: Rect, frame: &mut Frame<'_>) {
        for (i, (_, toast)) in self.visible().enumerate() {
            let y = area.y + i as u16;
            if y >= area.bottom() {
                break;
            }
            toast.render(Rect::new(area.x, y, area.width, 1), frame);
        }
    }
}
