#![forbid(unsafe_code)]

//! Collapsing breadcrumb trail.
//!
//! An ordered sequence of navigation items rendered inline with separators.
//! When collapsing is enabled and the trail is long enough, the middle of
//! the trail folds behind a disclosure trigger; the folded items reveal
//! either in a panel anchored below the trigger ([`CollapseMode::Dropdown`])
//! or inline in the trigger's place ([`CollapseMode::Spread`]).
//!
//! The widget is stateless configuration; [`BreadcrumbState`] owns the
//! disclosure flag and the hit regions of the last render, and resolves
//! input events into [`BreadcrumbAction`]s.

pub mod disclosure;
pub mod partition;
pub mod trail;

pub use disclosure::{CollapseMode, DisclosureState};
pub use partition::{Partition, partition, should_collapse};
pub use trail::{ItemPosition, Segment};

use crate::popup;
use crate::{StatefulWidget, display_width, draw_text_span, set_link_area};
use weft_core::event::{Event, KeyCode, MouseButton, MouseEvent, MouseEventKind};
use weft_core::geometry::{Rect, Sides};
use weft_render::frame::Frame;
use weft_render::hit::HitId;
use weft_style::Style;
use weft_style::theme::ResolvedTheme;

/// One navigable step in the trail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreadcrumbItem {
    /// Display label.
    pub label: String,
    /// Link target. The terminal item renders as plain text even when set.
    pub href: Option<String>,
}

impl BreadcrumbItem {
    /// Create an item with a label and no link.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: None,
        }
    }

    /// Set the link target.
    #[must_use]
    pub fn with_href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }
}

/// What a handled input event amounted to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BreadcrumbAction {
    /// An item was activated. Hosts perform the navigation; activating a
    /// revealed folded item also dismisses the disclosure.
    Navigate {
        /// Index into the original item sequence.
        index: usize,
        /// The item's link target, if any.
        href: Option<String>,
    },
    /// The disclosure trigger was activated.
    Toggled {
        /// The state after the toggle.
        revealed: bool,
    },
    /// The disclosure was dismissed without activating anything.
    Dismissed,
}

/// Interactive region targets the trail registers in the frame's hit grid.
///
/// The trigger carries its expanded flag and, by sharing the widget's
/// [`HitId`] with the [`HitTarget::Folded`] region, identifies the region
/// it controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    /// The disclosure trigger; `expanded` mirrors the revealed state.
    Trigger {
        /// Whether the folded region is currently revealed.
        expanded: bool,
    },
    /// A navigable item, by index into the original sequence.
    Item(u32),
    /// The revealed folded region (dropdown panel surface).
    Folded,
}

impl HitTarget {
    /// Encode for [`weft_render::hit::HitGrid`] payloads.
    #[must_use]
    pub const fn encode(self) -> u64 {
        match self {
            Self::Trigger { expanded } => (1 << 32) | expanded as u64,
            Self::Item(index) => (2 << 32) | index as u64,
            Self::Folded => 3 << 32,
        }
    }

    /// Decode a hit grid payload.
    #[must_use]
    pub const fn decode(data: u64) -> Option<Self> {
        let payload = data as u32;
        match data >> 32 {
            1 => Some(Self::Trigger {
                expanded: payload != 0,
            }),
            2 => Some(Self::Item(payload)),
            3 => Some(Self::Folded),
            _ => None,
        }
    }
}

/// A visible item's screen region, kept for event resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
struct ItemRegion {
    rect: Rect,
    index: usize,
    href: Option<String>,
}

/// Screen regions and flags captured at the last render.
#[derive(Debug, Clone, Default)]
struct TrailLayout {
    container: Rect,
    trigger: Option<Rect>,
    panel: Option<Rect>,
    items: Vec<ItemRegion>,
    folded_items: Vec<ItemRegion>,
    mode: CollapseMode,
    collapse_active: bool,
}

impl TrailLayout {
    /// Container plus open panel: leaving this area dismisses.
    fn leave_bounds(&self) -> Rect {
        match self.panel {
            Some(panel) => self.container.union(&panel),
            None => self.container,
        }
    }

    fn item_at(&self, x: u16, y: u16) -> Option<&ItemRegion> {
        self.items.iter().find(|r| r.rect.contains(x, y))
    }

    fn folded_item_at(&self, x: u16, y: u16) -> Option<&ItemRegion> {
        self.folded_items.iter().find(|r| r.rect.contains(x, y))
    }
}

/// Per-instance state: the disclosure flag plus last-render layout.
///
/// Each trail on screen owns one; instances never share state.
#[derive(Debug, Clone, Default)]
pub struct BreadcrumbState {
    disclosure: DisclosureState,
    layout: TrailLayout,
}

impl BreadcrumbState {
    /// Create state with the disclosure hidden.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the folded items are currently revealed.
    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.disclosure.is_revealed()
    }

    /// The trigger's screen region at the last render, if one was drawn.
    #[must_use]
    pub fn trigger_area(&self) -> Option<Rect> {
        self.layout.trigger
    }

    /// The dropdown panel's screen region at the last render, if open.
    #[must_use]
    pub fn panel_area(&self) -> Option<Rect> {
        self.layout.panel
    }

    /// The trail's consumed screen region at the last render.
    #[must_use]
    pub fn container_area(&self) -> Rect {
        self.layout.container
    }

    /// Resolve an input event against the last-rendered layout.
    ///
    /// Returns the resulting action, or `None` when the event did not
    /// concern this trail. Events arriving before the first render are
    /// ignored. Callers re-render after any `Some` to reflect the new
    /// disclosure state.
    pub fn handle_event(&mut self, event: &Event) -> Option<BreadcrumbAction> {
        match event {
            Event::Key(key) if key.is_press() => match key.code {
                KeyCode::Esc => {
                    if self.disclosure.dismiss() {
                        Some(BreadcrumbAction::Dismissed)
                    } else {
                        None
                    }
                }
                KeyCode::Enter | KeyCode::Char(' ') => self.activate_trigger_by_key(),
                _ => None,
            },
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            _ => None,
        }
    }

    fn activate_trigger_by_key(&mut self) -> Option<BreadcrumbAction> {
        // Keyboard activation mirrors pointer activation in dropdown mode.
        if self.layout.collapse_active
            && self.layout.mode == CollapseMode::Dropdown
            && self.layout.trigger.is_some()
        {
            let revealed = self.disclosure.toggle();
            Some(BreadcrumbAction::Toggled { revealed })
        } else {
            None
        }
    }

    fn handle_mouse(&mut self, mouse: &MouseEvent) -> Option<BreadcrumbAction> {
        let (x, y) = (mouse.x, mouse.y);
        match mouse.kind {
            MouseEventKind::Moved => {
                if !self.layout.collapse_active {
                    return None;
                }
                let over_trigger = self.layout.trigger.is_some_and(|t| t.contains(x, y));
                if self.layout.mode == CollapseMode::Spread
                    && over_trigger
                    && self.disclosure.reveal()
                {
                    return Some(BreadcrumbAction::Toggled { revealed: true });
                }
                if self.disclosure.is_revealed() && !self.layout.leave_bounds().contains(x, y) {
                    self.disclosure.dismiss();
                    return Some(BreadcrumbAction::Dismissed);
                }
                None
            }
            MouseEventKind::Up(MouseButton::Left) => {
                if self.layout.trigger.is_some_and(|t| t.contains(x, y)) {
                    return if self.layout.mode == CollapseMode::Dropdown {
                        let revealed = self.disclosure.toggle();
                        Some(BreadcrumbAction::Toggled { revealed })
                    } else {
                        None
                    };
                }
                if let Some(region) = self.layout.folded_item_at(x, y).cloned() {
                    // Selecting a destination closes the disclosure.
                    self.disclosure.dismiss();
                    return Some(BreadcrumbAction::Navigate {
                        index: region.index,
                        href: region.href,
                    });
                }
                if let Some(region) = self.layout.item_at(x, y).cloned() {
                    self.disclosure.dismiss();
                    return Some(BreadcrumbAction::Navigate {
                        index: region.index,
                        href: region.href,
                    });
                }
                if self.disclosure.is_revealed() && !self.layout.leave_bounds().contains(x, y) {
                    self.disclosure.dismiss();
                    return Some(BreadcrumbAction::Dismissed);
                }
                None
            }
            _ => None,
        }
    }
}

/// The collapsing breadcrumb trail widget.
///
/// Configuration only; pair it with a [`BreadcrumbState`] per instance.
#[derive(Debug, Clone)]
pub struct Breadcrumb<'a> {
    items: &'a [BreadcrumbItem],
    separator: &'a str,
    trigger_glyph: &'a str,
    spacing: u16,
    collapse_enabled: bool,
    items_before_collapse: usize,
    items_after_collapse: usize,
    mode: CollapseMode,
    accent_after: bool,
    muted_style: Style,
    accent_style: Style,
    separator_style: Style,
    trigger_style: Style,
    panel_border_style: Style,
    panel_row_style: Style,
    hit_id: HitId,
}

impl<'a> Breadcrumb<'a> {
    /// Create a trail over the given items, collapsing disabled.
    #[must_use]
    pub fn new(items: &'a [BreadcrumbItem]) -> Self {
        Self {
            items,
            separator: "/",
            trigger_glyph: "...",
            spacing: 1,
            collapse_enabled: false,
            items_before_collapse: 1,
            items_after_collapse: 1,
            mode: CollapseMode::default(),
            accent_after: false,
            muted_style: Style::new().dim(),
            accent_style: Style::new().bold(),
            separator_style: Style::new().dim(),
            trigger_style: Style::new().dim(),
            panel_border_style: Style::new().dim(),
            panel_row_style: Style::new(),
            hit_id: HitId(0),
        }
    }

    /// Enable collapsing with the given visible counts around the fold.
    ///
    /// Counts clamp: at least one item stays visible on each side when the
    /// trail is long enough to fold at all.
    #[must_use]
    pub fn collapse(mut self, items_before: usize, items_after: usize) -> Self {
        self.collapse_enabled = true;
        self.items_before_collapse = items_before;
        self.items_after_collapse = items_after;
        self
    }

    /// Set the disclosure strategy.
    #[must_use]
    pub fn mode(mut self, mode: CollapseMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the separator glyph (default `/`).
    #[must_use]
    pub fn separator(mut self, separator: &'a str) -> Self {
        self.separator = separator;
        self
    }

    /// Set the disclosure trigger glyph (default `...`).
    #[must_use]
    pub fn trigger_glyph(mut self, glyph: &'a str) -> Self {
        self.trigger_glyph = glyph;
        self
    }

    /// Set the spacing in cells around separators (default 1).
    #[must_use]
    pub fn spacing(mut self, spacing: u16) -> Self {
        self.spacing = spacing;
        self
    }

    /// Accent the whole trailing run instead of only first and last items.
    #[must_use]
    pub fn accent_after(mut self, accent_after: bool) -> Self {
        self.accent_after = accent_after;
        self
    }

    /// Set the style for regular items.
    #[must_use]
    pub fn muted_style(mut self, style: Style) -> Self {
        self.muted_style = style;
        self
    }

    /// Set the style for accented items.
    #[must_use]
    pub fn accent_style(mut self, style: Style) -> Self {
        self.accent_style = style;
        self
    }

    /// Set the separator style.
    #[must_use]
    pub fn separator_style(mut self, style: Style) -> Self {
        self.separator_style = style;
        self
    }

    /// Set the trigger style.
    #[must_use]
    pub fn trigger_style(mut self, style: Style) -> Self {
        self.trigger_style = style;
        self
    }

    /// Set the dropdown panel border style.
    #[must_use]
    pub fn panel_border_style(mut self, style: Style) -> Self {
        self.panel_border_style = style;
        self
    }

    /// Set the dropdown panel row style.
    #[must_use]
    pub fn panel_row_style(mut self, style: Style) -> Self {
        self.panel_row_style = style;
        self
    }

    /// Pull all styles from a resolved theme.
    #[must_use]
    pub fn with_theme(self, theme: &ResolvedTheme) -> Self {
        self.muted_style(theme.muted_style())
            .accent_style(theme.accent_style())
            .separator_style(theme.border_style())
            .trigger_style(theme.muted_style())
            .panel_border_style(theme.border_style())
            .panel_row_style(theme.overlay_style())
    }

    /// Set the id used for hit grid registration.
    #[must_use]
    pub fn hit_id(mut self, id: HitId) -> Self {
        self.hit_id = id;
        self
    }

    fn item_style(&self, pos: &ItemPosition) -> Style {
        if trail::is_accented(pos, self.accent_after) {
            self.accent_style
        } else {
            self.muted_style
        }
    }

    fn draw_separator(&self, frame: &mut Frame<'_>, x: u16, y: u16, max_x: u16) -> u16 {
        let x = x.saturating_add(self.spacing).min(max_x);
        let x = draw_text_span(frame, x, y, self.separator, self.separator_style, max_x);
        x.saturating_add(self.spacing).min(max_x)
    }

    /// Draw one inline item with its separators; returns the advanced x.
    #[allow(clippy::too_many_arguments)]
    fn draw_inline_item(
        &self,
        frame: &mut Frame<'_>,
        x: u16,
        y: u16,
        max_x: u16,
        item: &BreadcrumbItem,
        pos: ItemPosition,
        index: usize,
        regions: &mut Vec<ItemRegion>,
    ) -> u16 {
        // A label with no visible width renders nothing for its slot.
        if display_width(&item.label) == 0 {
            return x;
        }

        let mut x = x;
        if trail::separator_before(&pos) {
            x = self.draw_separator(frame, x, y, max_x);
        }

        let start = x;
        x = draw_text_span(frame, x, y, &item.label, self.item_style(&pos), max_x);
        let rect = Rect::new(start, y, x.saturating_sub(start), 1);

        if !pos.globally_last
            && let Some(href) = &item.href
        {
            let link_id = frame.register_link(href);
            set_link_area(&mut frame.buffer, rect, link_id);
        }
        frame.register_hit(rect, self.hit_id, HitTarget::Item(index as u32).encode());
        regions.push(ItemRegion {
            rect,
            index,
            href: item.href.clone(),
        });

        if trail::separator_after(&pos) {
            x = self.draw_separator(frame, x, y, max_x);
        }
        x
    }

    fn draw_trigger(
        &self,
        frame: &mut Frame<'_>,
        x: u16,
        y: u16,
        max_x: u16,
        expanded: bool,
    ) -> (u16, Rect) {
        let start = x;
        let x = draw_text_span(frame, x, y, self.trigger_glyph, self.trigger_style, max_x);
        let rect = Rect::new(start, y, x.saturating_sub(start), 1);
        frame.register_hit(rect, self.hit_id, HitTarget::Trigger { expanded }.encode());
        (x, rect)
    }

    fn draw_panel(
        &self,
        frame: &mut Frame<'_>,
        trigger: Rect,
        folded: &[BreadcrumbItem],
        first_index: usize,
        layout: &mut TrailLayout,
    ) {
        let max_label = folded
            .iter()
            .map(|item| display_width(&item.label))
            .max()
            .unwrap_or(0);
        let width = (max_label as u16).saturating_add(4);
        let height = (folded.len() as u16).saturating_add(2);

        let panel = popup::anchored_below(trigger, width, height, frame.area());
        if panel.width < 2 || panel.height < 2 {
            return;
        }

        frame.register_hit(panel, self.hit_id, HitTarget::Folded.encode());

        let block = crate::block::Block::bordered()
            .border_style(self.panel_border_style)
            .padding(Sides::horizontal(1));
        crate::Widget::render(&block, panel, frame);

        let inner = block.inner(panel);
        for (i, item) in folded.iter().enumerate() {
            if i as u16 >= inner.height {
                break;
            }
            if display_width(&item.label) == 0 {
                continue;
            }
            let y = inner.y + i as u16;
            let end = draw_text_span(
                frame,
                inner.x,
                y,
                &item.label,
                self.panel_row_style,
                inner.right(),
            );
            let rect = Rect::new(inner.x, y, inner.width, 1);
            let index = first_index + i;
            if let Some(href) = &item.href {
                let link_id = frame.register_link(href);
                set_link_area(&mut frame.buffer, Rect::new(inner.x, y, end - inner.x, 1), link_id);
            }
            frame.register_hit(rect, self.hit_id, HitTarget::Item(index as u32).encode());
            layout.folded_items.push(ItemRegion {
                rect,
                index,
                href: item.href.clone(),
            });
        }
        layout.panel = Some(panel);
    }
}

impl StatefulWidget for Breadcrumb<'_> {
    type State = BreadcrumbState;

    fn render(&self, area: Rect, frame: &mut Frame<'_>, state: &mut Self::State) {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "widget_render",
            widget = "Breadcrumb",
            x = area.x,
            y = area.y,
            w = area.width,
            h = area.height
        )
        .entered();

        let mut layout = TrailLayout {
            mode: self.mode,
            ..TrailLayout::default()
        };

        let n = self.items.len();
        if area.is_empty() || n == 0 {
            state.layout = layout;
            return;
        }

        let y = area.y;
        let max_x = area.right();
        let mut x = area.x;

        let collapse_active = self.collapse_enabled
            && should_collapse(n, self.items_before_collapse, self.items_after_collapse);
        layout.collapse_active = collapse_active;

        if !collapse_active {
            for (i, item) in self.items.iter().enumerate() {
                let pos = ItemPosition::new(Segment::All, i == 0, i == n - 1);
                x = self.draw_inline_item(frame, x, y, max_x, item, pos, i, &mut layout.items);
            }
        } else {
            let parts = partition(self.items, self.items_before_collapse, self.items_after_collapse);
            let before_len = parts.before.len();
            let after_start = n - parts.after.len();
            let revealed = state.disclosure.is_revealed();

            for (i, item) in parts.before.iter().enumerate() {
                let pos = ItemPosition::new(Segment::Before, i == 0, false);
                x = self.draw_inline_item(frame, x, y, max_x, item, pos, i, &mut layout.items);
            }

            match (self.mode, revealed) {
                (CollapseMode::Spread, true) => {
                    // Folded items slide into the trigger's place; the
                    // trigger itself is hidden.
                    let last = parts.collapsed.len().saturating_sub(1);
                    for (i, item) in parts.collapsed.iter().enumerate() {
                        let pos = ItemPosition::new(Segment::Collapsed, i == 0, false)
                            .last_of_segment(i == last);
                        x = self.draw_inline_item(
                            frame,
                            x,
                            y,
                            max_x,
                            item,
                            pos,
                            before_len + i,
                            &mut layout.folded_items,
                        );
                    }
                }
                (CollapseMode::Spread, false) | (CollapseMode::Dropdown, false) => {
                    let (new_x, trigger) = self.draw_trigger(frame, x, y, max_x, false);
                    x = new_x;
                    layout.trigger = Some(trigger);
                }
                (CollapseMode::Dropdown, true) => {
                    let (new_x, trigger) = self.draw_trigger(frame, x, y, max_x, true);
                    x = new_x;
                    layout.trigger = Some(trigger);
                    self.draw_panel(frame, trigger, parts.collapsed, before_len, &mut layout);
                }
            }

            for (i, item) in parts.after.iter().enumerate() {
                let index = after_start + i;
                let pos = ItemPosition::new(Segment::After, i == 0, index == n - 1);
                x = self.draw_inline_item(frame, x, y, max_x, item, pos, index, &mut layout.items);
            }
        }

        layout.container = Rect::new(area.x, y, x.saturating_sub(area.x), 1);
        state.layout = layout;
    }
}
