#![forbid(unsafe_code)]

//! Serialize a buffer to ANSI escape sequences.
//!
//! Full-redraw serialization only: every row is emitted in order with SGR
//! state tracked across cells so runs of identical style cost one sequence.
//! Hyperlinked runs are wrapped in OSC 8 when a [`LinkRegistry`] is given.

use crate::buffer::Buffer;
use crate::cell::{CellAttrs, CellContent, PackedRgba, StyleFlags};
use crate::grapheme_pool::GraphemePool;
use crate::link::LinkRegistry;
use std::io;

const SGR_RESET: &str = "\x1b[0m";
const OSC8_CLOSE: &str = "\x1b]8;;\x1b\\";

/// Write a buffer to `out` as ANSI-styled text, one line per row.
///
/// The stream is left in a reset state (no SGR attributes, no open link).
pub fn write_buffer(
    buf: &Buffer,
    pool: &GraphemePool,
    links: Option<&LinkRegistry>,
    out: &mut impl io::Write,
) -> io::Result<()> {
    let mut state = SgrState::default();
    write!(out, "{SGR_RESET}")?;

    for y in 0..buf.height() {
        for cell in buf.row_cells(y) {
            if cell.is_continuation() {
                continue;
            }
            state.transition(out, cell.fg, cell.bg, cell.attrs, links)?;
            match cell.content {
                CellContent::Empty => write!(out, " ")?,
                CellContent::Char(c) => write!(out, "{c}")?,
                CellContent::Grapheme(id) => write!(out, "{}", pool.get(id).unwrap_or("\u{fffd}"))?,
                CellContent::Continuation => {}
            }
        }
        state.finish_row(out, links)?;
        writeln!(out)?;
    }
    Ok(())
}

/// SGR and hyperlink state carried across cells.
#[derive(Debug, Default)]
struct SgrState {
    fg: PackedRgba,
    bg: PackedRgba,
    flags: StyleFlags,
    link_id: u32,
}

impl SgrState {
    fn transition(
        &mut self,
        out: &mut impl io::Write,
        fg: PackedRgba,
        bg: PackedRgba,
        attrs: CellAttrs,
        links: Option<&LinkRegistry>,
    ) -> io::Result<()> {
        let flags = attrs.flags();
        if fg != self.fg || bg != self.bg || flags != self.flags {
            // Rebuild from a clean slate; partial SGR diffs are not worth it
            // for a full-redraw writer.
            write!(out, "{SGR_RESET}")?;
            if flags.contains(StyleFlags::BOLD) {
                write!(out, "\x1b[1m")?;
            }
            if flags.contains(StyleFlags::DIM) {
                write!(out, "\x1b[2m")?;
            }
            if flags.contains(StyleFlags::ITALIC) {
                write!(out, "\x1b[3m")?;
            }
            if flags.contains(StyleFlags::UNDERLINE) {
                write!(out, "\x1b[4m")?;
            }
            if flags.contains(StyleFlags::REVERSE) {
                write!(out, "\x1b[7m")?;
            }
            if flags.contains(StyleFlags::STRIKETHROUGH) {
                write!(out, "\x1b[9m")?;
            }
            if !fg.is_default() {
                write!(out, "\x1b[38;2;{};{};{}m", fg.r(), fg.g(), fg.b())?;
            }
            if !bg.is_default() {
                write!(out, "\x1b[48;2;{};{};{}m", bg.r(), bg.g(), bg.b())?;
            }
            self.fg = fg;
            self.bg = bg;
            self.flags = flags;
        }

        let link_id = attrs.link_id();
        if link_id != self.link_id {
            if self.link_id != CellAttrs::LINK_ID_NONE {
                write!(out, "{OSC8_CLOSE}")?;
            }
            if link_id != CellAttrs::LINK_ID_NONE
                && let Some(url) = links.and_then(|l| l.url(link_id))
            {
                write!(out, "\x1b]8;;{url}\x1b\\")?;
            }
            self.link_id = link_id;
        }
        Ok(())
    }

    fn finish_row(&mut self, out: &mut impl io::Write, _links: Option<&LinkRegistry>) -> io::Result<()> {
        if self.link_id != CellAttrs::LINK_ID_NONE {
            write!(out, "{OSC8_CLOSE}")?;
            self.link_id = CellAttrs::LINK_ID_NONE;
        }
        if self.fg != PackedRgba::DEFAULT
            || self.bg != PackedRgba::DEFAULT
            || !self.flags.is_empty()
        {
            write!(out, "{SGR_RESET}")?;
            self.fg = PackedRgba::DEFAULT;
            self.bg = PackedRgba::DEFAULT;
            self.flags = StyleFlags::empty();
        }
        Ok(())
    }
}
