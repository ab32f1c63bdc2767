//! Keyboard and mouse scrolling of an [`OhlcChart`].
//!
//! The offset counts items hidden on the newest side, so moving "left" (back
//! in time) increases it.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, MouseEvent, MouseEventKind};
use tickplot_core::Decimal;

use crate::chart::OhlcChart;

const PAGE: i64 = 20;
const SCROLL: i64 = 10;

/// Applies `key` to `chart`. Returns whether the key was consumed.
pub fn handle_key<D: Decimal>(chart: &OhlcChart<D>, key: KeyEvent) -> bool {
    if key.kind != KeyEventKind::Press {
        return false;
    }

    match key.code {
        KeyCode::End => chart.set_offset(0),
        // Clamped to the oldest item
        KeyCode::Home => chart.set_offset(i64::MAX),
        KeyCode::PageUp => chart.add_offset(PAGE),
        KeyCode::PageDown => chart.add_offset(-PAGE),
        KeyCode::Left | KeyCode::Char('h') => chart.add_offset(1),
        KeyCode::Right | KeyCode::Char('l') => chart.add_offset(-1),
        KeyCode::Char('+') => chart.set_spacing(chart.spacing().saturating_add(1)),
        KeyCode::Char('-') => chart.set_spacing(chart.spacing().saturating_sub(1)),
        _ => return false,
    }
    true
}

/// Applies wheel scrolling to `chart`. Returns whether the event was consumed.
pub fn handle_mouse<D: Decimal>(chart: &OhlcChart<D>, event: MouseEvent) -> bool {
    match event.kind {
        MouseEventKind::ScrollUp => chart.add_offset(SCROLL),
        MouseEventKind::ScrollDown => chart.add_offset(-SCROLL),
        _ => return false,
    }
    true
}
