//! OhlcChart — candles over volume bars, sharing one right-hand axis column.
//!
//! Layout of a frame:
//! - the bottom `floor(height * volume_fraction)` rows hold volume bars, the
//!   rest holds candles
//! - items newer than the scroll offset are dropped, then the trailing window
//!   that fits the width is kept
//! - the wider of the price and volume axes is reserved on the right of both
//!   panes; if that leaves fewer columns, the window is re-sliced once
//!
//! Chart state sits behind a mutex so input handlers on another thread can
//! scroll while a frame is drawn. `draw` copies the visible window under the
//! lock and renders without it.

use std::sync::{Mutex, MutexGuard, PoisonError};

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::{Block, Widget};
use tickplot_core::{
    before_offset, capacity, clamp_offset, value_range, volume_range, window, Decimal,
    LinearScale, OhlcItem, PlotError, SliceMethod,
};

use crate::axis::Axis;
use crate::bars::Bars;
use crate::candles::OhlcCandles;
use crate::runes::{GlyphRamp, OhlcRunes};
use crate::target::DrawTarget;
use crate::theme::Theme;

pub const DEFAULT_VOLUME_FRACTION: f64 = 0.2;

/// Timestamp layout of the chart title.
const TITLE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

#[derive(Debug)]
struct ChartState<D> {
    items: Vec<OhlcItem<D>>,
    offset: usize,
    spacing: u16,
    ohlc_runes: OhlcRunes,
    volume_runes: GlyphRamp,
    volume_fraction: f64,
    theme: Theme,
}

/// What one frame needs, copied out of the locked state.
struct Snapshot<D> {
    items: Vec<OhlcItem<D>>,
    spacing: u16,
    ohlc_runes: OhlcRunes,
    volume_runes: GlyphRamp,
    volume_fraction: f64,
    theme: Theme,
}

/// Candle and volume panes of a chart area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartLayout {
    pub price: Rect,
    pub volume: Rect,
}

impl ChartLayout {
    pub fn new(area: Rect, volume_fraction: f64) -> Self {
        let volume_height = volume_height(area.height, volume_fraction);
        let price_height = area.height - volume_height;
        Self {
            price: Rect::new(area.x, area.y, area.width, price_height),
            volume: Rect::new(area.x, area.y + price_height, area.width, volume_height),
        }
    }
}

/// `floor(height * fraction)`, clamped to `[0, height]`.
fn volume_height(height: u16, fraction: f64) -> u16 {
    let rows = (f64::from(height) * fraction).floor();
    if rows.is_nan() || rows <= 0.0 {
        0
    } else if rows >= f64::from(height) {
        height
    } else {
        rows as u16
    }
}

fn fit_axes<D: Decimal>(
    price: &mut Axis<D>,
    volume: &mut Axis<D>,
    items: &[OhlcItem<D>],
    layout: &ChartLayout,
) {
    price.set_scale(LinearScale::new(
        value_range(items),
        usize::from(layout.price.height),
    ));
    volume.set_scale(LinearScale::new(
        volume_range(items),
        usize::from(layout.volume.height),
    ));
}

/// Interactive OHLC chart with a volume pane.
#[derive(Debug)]
pub struct OhlcChart<D = tickplot_core::rust_decimal::Decimal> {
    state: Mutex<ChartState<D>>,
}

impl<D: Decimal> Default for OhlcChart<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: Decimal> OhlcChart<D> {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(ChartState {
                items: Vec::new(),
                offset: 0,
                spacing: 1,
                ohlc_runes: OhlcRunes::default(),
                volume_runes: GlyphRamp::bars(),
                volume_fraction: DEFAULT_VOLUME_FRACTION,
                theme: Theme::default(),
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, ChartState<D>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Replaces the data; the offset is clamped to the new length.
    pub fn set_items(&self, items: Vec<OhlcItem<D>>) {
        let mut state = self.lock();
        state.offset = clamp_offset(state.offset as i64, items.len());
        state.items = items;
    }

    pub fn items(&self) -> Vec<OhlcItem<D>> {
        self.lock().items.clone()
    }

    pub fn len(&self) -> usize {
        self.lock().items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().items.is_empty()
    }

    /// Number of newest items scrolled out of view, clamped to
    /// `[0, len - 1]`.
    pub fn set_offset(&self, offset: i64) {
        let mut state = self.lock();
        state.offset = clamp_offset(offset, state.items.len());
    }

    pub fn add_offset(&self, delta: i64) {
        let mut state = self.lock();
        let offset = (state.offset as i64).saturating_add(delta);
        state.offset = clamp_offset(offset, state.items.len());
    }

    pub fn offset(&self) -> usize {
        self.lock().offset
    }

    /// Cells per candle; 0 is stored as 1.
    pub fn set_spacing(&self, spacing: u16) {
        self.lock().spacing = spacing.max(1);
    }

    pub fn spacing(&self) -> u16 {
        self.lock().spacing
    }

    pub fn set_runes(&self, ohlc_runes: OhlcRunes, volume_runes: GlyphRamp) {
        let mut state = self.lock();
        state.ohlc_runes = ohlc_runes;
        state.volume_runes = volume_runes;
    }

    pub fn runes(&self) -> (OhlcRunes, GlyphRamp) {
        let state = self.lock();
        (state.ohlc_runes, state.volume_runes.clone())
    }

    /// Share of the height given to volume, in `[0, 1]`.
    pub fn set_volume_fraction(&self, fraction: f64) -> Result<(), PlotError> {
        if !(0.0..=1.0).contains(&fraction) {
            return Err(PlotError::InvalidVolumeFraction(fraction));
        }
        self.lock().volume_fraction = fraction;
        Ok(())
    }

    pub fn volume_fraction(&self) -> f64 {
        self.lock().volume_fraction
    }

    pub fn set_theme(&self, theme: Theme) {
        self.lock().theme = theme;
    }

    pub fn theme(&self) -> Theme {
        self.lock().theme
    }

    /// Title for the newest item left of the offset:
    /// ` O=.. H=.. L=.. C=.. V=.. TS=YYYY-MM-DDTHH:MM:SS `.
    pub fn summary(&self) -> Option<String> {
        let state = self.lock();
        let last = before_offset(&state.items, state.offset).last()?;
        Some(format!(
            " O={} H={} L={} C={} V={} TS={} ",
            last.open,
            last.high,
            last.low,
            last.close,
            last.volume,
            last.timestamp.format(TITLE_TIME_FORMAT),
        ))
    }

    /// Copies the items that can appear in a frame `width` cells wide.
    fn snapshot(&self, width: u16) -> Snapshot<D> {
        let state = self.lock();
        let scrolled = before_offset(&state.items, state.offset);
        let max_count = capacity(usize::from(width), usize::from(state.spacing));
        Snapshot {
            items: window(scrolled, max_count, SliceMethod::Last).to_vec(),
            spacing: state.spacing,
            ohlc_runes: state.ohlc_runes,
            volume_runes: state.volume_runes.clone(),
            volume_fraction: state.volume_fraction,
            theme: state.theme,
        }
    }

    /// Renders candles, volume and axes into `area`, without a frame.
    pub fn draw<T: DrawTarget + ?Sized>(&self, target: &mut T, area: Rect) {
        if area.is_empty() {
            return;
        }

        let Snapshot {
            mut items,
            spacing,
            ohlc_runes,
            volume_runes,
            volume_fraction,
            theme,
        } = self.snapshot(area.width);
        let layout = ChartLayout::new(area, volume_fraction);

        let mut price_axis = Axis::new();
        price_axis.set_style(theme.price_axis());
        price_axis.set_highlight_style(theme.highlight());
        let mut volume_axis = Axis::new();
        volume_axis.set_style(theme.volume_axis());
        volume_axis.set_highlight_style(theme.highlight());

        fit_axes(&mut price_axis, &mut volume_axis, &items, &layout);

        let mut width = area.width;
        let mut axis_width = 0;
        if !items.is_empty() {
            let wanted = price_axis.calc_width().max(volume_axis.calc_width());
            let wanted = u16::try_from(wanted).unwrap_or(u16::MAX);
            if width > wanted {
                axis_width = wanted;
                width -= wanted;

                let max_count = capacity(usize::from(width), usize::from(spacing));
                if items.len() > max_count {
                    items.drain(..items.len() - max_count);
                    fit_axes(&mut price_axis, &mut volume_axis, &items, &layout);
                }
            } else {
                tracing::debug!(width, axis_width = wanted, "chart axis skipped");
            }
        }

        tracing::debug!(
            items = items.len(),
            width,
            axis_width,
            price_rows = layout.price.height,
            volume_rows = layout.volume.height,
            "chart frame"
        );

        if axis_width > 0 {
            if let Some(last) = items.last() {
                price_axis.set_highlight(Some(last.close));
                volume_axis.set_highlight(Some(last.volume));
            }
            let axis_x = area.x + width;
            price_axis.draw(
                target,
                Rect::new(axis_x, layout.price.y, axis_width, layout.price.height),
            );
            volume_axis.draw(
                target,
                Rect::new(axis_x, layout.volume.y, axis_width, layout.volume.height),
            );
        }

        let volumes: Vec<D> = items.iter().map(|item| item.volume).collect();

        let mut candles = OhlcCandles::new();
        candles.set_spacing(spacing);
        candles.set_runes(ohlc_runes);
        candles.set_positive_style(theme.candle(true));
        candles.set_negative_style(theme.candle(false));
        candles.set_items(items);
        candles.draw(target, Rect { width, ..layout.price });

        let mut bars = Bars::with_data(volumes);
        bars.set_spacing(spacing);
        bars.set_runes(volume_runes);
        bars.set_style(theme.volume());
        bars.draw(target, Rect { width, ..layout.volume });
    }
}

impl<D: Decimal> Widget for &OhlcChart<D> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = self.theme();
        let mut block = Block::bordered()
            .border_style(theme.border())
            .style(theme.background());
        if let Some(title) = self.summary() {
            block = block.title(title);
        }

        let inner = block.inner(area);
        block.render(area, buf);
        self.draw(buf, inner);
    }
}
