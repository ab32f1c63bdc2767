//! tickplot — OHLC candles, bars and ticks in the terminal.
//!
//! Commands:
//! - `ohlc` — candles over volume bars; scroll with End/Home, PgUp/PgDn,
//!   arrows or h/l and the mouse wheel, `+`/`-` for spacing
//! - `bars` — vertical bars with a value axis
//! - `ticks` — one mark per value with a value axis
//!
//! Data comes from `--input` or a seeded random series (`--sample`, `--seed`).
//! `--snapshot WxH` prints a single frame to stdout instead of opening the
//! interactive view. `q`, Esc or Ctrl-C quit.

mod config;
mod logging;
mod sample_data;

use std::io::{self, stdout};
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
    KeyModifiers,
};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::{Block, Widget};
use ratatui::{Frame, Terminal};

use tickplot_core::data::{load_ohlc, load_values};
use tickplot_core::rust_decimal::Decimal;
use tickplot_core::OhlcItem;
use tickplot_tui::{handle_key, handle_mouse, Axis, AxisBox, AxisPosition, ChartConfig, Plot};

#[derive(Parser)]
#[command(
    name = "tickplot",
    version,
    about = "tickplot — terminal charts for OHLC and value series"
)]
struct Cli {
    /// Config file. Defaults to <config dir>/tickplot/config.toml.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Candles over volume bars.
    Ohlc(Source),
    /// Vertical bars with a value axis.
    Bars(Source),
    /// One tick per value with a value axis.
    Ticks(Source),
}

#[derive(Args)]
struct Source {
    /// Data file. OHLC: JSON array or CSV (timestamp,open,high,low,close,volume).
    /// Bars/ticks: JSON array or one decimal per line.
    #[arg(long)]
    input: Option<PathBuf>,

    /// Number of generated points when no input is given.
    #[arg(long, default_value_t = 300, conflicts_with = "input")]
    sample: usize,

    /// Seed for generated data.
    #[arg(long, default_value_t = 42, conflicts_with = "input")]
    seed: u64,

    /// Print one WIDTHxHEIGHT frame to stdout and exit.
    #[arg(long, value_name = "WxH")]
    snapshot: Option<Size>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Size {
    width: u16,
    height: u16,
}

impl FromStr for Size {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (w, h) = s
            .split_once(|c| c == 'x' || c == 'X')
            .ok_or_else(|| format!("expected WIDTHxHEIGHT, got {s:?}"))?;
        let parse = |v: &str| {
            v.trim()
                .parse::<u16>()
                .map_err(|e| format!("invalid size {v:?}: {e}"))
        };
        Ok(Self {
            width: parse(w)?,
            height: parse(h)?,
        })
    }
}

fn main() -> Result<()> {
    // Restore the terminal before the default hook prints the panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        default_hook(info);
    }));

    let cli = Cli::parse();

    let config_path = cli.config.clone().unwrap_or_else(config::default_path);
    let config = config::load(&config_path)?;
    logging::init(&config.log)?;
    tracing::info!(config = %config_path.display(), "tickplot starting");

    let chart = &config.chart;
    match cli.command {
        Commands::Ohlc(source) => run_ohlc(chart, &source),
        Commands::Bars(source) => {
            let mut bars = chart.bars::<Decimal>()?;
            bars.set_data(series_values(&source)?);
            run_series(chart, bars, "bars", &source)
        }
        Commands::Ticks(source) => {
            let mut ticks = chart.ticks::<Decimal>()?;
            ticks.set_data(series_values(&source)?);
            run_series(chart, ticks, "ticks", &source)
        }
    }
}

fn ohlc_items(source: &Source) -> Result<Vec<OhlcItem>> {
    match &source.input {
        Some(path) => load_ohlc(path).context("failed to load OHLC data"),
        None => Ok(sample_data::ohlc_items(source.sample, source.seed)),
    }
}

fn series_values(source: &Source) -> Result<Vec<Decimal>> {
    match &source.input {
        Some(path) => load_values(path).context("failed to load values"),
        None => Ok(sample_data::values(source.sample, source.seed)),
    }
}

fn run_ohlc(chart_config: &ChartConfig, source: &Source) -> Result<()> {
    let chart = chart_config.ohlc_chart::<Decimal>()?;
    let items = ohlc_items(source)?;
    tracing::info!(items = items.len(), "ohlc data loaded");
    chart.set_items(items);

    if let Some(size) = source.snapshot {
        print_snapshot(size, |area, buf| (&chart).render(area, buf));
        return Ok(());
    }

    run_interactive(
        |frame| frame.render_widget(&chart, frame.area()),
        |event| match event {
            Event::Key(key) => {
                handle_key(&chart, key);
            }
            Event::Mouse(mouse) => {
                handle_mouse(&chart, mouse);
            }
            _ => {}
        },
    )
}

fn run_series<P: Plot<Decimal>>(
    chart_config: &ChartConfig,
    plot: P,
    name: &str,
    source: &Source,
) -> Result<()> {
    let theme = chart_config.theme();
    let mut axis = Axis::new();
    axis.set_style(theme.price_axis());

    let mut view = AxisBox::new(axis, plot);
    view.set_position(AxisPosition::Right);

    let block = Block::bordered()
        .title(format!(" {name} "))
        .border_style(theme.border())
        .style(theme.background());
    let mut render = |area: Rect, buf: &mut Buffer| {
        let inner = block.inner(area);
        block.clone().render(area, buf);
        view.draw(buf, inner);
    };

    if let Some(size) = source.snapshot {
        print_snapshot(size, &mut render);
        return Ok(());
    }

    run_interactive(
        |frame| {
            let area = frame.area();
            render(area, frame.buffer_mut());
        },
        |_| {},
    )
}

/// Renders one frame off-screen and prints its rows.
fn print_snapshot(size: Size, render: impl FnOnce(Rect, &mut Buffer)) {
    for line in snapshot_lines(size, render) {
        println!("{line}");
    }
}

fn snapshot_lines(size: Size, render: impl FnOnce(Rect, &mut Buffer)) -> Vec<String> {
    let area = Rect::new(0, 0, size.width, size.height);
    let mut buf = Buffer::empty(area);
    render(area, &mut buf);

    (area.top()..area.bottom())
        .map(|y| {
            let row: String = (area.left()..area.right())
                .map(|x| buf[(x, y)].symbol())
                .collect();
            row.trim_end().to_string()
        })
        .collect()
}

fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen)
}

fn is_quit(key: &KeyEvent) -> bool {
    key.kind == KeyEventKind::Press
        && match key.code {
            KeyCode::Char('q') | KeyCode::Esc => true,
            KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
            _ => false,
        }
}

/// Runs the draw/poll loop until a quit key; every other event goes to
/// `on_event`.
fn run_interactive(
    mut draw: impl FnMut(&mut Frame),
    mut on_event: impl FnMut(Event),
) -> Result<()> {
    enable_raw_mode().context("failed to enable raw mode")?;
    execute!(stdout(), EnterAlternateScreen, EnableMouseCapture)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
    terminal.clear()?;

    let result = (|| -> Result<()> {
        loop {
            terminal.draw(&mut draw)?;

            // 50ms poll, ~20 FPS
            if !event::poll(Duration::from_millis(50))? {
                continue;
            }
            match event::read()? {
                Event::Key(key) if is_quit(&key) => return Ok(()),
                event => on_event(event),
            }
        }
    })();

    restore_terminal()?;
    terminal.show_cursor()?;
    tracing::info!("tickplot stopped");
    result
}
