//! Chart configuration, as read from the `[chart]` table of a config file.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tickplot_core::{Decimal, PlotError, SliceMethod};

use crate::bars::Bars;
use crate::chart::{OhlcChart, DEFAULT_VOLUME_FRACTION};
use crate::runes::{GlyphRamp, OhlcRunes};
use crate::theme::{Theme, ThemeName};
use crate::ticks::Ticks;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("invalid {field}: {source}")]
    Runes {
        field: &'static str,
        #[source]
        source: PlotError,
    },

    #[error(transparent)]
    Plot(#[from] PlotError),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChartConfig {
    /// Cells per data point
    pub spacing: u16,
    /// Share of the chart height given to volume bars
    pub volume_fraction: f64,
    /// Which end of a bar/tick series is kept when it does not fit
    pub slice_method: SliceMethod,
    pub theme: ThemeName,
    pub bar_runes: Option<String>,
    pub tick_runes: Option<String>,
    pub volume_runes: Option<String>,
    /// Twelve candle glyphs in table order
    pub ohlc_runes: Option<String>,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            spacing: 1,
            volume_fraction: DEFAULT_VOLUME_FRACTION,
            slice_method: SliceMethod::default(),
            theme: ThemeName::default(),
            bar_runes: None,
            tick_runes: None,
            volume_runes: None,
            ohlc_runes: None,
        }
    }
}

fn ramp(
    field: &'static str,
    custom: Option<&str>,
    default: fn() -> GlyphRamp,
) -> Result<GlyphRamp, ConfigError> {
    match custom {
        Some(s) => GlyphRamp::parse(s).map_err(|source| ConfigError::Runes { field, source }),
        None => Ok(default()),
    }
}

impl ChartConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.volume_fraction) {
            return Err(PlotError::InvalidVolumeFraction(self.volume_fraction).into());
        }
        self.bar_ramp()?;
        self.tick_ramp()?;
        self.volume_ramp()?;
        self.candle_runes()?;
        Ok(())
    }

    pub fn bar_ramp(&self) -> Result<GlyphRamp, ConfigError> {
        ramp("bar_runes", self.bar_runes.as_deref(), GlyphRamp::bars)
    }

    pub fn tick_ramp(&self) -> Result<GlyphRamp, ConfigError> {
        ramp("tick_runes", self.tick_runes.as_deref(), GlyphRamp::ticks)
    }

    pub fn volume_ramp(&self) -> Result<GlyphRamp, ConfigError> {
        ramp("volume_runes", self.volume_runes.as_deref(), GlyphRamp::bars)
    }

    pub fn candle_runes(&self) -> Result<OhlcRunes, ConfigError> {
        match self.ohlc_runes.as_deref() {
            Some(s) => OhlcRunes::parse(s).map_err(|source| ConfigError::Runes {
                field: "ohlc_runes",
                source,
            }),
            None => Ok(OhlcRunes::default()),
        }
    }

    pub fn theme(&self) -> Theme {
        Theme::from(self.theme)
    }

    /// Applies every setting to `chart`; on error `chart` is unchanged.
    pub fn apply<D: Decimal>(&self, chart: &OhlcChart<D>) -> Result<(), ConfigError> {
        self.validate()?;
        chart.set_volume_fraction(self.volume_fraction)?;
        chart.set_runes(self.candle_runes()?, self.volume_ramp()?);
        chart.set_spacing(self.spacing);
        chart.set_theme(self.theme());
        Ok(())
    }

    pub fn ohlc_chart<D: Decimal>(&self) -> Result<OhlcChart<D>, ConfigError> {
        let chart = OhlcChart::new();
        self.apply(&chart)?;
        Ok(chart)
    }

    pub fn bars<D: Decimal>(&self) -> Result<Bars<D>, ConfigError> {
        let mut bars = Bars::new();
        bars.set_runes(self.bar_ramp()?);
        bars.set_spacing(self.spacing);
        bars.set_slice_method(self.slice_method);
        bars.set_style(self.theme().volume());
        Ok(bars)
    }

    pub fn ticks<D: Decimal>(&self) -> Result<Ticks<D>, ConfigError> {
        let mut ticks = Ticks::new();
        ticks.set_runes(self.tick_ramp()?);
        ticks.set_spacing(self.spacing);
        ticks.set_slice_method(self.slice_method);
        ticks.set_style(self.theme().price_axis());
        Ok(ticks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tickplot_core::rust_decimal::Decimal as Dec;

    #[test]
    fn empty_table_gives_defaults() {
        let config: ChartConfig = toml::from_str("").unwrap();
        assert_eq!(config, ChartConfig::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn parses_every_field() {
        let config: ChartConfig = toml::from_str(
            r#"
            spacing = 2
            volume_fraction = 0.25
            slice_method = "first"
            theme = "parrot-neon"
            bar_runes = "▁▂▃▄▅▆▇█"
            tick_runes = "_-^"
            volume_runes = "█"
            ohlc_runes = "-++||||+||#|"
            "#,
        )
        .unwrap();

        assert_eq!(config.spacing, 2);
        assert_eq!(config.slice_method, SliceMethod::First);
        assert_eq!(config.theme, ThemeName::ParrotNeon);
        assert_eq!(config.bar_ramp().unwrap().resolution(), 8);
        assert_eq!(config.tick_ramp().unwrap().glyph(2), '^');
        assert_eq!(config.candle_runes().unwrap().thick, '#');
        assert!(config.validate().is_ok());
    }

    #[test]
    fn unknown_fields_are_rejected() {
        assert!(toml::from_str::<ChartConfig>("colour = \"red\"").is_err());
    }

    #[test]
    fn empty_ramp_names_the_field() {
        let config = ChartConfig {
            tick_runes: Some(String::new()),
            ..ChartConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert_eq!(
            err,
            ConfigError::Runes {
                field: "tick_runes",
                source: PlotError::EmptyGlyphRamp
            }
        );
        assert!(err.to_string().contains("tick_runes"));
    }

    #[test]
    fn short_ohlc_runes_are_rejected() {
        let config = ChartConfig {
            ohlc_runes: Some("abc".into()),
            ..ChartConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Runes {
                field: "ohlc_runes",
                source: PlotError::InvalidOhlcRunes(3)
            })
        ));
    }

    #[test]
    fn volume_fraction_outside_share_is_rejected() {
        let config = ChartConfig {
            volume_fraction: -0.1,
            ..ChartConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::Plot(PlotError::InvalidVolumeFraction(-0.1)))
        );
    }

    #[test]
    fn apply_configures_the_chart() {
        let config = ChartConfig {
            spacing: 3,
            volume_fraction: 0.5,
            volume_runes: Some("#".into()),
            theme: ThemeName::ParrotNeon,
            ..ChartConfig::default()
        };
        let chart = config.ohlc_chart::<Dec>().unwrap();

        assert_eq!(chart.spacing(), 3);
        assert_eq!(chart.volume_fraction(), 0.5);
        assert_eq!(chart.runes().1.glyphs(), &['#']);
        assert_eq!(chart.theme(), Theme::parrot_neon());
    }

    #[test]
    fn failed_apply_leaves_chart_untouched() {
        let chart: OhlcChart<Dec> = OhlcChart::new();
        let config = ChartConfig {
            spacing: 4,
            bar_runes: Some(String::new()),
            ..ChartConfig::default()
        };
        assert!(config.apply(&chart).is_err());
        assert_eq!(chart.spacing(), 1);
    }

    #[test]
    fn series_builders_use_the_config() {
        let config = ChartConfig {
            spacing: 2,
            slice_method: SliceMethod::First,
            ..ChartConfig::default()
        };
        let bars = config.bars::<Dec>().unwrap();
        assert_eq!(bars.spacing(), 2);
        assert_eq!(bars.slice_method(), SliceMethod::First);

        let ticks = config.ticks::<Dec>().unwrap();
        assert_eq!(ticks.runes(), &GlyphRamp::ticks());
    }
}
