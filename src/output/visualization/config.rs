//! Plot configuration shared by the release plots
//!
//! Colours are plain RGB triples so that the configuration exists whether or
//! not the plotting backend is compiled in.

/// RGB colour triple
pub type Rgb = (u8, u8, u8);

pub const RED: Rgb = (255, 0, 0);
pub const BLUE: Rgb = (0, 0, 255);
pub const WHITE: Rgb = (255, 255, 255);

/// Configuration for customizing plots
///
/// # Example
///
/// ```rust
/// use drux::output::visualization::{PlotConfig, BLUE};
///
/// let mut config = PlotConfig::release_profile("Higuchi film");
/// config.line_color = BLUE;
/// config.width = 1920;
/// config.height = 1080;
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct PlotConfig {
    /// Image width in pixels (default: 1024)
    pub width: u32,

    /// Image height in pixels (default: 768)
    pub height: u32,

    /// Plot title; empty means no caption (default: "Plot")
    pub title: String,

    /// X-axis label (default: "Time (s)")
    pub xlabel: String,

    /// Y-axis label (default: set by plot type)
    pub ylabel: String,

    /// Legend entry of the curve
    pub series_label: String,

    /// Line color (default: RED)
    pub line_color: Rgb,

    /// Background color (default: WHITE)
    pub background: Rgb,

    /// Line width in pixels (default: 2)
    pub line_width: u32,

    /// Draw axes, ticks and labels (default: true)
    pub show_grid: bool,

    /// Draw the legend box (default: true)
    pub show_legend: bool,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 768,
            title: "Plot".to_string(),
            xlabel: "Time (s)".to_string(),
            ylabel: String::new(),
            series_label: String::new(),
            line_color: RED,
            background: WHITE,
            line_width: 2,
            show_grid: true,
            show_legend: true,
        }
    }
}

/// Helper trait to accept both `String` and `None` for optional titles
pub trait IntoOptionalTitle {
    fn into_optional_title(self) -> Option<String>;
}

impl IntoOptionalTitle for &str {
    fn into_optional_title(self) -> Option<String> {
        Some(self.to_string())
    }
}

impl IntoOptionalTitle for String {
    fn into_optional_title(self) -> Option<String> {
        Some(self)
    }
}

impl<T: IntoOptionalTitle> IntoOptionalTitle for Option<T> {
    fn into_optional_title(self) -> Option<String> {
        self.and_then(|t| t.into_optional_title())
    }
}

/// Constant for no title (default title will be used)
pub const NO_TITLE: Option<&str> = None;

impl PlotConfig {
    /// Config for a release curve (release vs time)
    ///
    /// Title defaults to "Drug Release Profile".
    pub fn release_profile(title: impl IntoOptionalTitle) -> Self {
        Self {
            title: title
                .into_optional_title()
                .unwrap_or_else(|| "Drug Release Profile".to_string()),
            ylabel: "Released drug".to_string(),
            series_label: "Release".to_string(),
            ..Self::default()
        }
    }

    /// Config for a release-rate curve (dM/dt vs time)
    ///
    /// Title defaults to "Drug Release Rate".
    pub fn release_rate(title: impl IntoOptionalTitle) -> Self {
        Self {
            title: title
                .into_optional_title()
                .unwrap_or_else(|| "Drug Release Rate".to_string()),
            ylabel: "Release rate (1/s)".to_string(),
            series_label: "Release rate".to_string(),
            line_color: BLUE,
            ..Self::default()
        }
    }

    /// Config that draws the curve only: no caption, axes or legend
    pub fn curve_only(mut self) -> Self {
        self.title.clear();
        self.show_grid = false;
        self.show_legend = false;
        self
    }
}

// =================================================================================================
// Tests
// =================================================================================================
