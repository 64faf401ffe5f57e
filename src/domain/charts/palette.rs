//! Site color palette shared by every chart.

pub const PRIMARY: &str = "#667eea";
pub const SECONDARY: &str = "#764ba2";
pub const ACCENT1: &str = "#f093fb";
pub const ACCENT2: &str = "#f5576c";
pub const ACCENT3: &str = "#4facfe";
pub const ACCENT4: &str = "#00f2fe";
pub const SUCCESS: &str = "#96fbc4";

/// Order in which series pick colors.
pub const SERIES: [&str; 6] = [PRIMARY, ACCENT1, ACCENT3, ACCENT2, SECONDARY, ACCENT4];

pub const TRANSPARENT: &str = "rgba(0,0,0,0)";
pub const GRID: &str = "rgba(128,128,128,0.15)";
pub const FONT_FAMILY: &str = "Inter, sans-serif";

/// Color for the n-th series, cycling through [`SERIES`].
pub fn series_color(index: usize) -> &'static str {
    SERIES[index % SERIES.len()]
}

/// The first `n` series colors, cycling when `n` exceeds the palette.
pub fn series_colors(n: usize) -> Vec<String> {
    (0..n).map(|i| series_color(i).to_string()).collect()
}
