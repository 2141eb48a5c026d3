use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartsConfig {
    /// Number of directors kept in the bar chart ranking.
    #[serde(default = "ChartsConfig::default_top_directors")]
    pub top_directors: usize,
    /// Upper end of the bar chart's popularity axis. Values beyond it
    /// overflow the axis; they are not clamped.
    #[serde(default = "ChartsConfig::default_popularity_max")]
    pub popularity_max: f64,
    #[serde(default = "ChartsConfig::default_point_radius")]
    pub point_radius: f32,
    #[serde(default = "ChartsConfig::default_chart_height")]
    pub chart_height: f32,
}

impl ChartsConfig {
    fn default_top_directors() -> usize {
        8
    }
    fn default_popularity_max() -> f64 {
        10.0
    }
    fn default_point_radius() -> f32 {
        5.0
    }
    fn default_chart_height() -> f32 {
        400.0
    }
}

impl Default for ChartsConfig {
    fn default() -> Self {
        Self {
            top_directors: Self::default_top_directors(),
            popularity_max: Self::default_popularity_max(),
            point_radius: Self::default_point_radius(),
            chart_height: Self::default_chart_height(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreemapConfig {
    /// Gap between cells, in points.
    #[serde(default = "TreemapConfig::default_padding")]
    pub padding: f32,
    /// Cells narrower than this on either side get no label.
    #[serde(default = "TreemapConfig::default_label_min_side")]
    pub label_min_side: f32,
}

impl TreemapConfig {
    fn default_padding() -> f32 {
        2.0
    }
    fn default_label_min_side() -> f32 {
        28.0
    }
}

impl Default for TreemapConfig {
    fn default() -> Self {
        Self {
            padding: Self::default_padding(),
            label_min_side: Self::default_label_min_side(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZoomConfig {
    /// Maximum scatter zoom factor; minimum is always 1 (the full extent).
    #[serde(default = "ZoomConfig::default_max_scale")]
    pub max_scale: f64,
}

impl ZoomConfig {
    fn default_max_scale() -> f64 {
        8.0
    }
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            max_scale: Self::default_max_scale(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "UiConfig::default_pixels_per_point")]
    pub pixels_per_point: f32,
}

impl UiConfig {
    fn default_pixels_per_point() -> f32 {
        1.25
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            pixels_per_point: Self::default_pixels_per_point(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub charts: ChartsConfig,
    #[serde(default)]
    pub treemap: TreemapConfig,
    #[serde(default)]
    pub zoom: ZoomConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

impl AppConfig {
    fn round_f32(x: f32) -> f32 {
        (x * 1_000_000.0).round() / 1_000_000.0
    }

    fn format_float_compact(x: f64) -> String {
        let mut s = format!("{:.6}", x);
        while s.contains('.') && s.ends_with('0') {
            s.pop();
        }
        if s.ends_with('.') {
            s.pop();
        }
        if s.is_empty() { "0".to_string() } else { s }
    }

    fn rounded(mut self) -> Self {
        self.charts.point_radius = Self::round_f32(self.charts.point_radius);
        self.charts.chart_height = Self::round_f32(self.charts.chart_height);
        self.treemap.padding = Self::round_f32(self.treemap.padding);
        self.treemap.label_min_side = Self::round_f32(self.treemap.label_min_side);
        self.ui.pixels_per_point = Self::round_f32(self.ui.pixels_per_point);
        self
    }

    pub fn load_or_default(path: &str) -> Self {
        let path_obj = Path::new(path);
        if path_obj.exists() {
            match fs::read_to_string(path_obj) {
                Ok(contents) => match toml::from_str(&contents) {
                    Ok(cfg) => return cfg,
                    Err(err) => {
                        eprintln!("Failed to parse config {path}: {err}. Using defaults.");
                    }
                },
                Err(err) => {
                    eprintln!("Failed to read config {path}: {err}. Using defaults.");
                }
            }
            return Self::default();
        }

        // File does not exist: write commented defaults and return them.
        let default_cfg = Self::default().rounded();
        if let Ok(text) = toml::to_string_pretty(&default_cfg) {
            let mut commented = String::new();
            for line in text.lines() {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    commented.push('\n');
                } else if trimmed.starts_with('[') && trimmed.ends_with(']') {
                    commented.push_str(line);
                    commented.push('\n');
                } else {
                    let mut out_line = line.to_string();
                    if let Some((lhs, rhs)) = line.split_once('=') {
                        let rhs_trim = rhs.trim();
                        let has_decimal = rhs_trim.contains('.');
                        if (has_decimal || rhs_trim.contains('e') || rhs_trim.contains('E'))
                            && !rhs_trim.contains('"')
                            && rhs_trim != "true"
                            && rhs_trim != "false"
                        {
                            if let Ok(val) = rhs_trim.parse::<f64>() {
                                let mut formatted = Self::format_float_compact(val);
                                if has_decimal && !formatted.contains('.') {
                                    formatted.push_str(".0");
                                }
                                out_line = format!("{} = {}", lhs.trim(), formatted);
                            }
                        }
                    }
                    commented.push_str("# ");
                    commented.push_str(&out_line);
                    commented.push('\n');
                }
            }
            if let Err(err) = fs::write(path_obj, commented) {
                eprintln!("Failed to write default config to {path}: {err}");
            }
        } else {
            eprintln!("Failed to serialize default config; continuing with defaults");
        }
        default_cfg
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn unique_path(name: &str) -> std::path::PathBuf {
        let mut p = std::env::temp_dir();
        p.push(format!(
            "filmscope_config_test_{}_{}",
            name,
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap()
                .as_nanos()
        ));
        p
    }

    #[test]
    fn load_or_default_writes_defaults_cleanly() {
        let path = unique_path("defaults.toml");
        let path_str = path.to_string_lossy().to_string();
        let _ = fs::remove_file(&path);

        let cfg = AppConfig::load_or_default(&path_str);
        assert!(path.exists(), "config file should be created");
        assert_eq!(cfg.charts.top_directors, 8);
        assert_eq!(cfg.charts.popularity_max, 10.0);
        assert_eq!(cfg.charts.point_radius, 5.0);
        assert_eq!(cfg.treemap.padding, 2.0);
        assert_eq!(cfg.zoom.max_scale, 8.0);

        let contents = fs::read_to_string(&path).expect("read written config");
        assert!(
            contents.contains("# top_directors = 8"),
            "should write commented top_directors"
        );
        assert!(
            contents.contains("# popularity_max = 10.0"),
            "should write commented popularity_max"
        );
        assert!(
            contents.contains("# padding = 2.0"),
            "should write commented padding"
        );
        assert!(
            contents.contains("# max_scale = 8.0"),
            "should write commented max_scale"
        );

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn load_or_default_reads_existing() {
        let path = unique_path("custom.toml");
        let path_str = path.to_string_lossy().to_string();
        let custom = AppConfig {
            charts: ChartsConfig {
                top_directors: 5,
                popularity_max: 12.0,
                point_radius: 3.0,
                chart_height: 320.0,
            },
            treemap: TreemapConfig {
                padding: 4.0,
                label_min_side: 40.0,
            },
            zoom: ZoomConfig { max_scale: 4.0 },
            ui: UiConfig {
                pixels_per_point: 1.0,
            },
        };
        let text = toml::to_string_pretty(&custom).unwrap();
        fs::write(&path, text).unwrap();

        let cfg = AppConfig::load_or_default(&path_str);
        assert_eq!(cfg.charts.top_directors, 5);
        assert_eq!(cfg.charts.popularity_max, 12.0);
        assert_eq!(cfg.charts.point_radius, 3.0);
        assert_eq!(cfg.charts.chart_height, 320.0);
        assert_eq!(cfg.treemap.padding, 4.0);
        assert_eq!(cfg.treemap.label_min_side, 40.0);
        assert_eq!(cfg.zoom.max_scale, 4.0);
        assert_eq!(cfg.ui.pixels_per_point, 1.0);

        let _ = fs::remove_file(&path);
    }
}
