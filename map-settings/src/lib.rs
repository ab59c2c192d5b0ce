use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub mod heights;
pub mod normalize;
pub use heights::{load_height_rows, parse_height_rows};
pub use normalize::{normalize_settings, MAX_FIELD_OF_VIEW_DEGREES, MIN_FIELD_OF_VIEW_DEGREES};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapSettings {
    pub name: String,
    pub data_width: usize,
    pub data_height: usize,
    pub canvas_width: u32,
    pub canvas_height: u32,
    #[serde(default)]
    pub view: ViewSettings,
    #[serde(default)]
    pub stretch: StretchSettings,
    #[serde(default)]
    pub thresholds: ThresholdSettings,
    #[serde(default)]
    pub modes: ModeSettings,
    #[serde(default)]
    pub palette: PaletteSettings,
}

impl Default for MapSettings {
    fn default() -> Self {
        Self {
            name: "map".to_string(),
            data_width: 64,
            data_height: 48,
            canvas_width: 800,
            canvas_height: 600,
            view: ViewSettings::default(),
            stretch: StretchSettings::default(),
            thresholds: ThresholdSettings::default(),
            modes: ModeSettings::default(),
            palette: PaletteSettings::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewSettings {
    pub from: [f64; 3],
    pub at: [f64; 3],
    pub up: [f64; 3],
    pub rotation_degrees: i32,
    pub field_of_view_degrees: i32,
    #[serde(default)]
    pub screen_offset: [i32; 2],
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            from: [0.0, -400.0, 300.0],
            at: [0.0, 0.0, 0.0],
            up: [0.0, 0.0, 1.0],
            rotation_degrees: 30,
            field_of_view_degrees: 90,
            screen_offset: [0, 0],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StretchSettings {
    pub x: f64,
    pub y: f64,
}

impl Default for StretchSettings {
    fn default() -> Self {
        Self { x: 6.0, y: 6.0 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThresholdSettings {
    pub critical: i32,
    pub warning: i32,
    pub normal: i32,
}

impl Default for ThresholdSettings {
    fn default() -> Self {
        Self {
            critical: 100,
            warning: 65,
            normal: 25,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModeSettings {
    pub hidden_surface: bool,
    pub wireframe: bool,
    pub birds_eye: bool,
}

impl Default for ModeSettings {
    fn default() -> Self {
        Self {
            hidden_surface: true,
            wireframe: false,
            birds_eye: false,
        }
    }
}

/// Colors as `[r, g, b]` triples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteSettings {
    pub background: [u8; 3],
    pub grid: [u8; 3],
    pub outline: [u8; 3],
    pub critical: [u8; 3],
    pub warning: [u8; 3],
    pub normal_high: [u8; 3],
    pub baseline: [u8; 3],
    pub birds_eye_highlight: [u8; 3],
}

impl Default for PaletteSettings {
    fn default() -> Self {
        Self {
            background: [255, 255, 255],
            grid: [180, 180, 180],
            outline: [0, 0, 0],
            critical: [220, 30, 30],
            warning: [250, 200, 0],
            normal_high: [0, 170, 60],
            baseline: [40, 110, 230],
            birds_eye_highlight: [220, 30, 30],
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum SettingsError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("toml parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
    #[error("toml write error: {0}")]
    TomlWrite(#[from] toml::ser::Error),
    #[error("unsupported settings file extension '{0}'")]
    UnsupportedFormat(String),
    #[error("thresholds must satisfy critical >= warning >= normal (got {critical}/{warning}/{normal})")]
    UnorderedThresholds {
        critical: i32,
        warning: i32,
        normal: i32,
    },
    #[error("view 'from' and 'at' must differ")]
    DegenerateView,
    #[error("line {line}: invalid height sample '{token}'")]
    InvalidSample { line: usize, token: String },
    #[error("line {line}: expected {expected} samples, found {found}")]
    RowLength {
        line: usize,
        expected: usize,
        found: usize,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SettingsFormat {
    Json,
    Toml,
}

fn format_for(path: &Path) -> Result<SettingsFormat, SettingsError> {
    let ext = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();
    match ext.as_str() {
        "json" => Ok(SettingsFormat::Json),
        "toml" => Ok(SettingsFormat::Toml),
        _ => Err(SettingsError::UnsupportedFormat(ext)),
    }
}

impl MapSettings {
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), SettingsError> {
        let path = path.as_ref();
        let data = match format_for(path)? {
            SettingsFormat::Json => serde_json::to_string_pretty(self)?,
            SettingsFormat::Toml => toml::to_string_pretty(self)?,
        };
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(path, data)?;
        Ok(())
    }

    /// Reads and normalizes a settings file. The format follows the
    /// extension: `.json` or `.toml`.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let format = format_for(path)?;
        let data = fs::read_to_string(path)?;
        let settings: MapSettings = match format {
            SettingsFormat::Json => serde_json::from_str(&data)?,
            SettingsFormat::Toml => toml::from_str(&data)?,
        };
        normalize_settings(settings)
    }
}
