use map_settings::{PaletteSettings, ThresholdSettings};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl From<[u8; 3]> for Rgb {
    fn from(c: [u8; 3]) -> Self {
        Rgb(c[0], c[1], c[2])
    }
}

/// Classification levels for one paint. Expected order is
/// `critical >= warning >= normal`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Thresholds {
    pub critical: i32,
    pub warning: i32,
    pub normal: i32,
}

impl Default for Thresholds {
    fn default() -> Self {
        Thresholds::from(ThresholdSettings::default())
    }
}

impl From<ThresholdSettings> for Thresholds {
    fn from(t: ThresholdSettings) -> Self {
        Self {
            critical: t.critical,
            warning: t.warning,
            normal: t.normal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorClass {
    Critical,
    Warning,
    NormalHigh,
    Baseline,
    Background,
}

/// Classifies a quad by its four raw corner heights. The first rule any
/// single corner satisfies wins, so one spike colors the whole quad.
pub fn assign_color(corners: [i32; 4], thresholds: &Thresholds) -> ColorClass {
    if corners.iter().any(|&h| h >= thresholds.critical) {
        ColorClass::Critical
    } else if corners.iter().any(|&h| h >= thresholds.warning) {
        ColorClass::Warning
    } else if corners.iter().any(|&h| h > thresholds.normal) {
        ColorClass::NormalHigh
    } else if corners.iter().any(|&h| h > 0) {
        ColorClass::Baseline
    } else {
        ColorClass::Background
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Rgb,
    pub grid: Rgb,
    pub outline: Rgb,
    pub critical: Rgb,
    pub warning: Rgb,
    pub normal_high: Rgb,
    pub baseline: Rgb,
    pub birds_eye_highlight: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Palette::from(PaletteSettings::default())
    }
}

impl From<PaletteSettings> for Palette {
    fn from(p: PaletteSettings) -> Self {
        Self {
            background: p.background.into(),
            grid: p.grid.into(),
            outline: p.outline.into(),
            critical: p.critical.into(),
            warning: p.warning.into(),
            normal_high: p.normal_high.into(),
            baseline: p.baseline.into(),
            birds_eye_highlight: p.birds_eye_highlight.into(),
        }
    }
}

impl Palette {
    pub fn color_for(&self, class: ColorClass) -> Rgb {
        match class {
            ColorClass::Critical => self.critical,
            ColorClass::Warning => self.warning,
            ColorClass::NormalHigh => self.normal_high,
            ColorClass::Baseline => self.baseline,
            ColorClass::Background => self.background,
        }
    }
}
