use crate::{MapSettings, SettingsError};

pub const MIN_FIELD_OF_VIEW_DEGREES: i32 = 1;
pub const MAX_FIELD_OF_VIEW_DEGREES: i32 = 179;

pub fn normalize_settings(mut settings: MapSettings) -> Result<MapSettings, SettingsError> {
    settings.data_width = settings.data_width.max(1);
    settings.data_height = settings.data_height.max(1);
    settings.canvas_width = settings.canvas_width.max(1);
    settings.canvas_height = settings.canvas_height.max(1);
    settings.view.field_of_view_degrees = settings
        .view
        .field_of_view_degrees
        .clamp(MIN_FIELD_OF_VIEW_DEGREES, MAX_FIELD_OF_VIEW_DEGREES);
    if settings.view.from == settings.view.at {
        return Err(SettingsError::DegenerateView);
    }
    let t = settings.thresholds;
    if t.critical < t.warning || t.warning < t.normal {
        return Err(SettingsError::UnorderedThresholds {
            critical: t.critical,
            warning: t.warning,
            normal: t.normal,
        });
    }
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ThresholdSettings;

    #[test]
    fn clamps_field_of_view_and_sizes() {
        let mut settings = MapSettings::default();
        settings.view.field_of_view_degrees = 400;
        settings.data_width = 0;
        settings.canvas_height = 0;
        let settings = normalize_settings(settings).unwrap();
        assert_eq!(settings.view.field_of_view_degrees, MAX_FIELD_OF_VIEW_DEGREES);
        assert_eq!(settings.data_width, 1);
        assert_eq!(settings.canvas_height, 1);

        let mut settings = MapSettings::default();
        settings.view.field_of_view_degrees = -5;
        let settings = normalize_settings(settings).unwrap();
        assert_eq!(settings.view.field_of_view_degrees, MIN_FIELD_OF_VIEW_DEGREES);
    }

    #[test]
    fn rejects_unordered_thresholds() {
        let mut settings = MapSettings::default();
        settings.thresholds = ThresholdSettings {
            critical: 10,
            warning: 20,
            normal: 5,
        };
        assert!(matches!(
            normalize_settings(settings),
            Err(SettingsError::UnorderedThresholds { .. })
        ));
    }

    #[test]
    fn rejects_eye_on_target() {
        let mut settings = MapSettings::default();
        settings.view.at = settings.view.from;
        assert!(matches!(
            normalize_settings(settings),
            Err(SettingsError::DegenerateView)
        ));
    }
}
