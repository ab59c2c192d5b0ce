use map_settings::MapSettings;

pub fn print_info(message: &str) {
    println!("[map3d][INFO] {message}");
}

pub fn print_error(message: &str) {
    eprintln!("[map3d][ERROR]: {message}");
}

pub fn print_settings_summary(settings: &MapSettings) {
    print_info(&format!("Settings \"{}\":", settings.name));
    println!(
        "grid: {}x{}, canvas: {}x{}",
        settings.data_width, settings.data_height, settings.canvas_width, settings.canvas_height
    );
    println!(
        "rotation: {} deg, field of view: {} deg",
        settings.view.rotation_degrees, settings.view.field_of_view_degrees
    );
    println!(
        "thresholds: critical {}, warning {}, normal {}",
        settings.thresholds.critical, settings.thresholds.warning, settings.thresholds.normal
    );
}
