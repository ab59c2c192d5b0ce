use crate::commands::Commands;
use crate::output::{print_info, print_settings_summary};
use crate::synthetic::synthetic_row;
use map3d_core::{FrameRequest, Renderer};
use map3d_export::FrameBuffer;
use map_settings::{load_height_rows, MapSettings};
use row_link::{link, LinkConfig, RowUpdate};
use std::path::{Path, PathBuf};
use std::thread;

type CommandResult = Result<(), Box<dyn std::error::Error>>;

pub fn handle_command(command: Commands) -> CommandResult {
    match command {
        Commands::Render {
            settings,
            heights,
            output,
        } => handle_render(settings.as_deref(), heights.as_deref(), &output),
        Commands::Stream {
            settings,
            rows,
            output,
            snapshot_every,
            clear_above,
        } => handle_stream(
            settings.as_deref(),
            rows,
            &output,
            snapshot_every,
            clear_above,
        ),
        Commands::Defaults { output } => {
            MapSettings::default().save_to_file(&output)?;
            print_info(&format!("Default settings written to {}", output.display()));
            Ok(())
        }
    }
}

fn load_settings(path: Option<&Path>) -> Result<MapSettings, Box<dyn std::error::Error>> {
    match path {
        Some(path) => Ok(MapSettings::load_from_file(path)?),
        None => Ok(MapSettings::default()),
    }
}

fn handle_render(settings: Option<&Path>, heights: Option<&Path>, output: &Path) -> CommandResult {
    let mut settings = load_settings(settings)?;
    let rows = heights.map(load_height_rows).transpose()?;
    if let Some(rows) = rows.as_ref() {
        let width = rows.first().map(Vec::len).unwrap_or(0);
        if rows.is_empty() || width == 0 {
            return Err("height file contains no samples".into());
        }
        settings.data_width = width;
        settings.data_height = rows.len();
    }
    print_settings_summary(&settings);

    let mut renderer = Renderer::from_settings(&settings);
    for (y, row) in rows.iter().flatten().enumerate() {
        renderer.set_row(y, row);
    }
    let request = FrameRequest::from(&settings);
    request.view.validate()?;
    map3d_export::export(&mut renderer, &request, output)?;
    print_info(&format!("Rendered {}", output.display()));
    Ok(())
}

fn snapshot_path(output: &Path, index: usize) -> PathBuf {
    let stem = output
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "frame".to_string());
    output.with_file_name(format!("{stem}_{index:04}.png"))
}

fn handle_stream(
    settings: Option<&Path>,
    rows: usize,
    output: &Path,
    snapshot_every: Option<usize>,
    clear_above: bool,
) -> CommandResult {
    let settings = load_settings(settings)?;
    print_settings_summary(&settings);
    let width = settings.data_width;
    let height = settings.data_height;
    let peak = settings.thresholds.critical + settings.thresholds.critical / 5;

    let mut renderer = Renderer::from_settings(&settings);
    let request = FrameRequest::from(&settings);
    let mut frame = FrameBuffer::new(settings.canvas_width, settings.canvas_height);
    frame.draw(|canvas| renderer.paint(canvas, &request))?;

    let (producer, consumer) = link::<RowUpdate>(&LinkConfig::default());
    let acquisition = thread::spawn(move || {
        for row in 0..rows {
            let update = RowUpdate {
                row,
                samples: synthetic_row(row, width, peak),
            };
            if producer.send_blocking(update).is_err() {
                log::warn!("row consumer went away after {row} rows");
                break;
            }
        }
    });

    let mut received = 0;
    while let Some(update) = consumer.recv() {
        if update.row < height {
            renderer.set_row(update.row, &update.samples);
            frame.draw(|canvas| {
                renderer.quick_draw_single_row(canvas, update.row, clear_above)
            })?;
        } else {
            renderer.scroll_in_row(&update.samples);
            frame.draw(|canvas| renderer.paint(canvas, &request))?;
        }
        received += 1;
        if let Some(every) = snapshot_every.filter(|&every| every > 0) {
            if received % every == 0 {
                let path = snapshot_path(output, received);
                frame.save_png(&path)?;
                log::debug!("snapshot {}", path.display());
            }
        }
    }
    if acquisition.join().is_err() {
        return Err("row producer thread panicked".into());
    }

    frame.save_png(output)?;
    print_info(&format!(
        "Streamed {received} rows into {}",
        output.display()
    ));
    Ok(())
}
