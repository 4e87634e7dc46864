//! Frame export handler
//!
//! Frames are rendered through the same scheduler and renderer as the
//! terminal player, with a synthetic clock so the output is reproducible.

use std::fs;
use std::io::{self, Write};
use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use tracing::info;

use playreel::cli::InputArgs;
use playreel::field::FieldGeometry;
use playreel::player::render::render_with_palette;
use playreel::player::render::svg::SvgSurface;
use playreel::player::AnimationScheduler;
use playreel::tui::current_theme;
use playreel::tui::theme::FieldPalette;
use playreel::{Config, PlayEvent};

use super::resolve_input;

/// Where `frame` writes to.
pub enum FrameTarget<'a> {
    /// One frame at the given progress; `-` is stdout
    Single { at: f64, output: &'a Path },
    /// Every frame of a run, sampled at `fps`
    Sequence { dir: &'a Path, fps: u32 },
}

/// Render frames. Returns `false` when the input has no play to render.
pub fn handle(input: &InputArgs, target: FrameTarget<'_>, scale: Option<f64>, config: &Config) -> Result<bool> {
    let (_, resolved) = resolve_input(input)?;
    let theme = current_theme();
    let Some((event, _)) = resolved else {
        eprintln!("{}", theme.error_text("No longest play found in input"));
        return Ok(false);
    };

    let scale = scale.unwrap_or(config.export.scale);
    match target {
        FrameTarget::Single { at, output } => {
            let svg = render_svg(&event, at, scale, &theme.field);
            write_output(output, &svg)?;
        }
        FrameTarget::Sequence { dir, fps } => {
            let count = write_sequence(&event, dir, fps, scale, &theme.field)?;
            info!(count, dir = %dir.display(), "wrote frame sequence");
            eprintln!(
                "{}",
                theme.success_text(&format!("Wrote {} frames to {}", count, dir.display()))
            );
        }
    }
    Ok(true)
}

/// One frame as an SVG document.
pub fn render_svg(event: &PlayEvent, t: f64, scale: f64, palette: &FieldPalette) -> String {
    let geometry = FieldGeometry::default();
    let mut surface = SvgSurface::new(&geometry, scale);
    render_with_palette(&mut surface, &geometry, event, t, palette);
    surface.into_svg()
}

fn write_output(output: &Path, svg: &str) -> Result<()> {
    if output.as_os_str() == "-" {
        let mut stdout = io::stdout().lock();
        stdout.write_all(svg.as_bytes())?;
        stdout.flush()?;
        return Ok(());
    }
    fs::write(output, svg).with_context(|| format!("Failed to write {}", output.display()))
}

/// Drive one scheduler run and write `frame_NNNN.svg` for every tick.
fn write_sequence(event: &PlayEvent, dir: &Path, fps: u32, scale: f64, palette: &FieldPalette) -> Result<usize> {
    fs::create_dir_all(dir).with_context(|| format!("Failed to create {}", dir.display()))?;

    let mut scheduler = AnimationScheduler::new();
    let origin = Instant::now();
    let run = scheduler.start(origin);

    let step = Duration::from_secs(1) / fps.max(1);
    let mut tick = 0u32;
    let clock = move || {
        let now = origin + step * tick;
        tick += 1;
        Some(now)
    };

    let mut failure = None;
    let mut index = 0usize;
    scheduler.drive(run, clock, |t| {
        if failure.is_some() {
            return;
        }
        let path = dir.join(format!("frame_{:04}.svg", index));
        if let Err(e) = fs::write(&path, render_svg(event, t, scale, palette)) {
            failure = Some(anyhow::Error::new(e).context(format!("Failed to write {}", path.display())));
        }
        index += 1;
    });

    match failure {
        Some(e) => Err(e),
        None => Ok(index),
    }
}
