//! colorstrip - render a color map strip to PNG
//!
//! Builds a color map from explicit bounds or from the value range of a grid
//! file, rasterizes the gradient strip and writes it to disk.

use std::time::Instant;
use tracing::{debug, error, info};

use colorstrip::config::RangeSource;
use colorstrip::grid::GridFile;
use colorstrip::render::{GradientStrip, OffscreenWidget};
use colorstrip::{init_tracing, log_error, log_operation_end, log_operation_start};
use colorstrip::{ColorMap, ColorStripError, Config, Result};

fn main() -> Result<()> {
    // Load configuration
    let plan = Config::load().map_err(|e| {
        eprintln!("Configuration error: {}", e);
        e
    })?;

    init_tracing(&plan.config.log_level);
    info!("Starting colorstrip v{}", env!("CARGO_PKG_VERSION"));

    // Validate configuration
    plan.config.validate().map_err(|e| {
        error!("Invalid configuration: {}", e);
        e
    })?;

    let style = &plan.config.style;
    let map = match &plan.range {
        RangeSource::Bounds { min, max } => ColorMap::from_bounds(style, *min, *max),
        RangeSource::Grid(path) => {
            info!("Loading grid file: {:?}", path);
            let grid = GridFile::load(path).map_err(|e| {
                log_error(&e, "grid_load");
                e
            })?;
            ColorMap::from_grid(style, Some(&grid))?
        }
    };

    info!(
        kind = %style.kind,
        points = map.len(),
        min = ?map.min_value(),
        max = ?map.max_value(),
        "Color map ready"
    );
    debug!("{}", map);

    let start = Instant::now();
    log_operation_start("render_strip", Some(&format!("{:?}", plan.output)));

    let (width, height) = strip_size(plan.config.strip.width, plan.config.strip.height)?;
    let mut strip = GradientStrip::new(OffscreenWidget::new(width, height));
    let surface = strip
        .refresh(Some(&map))
        .ok_or_else(|| ColorStripError::Config {
            message: format!("Cannot render a {}x{} strip", width, height),
        })?;
    surface.save_png(&plan.output)?;

    log_operation_end("render_strip", start, true);
    info!("Wrote {:?}", plan.output);
    Ok(())
}

/// Convert the configured strip size to widget coordinates
fn strip_size(width: u32, height: u32) -> Result<(i32, i32)> {
    let convert = |v: u32| {
        i32::try_from(v).map_err(|_| ColorStripError::Config {
            message: format!("Strip size {}x{} does not fit a widget", width, height),
        })
    };
    Ok((convert(width)?, convert(height)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_size() {
        assert_eq!(strip_size(300, 20).unwrap(), (300, 20));
        assert!(strip_size(u32::MAX, 20).is_err());
        assert!(strip_size(300, i32::MAX as u32 + 1).is_err());
    }
}
