use std::path::PathBuf;

use clap::ArgMatches;
use clap::parser::ValueSource;
use despeckle::morph::ScanBounds;
use despeckle::threshold::{ThresholdSource, TileOptions};
use despeckle::{Pipeline, PipelineConfig, PipelineResult};
use log::{Level, info};

/// One invocation: where to read, where to write, how to process.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub input: PathBuf,
    pub output: PathBuf,
    pub config: PipelineConfig,
}

impl RunOptions {
    pub fn execute(&self) -> PipelineResult<()> {
        let pipeline = Pipeline::new(self.config.clone());
        let result = pipeline.process_file(&self.input, &self.output)?;
        info!(
            "Wrote {} ({}x{})",
            self.output.display(),
            result.width(),
            result.height()
        );
        Ok(())
    }
}

/// Build the run from parsed arguments.
///
/// Fails with [`despeckle::PipelineError::UnknownPreset`] if the preset id
/// has no threshold.
pub fn parse_options(options: &ArgMatches) -> PipelineResult<RunOptions> {
    // presence of IMAGE_ID is enforced by the parser
    let id = options.get_one::<u32>("id").copied().unwrap_or(1);
    let dir = PathBuf::from(
        options
            .get_one::<String>("dir")
            .map(String::as_str)
            .unwrap_or("img"),
    );

    let input = options
        .get_one::<String>("input")
        .map(PathBuf::from)
        .unwrap_or_else(|| dir.join(format!("{}.jpg", id)));
    let output = options
        .get_one::<String>("output")
        .map(PathBuf::from)
        .unwrap_or_else(|| dir.join(format!("{}_new.jpg", id)));

    let mut config = PipelineConfig::for_preset(id)?;

    if let Some(&t) = options.get_one::<u16>("threshold") {
        info!("Using fixed threshold {}", t);
        config = config.with_threshold(ThresholdSource::Fixed(t));
    } else if options.get_flag("otsu") {
        info!("Using global Otsu threshold");
        config = config.with_threshold(ThresholdSource::GlobalOtsu);
    } else if options.get_flag("tiled-otsu") {
        let size = options.get_one::<u32>("tile-size").copied().unwrap_or(10);
        info!("Using per-tile Otsu thresholds, tile size {}", size);
        config = config.with_threshold(ThresholdSource::Tiled(TileOptions {
            tile_width: size,
            tile_height: size,
            ..TileOptions::default()
        }));
    }

    if options.value_source("symmetric") == Some(ValueSource::CommandLine) {
        info!("Using symmetric morphology scan bounds");
        config = config.with_scan_bounds(ScanBounds::Symmetric);
    }

    Ok(RunOptions {
        input,
        output,
        config,
    })
}

/// Set up logging options
pub fn setup_logger(options: &ArgMatches) {
    let log_level = if options.get_flag("debug") {
        Level::Debug
    } else if options.get_flag("trace") {
        Level::Trace
    } else if options.get_flag("warn") {
        Level::Warn
    } else if options.get_flag("info") {
        Level::Info
    } else {
        Level::Warn
    };

    if let Err(e) = simple_logger::init_with_level(log_level) {
        eprintln!("Could not initialize logger: {}", e);
        return;
    }

    info!("Initialized logger");
    info!("Log level :{}", log_level);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cmd_args::create_cmd_args;

    fn parse(args: &[&str]) -> RunOptions {
        let matches = create_cmd_args()
            .try_get_matches_from(args)
            .expect("valid arguments");
        parse_options(&matches).expect("known preset")
    }

    #[test]
    fn preset_paths_and_threshold() {
        let run = parse(&["despeckle", "4"]);
        assert_eq!(run.input, PathBuf::from("img/4.jpg"));
        assert_eq!(run.output, PathBuf::from("img/4_new.jpg"));
        assert_eq!(run.config.threshold, ThresholdSource::Fixed(200));
        assert_eq!(run.config.scan_bounds, ScanBounds::LowerMargin);
    }

    #[test]
    fn overrides() {
        let run = parse(&[
            "despeckle",
            "2",
            "--dir",
            "scans",
            "--output",
            "out.png",
            "--threshold",
            "128",
            "--symmetric",
        ]);
        assert_eq!(run.input, PathBuf::from("scans/2.jpg"));
        assert_eq!(run.output, PathBuf::from("out.png"));
        assert_eq!(run.config.threshold, ThresholdSource::Fixed(128));
        assert_eq!(run.config.scan_bounds, ScanBounds::Symmetric);
    }

    #[test]
    fn every_preset_keeps_its_threshold() {
        for id in 1..=5u32 {
            let id_arg = id.to_string();
            let run = parse(&["despeckle", id_arg.as_str()]);
            assert_eq!(
                run.config,
                PipelineConfig::for_preset(id).expect("preset")
            );
        }
    }

    #[test]
    fn tiled_otsu_tile_size() {
        let run = parse(&["despeckle", "1", "--tiled-otsu", "--tile-size", "16"]);
        match run.config.threshold {
            ThresholdSource::Tiled(opts) => {
                assert_eq!(opts.tile_width, 16);
                assert_eq!(opts.tile_height, 16);
                assert_eq!(opts.fixed, None);
            }
            other => panic!("unexpected threshold source {:?}", other),
        }
    }
}
