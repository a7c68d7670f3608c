use clap::{Parser, ValueEnum};
use log::LevelFilter;
use roomtracer::constants::{WINDOW_HEIGHT, WINDOW_WIDTH};
use std::path::PathBuf;

#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "roomtracer")]
#[command(about = "Recursive ray tracer for spheres in a room")]
pub struct Args {
    /// Image width in pixels
    #[arg(long, default_value_t = WINDOW_WIDTH as u32)]
    pub width: u32,

    /// Image height in pixels
    #[arg(long, default_value_t = WINDOW_HEIGHT as u32)]
    pub height: u32,

    /// Maximum number of mirror bounces per primary ray [default: 10]
    #[arg(long, short = 'b')]
    pub bounces: Option<u32>,

    /// Distance from the eye to the screen plane [default: 2000]
    #[arg(long)]
    pub eye_distance: Option<f64>,

    /// Trace one pixel per NxN block (preview speed-up)
    #[arg(long, short = 's', default_value_t = 1)]
    pub stride: u32,

    /// YAML scene description; the built-in scene is used when omitted
    #[arg(long)]
    pub scene: Option<PathBuf>,

    /// Write a PNG instead of opening a window
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[arg(long, default_value = "info")]
    pub log_level: LogLevel,
}
