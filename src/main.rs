use clap::{Parser, ValueEnum};
use liquid_glass::{compute_displacement_with, encode_as_image, GlassParams, LightSource};
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

/// Renders a liquid-glass displacement map for inspection.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Surface width in pixels
    #[arg(value_name = "WIDTH")]
    width: i32,

    /// Surface height in pixels
    #[arg(value_name = "HEIGHT")]
    height: i32,

    /// Output PNG path
    #[arg(value_name = "OUTPUT", default_value = "displacement.png")]
    output: PathBuf,

    /// Print the data URI to stdout instead of writing a file
    #[arg(long)]
    data_uri: bool,

    /// Light direction in degrees (0 = right, clockwise)
    #[arg(long, default_value_t = -135.0)]
    light_angle: f32,

    /// Refraction strength at the lens rim
    #[arg(long, default_value_t = liquid_glass::displacement::DEFAULT_REFRACTION_STRENGTH)]
    refraction: f32,

    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Pretty)]
    log_format: LogFormat,
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Error => write!(f, "error"),
            LogLevel::Warn => write!(f, "warn"),
            LogLevel::Info => write!(f, "info"),
            LogLevel::Debug => write!(f, "debug"),
            LogLevel::Trace => write!(f, "trace"),
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug)]
enum LogFormat {
    Pretty,
    Json,
}

fn main() {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.log_level.to_string()));
    match cli.log_format {
        LogFormat::Pretty => fmt().with_env_filter(filter).init(),
        LogFormat::Json => fmt().with_env_filter(filter).json().init(),
    }

    let params = GlassParams {
        light: LightSource {
            angle_deg: cli.light_angle,
        },
        refraction_strength: cli.refraction,
        ..GlassParams::default()
    };

    let map = compute_displacement_with(cli.width, cli.height, &params);
    if map.is_empty() {
        error!(
            width = cli.width,
            height = cli.height,
            "surface has no pixels, nothing to write"
        );
        std::process::exit(1);
    }

    if cli.data_uri {
        match encode_as_image(&map) {
            Ok(uri) => println!("{uri}"),
            Err(e) => {
                error!("encoding failed: {e}");
                std::process::exit(1);
            }
        }
        return;
    }

    if let Err(e) = write_png(&map, &cli.output) {
        error!("failed to write {}: {e}", cli.output.display());
        std::process::exit(1);
    }
    info!(
        path = %cli.output.display(),
        width = map.width(),
        height = map.height(),
        "wrote displacement map"
    );
}

fn write_png(
    map: &liquid_glass::DisplacementMap,
    path: &std::path::Path,
) -> Result<(), liquid_glass::GlassError> {
    let raw = liquid_glass::encode::pack_rgba(map);
    image::save_buffer(
        path,
        &raw,
        map.width(),
        map.height(),
        image::ExtendedColorType::Rgba8,
    )?;
    Ok(())
}
