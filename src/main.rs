use std::fs::File;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use fbtouch::Config;
use fbtouch::framebuffer::Framebuffer;
use fbtouch::input::EventReader;
use fbtouch::painter::Painter;

const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("FBTOUCH_GIT_HASH"),
    ")"
);

#[derive(Parser, Debug)]
#[command(name = "fbtouch")]
#[command(version = VERSION, about = "Show touchscreen events on the Linux framebuffer")]
struct Cli {
    /// Input event device to watch (e.g. /dev/input/event0)
    #[arg(value_name = "DEVICE")]
    device: PathBuf,

    /// Framebuffer device to draw on (default: /dev/fb0)
    #[arg(long, short = 'f', value_name = "PATH")]
    framebuffer: Option<PathBuf>,

    /// Configuration file (default: ~/.config/fbtouch/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = parse_cli();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    let fb_path = cli.framebuffer.unwrap_or(config.framebuffer.device);

    let device = File::open(&cli.device)
        .with_context(|| format!("Failed to open input device {}", cli.device.display()))?;
    log::info!("Reading touch events from {}", cli.device.display());

    let framebuffer = Framebuffer::open(&fb_path)
        .with_context(|| format!("Failed to set up framebuffer {}", fb_path.display()))?;

    let mut reader =
        EventReader::with_options(device, config.input.batch_size, config.input.read_retries);
    let mut painter = Painter::new(framebuffer);
    painter.clear();

    painter
        .run(&mut reader)
        .with_context(|| format!("Stopped reading {}", cli.device.display()))?;

    Ok(())
}

/// Parses arguments, exiting with status 1 on usage errors.
fn parse_cli() -> Cli {
    match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if err.use_stderr() => {
            let _ = err.print();
            std::process::exit(1);
        }
        // --help and --version
        Err(err) => err.exit(),
    }
}
