use clap::{Parser, Subcommand};
use gyre_core::animation;
use gyre_core::canvas::Canvas;
use gyre_core::clock::ManualClock;
use gyre_core::config::{self, Config};
use gyre_core::control::{ControlCommand, SOCKET_PATH};
use gyre_core::input::PointerFeed;
use gyre_core::schedule::ManualScheduler;
use gyre_core::RingWidget;
use std::cell::RefCell;
use std::io::Write;
use std::os::unix::net::UnixStream;
use std::path::{Path, PathBuf};
use std::rc::Rc;

#[derive(Parser, Debug)]
#[command(name = "gyrectl", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
enum Commands {
    /// Start the ring animation
    Start,
    /// Stop the ring animation
    Stop,
    /// Start the animation if stopped, stop it otherwise
    Toggle,
    /// Write the default config file if none exists and print its path
    Init,
    /// Render the configured ring into a PNG without a display
    Snapshot {
        /// Output PNG file
        out: PathBuf,

        /// Number of frames to animate before capturing
        #[arg(short = 'f', long, default_value_t = 120)]
        frames: u32,

        /// Pointer movements to simulate before the first frame
        #[arg(short = 'm', long, default_value_t = 40)]
        moves: u32,

        /// Config file to use instead of the user's
        #[arg(short = 'c', long)]
        config: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Start => send_command(ControlCommand::Start),
        Commands::Stop => send_command(ControlCommand::Stop),
        Commands::Toggle => send_command(ControlCommand::Toggle),
        Commands::Init => {
            let path = config::write_default_config()?;
            println!("{}", path.display());
            Ok(())
        }
        Commands::Snapshot {
            out,
            frames,
            moves,
            config: path,
        } => {
            let config = match path {
                Some(path) => config::load_config_from(&path)?,
                None => config::load_or_default()?,
            };
            snapshot(&config, &out, frames, moves)
        }
    }
}

fn send_command(command: ControlCommand) -> anyhow::Result<()> {
    let mut stream = UnixStream::connect(SOCKET_PATH).map_err(|e| {
        anyhow::anyhow!(
            "Failed to connect to gyre at {}: {}. Is gyre running?",
            SOCKET_PATH,
            e
        )
    })?;

    writeln!(stream, "{}", command)?;
    Ok(())
}

/// Drives the real widget with a simulated clock, pointer and frame source,
/// then saves the canvas.
fn snapshot(config: &Config, out: &Path, frames: u32, moves: u32) -> anyhow::Result<()> {
    let mut canvas = Canvas::new(config.canvas.width, config.canvas.height)?;
    canvas.fill(&config.ring.background)?;

    let clock = ManualClock::default();
    let mut ring = RingWidget::new(canvas, clock.clone(), &config.ring)?;
    for arc in &config.arcs {
        ring.add_arc(arc.begin, arc.end, arc.color, arc.width)?;
    }
    let ring = Rc::new(RefCell::new(ring));

    let feed = PointerFeed::default();
    let scheduler = ManualScheduler::default();
    animation::start(&ring, &feed, &scheduler);

    for _ in 0..moves {
        feed.emit();
    }

    let step = ring.borrow().frame_interval_ms() + 1.0;
    for _ in 0..frames {
        clock.advance(step);
        if scheduler.run_frame() == 0 {
            anyhow::bail!("Animation halted after a drawing error");
        }
    }

    let mut ring = ring.borrow_mut();
    ring.stop();
    log::info!("Rendered {} frames, final speed {}", frames, ring.speed());

    let mut file = fs_err::File::create(out)?;
    ring.surface().write_png(&mut file)?;
    println!("{}", out.display());
    Ok(())
}
