use std::{
    io::{BufWriter, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use tracing::Level;

use skills_promo::{Evaluator, FrameIndex, FrameRange, Promo, PromoConfig};

#[derive(Parser, Debug)]
#[command(name = "skills-promo", version)]
struct Cli {
    /// Log more (repeat for trace output).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the scene windows in frames.
    Timeline(ConfigArgs),
    /// Print one evaluated frame as JSON.
    Frame(FrameArgs),
    /// Print evaluated frames as JSON lines.
    Frames(FramesArgs),
}

#[derive(Args, Debug)]
struct ConfigArgs {
    /// Promo config JSON. Defaults to the built-in promo.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct FrameArgs {
    #[command(flatten)]
    config: ConfigArgs,

    /// Frame index (0-based).
    #[arg(long)]
    frame: u64,
}

#[derive(Args, Debug)]
struct FramesArgs {
    #[command(flatten)]
    config: ConfigArgs,

    /// First frame (inclusive).
    #[arg(long, default_value_t = 0)]
    from: u64,

    /// Last frame (exclusive). Defaults to the end of the promo.
    #[arg(long)]
    to: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match cli.cmd {
        Command::Timeline(args) => cmd_timeline(args),
        Command::Frame(args) => cmd_frame(args),
        Command::Frames(args) => cmd_frames(args),
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .with_target(false)
        .init();
}

fn read_config(path: &Path) -> anyhow::Result<PromoConfig> {
    PromoConfig::from_path(path).with_context(|| format!("load promo config '{}'", path.display()))
}

fn load_promo(args: &ConfigArgs) -> anyhow::Result<Promo> {
    let config = match &args.config {
        Some(path) => read_config(path)?,
        None => PromoConfig::default(),
    };
    Promo::new(config).context("invalid promo config")
}

fn cmd_timeline(args: ConfigArgs) -> anyhow::Result<()> {
    let promo = load_promo(&args)?;
    let fps = promo.fps();
    let mut out = BufWriter::new(std::io::stdout().lock());
    writeln!(
        out,
        "{} frames at {} fps ({:.2}s)",
        promo.duration().0,
        fps.as_f64(),
        fps.frames_to_secs(promo.duration().0)
    )?;
    for w in promo.schedule().windows() {
        writeln!(
            out,
            "{:<20} {:>5}..{:<5} premount {}",
            w.scene.as_str(),
            w.range.start.0,
            w.range.end.0,
            w.premount_frames
        )?;
    }
    out.flush()?;
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let promo = load_promo(&args.config)?;
    let frame = Evaluator::eval_frame(&promo, FrameIndex(args.frame))
        .with_context(|| format!("evaluate frame {}", args.frame))?;

    let mut out = BufWriter::new(std::io::stdout().lock());
    serde_json::to_writer_pretty(&mut out, &frame).context("write frame JSON")?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}

fn cmd_frames(args: FramesArgs) -> anyhow::Result<()> {
    let promo = load_promo(&args.config)?;
    let end = args.to.unwrap_or(promo.duration().0);
    let range = FrameRange::new(FrameIndex(args.from), FrameIndex(end))
        .with_context(|| format!("frame range {}..{end}", args.from))?;

    let mut out = BufWriter::new(std::io::stdout().lock());
    for f in range.frames() {
        let frame = Evaluator::eval_frame(&promo, f)
            .with_context(|| format!("evaluate frame {}", f.0))?;
        serde_json::to_writer(&mut out, &frame).context("write frame JSON")?;
        writeln!(out)?;
    }
    out.flush()?;
    Ok(())
}
