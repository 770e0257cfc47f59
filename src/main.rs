mod app;
mod color;
mod config;
mod input;
mod messages;
mod options;
mod palette;
mod storage;
mod tui;

use anyhow::Context;
use clap::{Parser, Subcommand};
use options::{ColorMode, KeyValueStore};
use palette::Palette;
use rand::SeedableRng;
use rand::rngs::StdRng;

#[derive(Debug, Parser)]
#[command(name = "palettegen", version, about = "Gradient color palette generator")]
struct Cli {
    /// Override config file path.
    #[arg(long)]
    config: Option<std::path::PathBuf>,

    /// Keep options in memory only for this run.
    #[arg(long, global = true)]
    ephemeral: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the interactive palette editor (default).
    Tui,
    /// Print a palette between two random colors (headless).
    Generate {
        /// Number of colors (5-12).
        #[arg(short, long)]
        count: Option<usize>,
        /// Seed the random generator for a reproducible palette.
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long)]
        json: bool,
    },
    /// Print the gradient between two given colors (headless).
    Blend {
        first: String,
        last: String,
        /// Number of colors (5-12).
        #[arg(short, long)]
        count: Option<usize>,
        #[arg(long)]
        json: bool,
    },
    /// Show or change stored options.
    Options {
        #[command(subcommand)]
        cmd: Option<OptionsCommand>,
    },
    /// Print the UI messages for a language.
    Messages {
        /// Language code; defaults to the stored option.
        #[arg(long)]
        language: Option<String>,
    },
}

#[derive(Debug, Subcommand)]
enum OptionsCommand {
    /// Print stored options as JSON (default).
    Show,
    /// Set the color mode.
    Mode {
        #[arg(value_enum)]
        mode: ColorMode,
    },
    /// Set the UI language.
    Language { code: String },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let cfg = config::load(cli.config.as_deref()).context("load config")?;
    let command = cli.command.unwrap_or(Command::Tui);

    init_logging(&cfg, matches!(command, Command::Tui))?;

    match command {
        Command::Tui => {
            let store = open_store(&cfg, cli.ephemeral)?;
            let mut terminal = tui::TerminalGuard::enter(cfg.input.mouse).context("init terminal")?;
            let mut app = app::App::new(cfg, store)?;
            app.run(terminal.terminal_mut()).await?;
        }
        Command::Generate { count, seed, json } => {
            let mut palette = Palette::new(resolve_count(&cfg, count));
            match seed {
                Some(seed) => palette.seed_random(&mut StdRng::seed_from_u64(seed))?,
                None => palette.seed_random(&mut rand::rng())?,
            }
            print_palette(&palette, json)?;
        }
        Command::Blend {
            first,
            last,
            count,
            json,
        } => {
            let mut palette = Palette::new(resolve_count(&cfg, count));
            palette.seed_defaults(&first, &last)?;
            print_palette(&palette, json)?;
        }
        Command::Options { cmd } => {
            let store = open_store(&cfg, cli.ephemeral)?;
            let mut opts = options::load_options(store.as_ref());
            match cmd.unwrap_or(OptionsCommand::Show) {
                OptionsCommand::Show => {
                    println!("{}", serde_json::to_string_pretty(&opts)?);
                }
                OptionsCommand::Mode { mode } => {
                    opts.color_mode = mode;
                    options::save_options(store.as_ref(), &opts).context("save options")?;
                    println!("Color mode set to {}.", mode.as_str());
                }
                OptionsCommand::Language { code } => {
                    if messages::get_messages(messages::MessageCatalog::builtin(), &code).is_none() {
                        tracing::warn!("no messages for language {code:?}; the UI will use English");
                    }
                    opts.language = code;
                    options::save_options(store.as_ref(), &opts).context("save options")?;
                    println!("Language set to {}.", opts.language);
                }
            }
        }
        Command::Messages { language } => {
            let language = match language {
                Some(l) => l,
                None => {
                    let store = open_store(&cfg, cli.ephemeral)?;
                    options::load_options(store.as_ref()).language
                }
            };
            let catalog = messages::MessageCatalog::builtin();
            let msgs = messages::get_messages(catalog, &language).with_context(|| {
                let known: Vec<&str> = catalog.languages().collect();
                format!("unknown language {language:?} (available: {})", known.join(", "))
            })?;
            for (key, text) in msgs {
                println!("{key:16} {text}");
            }
        }
    }

    Ok(())
}

/// The TUI owns the terminal, so its logs go to a file instead of stderr.
fn init_logging(cfg: &config::Config, to_file: bool) -> anyhow::Result<()> {
    if to_file {
        let path = cfg.log_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create dir {}", parent.display()))?;
        }
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .with_context(|| format!("open {}", path.display()))?;
        tracing_subscriber::fmt()
            .with_target(false)
            .with_level(true)
            .with_ansi(false)
            .with_writer(std::sync::Mutex::new(file))
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_target(false)
            .with_level(true)
            .with_writer(std::io::stderr)
            .init();
    }
    Ok(())
}

fn open_store(cfg: &config::Config, ephemeral: bool) -> anyhow::Result<Box<dyn KeyValueStore>> {
    let store = if ephemeral {
        storage::Storage::open_in_memory()?
    } else {
        storage::Storage::open(&cfg.storage_path())?
    };
    Ok(Box::new(store))
}

fn resolve_count(cfg: &config::Config, requested: Option<usize>) -> usize {
    let Some(n) = requested else {
        return cfg.initial_count();
    };
    let clamped = n.clamp(palette::MIN_COLORS, palette::MAX_COLORS);
    if clamped != n {
        tracing::warn!(
            "color count {n} is outside {}-{}, using {clamped}",
            palette::MIN_COLORS,
            palette::MAX_COLORS
        );
    }
    clamped
}

fn print_palette(palette: &Palette, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(palette.colors())?);
        return Ok(());
    }
    for swatch in palette.colors() {
        let [r, g, b] = swatch.rgb();
        println!("{:02}. {}  rgb({r}, {g}, {b})", swatch.id, swatch.hex());
    }
    Ok(())
}
