use clap::Parser;
use fateater_core::InspectOptions;
use fateater_filesystems::Fat16Session;
use std::path::PathBuf;

mod render;
mod repl;

use repl::Shell;

#[derive(Parser)]
#[command(name = "fat-eater")]
#[command(about = "Read-only FAT16 image inspector", long_about = None)]
struct Cli {
    /// Raw FAT16 image file
    image: PathBuf,
    /// JSON file with session options
    #[arg(long)]
    config: Option<PathBuf>,
    /// Report cd/cat targets that do not exist instead of ignoring them
    #[arg(long)]
    report_misses: bool,
    /// Print listings and the header as JSON
    #[arg(long)]
    json: bool,
    /// Run a command and exit instead of starting the shell (repeatable)
    #[arg(short = 'c', long = "command")]
    commands: Vec<String>,
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    let mut builder = env_logger::Builder::from_default_env();
    if std::env::var_os("RUST_LOG").is_none() {
        builder.filter_level(level);
    }
    builder.init();
}

fn load_options(cli: &Cli) -> anyhow::Result<InspectOptions> {
    let mut options = match &cli.config {
        Some(path) => InspectOptions::from_json_file(path)
            .map_err(|e| anyhow::anyhow!("Failed to load config {}: {}", path.display(), e))?,
        None => InspectOptions::default(),
    };
    if cli.report_misses {
        options.report_lookup_miss = true;
    }
    Ok(options)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let options = load_options(&cli)?;
    let session = Fat16Session::open(&cli.image, options)
        .map_err(|e| anyhow::anyhow!("Failed to open {}: {}", cli.image.display(), e))?;

    let stdout = std::io::stdout();
    let mut shell = Shell::new(session, stdout.lock(), cli.json);

    if cli.commands.is_empty() {
        let stdin = std::io::stdin();
        shell.run(stdin.lock())?;
    } else {
        for command in &cli.commands {
            if !shell.execute(command)? {
                break;
            }
        }
    }

    Ok(())
}
