use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;

use sitecheck::{ValidationConfig, ValidationRun};

#[derive(Parser)]
#[command(
    name = "sitecheck",
    version,
    about = "Structural validation gate for HTML pages, JSON data, and inline scripts"
)]
struct Cli {
    /// Project root to validate [default: parent of the executable's directory]
    #[arg(long)]
    root: Option<PathBuf>,

    /// Increase diagnostic logging (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Show project information
    #[arg(long)]
    about: bool,
}

/// Exit status when the run could not complete (as opposed to failing checks).
const EXIT_FAULT: i32 = 2;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if cli.about {
        print_about();
        return;
    }

    match run(cli.root) {
        Ok(run) => {
            if let Err(e) = sitecheck::report::print(&run) {
                eprintln!("error: cannot write report: {e}");
                std::process::exit(EXIT_FAULT);
            }
            std::process::exit(run.exit_code());
        }
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(EXIT_FAULT);
        }
    }
}

fn run(root: Option<PathBuf>) -> sitecheck::Result<ValidationRun> {
    let root = match root {
        Some(root) => root,
        None => sitecheck::default_root()?,
    };
    log::debug!("project root: {}", root.display());
    sitecheck::validate(&ValidationConfig::for_root(root))
}

/// Configure the logger from the command line only; the environment is ignored.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .init();
}

fn print_about() {
    println!(
        "sitecheck: structural validation for static sites\n\
         ├─ version:    {}\n\
         └─ licence:    {} https://opensource.org/licenses/{}",
        env!("CARGO_PKG_VERSION"),
        env!("CARGO_PKG_LICENSE"),
        env!("CARGO_PKG_LICENSE"),
    );
}
