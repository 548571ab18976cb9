use crate::commands;
use crate::log_debug;
use crate::ui;
use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand, crate_version};
use std::path::PathBuf;

const LOG_FILE: &str = "mailmuse-debug.log";

/// CLI structure defining the available commands and global arguments
#[derive(Parser)]
#[command(
    author,
    version = crate_version!(),
    about = "Mailmuse: AI-powered email campaign studio",
    long_about = "Mailmuse turns a free-text prompt into a complete email marketing campaign - subject line, preview text, HTML body, and a generated hero image - and ships a streaming chat assistant for marketing questions.",
    disable_version_flag = true,
    styles = get_styles(),
)]
pub struct Cli {
    /// Subcommands available for the CLI
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Log debug messages to a file
    #[arg(
        short = 'l',
        long = "log",
        global = true,
        help = "Log debug messages to a file"
    )]
    pub log: bool,

    /// Specify a custom log file path
    #[arg(
        long = "log-file",
        global = true,
        help = "Specify a custom log file path"
    )]
    pub log_file: Option<String>,

    /// Suppress non-essential output (spinners, waiting messages, etc.)
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        help = "Suppress non-essential output"
    )]
    pub quiet: bool,

    /// Display the version
    #[arg(
        short = 'v',
        long = "version",
        global = true,
        help = "Display the version"
    )]
    pub version: bool,
}

/// Enumeration of available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Launch the interactive studio (the default when no command is given)
    #[command(about = "Launch the interactive two-tab studio")]
    Studio,

    /// Generate a campaign from a prompt and write an HTML preview
    #[command(about = "Generate a campaign one-shot and write an HTML preview")]
    Generate {
        /// Free-text description of the campaign to generate
        #[arg(short, long, help = "Free-text description of the campaign")]
        prompt: String,

        /// Hero-image aspect ratio
        #[arg(
            short,
            long,
            default_value = "16:9",
            help = "Hero image aspect ratio: 16:9, 1:1, or 9:16"
        )]
        aspect_ratio: String,

        /// Where to write the HTML preview
        #[arg(
            short,
            long,
            default_value = "campaign.html",
            help = "Path for the HTML preview file"
        )]
        output: PathBuf,
    },

    /// Display the resolved configuration
    #[command(about = "Display the resolved configuration")]
    Config,
}

/// Define custom styles for Clap
fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Magenta.on_default().bold())
        .usage(AnsiColor::Cyan.on_default().bold())
        .literal(AnsiColor::Green.on_default().bold())
        .placeholder(AnsiColor::Yellow.on_default())
        .valid(AnsiColor::Blue.on_default().bold())
        .invalid(AnsiColor::Red.on_default().bold())
        .error(AnsiColor::Red.on_default().bold())
}

/// Parse the command-line arguments
pub fn parse_args() -> Cli {
    Cli::parse()
}

/// Main function to parse arguments and handle the command
pub async fn main() -> anyhow::Result<()> {
    let cli = parse_args();

    if cli.version {
        ui::print_version(crate_version!());
        return Ok(());
    }

    if cli.log {
        crate::logger::enable_logging();
        let log_file = cli.log_file.as_deref().unwrap_or(LOG_FILE);
        crate::logger::set_log_file(log_file)?;

        // Honor the file config's verbosity before the key check happens
        if let Ok(config) = crate::config::Config::load_file() {
            crate::logger::set_verbose_logging(config.verbose_logging);
        }
    } else {
        crate::logger::disable_logging();
    }

    // Set quiet mode in the UI module
    if cli.quiet {
        crate::ui::set_quiet_mode(true);
    }

    log_debug!("Starting mailmuse {}", crate_version!());

    match cli.command {
        Some(Commands::Generate {
            prompt,
            aspect_ratio,
            output,
        }) => commands::handle_generate(&prompt, &aspect_ratio, &output).await,
        Some(Commands::Config) => commands::handle_config(),
        Some(Commands::Studio) | None => commands::handle_studio(),
    }
}
