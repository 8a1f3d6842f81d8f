use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing::Level;

#[derive(Parser, Debug)]
#[command(
    name = "zak64",
    about = "Zak McKracken and the Alien Mindbenders C64 tool",
    version,
    long_about = "Rebuilds the SCUMM room files (.LFL) from the two sides of the C64 release's disk 2."
)]
pub struct Cli {
    /// Set the logging level
    #[arg(short, long, value_enum, default_value = "info", global = true)]
    pub log_level: LogLevel,

    /// Shorthand for --log-level debug
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Effective log level after applying `--verbose`
    pub fn level(&self) -> Level {
        if self.verbose {
            Level::DEBUG
        } else {
            Level::from(self.log_level)
        }
    }
}

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => Self::TRACE,
            LogLevel::Debug => Self::DEBUG,
            LogLevel::Info => Self::INFO,
            LogLevel::Warn => Self::WARN,
            LogLevel::Error => Self::ERROR,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Extract .LFL files from .D64 image files
    LflExtract(ExtractArgs),

    /// List where each room is stored without writing anything
    Rooms(ImagePair),
}

#[derive(Args, Debug)]
pub struct ImagePair {
    /// Disk 2 - Side A
    #[arg(value_name = "DISK2_A_PATH")]
    pub side_a: PathBuf,

    /// Disk 2 - Side B
    #[arg(value_name = "DISK2_B_PATH")]
    pub side_b: PathBuf,
}

#[derive(Args, Debug)]
pub struct ExtractArgs {
    #[command(flatten)]
    pub images: ImagePair,

    /// XOR each byte with 0xFF (needed for ScummVM)
    #[arg(long, env = "ZAK64_XOR")]
    pub xor: bool,
}
