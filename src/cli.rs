use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};

#[derive(Debug, Parser)]
#[command(
    name = "aws-prof",
    version,
    about = "Generate AWS profiles for Extend Switch Roles and ~/.aws/config",
    long_about = "Generates AWS profile configurations for:\n\
- the AWS Extend Switch Roles browser extension\n\
- the ~/.aws/config file\n\n\
Account information is fetched from AWS Organizations."
)]
pub struct Cli {
    #[command(flatten)]
    pub generate: GenerateArgs,
    #[arg(long, help = "Role session name for AWS config [default: user_name]")]
    pub role_session_name: Option<String>,
    #[arg(long, help = "Color rule file [default: color-setting.ini]")]
    pub color_settings: Option<PathBuf>,
    #[arg(long, help = "Region for the Organizations API [default: ap-northeast-1]")]
    pub region: Option<String>,
    #[arg(long, help = "Named AWS profile used to call Organizations")]
    pub aws_profile: Option<String>,
    #[arg(long, global = true, help = "Emit JSON output")]
    pub json: bool,
    #[arg(short = 'v', long, global = true, action = ArgAction::Count, help = "Verbose logging")]
    pub verbose: u8,
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    #[command(about = "Print the version number")]
    Version,
}

#[derive(Debug, Args)]
pub struct GenerateArgs {
    #[arg(long, value_enum, help = "Output format; both files are written when omitted")]
    pub format: Option<Format>,
    #[arg(long, requires = "format", help = "Output file path")]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Extension,
    Config,
}

impl Format {
    pub const ALL: [Format; 2] = [Format::Extension, Format::Config];

    pub fn name(self) -> &'static str {
        match self {
            Format::Extension => "extension",
            Format::Config => "config",
        }
    }

    pub fn default_file_name(self) -> &'static str {
        match self {
            Format::Extension => "extension.ini",
            Format::Config => "config.ini",
        }
    }
}
