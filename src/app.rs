use tracing::debug;

use crate::cli::{Cli, Command};
use crate::commands;
use crate::config::Settings;
use crate::context::AppContext;
use crate::error::AppResult;
use crate::output::Output;

pub async fn run(cli: Cli) -> AppResult<()> {
    let Cli {
        generate,
        role_session_name,
        color_settings,
        region,
        aws_profile,
        json,
        verbose: _,
        command,
    } = cli;

    if let Some(Command::Version) = command {
        return commands::version::run(Output::new(json));
    }

    let overrides = Settings {
        region,
        role_session_name,
        color_settings,
        aws_profile,
    };
    let ctx = AppContext::bootstrap(overrides, json)?;
    debug!(settings = ?ctx.settings, config_dir = %ctx.paths.config_dir().display(), "resolved settings");

    commands::generate::run(&ctx, generate).await
}
