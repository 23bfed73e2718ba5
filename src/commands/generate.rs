use std::path::Path;

use serde::Serialize;

use crate::cli::{Format, GenerateArgs};
use crate::config::expand_home;
use crate::context::AppContext;
use crate::error::AppResult;
use crate::org;
use crate::output::write_artifact;
use crate::profile::Generator;

#[derive(Debug, Serialize)]
pub struct GenerateReport {
    pub files: Vec<String>,
    pub accounts: usize,
    pub profiles: usize,
    pub role_session_name: String,
}

pub async fn run(ctx: &AppContext, args: GenerateArgs) -> AppResult<()> {
    let client = ctx.organizations_client().await;
    let mut generator = org::build_generator(&client, &ctx.color_store()).await?;
    generator.set_role_session_name(ctx.settings.role_session_name.as_str());

    match (args.format, args.output) {
        (None, _) => {
            let files = Format::ALL
                .into_iter()
                .map(|format| (format, Path::new(format.default_file_name())))
                .collect::<Vec<_>>();
            write_files(ctx, &generator, &files)
        }
        (Some(format), Some(path)) => {
            let path = expand_home(&path);
            write_files(ctx, &generator, &[(format, path.as_path())])
        }
        (Some(format), None) => ctx
            .output
            .content(format.name(), &render(&generator, format)),
    }
}

pub fn render(generator: &Generator, format: Format) -> String {
    match format {
        Format::Extension => generator.render_extension_format(),
        Format::Config => generator.render_config_format(),
    }
}

fn write_files(
    ctx: &AppContext,
    generator: &Generator,
    files: &[(Format, &Path)],
) -> AppResult<()> {
    let mut written = Vec::with_capacity(files.len());
    for (format, path) in files {
        write_artifact(path, &render(generator, *format))?;
        written.push(path.display().to_string());
    }

    let text = format!("Generated {}", written.join(" and "));
    let report = GenerateReport {
        files: written,
        accounts: generator.account_count(),
        profiles: generator.profiles().len(),
        role_session_name: generator.role_session_name().to_string(),
    };
    ctx.output.emit(&text, &report)
}
