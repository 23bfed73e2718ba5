use serde::Serialize;

use crate::error::AppResult;
use crate::output::Output;

#[derive(Debug, Serialize)]
struct VersionInfo {
    name: &'static str,
    version: &'static str,
}

pub fn run(output: Output) -> AppResult<()> {
    let info = VersionInfo {
        name: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
    };
    output.emit(info.version, &info)
}
