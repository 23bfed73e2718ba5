use super::generator::Generator;

/// Region written into every generated profile.
pub const PROFILE_REGION: &str = "ap-northeast-1";
pub const CLI_OUTPUT_FORMAT: &str = "json";

const BLOCK_SEPARATOR: &str = "\n\n";

impl Generator {
    /// Renders profiles in the AWS Extend Switch Roles format.
    pub fn render_extension_format(&self) -> String {
        let blocks = self
            .profiles()
            .iter()
            .map(|profile| {
                format!(
                    "[profile {}]\nrole_arn = {}\nregion = {PROFILE_REGION}\ncolor = {}",
                    profile.name, profile.role_arn, profile.color
                )
            })
            .collect::<Vec<_>>();

        join_blocks(&blocks)
    }

    /// Renders a `~/.aws/config` body: a `[default]` source profile followed by
    /// one role-assumption profile per entry.
    pub fn render_config_format(&self) -> String {
        let mut blocks = vec![format!(
            "[default]\nregion = {PROFILE_REGION}\noutput = {CLI_OUTPUT_FORMAT}\nrole_session_name = {}",
            self.role_session_name()
        )];

        blocks.extend(self.profiles().iter().map(|profile| {
            format!(
                "[profile {}]\nsource_profile = default\nrole_arn = {}",
                profile.name, profile.role_arn
            )
        }));

        join_blocks(&blocks)
    }
}

fn join_blocks(blocks: &[String]) -> String {
    blocks.join(BLOCK_SEPARATOR).trim().to_string()
}
