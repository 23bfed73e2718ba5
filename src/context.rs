use crate::config::{self, AppPaths, ResolvedSettings, Settings};
use crate::error::AppResult;
use crate::org::OrganizationsClient;
use crate::output::Output;
use crate::profile::FileColorStore;

#[derive(Debug)]
pub struct AppContext {
    pub paths: AppPaths,
    pub settings: ResolvedSettings,
    pub output: Output,
}

impl AppContext {
    pub fn bootstrap(overrides: Settings, json: bool) -> AppResult<Self> {
        let paths = AppPaths::discover()?;
        let settings = config::load_settings(&paths)?.resolve(overrides);
        let output = Output::new(json);

        Ok(Self {
            paths,
            settings,
            output,
        })
    }

    pub async fn organizations_client(&self) -> OrganizationsClient {
        OrganizationsClient::connect(&self.settings.region, self.settings.aws_profile.as_deref())
            .await
    }

    pub fn color_store(&self) -> FileColorStore {
        FileColorStore::new(&self.settings.color_settings)
    }
}
