use aws_config::{BehaviorVersion, Region};
use aws_sdk_organizations::Client;
use aws_sdk_organizations::error::DisplayErrorContext;
use aws_sdk_organizations::types::{Account, AccountStatus};
use tracing::{debug, warn};

use crate::error::{AppError, AppResult};
use crate::profile::sanitize_account_name;

use super::AccountSource;
use super::models::AccountInfo;

#[derive(Debug, Clone)]
pub struct OrganizationsClient {
    inner: Client,
}

impl OrganizationsClient {
    /// Builds a client from the default credential chain, optionally pinned to
    /// a named shared-config profile.
    pub async fn connect(region: &str, aws_profile: Option<&str>) -> Self {
        let mut loader =
            aws_config::defaults(BehaviorVersion::latest()).region(Region::new(region.to_string()));
        if let Some(profile) = aws_profile {
            loader = loader.profile_name(profile);
        }

        let config = loader.load().await;
        debug!(region, aws_profile, "configured organizations client");

        Self {
            inner: Client::new(&config),
        }
    }
}

impl AccountSource for OrganizationsClient {
    async fn list_active_accounts(&self) -> AppResult<Vec<AccountInfo>> {
        let mut accounts = Vec::new();
        let mut next_token: Option<String> = None;
        let mut page = 0_usize;

        loop {
            let output = self
                .inner
                .list_accounts()
                .set_next_token(next_token.take())
                .send()
                .await
                .map_err(|err| {
                    AppError::Aws(format!(
                        "failed to list accounts: {}",
                        DisplayErrorContext(&err)
                    ))
                })?;

            page += 1;
            let listed = output.accounts();
            debug!(page, listed = listed.len(), "fetched organization accounts page");
            accounts.extend(listed.iter().filter_map(active_account));

            match output.next_token() {
                Some(token) => next_token = Some(token.to_string()),
                None => break,
            }
        }

        Ok(accounts)
    }
}

fn active_account(account: &Account) -> Option<AccountInfo> {
    if account.status() != Some(&AccountStatus::Active) {
        return None;
    }

    let Some(id) = account.id() else {
        warn!(name = account.name(), "skipping active account without an id");
        return None;
    };

    Some(AccountInfo::new(
        id,
        sanitize_account_name(account.name().unwrap_or_default()),
    ))
}
