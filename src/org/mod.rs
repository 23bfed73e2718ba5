pub mod client;
pub mod models;

pub use client::OrganizationsClient;
pub use models::AccountInfo;

use tracing::info;

use crate::error::AppResult;
use crate::profile::{ColorRuleSet, ColorStore, Generator};

/// Lists the accounts profiles are generated for.
#[allow(async_fn_in_trait)]
pub trait AccountSource {
    /// Returns active accounts only, in stable listing order.
    async fn list_active_accounts(&self) -> AppResult<Vec<AccountInfo>>;
}

/// Fetches every active account, loads color rules and derives profiles.
///
/// Nothing is returned unless all steps succeed.
pub async fn build_generator<A, C>(accounts: &A, colors: &C) -> AppResult<Generator>
where
    A: AccountSource,
    C: ColorStore,
{
    let accounts = accounts.list_active_accounts().await?;
    let rules = ColorRuleSet::load(colors)?;

    let mut generator = Generator::new(rules);
    for account in &accounts {
        generator.generate_profiles(&account.id, &account.name);
    }

    info!(
        accounts = accounts.len(),
        profiles = generator.profiles().len(),
        "generated profiles"
    );
    Ok(generator)
}
