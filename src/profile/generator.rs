use super::color::ColorRuleSet;

pub const DEFAULT_ROLE_SESSION_NAME: &str = "user_name";

/// Roles provisioned in every member account, in output order.
pub const SWITCH_ROLES: [&str; 2] = ["AdminSwitchRole", "ReadOnlySwitchRole"];

const ROLE_QUALIFIER: &str = "SwitchRole";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub name: String,
    pub role_arn: String,
    pub color: String,
}

/// Accumulates switch-role profiles for a run. Profiles are only ever appended.
#[derive(Debug, Clone)]
pub struct Generator {
    rules: ColorRuleSet,
    profiles: Vec<Profile>,
    accounts: usize,
    role_session_name: String,
}

impl Generator {
    pub fn new(rules: ColorRuleSet) -> Self {
        Self {
            rules,
            profiles: Vec::new(),
            accounts: 0,
            role_session_name: DEFAULT_ROLE_SESSION_NAME.to_string(),
        }
    }

    pub fn add_profile(&mut self, name: impl Into<String>, role_arn: impl Into<String>) {
        let name = name.into();
        let color = self.rules.resolve(&name).to_string();

        self.profiles.push(Profile {
            name,
            role_arn: role_arn.into(),
            color,
        });
    }

    /// Appends the admin and read-only profiles for one account.
    pub fn generate_profiles(&mut self, account_id: &str, env_name: &str) {
        for role in SWITCH_ROLES {
            let profile_name = format!("{env_name}-{}", role_suffix(role));
            self.add_profile(profile_name, role_arn(account_id, role));
        }
        self.accounts += 1;
    }

    pub fn set_role_session_name(&mut self, value: impl Into<String>) {
        self.role_session_name = value.into();
    }

    pub fn role_session_name(&self) -> &str {
        &self.role_session_name
    }

    pub fn profiles(&self) -> &[Profile] {
        &self.profiles
    }

    /// Number of accounts passed to `generate_profiles`.
    pub fn account_count(&self) -> usize {
        self.accounts
    }
}

pub fn role_suffix(role: &str) -> String {
    role.replacen(ROLE_QUALIFIER, "", 1).to_lowercase()
}

pub fn role_arn(account_id: &str, role: &str) -> String {
    format!("arn:aws:iam::{account_id}:role/{role}")
}
