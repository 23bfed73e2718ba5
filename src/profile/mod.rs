pub mod color;
pub mod color_store;
pub mod generator;
pub mod render;
pub mod sanitize;

pub use color::{ColorRule, ColorRuleSet, DEFAULT_COLOR};
pub use color_store::{ColorStore, FileColorStore};
pub use generator::{Generator, Profile};
pub use sanitize::sanitize_account_name;
