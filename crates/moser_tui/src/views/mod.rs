pub mod rulesets;
pub mod status;

pub use rulesets::RulesetListWidget;
pub use status::StatusWidget;
