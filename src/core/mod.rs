pub mod detector;
pub mod resolver;
pub mod types;

pub use detector::{
    Detector, PlatformSignal, PreferenceRule, PreferenceTable, RuleCondition, detect,
};
pub use resolver::{ManagerRequest, ManagerSource, requested_manager, resolve_manager};
pub use types::{ExecutionResult, Operation};
