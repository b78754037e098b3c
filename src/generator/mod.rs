pub mod clash;
pub mod yaml;

// Re-export the converters
pub use clash::{assemble, surge_to_clash, surge_to_clash_with, terminal_rules};
pub use yaml::clash::ClashYamlOutput;
