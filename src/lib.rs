// Electrical Load Monitoring - Core Library
// Exposes all modules for use in the CLI binary and tests

pub mod entities;
pub mod parser;
pub mod schema;
pub mod ui;

// Re-export commonly used types
pub use entities::{Appliance, ApplianceRegistry};
pub use parser::{parse_appliance_line, MenuChoice, RawAppliance};
pub use schema::{SchemaValidator, ValidationError, ValidationResult};
pub use ui::{run_ui, App};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
