//! CLI command implementations

pub mod generate;
pub mod stubs;

pub use generate::GenerateCommand;
pub use stubs::StubsArgs;
