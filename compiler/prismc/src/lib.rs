//! Prism compiler driver.
//!
//! Ties the phases together for a whole compilation:
//!
//! ```text
//! discover → manifests → read → parse (parallel) → register → prereqs
//!          → resolve → validate
//! ```
//!
//! Parsing is the only parallel phase. Everything after it runs
//! sequentially over data in unit order, so the output does not depend on
//! thread scheduling.
//!
//! # Tracing
//!
//! The `prism` binary installs a subscriber when `RUST_LOG` is set:
//! - `RUST_LOG=prismc=debug`: phase boundaries and counts
//! - `RUST_LOG=prism_parse=trace`: every declaration as it is parsed

pub mod commands;
mod discover;
mod driver;
mod error;
pub mod export;
mod manifest;
mod options;
mod tracing_setup;

pub use discover::{discover, Discovered, FoundFile};
pub use driver::{compile, CompileOutput};
pub use error::CompileError;
pub use options::{parse_compile_options, CompileOptions, EmitKind};
pub use tracing_setup::init_tracing;

/// File extension of declaration units.
pub const UNIT_EXTENSION: &str = "pdl";

/// File extension of parcel manifests.
pub const MANIFEST_EXTENSION: &str = "parcel";
