// src/lib.rs

pub mod group;
pub mod listener;
pub mod result;
pub mod sanitize;
pub mod xml_output;

pub use group::{Group, GroupMetadata, GroupStack};
pub use listener::{JUnitListener, RunListener, DEFAULT_OUTPUT_DIR};
pub use xml_output::{write_group_file, write_group_report};
pub use result::{ExampleResult, FailureDetail, Status};
pub use sanitize::{cdata, sanitize};
