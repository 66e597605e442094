//! Typed wrappers over the panel API, one module per backend action family.

pub mod common_query;
pub mod force_off;

pub use common_query::{software_info, SoftwareData, SoftwareInfo, SoftwareSource};
pub use force_off::{force_offline, ForceOfflineRequest};
