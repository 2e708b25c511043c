//! VELA Section Registry
//!
//! The authoritative set of known sections and their display metadata.
//! Built once at startup, consulted by lookup only.

mod descriptor;
mod registry;

pub use descriptor::SectionDescriptor;
pub use registry::SectionRegistry;
