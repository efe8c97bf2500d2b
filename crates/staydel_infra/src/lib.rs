//! Real-filesystem implementations of the infra seams: one small service per
//! concern, plus the composite [`StayDelInfra`] that the binary wires into
//! the services.

mod clock;
mod env;
mod fs;
mod fs_create_dirs;
mod fs_meta;
mod fs_read;
mod fs_read_dir;
mod fs_remove;
mod fs_write;
mod report;
mod staydel_infra;
mod walker;

pub use fs::StayDelFS;
pub use staydel_infra::StayDelInfra;
