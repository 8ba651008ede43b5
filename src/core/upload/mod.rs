//! Upload intake
//!
//! Uploaded images are grouped by the management number embedded in their
//! filenames, written to image storage, and turned into skeleton product rows
//! plus a work process ready to be started.

mod grouper;
mod intake;

pub use grouper::{
    management_number, SkipReason, SkippedFile, UploadGrouper, UploadGrouping, UploadedFile,
};
pub use intake::{UploadIntake, UploadOutcome, UploadRequest, UploadSummary};
