pub mod cli;
pub mod confirmation;
pub mod error;
pub mod file_updater;
pub mod output;
pub mod patterns;

use crate::cli::Args;
use crate::error::Result;
use crate::file_updater::{update_file_version, UpdateReport};
use crate::patterns::VersionPatterns;

pub struct UpdateApplication {
    args: Args,
}

impl UpdateApplication {
    pub fn new(args: Args) -> Self {
        Self { args }
    }

    pub async fn run(&self) -> Result<UpdateReport> {
        let patterns = VersionPatterns::new()?;

        tracing::debug!(
            "Updating {:?} to version {:?}",
            self.args.file_path,
            self.args.version
        );

        update_file_version(&self.args.file_path, &self.args.version, &patterns).await
    }
}

/// Builds the application from the process arguments, exiting on usage errors.
pub fn create_update_application() -> UpdateApplication {
    UpdateApplication::new(Args::parse())
}
