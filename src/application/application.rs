use snafu::Snafu;
use snafu::prelude::*;
use tracing::debug;
use tracing::info;
use tracing::warn;

use crate::application::RuntimeConfig;
use crate::application::RuntimeConfigError;
use crate::materializer::Materializer;
use crate::template::TemplateInsertError;
use crate::template::infrastructure_layout;

pub struct Application;

impl Application {
    pub async fn run() -> Result<(), ApplicationError> {
        let config = RuntimeConfig::detect().context(BasePathSnafu)?;
        debug!("Scaffolding into base directory: {}", config.base.display());

        let template = infrastructure_layout().context(TemplateSnafu)?;

        let report = Materializer::new(config.base).materialize(&template).await;

        if report.failures == 0 {
            info!(
                "Directory structure created successfully ({} directories, {} files)",
                report.directories_created, report.files_created
            );
        } else {
            warn!(
                "Directory structure created with {} failed entries ({} directories, {} files)",
                report.failures, report.directories_created, report.files_created
            );
        }

        Ok(())
    }
}

#[derive(Debug, Snafu)]
pub enum ApplicationError {
    #[snafu(display("Critical failure encountered while resolving the base path"))]
    BasePathError { source: RuntimeConfigError },
    #[snafu(display("Critical failure encountered while assembling the template tree"))]
    TemplateError { source: TemplateInsertError },
}
