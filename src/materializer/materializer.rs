use std::path::{Path, PathBuf};

use compio::fs;
use compio::fs::File;
use hashlink::LinkedHashMap;
use snafu::{ResultExt, Snafu};
use tracing::{debug, error, info};

use crate::template::TemplateNode;

/// Walks a template tree and creates its entries under a base path.
///
/// Entries are created depth-first in template order, parent before children.
/// A failed entry is logged and counted but never stops the walk; a failed
/// directory additionally skips everything beneath it, since its children
/// cannot exist without it.
pub struct Materializer {
    base: PathBuf,
}

/// Counters for a single materialization run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MaterializeReport {
    pub directories_created: usize,
    pub files_created: usize,
    pub failures: usize,
}

impl Materializer {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    pub async fn materialize(&self, template: &TemplateNode) -> MaterializeReport {
        let mut report = MaterializeReport::default();

        match template.children() {
            Some(children) => {
                self.materialize_into(&self.base, children, &mut report)
                    .await;
            }
            None => debug!("Template root is a file entry, nothing to create"),
        }

        report
    }

    async fn materialize_into(
        &self,
        dir: &Path,
        children: &LinkedHashMap<String, TemplateNode>,
        report: &mut MaterializeReport,
    ) {
        for (name, node) in children {
            let full_path = dir.join(name);

            match node {
                TemplateNode::File => match Self::create_empty_file(&full_path).await {
                    Ok(()) => {
                        info!("Created file: {}", full_path.display());
                        report.files_created += 1;
                    }
                    Err(error) => {
                        error!("{error}");
                        report.failures += 1;
                    }
                },
                TemplateNode::Directory { children } => {
                    match Self::create_directory(&full_path).await {
                        Ok(()) => {
                            info!("Created directory: {}", full_path.display());
                            report.directories_created += 1;
                            Box::pin(self.materialize_into(&full_path, children, report)).await;
                        }
                        Err(error) => {
                            error!("{error}");
                            report.failures += 1;
                        }
                    }
                }
            }
        }
    }

    /// Creates the file empty, truncating anything already there.
    async fn create_empty_file(path: &Path) -> Result<(), EntryCreationError> {
        File::create(path).await.context(FileCreationSnafu {
            path: path.to_path_buf(),
        })?;
        Ok(())
    }

    /// Creates the directory along with any missing ancestors. Succeeds
    /// silently if it already exists.
    async fn create_directory(path: &Path) -> Result<(), EntryCreationError> {
        fs::create_dir_all(path).await.context(DirectoryCreationSnafu {
            path: path.to_path_buf(),
        })
    }
}

#[derive(Debug, Snafu)]
pub enum EntryCreationError {
    #[snafu(display("Failed to create file {}: {}", path.display(), source))]
    FileCreationError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[snafu(display("Failed to create directory {}: {}", path.display(), source))]
    DirectoryCreationError {
        path: PathBuf,
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::infrastructure_layout;
    use std::fs as std_fs;
    use tempfile::TempDir;

    fn layout() -> TemplateNode {
        infrastructure_layout().expect("Layout paths should assemble cleanly")
    }

    fn assert_empty_file(path: &Path) {
        let metadata = std_fs::metadata(path)
            .unwrap_or_else(|_| panic!("Expected {} to exist", path.display()));
        assert!(metadata.is_file(), "Expected {} to be a file", path.display());
        assert_eq!(metadata.len(), 0, "Expected {} to be empty", path.display());
    }

    fn entry_count(path: &Path) -> usize {
        std_fs::read_dir(path)
            .expect("Failed to read directory")
            .count()
    }

    #[compio::test]
    async fn materialize_creates_the_complete_scaffold() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let base = temp_dir.path();

        let report = Materializer::new(base).materialize(&layout()).await;

        assert_eq!(
            report,
            MaterializeReport {
                directories_created: 6,
                files_created: 15,
                failures: 0,
            }
        );

        assert_empty_file(&base.join("README.md"));
        assert_eq!(entry_count(base), 4);
        assert_eq!(entry_count(&base.join("terraform")), 6);
        for file in [
            "main.tf",
            "variables.tf",
            "outputs.tf",
            "providers.tf",
            "backend.tf",
            "terraform.tfvars.example",
        ] {
            assert_empty_file(&base.join("terraform").join(file));
        }

        assert_eq!(entry_count(&base.join("kubernetes")), 3);
        assert_empty_file(&base.join("kubernetes/nginx-ingress/values.yaml"));
        assert_empty_file(&base.join("kubernetes/cert-manager/values.yaml"));
        assert_empty_file(&base.join("kubernetes/cert-manager/cluster-issuer.yaml"));
        assert_empty_file(&base.join("kubernetes/keycloak/values.yaml"));
        assert_empty_file(&base.join("kubernetes/keycloak/ingress.yaml"));

        assert_eq!(entry_count(&base.join("scripts")), 3);
        for file in ["deploy.sh", "setup-terraform-state.sh", "cleanup.sh"] {
            assert_empty_file(&base.join("scripts").join(file));
        }
    }

    #[compio::test]
    async fn materialize_is_idempotent_and_retruncates_files() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let base = temp_dir.path();
        let materializer = Materializer::new(base);
        let template = layout();

        let first = materializer.materialize(&template).await;
        std_fs::write(base.join("README.md"), "drifted content")
            .expect("Failed to write to README.md");

        let second = materializer.materialize(&template).await;

        assert_eq!(first, second);
        assert_eq!(second.failures, 0);
        assert_empty_file(&base.join("README.md"));
    }

    #[compio::test]
    async fn a_file_squatting_on_a_directory_gates_its_descendants() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let base = temp_dir.path();
        std_fs::write(base.join("kubernetes"), "not a directory")
            .expect("Failed to create conflicting file");

        let report = Materializer::new(base).materialize(&layout()).await;

        // One failure for the directory itself, none for the skipped children
        assert_eq!(report.failures, 1);
        assert_eq!(report.directories_created, 2);
        assert_eq!(report.files_created, 10);

        let conflicting = std_fs::read_to_string(base.join("kubernetes"))
            .expect("Conflicting file should survive");
        assert_eq!(conflicting, "not a directory");

        assert_empty_file(&base.join("terraform/main.tf"));
        assert_empty_file(&base.join("scripts/cleanup.sh"));
    }

    #[compio::test]
    async fn a_failed_sibling_does_not_stop_the_others() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let base = temp_dir.path();
        std_fs::create_dir_all(base.join("terraform/outputs.tf"))
            .expect("Failed to create conflicting directory");

        let report = Materializer::new(base).materialize(&layout()).await;

        assert_eq!(report.failures, 1);
        assert_eq!(report.directories_created, 6);
        assert_eq!(report.files_created, 14);

        assert!(base.join("terraform/outputs.tf").is_dir());
        for file in ["main.tf", "variables.tf", "providers.tf", "backend.tf"] {
            assert_empty_file(&base.join("terraform").join(file));
        }
    }

    #[compio::test]
    async fn an_empty_directory_node_is_still_created() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let base = temp_dir.path();
        let template = TemplateNode::Directory {
            children: [(
                "empty".to_string(),
                TemplateNode::Directory {
                    children: LinkedHashMap::new(),
                },
            )]
            .into_iter()
            .collect(),
        };

        let report = Materializer::new(base).materialize(&template).await;

        assert_eq!(report.directories_created, 1);
        assert_eq!(report.files_created, 0);
        assert!(base.join("empty").is_dir());
    }

    #[compio::test]
    async fn a_file_root_creates_nothing() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let base = temp_dir.path();

        let report = Materializer::new(base).materialize(&TemplateNode::File).await;

        assert_eq!(report, MaterializeReport::default());
        assert_eq!(entry_count(base), 0);
    }
}
