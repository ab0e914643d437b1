use crate::template::node::{TemplateInsertError, TemplateNode};

/// File entries of the infrastructure scaffold, in creation order.
/// Every intermediate path component becomes a directory.
const LAYOUT_FILE_PATHS: &[&str] = &[
    "README.md",
    "terraform/main.tf",
    "terraform/variables.tf",
    "terraform/outputs.tf",
    "terraform/providers.tf",
    "terraform/backend.tf",
    "terraform/terraform.tfvars.example",
    "kubernetes/nginx-ingress/values.yaml",
    "kubernetes/cert-manager/values.yaml",
    "kubernetes/cert-manager/cluster-issuer.yaml",
    "kubernetes/keycloak/values.yaml",
    "kubernetes/keycloak/ingress.yaml",
    "scripts/deploy.sh",
    "scripts/setup-terraform-state.sh",
    "scripts/cleanup.sh",
];

/// Assembles the scaffold layout into a template tree.
pub fn infrastructure_layout() -> Result<TemplateNode, TemplateInsertError> {
    let mut root = TemplateNode::root();

    for path in LAYOUT_FILE_PATHS {
        root.try_insert_file(path)?;
    }

    Ok(root)
}
