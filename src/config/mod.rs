//! Settings record and loader.

mod loader;
mod model;

pub use loader::{load_path, load_slice, load_str};
pub use model::{
    ApiManagementFeatures, AzureSettings, CognitiveAccountFeatures, Features, KeyVaultFeatures,
    LogAnalyticsFeatures, ProviderConfig, ResourceGroupFeatures, ScaleSetFeatures,
    TemplateDeploymentFeatures, VirtualMachineFeatures,
};
