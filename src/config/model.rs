//! Typed settings record for the Azure provider.
//!
//! The record mirrors the JSON settings document field for field. Every field
//! is optional in the input; whatever is absent keeps its default (false for
//! flags, empty for strings and lists), and the emitter treats defaults as
//! "omit from output".

use serde::Deserialize;

/// Top-level settings document.
///
/// Deserialized from a JSON object with a single `Azure` namespace. Unknown
/// fields are ignored.
///
/// # Examples
///
/// ```rust
/// use azinject::config::ProviderConfig;
///
/// let config: ProviderConfig = serde_json::from_str(
///     r#"{
///         "Azure": {
///             "ClientId": "abc",
///             "Features": { "KeyVault": { "PurgeOnDestroy": true } }
///         }
///     }"#,
/// )
/// .unwrap();
///
/// assert_eq!(config.azure.client_id, "abc");
/// assert!(config.azure.features.key_vault.purge_on_destroy);
/// assert!(!config.azure.use_msi);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    /// Settings for the Azure provider block.
    #[serde(rename = "Azure")]
    pub azure: AzureSettings,
}

/// Credential, identity, and feature-toggle settings for one provider block.
///
/// The record is constructed once per invocation, read once by the emitter,
/// then discarded. It carries no state between invocations.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AzureSettings {
    /// Feature toggles, grouped by the sub-block they render into.
    #[serde(rename = "Features")]
    pub features: Features,

    /// Client (application) identifier.
    #[serde(rename = "ClientId")]
    pub client_id: String,

    /// Cloud environment name (public, usgovernment, china, ...).
    #[serde(rename = "Environment")]
    pub environment: String,

    /// Subscription identifier.
    #[serde(rename = "SubId")]
    pub subscription_id: String,

    /// Tenant identifier.
    #[serde(rename = "TenantId")]
    pub tenant_id: String,

    /// Auxiliary tenant identifiers, in the order they should be emitted.
    #[serde(rename = "AuxTenantId")]
    pub auxiliary_tenant_ids: Vec<String>,

    /// Password protecting the client certificate.
    #[serde(rename = "ClientCertPass")]
    pub client_certificate_password: String,

    /// Path to the client certificate bundle.
    #[serde(rename = "ClientCertPath")]
    pub client_certificate_path: String,

    /// Client secret for service principal authentication.
    #[serde(rename = "ClientSecret")]
    pub client_secret: String,

    /// Custom endpoint for managed service identity authentication.
    #[serde(rename = "MsiEndpoint")]
    pub msi_endpoint: String,

    /// Authenticate through managed service identity.
    #[serde(rename = "UseMsi")]
    pub use_msi: bool,

    /// Disable sending the partner identifier with requests.
    #[serde(rename = "DisablePartnerId")]
    pub disable_partner_id: bool,

    /// Host offering cloud metadata, for non-standard environments.
    #[serde(rename = "MetaHost")]
    pub metadata_host: String,

    /// Partner identifier for usage attribution.
    #[serde(rename = "PartnerId")]
    pub partner_id: String,

    /// Skip registering resource providers for the subscription.
    #[serde(rename = "SkipProviderReg")]
    pub skip_provider_registration: bool,

    /// Use Entra ID authentication for storage accounts.
    #[serde(rename = "StorageUseAzureAd")]
    pub storage_use_azuread: bool,
}

/// Feature toggles controlling resource destruction and lifecycle behavior.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Features {
    /// API management toggles.
    #[serde(rename = "ApiMngmt")]
    pub api_management: ApiManagementFeatures,

    /// Cognitive account toggles.
    #[serde(rename = "CogAccount")]
    pub cognitive_account: CognitiveAccountFeatures,

    /// Key vault toggles.
    #[serde(rename = "KeyVault")]
    pub key_vault: KeyVaultFeatures,

    /// Log analytics workspace toggles.
    #[serde(rename = "LogAnalyticsWrkSpc")]
    pub log_analytics_workspace: LogAnalyticsFeatures,

    /// Resource group toggles.
    #[serde(rename = "ResourceGroup")]
    pub resource_group: ResourceGroupFeatures,

    /// Template deployment toggles.
    #[serde(rename = "TempDeploy")]
    pub template_deployment: TemplateDeploymentFeatures,

    /// Virtual machine toggles.
    #[serde(rename = "VirtMachine")]
    pub virtual_machine: VirtualMachineFeatures,

    /// Virtual machine scale set toggles.
    #[serde(rename = "VMSS")]
    pub scale_set: ScaleSetFeatures,
}

/// API management feature toggles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ApiManagementFeatures {
    /// Purge soft-deleted API management instances on destroy.
    #[serde(rename = "PurgeOnDestroy")]
    pub purge_on_destroy: bool,
}

/// Cognitive account feature toggles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CognitiveAccountFeatures {
    /// Purge soft-deleted cognitive accounts on destroy.
    #[serde(rename = "PurgeOnDestroy")]
    pub purge_on_destroy: bool,
}

/// Key vault feature toggles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct KeyVaultFeatures {
    /// Purge soft-deleted key vaults on destroy.
    #[serde(rename = "PurgeOnDestroy")]
    pub purge_on_destroy: bool,

    /// Recover soft-deleted key vaults instead of failing.
    #[serde(rename = "RecoverSoftDelete")]
    pub recover_soft_delete: bool,
}

/// Log analytics workspace feature toggles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LogAnalyticsFeatures {
    /// Permanently delete workspaces on destroy instead of soft-deleting.
    #[serde(rename = "PermDeleteOnDestroy")]
    pub permanently_delete_on_destroy: bool,
}

/// Resource group feature toggles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ResourceGroupFeatures {
    /// Refuse to delete resource groups that still contain resources.
    #[serde(rename = "PrevDeleteIfRes")]
    pub prevent_deletion_if_contains_resources: bool,
}

/// Template deployment feature toggles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TemplateDeploymentFeatures {
    /// Delete nested resources when a template deployment is deleted.
    #[serde(rename = "DeleteNestedItems")]
    pub delete_nested_items: bool,
}

/// Virtual machine feature toggles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct VirtualMachineFeatures {
    /// Delete the OS disk together with the machine.
    #[serde(rename = "DeleteOsDisk")]
    pub delete_os_disk: bool,

    /// Shut the machine down gracefully before deletion.
    #[serde(rename = "GracefulShutdown")]
    pub graceful_shutdown: bool,

    /// Skip the shutdown and force-delete the machine.
    #[serde(rename = "SkipShutForceDelete")]
    pub force_delete: bool,
}

/// Virtual machine scale set feature toggles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ScaleSetFeatures {
    /// Force-delete scale sets on destroy.
    #[serde(rename = "ForceDelete")]
    pub force_delete: bool,

    /// Roll instances when the platform requires it.
    #[serde(rename = "RollInstances")]
    pub roll_instances: bool,
}
