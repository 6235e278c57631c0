//! Declarative mapping from settings fields to provider block contents.
//!
//! The tables here are the whole emission policy: which nested blocks appear
//! under `features`, which attributes appear where, and which flag feeds each
//! attribute. The assembly code in [`super::provider`] walks the tables and
//! never special-cases an individual flag.

use crate::config::{AzureSettings, Features};

/// Decides whether a flag group's nested block appears at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum GroupPolicy {
    /// Emit unless every flag in the group is false.
    AnySet,
    /// Emit only for mixed combinations; all-false and all-true produce no
    /// block.
    MixedOnly,
}

/// One attribute inside a grouped block, bound to a single flag.
pub(crate) struct FlagBinding {
    pub(crate) attr: &'static str,
    pub(crate) value: fn(&Features) -> bool,
}

/// A group of related flags rendered together as one nested block.
///
/// Once the policy decides the block is emitted, every bound attribute is set
/// to its literal flag value, false included.
pub(crate) struct FlagGroup {
    pub(crate) block: &'static str,
    pub(crate) policy: GroupPolicy,
    pub(crate) bindings: &'static [FlagBinding],
}

impl FlagGroup {
    pub(crate) fn should_emit(&self, features: &Features) -> bool {
        let set = self
            .bindings
            .iter()
            .filter(|binding| (binding.value)(features))
            .count();
        match self.policy {
            GroupPolicy::AnySet => set > 0,
            GroupPolicy::MixedOnly => set > 0 && set < self.bindings.len(),
        }
    }
}

/// Grouped flags, in emission order.
///
/// The key vault wiring is part of the published mapping: the purge flag
/// feeds `recover_soft_deleted_key_vaults` and the recover flag feeds
/// `purge_soft_delete_on_destroy`.
pub(crate) const FLAG_GROUPS: &[FlagGroup] = &[
    FlagGroup {
        block: "key_vault",
        policy: GroupPolicy::AnySet,
        bindings: &[
            FlagBinding {
                attr: "recover_soft_deleted_key_vaults",
                value: |f| f.key_vault.purge_on_destroy,
            },
            FlagBinding {
                attr: "purge_soft_delete_on_destroy",
                value: |f| f.key_vault.recover_soft_delete,
            },
        ],
    },
    FlagGroup {
        block: "virtual_machine",
        policy: GroupPolicy::MixedOnly,
        bindings: &[
            FlagBinding {
                attr: "delete_os_disk_on_deletion",
                value: |f| f.virtual_machine.delete_os_disk,
            },
            FlagBinding {
                attr: "graceful_shutdown",
                value: |f| f.virtual_machine.graceful_shutdown,
            },
            FlagBinding {
                attr: "skip_shutdown_and_force_delete",
                value: |f| f.virtual_machine.force_delete,
            },
        ],
    },
    FlagGroup {
        block: "virtual_machine_scale_set",
        policy: GroupPolicy::AnySet,
        bindings: &[
            FlagBinding {
                attr: "force_delete",
                value: |f| f.scale_set.force_delete,
            },
            FlagBinding {
                attr: "roll_instances_when_required",
                value: |f| f.scale_set.roll_instances,
            },
        ],
    },
];

/// A flag rendered as its own single-attribute nested block, only when true.
pub(crate) struct StandaloneFlag {
    pub(crate) block: &'static str,
    pub(crate) attr: &'static str,
    pub(crate) value: fn(&Features) -> bool,
}

/// Standalone flags, in emission order.
pub(crate) const STANDALONE_FLAGS: &[StandaloneFlag] = &[
    StandaloneFlag {
        block: "api_management",
        attr: "purge_soft_delete_on_destroy",
        value: |f| f.api_management.purge_on_destroy,
    },
    StandaloneFlag {
        block: "cognitive_account",
        attr: "purge_soft_delete_on_destroy",
        value: |f| f.cognitive_account.purge_on_destroy,
    },
    StandaloneFlag {
        block: "log_analytics_workspace",
        attr: "permanently_delete_on_destroy",
        value: |f| f.log_analytics_workspace.permanently_delete_on_destroy,
    },
    StandaloneFlag {
        block: "resource_group",
        attr: "prevent_deletion_if_contains_resources",
        value: |f| f.resource_group.prevent_deletion_if_contains_resources,
    },
    StandaloneFlag {
        block: "template_deployment",
        attr: "delete_nested_items_during_deletion",
        value: |f| f.template_deployment.delete_nested_items,
    },
];

/// Boolean attributes set directly on the `features` block, only when true.
pub(crate) fn feature_attrs(settings: &AzureSettings) -> [(&'static str, bool); 4] {
    [
        ("use_msi", settings.use_msi),
        ("disable_partner_id", settings.disable_partner_id),
        ("skip_provider_registration", settings.skip_provider_registration),
        ("storage_use_azuread", settings.storage_use_azuread),
    ]
}

/// String attributes set on the provider block, omitted when empty.
pub(crate) fn credential_attrs(settings: &AzureSettings) -> [(&'static str, &str); 10] {
    [
        ("client_id", settings.client_id.as_str()),
        ("environment", settings.environment.as_str()),
        ("subscription_id", settings.subscription_id.as_str()),
        ("tenant_id", settings.tenant_id.as_str()),
        (
            "client_certificate_password",
            settings.client_certificate_password.as_str(),
        ),
        (
            "client_certificate_path",
            settings.client_certificate_path.as_str(),
        ),
        ("client_secret", settings.client_secret.as_str()),
        ("msi_endpoint", settings.msi_endpoint.as_str()),
        ("metadata_host", settings.metadata_host.as_str()),
        ("partner_id", settings.partner_id.as_str()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Features;

    fn group(block: &str) -> &'static FlagGroup {
        FLAG_GROUPS
            .iter()
            .find(|g| g.block == block)
            .unwrap_or_else(|| panic!("no group named {block}"))
    }

    fn key_vault(purge: bool, recover: bool) -> Features {
        let mut features = Features::default();
        features.key_vault.purge_on_destroy = purge;
        features.key_vault.recover_soft_delete = recover;
        features
    }

    fn virtual_machine(delete_os_disk: bool, graceful: bool, force: bool) -> Features {
        let mut features = Features::default();
        features.virtual_machine.delete_os_disk = delete_os_disk;
        features.virtual_machine.graceful_shutdown = graceful;
        features.virtual_machine.force_delete = force;
        features
    }

    fn scale_set(force: bool, roll: bool) -> Features {
        let mut features = Features::default();
        features.scale_set.force_delete = force;
        features.scale_set.roll_instances = roll;
        features
    }

    #[test]
    fn test_key_vault_emitted_unless_both_false() {
        let g = group("key_vault");
        assert!(!g.should_emit(&key_vault(false, false)));
        assert!(g.should_emit(&key_vault(true, false)));
        assert!(g.should_emit(&key_vault(false, true)));
        assert!(g.should_emit(&key_vault(true, true)));
    }

    #[test]
    fn test_key_vault_bindings_are_cross_wired() {
        let g = group("key_vault");
        let features = key_vault(true, false);

        let recover = g
            .bindings
            .iter()
            .find(|b| b.attr == "recover_soft_deleted_key_vaults")
            .unwrap();
        let purge = g
            .bindings
            .iter()
            .find(|b| b.attr == "purge_soft_delete_on_destroy")
            .unwrap();

        // The purge flag drives the recover attribute and vice versa.
        assert!((recover.value)(&features));
        assert!(!(purge.value)(&features));
    }

    #[test]
    fn test_virtual_machine_skips_uniform_combinations() {
        let g = group("virtual_machine");
        for bits in 0u8..8 {
            let features = virtual_machine(bits & 1 != 0, bits & 2 != 0, bits & 4 != 0);
            let expected = bits != 0 && bits != 0b111;
            assert_eq!(g.should_emit(&features), expected, "combination {bits:03b}");
        }
    }

    #[test]
    fn test_virtual_machine_binds_literal_values() {
        let g = group("virtual_machine");
        let features = virtual_machine(true, false, true);
        let values: Vec<bool> = g.bindings.iter().map(|b| (b.value)(&features)).collect();
        assert_eq!(values, vec![true, false, true]);
    }

    #[test]
    fn test_scale_set_emitted_unless_both_false() {
        let g = group("virtual_machine_scale_set");
        assert!(!g.should_emit(&scale_set(false, false)));
        assert!(g.should_emit(&scale_set(true, false)));
        assert!(g.should_emit(&scale_set(false, true)));
        assert!(g.should_emit(&scale_set(true, true)));
    }

    #[test]
    fn test_standalone_flags_cover_all_single_flag_blocks() {
        let blocks: Vec<&str> = STANDALONE_FLAGS.iter().map(|f| f.block).collect();
        assert_eq!(
            blocks,
            vec![
                "api_management",
                "cognitive_account",
                "log_analytics_workspace",
                "resource_group",
                "template_deployment",
            ]
        );
    }
}
