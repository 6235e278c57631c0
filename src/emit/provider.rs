//! Assembly of the provider block from a settings record.

use crate::config::AzureSettings;
use crate::emit::features::{FLAG_GROUPS, STANDALONE_FLAGS, credential_attrs, feature_attrs};
use crate::error::{InjectError, Result};
use hcl::{Block, Body, Expression};
use tracing::debug;

/// Render the provider block for `label` as canonical HCL text.
///
/// The output is one `provider` block carrying every present credential
/// attribute, the auxiliary tenant list when non-empty, and a `features`
/// block. The `features` block is always present, even when empty; the target
/// schema requires it.
///
/// # Errors
///
/// Returns `SerializeError` when the HCL writer rejects the block; not
/// expected for well-formed records.
///
/// # Examples
///
/// ```rust
/// use azinject::config::AzureSettings;
/// use azinject::emit::render;
///
/// let mut settings = AzureSettings::default();
/// settings.client_id = "abc".to_string();
///
/// let text = render("azurerm", &settings).unwrap();
/// assert!(text.contains("client_id"));
/// assert!(text.contains("features"));
/// ```
pub fn render(label: &str, settings: &AzureSettings) -> Result<String> {
    let body = Body::builder()
        .add_block(build_provider_block(label, settings))
        .build();
    hcl::to_string(&body).map_err(|e| InjectError::SerializeError(e.to_string()))
}

/// Build the in-memory provider block for `label`.
fn build_provider_block(label: &str, settings: &AzureSettings) -> Block {
    let mut provider = Block::builder("provider").add_label(label);

    for (attr, value) in credential_attrs(settings) {
        if value.is_empty() {
            debug!(attribute = attr, "empty value, skipping provider attribute");
            continue;
        }
        debug!(attribute = attr, "writing provider attribute");
        provider = provider.add_attribute((attr, value));
    }

    if settings.auxiliary_tenant_ids.is_empty() {
        debug!("no auxiliary tenant ids, skipping attribute");
    } else {
        debug!(
            count = settings.auxiliary_tenant_ids.len(),
            "writing auxiliary tenant ids"
        );
        let ids: Vec<Expression> = settings
            .auxiliary_tenant_ids
            .iter()
            .map(|id| Expression::from(id.as_str()))
            .collect();
        provider = provider.add_attribute(("auxiliary_tenant_ids", Expression::Array(ids)));
    }

    provider.add_block(build_features_block(settings)).build()
}

/// Build the nested `features` block from the mapping tables.
fn build_features_block(settings: &AzureSettings) -> Block {
    let mut features = Block::builder("features");

    for group in FLAG_GROUPS {
        if !group.should_emit(&settings.features) {
            debug!(block = group.block, "group at rest, skipping feature block");
            continue;
        }
        debug!(block = group.block, "writing feature block");
        let mut nested = Block::builder(group.block);
        for binding in group.bindings {
            nested = nested.add_attribute((binding.attr, (binding.value)(&settings.features)));
        }
        features = features.add_block(nested.build());
    }

    for flag in STANDALONE_FLAGS {
        if (flag.value)(&settings.features) {
            debug!(block = flag.block, "writing feature block");
            features = features.add_block(
                Block::builder(flag.block)
                    .add_attribute((flag.attr, true))
                    .build(),
            );
        }
    }

    for (attr, value) in feature_attrs(settings) {
        if value {
            debug!(attribute = attr, "writing feature attribute");
            features = features.add_attribute((attr, true));
        }
    }

    features.build()
}
