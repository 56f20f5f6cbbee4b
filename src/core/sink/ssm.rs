//! Parameter Store sink.
//!
//! Uploads secrets with `PutParameter`, always overwriting and always as
//! `SecureString`. The AWS SDK is async; a current-thread tokio runtime
//! keeps the rest of the tool synchronous.
//!
//! Credentials come from the default provider chain (environment, shared
//! config, instance metadata).

use aws_sdk_ssm::types::{ParameterTier, ParameterType};
use tracing::debug;

use super::Sink;
use crate::core::constants::SSM_STANDARD_TIER_MAX_BYTES;
use crate::core::secret::Secret;
use crate::error::{Result, SatchelError};

/// SSM Parameter Store uploader.
pub struct ParameterStore {
    rt: tokio::runtime::Runtime,
    client: aws_sdk_ssm::Client,
}

impl ParameterStore {
    /// Build a client from the default AWS credential chain.
    ///
    /// # Errors
    ///
    /// Returns `SatchelError::Config` if the tokio runtime cannot be
    /// created.
    pub fn new() -> Result<Self> {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| SatchelError::Config(format!("failed to create runtime: {e}")))?;

        let config =
            rt.block_on(aws_config::load_defaults(aws_config::BehaviorVersion::latest()));
        let client = aws_sdk_ssm::Client::new(&config);

        Ok(Self { rt, client })
    }
}

impl Sink for ParameterStore {
    fn handle(&mut self, secret: &Secret) -> Result<()> {
        let tier = tier_for(secret.value.len());
        debug!(name = %secret.name, ?tier, "uploading");

        self.rt
            .block_on(
                self.client
                    .put_parameter()
                    .name(&secret.name)
                    .value(&secret.value)
                    .description(&secret.description)
                    .allowed_pattern(&secret.pattern)
                    .overwrite(true)
                    .r#type(ParameterType::SecureString)
                    .tier(tier)
                    .send(),
            )
            .map_err(|e| SatchelError::Upload {
                name: secret.name.clone(),
                message: e.to_string(),
            })?;

        Ok(())
    }
}

/// Pick the cheapest parameter tier the value fits in.
fn tier_for(len: usize) -> ParameterTier {
    if len > SSM_STANDARD_TIER_MAX_BYTES {
        ParameterTier::Advanced
    } else {
        ParameterTier::Standard
    }
}
