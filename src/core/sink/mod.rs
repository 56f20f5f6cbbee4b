//! Sync destinations.
//!
//! A sink consumes assembled secrets one at a time. Two implementations:
//! the Parameter Store uploader and a JSON metadata printer for dry runs.

use tracing::info;

use crate::core::secret::Secret;
use crate::error::Result;

mod json;
mod ssm;

pub use json::MetadataPrinter;
pub use ssm::ParameterStore;

/// A destination for loaded secrets.
pub trait Sink {
    /// Deliver one secret. Errors stop the run; prior deliveries stand.
    fn handle(&mut self, secret: &Secret) -> Result<()>;
}

/// Forward secrets to `sink` in order, stopping at the first failure.
///
/// Unlike loading, syncing is not all-or-nothing: records handled before a
/// failure stay committed. Zero records is a successful no-op.
pub fn sync_all(secrets: &[Secret], sink: &mut dyn Sink) -> Result<()> {
    for secret in secrets {
        sink.handle(secret)?;
        info!(name = %secret.name, "synced");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SatchelError;

    struct RecordingSink {
        handled: Vec<String>,
        fail_on: Option<String>,
    }

    impl RecordingSink {
        fn new(fail_on: Option<&str>) -> Self {
            Self {
                handled: Vec::new(),
                fail_on: fail_on.map(String::from),
            }
        }
    }

    impl Sink for RecordingSink {
        fn handle(&mut self, secret: &Secret) -> Result<()> {
            if self.fail_on.as_deref() == Some(secret.name.as_str()) {
                return Err(SatchelError::Upload {
                    name: secret.name.clone(),
                    message: "refused".to_string(),
                });
            }
            self.handled.push(secret.name.clone());
            Ok(())
        }
    }

    fn secret(name: &str) -> Secret {
        Secret {
            name: name.to_string(),
            value: "v".to_string(),
            description: String::new(),
            pattern: String::new(),
        }
    }

    #[test]
    fn test_syncs_in_input_order() {
        let secrets = vec![secret("/a"), secret("/b"), secret("/c")];
        let mut sink = RecordingSink::new(None);

        sync_all(&secrets, &mut sink).unwrap();
        assert_eq!(sink.handled, vec!["/a", "/b", "/c"]);
    }

    #[test]
    fn test_stops_at_first_failure_leaving_prior_records_synced() {
        let secrets = vec![secret("/a"), secret("/b"), secret("/c")];
        let mut sink = RecordingSink::new(Some("/b"));

        let err = sync_all(&secrets, &mut sink).unwrap_err();

        assert!(matches!(err, SatchelError::Upload { .. }));
        // /a went through exactly once, /c was never attempted
        assert_eq!(sink.handled, vec!["/a"]);
    }

    #[test]
    fn test_zero_records_is_a_successful_noop() {
        let mut sink = RecordingSink::new(None);
        sync_all(&[], &mut sink).unwrap();
        assert!(sink.handled.is_empty());
    }
}
