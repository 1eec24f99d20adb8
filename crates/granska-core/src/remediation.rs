use crate::error::GranskaError;
use std::path::Path;
use std::process::Command;

/// Default external remediation command.
pub const DEFAULT_COMMAND: &str = "pdf-remediate";

/// Handle to the external remediation step.
///
/// Remediation itself (tagging, alt text injection, metadata fixes) lives
/// in a separate tool; granska only invokes it and reports the outcome.
pub struct Remediator {
    command: String,
}

impl Remediator {
    pub fn new() -> Self {
        Remediator {
            command: DEFAULT_COMMAND.to_string(),
        }
    }

    pub fn with_command(command: impl Into<String>) -> Self {
        Remediator {
            command: command.into(),
        }
    }

    pub fn command(&self) -> &str {
        &self.command
    }

    /// Check if the remediation command is available on the system.
    pub fn is_available(&self) -> bool {
        Command::new(&self.command)
            .arg("--help")
            .output()
            .map(|o| o.status.success() || !o.stderr.is_empty())
            .unwrap_or(false)
    }

    /// Run `<command> <input> --output <output>`.
    pub fn remediate(&self, input: &Path, output: &Path) -> Result<(), GranskaError> {
        let result = Command::new(&self.command)
            .arg(input)
            .arg("--output")
            .arg(output)
            .output()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    GranskaError::RemediatorNotFound {
                        command: self.command.clone(),
                    }
                } else {
                    GranskaError::Io(e)
                }
            })?;

        if !result.status.success() {
            let code = result.status.code().unwrap_or(-1);
            let stderr = String::from_utf8_lossy(&result.stderr).to_string();
            return Err(GranskaError::RemediationFailed { code, stderr });
        }

        Ok(())
    }
}

impl Default for Remediator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_command_reported() {
        let remediator = Remediator::with_command("granska-no-such-remediator");
        let err = remediator
            .remediate(Path::new("in.pdf"), Path::new("out.pdf"))
            .unwrap_err();
        assert!(matches!(err, GranskaError::RemediatorNotFound { .. }));
        assert!(!remediator.is_available());
    }

    #[test]
    fn test_default_command() {
        assert_eq!(Remediator::new().command(), DEFAULT_COMMAND);
    }
}
