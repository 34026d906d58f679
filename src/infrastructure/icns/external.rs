/// External ICNS Tool
///
/// Drives a command-line converter (`icnsutil` by default) through
/// `tokio::process`:
///
/// - availability check: `<tool> --help`, exit status 0 means available,
///   a spawn failure (e.g. not on `PATH`) means unavailable
/// - creation: `<tool> create <output> <source>`, non-zero exit is an error
///
/// Both calls are bounded by the configured timeout and the child is
/// killed if the timeout fires.

use async_trait::async_trait;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;

use super::{IcnsBackend, IcnsError, IcnsRequest, IcnsToolConfig};

pub struct ExternalIcnsTool {
    program: String,
    prefix_args: Vec<String>,
    timeout: Duration,
}

impl ExternalIcnsTool {
    pub fn new(program: impl Into<String>) -> Self {
        let defaults = IcnsToolConfig::default();
        Self {
            program: program.into(),
            prefix_args: Vec::new(),
            timeout: defaults.timeout,
        }
    }

    pub fn from_config(config: &IcnsToolConfig) -> Result<Self, IcnsError> {
        let (program, rest) = config.command.split_first().ok_or(IcnsError::EmptyCommand)?;
        Ok(Self {
            program: program.clone(),
            prefix_args: rest.to_vec(),
            timeout: config.timeout,
        })
    }

    pub fn with_prefix_args(mut self, args: Vec<String>) -> Self {
        self.prefix_args = args;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.prefix_args).kill_on_drop(true);
        cmd
    }
}

#[async_trait]
impl IcnsBackend for ExternalIcnsTool {
    fn name(&self) -> &str {
        &self.program
    }

    async fn is_available(&self) -> bool {
        let mut cmd = self.command();
        cmd.arg("--help")
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());

        match tokio::time::timeout(self.timeout, cmd.status()).await {
            Ok(Ok(status)) => {
                tracing::debug!(program = %self.program, ?status, "ICNS tool check finished");
                status.success()
            }
            Ok(Err(e)) => {
                tracing::debug!(program = %self.program, error = %e, "ICNS tool could not be spawned");
                false
            }
            Err(_) => {
                tracing::warn!(program = %self.program, "ICNS tool check timed out");
                false
            }
        }
    }

    async fn create(&self, request: &IcnsRequest) -> Result<(), IcnsError> {
        let mut cmd = self.command();
        cmd.arg("create")
            .arg(&request.output)
            .arg(&request.source)
            .stdin(Stdio::null());

        tracing::debug!(program = %self.program, source = %request.source.display(), "running ICNS tool");

        let output = tokio::time::timeout(self.timeout, cmd.output())
            .await
            .map_err(|_| IcnsError::Timeout {
                program: self.program.clone(),
                secs: self.timeout.as_secs(),
            })?
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => IcnsError::Unavailable(self.program.clone()),
                _ => IcnsError::Io(e),
            })?;

        if !output.status.success() {
            return Err(IcnsError::ToolFailed {
                program: self.program.clone(),
                code: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(())
    }
}
