//! GitHub Actions workflow commands and step outputs.

use crate::core::OutputSink;
use crate::utils::error::{Result, ScopeError};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

/// Writes step outputs to `$GITHUB_OUTPUT`, or to stdout outside a runner.
pub struct ActionsOutput<W: Write> {
    output_file: Option<PathBuf>,
    stdout: W,
}

impl ActionsOutput<std::io::Stdout> {
    pub fn new(output_file: Option<PathBuf>) -> Self {
        Self::with_writer(output_file, std::io::stdout())
    }
}

impl<W: Write> ActionsOutput<W> {
    pub fn with_writer(output_file: Option<PathBuf>, stdout: W) -> Self {
        Self {
            output_file,
            stdout,
        }
    }

    pub fn into_writer(self) -> W {
        self.stdout
    }
}

impl<W: Write> OutputSink for ActionsOutput<W> {
    fn set_output(&mut self, name: &str, value: &str) -> Result<()> {
        let line = format_output(name, value)?;

        match &self.output_file {
            Some(path) => {
                tracing::debug!("Appending output {} to {}", name, path.display());
                let mut file = OpenOptions::new().create(true).append(true).open(path)?;
                file.write_all(line.as_bytes())?;
            }
            None => {
                self.stdout.write_all(line.as_bytes())?;
                self.stdout.flush()?;
            }
        }
        Ok(())
    }

    fn set_failed(&mut self, message: &str) {
        let command = format!("::error::{}\n", escape_data(message));
        if let Err(e) = self
            .stdout
            .write_all(command.as_bytes())
            .and_then(|_| self.stdout.flush())
        {
            tracing::error!("Could not write failure annotation: {}", e);
        }
    }
}

/// `name=value` line. Multi-line values are rejected rather than mangled.
fn format_output(name: &str, value: &str) -> Result<String> {
    if name.is_empty() || name.contains(['=', '\n', '\r']) {
        return Err(ScopeError::InvalidConfigValueError {
            field: "output_name".to_string(),
            value: name.to_string(),
            reason: "Output name must be non-empty and contain no '=' or line breaks".to_string(),
        });
    }
    if value.contains(['\n', '\r']) {
        return Err(ScopeError::InvalidConfigValueError {
            field: name.to_string(),
            value: value.to_string(),
            reason: "Output value must be a single line".to_string(),
        });
    }
    Ok(format!("{}={}\n", name, value))
}

/// Escaping applied to the message part of a workflow command.
pub fn escape_data(value: &str) -> String {
    value
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}
