//! Running the external extraction binaries.

use std::process::Command;

use super::ExtractionError;

/// An external binary and the package that provides it.
#[derive(Debug, Clone, Copy)]
pub(super) struct Tool {
    pub name: &'static str,
    pub package: &'static str,
}

pub(super) const PDFINFO: Tool = Tool {
    name: "pdfinfo",
    package: "poppler-utils",
};

pub(super) const PDFTOTEXT: Tool = Tool {
    name: "pdftotext",
    package: "poppler-utils",
};

pub(super) const TESSERACT: Tool = Tool {
    name: "tesseract",
    package: "tesseract-ocr",
};

const REQUIRED: [Tool; 3] = [PDFINFO, PDFTOTEXT, TESSERACT];

impl Tool {
    /// Start building an invocation of this tool.
    pub fn command(&self) -> Command {
        Command::new(self.name)
    }

    /// Run `cmd` and return its stdout.
    ///
    /// A spawn failure with `NotFound` means the binary isn't installed. A
    /// non-zero exit means the tool rejected its input; `context` and the
    /// tool's stderr become the message.
    pub fn run(&self, cmd: &mut Command, context: &str) -> Result<String, ExtractionError> {
        let output = cmd.output().map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => self.not_found(),
            _ => ExtractionError::Io(e),
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ExtractionError::ExtractionFailed(format!(
                "{} {}: {}",
                self.name,
                context,
                stderr.trim()
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    fn not_found(&self) -> ExtractionError {
        ExtractionError::ToolNotFound(format!("{} (install {})", self.name, self.package))
    }

    fn is_installed(&self) -> bool {
        which::which(self.name).is_ok()
    }
}

/// Report which of the required tools are installed.
pub fn check_tools() -> Vec<(String, bool)> {
    REQUIRED
        .iter()
        .map(|tool| (tool.name.to_string(), tool.is_installed()))
        .collect()
}
