use crate::error::{Error, Result};
use crate::spawn::{Osascript, Spawner};

/// One AppleScript source text, executed at most once per `run` call.
///
/// The script is passed to osascript inline (`-e`), never written to a
/// temp file. Each run is a fresh blocking child process with no timeout;
/// a hung interpreter blocks the caller.
#[derive(Debug, Clone)]
pub struct Script {
    source: String,
}

impl Script {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Run the script via the system osascript and return its trimmed stdout.
    pub fn run(&self) -> Result<String> {
        self.run_with(&Osascript)
    }

    /// Run the script against an injected spawner. The platform gate is
    /// checked first, so an unsupported host never spawns a process.
    pub fn run_with(&self, spawner: &dyn Spawner) -> Result<String> {
        if !spawner.supported() {
            return Err(Error::UnsupportedPlatform);
        }

        let output = spawner
            .spawn("osascript", &["-e", self.source.as_str()])
            .map_err(Error::Spawn)?;

        tracing::debug!(
            script_len = self.source.len(),
            success = output.success,
            "ran AppleScript"
        );

        if output.success {
            Ok(output.stdout.trim().to_string())
        } else {
            Err(Error::Script {
                stderr: output.stderr,
            })
        }
    }
}
