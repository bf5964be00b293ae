use std::sync::Arc;

use crate::error::{Error, Result};
use crate::script::Script;
use crate::spawn::{Osascript, Spawner};

/// A macOS application addressed by its display name.
///
/// The name is only a key for AppleScript's `tell application` lookup; it is
/// not validated against the running process list. Nothing is cached: every
/// method is a fresh round trip through osascript.
pub struct Application {
    name: String,
    spawner: Arc<dyn Spawner>,
}

impl Application {
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_spawner(name, Arc::new(Osascript))
    }

    /// Construct with an injected spawner. Used by tests to fake the
    /// interpreter; production code wants `new`.
    pub fn with_spawner(name: impl Into<String>, spawner: Arc<dyn Spawner>) -> Self {
        Self {
            name: name.into(),
            spawner,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// One-line `tell application "<name>" to <statement>`.
    ///
    /// The name is interpolated without escaping, so a name containing a
    /// double quote produces a malformed script. Known limitation.
    fn tell(&self, statement: &str) -> Result<String> {
        let script = format!("tell application \"{}\" to {}", self.name, statement);
        Script::new(script).run_with(self.spawner.as_ref())
    }

    /// Block form for statements osascript only accepts inside a tell block.
    fn tell_block(&self, body: &str) -> Result<String> {
        let script = format!(
            "tell application \"{}\"\n    {}\nend tell",
            self.name, body
        );
        Script::new(script).run_with(self.spawner.as_ref())
    }

    /// Bring the application to the foreground.
    pub fn activate(&self) -> Result<()> {
        self.tell("activate")?;
        Ok(())
    }

    /// Ask the application to quit.
    pub fn quit(&self) -> Result<()> {
        self.tell("quit")?;
        Ok(())
    }

    /// Whether a process with this application's name currently exists,
    /// asked of System Events rather than the application itself (telling a
    /// stopped app anything would launch it).
    pub fn is_running(&self) -> Result<bool> {
        let script = format!(
            "tell application \"System Events\" to exists (process \"{}\")",
            self.name
        );
        let output = Script::new(script).run_with(self.spawner.as_ref())?;
        Ok(output.eq_ignore_ascii_case("true"))
    }

    /// Number of windows the application currently owns.
    pub fn window_count(&self) -> Result<u32> {
        let output = self.tell("get the number of windows")?;
        output.parse().map_err(|_| Error::Parse {
            output,
            expected: "integer",
        })
    }

    /// Names of every window the application currently owns, in the order
    /// osascript reports them.
    ///
    /// osascript flattens the AppleScript list into one `", "`-joined string,
    /// so a window name that itself contains `", "` splits into two entries.
    /// Known limitation of the wire format, kept as-is.
    pub fn windows(&self) -> Result<Vec<String>> {
        let output = self.tell_block("get the name of every window")?;
        if output.is_empty() {
            return Ok(Vec::new());
        }
        Ok(output.split(", ").map(str::to_string).collect())
    }
}
