use std::io;
use std::process::Command;

/// Captured result of one interpreter run: both streams decoded as text,
/// plus whether the process exited zero.
#[derive(Debug, Clone)]
pub struct SpawnOutput {
    pub stdout: String,
    pub stderr: String,
    pub success: bool,
}

/// Narrow process-spawning capability behind every script execution.
///
/// The library only ever needs "run this program with these args, give me
/// both streams and the exit disposition", so that is the whole trait.
/// Tests inject fakes that return canned output and count invocations.
pub trait Spawner: Send + Sync {
    /// Platform gate, checked before any process is created.
    fn supported(&self) -> bool {
        cfg!(target_os = "macos")
    }

    /// Run `program` with `args` to completion, capturing stdout and stderr.
    fn spawn(&self, program: &str, args: &[&str]) -> io::Result<SpawnOutput>;
}

/// The real thing: a blocking `osascript` child process per call.
pub struct Osascript;

impl Spawner for Osascript {
    fn spawn(&self, program: &str, args: &[&str]) -> io::Result<SpawnOutput> {
        let output = Command::new(program).args(args).output()?;
        Ok(SpawnOutput {
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            success: output.status.success(),
        })
    }
}
