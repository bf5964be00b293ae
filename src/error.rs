use thiserror::Error;

/// Everything that can go wrong between "build a script" and "typed result".
#[derive(Debug, Error)]
pub enum Error {
    /// The host is not macOS, so there is no osascript to talk to.
    #[error("AppleScript is only supported on macOS")]
    UnsupportedPlatform,

    /// The interpreter binary could not be launched at all.
    #[error("failed to launch osascript")]
    Spawn(#[source] std::io::Error),

    /// The interpreter ran and exited nonzero. The stderr text is whatever
    /// osascript printed; its format is not stable across OS versions.
    #[error("script error: {stderr}")]
    Script { stderr: String },

    /// The script succeeded but its output was not the type we asked for.
    #[error("could not parse script output {output:?} as {expected}")]
    Parse {
        output: String,
        expected: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
