//! Control macOS applications with AppleScript.
//!
//! Every operation is one blocking `osascript -e` round trip: build the
//! script text, run it, parse the trimmed output. There is no caching, no
//! retry, and no timeout.
//!
//! ```no_run
//! use appletell::Application;
//!
//! let notes = Application::new("Notes");
//! notes.activate()?;
//! println!("{} windows open", notes.window_count()?);
//! # Ok::<(), appletell::Error>(())
//! ```

pub mod application;
pub mod error;
pub mod script;
pub mod spawn;

pub use application::Application;
pub use error::{Error, Result};
pub use script::Script;
pub use spawn::{Osascript, SpawnOutput, Spawner};
