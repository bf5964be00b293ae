use appletell::{Application, Error, Script, SpawnOutput, Spawner};

use std::io;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Scriptable stand-in for osascript: replies per matching script substring,
/// records everything it runs.
struct FakeOsascript {
    replies: Vec<(&'static str, String)>,
    scripts: Mutex<Vec<String>>,
    supported: bool,
    calls: AtomicUsize,
}

impl FakeOsascript {
    fn new(replies: Vec<(&'static str, String)>) -> Arc<Self> {
        Arc::new(Self {
            replies,
            scripts: Mutex::new(Vec::new()),
            supported: true,
            calls: AtomicUsize::new(0),
        })
    }
}

impl Spawner for FakeOsascript {
    fn supported(&self) -> bool {
        self.supported
    }

    fn spawn(&self, program: &str, args: &[&str]) -> io::Result<SpawnOutput> {
        assert_eq!(program, "osascript");
        assert_eq!(args[0], "-e");
        self.calls.fetch_add(1, Ordering::SeqCst);

        let script = args[1].to_string();
        self.scripts.lock().unwrap().push(script.clone());

        let stdout = self
            .replies
            .iter()
            .find(|(needle, _)| script.contains(needle))
            .map(|(_, reply)| reply.clone())
            .unwrap_or_default();
        Ok(SpawnOutput {
            stdout,
            stderr: String::new(),
            success: true,
        })
    }
}

#[test]
fn test_window_count_end_to_end() {
    let fake = FakeOsascript::new(vec![("number of windows", "2".to_string())]);
    let notes = Application::with_spawner("Notes", fake.clone());

    assert_eq!(notes.window_count().unwrap(), 2);
    assert_eq!(fake.calls.load(Ordering::SeqCst), 1);

    let script = fake.scripts.lock().unwrap().last().cloned().unwrap();
    assert!(script.contains("\"Notes\""));
}

#[test]
fn test_every_call_is_a_fresh_round_trip() {
    let fake = FakeOsascript::new(vec![
        ("number of windows", "1".to_string()),
        ("exists (process", "true".to_string()),
    ]);
    let notes = Application::with_spawner("Notes", fake.clone());

    assert!(notes.is_running().unwrap());
    assert!(notes.is_running().unwrap());
    assert_eq!(notes.window_count().unwrap(), 1);

    // No caching: three calls, three interpreter invocations.
    assert_eq!(fake.calls.load(Ordering::SeqCst), 3);
}

#[test]
fn test_unsupported_host_spawns_nothing() {
    let fake = Arc::new(FakeOsascript {
        replies: Vec::new(),
        scripts: Mutex::new(Vec::new()),
        supported: false,
        calls: AtomicUsize::new(0),
    });
    let notes = Application::with_spawner("Notes", fake.clone());

    assert!(matches!(
        notes.activate().unwrap_err(),
        Error::UnsupportedPlatform
    ));
    assert!(matches!(
        Script::new("return 1").run_with(fake.as_ref()).unwrap_err(),
        Error::UnsupportedPlatform
    ));
    assert_eq!(fake.calls.load(Ordering::SeqCst), 0);
}

#[test]
fn test_windows_across_the_full_stack() {
    let fake = FakeOsascript::new(vec![(
        "name of every window",
        "Groceries, Meeting notes".to_string(),
    )]);
    let notes = Application::with_spawner("Notes", fake);

    assert_eq!(
        notes.windows().unwrap(),
        vec!["Groceries".to_string(), "Meeting notes".to_string()]
    );
}
