use std::io::{self, Write};
use std::path::Path;
use std::sync::{Arc, Mutex, PoisonError};

use fixtures::{create_encoder, create_updater, resolve_path};
use format::FormatOptions;
use tracing::Level;

#[derive(Clone, Default)]
struct CapturedLog(Arc<Mutex<Vec<u8>>>);

impl CapturedLog {
    fn contents(&self) -> String {
        let bytes = self.0.lock().unwrap_or_else(PoisonError::into_inner);
        String::from_utf8_lossy(&bytes).into_owned()
    }
}

impl Write for CapturedLog {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn capture(f: impl FnOnce()) -> String {
    let log = CapturedLog::default();
    let writer = log.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(Level::TRACE)
        .with_ansi(false)
        .without_time()
        .with_writer(move || writer.clone())
        .finish();
    tracing::subscriber::with_default(subscriber, f);
    log.contents()
}

#[test]
fn rejected_version_emits_warning() {
    let output = capture(|| {
        let result = create_encoder(
            Path::new("/tmp/bad"),
            &FormatOptions::new(7),
            Path::new("/tmp/cache"),
        );
        assert!(result.is_err());
    });
    let line = output
        .lines()
        .find(|line| line.contains("format version rejected"))
        .unwrap_or_else(|| panic!("no rejection event in:\n{output}"));
    assert!(line.contains("WARN"));
    assert!(line.contains("version=7"));
    assert!(line.contains("encoder selection"));
}

#[test]
fn updater_on_version_two_emits_warning() {
    let output = capture(|| {
        let result = create_updater(Path::new("/tmp/d.2.testDict"), &FormatOptions::VERSION2);
        assert!(result.is_err());
    });
    let line = output
        .lines()
        .find(|line| line.contains("format version rejected"))
        .unwrap_or_else(|| panic!("no rejection event in:\n{output}"));
    assert!(line.contains("WARN"));
    assert!(line.contains("version=2"));
    assert!(line.contains("updater selection"));
}

#[test]
fn path_rejection_emits_warning() {
    let output = capture(|| {
        let result = resolve_path("d", "0", &FormatOptions::new(-1), Path::new("/tmp"));
        assert!(result.is_err());
    });
    assert!(output.contains("WARN"));
    assert!(output.contains("version=-1"));
}

#[test]
fn selection_emits_debug_event() {
    let output = capture(|| {
        let options = FormatOptions::VERSION4_WITH_DYNAMIC_UPDATE;
        create_encoder(Path::new("/tmp/d.4"), &options, Path::new("/tmp/cache")).unwrap();
    });
    let line = output
        .lines()
        .find(|line| line.contains("selected encoder"))
        .unwrap_or_else(|| panic!("no selection event in:\n{output}"));
    assert!(line.contains("DEBUG"));
    assert!(line.contains("family=Ver4"));
    assert!(line.contains("output=/tmp/cache"));
    assert!(!output.contains("WARN"));
}
