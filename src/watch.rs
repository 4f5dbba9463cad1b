//! Re-evaluating a document whenever its file changes.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use notify::{Event, EventKind, RecursiveMode, Watcher};
use tracing::{debug, warn};

use crate::sheet::Sheet;

/// Watch `path` and call `on_change` with the sheet after every change.
///
/// The sheet is evaluated once up front. Variables carry over between
/// changes, the same way they do while typing. Returns when `on_change`
/// returns `false` or the watcher shuts down.
pub fn watch_file<F>(path: &Path, sheet: &mut Sheet, mut on_change: F) -> Result<()>
where
    F: FnMut(&Sheet) -> bool,
{
    let (tx, rx) = flume::unbounded();
    let mut watcher = notify::recommended_watcher(move |event: notify::Result<Event>| {
        let _ = tx.send(event);
    })
    .context("Failed to create file watcher")?;

    watcher
        .watch(path, RecursiveMode::NonRecursive)
        .with_context(|| format!("Failed to watch {}", path.display()))?;

    sheet.set_text(&read(path)?);
    if !on_change(sheet) {
        return Ok(());
    }

    for event in rx.iter() {
        match event {
            Ok(event) if is_content_change(&event.kind) => {
                debug!(path = %path.display(), kind = ?event.kind, "file changed");
                match read(path) {
                    Ok(text) => {
                        sheet.set_text(&text);
                        if !on_change(sheet) {
                            break;
                        }
                    }
                    Err(err) => warn!("{err:#}"),
                }
            }
            Ok(_) => {}
            Err(err) => warn!(%err, "watch error"),
        }
    }

    Ok(())
}

fn is_content_change(kind: &EventKind) -> bool {
    matches!(kind, EventKind::Create(_) | EventKind::Modify(_))
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}
