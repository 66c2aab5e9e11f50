use std::sync::atomic::{AtomicU64, Ordering};

use camino::{Utf8Path, Utf8PathBuf};
use chrono::Utc;

/// Move an unreadable database aside so the next open starts from an empty
/// file. Returns where the old file went, or `None` if there was no file.
pub fn quarantine_corrupt_file(path: &Utf8Path) -> std::io::Result<Option<Utf8PathBuf>> {
    if !path.exists() {
        return Ok(None);
    }

    static SEQ: AtomicU64 = AtomicU64::new(0);
    let stem = path.file_name().unwrap_or(launchlens_config::DATA_FILENAME);
    let target = path.with_file_name(format!(
        "{stem}.corrupt-{}-{}-{}",
        Utc::now().format("%Y%m%dT%H%M%S%.3f"),
        std::process::id(),
        SEQ.fetch_add(1, Ordering::Relaxed)
    ));

    std::fs::rename(path, &target)?;
    tracing::warn!("favorites database at {} was unreadable; moved to {}", path, target);
    Ok(Some(target))
}
