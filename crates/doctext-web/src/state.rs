use std::path::PathBuf;
use std::sync::Arc;

use doctext_ingest::Extractor;

/// Shared application state accessible from all handlers.
///
/// The extractor is the startup-constructed capability object; whether
/// PDF support exists is decided once when it is built, never re-checked
/// through globals.
pub struct AppState {
    pub extractor: Arc<Extractor>,
    /// Parent directory for per-request upload temp dirs. `None` uses
    /// the system temp dir.
    pub upload_root: Option<PathBuf>,
}
