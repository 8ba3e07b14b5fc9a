mod export;
mod service;
mod store;

pub use export::{EXPORT_FILE_NAME, EXPORT_MIME, JournalExport};
pub use service::JournalService;
pub use store::{CSV_HEADER, JournalStore};
