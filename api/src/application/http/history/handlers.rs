pub mod clear_history;
pub mod export_history;
pub mod get_entry_report;
pub mod get_history;
pub mod get_history_entry;
pub mod import_history;
