pub mod add_tracker_entry;
pub mod clear_tracker;
pub mod get_tracker_entries;
