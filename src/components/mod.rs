pub mod corrections_table;
pub mod sidebar;
pub mod status_filter;
