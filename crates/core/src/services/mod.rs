pub mod chart_service;
pub mod vendor_directory;
