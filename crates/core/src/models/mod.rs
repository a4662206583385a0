pub mod asset;
pub mod chart;
pub mod expense;
pub mod settings;
