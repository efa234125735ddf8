pub mod analytics;
pub mod asset;
pub mod brand;
pub mod competitor;
pub mod dashboard;
pub mod draft;
pub mod error;
pub mod export;
pub mod repository;
pub mod settings;
pub mod strategy;
pub mod wizard;

// Re-export common error type
pub use error::BrandforgeError;
