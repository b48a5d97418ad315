pub mod price_point;
pub mod series;

// Re-export for easier access
pub use price_point::PricePoint;
pub use series::Series;
