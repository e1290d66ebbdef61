/// Application layer - Use cases, views and read models
///
/// This layer contains the application logic that orchestrates
/// domain services and coordinates with infrastructure through ports.
pub mod factories;
pub mod read_models;
pub mod use_cases;
pub mod views;
