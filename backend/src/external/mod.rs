//! External API integrations

pub mod plant_classifier;
pub mod weather;

pub use plant_classifier::PlantClassifierClient;
pub use weather::WeatherClient;
