pub mod edss;
pub mod health;
pub mod instruments;
