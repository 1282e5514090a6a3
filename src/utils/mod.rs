//! Utility modules for the application

pub mod logger;
