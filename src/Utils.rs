//! different utility modules used throughout the project
/// logger initialization: terminal and optional time-stamped file
pub mod logger;
/// tables and text blocks printed by the driver
pub mod report;
