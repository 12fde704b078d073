//! Where the tracker keeps its files and how it presents amounts and dates

pub mod paths;
pub mod settings;

pub use paths::TrackerPaths;
pub use settings::Settings;
