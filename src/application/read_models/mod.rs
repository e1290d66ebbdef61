/// Read models consumed by the presentation layer
mod download_affordance;

pub use download_affordance::DownloadAffordance;
