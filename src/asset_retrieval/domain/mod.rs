pub mod artifact;
pub mod fetch_result;
pub mod license_asset;

pub use artifact::{ArtifactBlob, ArtifactPayload, ArtifactRef, LocalArtifact};
pub use fetch_result::{FetchResult, FetchState, FetchTicket};
pub use license_asset::{Attributes, LicenseAsset, RawRecord};
