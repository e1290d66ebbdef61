/// Use cases module containing application business logic orchestration
mod export_artifact;
mod query_asset;

pub use export_artifact::ExportArtifactUseCase;
pub use query_asset::QueryAssetUseCase;
