/// Views bind the fetch lifecycle to the use cases for one presentation target
mod asset_view;

pub use asset_view::AssetView;
