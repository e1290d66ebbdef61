/// Inbound ports (Driving ports) - interfaces the presentation layer drives
pub mod asset_view_port;

pub use asset_view_port::AssetViewPort;
