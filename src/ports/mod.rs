/// Ports module defining interfaces for hexagonal architecture
///
/// This module contains both inbound ports (driving ports - the view
/// interface the presentation layer calls) and outbound ports (driven
/// ports - network, artifact storage, diagnostics and delivery).
pub mod inbound;
pub mod outbound;
