use crate::asset_retrieval::domain::ArtifactBlob;
use crate::ports::outbound::ArtifactStore;
use dashmap::DashMap;
use std::sync::Arc;
use uuid::Uuid;

const DEFAULT_SCOPE: &str = "ledger-license-export";

/// SessionArtifactStore adapter - in-memory object URLs for one session
///
/// Issues `blob:<scope>/<uuid>` references. Clones share the same table,
/// so a presenter can read what a view exported. Content lives only as
/// long as the process.
#[derive(Debug, Clone)]
pub struct SessionArtifactStore {
    scope: String,
    entries: Arc<DashMap<String, ArtifactBlob>>,
}

impl SessionArtifactStore {
    pub fn new() -> Self {
        Self::with_scope(DEFAULT_SCOPE)
    }

    pub fn with_scope(scope: &str) -> Self {
        Self {
            scope: scope.to_string(),
            entries: Arc::new(DashMap::new()),
        }
    }
}

impl Default for SessionArtifactStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ArtifactStore for SessionArtifactStore {
    fn create(&self, blob: ArtifactBlob) -> String {
        let uri = format!("blob:{}/{}", self.scope, Uuid::new_v4());
        self.entries.insert(uri.clone(), blob);
        uri
    }

    fn read(&self, uri: &str) -> Option<ArtifactBlob> {
        self.entries.get(uri).map(|entry| entry.value().clone())
    }

    fn revoke(&self, uri: &str) -> bool {
        self.entries.remove(uri).is_some()
    }

    fn live_count(&self) -> usize {
        self.entries.len()
    }
}
