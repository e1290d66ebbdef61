use crate::asset_retrieval::domain::FetchState;

/// DownloadAffordance - what the download control shows for a fetch state
///
/// A presentation-neutral read model: the renderer decides how each variant
/// looks, this type decides which variant applies and its wording.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadAffordance {
    /// Fetch in flight (or not started yet); control is busy
    Loading,
    /// Fetch failed; the control retries
    Retry { message: String },
    /// An asset is ready; the control downloads it
    Download { label: String },
    /// Fetch succeeded with no records; the control is disabled
    Unavailable,
}

impl DownloadAffordance {
    pub fn from_state(state: &FetchState) -> Self {
        match state {
            FetchState::Idle | FetchState::Loading => DownloadAffordance::Loading,
            FetchState::Error(message) => DownloadAffordance::Retry {
                message: message.clone(),
            },
            FetchState::Success(Some(asset)) => DownloadAffordance::Download {
                label: asset.display_name().to_string(),
            },
            FetchState::Success(None) => DownloadAffordance::Unavailable,
        }
    }

    /// Text shown on the control
    pub fn caption(&self) -> String {
        match self {
            DownloadAffordance::Loading => "Loading Agreement".to_string(),
            DownloadAffordance::Retry { .. } => "Error: Click to retry".to_string(),
            DownloadAffordance::Download { label } => label.clone(),
            DownloadAffordance::Unavailable => "No agreement available".to_string(),
        }
    }

    /// Whether the control accepts a click
    pub fn is_enabled(&self) -> bool {
        matches!(
            self,
            DownloadAffordance::Retry { .. } | DownloadAffordance::Download { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::asset_retrieval::domain::{Attributes, LicenseAsset};

    #[test]
    fn test_loading_states() {
        assert_eq!(
            DownloadAffordance::from_state(&FetchState::Idle),
            DownloadAffordance::Loading
        );
        let loading = DownloadAffordance::from_state(&FetchState::Loading);
        assert_eq!(loading.caption(), "Loading Agreement");
        assert!(!loading.is_enabled());
    }

    #[test]
    fn test_error_state_offers_retry() {
        let affordance =
            DownloadAffordance::from_state(&FetchState::Error("Network Error".to_string()));
        assert_eq!(
            affordance,
            DownloadAffordance::Retry {
                message: "Network Error".to_string()
            }
        );
        assert_eq!(affordance.caption(), "Error: Click to retry");
        assert!(affordance.is_enabled());
    }

    #[test]
    fn test_success_labels_with_owner() {
        let asset = LicenseAsset::new(
            "A1".to_string(),
            Some("Alice".to_string()),
            None,
            Attributes::new(),
        )
        .unwrap();
        let affordance = DownloadAffordance::from_state(&FetchState::Success(Some(asset)));
        assert_eq!(affordance.caption(), "Alice");
        assert!(affordance.is_enabled());
    }

    #[test]
    fn test_empty_success_is_disabled() {
        let affordance = DownloadAffordance::from_state(&FetchState::Success(None));
        assert_eq!(affordance, DownloadAffordance::Unavailable);
        assert_eq!(affordance.caption(), "No agreement available");
        assert!(!affordance.is_enabled());
    }
}
