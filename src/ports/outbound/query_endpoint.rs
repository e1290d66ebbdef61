/// Default address of the query gateway in front of the ledger
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";
pub const DEFAULT_CHANNEL_ID: &str = "mychannel";
pub const DEFAULT_CHAINCODE_ID: &str = "basic";
pub const DEFAULT_FUNCTION: &str = "GetAllAssets";

/// QueryEndpoint - fixed selectors of the ledger query
///
/// Channel, chaincode and function are static configuration; the query
/// gateway exposes them as parameters of its `/query` route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryEndpoint {
    pub base_url: String,
    pub channel_id: String,
    pub chaincode_id: String,
    pub function: String,
}

impl QueryEndpoint {
    pub fn new(base_url: String, channel_id: String, chaincode_id: String, function: String) -> Self {
        Self {
            base_url,
            channel_id,
            chaincode_id,
            function,
        }
    }

    /// Full GET URL with URL-encoded selectors
    pub fn url(&self) -> String {
        format!(
            "{}/query?channelid={}&chaincodeid={}&function={}",
            self.base_url.trim_end_matches('/'),
            urlencoding::encode(&self.channel_id),
            urlencoding::encode(&self.chaincode_id),
            urlencoding::encode(&self.function)
        )
    }
}

impl Default for QueryEndpoint {
    fn default() -> Self {
        Self::new(
            DEFAULT_BASE_URL.to_string(),
            DEFAULT_CHANNEL_ID.to_string(),
            DEFAULT_CHAINCODE_ID.to_string(),
            DEFAULT_FUNCTION.to_string(),
        )
    }
}

impl std::fmt::Display for QueryEndpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.url())
    }
}
