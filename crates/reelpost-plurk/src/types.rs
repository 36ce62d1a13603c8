use serde::Deserialize;

/// The subset of the `plurkAdd` response we care about.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AddPlurkResponse {
    pub plurk_id: Option<u64>,
    pub qualifier: Option<String>,
}

/// Error envelope Plurk returns with 4xx/5xx responses.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    pub(crate) error_text: String,
}
