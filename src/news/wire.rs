use serde::Deserialize;

/* ----- RSS via CORS proxy ----- */

#[derive(Deserialize)]
pub(crate) struct ProxyEnvelope {
    #[serde(default)]
    pub(crate) contents: Option<String>,
}

/* ----- JSON search API (search_by_date) ----- */

#[derive(Deserialize)]
pub(crate) struct SearchEnvelope {
    #[serde(default)]
    pub(crate) hits: Option<Vec<SearchHit>>,
}

#[derive(Deserialize)]
pub(crate) struct SearchHit {
    #[serde(default)]
    pub(crate) title: Option<String>,
    #[serde(default)]
    pub(crate) url: Option<String>,
    #[serde(rename = "objectID")]
    pub(crate) object_id: String,
    #[serde(default)]
    pub(crate) created_at: Option<String>,
}
