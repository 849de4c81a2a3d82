use serde::Deserialize;

/// One entry of the contents-listing response; unknown fields are ignored.
#[derive(Deserialize)]
pub(crate) struct ContentsNode {
    pub(crate) name: String,
    #[serde(default)]
    pub(crate) size: u64,
}
