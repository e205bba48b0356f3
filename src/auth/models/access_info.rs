use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessInfo {
    pub access_token: String,
    pub expires_at: i64,
}
