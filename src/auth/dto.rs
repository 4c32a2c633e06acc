use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
    pub return_secure_token: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignInResponse {
    pub id_token: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub expires_in: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupRequest {
    pub id_token: String,
}

#[derive(Debug, Deserialize)]
pub struct LookupResponse {
    #[serde(default)]
    pub users: Vec<LookupUser>,
}

#[derive(Debug, Deserialize)]
pub struct LookupUser {
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ProviderError {
    pub error: ProviderErrorBody,
}

#[derive(Debug, Deserialize)]
pub struct ProviderErrorBody {
    pub message: String,
}
