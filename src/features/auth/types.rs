//! Request and response types for auth API calls. Login payloads carry
//! passwords and tokens, so they must never be logged.

use secrecy::SecretString;
use serde::{Deserialize, Deserializer, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Teacher {
    pub email: String,
    pub name: String,
    #[serde(default)]
    pub role: Option<String>,
}

/// Form body for `/auth/login`.
#[derive(Serialize)]
pub struct LoginForm<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Deserialize)]
pub struct LoginResponse {
    #[serde(deserialize_with = "deserialize_secret")]
    pub access_token: SecretString,
    #[serde(default)]
    pub token_type: Option<String>,
    pub teacher: Teacher,
}

impl std::fmt::Debug for LoginResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginResponse")
            .field("access_token", &"***")
            .field("token_type", &self.token_type)
            .field("teacher", &self.teacher)
            .finish()
    }
}

fn deserialize_secret<'de, D>(deserializer: D) -> Result<SecretString, D::Error>
where
    D: Deserializer<'de>,
{
    String::deserialize(deserializer).map(SecretString::from)
}
