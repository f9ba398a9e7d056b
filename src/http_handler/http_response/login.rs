use super::response_common::SerdeJSONBodyHTTPResponseType;

/// Response type for the /login endpoint.
///
/// The token in here is what every subsequent request authenticates with;
/// `DroneConsole::login` hands it to the session automatically.
#[derive(serde::Deserialize, Debug)]
pub struct LoginResponse {
    token: String,
    message: String,
    /// Role granted to the account, e.g. "admin" or "operator".
    role: String,
}

impl SerdeJSONBodyHTTPResponseType for LoginResponse {}

impl LoginResponse {
    pub fn token(&self) -> &str { &self.token }
    pub fn message(&self) -> &str { &self.message }
    pub fn role(&self) -> &str { &self.role }
}
