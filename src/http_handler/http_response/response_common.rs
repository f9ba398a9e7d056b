use strum_macros::Display;

pub trait JSONBodyHTTPResponseType: HTTPResponseType {
    async fn parse_json_body(
        response: reqwest::Response,
    ) -> Result<Self::ParsedResponseType, ResponseError>
    where
        Self::ParsedResponseType: for<'de> serde::Deserialize<'de>,
    {
        Ok(response.json::<Self::ParsedResponseType>().await?)
    }
}

/// Marker for response structs that deserialize directly into themselves.
pub trait SerdeJSONBodyHTTPResponseType {}

impl<T> JSONBodyHTTPResponseType for T
where
    T: SerdeJSONBodyHTTPResponseType,
    for<'de> T: serde::Deserialize<'de>,
{
}

impl<T> HTTPResponseType for T
where
    T: SerdeJSONBodyHTTPResponseType,
    for<'de> T: serde::Deserialize<'de>,
{
    type ParsedResponseType = T;

    async fn read_response(
        response: reqwest::Response,
    ) -> Result<Self::ParsedResponseType, ResponseError> {
        let response = Self::unwrap_return_code(response).await?;
        Self::parse_json_body(response).await
    }
}

pub trait HTTPResponseType {
    type ParsedResponseType;

    async fn read_response(
        response: reqwest::Response,
    ) -> Result<Self::ParsedResponseType, ResponseError>;

    /// Only 401 is a distinguished status: the bearer token is no longer
    /// accepted. Every other status passes through and has its body parsed
    /// as this endpoint's JSON shape — interpreting error-shaped payloads is
    /// the caller's business.
    async fn unwrap_return_code(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, ResponseError> {
        if response.status() == reqwest::StatusCode::UNAUTHORIZED {
            Err(ResponseError::Unauthorized)
        } else {
            Ok(response)
        }
    }
}

#[derive(Debug, Display)]
pub enum ResponseError {
    /// Status 401 — the backend rejected the bearer token.
    Unauthorized,
    /// The body could not be read or did not match the expected JSON shape.
    MalformedBody,
    NoConnection,
    Unknown,
}

impl std::error::Error for ResponseError {}

impl From<reqwest::Error> for ResponseError {
    fn from(value: reqwest::Error) -> Self {
        if value.is_decode() {
            ResponseError::MalformedBody
        } else if value.is_connect() {
            ResponseError::NoConnection
        } else {
            ResponseError::Unknown
        }
    }
}
