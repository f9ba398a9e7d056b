use super::super::common::HTTPError;
use super::super::http_client::HTTPClient;
use super::super::http_response::response_common::{HTTPResponseType, ResponseError};
use crate::error;
use strum_macros::Display;

/// The HTTP method a request type is sent with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum HTTPRequestMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl From<HTTPRequestMethod> for reqwest::Method {
    fn from(value: HTTPRequestMethod) -> Self {
        match value {
            HTTPRequestMethod::Get => reqwest::Method::GET,
            HTTPRequestMethod::Post => reqwest::Method::POST,
            HTTPRequestMethod::Put => reqwest::Method::PUT,
            HTTPRequestMethod::Delete => reqwest::Method::DELETE,
        }
    }
}

/// Errors raised before a response is available.
#[derive(Debug, Display)]
pub enum RequestError {
    NoConnection,
    Timeout,
    FailedToSend,
}

impl std::error::Error for RequestError {}

impl From<reqwest::Error> for RequestError {
    fn from(value: reqwest::Error) -> Self {
        if value.is_connect() {
            RequestError::NoConnection
        } else if value.is_timeout() {
            RequestError::Timeout
        } else {
            RequestError::FailedToSend
        }
    }
}

pub trait HTTPRequestType {
    /// Type of the expected response.
    type Response: HTTPResponseType;
    /// The endpoint path this request targets, query string included.
    fn endpoint(&self) -> &str;
    /// The corresponding HTTP request method.
    fn request_method(&self) -> HTTPRequestMethod;
    /// Extra per-request headers beyond the client's standing ones.
    fn header_params(&self) -> reqwest::header::HeaderMap {
        reqwest::header::HeaderMap::default()
    }
}

/// Request types carrying a JSON body. Only POST and PUT endpoints implement
/// this; everything else goes through [`NoBodyHTTPRequestType`].
pub trait JSONBodyHTTPRequestType: HTTPRequestType {
    /// The type of the JSON body.
    type Body: serde::Serialize;
    /// Returns the serializable body object.
    fn body(&self) -> &Self::Body;

    /// Issues the request with its body serialized as JSON and parses the
    /// response. One shot: no retries, every failure is final for this call.
    async fn send_request(
        &self,
        client: &HTTPClient,
    ) -> Result<<Self::Response as HTTPResponseType>::ParsedResponseType, HTTPError> {
        let response = client
            .request_builder(self.request_method(), self.endpoint())
            .headers(self.header_params())
            .json(self.body())
            .send()
            .await
            .map_err(|err| {
                error!("Sending request to {} failed: {err}", self.endpoint());
                HTTPError::HTTPRequestError(RequestError::from(err))
            })?;
        unwrap_response::<Self::Response>(client, self.endpoint(), response).await
    }
}

/// Request types sent without a body (GET and DELETE endpoints). A payload
/// never rides along even if the request struct carries data for its path.
pub trait NoBodyHTTPRequestType: HTTPRequestType {
    async fn send_request(
        &self,
        client: &HTTPClient,
    ) -> Result<<Self::Response as HTTPResponseType>::ParsedResponseType, HTTPError> {
        let response = client
            .request_builder(self.request_method(), self.endpoint())
            .headers(self.header_params())
            .send()
            .await
            .map_err(|err| {
                error!("Sending request to {} failed: {err}", self.endpoint());
                HTTPError::HTTPRequestError(RequestError::from(err))
            })?;
        unwrap_response::<Self::Response>(client, self.endpoint(), response).await
    }
}

/// Shared tail of both send paths: parse the response, invalidating the
/// session first when the backend rejected it.
async fn unwrap_response<R: HTTPResponseType>(
    client: &HTTPClient,
    endpoint: &str,
    response: reqwest::Response,
) -> Result<R::ParsedResponseType, HTTPError> {
    match R::read_response(response).await {
        Ok(parsed) => Ok(parsed),
        Err(err) => {
            if matches!(err, ResponseError::Unauthorized) {
                client.session().invalidate();
            }
            error!("Request to {endpoint} failed: {err}");
            Err(HTTPError::HTTPResponseError(err))
        }
    }
}
