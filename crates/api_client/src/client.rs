//! Request plumbing for the backend endpoints.

use crate::error::ApiError;
use crate::types::{
    AuthRequest, AuthResponse, ChatRequest, ChatResponse, FileAnalysis, FileContentResponse,
    UploadResponse,
};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Connection settings for the backend service.
pub struct ApiConfig {
    /// Base URL every endpoint path is joined onto.
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "/api".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default)]
/// Typed client for the backend HTTP API.
pub struct ApiClient {
    config: ApiConfig,
    token: Option<String>,
}

impl ApiClient {
    /// Creates a client for the given configuration, with no session token.
    pub fn new(config: ApiConfig) -> Self {
        Self {
            config,
            token: None,
        }
    }

    /// Returns a copy of this client carrying the given session token.
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token;
        self
    }

    /// Replaces the session token used for authorized calls.
    pub fn set_token(&mut self, token: Option<String>) {
        self.token = token;
    }

    /// Returns the current session token, if any.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.config.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

#[cfg(target_arch = "wasm32")]
mod fetch {
    use gloo_net::http::{RequestBuilder, Response};
    use serde::de::DeserializeOwned;
    use serde::Deserialize;

    use super::*;

    #[derive(Debug, Deserialize)]
    struct ApiErrorBody {
        error: String,
    }

    fn network(err: gloo_net::Error) -> ApiError {
        ApiError::Network(err.to_string())
    }

    async fn decode_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        match response.status() {
            401 => Err(ApiError::Unauthorized),
            status if !response.ok() => {
                let message = match response.json::<ApiErrorBody>().await {
                    Ok(body) => body.error,
                    Err(_) => response.status_text(),
                };
                Err(ApiError::Http { status, message })
            }
            _ => response
                .json::<T>()
                .await
                .map_err(|err| ApiError::Decode(err.to_string())),
        }
    }

    impl ApiClient {
        fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
            match self.token() {
                Some(token) => builder.header("Authorization", &format!("Bearer {token}")),
                None => builder,
            }
        }

        /// Creates a new account.
        ///
        /// # Errors
        ///
        /// Returns an [`ApiError`] when the request fails or is rejected.
        pub async fn register(&self, request: &AuthRequest) -> Result<AuthResponse, ApiError> {
            let response = gloo_net::http::Request::post(&self.endpoint("auth/register"))
                .json(request)
                .map_err(network)?
                .send()
                .await
                .map_err(network)?;
            decode_json(response).await
        }

        /// Exchanges credentials for a session token.
        ///
        /// # Errors
        ///
        /// Returns an [`ApiError`] when the request fails or is rejected.
        pub async fn login(&self, request: &AuthRequest) -> Result<AuthResponse, ApiError> {
            let response = gloo_net::http::Request::post(&self.endpoint("auth/login"))
                .json(request)
                .map_err(network)?
                .send()
                .await
                .map_err(network)?;
            decode_json(response).await
        }

        /// Uploads a zipped project as multipart form data.
        ///
        /// # Errors
        ///
        /// Returns an [`ApiError`] when the form cannot be built, the
        /// request fails, or the server rejects the archive.
        pub async fn upload_project(
            &self,
            filename: &str,
            bytes: &[u8],
        ) -> Result<UploadResponse, ApiError> {
            let form = web_sys::FormData::new()
                .map_err(|err| ApiError::Network(format!("failed to create form data: {err:?}")))?;
            let array = js_sys::Uint8Array::from(bytes);
            let parts = js_sys::Array::new();
            parts.push(array.as_ref());
            let blob = web_sys::Blob::new_with_u8_array_sequence(&parts)
                .map_err(|err| ApiError::Network(format!("failed to build blob: {err:?}")))?;
            form.append_with_blob_and_filename("file", &blob, filename)
                .map_err(|err| ApiError::Network(format!("failed to attach archive: {err:?}")))?;

            let response = self
                .authorize(gloo_net::http::Request::post(&self.endpoint("upload")))
                .body(form)
                .map_err(network)?
                .send()
                .await
                .map_err(network)?;
            decode_json(response).await
        }

        /// Fetches the AI analysis for one file path.
        ///
        /// # Errors
        ///
        /// Returns an [`ApiError`] when the request fails or is rejected.
        pub async fn fetch_analysis(&self, path: &str) -> Result<FileAnalysis, ApiError> {
            let response = self
                .authorize(
                    gloo_net::http::Request::get(&self.endpoint("analysis"))
                        .query([("path", path)]),
                )
                .send()
                .await
                .map_err(network)?;
            decode_json(response).await
        }

        /// Fetches the raw text content of one file path.
        ///
        /// # Errors
        ///
        /// Returns an [`ApiError`] when the request fails or is rejected.
        pub async fn fetch_file_content(&self, path: &str) -> Result<String, ApiError> {
            let response = self
                .authorize(
                    gloo_net::http::Request::get(&self.endpoint("file")).query([("path", path)]),
                )
                .send()
                .await
                .map_err(network)?;
            let body: FileContentResponse = decode_json(response).await?;
            Ok(body.content)
        }

        /// Sends a chat question with the current project/file context.
        ///
        /// # Errors
        ///
        /// Returns an [`ApiError`] when the request fails or is rejected.
        pub async fn send_chat_message(
            &self,
            request: &ChatRequest,
        ) -> Result<ChatResponse, ApiError> {
            let response = self
                .authorize(gloo_net::http::Request::post(&self.endpoint("ask")))
                .json(request)
                .map_err(network)?
                .send()
                .await
                .map_err(network)?;
            decode_json(response).await
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl ApiClient {
    fn unsupported() -> ApiError {
        ApiError::Network("backend calls require the browser runtime".to_string())
    }

    /// Creates a new account. Browser-only; errors on native targets.
    ///
    /// # Errors
    ///
    /// Always returns [`ApiError::Network`] off-wasm.
    pub async fn register(&self, _request: &AuthRequest) -> Result<AuthResponse, ApiError> {
        Err(Self::unsupported())
    }

    /// Exchanges credentials for a session token. Browser-only; errors on
    /// native targets.
    ///
    /// # Errors
    ///
    /// Always returns [`ApiError::Network`] off-wasm.
    pub async fn login(&self, _request: &AuthRequest) -> Result<AuthResponse, ApiError> {
        Err(Self::unsupported())
    }

    /// Uploads a zipped project. Browser-only; errors on native targets.
    ///
    /// # Errors
    ///
    /// Always returns [`ApiError::Network`] off-wasm.
    pub async fn upload_project(
        &self,
        _filename: &str,
        _bytes: &[u8],
    ) -> Result<UploadResponse, ApiError> {
        Err(Self::unsupported())
    }

    /// Fetches file analysis. Browser-only; errors on native targets.
    ///
    /// # Errors
    ///
    /// Always returns [`ApiError::Network`] off-wasm.
    pub async fn fetch_analysis(&self, _path: &str) -> Result<FileAnalysis, ApiError> {
        Err(Self::unsupported())
    }

    /// Fetches raw file content. Browser-only; errors on native targets.
    ///
    /// # Errors
    ///
    /// Always returns [`ApiError::Network`] off-wasm.
    pub async fn fetch_file_content(&self, _path: &str) -> Result<String, ApiError> {
        Err(Self::unsupported())
    }

    /// Sends a chat question. Browser-only; errors on native targets.
    ///
    /// # Errors
    ///
    /// Always returns [`ApiError::Network`] off-wasm.
    pub async fn send_chat_message(&self, _request: &ChatRequest) -> Result<ChatResponse, ApiError> {
        Err(Self::unsupported())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_base_and_path_without_duplicate_slashes() {
        let client = ApiClient::new(ApiConfig {
            base_url: "/api/".to_string(),
        });
        assert_eq!(client.endpoint("/auth/login"), "/api/auth/login");
        assert_eq!(client.endpoint("upload"), "/api/upload");
    }

    #[test]
    fn token_is_carried_and_replaceable() {
        let mut client =
            ApiClient::new(ApiConfig::default()).with_token(Some("abc".to_string()));
        assert_eq!(client.token(), Some("abc"));

        client.set_token(None);
        assert_eq!(client.token(), None);
    }
}
