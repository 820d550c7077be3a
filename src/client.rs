use crate::config::Config;
use crate::errors::ClientError;
use crate::models::{AuthReply, Criteria, LoginRequest, PdfRequest, ResultSet, Scheme, SignupRequest};
use reqwest::Client;
use serde::{de::DeserializeOwned, Serialize};

/// Typed access to the remote recommendation and auth services.
#[derive(Debug, Clone)]
pub struct RemoteClient {
    client: Client,
    recommend_url: String,
    auth_url: String,
}

impl RemoteClient {
    pub fn new(config: &Config) -> Self {
        Self {
            client: Client::new(),
            recommend_url: config.recommend_url.clone(),
            auth_url: config.auth_url.clone(),
        }
    }

    pub async fn recommend(&self, criteria: &Criteria) -> Result<ResultSet, ClientError> {
        self.post_json(&self.recommend_url, "/recommend", criteria).await
    }

    pub async fn download_pdf(&self, schemes: &[Scheme]) -> Result<Vec<u8>, ClientError> {
        const ENDPOINT: &str = "/download-pdf";
        let response = self
            .send(&self.recommend_url, ENDPOINT, &PdfRequest { schemes })
            .await?;
        let bytes = response
            .bytes()
            .await
            .map_err(|source| ClientError::Network {
                endpoint: ENDPOINT,
                source,
            })?;
        Ok(bytes.to_vec())
    }

    pub async fn login(&self, request: &LoginRequest) -> Result<AuthReply, ClientError> {
        self.post_auth("/login", request).await
    }

    pub async fn signup(&self, request: &SignupRequest) -> Result<AuthReply, ClientError> {
        self.post_auth("/signup", request).await
    }

    /// A decodable `{ok, msg}` body wins over the status code.
    async fn post_auth<B>(&self, endpoint: &'static str, body: &B) -> Result<AuthReply, ClientError>
    where
        B: Serialize + ?Sized,
    {
        let response = self
            .client
            .post(format!("{}{endpoint}", self.auth_url))
            .json(body)
            .send()
            .await
            .map_err(|source| ClientError::Network { endpoint, source })?;

        let status = response.status();
        match response.json::<AuthReply>().await {
            Ok(reply) => Ok(reply),
            Err(_) if !status.is_success() => Err(ClientError::Status { endpoint, status }),
            Err(source) if source.is_decode() => Err(ClientError::Decode { endpoint, source }),
            Err(source) => Err(ClientError::Network { endpoint, source }),
        }
    }

    async fn post_json<B, T>(
        &self,
        base: &str,
        endpoint: &'static str,
        body: &B,
    ) -> Result<T, ClientError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.send(base, endpoint, body).await?;
        response.json::<T>().await.map_err(|source| {
            if source.is_decode() {
                ClientError::Decode { endpoint, source }
            } else {
                ClientError::Network { endpoint, source }
            }
        })
    }

    async fn send<B>(
        &self,
        base: &str,
        endpoint: &'static str,
        body: &B,
    ) -> Result<reqwest::Response, ClientError>
    where
        B: Serialize + ?Sized,
    {
        let response = self
            .client
            .post(format!("{base}{endpoint}"))
            .json(body)
            .send()
            .await
            .map_err(|source| ClientError::Network { endpoint, source })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status { endpoint, status });
        }
        Ok(response)
    }
}
