use anyhow::{Context, Result};
use reqwest::{Client, Response};
use tracing::{debug, warn};
use url::Url;

use crate::backend::PostingBackend;
use crate::config::ClientConfig;
use crate::error::RemoteError;
use crate::payload::VideoPost;
use crate::types::{ErrorBody, PageOption, PagesResponse, PostReceipt};

/// `PostingBackend` over HTTP.
#[derive(Clone)]
pub struct HttpBackend {
    client: Client,
    pages_url: Url,
    post_url: Url,
}

impl HttpBackend {
    /// Build the client from configuration. Does not touch the network.
    pub fn connect(config: &ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(config.timeout)
            .build()
            .context("building http client")?;
        Ok(Self {
            client,
            pages_url: config.pages_url()?,
            post_url: config.post_url()?,
        })
    }

    pub fn pages_url(&self) -> &Url { &self.pages_url }
    pub fn post_url(&self) -> &Url { &self.post_url }
}

#[async_trait::async_trait]
impl PostingBackend for HttpBackend {
    async fn fetch_pages(&self) -> Result<Vec<PageOption>, RemoteError> {
        let resp = self.client.get(self.pages_url.clone()).send().await?;
        let resp = check_status(resp).await?;
        let body: PagesResponse = resp.json().await?;
        Ok(body.into_pages())
    }

    async fn post_video(&self, post: &VideoPost) -> Result<PostReceipt, RemoteError> {
        let form = post.to_form().map_err(|e| RemoteError::Transport(e.to_string()))?;
        debug!(url = %self.post_url, fields = post.fields().len(), "sending multipart post");
        let resp = self.client.post(self.post_url.clone()).multipart(form).send().await?;
        let resp = check_status(resp).await?;
        let receipt: PostReceipt = resp.json().await?;
        Ok(receipt)
    }
}

/// Turn a non-2xx response into `RemoteError::Status`, pulling `error` out of a JSON body.
async fn check_status(resp: Response) -> Result<Response, RemoteError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    // Body may be empty or not JSON at all
    let text = resp.text().await.unwrap_or_default();
    let error = serde_json::from_str::<ErrorBody>(&text).ok().and_then(|b| b.error);
    warn!(status = status.as_u16(), error = ?error, "backend rejected request");
    Err(RemoteError::Status { status: status.as_u16(), error })
}
