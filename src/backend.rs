use async_trait::async_trait;

use crate::error::RemoteError;
use crate::payload::VideoPost;
use crate::types::{PageOption, PostReceipt};

/// The two remote calls the form depends on.
#[async_trait]
pub trait PostingBackend: Send + Sync {
    async fn fetch_pages(&self) -> Result<Vec<PageOption>, RemoteError>;
    async fn post_video(&self, post: &VideoPost) -> Result<PostReceipt, RemoteError>;
}
