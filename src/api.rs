use crate::mock_data;
use crate::models::{Chapter, Manga};
use log::{debug, warn};
use serde::de::DeserializeOwned;
use thiserror::Error;

/// 远程 API 根地址
pub const DEFAULT_API_BASE_URL: &str = "https://www.sankavollerei.com/comic";

/// 数据访问错误
///
/// 网络/服务器错误在模块内部通过回退数据恢复，不会到达视图层；
/// 只有两边都查不到的 NotFound 会向上传播
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("网络或服务器错误: {0}")]
    NetworkOrServer(String),
    #[error("资源不存在")]
    NotFound,
}

/// 漫画数据访问客户端
///
/// 每个操作先请求远程 API；任何失败（连接错误、非 2xx、JSON 解析失败）
/// 都会被吞掉并回退到内置数据集查同一个 key。回退对调用方不可见。
pub struct MangaApi {
    base_url: String,
    client: reqwest::Client,
}

impl MangaApi {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_API_BASE_URL)
    }

    /// 指定根地址创建客户端（测试时指向不可达端口以强制回退）
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }

    /// GET 并解析 JSON
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| ApiError::NetworkOrServer(e.to_string()))?;

        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::NetworkOrServer(e.to_string()))
    }

    /// 获取全部漫画列表
    ///
    /// 远程失败时回退到内置数据集（固定 2 部）
    pub async fn fetch_library(&self) -> Result<Vec<Manga>, ApiError> {
        match self.get_json::<Vec<Manga>>("/manga").await {
            Ok(library) => Ok(library),
            Err(e) => {
                warn!("获取漫画列表失败，使用内置数据: {}", e);
                Ok(mock_data::mock_library())
            }
        }
    }

    /// 按 ID 获取单部漫画（含完整章节列表）
    ///
    /// 远程和内置数据都查不到时返回 NotFound
    pub async fn fetch_manga(&self, manga_id: &str) -> Result<Manga, ApiError> {
        match self.get_json::<Manga>(&format!("/manga/{}", manga_id)).await {
            Ok(manga) => Ok(manga),
            Err(e) => {
                warn!("获取漫画 {} 失败，使用内置数据: {}", manga_id, e);
                mock_data::find_manga(manga_id).ok_or(ApiError::NotFound)
            }
        }
    }

    /// 获取章节（含完整页面列表）
    pub async fn fetch_chapter(
        &self,
        manga_id: &str,
        chapter_id: &str,
    ) -> Result<Chapter, ApiError> {
        let path = format!("/manga/{}/chapters/{}", manga_id, chapter_id);
        match self.get_json::<Chapter>(&path).await {
            Ok(chapter) => Ok(chapter),
            Err(e) => {
                warn!(
                    "获取章节 {}/{} 失败，使用内置数据: {}",
                    manga_id, chapter_id, e
                );
                mock_data::find_chapter(manga_id, chapter_id).ok_or(ApiError::NotFound)
            }
        }
    }
}

impl Default for MangaApi {
    fn default() -> Self {
        Self::new()
    }
}
