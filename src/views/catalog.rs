use crate::api::ApiError;
use crate::models::Manga;
use crate::views::LoadState;

/// 目录页
///
/// 挂载时请求一次漫画列表。状态：加载中 / 失败 / 空列表 / 已加载。
/// 无分页、无筛选、无搜索。
pub struct CatalogView {
    pub state: LoadState<Vec<Manga>>,
    /// 当前选中的条目下标
    pub cursor: usize,
}

impl CatalogView {
    pub fn new() -> Self {
        Self {
            state: LoadState::Loading,
            cursor: 0,
        }
    }

    /// 请求完成回调
    pub fn resolve(&mut self, result: Result<Vec<Manga>, ApiError>) {
        self.cursor = 0;
        self.state = match result {
            Ok(library) => LoadState::Ready(library),
            Err(_) => LoadState::Failed,
        };
    }

    /// 列表为空（区别于加载失败）
    pub fn is_empty(&self) -> bool {
        matches!(&self.state, LoadState::Ready(library) if library.is_empty())
    }

    pub fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        if let LoadState::Ready(library) = &self.state {
            if self.cursor + 1 < library.len() {
                self.cursor += 1;
            }
        }
    }

    /// 当前选中的漫画
    pub fn selected(&self) -> Option<&Manga> {
        self.state.ready()?.get(self.cursor)
    }
}

impl Default for CatalogView {
    fn default() -> Self {
        Self::new()
    }
}
