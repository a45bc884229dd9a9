use crate::api::ApiError;
use crate::models::{Chapter, Manga};
use crate::views::LoadState;

/// 详情页
///
/// 按路由参数请求单部漫画。章节列表按返回顺序展示；
/// "没有章节" 是已加载的子状态，与 "漫画不存在" 不同。
pub struct DetailView {
    pub manga: LoadState<Manga>,
    /// 当前选中的章节下标
    pub cursor: usize,
}

impl DetailView {
    pub fn new() -> Self {
        Self {
            manga: LoadState::Loading,
            cursor: 0,
        }
    }

    pub fn resolve(&mut self, result: Result<Manga, ApiError>) {
        self.cursor = 0;
        self.manga = match result {
            Ok(manga) => LoadState::Ready(manga),
            Err(_) => LoadState::Failed,
        };
    }

    /// 已加载但没有任何章节
    pub fn has_no_chapters(&self) -> bool {
        matches!(&self.manga, LoadState::Ready(m) if m.chapters.is_empty())
    }

    pub fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        if let LoadState::Ready(manga) = &self.manga {
            if self.cursor + 1 < manga.chapters.len() {
                self.cursor += 1;
            }
        }
    }

    /// 当前选中的章节
    pub fn selected_chapter(&self) -> Option<&Chapter> {
        self.manga.ready()?.chapters.get(self.cursor)
    }
}

impl Default for DetailView {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock_data;

    #[test]
    fn test_resolve_populated() {
        let mut view = DetailView::new();
        view.resolve(Ok(mock_data::find_manga("1").unwrap()));

        assert!(!view.has_no_chapters());
        assert_eq!(view.selected_chapter().unwrap().id, "1");

        view.move_down();
        assert_eq!(view.selected_chapter().unwrap().id, "2");
        view.move_down();
        assert_eq!(view.selected_chapter().unwrap().id, "2");
    }

    #[test]
    fn test_not_found_renders_failed() {
        // 漫画 "999" 两边都不存在
        let mut view = DetailView::new();
        view.resolve(Err(ApiError::NotFound));
        assert_eq!(view.manga, LoadState::Failed);
        assert!(view.selected_chapter().is_none());
    }

    #[test]
    fn test_no_chapters_is_distinct_from_not_found() {
        let mut manga = mock_data::find_manga("2").unwrap();
        manga.chapters.clear();

        let mut view = DetailView::new();
        view.resolve(Ok(manga));
        assert!(view.has_no_chapters());
        assert_ne!(view.manga, LoadState::Failed);
    }
}
