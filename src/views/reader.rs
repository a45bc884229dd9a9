use crate::api::ApiError;
use crate::models::{Chapter, Page};
use crate::views::LoadState;

/// 阅读器操作产生的事件，由应用层执行导航或平台调用
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReaderEvent {
    None,
    /// 在最后一页继续翻页：本章读完，返回详情页
    FinishChapter,
    /// 请求切换全屏；实际状态等平台确认后再更新
    RequestFullscreenToggle,
}

/// 阅读器
///
/// 唯一有状态的视图：页面游标 + 全屏标记。
/// 游标是固定长度序列上的单个整数，两端各有一条边：
/// 第一页禁止后退，最后一页的前进变成 "读完退出"。
/// 位置不跨挂载保留。
pub struct ReaderView {
    pub chapter: LoadState<Chapter>,
    /// 当前页下标，始终落在 [0, N-1]
    pub current_page_index: usize,
    /// 镜像平台的实际全屏状态，而非用户意图
    pub is_fullscreen: bool,
}

impl ReaderView {
    pub fn new() -> Self {
        Self {
            chapter: LoadState::Loading,
            current_page_index: 0,
            is_fullscreen: false,
        }
    }

    pub fn resolve(&mut self, result: Result<Chapter, ApiError>) {
        self.current_page_index = 0;
        self.chapter = match result {
            Ok(chapter) => LoadState::Ready(chapter),
            Err(_) => LoadState::Failed,
        };
    }

    pub fn page_count(&self) -> usize {
        self.chapter.ready().map(|c| c.pages.len()).unwrap_or(0)
    }

    /// 当前页
    pub fn current_page(&self) -> Option<&Page> {
        self.chapter.ready()?.pages.get(self.current_page_index)
    }

    /// 前进一页；在最后一页时产生 FinishChapter
    pub fn next_page(&mut self) -> ReaderEvent {
        let count = self.page_count();
        if count == 0 {
            return ReaderEvent::None;
        }
        if self.current_page_index + 1 < count {
            self.current_page_index += 1;
            ReaderEvent::None
        } else {
            ReaderEvent::FinishChapter
        }
    }

    /// 后退一页；第一页时不动
    pub fn prev_page(&mut self) {
        if self.current_page_index > 0 {
            self.current_page_index -= 1;
        }
    }

    /// 直接跳到第 n 页（页码指示器使用，UI 保证 n 合法）
    pub fn jump_to_page(&mut self, n: usize) {
        self.current_page_index = n;
    }

    /// 切换全屏意图；状态变化由 fullscreen_changed 回调落地
    pub fn toggle_fullscreen(&self) -> ReaderEvent {
        ReaderEvent::RequestFullscreenToggle
    }

    /// 平台全屏状态变化通知（fullscreenchange 的对应物）
    pub fn fullscreen_changed(&mut self, active: bool) {
        self.is_fullscreen = active;
    }

    /// Escape：本地直接置 false，假定平台随后退出全屏
    pub fn force_exit_fullscreen(&mut self) {
        self.is_fullscreen = false;
    }
}

impl Default for ReaderView {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock_data;

    fn reader_with_chapter(manga_id: &str, chapter_id: &str) -> ReaderView {
        let mut view = ReaderView::new();
        view.resolve(Ok(mock_data::find_chapter(manga_id, chapter_id).unwrap()));
        view
    }

    #[test]
    fn test_starts_at_page_zero() {
        let view = reader_with_chapter("1", "1");
        assert_eq!(view.current_page_index, 0);
        assert_eq!(view.page_count(), 3);
        assert_eq!(view.current_page().unwrap().page_number, 1);
    }

    #[test]
    fn test_three_next_calls_finish_three_page_chapter() {
        // 漫画 1 章节 1 共 3 页：前两次前进，第三次触发退出
        let mut view = reader_with_chapter("1", "1");

        assert_eq!(view.next_page(), ReaderEvent::None);
        assert_eq!(view.current_page_index, 1);

        assert_eq!(view.next_page(), ReaderEvent::None);
        assert_eq!(view.current_page_index, 2);

        assert_eq!(view.next_page(), ReaderEvent::FinishChapter);
        assert_eq!(view.current_page_index, 2);
    }

    #[test]
    fn test_prev_at_zero_is_noop() {
        let mut view = reader_with_chapter("1", "1");
        view.prev_page();
        assert_eq!(view.current_page_index, 0);
    }

    #[test]
    fn test_cursor_stays_in_bounds() {
        let mut view = reader_with_chapter("1", "2");
        let count = view.page_count();
        assert_eq!(count, 2);

        // 任意前进/后退序列后游标都在 [0, N-1]
        for step in [1, 1, 1, 0, 0, 1, 0, 1, 1] {
            if step == 1 {
                let _ = view.next_page();
            } else {
                view.prev_page();
            }
            assert!(view.current_page_index < count);
        }
    }

    #[test]
    fn test_single_page_chapter_finishes_immediately() {
        let mut view = reader_with_chapter("2", "1");
        assert_eq!(view.page_count(), 1);
        assert_eq!(view.next_page(), ReaderEvent::FinishChapter);
    }

    #[test]
    fn test_jump_to_page() {
        let mut view = reader_with_chapter("1", "1");
        view.jump_to_page(2);
        assert_eq!(view.current_page_index, 2);
        assert_eq!(view.current_page().unwrap().page_number, 3);
    }

    #[test]
    fn test_fullscreen_mirrors_platform() {
        let mut view = reader_with_chapter("1", "1");

        // 意图本身不改状态
        assert_eq!(view.toggle_fullscreen(), ReaderEvent::RequestFullscreenToggle);
        assert!(!view.is_fullscreen);

        // 平台确认后才更新
        view.fullscreen_changed(true);
        assert!(view.is_fullscreen);

        // Escape 本地强制退出
        view.force_exit_fullscreen();
        assert!(!view.is_fullscreen);
    }

    #[test]
    fn test_next_on_unloaded_chapter_is_noop() {
        let mut view = ReaderView::new();
        assert_eq!(view.next_page(), ReaderEvent::None);
        assert_eq!(view.current_page_index, 0);
    }

    #[test]
    fn test_failed_chapter() {
        let mut view = ReaderView::new();
        view.resolve(Err(ApiError::NotFound));
        assert_eq!(view.page_count(), 0);
        assert!(view.current_page().is_none());
    }
}
