// 视图状态机：目录页、详情页、阅读器
pub mod catalog;
pub mod detail;
pub mod reader;

/// 视图数据加载状态
///
/// Failed 只在远程和内置数据都查不到时出现（NotFound）；
/// 网络错误已在数据访问层被回退数据吸收，视图无法区分
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    Loading,
    Failed,
    Ready(T),
}

impl<T> LoadState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            LoadState::Ready(value) => Some(value),
            _ => None,
        }
    }
}
