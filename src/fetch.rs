use std::future::Future;
use std::sync::mpsc::{channel, Receiver, Sender};

use log::debug;

use crate::api::ApiError;

/// 按 key 去重的异步加载器
///
/// 视图挂载时发起一次请求；路由变化产生新 key 时，新请求在逻辑上
/// 取代所有在途请求，过期 key 的结果在轮询时被直接丢弃。
/// 不使用显式取消令牌，后台任务跑完即止。
pub struct Fetcher<K, T> {
    handle: tokio::runtime::Handle,
    tx: Sender<(K, Result<T, ApiError>)>,
    rx: Receiver<(K, Result<T, ApiError>)>,
    current: Option<K>,
}

impl<K, T> Fetcher<K, T>
where
    K: Clone + PartialEq + Send + 'static,
    T: Send + 'static,
{
    pub fn new(handle: tokio::runtime::Handle) -> Self {
        let (tx, rx) = channel();
        Self {
            handle,
            tx,
            rx,
            current: None,
        }
    }

    /// 发起新请求
    ///
    /// 相同 key 的并发请求会被去重（已有在途请求时不再发起）
    pub fn start<F>(&mut self, key: K, fut: F)
    where
        F: Future<Output = Result<T, ApiError>> + Send + 'static,
    {
        if self.current.as_ref() == Some(&key) {
            debug!("相同 key 的请求已在途，跳过");
            return;
        }

        self.current = Some(key.clone());
        let tx = self.tx.clone();
        self.handle.spawn(async move {
            let result = fut.await;
            // 接收端可能已随视图卸载而消失
            let _ = tx.send((key, result));
        });
    }

    /// 轮询已完成的请求
    ///
    /// 只返回当前 key 的结果；过期结果被丢弃
    pub fn poll(&mut self) -> Option<Result<T, ApiError>> {
        while let Ok((key, result)) = self.rx.try_recv() {
            if self.current.as_ref() == Some(&key) {
                self.current = None;
                return Some(result);
            }
            debug!("丢弃过期请求结果");
        }
        None
    }

    /// 视图卸载时调用，使所有在途结果失效
    pub fn clear(&mut self) {
        self.current = None;
    }

    pub fn in_flight(&self) -> bool {
        self.current.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    /// 轮询直到拿到结果或超时
    async fn poll_until<K, T>(fetcher: &mut Fetcher<K, T>) -> Option<Result<T, ApiError>>
    where
        K: Clone + PartialEq + Send + 'static,
        T: Send + 'static,
    {
        for _ in 0..200 {
            if let Some(result) = fetcher.poll() {
                return Some(result);
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
        None
    }

    #[tokio::test]
    async fn test_result_delivered() {
        let mut fetcher = Fetcher::new(tokio::runtime::Handle::current());
        fetcher.start("a", async { Ok(1) });
        assert!(fetcher.in_flight());

        let result = poll_until(&mut fetcher).await.unwrap();
        assert_eq!(result.unwrap(), 1);
        assert!(!fetcher.in_flight());
    }

    #[tokio::test]
    async fn test_new_key_supersedes_old() {
        let mut fetcher = Fetcher::new(tokio::runtime::Handle::current());
        fetcher.start("a", async { Ok(1) });
        fetcher.start("b", async { Ok(2) });

        // 只有 key "b" 的结果可见，"a" 的结果被丢弃
        let result = poll_until(&mut fetcher).await.unwrap();
        assert_eq!(result.unwrap(), 2);

        tokio::time::sleep(Duration::from_millis(20)).await;
        assert!(fetcher.poll().is_none());
    }

    #[tokio::test]
    async fn test_same_key_deduplicated() {
        let mut fetcher = Fetcher::new(tokio::runtime::Handle::current());
        fetcher.start("a", async { Ok(1) });
        // 第二次 start 被去重，不产生第二个任务
        fetcher.start("a", async { Ok(2) });

        let result = poll_until(&mut fetcher).await.unwrap();
        assert_eq!(result.unwrap(), 1);

        tokio::time::sleep(Duration::from_millis(20)).await;
        assert!(fetcher.poll().is_none());
    }

    #[tokio::test]
    async fn test_clear_invalidates_in_flight() {
        let mut fetcher = Fetcher::new(tokio::runtime::Handle::current());
        fetcher.start("a", async { Ok(1) });
        fetcher.clear();

        tokio::time::sleep(Duration::from_millis(20)).await;
        assert!(fetcher.poll().is_none());
        assert!(!fetcher.in_flight());
    }

    #[tokio::test]
    async fn test_error_propagates_for_current_key() {
        let mut fetcher: Fetcher<&str, i32> = Fetcher::new(tokio::runtime::Handle::current());
        fetcher.start("a", async { Err(ApiError::NotFound) });

        let result = poll_until(&mut fetcher).await.unwrap();
        assert!(matches!(result, Err(ApiError::NotFound)));
    }
}
