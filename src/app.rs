use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use log::debug;

use crate::api::MangaApi;
use crate::fetch::Fetcher;
use crate::models::{Chapter, Manga};
use crate::views::catalog::CatalogView;
use crate::views::detail::DetailView;
use crate::views::reader::{ReaderEvent, ReaderView};

/// 导航路由
///
/// 路由参数是选择请求哪个实体的唯一输入
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `/`
    Catalog,
    /// `/manga/{id}`
    MangaDetail { manga_id: String },
    /// `/manga/{id}/chapter/{chapterId}`
    ChapterReader {
        manga_id: String,
        chapter_id: String,
    },
}

impl Route {
    /// 解析路径字符串
    pub fn parse(path: &str) -> Option<Route> {
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] => Some(Route::Catalog),
            ["manga", id] => Some(Route::MangaDetail {
                manga_id: (*id).to_string(),
            }),
            ["manga", id, "chapter", chapter_id] => Some(Route::ChapterReader {
                manga_id: (*id).to_string(),
                chapter_id: (*chapter_id).to_string(),
            }),
            _ => None,
        }
    }

    /// 路径字符串表示
    pub fn path(&self) -> String {
        match self {
            Route::Catalog => "/".to_string(),
            Route::MangaDetail { manga_id } => format!("/manga/{}", manga_id),
            Route::ChapterReader {
                manga_id,
                chapter_id,
            } => format!("/manga/{}/chapter/{}", manga_id, chapter_id),
        }
    }
}

/// 按路由请求到的实体
pub enum FetchPayload {
    Library(Vec<Manga>),
    Manga(Manga),
    Chapter(Chapter),
}

/// 当前挂载的视图
///
/// 每个视图独占自己的请求结果和本地状态；切换路由即卸载旧视图
pub enum ActiveView {
    Catalog(CatalogView),
    Detail(DetailView),
    Reader(ReaderView),
}

/// 应用外壳
///
/// 持有路由、当前视图和请求加载器；按键分发给视图，
/// 把视图产生的事件（导航、全屏请求）落到平台上
pub struct App {
    api: Arc<MangaApi>,
    fetcher: Fetcher<Route, FetchPayload>,
    pub route: Route,
    pub view: ActiveView,
    /// 平台全屏状态（终端下表现为隐藏标题栏等界面元素）
    chrome_hidden: bool,
    pub should_quit: bool,
}

impl App {
    pub fn new(handle: tokio::runtime::Handle) -> Self {
        Self::with_api(MangaApi::new(), handle)
    }

    pub fn with_api(api: MangaApi, handle: tokio::runtime::Handle) -> Self {
        let mut app = Self {
            api: Arc::new(api),
            fetcher: Fetcher::new(handle),
            route: Route::Catalog,
            view: ActiveView::Catalog(CatalogView::new()),
            chrome_hidden: false,
            should_quit: false,
        };
        app.navigate(Route::Catalog);
        app
    }

    /// 跳转到指定路由：卸载当前视图，挂载新视图并发起请求
    pub fn navigate(&mut self, route: Route) {
        debug!("导航至 {}", route.path());

        // 离开阅读器时退出全屏（按键/全屏监听随视图卸载一并移除）
        if self.chrome_hidden {
            self.chrome_hidden = false;
        }
        self.fetcher.clear();

        self.route = route.clone();
        let api = self.api.clone();
        match &route {
            Route::Catalog => {
                self.view = ActiveView::Catalog(CatalogView::new());
                self.fetcher.start(route, async move {
                    api.fetch_library().await.map(FetchPayload::Library)
                });
            }
            Route::MangaDetail { manga_id } => {
                self.view = ActiveView::Detail(DetailView::new());
                let manga_id = manga_id.clone();
                self.fetcher.start(route, async move {
                    api.fetch_manga(&manga_id).await.map(FetchPayload::Manga)
                });
            }
            Route::ChapterReader {
                manga_id,
                chapter_id,
            } => {
                self.view = ActiveView::Reader(ReaderView::new());
                let manga_id = manga_id.clone();
                let chapter_id = chapter_id.clone();
                self.fetcher.start(route, async move {
                    api.fetch_chapter(&manga_id, &chapter_id)
                        .await
                        .map(FetchPayload::Chapter)
                });
            }
        }
    }

    /// 轮询请求结果并交给当前视图
    pub fn poll_fetch(&mut self) {
        let Some(result) = self.fetcher.poll() else {
            return;
        };

        match (&mut self.view, result) {
            (ActiveView::Catalog(view), Ok(FetchPayload::Library(library))) => {
                view.resolve(Ok(library));
            }
            (ActiveView::Catalog(view), Err(e)) => view.resolve(Err(e)),
            (ActiveView::Detail(view), Ok(FetchPayload::Manga(manga))) => {
                view.resolve(Ok(manga));
            }
            (ActiveView::Detail(view), Err(e)) => view.resolve(Err(e)),
            (ActiveView::Reader(view), Ok(FetchPayload::Chapter(chapter))) => {
                view.resolve(Ok(chapter));
            }
            (ActiveView::Reader(view), Err(e)) => view.resolve(Err(e)),
            // key 匹配由加载器保证，负载类型与视图错位时只可能是过期结果
            _ => debug!("忽略与当前视图不匹配的请求结果"),
        }
    }

    pub fn chrome_hidden(&self) -> bool {
        self.chrome_hidden
    }

    /// 全局按键分发
    pub fn on_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }
        if key.code == KeyCode::Char('q') {
            self.should_quit = true;
            return;
        }

        match &mut self.view {
            ActiveView::Catalog(_) => self.on_catalog_key(key.code),
            ActiveView::Detail(_) => self.on_detail_key(key.code),
            ActiveView::Reader(_) => self.on_reader_key(key.code),
        }
    }

    fn on_catalog_key(&mut self, code: KeyCode) {
        let ActiveView::Catalog(view) = &mut self.view else {
            return;
        };
        match code {
            KeyCode::Up => view.move_up(),
            KeyCode::Down => view.move_down(),
            KeyCode::Enter => {
                if let Some(manga) = view.selected() {
                    let manga_id = manga.id.clone();
                    self.navigate(Route::MangaDetail { manga_id });
                }
            }
            _ => {}
        }
    }

    fn on_detail_key(&mut self, code: KeyCode) {
        let ActiveView::Detail(view) = &mut self.view else {
            return;
        };
        match code {
            KeyCode::Up => view.move_up(),
            KeyCode::Down => view.move_down(),
            KeyCode::Enter => {
                let Route::MangaDetail { manga_id } = &self.route else {
                    return;
                };
                if let Some(chapter) = view.selected_chapter() {
                    let route = Route::ChapterReader {
                        manga_id: manga_id.clone(),
                        chapter_id: chapter.id.clone(),
                    };
                    self.navigate(route);
                }
            }
            KeyCode::Backspace | KeyCode::Esc => self.navigate(Route::Catalog),
            _ => {}
        }
    }

    fn on_reader_key(&mut self, code: KeyCode) {
        let ActiveView::Reader(view) = &mut self.view else {
            return;
        };
        let Route::ChapterReader { manga_id, .. } = &self.route else {
            return;
        };
        let manga_id = manga_id.clone();

        match code {
            // Enter 等价于点击页面图片
            KeyCode::Right | KeyCode::Char(' ') | KeyCode::Enter => {
                match view.next_page() {
                    ReaderEvent::FinishChapter => {
                        self.navigate(Route::MangaDetail { manga_id });
                    }
                    _ => {}
                }
            }
            KeyCode::Left => view.prev_page(),
            KeyCode::Char('f') => {
                if view.toggle_fullscreen() == ReaderEvent::RequestFullscreenToggle {
                    let target = !self.chrome_hidden;
                    self.set_platform_fullscreen(target);
                }
            }
            KeyCode::Esc => {
                // 本地先置 false，平台退出随后跟进
                view.force_exit_fullscreen();
                self.set_platform_fullscreen(false);
            }
            // 数字键对应页码指示器：只接受当前已渲染的合法页
            KeyCode::Char(c @ '1'..='9') => {
                let n = (c as usize) - ('1' as usize);
                if n < view.page_count() {
                    view.jump_to_page(n);
                }
            }
            KeyCode::Backspace => {
                self.navigate(Route::MangaDetail { manga_id });
            }
            _ => {}
        }
    }

    /// 平台执行全屏切换，然后把实际状态通知视图
    /// （对应浏览器里的 fullscreenchange 事件）
    fn set_platform_fullscreen(&mut self, active: bool) {
        self.chrome_hidden = active;
        if let ActiveView::Reader(view) = &mut self.view {
            view.fullscreen_changed(active);
        }
    }
}
