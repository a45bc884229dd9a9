use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;

use crate::app::{ActiveView, App};
use crate::views::catalog::CatalogView;
use crate::views::detail::DetailView;
use crate::views::reader::ReaderView;
use crate::views::LoadState;

/// 渲染当前视图
pub fn draw(frame: &mut Frame, app: &App) {
    match &app.view {
        ActiveView::Catalog(view) => draw_catalog(frame, view),
        ActiveView::Detail(view) => draw_detail(frame, view),
        ActiveView::Reader(view) => draw_reader(frame, view, app.chrome_hidden()),
    }
}

fn highlight_style() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(Color::Blue)
        .add_modifier(Modifier::BOLD)
}

/// 居中提示屏（加载中 / 错误 / 空列表共用）
fn draw_message(frame: &mut Frame, area: Rect, title: &str, message: &str, hint: &str) {
    let block = Block::default().borders(Borders::ALL).title(title.to_string());
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            message.to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(hint.to_string(), Style::default().fg(Color::DarkGray))),
    ];
    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

fn chrome_layout(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(area);
    (chunks[0], chunks[1], chunks[2])
}

fn draw_header(frame: &mut Frame, area: Rect, title: &str, subtitle: &str) {
    let block = Block::default().borders(Borders::ALL);
    let line = Line::from(vec![
        Span::styled(
            title.to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(subtitle.to_string(), Style::default().fg(Color::DarkGray)),
    ]);
    frame.render_widget(
        Paragraph::new(line).block(block).alignment(Alignment::Center),
        area,
    );
}

fn draw_footer(frame: &mut Frame, area: Rect, hint: &str) {
    frame.render_widget(
        Paragraph::new(hint.to_string())
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center),
        area,
    );
}

/// 目录页
fn draw_catalog(frame: &mut Frame, view: &CatalogView) {
    let (header, body, footer) = chrome_layout(frame.area());
    draw_header(frame, header, "Manga Reader", "Library");
    draw_footer(frame, footer, "↑/↓ select • Enter open • Q quit");

    match &view.state {
        LoadState::Loading => {
            draw_message(frame, body, "Library", "Loading manga...", "");
        }
        LoadState::Failed => {
            draw_message(frame, body, "Library", "Failed to load manga", "Press Q to quit");
        }
        LoadState::Ready(library) if library.is_empty() => {
            draw_message(frame, body, "Library", "No manga available", "");
        }
        LoadState::Ready(library) => {
            let items: Vec<ListItem> = library
                .iter()
                .map(|manga| {
                    let mut lines = vec![Line::from(Span::styled(
                        manga.title.clone(),
                        Style::default().add_modifier(Modifier::BOLD),
                    ))];
                    if let Some(description) = &manga.description {
                        lines.push(Line::from(Span::styled(
                            description.clone(),
                            Style::default().fg(Color::DarkGray),
                        )));
                    }
                    lines.push(Line::from(Span::styled(
                        format!("{} chapter(s)", manga.chapter_count()),
                        Style::default().fg(Color::DarkGray),
                    )));
                    ListItem::new(lines)
                })
                .collect();

            let list = List::new(items)
                .block(Block::default().borders(Borders::ALL).title("Library"))
                .highlight_style(highlight_style())
                .highlight_symbol("▶ ");
            let mut state = ListState::default();
            state.select(Some(view.cursor));
            frame.render_stateful_widget(list, body, &mut state);
        }
    }
}

/// 详情页
fn draw_detail(frame: &mut Frame, view: &DetailView) {
    let (header, body, footer) = chrome_layout(frame.area());
    draw_footer(
        frame,
        footer,
        "↑/↓ select • Enter read • Backspace back • Q quit",
    );

    match &view.manga {
        LoadState::Loading => {
            draw_header(frame, header, "Manga Reader", "");
            draw_message(frame, body, "Manga", "Loading manga...", "");
        }
        LoadState::Failed => {
            draw_header(frame, header, "Manga Reader", "");
            draw_message(
                frame,
                body,
                "Manga",
                "Manga not found",
                "← Backspace to go back to the library",
            );
        }
        LoadState::Ready(manga) => {
            draw_header(frame, header, &manga.title, &format!("cover: {}", manga.cover));

            if manga.chapters.is_empty() {
                draw_message(frame, body, "Chapters", "No chapters available", "");
                return;
            }

            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(2), Constraint::Min(1)])
                .split(body);

            let description = manga.description.clone().unwrap_or_default();
            frame.render_widget(
                Paragraph::new(description)
                    .style(Style::default().fg(Color::Gray))
                    .wrap(Wrap { trim: true }),
                chunks[0],
            );

            let items: Vec<ListItem> = manga
                .chapters
                .iter()
                .map(|chapter| {
                    ListItem::new(Line::from(vec![
                        Span::styled(
                            format!("Chapter {}: ", chapter.number),
                            Style::default().add_modifier(Modifier::BOLD),
                        ),
                        Span::raw(chapter.title.clone()),
                        Span::styled(
                            format!("  ({} pages)", chapter.page_count()),
                            Style::default().fg(Color::DarkGray),
                        ),
                    ]))
                })
                .collect();

            let list = List::new(items)
                .block(Block::default().borders(Borders::ALL).title("Chapters"))
                .highlight_style(highlight_style())
                .highlight_symbol("▶ ");
            let mut state = ListState::default();
            state.select(Some(view.cursor));
            frame.render_stateful_widget(list, chunks[1], &mut state);
        }
    }
}

/// 阅读器
///
/// 全屏模式隐藏标题栏、页码指示器和操作提示，只留页面本身
fn draw_reader(frame: &mut Frame, view: &ReaderView, fullscreen: bool) {
    let area = frame.area();

    match &view.chapter {
        LoadState::Loading => {
            draw_message(frame, area, "Reader", "Loading chapter...", "");
            return;
        }
        LoadState::Failed => {
            draw_message(
                frame,
                area,
                "Reader",
                "Failed to load chapter",
                "← Backspace to go back to the manga",
            );
            return;
        }
        LoadState::Ready(_) => {}
    }

    if fullscreen {
        draw_page(frame, area, view, true);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

    let title = view
        .chapter
        .ready()
        .map(|c| c.title.clone())
        .unwrap_or_default();
    draw_header(
        frame,
        chunks[0],
        &title,
        &format!("Page {} of {}", view.current_page_index + 1, view.page_count()),
    );

    draw_page(frame, chunks[1], view, false);

    // 页码指示器：当前页实心，其余空心，数字键直接跳页
    let mut dots: Vec<Span> = Vec::new();
    for index in 0..view.page_count() {
        let dot = if index == view.current_page_index {
            Span::styled("●", Style::default().fg(Color::Blue))
        } else {
            Span::styled("○", Style::default().fg(Color::DarkGray))
        };
        dots.push(dot);
        dots.push(Span::raw(" "));
    }
    frame.render_widget(
        Paragraph::new(Line::from(dots)).alignment(Alignment::Center),
        chunks[2],
    );

    draw_footer(
        frame,
        chunks[3],
        "←/→/Space navigate • Enter next • 1-9 jump • F fullscreen • Esc exit fullscreen • Backspace back • Q quit",
    );
}

fn draw_page(frame: &mut Frame, area: Rect, view: &ReaderView, fullscreen: bool) {
    let block = if fullscreen {
        Block::default()
    } else {
        Block::default().borders(Borders::ALL)
    };

    let lines = match view.current_page() {
        Some(page) => vec![
            Line::from(""),
            Line::from(Span::styled(
                format!("[ page {} ]", page.page_number),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                page.image_url.clone(),
                Style::default().fg(Color::Cyan),
            )),
        ],
        None => vec![Line::from("")],
    };

    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        area,
    );
}
