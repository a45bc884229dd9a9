/// 内置回退数据集
///
/// 远程 API 不可用时使用的固定演示数据：2 部漫画、3 个章节、少量页面。
/// 结构与远程 JSON 完全一致。注意这不是缓存，内容永远不会反映远程数据。
use crate::models::{Chapter, Manga, Page};

fn page(id: &str, image_url: &str, page_number: u32) -> Page {
    Page {
        id: id.to_string(),
        image_url: image_url.to_string(),
        page_number,
    }
}

/// 构建完整的回退数据集
///
/// 每次调用返回全新快照，与正常请求的生命周期语义保持一致
pub fn mock_library() -> Vec<Manga> {
    vec![
        Manga {
            id: "1".to_string(),
            title: "Sample Manga 1".to_string(),
            cover: "https://via.placeholder.com/300x400/4A5568/FFFFFF?text=Manga+Cover"
                .to_string(),
            description: Some("This is a sample manga description".to_string()),
            chapters: vec![
                Chapter {
                    id: "1".to_string(),
                    title: "Chapter 1: The Beginning".to_string(),
                    number: 1,
                    pages: vec![
                        page(
                            "1",
                            "https://via.placeholder.com/800x1200/718096/FFFFFF?text=Page+1",
                            1,
                        ),
                        page(
                            "2",
                            "https://via.placeholder.com/800x1200/4A5568/FFFFFF?text=Page+2",
                            2,
                        ),
                        page(
                            "3",
                            "https://via.placeholder.com/800x1200/2D3748/FFFFFF?text=Page+3",
                            3,
                        ),
                    ],
                },
                Chapter {
                    id: "2".to_string(),
                    title: "Chapter 2: The Journey".to_string(),
                    number: 2,
                    pages: vec![
                        page(
                            "1",
                            "https://via.placeholder.com/800x1200/718096/FFFFFF?text=Chapter+2+Page+1",
                            1,
                        ),
                        page(
                            "2",
                            "https://via.placeholder.com/800x1200/4A5568/FFFFFF?text=Chapter+2+Page+2",
                            2,
                        ),
                    ],
                },
            ],
        },
        Manga {
            id: "2".to_string(),
            title: "Sample Manga 2".to_string(),
            cover: "https://via.placeholder.com/300x400/2D3748/FFFFFF?text=Manga+2".to_string(),
            description: Some("Another exciting manga series".to_string()),
            chapters: vec![Chapter {
                id: "1".to_string(),
                title: "First Chapter".to_string(),
                number: 1,
                pages: vec![page(
                    "1",
                    "https://via.placeholder.com/800x1200/718096/FFFFFF?text=Manga+2+Page+1",
                    1,
                )],
            }],
        },
    ]
}

/// 按 ID 查找漫画
pub fn find_manga(manga_id: &str) -> Option<Manga> {
    mock_library().into_iter().find(|m| m.id == manga_id)
}

/// 按漫画 ID + 章节 ID 查找章节
pub fn find_chapter(manga_id: &str, chapter_id: &str) -> Option<Chapter> {
    find_manga(manga_id)?
        .chapters
        .into_iter()
        .find(|c| c.id == chapter_id)
}
