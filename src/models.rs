use serde::{Deserialize, Serialize};

/// 漫画数据模型
///
/// 与远程 API 返回的 JSON 结构一一对应。客户端侧只读：
/// 每次请求都会生成全新的快照，不做原地修改。

/// 漫画（Title）
///
/// 目录的顶层实体，包含按阅读顺序排列的章节列表
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Manga {
    pub id: String,
    pub title: String,
    /// 封面图片地址
    pub cover: String,
    /// 简介（可选）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// 章节列表，顺序即阅读顺序
    #[serde(default)]
    pub chapters: Vec<Chapter>,
}

/// 章节
///
/// 属于唯一一部漫画，包含按页码排列的页面列表
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Chapter {
    pub id: String,
    pub title: String,
    /// 章节序号
    pub number: u32,
    /// 页面列表，顺序即翻页顺序
    #[serde(default)]
    pub pages: Vec<Page>,
}

/// 页面
///
/// 阅读的最小单元，一页对应一张图片
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub id: String,
    /// 页面图片地址
    pub image_url: String,
    /// 页码（章节内唯一且递增）
    pub page_number: u32,
}

impl Manga {
    /// 章节数量（目录页展示用）
    pub fn chapter_count(&self) -> usize {
        self.chapters.len()
    }
}

impl Chapter {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_manga_json() {
        // 与远程 API 一致的 JSON 形状（camelCase 字段）
        let json = r#"{
            "id": "1",
            "title": "Sample Manga 1",
            "cover": "https://example.com/cover.png",
            "description": "This is a sample manga description",
            "chapters": [
                {
                    "id": "1",
                    "title": "Chapter 1: The Beginning",
                    "number": 1,
                    "pages": [
                        { "id": "1", "imageUrl": "https://example.com/p1.png", "pageNumber": 1 },
                        { "id": "2", "imageUrl": "https://example.com/p2.png", "pageNumber": 2 }
                    ]
                }
            ]
        }"#;

        let manga: Manga = serde_json::from_str(json).unwrap();
        assert_eq!(manga.id, "1");
        assert_eq!(manga.title, "Sample Manga 1");
        assert_eq!(manga.chapter_count(), 1);
        assert_eq!(manga.chapters[0].number, 1);
        assert_eq!(manga.chapters[0].page_count(), 2);
        assert_eq!(manga.chapters[0].pages[0].image_url, "https://example.com/p1.png");
        assert_eq!(manga.chapters[0].pages[1].page_number, 2);
    }

    #[test]
    fn test_parse_manga_without_optional_fields() {
        // 列表接口可能省略 description 和 chapters
        let json = r#"{ "id": "2", "title": "Sample Manga 2", "cover": "c.png" }"#;

        let manga: Manga = serde_json::from_str(json).unwrap();
        assert!(manga.description.is_none());
        assert!(manga.chapters.is_empty());
    }

    #[test]
    fn test_page_serialization_is_camel_case() {
        let page = Page {
            id: "1".to_string(),
            image_url: "https://example.com/p1.png".to_string(),
            page_number: 1,
        };

        let json = serde_json::to_string(&page).unwrap();
        assert!(json.contains("\"imageUrl\""));
        assert!(json.contains("\"pageNumber\""));
    }
}
