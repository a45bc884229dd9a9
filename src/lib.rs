// 漫画阅读客户端：三个视图 + 带回退的远程数据访问
pub mod api;
pub mod app;
pub mod fetch;
pub mod mock_data;
pub mod models;
pub mod ui;
pub mod views;
