use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct JikanMangaResponse {
    pub data: JikanMangaData,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JikanMangaListResponse {
    pub data: Vec<JikanMangaData>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JikanMangaData {
    pub mal_id: i32,
    pub title: String,
    pub title_english: Option<String>,
    pub images: JikanImages,
    pub synopsis: Option<String>,
    pub score: Option<f32>,
    #[serde(default)]
    pub authors: Vec<JikanEntity>,
    pub published: Option<JikanPublished>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JikanImages {
    pub jpg: JikanImageSet,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JikanImageSet {
    pub image_url: Option<String>,
    pub large_image_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JikanEntity {
    pub mal_id: i32,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JikanPublished {
    pub from: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct JikanSearchParams {
    pub q: String,
    pub limit: usize,
    pub order_by: &'static str,
    pub sfw: bool,
}
