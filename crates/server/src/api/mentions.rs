//! Mention extraction API handlers.

use axum::{http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use titlelink_core::{
    extract_post_mention, searchable_query, steam_app_ids, store_search_url, PostMention,
};
use tracing::debug;

use super::handlers::ErrorResponse;

#[derive(Debug, Deserialize)]
pub struct MentionsRequest {
    /// Post title, e.g. "[Steam] (Game) Outlast".
    #[serde(default)]
    pub post_title: Option<String>,
    /// Free text (post URL, comment body) to scan for store links.
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct MentionsResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mention: Option<PostMention>,
    pub app_ids: Vec<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_term: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_url: Option<String>,
}

/// POST /api/v1/mentions
///
/// Pull a tagged game name out of a post title and store app ids out of text.
pub async fn extract(
    Json(body): Json<MentionsRequest>,
) -> Result<Json<MentionsResponse>, (StatusCode, Json<ErrorResponse>)> {
    if body.post_title.is_none() && body.text.is_none() {
        return Err(ErrorResponse::unprocessable(
            "post_title or text is required",
        ));
    }

    let mention = body.post_title.as_deref().and_then(extract_post_mention);
    if let Some(mention) = &mention {
        debug!("{} mention: {:?}", mention.platform.as_str(), mention.name);
    }
    let search_term = mention
        .as_ref()
        .map(|m| searchable_query(&m.name))
        .filter(|term| !term.is_empty());
    let search_url = search_term.as_deref().map(store_search_url);
    let app_ids = body.text.as_deref().map(steam_app_ids).unwrap_or_default();

    Ok(Json(MentionsResponse {
        mention,
        app_ids,
        search_term,
        search_url,
    }))
}
