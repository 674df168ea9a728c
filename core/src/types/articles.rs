use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::{PageInfo, Person, Topic};

int_enum! {
    /// Publication state of a knowledge-base article.
    ArticleStatus {
        Published = 0,
        Draft = 1,
        Internal = 2,
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Article {
    pub title: Option<String>,
    pub body: Option<String>,
    pub slug: Option<String>,
    pub status: Option<ArticleStatus>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub url: Option<String>,
    pub author: Option<Person>,
    pub embedded_url: Option<String>,
    pub topic: Option<Topic>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetArticlesResponse {
    #[serde(flatten)]
    pub page: PageInfo,
    #[serde(deserialize_with = "crate::types::null_as_default")]
    pub articles: Vec<Article>,
}

pub type GetArticleResponse = Article;
pub type CreateArticleResponse = Article;
pub type UpdateArticleResponse = Article;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateArticleRequest {
    pub article: ArticleInput,
}

pub type UpdateArticleRequest = CreateArticleRequest;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArticleInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ArticleStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topic_id: Option<String>,
}
