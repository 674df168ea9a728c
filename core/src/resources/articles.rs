use super::API_ROOT;
use crate::client::{require, require_request, Client};
use crate::error::ApiError;
use crate::http::HttpMethod;
use crate::options::ArticleOption;
use crate::query::{compose, escape};
use crate::transport::Transport;
use crate::types::{
    CreateArticleRequest, CreateArticleResponse, GetArticleResponse, GetArticlesResponse,
    UpdateArticleRequest, UpdateArticleResponse,
};

impl<T: Transport> Client<T> {
    /// Knowledge-base articles, optionally filtered by status or search term.
    pub fn get_articles(&self, options: &[ArticleOption]) -> Result<GetArticlesResponse, ApiError> {
        let query = compose(options).render();
        self.get_json(&format!("{API_ROOT}/articles{query}"))
    }

    pub fn get_article(&self, slug: &str) -> Result<GetArticleResponse, ApiError> {
        require(slug, "article slug")?;
        self.get_json(&format!("{API_ROOT}/articles/{}", escape(slug)))
    }

    pub fn create_article(&self, req: &CreateArticleRequest) -> Result<CreateArticleResponse, ApiError> {
        require_request(req, "create article request")?;
        self.send_json(HttpMethod::Post, &format!("{API_ROOT}/articles"), req)
    }

    pub fn update_article(
        &self,
        slug: &str,
        req: &UpdateArticleRequest,
    ) -> Result<UpdateArticleResponse, ApiError> {
        require_request(req, "update article request")?;
        require(slug, "article slug")?;
        self.send_json(HttpMethod::Put, &format!("{API_ROOT}/articles/{}", escape(slug)), req)
    }
}
