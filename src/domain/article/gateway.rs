use crate::domain::article::entity::ArticleEdit;
use crate::domain::article::value_objects::{
    ArticleId, ArticleLevel, ArticleName, ArticleOrdinal, ValidityDate, ValidityWindow,
};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

/// Port onto the `balance_api` procedures that own catalog versioning.
#[async_trait]
pub trait BalanceArticleGateway: Send + Sync {
    async fn rename(
        &self,
        article_id: ArticleId,
        name: &ArticleName,
        window: ValidityWindow,
    ) -> DomainResult<()>;

    async fn set_level(
        &self,
        article_id: ArticleId,
        window: ValidityWindow,
        parent_id: Option<ArticleId>,
        level: Option<ArticleLevel>,
    ) -> DomainResult<()>;

    async fn set_ord(
        &self,
        article_id: ArticleId,
        ordinal: ArticleOrdinal,
        valid_from: ValidityDate,
    ) -> DomainResult<()>;

    async fn submit(&self, edit: &ArticleEdit) -> DomainResult<()> {
        match edit {
            ArticleEdit::Rename {
                article_id,
                name,
                window,
            } => self.rename(*article_id, name, *window).await,
            ArticleEdit::LevelSet {
                article_id,
                window,
                parent_id,
                level,
            } => {
                self.set_level(*article_id, *window, *parent_id, *level)
                    .await
            }
            ArticleEdit::OrdSet {
                article_id,
                ordinal,
                valid_from,
            } => self.set_ord(*article_id, *ordinal, *valid_from).await,
        }
    }
}
