// src/infrastructure/gateways/postgres_balance_api.rs
use super::map_sqlx;
use crate::domain::article::{
    ArticleId, ArticleLevel, ArticleName, ArticleOrdinal, BalanceArticleGateway,
    LEVEL_UNCHANGED, PROC_LEVEL_SET, PROC_ORD_SET, PROC_RENAME, ValidityDate, ValidityWindow,
};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;
use sqlx::PgPool;

const SQL_RENAME: &str = "SELECT balance_api.fn_balance_article_rename(
    p_article_id => $1,
    p_article_name => $2,
    p_old_date => $3,
    p_new_valid_date => $4
)";

const SQL_LEVEL_SET: &str = "SELECT balance_api.fn_balance_article_level_set(
    p_article_id => $1,
    p_begin_date => $2,
    p_end_date => $3,
    p_parent_id => $4,
    p_level => $5
)";

const SQL_ORD_SET: &str = "SELECT balance_api.fn_balance_article_ord_set(
    p_article_id => $1,
    p_article_ord => $2,
    p_valid_date => $3
)";

/// Calls the `balance_api` procedures directly. Every call runs as its own
/// autocommitted statement.
#[derive(Clone)]
pub struct PostgresBalanceArticleGateway {
    pool: PgPool,
}

impl PostgresBalanceArticleGateway {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BalanceArticleGateway for PostgresBalanceArticleGateway {
    async fn rename(
        &self,
        article_id: ArticleId,
        name: &ArticleName,
        window: ValidityWindow,
    ) -> DomainResult<()> {
        sqlx::query(SQL_RENAME)
            .bind(i64::from(article_id))
            .bind(name.as_str())
            .bind(window.valid_from().date())
            .bind(window.valid_until().date())
            .execute(&self.pool)
            .await
            .map_err(|err| map_sqlx(PROC_RENAME, err))?;
        Ok(())
    }

    async fn set_level(
        &self,
        article_id: ArticleId,
        window: ValidityWindow,
        parent_id: Option<ArticleId>,
        level: Option<ArticleLevel>,
    ) -> DomainResult<()> {
        sqlx::query(SQL_LEVEL_SET)
            .bind(i64::from(article_id))
            .bind(window.valid_from().date())
            .bind(window.valid_until().date())
            .bind(parent_id.map(i64::from))
            .bind(level.map_or(LEVEL_UNCHANGED, i32::from))
            .execute(&self.pool)
            .await
            .map_err(|err| map_sqlx(PROC_LEVEL_SET, err))?;
        Ok(())
    }

    async fn set_ord(
        &self,
        article_id: ArticleId,
        ordinal: ArticleOrdinal,
        valid_from: ValidityDate,
    ) -> DomainResult<()> {
        sqlx::query(SQL_ORD_SET)
            .bind(i64::from(article_id))
            .bind(i32::from(ordinal))
            .bind(valid_from.date())
            .execute(&self.pool)
            .await
            .map_err(|err| map_sqlx(PROC_ORD_SET, err))?;
        Ok(())
    }
}
