use super::ArticleEditService;
use crate::{
    application::{dto::AppliedEditDto, error::ApplicationResult},
    domain::{
        article::{
            ArticleEditRequest, ArticleId, ArticleLevel, ArticleName, ArticleOrdinal,
            ValidityDate, ValidityWindow,
        },
        errors::DomainError,
    },
};
use serde::Deserialize;

/// Declarative edit of one article, as written in an edit plan.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ApplyArticleEditCommand {
    pub article_id: i64,
    #[serde(default)]
    pub new_name: Option<String>,
    pub valid_from: String,
    #[serde(default)]
    pub valid_until: Option<String>,
    #[serde(default)]
    pub new_parent_id: Option<i64>,
    #[serde(default)]
    pub new_level: Option<i32>,
    #[serde(default)]
    pub new_ordinal: Option<i32>,
}

impl TryFrom<ApplyArticleEditCommand> for ArticleEditRequest {
    type Error = DomainError;

    fn try_from(command: ApplyArticleEditCommand) -> Result<Self, Self::Error> {
        let article_id = ArticleId::new(command.article_id)?;
        let valid_from = ValidityDate::parse(&command.valid_from)?;
        let window = match command.valid_until.as_deref() {
            Some(until) => ValidityWindow::new(valid_from, ValidityDate::parse(until)?)?,
            None => ValidityWindow::open_ended(valid_from)?,
        };

        let mut builder = ArticleEditRequest::builder(article_id, window);
        if let Some(name) = command.new_name {
            builder = builder.rename(ArticleName::new(name)?);
        }
        if let Some(parent_id) = command.new_parent_id {
            builder = builder.parent(ArticleId::new(parent_id)?);
        }
        if let Some(level) = command.new_level {
            builder = builder.level(ArticleLevel::new(level)?);
        }
        if let Some(ordinal) = command.new_ordinal {
            builder = builder.ordinal(ArticleOrdinal::new(ordinal)?);
        }

        builder.build()
    }
}

impl ArticleEditService {
    pub async fn apply_edit(
        &self,
        command: ApplyArticleEditCommand,
    ) -> ApplicationResult<AppliedEditDto> {
        let request = ArticleEditRequest::try_from(command)?;
        self.submit(&request).await
    }

    /// Issues the planned calls one after another and stops at the first
    /// failure; calls already issued are not undone.
    pub(super) async fn submit(
        &self,
        request: &ArticleEditRequest,
    ) -> ApplicationResult<AppliedEditDto> {
        let edits = request.planned_edits();
        let article_id = request.article_id();

        for (done, edit) in edits.iter().enumerate() {
            tracing::info!(
                article_id = %article_id,
                procedure = edit.procedure(),
                "submitting catalog edit"
            );

            if let Err(err) = self.gateway.submit(edit).await {
                tracing::error!(
                    article_id = %article_id,
                    procedure = edit.procedure(),
                    applied = done,
                    skipped = edits.len() - done - 1,
                    error = %err,
                    "catalog edit failed, aborting"
                );
                return Err(err.into());
            }
        }

        Ok(AppliedEditDto::new(article_id, &edits))
    }
}
