// src/domain/article/entity.rs
use crate::domain::article::value_objects::{
    ArticleId, ArticleLevel, ArticleName, ArticleOrdinal, ValidityDate, ValidityWindow,
};
use crate::domain::errors::{DomainError, DomainResult};

pub const PROC_RENAME: &str = "balance_api.fn_balance_article_rename";
pub const PROC_LEVEL_SET: &str = "balance_api.fn_balance_article_level_set";
pub const PROC_ORD_SET: &str = "balance_api.fn_balance_article_ord_set";

/// One administrative edit of a catalog article. All sub-edits share the
/// article id and the validity window; the value is never mutated after
/// construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleEditRequest {
    article_id: ArticleId,
    window: ValidityWindow,
    new_name: Option<ArticleName>,
    new_parent_id: Option<ArticleId>,
    new_level: Option<ArticleLevel>,
    new_ordinal: Option<ArticleOrdinal>,
}

impl ArticleEditRequest {
    pub fn builder(article_id: ArticleId, window: ValidityWindow) -> ArticleEditRequestBuilder {
        ArticleEditRequestBuilder {
            article_id,
            window,
            new_name: None,
            new_parent_id: None,
            new_level: None,
            new_ordinal: None,
        }
    }

    pub fn article_id(&self) -> ArticleId {
        self.article_id
    }

    pub fn window(&self) -> ValidityWindow {
        self.window
    }

    pub fn new_name(&self) -> Option<&ArticleName> {
        self.new_name.as_ref()
    }

    pub fn new_parent_id(&self) -> Option<ArticleId> {
        self.new_parent_id
    }

    pub fn new_level(&self) -> Option<ArticleLevel> {
        self.new_level
    }

    pub fn new_ordinal(&self) -> Option<ArticleOrdinal> {
        self.new_ordinal
    }

    /// Remote calls this request expands to, in submission order.
    pub fn planned_edits(&self) -> Vec<ArticleEdit> {
        let mut edits = Vec::with_capacity(3);

        if let Some(name) = &self.new_name {
            edits.push(ArticleEdit::Rename {
                article_id: self.article_id,
                name: name.clone(),
                window: self.window,
            });
        }

        if self.new_parent_id.is_some() || self.new_level.is_some() {
            edits.push(ArticleEdit::LevelSet {
                article_id: self.article_id,
                window: self.window,
                parent_id: self.new_parent_id,
                level: self.new_level,
            });
        }

        if let Some(ordinal) = self.new_ordinal {
            edits.push(ArticleEdit::OrdSet {
                article_id: self.article_id,
                ordinal,
                valid_from: self.window.valid_from(),
            });
        }

        edits
    }
}

pub struct ArticleEditRequestBuilder {
    article_id: ArticleId,
    window: ValidityWindow,
    new_name: Option<ArticleName>,
    new_parent_id: Option<ArticleId>,
    new_level: Option<ArticleLevel>,
    new_ordinal: Option<ArticleOrdinal>,
}

impl ArticleEditRequestBuilder {
    pub fn rename(mut self, name: ArticleName) -> Self {
        self.new_name = Some(name);
        self
    }

    pub fn parent(mut self, parent_id: ArticleId) -> Self {
        self.new_parent_id = Some(parent_id);
        self
    }

    pub fn level(mut self, level: ArticleLevel) -> Self {
        self.new_level = Some(level);
        self
    }

    pub fn ordinal(mut self, ordinal: ArticleOrdinal) -> Self {
        self.new_ordinal = Some(ordinal);
        self
    }

    pub fn build(self) -> DomainResult<ArticleEditRequest> {
        if self.new_name.is_none()
            && self.new_parent_id.is_none()
            && self.new_level.is_none()
            && self.new_ordinal.is_none()
        {
            return Err(DomainError::Validation(format!(
                "edit request for article {} changes nothing",
                self.article_id
            )));
        }

        if self.new_parent_id == Some(self.article_id) {
            return Err(DomainError::Validation(format!(
                "article {} cannot be its own parent",
                self.article_id
            )));
        }

        Ok(ArticleEditRequest {
            article_id: self.article_id,
            window: self.window,
            new_name: self.new_name,
            new_parent_id: self.new_parent_id,
            new_level: self.new_level,
            new_ordinal: self.new_ordinal,
        })
    }
}

/// A single remote call against the `balance_api` schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArticleEdit {
    Rename {
        article_id: ArticleId,
        name: ArticleName,
        window: ValidityWindow,
    },
    LevelSet {
        article_id: ArticleId,
        window: ValidityWindow,
        parent_id: Option<ArticleId>,
        level: Option<ArticleLevel>,
    },
    OrdSet {
        article_id: ArticleId,
        ordinal: ArticleOrdinal,
        valid_from: ValidityDate,
    },
}

impl ArticleEdit {
    pub fn procedure(&self) -> &'static str {
        match self {
            Self::Rename { .. } => PROC_RENAME,
            Self::LevelSet { .. } => PROC_LEVEL_SET,
            Self::OrdSet { .. } => PROC_ORD_SET,
        }
    }

    pub fn article_id(&self) -> ArticleId {
        match self {
            Self::Rename { article_id, .. }
            | Self::LevelSet { article_id, .. }
            | Self::OrdSet { article_id, .. } => *article_id,
        }
    }
}
