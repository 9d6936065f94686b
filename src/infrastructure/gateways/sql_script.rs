// src/infrastructure/gateways/sql_script.rs
use crate::domain::article::{
    ArticleEdit, ArticleId, ArticleLevel, ArticleName, ArticleOrdinal, BalanceArticleGateway,
    LEVEL_UNCHANGED, ValidityDate, ValidityWindow,
};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::{Mutex, PoisonError};

const RULE: &str = "-- ===========================================";

/// Records each call as a standalone SQL statement instead of executing it.
#[derive(Default)]
pub struct SqlScriptGateway {
    statements: Mutex<Vec<String>>,
}

impl SqlScriptGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn statements(&self) -> Vec<String> {
        self.statements
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn record(&self, edit: &ArticleEdit) {
        self.statements
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(render_edit(edit));
    }
}

#[async_trait]
impl BalanceArticleGateway for SqlScriptGateway {
    async fn rename(
        &self,
        article_id: ArticleId,
        name: &ArticleName,
        window: ValidityWindow,
    ) -> DomainResult<()> {
        self.record(&ArticleEdit::Rename {
            article_id,
            name: name.clone(),
            window,
        });
        Ok(())
    }

    async fn set_level(
        &self,
        article_id: ArticleId,
        window: ValidityWindow,
        parent_id: Option<ArticleId>,
        level: Option<ArticleLevel>,
    ) -> DomainResult<()> {
        self.record(&ArticleEdit::LevelSet {
            article_id,
            window,
            parent_id,
            level,
        });
        Ok(())
    }

    async fn set_ord(
        &self,
        article_id: ArticleId,
        ordinal: ArticleOrdinal,
        valid_from: ValidityDate,
    ) -> DomainResult<()> {
        self.record(&ArticleEdit::OrdSet {
            article_id,
            ordinal,
            valid_from,
        });
        Ok(())
    }
}

/// Renders one call with named arguments and inline literals.
pub fn render_edit(edit: &ArticleEdit) -> String {
    let args: Vec<(&str, String)> = match edit {
        ArticleEdit::Rename {
            article_id,
            name,
            window,
        } => vec![
            ("p_article_id", article_id.to_string()),
            ("p_article_name", quote(name.as_str())),
            ("p_old_date", date_literal(window.valid_from())),
            ("p_new_valid_date", date_literal(window.valid_until())),
        ],
        ArticleEdit::LevelSet {
            article_id,
            window,
            parent_id,
            level,
        } => vec![
            ("p_article_id", article_id.to_string()),
            ("p_begin_date", date_literal(window.valid_from())),
            ("p_end_date", date_literal(window.valid_until())),
            (
                "p_parent_id",
                parent_id.map_or_else(|| "NULL".to_string(), |id| id.to_string()),
            ),
            (
                "p_level",
                level.map_or(LEVEL_UNCHANGED, i32::from).to_string(),
            ),
        ],
        ArticleEdit::OrdSet {
            article_id,
            ordinal,
            valid_from,
        } => vec![
            ("p_article_id", article_id.to_string()),
            ("p_article_ord", i32::from(*ordinal).to_string()),
            ("p_valid_date", date_literal(*valid_from)),
        ],
    };

    let body = args
        .iter()
        .map(|(name, value)| format!("    {name} => {value}"))
        .collect::<Vec<_>>()
        .join(",\n");

    format!("SELECT {}(\n{body}\n);", edit.procedure())
}

fn quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}

fn date_literal(date: ValidityDate) -> String {
    format!("'{date}'")
}

/// A complete script file: header, statements, footer.
#[derive(Debug, Clone)]
pub struct SqlScript {
    source: Option<String>,
    statements: Vec<String>,
}

impl SqlScript {
    pub fn new(source: Option<String>, statements: Vec<String>) -> Self {
        Self { source, statements }
    }

    pub fn statement_count(&self) -> usize {
        self.statements.len()
    }

    pub fn render(&self, generated_at: DateTime<Utc>) -> String {
        let mut lines = vec![
            RULE.to_string(),
            "-- balance_api catalog edit script".to_string(),
            format!(
                "-- Generated at: {}",
                generated_at.format("%Y-%m-%d %H:%M:%S")
            ),
        ];
        if let Some(source) = &self.source {
            lines.push(format!("-- Source: {}", source.replace('\n', " ")));
        }
        lines.push(RULE.to_string());
        lines.push(String::new());

        for statement in &self.statements {
            lines.push(statement.clone());
            lines.push(String::new());
        }

        lines.extend([
            RULE.to_string(),
            "-- End of script".to_string(),
            RULE.to_string(),
        ]);

        let mut out = lines.join("\n");
        out.push('\n');
        out
    }
}
