use crate::domain::article::{ArticleEdit, ArticleId};
use serde::{Deserialize, Serialize};

/// Remote calls issued for one edit request, in submission order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppliedEditDto {
    pub article_id: i64,
    pub procedures: Vec<String>,
}

impl AppliedEditDto {
    pub fn new(article_id: ArticleId, edits: &[ArticleEdit]) -> Self {
        Self {
            article_id: article_id.into(),
            procedures: edits.iter().map(|e| e.procedure().to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanReportDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    pub applied: Vec<AppliedEditDto>,
}

impl PlanReportDto {
    pub fn call_count(&self) -> usize {
        self.applied.iter().map(|a| a.procedures.len()).sum()
    }
}
