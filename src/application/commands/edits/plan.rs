use super::{ApplyArticleEditCommand, ArticleEditService};
use crate::{
    application::{
        dto::PlanReportDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::ArticleEditRequest,
};
use serde::Deserialize;

/// Ordered list of edits loaded from a plan file.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ApplyEditPlanCommand {
    #[serde(default)]
    pub source: Option<String>,
    pub edits: Vec<ApplyArticleEditCommand>,
}

impl ArticleEditService {
    /// Validates every request before issuing any call, then submits them in
    /// declaration order. The first remote failure aborts the whole plan.
    pub async fn apply_plan(&self, command: ApplyEditPlanCommand) -> ApplicationResult<PlanReportDto> {
        let ApplyEditPlanCommand { source, edits } = command;

        if edits.is_empty() {
            return Err(ApplicationError::validation("edit plan contains no edits"));
        }

        let requests = edits
            .into_iter()
            .enumerate()
            .map(|(index, edit)| {
                ArticleEditRequest::try_from(edit).map_err(|err| {
                    ApplicationError::validation(format!("edit #{}: {err}", index + 1))
                })
            })
            .collect::<ApplicationResult<Vec<_>>>()?;

        tracing::info!(
            source = source.as_deref().unwrap_or("-"),
            requests = requests.len(),
            "applying edit plan"
        );

        let mut applied = Vec::with_capacity(requests.len());
        for request in &requests {
            applied.push(self.submit(request).await?);
        }

        let report = PlanReportDto { source, applied };
        tracing::info!(calls = report.call_count(), "edit plan applied");
        Ok(report)
    }
}
