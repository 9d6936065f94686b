// src/infrastructure/plan_file.rs
use crate::application::{
    commands::edits::ApplyEditPlanCommand,
    error::{ApplicationError, ApplicationResult},
};
use std::{fs, path::Path};

/// Reads a JSON edit plan. The file name becomes the plan's source label
/// unless the plan declares one.
pub fn load(path: &Path) -> ApplicationResult<ApplyEditPlanCommand> {
    let text = fs::read_to_string(path).map_err(|err| {
        ApplicationError::infrastructure(format!(
            "cannot read edit plan {}: {err}",
            path.display()
        ))
    })?;

    let mut plan = parse(&text)?;
    if plan.source.is_none() {
        plan.source = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned());
    }
    Ok(plan)
}

pub fn parse(text: &str) -> ApplicationResult<ApplyEditPlanCommand> {
    serde_json::from_str(text)
        .map_err(|err| ApplicationError::validation(format!("malformed edit plan: {err}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_edit() {
        let plan = parse(
            r#"{
                "edits": [{
                    "article_id": 2010000315491,
                    "new_name": "Товарный газ (без оседания)",
                    "valid_from": "26.05.2025",
                    "valid_until": "2099-12-31",
                    "new_parent_id": 2010000319835,
                    "new_level": 2,
                    "new_ordinal": 24
                }]
            }"#,
        )
        .unwrap();

        assert!(plan.source.is_none());
        assert_eq!(plan.edits.len(), 1);
        let edit = &plan.edits[0];
        assert_eq!(edit.article_id, 2010000315491);
        assert_eq!(edit.new_level, Some(2));
        assert_eq!(edit.new_ordinal, Some(24));
    }

    #[test]
    fn optional_fields_default_to_none() {
        let plan = parse(r#"{"edits": [{"article_id": 1, "valid_from": "01.01.2025"}]}"#).unwrap();
        let edit = &plan.edits[0];
        assert!(edit.new_name.is_none());
        assert!(edit.valid_until.is_none());
        assert!(edit.new_parent_id.is_none());
    }

    #[test]
    fn unknown_fields_are_validation_errors() {
        let err = parse(r#"{"edits": [{"article_id": 1, "valid_from": "01.01.2025", "ord": 3}]}"#)
            .unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn missing_file_is_infrastructure_error() {
        let err = load(Path::new("/nonexistent/edits.json")).unwrap_err();
        assert!(matches!(err, ApplicationError::Infrastructure(_)));
    }
}
