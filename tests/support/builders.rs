// tests/support/builders.rs
use balance_catalog::application::commands::edits::ApplyArticleEditCommand;
use chrono::NaiveDate;

pub const ARTICLE_ID: i64 = 2010000315491;
pub const PARENT_ID: i64 = 2010000319835;
pub const NEW_NAME: &str = "Товарный газ (без оседания)";

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Edit of the sample article with only the window set.
pub fn edit() -> ApplyArticleEditCommand {
    ApplyArticleEditCommand {
        article_id: ARTICLE_ID,
        new_name: None,
        valid_from: "26.05.2025".into(),
        valid_until: Some("2099-12-31".into()),
        new_parent_id: None,
        new_level: None,
        new_ordinal: None,
    }
}

/// The full catalog edit: rename, move under the new parent, reorder.
pub fn full_edit() -> ApplyArticleEditCommand {
    ApplyArticleEditCommand {
        new_name: Some(NEW_NAME.into()),
        new_parent_id: Some(PARENT_ID),
        new_level: Some(2),
        new_ordinal: Some(24),
        ..edit()
    }
}
