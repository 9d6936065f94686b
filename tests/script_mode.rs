use std::io::Write;
use std::sync::Arc;

mod support;

use balance_catalog::application::commands::edits::ApplyEditPlanCommand;
use balance_catalog::application::services::ApplicationServices;
use balance_catalog::infrastructure::gateways::{SqlScript, SqlScriptGateway};
use balance_catalog::infrastructure::plan_file;
use support::{FixedClock, full_edit};

const PLAN: &str = r#"{
    "edits": [
        {
            "article_id": 2010000315491,
            "new_name": "Товарный газ (без оседания)",
            "valid_from": "26.05.2025",
            "valid_until": "2099-12-31",
            "new_parent_id": 2010000319835,
            "new_level": 2,
            "new_ordinal": 24
        }
    ]
}"#;

#[tokio::test]
async fn plan_file_renders_to_script() {
    let mut file = tempfile::Builder::new()
        .suffix(".json")
        .tempfile()
        .unwrap();
    file.write_all(PLAN.as_bytes()).unwrap();

    let plan = plan_file::load(file.path()).unwrap();
    let expected_source = file
        .path()
        .file_name()
        .unwrap()
        .to_string_lossy()
        .into_owned();
    assert_eq!(plan.source.as_deref(), Some(expected_source.as_str()));

    let gateway = Arc::new(SqlScriptGateway::new());
    let services = ApplicationServices::new(gateway.clone(), Arc::new(FixedClock));
    let source = plan.source.clone();
    let report = services.edit_commands.apply_plan(plan).await.unwrap();
    assert_eq!(report.call_count(), 3);

    let script = SqlScript::new(source, gateway.statements());
    let text = script.render(services.clock().now());

    assert!(text.contains("-- Generated at: 2025-05-26 09:00:00"));
    assert!(text.contains(&format!("-- Source: {expected_source}")));

    let rename = text.find("fn_balance_article_rename").unwrap();
    let level = text.find("fn_balance_article_level_set").unwrap();
    let order = text.find("fn_balance_article_ord_set").unwrap();
    assert!(rename < level && level < order);

    assert!(text.contains("p_article_name => 'Товарный газ (без оседания)'"));
    assert!(text.contains("p_parent_id => 2010000319835"));
    assert!(text.contains("p_level => 2"));
    assert!(text.contains("p_article_ord => 24"));
}

#[tokio::test]
async fn invalid_plan_renders_nothing() {
    let gateway = Arc::new(SqlScriptGateway::new());
    let services = ApplicationServices::new(gateway.clone(), Arc::new(FixedClock));

    let mut bad = full_edit();
    bad.valid_from = "31.02.2025".into();
    let plan = ApplyEditPlanCommand {
        source: None,
        edits: vec![full_edit(), bad],
    };

    let err = services.edit_commands.apply_plan(plan).await.unwrap_err();
    assert!(err.is_validation());
    assert!(gateway.statements().is_empty());
}
