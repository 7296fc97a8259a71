use super::{Edit, EditPlan, LinePosition};
use crate::error::Error;
use crate::update::Outcome;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn edit(section_id: &str, content: &str) -> Edit {
    Edit {
        section_id: section_id.to_string(),
        content: content.to_string(),
        after_line: None,
        after_heading: None,
        file: None,
    }
}

#[test]
fn test_parse_plan_json() {
    let plan = EditPlan::from_json(
        r#"{"edits": [
            {"section_id": "BADGES", "content": "b", "after_line": 1},
            {"section_id": "SCRIPTS_SECTION", "content": "s", "after_line": "", "file": "docs/DEV.md"},
            {"section_id": "TOC", "content": "t", "after_heading": "Contents"}
        ]}"#,
    )
    .unwrap();

    assert_eq!(plan.edits.len(), 3);
    assert_eq!(plan.edits[0].after_line, Some(LinePosition::Number(1)));
    assert_eq!(plan.edits[1].after_line, Some(LinePosition::Text(String::new())));
    assert_eq!(plan.edits[1].file.as_deref(), Some(Path::new("docs/DEV.md")));
    assert_eq!(plan.edits[2].after_heading.as_deref(), Some("Contents"));
}

#[test]
fn test_unusable_after_line_falls_back_to_default_placement() {
    let plan = EditPlan::from_json(
        r#"{"edits": [
            {"section_id": "A", "content": "X", "after_line": -1},
            {"section_id": "B", "content": "Y", "after_line": 1.5},
            {"section_id": "C", "content": "Z", "after_line": 100000000000000000000000}
        ]}"#,
    )
    .unwrap();

    for edit in &plan.edits {
        assert!(matches!(edit.after_line, Some(LinePosition::Other(_))));
        let request = edit.to_request(Path::new("README.md")).unwrap();
        assert!(request.anchor().is_none());
    }
}

#[test]
fn test_invalid_json_is_plan_error() {
    assert!(matches!(
        EditPlan::from_json("{\"edits\": [{\"content\": \"x\"}]}"),
        Err(Error::Plan(_))
    ));
}

#[test]
fn test_multiple_sections_in_one_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("README.md");
    fs::write(&path, "# Project\n\nBody.\n").unwrap();

    let mut badges = edit("BADGES", "badges");
    badges.after_line = Some(LinePosition::Text("1".to_string()));
    let plan = EditPlan {
        edits: vec![badges, edit("SCRIPTS_SECTION", "scripts")],
    };

    let reports = plan.apply(dir.path(), Path::new("README.md"), false).unwrap();

    assert_eq!(reports.len(), 2);
    assert!(reports.iter().all(|r| r.outcome == Outcome::Created && r.written));
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "# Project\n<!-- START_SECTION:BADGES_SECTION -->\nbadges\n<!-- END_SECTION:BADGES_SECTION -->\n\nBody.\n\n<!-- START_SECTION:SCRIPTS_SECTION -->\nscripts\n<!-- END_SECTION:SCRIPTS_SECTION -->"
    );

    let again = plan.apply(dir.path(), Path::new("README.md"), false).unwrap();
    assert!(again.iter().all(|r| r.outcome == Outcome::Unchanged && !r.written));
}

#[test]
fn test_edits_target_their_own_files() {
    let dir = tempdir().unwrap();
    let mut other = edit("X", "other");
    other.file = Some("docs/OTHER.md".into());
    fs::create_dir(dir.path().join("docs")).unwrap();

    let plan = EditPlan {
        edits: vec![edit("X", "main"), other],
    };
    let reports = plan.apply(dir.path(), Path::new("README.md"), false).unwrap();

    assert_eq!(reports[0].file, dir.path().join("README.md"));
    assert_eq!(reports[1].file, dir.path().join("docs/OTHER.md"));
    assert!(fs::read_to_string(dir.path().join("README.md"))
        .unwrap()
        .contains("\nmain\n"));
    assert!(fs::read_to_string(dir.path().join("docs/OTHER.md"))
        .unwrap()
        .contains("\nother\n"));
}

#[test]
fn test_invalid_edit_aborts_before_writing() {
    let dir = tempdir().unwrap();
    let plan = EditPlan {
        edits: vec![edit("X", "fine"), edit("Y", "")],
    };

    let err = plan
        .apply(dir.path(), Path::new("README.md"), false)
        .unwrap_err();

    assert!(matches!(err, Error::Plan(ref msg) if msg.starts_with("edit 2")));
    assert!(!dir.path().join("README.md").exists());
}

#[test]
fn test_dry_run_reports_without_writing() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("README.md");
    fs::write(&path, "# Project\n").unwrap();

    let plan = EditPlan {
        edits: vec![edit("X", "x")],
    };
    let reports = plan.apply(dir.path(), Path::new("README.md"), true).unwrap();

    assert_eq!(reports[0].outcome, Outcome::Created);
    assert!(!reports[0].written);
    assert_eq!(fs::read_to_string(&path).unwrap(), "# Project\n");
}

#[test]
fn test_load_plan_from_file() {
    let dir = tempdir().unwrap();
    let plan_path = dir.path().join("plan.json");
    let plan = EditPlan {
        edits: vec![edit("X", "x")],
    };
    fs::write(&plan_path, serde_json::to_string_pretty(&plan).unwrap()).unwrap();

    let loaded = EditPlan::load(&plan_path).unwrap();
    assert_eq!(loaded.edits, plan.edits);
}
