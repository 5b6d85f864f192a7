//! End-to-end integration test: configs/ -> load -> compose -> export,
//! running the shipped demo data through every template. The current year
//! is pinned so recency cutoffs stay deterministic.

use resume_forge::exporter::{self, ExportFormat, ExportOutput};
use resume_forge::{composer, store, templates};
use std::path::{Path, PathBuf};

const YEAR: i32 = 2026;

fn configs_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("configs")
}

fn render_markdown(template_key: &str) -> String {
    let bundle = store::load_bundle(&configs_dir().join("blocks.json")).unwrap();
    let template =
        templates::load_template(&configs_dir().join("templates"), template_key).unwrap();
    let resume = composer::compose(&bundle, &template, YEAR).unwrap();

    match exporter::export(ExportFormat::Markdown, &resume, None).unwrap() {
        ExportOutput::Inline(text) => text,
        ExportOutput::Written(path) => panic!("expected inline text, got {}", path.display()),
    }
}

#[test]
fn e2e_every_shipped_template_composes() {
    let bundle = store::load_bundle(&configs_dir().join("blocks.json")).unwrap();
    let keys = templates::list_templates(&configs_dir().join("templates")).unwrap();
    assert!(!keys.is_empty());

    for key in keys {
        let template = templates::load_template(&configs_dir().join("templates"), &key).unwrap();
        let resume = composer::compose(&bundle, &template, YEAR).unwrap();
        assert!(!resume.summary.is_empty(), "{} has an empty summary", key);
        assert!(!resume.skills.is_empty(), "{} selected no skills", key);
        assert!(!resume.experience.is_empty(), "{} selected no experience", key);
    }
}

#[test]
fn e2e_senior_template_hides_junior_history() {
    let text = render_markdown("senior_devops_standard");

    assert!(text.contains("# Alex Voronov"));
    assert!(text.contains("**Senior DevOps Engineer**"));
    // The sysadmin block carries hidden_for = ["senior", "blockchain"].
    assert!(!text.contains("Bright Web Agency"));
    assert!(text.contains("Nexus Payments"));
}

#[test]
fn e2e_fintech_template_excludes_legacy_and_old_roles() {
    let text = render_markdown("fintech_focused");

    assert!(text.contains("FinTech Infrastructure"));
    // Dropped twice over: the "legacy" tag and the 8-year cutoff.
    assert!(!text.contains("Bright Web Agency"));
    assert!(text.contains("Nexus Payments"));
}

#[test]
fn e2e_blockchain_template_ranks_current_role_first() {
    let text = render_markdown("blockchain_startup");

    let nexus = text.find("Nexus Payments").unwrap();
    let stakeworks = text.find("Stakeworks").unwrap();
    assert!(
        nexus < stakeworks,
        "ongoing role should render before finished ones"
    );
}

#[test]
fn e2e_build_writes_both_formats() {
    let bundle = store::load_bundle(&configs_dir().join("blocks.json")).unwrap();
    let template =
        templates::load_template(&configs_dir().join("templates"), "senior_devops_standard")
            .unwrap();
    let resume = composer::compose(&bundle, &template, YEAR).unwrap();
    let out = tempfile::tempdir().unwrap();

    let md_name = exporter::output_filename(&template, ExportFormat::Markdown, None);
    assert_eq!(md_name, "senior-devops-resume.md");
    let md_path = out.path().join(md_name);
    exporter::export(ExportFormat::Markdown, &resume, Some(&md_path)).unwrap();
    assert!(md_path.is_file());

    let pdf_name = exporter::output_filename(&template, ExportFormat::Pdf, None);
    let pdf_path = out.path().join(pdf_name);
    exporter::export(ExportFormat::Pdf, &resume, Some(&pdf_path)).unwrap();
    let bytes = std::fs::read(&pdf_path).unwrap();
    assert!(bytes.starts_with(b"%PDF"));
}
