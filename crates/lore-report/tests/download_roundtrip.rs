//! A downloaded report reads back byte-for-byte.

use chrono::NaiveDate;
use lore_core::{KnowledgeLevel, LearnerProfile, PreferredFormat, ResearchBundle, SourceResult, Topic};
use lore_report::{ReportAssembler, SessionMemory, export_report};
use pretty_assertions::assert_eq;

fn research() -> ResearchBundle {
    ResearchBundle {
        web: SourceResult::new(
            "Quantum computing uses qubits.",
            "https://en.wikipedia.org/wiki/Quantum_computing",
        ),
        video: SourceResult::new(
            "This video titled 'Quantum Computing Explained' provides an introduction to Quantum Computing using real-world examples and visuals.",
            "https://www.youtube.com/embed/jHoEjvuPoB8",
        ),
        academic: SourceResult::new(
            "Quantum supremacy using a programmable superconducting processor — No abstract available.",
            "https://www.semanticscholar.org/paper/abc",
        ),
    }
}

#[test]
fn exported_file_matches_report() {
    let dir = tempfile::tempdir().unwrap();
    let topic = Topic::new("Quantum Computing").unwrap();
    let profile = LearnerProfile::from_inputs(
        Some("Understand qubits"),
        Some("Algorithms"),
        KnowledgeLevel::Intermediate,
        PreferredFormat::Video,
        Some("How is superposition used?"),
    );
    let report = ReportAssembler::default().assemble(
        &topic,
        &profile,
        &research(),
        NaiveDate::from_ymd_opt(2024, 11, 30).unwrap(),
    );

    let path = export_report(&dir.path().join("reports"), &topic, &report).unwrap();

    assert_eq!(
        path.file_name().unwrap().to_str().unwrap(),
        "Quantum_Computing_learning_report.txt"
    );
    assert_eq!(std::fs::read_to_string(&path).unwrap(), report.as_str());
}

#[test]
fn identical_inputs_render_identical_reports() {
    let topic = Topic::new("Quantum Computing").unwrap();
    let profile = LearnerProfile::default();
    let date = NaiveDate::from_ymd_opt(2024, 11, 30).unwrap();
    let assembler = ReportAssembler::default();

    let first = assembler.assemble(&topic, &profile, &research(), date);
    let second = assembler.assemble(&topic, &profile, &research(), date);
    assert_eq!(first.as_str().as_bytes(), second.as_str().as_bytes());
}

#[test]
fn osmosis_web_section_cites_encyclopedia() {
    let topic = Topic::new("Osmosis").unwrap();
    let research = ResearchBundle {
        web: SourceResult::new("Osmosis is...", "https://en.wikipedia.org/wiki/Osmosis"),
        video: SourceResult::unlinked("No relevant videos found."),
        academic: SourceResult::new(
            "No academic extracts found.",
            "https://scholar.google.com/scholar?q=Osmosis",
        ),
    };
    let report = ReportAssembler::default().assemble(
        &topic,
        &LearnerProfile::default(),
        &research,
        NaiveDate::from_ymd_opt(2024, 11, 30).unwrap(),
    );

    assert!(report.as_str().contains(
        "## Web Content Summary\nOsmosis is...\n\n**Citation:** [https://en.wikipedia.org/wiki/Osmosis](https://en.wikipedia.org/wiki/Osmosis)\n"
    ));
    assert!(report.as_str().contains("## Video Resource\nNo relevant videos found.\n"));

    let mut memory = SessionMemory::new();
    memory.put(topic.clone(), report.clone());
    assert_eq!(memory.get(&topic), Some(&report));
}
