//! End-to-end: a session editing over the real filesystem backend, then a
//! second session hydrating from the same root and seeing the edits.

use std::time::{Duration, Instant};

use resumepad::model::{ExperiencePatch, PersonalInfoPatch, TemplateName};
use resumepad::session::{ResumeSession, SessionPhase};
use resumepad::store::FsBackend;

fn session_at(root: &std::path::Path) -> ResumeSession<FsBackend> {
    ResumeSession::new(FsBackend::new(root.to_path_buf()))
}

fn fire(session: &mut ResumeSession<FsBackend>) {
    session
        .tick_at(Instant::now() + Duration::from_secs(5))
        .unwrap();
}

#[test]
fn test_edits_survive_into_a_fresh_session() {
    let dir = tempfile::tempdir().unwrap();

    let mut first = session_at(dir.path());
    first.hydrate();
    assert_eq!(first.phase(), SessionPhase::Ready);

    first.update_personal_info(PersonalInfoPatch {
        full_name: Some("Robin Okafor".to_string()),
        email: Some("robin@example.com".to_string()),
        ..Default::default()
    });
    first.add_experience();
    let new_id = first.document().experience.last().unwrap().id.clone();
    first.update_experience(
        &new_id,
        ExperiencePatch {
            company: Some("Acme Robotics".to_string()),
            current: Some(true),
            ..Default::default()
        },
    );
    fire(&mut first);

    first.set_template(TemplateName::Modern);
    first.set_accent_color("#16a34a".to_string());
    drop(first);

    let mut second = session_at(dir.path());
    second.hydrate();

    let doc = second.document();
    assert_eq!(doc.personal_info.full_name, "Robin Okafor");
    assert_eq!(doc.personal_info.email, "robin@example.com");
    let restored = doc.experience.iter().find(|e| e.id == new_id).unwrap();
    assert_eq!(restored.company, "Acme Robotics");
    assert!(restored.current);

    assert_eq!(second.settings().template, TemplateName::Modern);
    assert_eq!(second.settings().accent_color, "#16a34a");
}

#[test]
fn test_profile_image_round_trips_through_its_own_entry() {
    let dir = tempfile::tempdir().unwrap();

    let mut first = session_at(dir.path());
    first.hydrate();
    first.set_profile_image("data:image/png;base64,iVBORw0KGgo=".to_string());
    first.toggle_profile_image();
    first.flush().unwrap();
    drop(first);

    // The document file itself never embeds the payload
    let doc_file = std::fs::read_to_string(dir.path().join("resume.json")).unwrap();
    assert!(!doc_file.contains("iVBORw0KGgo="));
    assert!(doc_file.contains("\"showProfileImage\":true"));

    let mut second = session_at(dir.path());
    second.hydrate();
    assert_eq!(
        second.document().profile_image,
        "data:image/png;base64,iVBORw0KGgo="
    );
    assert!(second.document().show_profile_image);
}

#[test]
fn test_unsaved_edits_are_lost_without_flush() {
    let dir = tempfile::tempdir().unwrap();

    let mut first = session_at(dir.path());
    first.hydrate();
    first.update_personal_info(PersonalInfoPatch {
        full_name: Some("Persisted".to_string()),
        ..Default::default()
    });
    fire(&mut first);

    // A second edit left pending when the session goes away
    first.update_personal_info(PersonalInfoPatch {
        full_name: Some("Never Written".to_string()),
        ..Default::default()
    });
    assert!(first.has_pending_save());
    drop(first);

    let mut second = session_at(dir.path());
    second.hydrate();
    assert_eq!(second.document().personal_info.full_name, "Persisted");
}

#[test]
fn test_corrupt_document_file_falls_back_to_seed() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("resume.json"), "{not json").unwrap();

    let mut session = session_at(dir.path());
    session.hydrate();
    assert_eq!(
        session.document().personal_info.full_name,
        "Jordan Mitchell"
    );

    // The session keeps working and can overwrite the bad file
    session.update_personal_info(PersonalInfoPatch {
        full_name: Some("Recovered".to_string()),
        ..Default::default()
    });
    session.flush().unwrap();

    let raw = std::fs::read_to_string(dir.path().join("resume.json")).unwrap();
    assert!(raw.contains("Recovered"));
}
