//! Repository behavior over in-memory slots

use notekeeper::domain::{NoteFields, NotePatch};
use notekeeper::error::{EntityKind, NotekeeperError};
use notekeeper::infrastructure::{MemorySlotStorage, SlotStorage, Store, DEFAULT_STORE_SLOT};
use notekeeper::Repository;
use std::collections::HashSet;

fn open() -> (MemorySlotStorage, Repository<MemorySlotStorage>) {
    let slots = MemorySlotStorage::new();
    let repo = Repository::open(Store::new(slots.clone(), DEFAULT_STORE_SLOT)).unwrap();
    (slots, repo)
}

fn assert_not_found(result: Result<impl std::fmt::Debug, NotekeeperError>, expected: EntityKind) {
    match result {
        Err(NotekeeperError::NotFound { kind, .. }) => assert_eq!(kind, expected),
        other => panic!("Expected {} NotFound, got {:?}", expected, other),
    }
}

#[test]
fn test_work_notebook_scenario() {
    let (_, repo) = open();

    let work = repo.create_notebook("Work").unwrap();
    let notebooks = repo.list_notebooks().unwrap();
    assert_eq!(notebooks.len(), 1);
    assert_eq!(notebooks[0].name, "Work");
    assert!(notebooks[0].notes.is_empty());

    let a = repo
        .create_note(&work.id, NoteFields::new("A", "x"))
        .unwrap();
    let notes = repo.list_notes(&work.id).unwrap();
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].title, "A");
    assert_eq!(notes[0].text, "x");
    assert_eq!(notes[0].notebook_id, work.id);
    assert!(notes[0].posted_on > 0);

    let b = repo
        .create_note(&work.id, NoteFields::new("B", ""))
        .unwrap();
    let titles: Vec<String> = repo
        .list_notes(&work.id)
        .unwrap()
        .into_iter()
        .map(|n| n.title)
        .collect();
    assert_eq!(titles, vec!["B", "A"]);

    let remaining = repo.delete_note(&work.id, &a.id).unwrap();
    assert_eq!(remaining, vec![b.clone()]);
    assert_eq!(repo.list_notes(&work.id).unwrap(), vec![b]);

    repo.delete_notebook(&work.id).unwrap();
    assert!(repo.list_notebooks().unwrap().is_empty());
}

#[test]
fn test_ids_pairwise_distinct_under_rapid_creation() {
    let (_, repo) = open();
    let mut ids = HashSet::new();

    for i in 0..20 {
        let notebook = repo.create_notebook(&format!("nb{}", i)).unwrap();
        assert!(ids.insert(notebook.id.clone()));
        for j in 0..10 {
            let note = repo
                .create_note(&notebook.id, NoteFields::new(format!("n{}", j), ""))
                .unwrap();
            assert!(ids.insert(note.id));
        }
    }

    assert_eq!(ids.len(), 20 * 11);
}

#[test]
fn test_ids_distinct_across_reopened_repositories() {
    let slots = MemorySlotStorage::new();
    let mut ids = HashSet::new();

    for _ in 0..5 {
        let repo = Repository::open(Store::new(slots.clone(), DEFAULT_STORE_SLOT)).unwrap();
        assert!(ids.insert(repo.create_notebook("x").unwrap().id));
    }
}

#[test]
fn test_notebooks_keep_creation_order_after_edits() {
    let (_, repo) = open();
    let first = repo.create_notebook("first").unwrap();
    let second = repo.create_notebook("second").unwrap();
    let third = repo.create_notebook("third").unwrap();

    repo.rename_notebook(&first.id, "renamed").unwrap();
    repo.create_note(&second.id, NoteFields::default()).unwrap();

    let ids: Vec<String> = repo
        .list_notebooks()
        .unwrap()
        .into_iter()
        .map(|nb| nb.id)
        .collect();
    assert_eq!(ids, vec![first.id, second.id, third.id]);
}

#[test]
fn test_deleting_notebook_leaves_no_orphan_notes() {
    let (_, repo) = open();
    let work = repo.create_notebook("Work").unwrap();
    let home = repo.create_notebook("Home").unwrap();
    let doomed = repo.create_note(&work.id, NoteFields::new("A", "")).unwrap();
    repo.create_note(&home.id, NoteFields::new("B", "")).unwrap();

    repo.delete_notebook(&work.id).unwrap();

    for notebook in repo.list_notebooks().unwrap() {
        for note in repo.list_notes(&notebook.id).unwrap() {
            assert_ne!(note.notebook_id, work.id);
        }
    }
    assert_not_found(repo.get_note(&doomed.id), EntityKind::Note);
    assert_not_found(repo.list_notes(&work.id), EntityKind::Notebook);
}

#[test]
fn test_repeated_reads_are_equal() {
    let (_, repo) = open();
    let work = repo.create_notebook("Work").unwrap();
    repo.create_note(&work.id, NoteFields::new("A", "x")).unwrap();

    assert_eq!(repo.list_notebooks().unwrap(), repo.list_notebooks().unwrap());
}

#[test]
fn test_update_and_rename_return_new_state() {
    let (_, repo) = open();
    let work = repo.create_notebook("Work").unwrap();
    let note = repo.create_note(&work.id, NoteFields::new("A", "x")).unwrap();

    let renamed = repo.rename_notebook(&work.id, "").unwrap();
    assert_eq!(renamed.name, "");
    assert_eq!(renamed.notes, vec![note.clone()]);

    let updated = repo
        .update_note(
            &note.id,
            NotePatch {
                title: Some("A2".to_string()),
                text: Some("y".to_string()),
            },
        )
        .unwrap();
    assert_eq!(updated.posted_on, note.posted_on);
    assert_eq!(repo.list_notes(&work.id).unwrap(), vec![updated]);
}

#[test]
fn test_missing_targets_are_not_found() {
    let (_, repo) = open();
    let work = repo.create_notebook("Work").unwrap();

    assert_not_found(
        repo.create_note("nope", NoteFields::default()),
        EntityKind::Notebook,
    );
    assert_not_found(repo.list_notes("nope"), EntityKind::Notebook);
    assert_not_found(repo.rename_notebook("nope", "x"), EntityKind::Notebook);
    assert_not_found(
        repo.update_note("nope", NotePatch::default()),
        EntityKind::Note,
    );
    assert_not_found(repo.delete_notebook("nope"), EntityKind::Notebook);
    assert_not_found(repo.delete_note("nope", "nope"), EntityKind::Notebook);
    assert_not_found(repo.delete_note(&work.id, "nope"), EntityKind::Note);
}

#[test]
fn test_operations_see_external_writes() {
    let (slots, repo) = open();
    repo.create_notebook("Work").unwrap();

    // Another writer replaces the slot between operations
    slots
        .set(
            DEFAULT_STORE_SLOT,
            r#"{"notebooks":[{"id":"9","name":"Other","notes":[]}]}"#,
        )
        .unwrap();

    let notebooks = repo.list_notebooks().unwrap();
    assert_eq!(notebooks.len(), 1);
    assert_eq!(notebooks[0].name, "Other");
}

#[test]
fn test_separate_slots_are_separate_stores() {
    let slots = MemorySlotStorage::new();
    let main = Repository::open(Store::new(slots.clone(), DEFAULT_STORE_SLOT)).unwrap();
    let archive = Repository::open(Store::new(slots.clone(), "archive")).unwrap();

    main.create_notebook("Work").unwrap();

    assert_eq!(main.list_notebooks().unwrap().len(), 1);
    assert!(archive.list_notebooks().unwrap().is_empty());
}

#[test]
fn test_stored_max_id_does_not_block_new_ids() {
    let slots = MemorySlotStorage::new();
    slots
        .set(
            DEFAULT_STORE_SLOT,
            r#"{"notebooks":[{"id":"9223372036854775807","name":"x","notes":[]}]}"#,
        )
        .unwrap();
    let repo = Repository::open(Store::new(slots, DEFAULT_STORE_SLOT)).unwrap();

    let first = repo.create_notebook("y").unwrap();
    let note = repo.create_note(&first.id, NoteFields::new("A", "")).unwrap();
    let second = repo.create_notebook("z").unwrap();

    let ids: HashSet<String> = repo
        .list_notebooks()
        .unwrap()
        .into_iter()
        .flat_map(|nb| std::iter::once(nb.id).chain(nb.notes.into_iter().map(|n| n.id)))
        .collect();
    assert_eq!(ids.len(), 4);
    assert!(ids.contains(&first.id));
    assert!(ids.contains(&note.id));
    assert!(ids.contains(&second.id));
}
