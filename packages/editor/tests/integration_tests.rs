//! Integration tests for the editor crate

use pagewright_catalog::BlockCatalog;
use pagewright_document::{starter_document, PageDocument, Props, Site, SiteData, TemplateSeed};
use pagewright_editor::{
    BlockBounds, ContentGenerator, EditCommand, EditSession, EditorError, FileSiteStore,
    GenerateError, MemorySiteStore, SaveStatus, SiteStore,
};
use serde_json::json;
use std::sync::Arc;

fn session() -> EditSession {
    EditSession::new(Arc::new(BlockCatalog::builtin()), PageDocument::new())
}

fn insert_at(session: &mut EditSession, definition_id: &str, index: usize) -> String {
    session
        .execute(EditCommand::InsertBlock {
            definition_id: definition_id.to_string(),
            index: Some(index),
        })
        .unwrap();
    session.selected().unwrap().to_string()
}

fn types(session: &EditSession) -> Vec<&str> {
    session
        .document()
        .blocks()
        .iter()
        .map(|b| b.block_type.as_str())
        .collect()
}

#[test]
fn test_insert_hero_then_undo() {
    let mut session = session();
    insert_at(&mut session, "hero-section", 0);

    let hero = &session.document().blocks()[0];
    assert_eq!(hero.block_type, "hero");
    assert_eq!(hero.props["title"], "Welcome to Our Business");
    assert!(session.is_dirty());

    assert!(session.undo());
    assert!(session.document().is_empty());
    assert!(!session.can_undo());

    assert!(session.redo());
    assert_eq!(types(&session), vec!["hero"]);
}

#[test]
fn test_inserts_at_front_reverse_order() {
    let mut session = session();
    insert_at(&mut session, "single-image", 0);
    insert_at(&mut session, "spacer", 0);
    insert_at(&mut session, "text-block", 0);

    assert_eq!(types(&session), vec!["text", "spacer", "image"]);
}

#[test]
fn test_duplicate_inserts_after_original() {
    let mut session = session();
    let a = insert_at(&mut session, "hero-section", 0);
    let b = insert_at(&mut session, "text-block", 1);
    insert_at(&mut session, "spacer", 2);

    session
        .execute(EditCommand::DuplicateBlock { block_id: b.clone() })
        .unwrap();

    let doc = session.document();
    assert_eq!(doc.len(), 4);
    assert_eq!(doc.blocks()[0].id, a);
    assert_eq!(doc.blocks()[1].id, b);
    assert_eq!(doc.blocks()[2].block_type, "text");
    assert_ne!(doc.blocks()[2].id, b);
    assert_eq!(doc.blocks()[2].props, doc.blocks()[1].props);
    assert_eq!(session.selected(), Some(doc.blocks()[2].id.as_str()));
}

#[test]
fn test_locked_block_survives_delete() {
    let mut session = session();
    let id = insert_at(&mut session, "hero-section", 0);
    session
        .execute(EditCommand::ToggleLock { block_id: id.clone() })
        .unwrap();
    let levels = session.history().undo_levels();

    let changed = session
        .execute(EditCommand::RemoveBlock { block_id: id.clone() })
        .unwrap();

    assert!(!changed);
    assert!(session.document().contains(&id));
    assert_eq!(session.history().undo_levels(), levels);
}

#[test]
fn test_move_to_same_index_records_nothing() {
    let mut session = session();
    insert_at(&mut session, "hero-section", 0);
    insert_at(&mut session, "text-block", 1);
    let levels = session.history().undo_levels();
    let revision = session.revision();

    assert!(!session.execute(EditCommand::MoveBlock { from: 1, to: 1 }).unwrap());
    assert_eq!(session.history().undo_levels(), levels);
    assert_eq!(session.revision(), revision);

    assert!(session.execute(EditCommand::MoveBlock { from: 1, to: 0 }).unwrap());
    assert_eq!(types(&session), vec!["text", "hero"]);
}

#[test]
fn test_new_edit_discards_redo() {
    let mut session = session();
    insert_at(&mut session, "hero-section", 0);
    insert_at(&mut session, "text-block", 1);

    session.undo();
    assert!(session.can_redo());

    insert_at(&mut session, "spacer", 1);
    assert!(!session.can_redo());
    assert!(!session.redo());
    assert_eq!(types(&session), vec!["hero", "spacer"]);
}

#[test]
fn test_history_limit_evicts_oldest() {
    let catalog = Arc::new(BlockCatalog::builtin());
    let mut session = EditSession::with_history_limit(catalog, PageDocument::new(), 5);

    for i in 0..10 {
        insert_at(&mut session, "spacer", i);
    }

    let mut undos = 0;
    while session.undo() {
        undos += 1;
    }
    assert_eq!(undos, 4);
    assert_eq!(session.document().len(), 6);
}

#[test]
fn test_drag_and_drop_inserts_between_blocks() {
    let mut session = session();
    insert_at(&mut session, "hero-section", 0);
    insert_at(&mut session, "text-block", 1);

    let bounds = [BlockBounds::new(100.0, 400.0), BlockBounds::new(500.0, 200.0)];
    assert_eq!(session.drag_over(520.0, 100.0, &bounds), Some(1));
    assert_eq!(
        session.render_context().drop_indicator_top.as_deref(),
        Some("50%")
    );

    let payload = serde_json::to_string(
        session.catalog().definition("newsletter-signup").unwrap(),
    )
    .unwrap();
    let id = session.drop_payload(&payload).unwrap();

    assert_eq!(types(&session), vec!["hero", "newsletter", "text"]);
    assert_eq!(session.selected(), Some(id.as_str()));
    assert_eq!(session.render_context().drop_indicator_top, None);

    session.undo();
    assert_eq!(types(&session), vec!["hero", "text"]);
}

#[test]
fn test_drop_without_drag_over_appends() {
    let mut session = session();
    insert_at(&mut session, "hero-section", 0);

    let payload = serde_json::to_string(session.catalog().definition("spacer").unwrap()).unwrap();
    session.drop_payload(&payload).unwrap();

    assert_eq!(types(&session), vec!["hero", "spacer"]);
}

#[test]
fn test_dropped_props_come_from_catalog() {
    let mut session = session();
    let payload = json!({
        "id": "hero-section",
        "type": "hero",
        "category": "content",
        "name": "Hero Section",
        "defaultProps": { "bogus": 1 }
    })
    .to_string();

    let id = session.drop_payload(&payload).unwrap();
    let block = session.document().block(&id).unwrap();

    assert!(!block.props.is_empty());
    for key in block.props.keys() {
        assert!(session.catalog().recognizes("hero", key), "{}", key);
    }
}

#[test]
fn test_preview_disables_drag() {
    let mut session = session();
    session.set_preview_mode(true);

    assert_eq!(session.drag_over_end_zone(), None);
    let payload = serde_json::to_string(session.catalog().definition("spacer").unwrap()).unwrap();
    assert!(session.drop_payload(&payload).is_none());
    assert!(session.document().is_empty());
}

#[test]
fn test_stale_save_is_ignored() {
    let mut session = session();
    insert_at(&mut session, "hero-section", 0);
    let (first, _) = session.prepare_save();

    insert_at(&mut session, "text-block", 1);
    let (second, data) = session.prepare_save();
    assert_eq!(data.blocks.len(), 2);

    assert!(session.complete_save::<String>(second, Ok(())));
    assert!(!session.complete_save(first, Err("network")));

    assert!(matches!(session.save_status(), SaveStatus::Saved { .. }));
    assert!(!session.is_dirty());
}

#[test]
fn test_save_to_file_store_and_reopen() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let mut store = FileSiteStore::new(dir.path());

    let seed = TemplateSeed::new("Bakery", "business", "Fresh bread every morning");
    let site = Site::new(7, "Bakery", "bakery").with_document(&starter_document(Some(&seed)));
    store.create_site(&site)?;

    let catalog = Arc::new(BlockCatalog::builtin());
    let mut session = EditSession::open(catalog.clone(), &store.get_site(7)?);
    let hero = session.document().blocks()[0].id.clone();

    let mut props = Props::new();
    props.insert("title".into(), json!("Best Bread in Town"));
    session.commit_props(&hero, props)?;
    session.save_to(&mut store, 7)?;

    let reopened = EditSession::open(catalog, &store.get_site(7)?);
    assert_eq!(reopened.document().blocks(), session.document().blocks());
    assert_eq!(
        reopened.document().blocks()[0].props["title"],
        "Best Bread in Town"
    );
    Ok(())
}

#[test]
fn test_failed_save_keeps_dirty() {
    let mut session = session();
    insert_at(&mut session, "hero-section", 0);

    let mut store = MemorySiteStore::new();
    let result = session.save_to(&mut store, 42);

    assert!(matches!(result, Err(EditorError::Store(_))));
    assert!(matches!(session.save_status(), SaveStatus::Failed { .. }));
    assert!(session.is_dirty());
}

struct FixedGenerator;

impl ContentGenerator for FixedGenerator {
    fn generate(&self, block_type: &str, business_context: &str) -> Result<Props, GenerateError> {
        if block_type != "hero" {
            return Err(GenerateError::Unavailable(format!("no template for {}", block_type)));
        }
        let mut props = Props::new();
        props.insert("title".into(), json!(format!("{} you can trust", business_context)));
        props.insert("mood".into(), json!("upbeat"));
        Ok(props)
    }
}

#[test]
fn test_generated_content_is_one_undo_step() {
    let mut session = session();
    let id = insert_at(&mut session, "hero-section", 0);

    assert!(session.generate_content(&FixedGenerator, &id, "Plumbing").unwrap());
    let block = session.document().block(&id).unwrap();
    assert_eq!(block.props["title"], "Plumbing you can trust");
    assert!(!block.props.contains_key("mood"));

    session.undo();
    assert_eq!(
        session.document().block(&id).unwrap().props["title"],
        "Welcome to Our Business"
    );
}

#[test]
fn test_generator_errors_propagate() {
    let mut session = session();
    let id = insert_at(&mut session, "text-block", 0);

    let result = session.generate_content(&FixedGenerator, &id, "Plumbing");
    assert!(matches!(result, Err(EditorError::Generate(_))));

    let result = session.generate_content(&FixedGenerator, "ghost", "Plumbing");
    assert!(matches!(result, Err(EditorError::BlockNotFound(_))));
}

#[test]
fn test_append_generated_block_batches_history() {
    let mut session = session();
    insert_at(&mut session, "hero-section", 0);
    let levels = session.history().undo_levels();

    let mut props = Props::new();
    props.insert("title".into(), json!("Why Choose Us"));
    let id = session.append_generated_block("services-section", props).unwrap();

    assert_eq!(session.history().undo_levels(), levels + 1);
    assert_eq!(session.document().block(&id).unwrap().props["title"], "Why Choose Us");
    assert_eq!(session.history().undo_description(), Some("Generate services-section"));

    session.undo();
    assert_eq!(types(&session), vec!["hero"]);
}

#[test]
fn test_site_data_from_session_matches_wire_shape() {
    let mut session = session();
    insert_at(&mut session, "hero-section", 0);
    let (_, data) = session.prepare_save();

    let json = data.to_json().unwrap();
    let back = SiteData::from_json(&json).unwrap();
    assert_eq!(back, data);
    assert!(json.contains("\"globalStyles\""));
}
