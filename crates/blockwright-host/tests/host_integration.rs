use blockwright_blocks::{EMBED_BLOCK_ID, EmbedBlock, builtins};
use blockwright_host::{BlockConfig, BlockRegistry, Document, HostConfig, HostError};

#[test]
fn test_embed_block_full_authoring_cycle() {
    // 1. Host bootstrap registers the builtins explicitly
    let mut registry = BlockRegistry::new();
    for (id, block) in builtins() {
        registry.register(id, block).expect("builtin registration");
    }
    assert!(registry.contains(EMBED_BLOCK_ID));

    // 2. Author inserts an embed frame; the bag carries schema defaults
    let mut instance = registry.create_instance(EMBED_BLOCK_ID).unwrap();
    assert_eq!(instance.attributes().text("title"), "Frame title here");
    assert_eq!(instance.attributes().text("link"), "");
    assert!(!instance.attributes().flag("showTitle"));

    // 3. Edit mode: each input change becomes a one-field patch
    let view = registry.render_edit(&instance).unwrap();
    let patch = view.patch_for("title-input", "Weekly report").unwrap();
    assert_eq!(patch.len(), 1);
    registry.apply_patch(&mut instance, patch).unwrap();

    let view = registry.render_edit(&instance).unwrap();
    let patch = view.patch_for("url-input", "http://example.com").unwrap();
    registry.apply_patch(&mut instance, patch).unwrap();

    // Dimension placeholders stay unbound
    assert!(view.patch_for("height-input", "50").is_none());

    // 4. Save mode: markup reflects the final bag, heading included even
    //    with showTitle=false
    let html = registry.save(&instance).unwrap().render();
    assert_eq!(
        html,
        r#"<div><h5>Weekly report</h5><iframe src="http://example.com"></iframe></div>"#
    );

    // 5. The edit view re-rendered from the same bag is unchanged
    assert_eq!(
        registry.render_edit(&instance).unwrap(),
        registry.render_edit(&instance).unwrap()
    );
}

#[test]
fn test_disabled_block_refuses_instantiation() {
    let mut config = HostConfig::default();
    config.blocks.insert(
        EMBED_BLOCK_ID.to_string(),
        BlockConfig {
            enabled: false,
            ..BlockConfig::default()
        },
    );

    let mut registry = BlockRegistry::with_config(config);
    registry
        .register(EMBED_BLOCK_ID, Box::new(EmbedBlock))
        .unwrap();

    let err = registry.create_instance(EMBED_BLOCK_ID).unwrap_err();
    assert!(matches!(err, HostError::BlockDisabled(_)));
}

#[test]
fn test_document_roundtrip_and_publish() {
    let mut registry = BlockRegistry::new();
    registry
        .register(EMBED_BLOCK_ID, Box::new(EmbedBlock))
        .unwrap();

    let mut document = Document::new();
    let mut instance = registry.create_instance(EMBED_BLOCK_ID).unwrap();
    let view = registry.render_edit(&instance).unwrap();
    registry
        .apply_patch(&mut instance, view.patch_for("url-input", "http://x").unwrap())
        .unwrap();
    document.push(instance);

    // Persist and reload through JSON, then publish
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("document.json");
    document.store(&path).unwrap();
    let restored = Document::load(&path).unwrap();
    assert_eq!(restored, document);

    let html = restored.publish(&registry).unwrap();
    assert_eq!(
        html,
        "<div><h5>Frame title here</h5><iframe src=\"http://x\"></iframe></div>\n"
    );
}

#[test]
fn test_publishing_an_unknown_block_fails() {
    let registry = BlockRegistry::new();
    let mut source = BlockRegistry::new();
    source
        .register(EMBED_BLOCK_ID, Box::new(EmbedBlock))
        .unwrap();

    let mut document = Document::new();
    document.push(source.create_instance(EMBED_BLOCK_ID).unwrap());

    // The document names a block type this registry never registered
    let err = document.publish(&registry).unwrap_err();
    assert!(matches!(err, HostError::UnknownBlock(_)));
}
