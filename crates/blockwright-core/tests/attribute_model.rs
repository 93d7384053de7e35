use blockwright_core::{
    AttrKind, AttrSpec, AttrValue, AttributeBag, AttributePatch, AttributeSchema,
};
use rstest::rstest;

fn embed_schema() -> AttributeSchema {
    AttributeSchema::new()
        .with("link", AttrSpec::text().with_default(""))
        .with("title", AttrSpec::text().with_default("Frame title here"))
        .with("showTitle", AttrSpec::flag().with_default(false))
}

#[rstest]
#[case("link", AttrValue::Text(String::new()))]
#[case("title", AttrValue::Text("Frame title here".into()))]
#[case("showTitle", AttrValue::Flag(false))]
fn seeded_bag_matches_declared_defaults(#[case] name: &str, #[case] expected: AttrValue) {
    let bag = AttributeBag::from_schema(&embed_schema());
    assert_eq!(bag.get(name), Some(&expected));
}

#[rstest]
#[case(AttrKind::Text, AttrValue::Text(String::new()))]
#[case(AttrKind::Flag, AttrValue::Flag(false))]
fn kinds_fall_back_to_empty_values(#[case] kind: AttrKind, #[case] expected: AttrValue) {
    assert_eq!(kind.empty_value(), expected);
}

#[test]
fn successive_patches_accumulate() {
    let mut bag = AttributeBag::from_schema(&embed_schema());

    bag.merge(AttributePatch::single("title", "New"));
    bag.merge(AttributePatch::single("link", "http://y"));

    assert_eq!(bag.text("title"), "New");
    assert_eq!(bag.text("link"), "http://y");
    assert!(!bag.flag("showTitle"));
}

#[test]
fn patch_with_several_fields_merges_all_of_them() {
    let mut bag = AttributeBag::from_schema(&embed_schema());

    bag.merge(
        AttributePatch::new()
            .with("title", "T")
            .with("showTitle", true),
    );

    assert_eq!(bag.text("title"), "T");
    assert!(bag.flag("showTitle"));
    assert_eq!(bag.text("link"), "");
}

#[test]
fn schema_check_runs_before_any_merge() {
    let schema = embed_schema();
    let mut bag = AttributeBag::from_schema(&schema);

    let bad = AttributePatch::single("showTitle", "not-a-flag");
    assert!(schema.check(&bad).is_err());

    // The host only merges checked patches; the bag is untouched here.
    assert!(!bag.flag("showTitle"));

    let good = AttributePatch::single("showTitle", true);
    schema.check(&good).expect("declared flag field");
    bag.merge(good);
    assert!(bag.flag("showTitle"));
}

#[test]
fn bag_serde_roundtrip_preserves_order_and_values() {
    let mut bag = AttributeBag::from_schema(&embed_schema());
    bag.merge(AttributePatch::single("link", "http://x"));

    let json = serde_json::to_string(&bag).expect("serialize bag");
    let restored: AttributeBag = serde_json::from_str(&json).expect("deserialize bag");

    assert_eq!(restored, bag);
    let names: Vec<&str> = restored.iter().map(|(name, _)| name).collect();
    assert_eq!(names, vec!["link", "title", "showTitle"]);
}
