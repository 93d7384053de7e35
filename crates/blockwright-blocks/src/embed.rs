//! The embed frame block
//!
//! Lets an author configure an embeddable iframe inside a document and
//! renders that iframe on the published page. The form offers a frame
//! title, the source URL, and height/width placeholders.

use blockwright_sdk::prelude::*;

/// Id the embed frame registers under.
pub const EMBED_BLOCK_ID: &str = "blockwright/embed-frame";

const ATTR_LINK: &str = "link";
const ATTR_TITLE: &str = "title";
const ATTR_SHOW_TITLE: &str = "showTitle";

/// The embed frame block.
///
/// Stateless: both renderers are pure functions of the attribute bag the
/// host passes in.
#[derive(Debug, Default, Clone, Copy)]
pub struct EmbedBlock;

impl BlockType for EmbedBlock {
    fn info(&self) -> BlockInfo {
        BlockInfo::new("Embed Frame")
            .icon("share")
            .category("common")
            .keyword("embed")
            .keyword("iframe")
            .keyword("frame")
            .description("Embed an external page in an iframe")
    }

    fn schema(&self) -> AttributeSchema {
        AttributeSchema::new()
            .with(ATTR_LINK, AttrSpec::text().with_default(""))
            .with(
                ATTR_TITLE,
                AttrSpec::text().with_default("Frame title here"),
            )
            // Collected and persisted, but consulted by neither renderer:
            // the saved heading always renders and the title input stays
            // editable.
            .with(ATTR_SHOW_TITLE, AttrSpec::flag().with_default(false))
    }

    fn edit(&self, attrs: &AttributeBag) -> EditView {
        EditView::new("block-embed-frame")
            .field_with_hint(
                "Title:",
                Control::text_input("title-input", attrs.text(ATTR_TITLE), ATTR_TITLE),
                "(empty to hide)",
            )
            .field(
                "URL",
                Control::url_input("url-input", attrs.text(ATTR_LINK), ATTR_LINK),
            )
            // Height/width are shown but wired to no attribute; change
            // events on them go nowhere.
            .field("Height:", Control::measure("height-input", "%"))
            .field("Width:", Control::measure("width-input", "%"))
    }

    fn save(&self, attrs: &AttributeBag) -> Markup {
        Markup::element("div")
            .child(Markup::element("h5").child(Markup::text(attrs.text(ATTR_TITLE))))
            .child(Markup::element("iframe").attr("src", attrs.text(ATTR_LINK)))
    }
}
