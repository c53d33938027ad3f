//! End-to-end redaction workflow over the public API: sequence a mixed
//! document list, draw on each raster page, bake, and hand the artifacts
//! back for persistence.

use blackout::{
    Document, Point, RedactError, RedactionController, ShapeKind, StrokeSize, Viewport,
};
use image::{Rgba, RgbaImage};

const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn scan(w: u32, h: u32) -> RgbaImage {
    RgbaImage::from_pixel(w, h, WHITE)
}

#[test]
fn redacts_a_queue_of_mixed_documents() {
    init_logging();

    let mut ctl = RedactionController::new(vec![
        Document::from_image("doc-1", "lab-report.png", scan(1000, 800)),
        Document::unsupported("doc-2", "discharge-summary.pdf", "application/pdf"),
        Document::from_pages("doc-3", "pathology.tiff", vec![scan(600, 400), scan(600, 400)]),
    ]);

    // Document 1: rectangle over the patient header, drawn at half zoom
    ctl.toggle_tool(ShapeKind::Rectangle);
    let half_zoom = Viewport::new(0.0, 0.0, 500.0, 400.0);
    ctl.pointer_down(half_zoom, Point::new(100.0, 100.0));
    ctl.pointer_move(half_zoom, Point::new(200.0, 150.0));
    ctl.pointer_up();

    let outcome = ctl.bake().expect("first document bake");
    assert_eq!(outcome.document_id, "doc-1");
    assert_eq!(outcome.image.get_pixel(300, 250), &BLACK);
    assert_eq!(outcome.image.get_pixel(450, 250), &WHITE);

    // Document 2 is not a raster: no surface, passes through unredacted
    assert!(ctl.next_document());
    assert!(matches!(
        ctl.redaction_availability(),
        Err(RedactError::UnsupportedDocument(_))
    ));
    assert!(ctl.render_preview().is_none());

    // Document 3: freehand stroke on page 2 only
    assert!(ctl.next_document());
    ctl.navigate_to_page(1).expect("page 2 exists");
    ctl.set_stroke_size(StrokeSize::Large);
    ctl.toggle_tool(ShapeKind::Rectangle); // deselect
    ctl.toggle_tool(ShapeKind::Freehand);

    let one_to_one = Viewport::new(0.0, 0.0, 600.0, 400.0);
    ctl.pointer_down(one_to_one, Point::new(100.0, 200.0));
    ctl.pointer_move(one_to_one, Point::new(300.0, 200.0));
    ctl.pointer_up();

    let outcome = ctl.bake().expect("multi-page bake");
    assert_eq!(outcome.page_index, 1);
    assert_eq!(outcome.image.get_pixel(200, 200), &BLACK);

    let doc = ctl.active_document().expect("active document");
    assert!(doc.page_redacted(1));
    assert!(!doc.page_redacted(0));

    // The baked page exports as PNG for the document store
    let png = doc.encode_page_png(1).expect("png export");
    let reloaded = Document::decode_image(&png).expect("decodes");
    assert_eq!(reloaded.get_pixel(200, 200), &BLACK);

    assert!(!ctl.next_document(), "end of the queue");
}
