use glam::Vec3;
use prism_core::constants::FALLBACK_ADVANCE_EM;
use prism_core::loading::{LoadProgress, LoadingManager};
use prism_core::scene::NodeId;
use prism_core::text::{
    layout, DeferredText, FallbackMetrics, FontMetrics, TextRequest, TextStyle, Typeface,
};
use prism_core::PrismError;

const FACE: &str = r#"{
    "familyName": "Test Sans",
    "resolution": 1000,
    "glyphs": {
        "a": { "ha": 500, "o": "m 0 0 l 1 1" },
        "b": { "ha": 600 },
        "?": { "ha": 450 },
        " ": { "ha": 250 }
    }
}"#;

#[test]
fn typeface_advances_are_normalised_by_resolution() {
    let face = Typeface::from_json(FACE).unwrap();
    assert_eq!(face.glyph_count(), 4);
    assert!((face.advance_em('a') - 0.5).abs() < 1e-6);
    assert!((face.text_width("ab", 0.1) - 0.11).abs() < 1e-6);
    assert!((face.text_width("a a", 1.0) - 1.25).abs() < 1e-6);
}

#[test]
fn missing_glyph_uses_question_mark_advance() {
    let face = Typeface::from_json(FACE).unwrap();
    assert!((face.advance_em('Z') - 0.45).abs() < 1e-6);
}

#[test]
fn malformed_and_empty_typefaces_are_errors() {
    assert!(matches!(
        Typeface::from_json("[]"),
        Err(PrismError::Typeface(_))
    ));
    assert!(matches!(
        Typeface::from_json(r#"{ "resolution": 1000, "glyphs": {} }"#),
        Err(PrismError::EmptyTypeface)
    ));
}

#[test]
fn fallback_metrics_use_fixed_advance() {
    let metrics = FallbackMetrics::default();
    let width = metrics.text_width("Projects", 0.08);
    assert!((width - 8.0 * FALLBACK_ADVANCE_EM * 0.08).abs() < 1e-6);
}

#[test]
fn layout_measures_content() {
    let shape = layout(&FallbackMetrics { advance_em: 0.5 }, "abcd", 0.05, 0.005);
    assert_eq!(shape.content, "abcd");
    assert!((shape.width - 0.1).abs() < 1e-6);
    assert_eq!(shape.thickness, 0.005);
}

#[test]
fn deferred_text_drains_in_order() {
    let mut queue = DeferredText::default();
    for content in ["first", "second"] {
        queue.push(TextRequest {
            parent: NodeId::ROOT,
            content: content.into(),
            size: 0.05,
            thickness: 0.005,
            offset: Vec3::ZERO,
            style: TextStyle::Plain,
            materials: Default::default(),
        });
    }
    assert_eq!(queue.len(), 2);
    let drained: Vec<_> = queue.drain().into_iter().map(|r| r.content).collect();
    assert_eq!(drained, vec!["first", "second"]);
    assert!(queue.is_empty());
}

#[test]
fn plain_text_is_centred_on_its_offset() {
    let mut scene = prism_core::scene::Scene::new();
    let metrics = FallbackMetrics::default();
    let request = TextRequest {
        parent: scene.root(),
        content: "Socials".into(),
        size: 0.05,
        thickness: 0.005,
        offset: Vec3::new(0.0, -0.1, 0.0),
        style: TextStyle::Plain,
        materials: Default::default(),
    };
    let id = prism_core::factory::materialize_text(&mut scene, &metrics, &request);
    let width = metrics.text_width("Socials", 0.05);
    let position = scene.get(id).unwrap().transform.position;
    assert!((position.x + width / 2.0).abs() < 1e-6);
    assert_eq!(position.y, -0.1);
}

#[test]
fn loading_fires_once_after_last_asset() {
    let mut loading = LoadingManager::new();
    loading.track("font");
    loading.track("wood");
    loading.track("font");
    assert_eq!(loading.pending().len(), 2);
    assert_eq!(loading.complete("wood"), LoadProgress::Pending(1));
    assert!(!loading.is_loaded());
    assert_eq!(loading.complete("font"), LoadProgress::AllLoaded);
    assert!(loading.is_loaded());
    assert_eq!(loading.complete("font"), LoadProgress::Unchanged);
    assert_eq!(loading.complete("unknown"), LoadProgress::Unchanged);
}
