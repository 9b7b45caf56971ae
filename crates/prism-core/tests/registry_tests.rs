use prism_core::material::{Material, MaterialSet};
use prism_core::registry::{Action, ClickableEntry, ClickableRegistry, Command, Direction};
use prism_core::scene::{Node, NodeId, Scene};
use prism_core::PrismError;

fn entry(target: NodeId, action: Action) -> ClickableEntry {
    ClickableEntry {
        target,
        default: Material::basic(0xaaaaaa).into(),
        highlighted: Material::basic(0xeeeeee).into(),
        action,
    }
}

fn materials(scene: &Scene, id: NodeId) -> MaterialSet {
    scene.get(id).map(|n| n.materials.clone()).unwrap_or_default()
}

#[test]
fn duplicate_target_is_rejected() {
    let mut scene = Scene::new();
    let node = scene.add(scene.root(), Node::group("picture"));
    let mut registry = ClickableRegistry::new();
    registry.register(entry(node, Action::url("https://a.example"))).unwrap();
    let err = registry
        .register(entry(node, Action::url("https://b.example")))
        .unwrap_err();
    assert!(matches!(err, PrismError::DuplicateTarget(id) if id == node));
    assert_eq!(registry.len(), 1);
}

#[test]
fn lookup_matches_target_and_its_descendants() {
    let mut scene = Scene::new();
    let side = scene.add(scene.root(), Node::group("side"));
    let picture = scene.add(side, Node::group("picture"));
    let label = scene.add(picture, Node::group("label"));
    let mut registry = ClickableRegistry::new();
    let id = registry.register(entry(picture, Action::Url(None))).unwrap();

    assert_eq!(registry.lookup(&scene, picture), Some(id));
    assert_eq!(registry.lookup(&scene, label), Some(id));
    assert_eq!(registry.lookup(&scene, side), None);
}

#[test]
fn lookup_prefers_nearest_registered_ancestor() {
    let mut scene = Scene::new();
    let outer = scene.add(scene.root(), Node::group("outer"));
    let inner = scene.add(outer, Node::group("inner"));
    let leaf = scene.add(inner, Node::group("leaf"));
    let mut registry = ClickableRegistry::new();
    let outer_id = registry
        .register(entry(outer, Action::Command(Command::FunFact)))
        .unwrap();
    let inner_id = registry
        .register(entry(inner, Action::Command(Command::Navigate(Direction::Next))))
        .unwrap();

    assert_eq!(registry.lookup(&scene, leaf), Some(inner_id));
    assert_eq!(registry.lookup(&scene, outer), Some(outer_id));
}

#[test]
fn scene_root_never_matches() {
    let mut scene = Scene::new();
    let child = scene.add(scene.root(), Node::group("child"));
    let mut registry = ClickableRegistry::new();
    registry.register(entry(scene.root(), Action::Url(None))).unwrap();
    assert_eq!(registry.lookup(&scene, child), None);
    assert_eq!(registry.lookup(&scene, scene.root()), None);
}

#[test]
fn highlight_and_reset_swap_material_sets() {
    let mut scene = Scene::new();
    let a = scene.add(scene.root(), Node::group("a"));
    let b = scene.add(scene.root(), Node::group("b"));
    let mut registry = ClickableRegistry::new();
    let ia = registry.register(entry(a, Action::Url(None))).unwrap();
    registry.register(entry(b, Action::Url(None))).unwrap();

    registry.highlight(&mut scene, ia);
    assert_eq!(materials(&scene, a), MaterialSet::from(Material::basic(0xeeeeee)));
    assert!(materials(&scene, b).is_empty());

    registry.reset_all(&mut scene);
    assert_eq!(materials(&scene, a), MaterialSet::from(Material::basic(0xaaaaaa)));
    assert_eq!(materials(&scene, b), MaterialSet::from(Material::basic(0xaaaaaa)));
}

#[test]
fn url_none_is_inert() {
    assert!(Action::Url(None).is_inert());
    assert!(!Action::url("https://musicmetrics.app").is_inert());
    assert!(!Action::Command(Command::FunFact).is_inert());
}
