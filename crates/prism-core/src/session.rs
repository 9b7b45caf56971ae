//! The interaction session: one explicit owner for every piece of state the
//! pointer handlers and the frame loop touch.
//!
//! Front-ends feed it [`PointerEvent`]s and call [`Session::frame`] once per
//! animation frame. Activations that need the host (opening a link, the
//! fun-fact fetch) are handed back as [`Activation`]s; carousel navigation
//! is handled in place.

use crate::carousel::Carousel;
use crate::config::AppConfig;
use crate::constants::{PRISM_COUNT, PRISM_ELEVATION};
use crate::content::{self, PrismContent};
use crate::drag::rotate_object;
use crate::error::{PrismError, Result};
use crate::factory::{self, Hud, Prism};
use crate::hover::{Cursor, HoverHighlighter};
use crate::loading::{LoadProgress, LoadingManager};
use crate::pointer::{PointerEvent, PointerPhase};
use crate::raycast::{Hit, Raycaster};
use crate::registry::{Action, ClickableRegistry, Command, Direction, EntryId};
use crate::scene::{NodeId, Scene};
use crate::spin::IdleSpin;
use crate::state::{Camera, Viewport};
use crate::text::{DeferredText, FallbackMetrics, FontMetrics, Typeface};
use glam::{Vec2, Vec3};

pub const FONT_ASSET: &str = "font";

/// A clickable fired on pointer down.
#[derive(Clone, Debug, PartialEq)]
pub struct Activation {
    pub entry: EntryId,
    pub action: Action,
}

impl Activation {
    /// Whether the host has to do something for this activation.
    pub fn needs_host(&self) -> bool {
        matches!(
            self.action,
            Action::Url(Some(_)) | Action::Command(Command::FunFact)
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameReport {
    pub cursor: Cursor,
    pub loaded: bool,
    pub animating: bool,
}

pub struct Session {
    config: AppConfig,
    scene: Scene,
    registry: ClickableRegistry,
    camera: Camera,
    viewport: Viewport,
    raycaster: Raycaster,
    prisms: Vec<Prism>,
    spins: Vec<IdleSpin>,
    carousel: Carousel,
    hud: Hud,
    hover: HoverHighlighter,
    deferred: DeferredText,
    loading: LoadingManager,
    textures: Vec<&'static str>,
    metrics: Option<Box<dyn FontMetrics>>,
    pointer_down: bool,
    last_pointer_x: f32,
    pointer: Option<Vec2>,
    grabbed: Option<usize>,
    cursor: Cursor,
}

impl Session {
    pub fn new(config: AppConfig, viewport: Viewport) -> Result<Self> {
        Self::with_content(config, viewport, &content::portfolio())
    }

    pub fn with_content(
        config: AppConfig,
        viewport: Viewport,
        prisms: &[PrismContent],
    ) -> Result<Self> {
        config.validate()?;
        if prisms.len() != PRISM_COUNT {
            return Err(PrismError::InvalidConfig(format!(
                "expected {PRISM_COUNT} prisms, got {}",
                prisms.len()
            )));
        }

        let mut scene = Scene::new();
        let mut registry = ClickableRegistry::new();
        let mut deferred = DeferredText::default();
        let mut loading = LoadingManager::new();
        loading.track(FONT_ASSET);
        let mut textures: Vec<&'static str> = prisms
            .iter()
            .flat_map(|p| &p.sides)
            .filter_map(|side| side.picture.as_ref().map(|pic| pic.texture))
            .chain(std::iter::once(factory::BOARD_TEXTURE))
            .collect();
        textures.sort_unstable();
        textures.dedup();
        for &key in &textures {
            loading.track(key);
        }

        let mut built = Vec::with_capacity(PRISM_COUNT);
        for content in prisms {
            let position = Vec3::new(0.0, PRISM_ELEVATION, 0.0);
            built.push(factory::build_prism(
                &mut scene,
                &mut registry,
                &mut deferred,
                content,
                position,
            )?);
        }
        let hud = factory::build_hud(&mut scene, &mut registry)?;

        let groups: [NodeId; PRISM_COUNT] = std::array::from_fn(|i| built[i].group);
        let interaction = &config.interaction;
        let mut carousel = Carousel::new(
            groups,
            interaction.slot_depths,
            interaction.tween_duration_ms,
        );
        carousel.place(&mut scene);

        let spins = (0..PRISM_COUNT)
            .map(|i| IdleSpin::new(interaction.base_spin, interaction.decay_for(i)))
            .collect();

        let camera = Camera::from_config(&config.scene, viewport.aspect());
        hud.follow(&mut scene, &camera);

        log::info!(
            "[load] built {} prisms, {} clickables, {} text items and {} textures pending",
            built.len(),
            registry.len(),
            deferred.len(),
            textures.len()
        );

        Ok(Self {
            config,
            scene,
            registry,
            camera,
            viewport,
            raycaster: Raycaster::default(),
            prisms: built,
            spins,
            carousel,
            hud,
            hover: HoverHighlighter::default(),
            deferred,
            loading,
            textures,
            metrics: None,
            pointer_down: false,
            last_pointer_x: 0.0,
            pointer: None,
            grabbed: None,
            cursor: Cursor::Default,
        })
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    pub fn registry(&self) -> &ClickableRegistry {
        &self.registry
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn prisms(&self) -> &[Prism] {
        &self.prisms
    }

    pub fn spin(&self, prism: usize) -> Option<&IdleSpin> {
        self.spins.get(prism)
    }

    pub fn carousel(&self) -> &Carousel {
        &self.carousel
    }

    pub fn hud(&self) -> &Hud {
        &self.hud
    }

    pub fn grabbed(&self) -> Option<usize> {
        self.grabbed
    }

    pub fn is_pointer_down(&self) -> bool {
        self.pointer_down
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn highlighted(&self) -> Option<EntryId> {
        self.hover.highlighted()
    }

    pub fn is_loaded(&self) -> bool {
        self.loading.is_loaded()
    }

    /// Texture keys the scene needs, each tracked until resolved.
    pub fn texture_keys(&self) -> &[&'static str] {
        &self.textures
    }

    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.viewport = Viewport::new(width, height);
        self.camera.aspect = self.viewport.aspect();
        self.hud.follow(&mut self.scene, &self.camera);
    }

    /// Ray hits under a client-space point, nearest first.
    pub fn hits_at(&self, x: f32, y: f32) -> Vec<Hit> {
        self.raycaster.pick(&self.scene, &self.camera, self.viewport, x, y)
    }

    pub fn handle_pointer(&mut self, event: PointerEvent, now_ms: f64) -> Option<Activation> {
        let Vec2 { x, y } = event.position;
        match event.phase {
            PointerPhase::Down => return self.pointer_down(x, y, now_ms),
            PointerPhase::Move => self.pointer_move(x, y),
            PointerPhase::Up => self.pointer_up(),
            PointerPhase::Leave => self.leave(),
        }
        None
    }

    /// Press: fire the clickable under the pointer and grab its prism.
    pub fn pointer_down(&mut self, x: f32, y: f32, now_ms: f64) -> Option<Activation> {
        self.pointer_down = true;
        self.last_pointer_x = x;
        self.pointer = Some(Vec2::new(x, y));

        let hit = self.hits_at(x, y).into_iter().next()?;
        self.grabbed = self.prism_containing(hit.node);

        let entry = self.registry.lookup(&self.scene, hit.node)?;
        let action = self.registry.get(entry)?.action.clone();
        if action.is_inert() {
            return None;
        }
        self.registry.restore(&mut self.scene, entry);
        self.hover.release(entry);
        log::info!("[click] entry {} -> {:?}", entry.index(), action);

        if let Action::Command(Command::Navigate(direction)) = action {
            self.navigate(direction, now_ms);
        }
        Some(Activation { entry, action })
    }

    pub fn pointer_move(&mut self, x: f32, y: f32) {
        self.pointer = Some(Vec2::new(x, y));
        if self.pointer_down {
            let delta = x - self.last_pointer_x;
            if let Some(i) = self.grabbed {
                self.spins[i].set_from_drag(delta);
                let group = self.prisms[i].group;
                rotate_object(
                    &mut self.scene,
                    Some(group),
                    delta,
                    self.config.interaction.drag_scale,
                );
            }
            self.last_pointer_x = x;
        } else {
            self.update_hover();
        }
    }

    /// Release. The grabbed prism keeps its last drag velocity.
    pub fn pointer_up(&mut self) {
        self.pointer_down = false;
        self.grabbed = None;
    }

    pub fn leave(&mut self) {
        self.pointer_up();
        self.pointer = None;
        self.cursor = self.hover.clear(&mut self.scene, &self.registry);
    }

    pub fn navigate(&mut self, direction: Direction, now_ms: f64) {
        self.carousel.navigate(direction, now_ms, &mut self.scene);
        self.relabel();
        let centered = self.carousel.centered();
        log::info!(
            "[carousel] {:?} -> {} ({})",
            direction,
            centered,
            self.prisms[centered].title
        );
    }

    /// One animation frame.
    pub fn frame(&mut self, now_ms: f64) -> FrameReport {
        self.carousel.tick(now_ms, &mut self.scene);
        self.hud.follow(&mut self.scene, &self.camera);

        if !self.pointer_down {
            for spin in &mut self.spins {
                spin.step();
            }
            self.update_hover();
        }

        let scale = self.config.interaction.drag_scale;
        for (i, prism) in self.prisms.iter().enumerate() {
            if self.grabbed != Some(i) {
                let velocity = self.spins[i].velocity;
                rotate_object(&mut self.scene, Some(prism.group), velocity, scale);
            }
        }

        FrameReport {
            cursor: self.cursor,
            loaded: self.loading.is_loaded(),
            animating: self.carousel.is_animating(),
        }
    }

    /// Parse a typeface document, falling back to fixed metrics on failure.
    pub fn resolve_font_json(&mut self, json: Option<&str>) -> LoadProgress {
        let metrics: Box<dyn FontMetrics> = match json.map(Typeface::from_json) {
            Some(Ok(face)) => {
                log::info!("[load] typeface ready ({} glyphs)", face.glyph_count());
                Box::new(face)
            }
            Some(Err(e)) => {
                log::warn!("[load] typeface rejected, using fallback metrics: {e}");
                Box::new(FallbackMetrics::default())
            }
            None => {
                log::warn!("[load] typeface unavailable, using fallback metrics");
                Box::new(FallbackMetrics::default())
            }
        };
        self.resolve_font(metrics)
    }

    /// Lay out every queued text item, then complete the font asset.
    pub fn resolve_font(&mut self, metrics: Box<dyn FontMetrics>) -> LoadProgress {
        for request in self.deferred.drain() {
            factory::materialize_text(&mut self.scene, metrics.as_ref(), &request);
        }
        self.metrics = Some(metrics);
        self.relabel();

        self.complete_asset(FONT_ASSET)
    }

    /// Mark a texture as done. A failed image still completes; the surface
    /// keeps its plain material colour.
    pub fn resolve_texture(&mut self, key: &'static str, loaded: bool) -> LoadProgress {
        if loaded {
            log::info!("[load] texture {} ready", key);
        } else {
            log::warn!("[load] texture {} unavailable, drawing untextured", key);
        }
        self.complete_asset(key)
    }

    fn complete_asset(&mut self, asset: &'static str) -> LoadProgress {
        let progress = self.loading.complete(asset);
        if progress == LoadProgress::AllLoaded {
            self.on_loaded();
        }
        progress
    }

    fn on_loaded(&mut self) {
        let root = self.scene.root();
        let nodes = self
            .prisms
            .iter()
            .map(|p| p.group)
            .chain(std::iter::once(self.hud.group))
            .collect::<Vec<_>>();
        for id in nodes {
            if let Err(e) = self.scene.attach(id, root) {
                log::error!("[load] could not attach {id:?}: {e}");
            }
        }
        log::info!("[load] scene ready");
    }

    fn relabel(&mut self) {
        let Some(metrics) = self.metrics.as_deref() else {
            return;
        };
        let previous = &self.prisms[self.carousel.previous_index()].title;
        let next = &self.prisms[self.carousel.next_index()].title;
        self.hud.relabel(&mut self.scene, metrics, previous, next);
    }

    fn update_hover(&mut self) {
        self.cursor = match self.pointer {
            Some(p) => {
                let hits = self.hits_at(p.x, p.y);
                self.hover.update(&mut self.scene, &self.registry, &hits)
            }
            None => self.hover.clear(&mut self.scene, &self.registry),
        };
    }

    /// Index of the prism whose group is `node` or one of its ancestors.
    fn prism_containing(&self, node: NodeId) -> Option<usize> {
        self.prisms
            .iter()
            .position(|p| p.group == node || self.scene.is_ancestor_of(p.group, node))
    }
}
