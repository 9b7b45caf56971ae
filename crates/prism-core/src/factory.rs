//! Builds prisms, panel decoration and the navigation HUD.
//!
//! Construction is two-phase. Everything that does not depend on the font
//! is created immediately but detached; text is queued in [`DeferredText`]
//! and materialised by [`materialize_text`] once metrics are available.

use crate::constants::*;
use crate::content::{PictureContent, PrismContent};
use crate::error::Result;
use crate::geometry::{Shape, TextShape};
use crate::material::{Material, MaterialSet};
use crate::registry::{Action, ClickableEntry, ClickableRegistry, Command, Direction, EntryId};
use crate::scene::{Node, NodeId, Scene, Transform};
use crate::state::Camera;
use crate::text::{layout, DeferredText, FontMetrics, TextRequest, TextStyle};
use glam::Vec3;
use std::f32::consts::{FRAC_PI_2, PI};

const PRISM_COLOR: u32 = 0x3de2ff;
const BODY_TEXT_COLOR: u32 = 0x0000ff;
const BODY_TEXT_THICKNESS: f32 = 0.005;
const BOARD_COLOR: u32 = 0x998250;
const BOARD_FRONT_COLOR: u32 = 0xaa9960;
const BOARD_BACK_COLOR: u32 = 0xffffff;
const BOARD_DEPTH: f32 = 0.01;
const BOARD_Z: f32 = -0.05;
const BOARD_TEXT_COLOR: u32 = 0xdddddd;
const POST_COLOR: u32 = 0x553333;
const POST_SIZE: [f32; 3] = [0.02, 0.3, 0.02];
const POST_OFFSET: [f32; 2] = [-0.04, -0.01]; // y, z relative to the board
const FRAME_COLOR: u32 = 0xaaaaaa;
const FRAME_FACE_COLOR: u32 = 0xcccccc;
const FRAME_HIGHLIGHT: u32 = 0xeeeeee;
const FRAME_FACE_HIGHLIGHT: u32 = 0xffffff;
const ARROW_COLOR: u32 = 0xcccccc;
const ARROW_HIGHLIGHT: u32 = 0xffffff;
const LABEL_COLOR: u32 = 0xdddddd;
const LABEL_THICKNESS: f32 = 0.002;
const PICTURE_FACE: usize = 4; // +Z

/// Texture key of the billboard boards.
pub const BOARD_TEXTURE: &str = "wood";

#[derive(Clone, Debug)]
pub struct Prism {
    pub group: NodeId,
    pub title: String,
    pub sides: Vec<NodeId>,
}

/// Apothem and side width of a regular prism.
pub fn prism_dimensions(radius: f32, sides: usize) -> (f32, f32) {
    let half = PI / sides as f32;
    (radius * half.cos(), 2.0 * radius * half.sin())
}

/// Polar angle of side `i`'s outward normal in the XZ plane.
pub fn side_angle(i: usize, sides: usize) -> f32 {
    (2.0 * i as f32 - 1.0) * PI / sides as f32
}

/// Build one prism detached from the scene, queueing its text.
pub fn build_prism(
    scene: &mut Scene,
    registry: &mut ClickableRegistry,
    deferred: &mut DeferredText,
    content: &PrismContent,
    position: Vec3,
) -> Result<Prism> {
    let n = content.sides.len().max(3);
    let (apothem, side_width) = prism_dimensions(PRISM_RADIUS, n);
    let shell = Material::standard(PRISM_COLOR);

    let group =
        scene.add_detached(Node::group(format!("prism:{}", content.title)).at(position));

    let cap = Shape::Polygon {
        radius: PRISM_RADIUS,
        sides: n as u32,
    };
    scene.add(
        group,
        Node::new("cap:bottom", cap.clone())
            .at(Vec3::new(0.0, -PRISM_HEIGHT / 2.0, 0.0))
            .rotated(Vec3::new(FRAC_PI_2, 0.0, 0.0))
            .with_materials(shell.clone()),
    );
    scene.add(
        group,
        Node::new("cap:top", cap)
            .at(Vec3::new(0.0, PRISM_HEIGHT / 2.0, 0.0))
            .rotated(Vec3::new(-FRAC_PI_2, 0.0, 0.0))
            .with_materials(shell.clone()),
    );

    let mut sides = Vec::with_capacity(n);
    for (i, side) in content.sides.iter().enumerate() {
        let theta = side_angle(i, n);
        let panel = scene.add(
            group,
            Node::new(
                format!("side:{i}"),
                Shape::Plane {
                    width: side_width,
                    height: PRISM_HEIGHT,
                },
            )
            .at(Vec3::new(apothem * theta.cos(), 0.0, apothem * theta.sin()))
            .rotated(Vec3::new(0.0, FRAC_PI_2 - theta, 0.0))
            .with_materials(shell.clone()),
        );
        sides.push(panel);

        deferred.push(billboard_request(panel, &side.heading));
        let start_y = if side.picture.is_some() {
            BODY_LINE_START_Y
        } else {
            0.0
        };
        for (line_no, line) in side.body.iter().enumerate() {
            deferred.push(TextRequest {
                parent: panel,
                content: line.clone(),
                size: BODY_FONT_SIZE,
                thickness: BODY_TEXT_THICKNESS,
                offset: Vec3::new(0.0, start_y - line_no as f32 * BODY_LINE_SPACING, 0.0),
                style: TextStyle::Plain,
                materials: Material::standard(BODY_TEXT_COLOR).into(),
            });
        }
        if let Some(picture) = &side.picture {
            add_picture(scene, registry, panel, picture)?;
        }
    }

    Ok(Prism {
        group,
        title: content.title.clone(),
        sides,
    })
}

fn billboard_request(parent: NodeId, heading: &str) -> TextRequest {
    TextRequest {
        parent,
        content: heading.to_owned(),
        size: BILLBOARD_FONT_SIZE,
        thickness: BOARD_DEPTH,
        offset: Vec3::new(0.0, BILLBOARD_Y, BOARD_Z),
        style: TextStyle::Billboard,
        materials: Material::standard(BOARD_TEXT_COLOR).into(),
    }
}

pub fn picture_materials(texture: &'static str) -> (MaterialSet, MaterialSet) {
    let set = |edge: u32, face: u32| {
        MaterialSet::per_face((0..6).map(|i| {
            if i == PICTURE_FACE {
                Material::basic(face).with_texture(texture)
            } else {
                Material::basic(edge)
            }
        }))
    };
    (
        set(FRAME_COLOR, FRAME_FACE_COLOR),
        set(FRAME_HIGHLIGHT, FRAME_FACE_HIGHLIGHT),
    )
}

/// Picture frame on a side panel, registered as clickable.
pub fn add_picture(
    scene: &mut Scene,
    registry: &mut ClickableRegistry,
    panel: NodeId,
    picture: &PictureContent,
) -> Result<EntryId> {
    let (default, highlighted) = picture_materials(picture.texture);
    let [width, height, depth] = PICTURE_SIZE;
    let node = scene.add(
        panel,
        Node::new(
            format!("picture:{}", picture.texture),
            Shape::Cuboid {
                width,
                height,
                depth,
            },
        )
        .at(Vec3::new(0.0, PICTURE_Y, 0.0))
        .with_materials(default.clone()),
    );
    registry.register(ClickableEntry {
        target: node,
        default,
        highlighted,
        action: picture.action.clone(),
    })
}

/// Lay out one queued text request and attach the resulting nodes.
pub fn materialize_text(
    scene: &mut Scene,
    metrics: &dyn FontMetrics,
    request: &TextRequest,
) -> NodeId {
    let shape = layout(metrics, &request.content, request.size, request.thickness);
    let width = shape.width;
    match request.style {
        TextStyle::Plain => {
            scene.add(
                request.parent,
                Node::new(format!("text:{}", request.content), Shape::Text(shape))
                    .at(request.offset + Vec3::new(-width / 2.0, 0.0, 0.0))
                    .with_materials(request.materials.clone()),
            )
        }
        TextStyle::Billboard => {
            let [pad_x, pad_y] = BILLBOARD_PADDING;
            let board_materials = MaterialSet::per_face(
                std::iter::repeat(Material::standard(BOARD_COLOR))
                    .take(4)
                    .chain([
                        Material::standard(BOARD_FRONT_COLOR).with_texture(BOARD_TEXTURE),
                        Material::standard(BOARD_BACK_COLOR).with_texture(BOARD_TEXTURE),
                    ]),
            );
            let board = scene.add(
                request.parent,
                Node::new(
                    format!("billboard:{}", request.content),
                    Shape::Cuboid {
                        width: width + pad_x,
                        height: request.size + pad_y,
                        depth: BOARD_DEPTH,
                    },
                )
                .at(request.offset)
                .with_materials(board_materials),
            );
            scene.add(
                board,
                Node::new(format!("text:{}", request.content), Shape::Text(shape))
                    .at(Vec3::new(-width / 2.0, -request.size / 2.0, 0.0))
                    .with_materials(request.materials.clone()),
            );
            let [post_w, post_h, post_d] = POST_SIZE;
            let [post_y, post_z] = POST_OFFSET;
            for x in [-width / 2.0, width / 2.0] {
                scene.add(
                    board,
                    Node::new(
                        "post",
                        Shape::Cuboid {
                            width: post_w,
                            height: post_h,
                            depth: post_d,
                        },
                    )
                    .at(Vec3::new(x, post_y, post_z))
                    .with_materials(Material::standard(POST_COLOR)),
                );
            }
            board
        }
    }
}

/// Camera-relative navigation group: two arrows and their labels.
#[derive(Clone, Debug)]
pub struct Hud {
    pub group: NodeId,
    pub previous_arrow: NodeId,
    pub next_arrow: NodeId,
    pub previous_label: NodeId,
    pub next_label: NodeId,
}

pub fn build_hud(scene: &mut Scene, registry: &mut ClickableRegistry) -> Result<Hud> {
    let group = scene.add_detached(Node::group("hud"));
    let [x, y, z] = NAV_ARROW_OFFSET;
    let arrow = |direction: Direction| {
        let (sign, spin) = match direction {
            Direction::Previous => (-1.0, PI),
            Direction::Next => (1.0, 0.0),
        };
        Node::new(
            format!("arrow:{direction:?}").to_lowercase(),
            Shape::Polygon {
                radius: NAV_ARROW_RADIUS,
                sides: 3,
            },
        )
        .at(Vec3::new(sign * x, y, z))
        .rotated(Vec3::new(0.0, 0.0, spin))
        .with_materials(Material::basic(ARROW_COLOR))
    };
    let previous_arrow = scene.add(group, arrow(Direction::Previous));
    let next_arrow = scene.add(group, arrow(Direction::Next));
    for (target, direction) in [
        (previous_arrow, Direction::Previous),
        (next_arrow, Direction::Next),
    ] {
        registry.register(ClickableEntry {
            target,
            default: Material::basic(ARROW_COLOR).into(),
            highlighted: Material::basic(ARROW_HIGHLIGHT).into(),
            action: Action::Command(Command::Navigate(direction)),
        })?;
    }

    let label = |name: &str| {
        Node::new(
            name,
            Shape::Text(TextShape {
                content: String::new(),
                size: NAV_LABEL_FONT_SIZE,
                thickness: LABEL_THICKNESS,
                width: 0.0,
            }),
        )
        .with_materials(Material::basic(LABEL_COLOR))
    };
    let previous_label = scene.add(group, label("label:previous"));
    let next_label = scene.add(group, label("label:next"));

    Ok(Hud {
        group,
        previous_arrow,
        next_arrow,
        previous_label,
        next_label,
    })
}

impl Hud {
    /// Keep the HUD glued to the camera.
    pub fn follow(&self, scene: &mut Scene, camera: &Camera) {
        if let Some(node) = scene.get_mut(self.group) {
            node.transform = Transform::from_matrix(camera.world_from_view());
        }
    }

    /// Rebuild both labels and centre each under its arrow.
    pub fn relabel(
        &self,
        scene: &mut Scene,
        metrics: &dyn FontMetrics,
        previous_title: &str,
        next_title: &str,
    ) {
        let [x, y, z] = NAV_ARROW_OFFSET;
        for (node, title, sign) in [
            (self.previous_label, previous_title, -1.0),
            (self.next_label, next_title, 1.0),
        ] {
            let shape = layout(metrics, title, NAV_LABEL_FONT_SIZE, LABEL_THICKNESS);
            let centre = Vec3::new(sign * x - shape.width / 2.0, y - NAV_LABEL_DROP, z);
            if let Some(n) = scene.get_mut(node) {
                n.shape = Shape::Text(shape);
                n.transform.position = centre;
            }
        }
    }
}
