//! Arena scene graph.
//!
//! Nodes live in one `Vec` and refer to each other by [`NodeId`] index, so
//! ancestor queries are a walk over parent indices rather than pointer
//! chasing. Index 0 is the root. A node with no path to the root is
//! *detached*: it exists, but is neither drawn nor hit by rays.

use crate::error::{PrismError, Result};
use crate::geometry::Shape;
use crate::material::MaterialSet;
use glam::{EulerRot, Mat4, Quat, Vec3};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
    pub const ROOT: NodeId = NodeId(0);

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Local transform; rotation is Euler XYZ in radians.
#[derive(Clone, Debug, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Vec3,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    pub fn matrix(&self) -> Mat4 {
        let r = self.rotation;
        Mat4::from_scale_rotation_translation(
            self.scale,
            Quat::from_euler(EulerRot::XYZ, r.x, r.y, r.z),
            self.position,
        )
    }

    pub fn from_matrix(m: Mat4) -> Self {
        let (scale, rotation, position) = m.to_scale_rotation_translation();
        let (x, y, z) = rotation.to_euler(EulerRot::XYZ);
        Self {
            position,
            rotation: Vec3::new(x, y, z),
            scale,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Node {
    pub name: String,
    pub transform: Transform,
    pub shape: Shape,
    pub materials: MaterialSet,
    pub visible: bool,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl Node {
    pub fn new(name: impl Into<String>, shape: Shape) -> Self {
        Self {
            name: name.into(),
            transform: Transform::default(),
            shape,
            materials: MaterialSet::default(),
            visible: true,
            parent: None,
            children: Vec::new(),
        }
    }

    pub fn group(name: impl Into<String>) -> Self {
        Self::new(name, Shape::Group)
    }

    pub fn at(mut self, position: Vec3) -> Self {
        self.transform.position = position;
        self
    }

    pub fn rotated(mut self, rotation: Vec3) -> Self {
        self.transform.rotation = rotation;
        self
    }

    pub fn with_materials(mut self, materials: impl Into<MaterialSet>) -> Self {
        self.materials = materials.into();
        self
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }
}

#[derive(Clone, Debug)]
pub struct Scene {
    nodes: Vec<Node>,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene {
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::group("scene")],
        }
    }

    #[inline]
    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.len() <= 1
    }

    /// Insert `node` under `parent`. `parent` must come from this scene.
    pub fn add(&mut self, parent: NodeId, node: Node) -> NodeId {
        let id = self.add_detached(node);
        self.nodes[id.index()].parent = Some(parent);
        self.nodes[parent.index()].children.push(id);
        id
    }

    pub fn add_detached(&mut self, mut node: Node) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        node.parent = None;
        node.children.clear();
        self.nodes.push(node);
        id
    }

    /// Move `child` (and its subtree) under `parent`.
    pub fn attach(&mut self, child: NodeId, parent: NodeId) -> Result<()> {
        self.check(child)?;
        self.check(parent)?;
        if child == NodeId::ROOT || child == parent || self.is_ancestor_of(child, parent) {
            return Err(PrismError::InvalidAttach { child, parent });
        }
        self.detach(child);
        self.nodes[child.index()].parent = Some(parent);
        self.nodes[parent.index()].children.push(child);
        Ok(())
    }

    pub fn detach(&mut self, id: NodeId) {
        if let Some(parent) = self.nodes.get_mut(id.index()).and_then(|n| n.parent.take()) {
            self.nodes[parent.index()].children.retain(|c| *c != id);
        }
    }

    fn check(&self, id: NodeId) -> Result<()> {
        if id.index() < self.nodes.len() {
            Ok(())
        } else {
            Err(PrismError::UnknownNode(id))
        }
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.index())
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.parent)
    }

    /// Strict ancestors of `id`, nearest first, ending with the root when
    /// the node is attached.
    pub fn ancestors(&self, id: NodeId) -> Ancestors<'_> {
        Ancestors {
            scene: self,
            next: self.parent(id),
        }
    }

    pub fn is_ancestor_of(&self, ancestor: NodeId, id: NodeId) -> bool {
        self.ancestors(id).any(|a| a == ancestor)
    }

    pub fn is_attached(&self, id: NodeId) -> bool {
        id == NodeId::ROOT || self.ancestors(id).any(|a| a == NodeId::ROOT)
    }

    pub fn world_matrix(&self, id: NodeId) -> Mat4 {
        let mut m = match self.get(id) {
            Some(n) => n.transform.matrix(),
            None => return Mat4::IDENTITY,
        };
        for a in self.ancestors(id) {
            m = self.nodes[a.index()].transform.matrix() * m;
        }
        m
    }

    pub fn world_position(&self, id: NodeId) -> Vec3 {
        self.world_matrix(id).transform_point3(Vec3::ZERO)
    }

    /// Depth-first visit of every visible node reachable from the root,
    /// with its accumulated world matrix.
    pub fn visit_attached(&self, mut f: impl FnMut(NodeId, &Node, Mat4)) {
        let mut stack = vec![(NodeId::ROOT, Mat4::IDENTITY)];
        while let Some((id, parent_world)) = stack.pop() {
            let node = &self.nodes[id.index()];
            if !node.visible {
                continue;
            }
            let world = parent_world * node.transform.matrix();
            f(id, node, world);
            for child in node.children.iter().rev() {
                stack.push((*child, world));
            }
        }
    }

    /// Add `delta` radians of rotation about the vertical axis.
    pub fn rotate_yaw(&mut self, id: NodeId, delta: f32) {
        if let Some(n) = self.get_mut(id) {
            n.transform.rotation.y += delta;
        }
    }

    pub fn yaw(&self, id: NodeId) -> f32 {
        self.get(id).map(|n| n.transform.rotation.y).unwrap_or(0.0)
    }

    pub fn set_materials(&mut self, id: NodeId, materials: MaterialSet) {
        if let Some(n) = self.get_mut(id) {
            n.materials = materials;
        }
    }

    pub fn find_by_name(&self, name: &str) -> Option<NodeId> {
        self.nodes
            .iter()
            .position(|n| n.name == name)
            .map(|i| NodeId(i as u32))
    }
}

pub struct Ancestors<'a> {
    scene: &'a Scene,
    next: Option<NodeId>,
}

impl Iterator for Ancestors<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let current = self.next?;
        self.next = self.scene.parent(current);
        Some(current)
    }
}
