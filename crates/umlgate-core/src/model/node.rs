//! Diagram nodes.

use crate::{
    geometry::{Bounds, Point, Size},
    label::Label,
};

use super::{NodeId, NodeKind};

/// Default width of a lifeline.
pub const LIFELINE_WIDTH: f32 = 80.0;

/// Default height of a lifeline, title box included.
pub const LIFELINE_HEIGHT: f32 = 120.0;

/// A node of a diagram.
///
/// Containment links ([`parent`](Self::parent), [`children`](Self::children))
/// are maintained by [`Diagram`](super::Diagram) when nodes are added; a
/// freshly created node has neither.
///
/// # Examples
///
/// ```
/// # use umlgate_core::{geometry::Point, model::{Node, NodeKind}};
/// let lifeline = Node::new(NodeKind::ImplicitParameter)
///     .with_label(":Order")
///     .with_position(Point::new(100.0, 0.0));
///
/// assert_eq!(lifeline.kind(), NodeKind::ImplicitParameter);
/// assert_eq!(lifeline.bounds().width(), 80.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    kind: NodeKind,
    label: Option<Label>,
    position: Point,
    size: Size,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl Node {
    /// Creates a detached node of `kind` at the origin with the default size
    /// for that kind.
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            label: None,
            position: Point::default(),
            size: default_size(kind),
            parent: None,
            children: Vec::new(),
        }
    }

    pub fn with_label(mut self, label: &str) -> Self {
        self.label = Some(Label::new(label));
        self
    }

    /// Sets the top-left corner of the node
    pub fn with_position(mut self, position: Point) -> Self {
        self.position = position;
        self
    }

    pub fn with_size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn label(&self) -> Option<Label> {
        self.label
    }

    /// Returns the top-left corner of the node
    pub fn position(&self) -> Point {
        self.position
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::new_from_top_left(self.position, self.size)
    }

    /// Returns the rectangle spanning the top `height` units of the node.
    ///
    /// For a lifeline this is its title box; the part below is the life
    /// line proper.
    pub fn top_bounds(&self, height: f32) -> Bounds {
        Bounds::new_from_top_left(self.position, self.size.with_height(height))
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub(super) fn set_parent(&mut self, parent: NodeId) {
        self.parent = Some(parent);
    }

    pub(super) fn push_child(&mut self, child: NodeId) {
        self.children.push(child);
    }
}

fn default_size(kind: NodeKind) -> Size {
    match kind {
        NodeKind::ImplicitParameter => Size::new(LIFELINE_WIDTH, LIFELINE_HEIGHT),
        NodeKind::Call => Size::new(16.0, 30.0),
        NodeKind::Point => Size::default(),
        NodeKind::InitialState | NodeKind::FinalState => Size::new(20.0, 20.0),
        NodeKind::Field => Size::new(60.0, 20.0),
        NodeKind::Actor => Size::new(48.0, 64.0),
        NodeKind::Note => Size::new(60.0, 40.0),
        NodeKind::Class
        | NodeKind::Interface
        | NodeKind::Package
        | NodeKind::State
        | NodeKind::Object
        | NodeKind::UseCase => Size::new(100.0, 60.0),
    }
}
