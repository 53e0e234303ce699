//! Scene graph: positioned nodes composed bottom-up at render time.
//!
//! A [`SceneNode`] tree is a per-frame description; [`SceneNode::resolve`]
//! turns it into flat screen-space geometry plus the gesture regions for
//! the router. Children resolve first, so a group's footprint (and with it
//! its gesture region) is the union of what its children actually occupy.

use crate::image::{ImageSource, ResizeMode};
use decal_graphics::{GraphicsLayer, Point, Rect, Size};
use decal_input::{GestureRegion, PointerHandler};
use std::rc::Rc;

pub enum NodeContent {
    Group(Vec<SceneNode>),
    Image {
        source: ImageSource,
        resize: ResizeMode,
        size: Size,
    },
}

pub struct SceneNode {
    layer: GraphicsLayer,
    content: NodeContent,
    handler: Option<PointerHandler>,
}

impl SceneNode {
    pub fn group(layer: GraphicsLayer, children: Vec<SceneNode>) -> Self {
        Self {
            layer,
            content: NodeContent::Group(children),
            handler: None,
        }
    }

    pub fn image(source: ImageSource, resize: ResizeMode, size: Size) -> Self {
        Self {
            layer: GraphicsLayer::default(),
            content: NodeContent::Image {
                source,
                resize,
                size,
            },
            handler: None,
        }
    }

    pub fn with_layer(mut self, layer: GraphicsLayer) -> Self {
        self.layer = layer;
        self
    }

    /// Attach a pointer handler; the node's resolved footprint becomes a
    /// gesture region.
    pub fn with_handler(mut self, handler: PointerHandler) -> Self {
        self.handler = Some(handler);
        self
    }

    /// Resolve the tree rooted here against `origin`, producing draw
    /// geometry and gesture regions. Regions come out outermost first,
    /// matching the router's delivery contract.
    pub fn resolve(&self, origin: Point) -> ResolvedScene {
        let mut scene = ResolvedScene::default();
        self.resolve_into(origin, 1.0, 1.0, &mut scene);
        scene
    }

    fn resolve_into(
        &self,
        origin: Point,
        scale: f32,
        alpha: f32,
        scene: &mut ResolvedScene,
    ) -> Option<Rect> {
        let origin = Point::new(
            origin.x + self.layer.translation_x,
            origin.y + self.layer.translation_y,
        );
        let scale = scale * self.layer.scale;
        let alpha = alpha * self.layer.alpha;

        match &self.content {
            NodeContent::Group(children) => {
                // Children first: the group's rect is the union of theirs.
                let region_slot = self.handler.as_ref().map(|_| scene.regions.len());
                let mut footprint: Option<Rect> = None;
                for child in children {
                    if let Some(rect) = child.resolve_into(origin, scale, alpha, scene) {
                        footprint = Some(match footprint {
                            None => rect,
                            Some(acc) => union(acc, rect),
                        });
                    }
                }
                if let (Some(handler), Some(rect), Some(slot)) =
                    (self.handler.as_ref(), footprint, region_slot)
                {
                    scene
                        .regions
                        .insert(slot, GestureRegion::new(rect, Rc::clone(handler)));
                }
                footprint
            }
            NodeContent::Image {
                source,
                resize,
                size,
            } => {
                let rect = Rect::from_origin_size(
                    origin,
                    Size::new(size.width * scale, size.height * scale),
                );
                if let Some(handler) = self.handler.as_ref() {
                    scene
                        .regions
                        .push(GestureRegion::new(rect, Rc::clone(handler)));
                }
                scene.nodes.push(ResolvedNode {
                    rect,
                    alpha,
                    source: source.clone(),
                    resize: *resize,
                });
                Some(rect)
            }
        }
    }
}

fn union(a: Rect, b: Rect) -> Rect {
    let x = a.x.min(b.x);
    let y = a.y.min(b.y);
    let right = (a.x + a.width).max(b.x + b.width);
    let bottom = (a.y + a.height).max(b.y + b.height);
    Rect {
        x,
        y,
        width: right - x,
        height: bottom - y,
    }
}

/// One drawable leaf in screen space.
#[derive(Clone, Debug)]
pub struct ResolvedNode {
    pub rect: Rect,
    pub alpha: f32,
    pub source: ImageSource,
    pub resize: ResizeMode,
}

#[derive(Default)]
pub struct ResolvedScene {
    pub nodes: Vec<ResolvedNode>,
    /// Gesture regions, outermost first.
    pub regions: Vec<GestureRegion>,
}
