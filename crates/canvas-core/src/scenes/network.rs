use super::{FrameInput, Scene, Variant};
use crate::color::{ACCENT_BRIGHT_CYAN, ACCENT_CYAN};
use crate::error::Result;
use crate::field::{FieldConfig, ParticleField, Size};
use crate::graph::ConnectionGraph;
use crate::rng::SimRng;
use crate::surface::Surface;

/// Drifting nodes joined by a sparse graph with traveling pulses.
pub struct NetworkScene {
    nodes: ParticleField,
    graph: ConnectionGraph,
}

impl NetworkScene {
    pub fn new(density: Option<f64>) -> Self {
        let mut config = FieldConfig::network();
        if let Some(d) = density {
            config.density = d;
        }
        Self {
            nodes: ParticleField::new(config),
            graph: ConnectionGraph::new(),
        }
    }

    pub fn nodes(&self) -> &ParticleField {
        &self.nodes
    }

    pub fn graph(&self) -> &ConnectionGraph {
        &self.graph
    }
}

impl Scene for NetworkScene {
    fn variant(&self) -> Variant {
        Variant::Network
    }

    /// Nodes and edges are regenerated together; edge indices refer to the
    /// node batch by position.
    fn resize(&mut self, size: Size, rng: &mut SimRng) -> Result<()> {
        let count = self.nodes.regenerate(size, rng)?;
        self.graph.build(count, rng);
        Ok(())
    }

    fn update(&mut self, frame: &FrameInput, rng: &mut SimRng) {
        self.nodes.step(frame.dt_ms, frame.pointer_px);
        self.graph.step(rng);
    }

    fn draw(&self, frame: &FrameInput, surface: &mut dyn Surface) {
        surface.clear();

        for node in self.nodes.particles() {
            let pulse = node.pulse(frame.time_ms);
            let radius = node.radius * (1.0 + pulse * 0.5);
            surface.fill_circle(node.position, radius, node.color.with_alpha(0.5 + pulse * 0.5));
            surface.fill_glow(node.position, radius, radius * 2.0, node.color.with_alpha(0.3));
        }

        for edge in self.graph.visible(self.nodes.particles(), frame.time_ms) {
            surface.stroke_line(edge.from, edge.to, 0.5, ACCENT_CYAN.alpha(edge.opacity));
            if let Some(at) = edge.highlight {
                surface.fill_circle(at, 1.5, ACCENT_BRIGHT_CYAN.alpha(0.7 + edge.pulse * 0.3));
            }
        }
    }
}
