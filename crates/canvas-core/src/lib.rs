pub mod canvas;
pub mod color;
pub mod config;
pub mod constants;
pub mod error;
pub mod field;
pub mod galaxy;
pub mod glitch;
pub mod graph;
pub mod grid;
pub mod pointer;
pub mod render_loop;
pub mod resize;
pub mod rng;
pub mod scenes;
pub mod spring;
pub mod streams;
pub mod surface;
pub mod trail;

pub use canvas::ReactiveCanvas;
pub use color::{ColorId, Palette, Rgba};
pub use config::CanvasConfig;
pub use error::{CanvasError, Result};
pub use field::{Particle, ParticleField, Size};
pub use glitch::{GlitchConfig, GlitchState};
pub use graph::ConnectionGraph;
pub use pointer::{ContainerRect, PointerMode, PointerTracker};
pub use render_loop::{FrameScheduler, FrameToken, LoopState, RenderLoop};
pub use resize::ResizeHandler;
pub use rng::SimRng;
pub use scenes::{build_scene, FrameInput, Scene, Variant};
pub use spring::{Spring2, SpringConfig};
pub use surface::{ColorStop, Surface};
pub use trail::CursorTrail;
