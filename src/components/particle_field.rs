//! Particle Field Component
//!
//! Floating hearts and sparkles. Motion is entirely up to the stylesheet;
//! each element only carries its position and animation timing.

use leptos::prelude::*;

use crate::models::Particle;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParticleKind {
    Heart,
    Sparkle,
}

impl ParticleKind {
    pub fn class_name(&self) -> &'static str {
        match self {
            ParticleKind::Heart => "heart",
            ParticleKind::Sparkle => "sparkle",
        }
    }
}

#[component]
pub fn ParticleField(kind: ParticleKind, particles: Vec<Particle>) -> impl IntoView {
    let class = kind.class_name();
    particles
        .into_iter()
        .map(|particle| view! { <div class=class style=particle.style()></div> })
        .collect_view()
}
