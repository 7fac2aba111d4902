//! Viewer camera: one-shot framing per environment load and orbit controls.

pub mod framing;
pub mod orbit_controls;
