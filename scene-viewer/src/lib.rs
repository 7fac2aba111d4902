//! Environment viewer: recentres an environment model on the origin, drops a
//! second model somewhere on its ground and frames an orbit camera on it.

pub mod engine;
