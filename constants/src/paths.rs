/// Environment model, recentred on the world origin after loading.
pub const ENVIRONMENT_ASSET_PATH: &str = "env.glb";

/// Secondary model placed at a random point on the environment's ground.
pub const SPAWNED_MODEL_ASSET_PATH: &str = "1.glb";

/// Optional JSON manifest overriding the defaults in this crate.
pub const VIEWER_MANIFEST_PATH: &str = "viewer.manifest.json";

/// File extension the manifest loader is registered for.
pub const VIEWER_MANIFEST_EXTENSION: &str = "manifest.json";
