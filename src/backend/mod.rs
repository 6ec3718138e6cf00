use anyhow::Result;

pub mod wayland;

/// Command-line values that take precedence over the config file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    /// Replaces `[snap] threshold`
    pub snap_threshold: Option<f64>,
    /// Starts with snapping disabled regardless of `[snap] enabled`
    pub no_snap: bool,
}

impl Overrides {
    /// Applies the overrides on top of a loaded config.
    pub fn apply(&self, config: &mut crate::Config) {
        if let Some(threshold) = self.snap_threshold {
            config.snap.threshold = threshold;
        }
        if self.no_snap {
            config.snap.enabled = false;
        }
    }
}

/// Run Wayland backend with full event loop
///
/// # Arguments
/// * `overrides` - CLI values applied on top of the loaded config
pub fn run_wayland(overrides: Overrides) -> Result<()> {
    let mut backend = wayland::WaylandBackend::new(overrides);
    backend.init()?;
    backend.run()
}
