// Coordinates backend startup/shutdown and drives the event loop while delegating
// rendering & protocol state to `WaylandState` and its handler modules.
use anyhow::{Context, Result};
use log::{debug, info, warn};
use smithay_client_toolkit::{
    compositor::CompositorState,
    output::OutputState,
    registry::RegistryState,
    seat::SeatState,
    shell::{
        WaylandSurface,
        wlr_layer::{Anchor, KeyboardInteractivity, Layer, LayerShell},
    },
    shm::Shm,
};
use wayland_client::{Connection, QueueHandle, globals::registry_queue_init};

use super::state::WaylandState;
use crate::{backend::Overrides, config::Config, input::InputState};

/// Consecutive render failures tolerated before the loop gives up.
const MAX_RENDER_FAILURES: u32 = 10;

/// Wayland backend state
pub struct WaylandBackend {
    overrides: Overrides,
}

impl WaylandBackend {
    pub fn new(overrides: Overrides) -> Self {
        Self { overrides }
    }

    pub fn init(&mut self) -> Result<()> {
        info!("Initializing Wayland backend");
        Ok(())
    }

    fn load_config(&self) -> Config {
        let mut config = match Config::load() {
            Ok(config) => config,
            Err(e) => {
                warn!("Failed to load config: {:#}. Using defaults.", e);
                Config::default()
            }
        };

        self.overrides.apply(&mut config);
        config.validate_and_clamp();

        info!("Configuration loaded");
        debug!("  Line width: {:.1}px", config.drawing.line_width);
        debug!(
            "  Snap: enabled={} threshold={:.1}px marker={}",
            config.snap.enabled, config.snap.threshold, config.snap.show_marker
        );
        debug!("  Buffer count: {}", config.performance.buffer_count);
        debug!("  VSync: {}", config.performance.enable_vsync);
        debug!(
            "  Status bar: {} @ {:?}",
            config.ui.show_status_bar, config.ui.status_bar_position
        );

        config
    }

    pub fn run(&mut self) -> Result<()> {
        info!("Starting Wayland backend");

        // Connect to Wayland compositor
        let conn =
            Connection::connect_to_env().context("Failed to connect to Wayland compositor")?;
        debug!("Connected to Wayland display");

        // Initialize registry and event queue
        let (globals, mut event_queue) =
            registry_queue_init(&conn).context("Failed to initialize Wayland registry")?;
        let qh = event_queue.handle();

        // Bind global interfaces
        let compositor_state =
            CompositorState::bind(&globals, &qh).context("wl_compositor not available")?;
        debug!("Bound compositor");

        let layer_shell =
            LayerShell::bind(&globals, &qh).context("zwlr_layer_shell_v1 not available")?;
        debug!("Bound layer shell");

        let shm = Shm::bind(&globals, &qh).context("wl_shm not available")?;
        debug!("Bound shared memory");

        let output_state = OutputState::new(&globals, &qh);
        let seat_state = SeatState::new(&globals, &qh);
        let registry_state = RegistryState::new(&globals);

        let config = self.load_config();

        let action_map = config
            .keybindings
            .build_action_map()
            .map_err(anyhow::Error::msg)
            .context("Invalid [keybindings] configuration")?;

        let input_state = InputState::with_defaults(
            config.snap.enabled,
            config.snap.threshold,
            config.ui.show_status_bar,
            action_map,
        );

        let mut state = WaylandState::new(
            registry_state,
            compositor_state,
            layer_shell,
            shm,
            output_state,
            seat_state,
            config,
            input_state,
        );

        // Create layer shell surface
        info!("Creating layer shell surface");
        let wl_surface = state.compositor_state.create_surface(&qh);
        let layer_surface = state.layer_shell.create_layer_surface(
            &qh,
            wl_surface,
            Layer::Overlay,
            Some("snapline"),
            None, // Default output
        );

        // Fullscreen surface that owns pointer and keyboard
        layer_surface.set_anchor(Anchor::all());
        layer_surface.set_keyboard_interactivity(KeyboardInteractivity::Exclusive);
        layer_surface.set_size(0, 0);
        layer_surface.set_exclusive_zone(-1);
        layer_surface.commit();

        state.surface.set_layer_surface(layer_surface);
        info!("Layer shell surface created");

        let mut failures = RenderFailures::default();
        let result = loop {
            if state.input_state.should_exit {
                break Ok(());
            }

            if let Err(e) = event_queue.blocking_dispatch(&mut state) {
                break Err(anyhow::anyhow!("Wayland event queue error: {}", e));
            }

            if state.input_state.should_exit {
                break Ok(());
            }

            if let Err(e) = pump_render(&mut state, &qh, &mut failures) {
                break Err(e);
            }
        };

        info!(
            "Wayland backend exiting with {} polyline(s) and {} open segment(s)",
            state.input_state.polylines().len(),
            state.input_state.open_segments().len()
        );

        result
    }
}

/// Counts consecutive failed frames; any success resets it.
#[derive(Debug, Default)]
struct RenderFailures(u32);

impl RenderFailures {
    /// Records a failure, returning `true` once the limit is reached.
    fn record(&mut self) -> bool {
        self.0 += 1;
        self.0 >= MAX_RENDER_FAILURES
    }

    fn reset(&mut self) {
        self.0 = 0;
    }
}

/// Draws a frame when the session changed and the compositor is ready for one.
///
/// With vsync the next frame waits for the frame callback of the previous one.
/// A failed frame drops the redraw request instead of retrying in a tight loop;
/// only a run of failures aborts the backend.
fn pump_render(
    state: &mut WaylandState,
    qh: &QueueHandle<WaylandState>,
    failures: &mut RenderFailures,
) -> Result<()> {
    let vsync = state.config.performance.enable_vsync;
    if !state.surface.is_configured() || !state.input_state.needs_redraw {
        return Ok(());
    }
    if vsync && state.surface.frame_callback_pending() {
        debug!("Frame callback pending, deferring redraw");
        return Ok(());
    }

    state.input_state.needs_redraw = false;
    match state.render(qh) {
        Ok(()) => {
            failures.reset();
            if vsync {
                state.surface.set_frame_callback_pending(true);
            }
            Ok(())
        }
        Err(e) => {
            if failures.record() {
                return Err(e.context(format!(
                    "Giving up after {} consecutive render failures",
                    MAX_RENDER_FAILURES
                )));
            }
            warn!("Rendering error: {:#}", e);
            Ok(())
        }
    }
}
