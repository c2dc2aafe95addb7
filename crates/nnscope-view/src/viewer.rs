//! Viewer session state: load serialization, redraw debounce, selection.

use nnscope_net::{DecodeError, Network};
use tracing::{debug, warn};

use crate::error::ViewError;

/// Frames drawn per invalidation; the counter ticks down once per
/// animation frame so a request survives one buffer swap.
const REDRAW_TICKS: u32 = 2;

/// State for one interactive viewing session.
///
/// The network is immutable once installed; the viewer only swaps the
/// whole reference on a completed load. Loads are one-shot and
/// serialized: a second `begin_load` before `finish_load` is rejected.
#[derive(Debug, Default)]
pub struct Viewer {
    network: Option<Network>,
    loading: bool,
    dirty: u32,
    selected_neuron: usize,
}

impl Viewer {
    /// An idle viewer with nothing loaded.
    pub fn new() -> Viewer {
        Viewer::default()
    }

    /// Begin a one-shot network load.
    pub fn begin_load(&mut self) -> Result<(), ViewError> {
        if self.loading {
            return Err(ViewError::LoadInProgress);
        }
        self.loading = true;
        Ok(())
    }

    /// Install the outcome of the load started with [`begin_load`].
    ///
    /// On failure the network reference is left unset and the viewer
    /// idles; the error is handed back for the caller to surface.
    ///
    /// [`begin_load`]: Viewer::begin_load
    pub fn finish_load(&mut self, result: Result<Network, DecodeError>) -> Result<(), DecodeError> {
        self.loading = false;
        match result {
            Ok(network) => {
                // keep the selection valid across a feature-set change
                self.selected_neuron = self
                    .selected_neuron
                    .min(network.ft().num_outputs().saturating_sub(1));
                debug!(feature_set = %network.feature_set(), "network installed");
                self.network = Some(network);
                self.invalidate();
                Ok(())
            }
            Err(err) => {
                warn!(%err, "network load failed");
                self.network = None;
                self.invalidate();
                Err(err)
            }
        }
    }

    /// The loaded network, if any.
    pub fn network(&self) -> Option<&Network> {
        self.network.as_ref()
    }

    /// Select the FT neuron to inspect, clamped to the current FT
    /// width so stale indices no-op instead of failing per frame.
    pub fn select_neuron(&mut self, neuron: usize) {
        let max = self
            .network
            .as_ref()
            .map(|n| n.ft().num_outputs().saturating_sub(1))
            .unwrap_or(0);
        self.selected_neuron = neuron.min(max);
        self.invalidate();
    }

    /// The currently selected FT neuron.
    pub fn selected_neuron(&self) -> usize {
        self.selected_neuron
    }

    /// Request a redraw; repeated requests coalesce.
    pub fn invalidate(&mut self) {
        self.dirty = REDRAW_TICKS;
    }

    /// One animation tick. True when a frame should be drawn; consumes
    /// one pending tick.
    pub fn begin_frame(&mut self) -> bool {
        if self.dirty > 0 {
            self.dirty -= 1;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Viewer;
    use crate::error::ViewError;
    use crate::test_support::network_with_ft;

    #[test]
    fn overlapping_loads_rejected() {
        let mut viewer = Viewer::new();
        viewer.begin_load().unwrap();
        assert_eq!(viewer.begin_load(), Err(ViewError::LoadInProgress));

        viewer.finish_load(Ok(network_with_ft(&[]))).unwrap();
        // settled: a new load may start
        viewer.begin_load().unwrap();
    }

    #[test]
    fn failed_load_leaves_network_unset() {
        let mut viewer = Viewer::new();
        viewer.begin_load().unwrap();
        viewer.finish_load(Ok(network_with_ft(&[]))).unwrap();
        assert!(viewer.network().is_some());

        viewer.begin_load().unwrap();
        let result = nnscope_net::Network::decode(b"half-pizza\0");
        assert!(viewer.finish_load(result).is_err());
        assert!(viewer.network().is_none());
    }

    #[test]
    fn redraws_are_debounced() {
        let mut viewer = Viewer::new();
        assert!(!viewer.begin_frame(), "nothing requested yet");

        viewer.invalidate();
        viewer.invalidate();
        assert!(viewer.begin_frame());
        assert!(viewer.begin_frame());
        assert!(!viewer.begin_frame(), "requests coalesce, ticks run out");
    }

    #[test]
    fn selection_clamps_to_ft_width() {
        let mut viewer = Viewer::new();
        viewer.begin_load().unwrap();
        viewer.finish_load(Ok(network_with_ft(&[]))).unwrap();

        viewer.select_neuron(10_000);
        assert_eq!(viewer.selected_neuron(), 255);

        viewer.select_neuron(7);
        assert_eq!(viewer.selected_neuron(), 7);
    }

    #[test]
    fn selection_changes_request_redraw() {
        let mut viewer = Viewer::new();
        while viewer.begin_frame() {}
        viewer.select_neuron(0);
        assert!(viewer.begin_frame());
    }
}
