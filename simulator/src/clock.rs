//! Turns the renderer's millisecond timestamps into simulation time.

use tracing::warn;

/// Simulation time and the step since the last frame, both in seconds.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Tick {
    pub t: f64,
    pub dt: f64,
}

#[derive(Clone, Debug, Default)]
pub struct PhysicsClock {
    /// The timestamp seen on the previous tick, if any.
    last_ms: Option<f64>,
}

impl PhysicsClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read the external clock.
    ///
    /// The first tick has `dt = 0`. If the external clock goes backwards (or
    /// reports garbage) `dt` is zero for that frame, and later frames measure
    /// from the new reading.
    pub fn tick(&mut self, external_ms: f64) -> Tick {
        if !external_ms.is_finite() {
            warn!(external_ms, "external clock is not finite, holding time");
            let t = self.last_ms.unwrap_or(0.0) / 1000.0;
            return Tick { t, dt: 0.0 };
        }

        let dt = match self.last_ms {
            Some(last) if external_ms < last => {
                warn!(
                    last_ms = last,
                    external_ms, "external clock went backwards, clamping dt to zero"
                );
                0.0
            }
            Some(last) => (external_ms - last) / 1000.0,
            None => 0.0,
        };
        self.last_ms = Some(external_ms);

        Tick {
            t: external_ms / 1000.0,
            dt,
        }
    }
}
