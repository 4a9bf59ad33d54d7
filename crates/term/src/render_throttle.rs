//! Redraw gating for a mostly static screen.
//!
//! The memory game only changes on input, once per second while the clock runs,
//! and when a flipped pair resolves. Frames are drawn when the view fingerprint
//! changes, plus a slow heartbeat redraw so a garbled terminal recovers.

#[derive(Debug, Clone)]
pub struct RenderThrottle {
    heartbeat_ms: u64,
    last_render_ms: Option<u64>,
    last_fingerprint: u64,
}

impl RenderThrottle {
    pub fn new(heartbeat_ms: u64) -> Self {
        Self {
            heartbeat_ms,
            last_render_ms: None,
            last_fingerprint: 0,
        }
    }

    /// Decide whether to draw a frame at `now_ms` for a view with `fingerprint`.
    pub fn should_render(&mut self, now_ms: u64, fingerprint: u64) -> bool {
        let due = match self.last_render_ms {
            None => true,
            Some(last) => {
                fingerprint != self.last_fingerprint
                    || now_ms.saturating_sub(last) >= self.heartbeat_ms
            }
        };
        if due {
            self.last_render_ms = Some(now_ms);
            self.last_fingerprint = fingerprint;
        }
        due
    }

    /// Make the next call render regardless of fingerprint.
    pub fn force(&mut self) {
        self.last_render_ms = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_frame_renders() {
        let mut t = RenderThrottle::new(1_000);
        assert!(t.should_render(0, 7));
    }

    #[test]
    fn unchanged_view_waits_for_heartbeat() {
        let mut t = RenderThrottle::new(1_000);
        assert!(t.should_render(0, 7));
        assert!(!t.should_render(10, 7));
        assert!(!t.should_render(999, 7));
        assert!(t.should_render(1_000, 7));
    }

    #[test]
    fn changed_view_renders_immediately() {
        let mut t = RenderThrottle::new(1_000);
        assert!(t.should_render(0, 7));
        assert!(t.should_render(1, 8));
        assert!(!t.should_render(2, 8));
    }

    #[test]
    fn force_overrides_fingerprint() {
        let mut t = RenderThrottle::new(1_000);
        assert!(t.should_render(0, 7));
        t.force();
        assert!(t.should_render(1, 7));
    }
}
