use glam::Vec2;

/// Map client pixels to `[-1, 1]` with +y up.
///
/// A zero-sized or non-finite viewport maps everything to the centre.
#[inline]
pub fn normalize_client(client_x: f64, client_y: f64, viewport_w: f64, viewport_h: f64) -> Vec2 {
    if !(viewport_w > 0.0 && viewport_h > 0.0) {
        return Vec2::ZERO;
    }
    let x = (client_x / viewport_w) * 2.0 - 1.0;
    let y = -(client_y / viewport_h) * 2.0 + 1.0;
    if x.is_finite() && y.is_finite() {
        Vec2::new(x as f32, y as f32)
    } else {
        Vec2::ZERO
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClickRecord {
    pub position: Vec2,
    /// Milliseconds on the host clock (`Date.now()` on the web).
    pub timestamp_ms: f64,
}

/// Latest pointer/touch position plus the last click or tap.
///
/// Mouse and touch input are one logical stream; only the first touch
/// contact is considered.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerTracker {
    position: Vec2,
    last_click: Option<ClickRecord>,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn last_click(&self) -> Option<ClickRecord> {
        self.last_click
    }

    pub fn on_move(&mut self, client_x: f64, client_y: f64, viewport_w: f64, viewport_h: f64) {
        self.position = normalize_client(client_x, client_y, viewport_w, viewport_h);
    }

    pub fn on_click(
        &mut self,
        client_x: f64,
        client_y: f64,
        viewport_w: f64,
        viewport_h: f64,
        timestamp_ms: f64,
    ) {
        self.last_click = Some(ClickRecord {
            position: normalize_client(client_x, client_y, viewport_w, viewport_h),
            timestamp_ms,
        });
    }

    /// Touch move with all current contacts as client `(x, y)` pairs.
    pub fn on_touch_move(&mut self, touches: &[(f64, f64)], viewport_w: f64, viewport_h: f64) {
        if let Some(&(x, y)) = touches.first() {
            self.on_move(x, y, viewport_w, viewport_h);
        }
    }

    /// Touch start counts as a tap at the first contact.
    pub fn on_touch_start(
        &mut self,
        touches: &[(f64, f64)],
        viewport_w: f64,
        viewport_h: f64,
        timestamp_ms: f64,
    ) {
        if let Some(&(x, y)) = touches.first() {
            self.on_click(x, y, viewport_w, viewport_h, timestamp_ms);
        }
    }
}

/// Follows one touch contact by id for hosts that report touches one at a
/// time (winit), so only the first finger down drives the pointer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PrimaryTouch {
    id: Option<u64>,
}

impl PrimaryTouch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(&self) -> Option<u64> {
        self.id
    }

    /// A contact went down. Returns true if it became the primary one.
    pub fn start(&mut self, id: u64) -> bool {
        match self.id {
            Some(_) => false,
            None => {
                self.id = Some(id);
                true
            }
        }
    }

    pub fn is_primary(&self, id: u64) -> bool {
        self.id == Some(id)
    }

    /// A contact lifted or was cancelled. Frees the slot if it was primary.
    pub fn end(&mut self, id: u64) {
        if self.is_primary(id) {
            self.id = None;
        }
    }
}
