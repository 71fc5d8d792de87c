use glam::{Mat4, Vec2, Vec3};
use winit::event::{ElementState, KeyEvent, MouseButton, MouseScrollDelta};
use winit::keyboard::{KeyCode, PhysicalKey};

/// Radians per second while an arrow key is held
pub const ORBIT_KEY_SPEED: f32 = 1.5;
/// Radians per pixel of mouse drag
pub const ORBIT_DRAG_SPEED: f32 = 0.005;
/// Fraction of the distance per wheel line
pub const ZOOM_SPEED: f32 = 0.1;

pub const MIN_DISTANCE: f32 = 0.1;
pub const MAX_DISTANCE: f32 = 100.0;

const PITCH_LIMIT: f32 = std::f32::consts::FRAC_PI_2 - 0.01;

#[derive(Default, Clone, Copy, Debug)]
pub struct OrbitKeys {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

impl OrbitKeys {
    const fn to_direction(&self, positive: bool, negative: bool) -> f32 {
        match (positive, negative) {
            (true, false) => 1.0,
            (false, true) => -1.0,
            _ => 0.0,
        }
    }

    /// (yaw, pitch) direction of the held keys
    const fn velocity(&self) -> (f32, f32) {
        (
            self.to_direction(self.right, self.left),
            self.to_direction(self.up, self.down),
        )
    }
}

/// Orbit controls around a fixed target
#[derive(Debug, Clone)]
pub struct OrbitCamera {
    pub target: Vec3,
    pub distance: f32,
    pub yaw: f32,
    pub pitch: f32,
    /// Vertical field of view in radians
    pub fov_y: f32,
    pub near: f32,
    pub far: f32,
    pub keys: OrbitKeys,
    dragging: bool,
    last_cursor: Option<Vec2>,
}

impl OrbitCamera {
    /// Camera on +Z looking at the origin from `distance`
    pub fn new(distance: f32) -> Self {
        Self {
            target: Vec3::ZERO,
            distance: distance.clamp(MIN_DISTANCE, MAX_DISTANCE),
            yaw: 0.0,
            pitch: 0.0,
            fov_y: 75f32.to_radians(),
            near: 0.1,
            far: 1000.0,
            keys: OrbitKeys::default(),
            dragging: false,
            last_cursor: None,
        }
    }

    pub fn position(&self) -> Vec3 {
        let offset = Vec3::new(
            self.yaw.sin() * self.pitch.cos(),
            self.pitch.sin(),
            self.yaw.cos() * self.pitch.cos(),
        );
        self.target + offset * self.distance
    }

    pub fn view(&self) -> Mat4 {
        Mat4::look_at_rh(self.position(), self.target, Vec3::Y)
    }

    pub fn projection(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh(self.fov_y, aspect.max(f32::EPSILON), self.near, self.far)
    }

    pub fn view_proj(&self, aspect: f32) -> Mat4 {
        self.projection(aspect) * self.view()
    }

    pub fn orbit(&mut self, delta_yaw: f32, delta_pitch: f32) {
        self.yaw += delta_yaw;
        self.pitch = (self.pitch + delta_pitch).clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    /// Positive steps move closer
    pub fn zoom(&mut self, steps: f32) {
        let factor = (1.0 - ZOOM_SPEED).powf(steps);
        self.distance = (self.distance * factor).clamp(MIN_DISTANCE, MAX_DISTANCE);
    }

    /// Apply held arrow keys over `delta` seconds
    pub fn update(&mut self, delta: f32) {
        let (yaw, pitch) = self.keys.velocity();
        self.orbit(yaw * ORBIT_KEY_SPEED * delta, pitch * ORBIT_KEY_SPEED * delta);
    }

    pub fn process_keyboard(&mut self, event: &KeyEvent) -> bool {
        let is_pressed = event.state.is_pressed();
        if let PhysicalKey::Code(keycode) = event.physical_key {
            match keycode {
                KeyCode::ArrowLeft => self.keys.left = is_pressed,
                KeyCode::ArrowRight => self.keys.right = is_pressed,
                KeyCode::ArrowUp => self.keys.up = is_pressed,
                KeyCode::ArrowDown => self.keys.down = is_pressed,
                _ => return false,
            }
            return true;
        }
        false
    }

    pub fn process_mouse_button(&mut self, button: MouseButton, state: ElementState) {
        if button == MouseButton::Left {
            self.dragging = state.is_pressed();
            if !self.dragging {
                self.last_cursor = None;
            }
        }
    }

    pub fn process_cursor_moved(&mut self, x: f64, y: f64) {
        let cursor = Vec2::new(x as f32, y as f32);
        if self.dragging {
            if let Some(last) = self.last_cursor {
                let d = cursor - last;
                self.orbit(-d.x * ORBIT_DRAG_SPEED, d.y * ORBIT_DRAG_SPEED);
            }
        }
        self.last_cursor = Some(cursor);
    }

    pub fn process_scroll(&mut self, delta: &MouseScrollDelta) {
        let steps = match delta {
            MouseScrollDelta::LineDelta(_, y) => *y,
            MouseScrollDelta::PixelDelta(p) => p.y as f32 / 40.0,
        };
        self.zoom(steps);
    }
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::new(5.0)
    }
}
