/// Common type definitions shared by the cache, geometry and edge views.

use serde::{Deserialize, Serialize};

/// 2D coordinate vector
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn length(&self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Point halfway between `self` and `other`.
    pub fn midpoint(self, other: Vec2) -> Self {
        Self {
            x: (self.x + other.x) / 2.0,
            y: (self.y + other.y) / 2.0,
        }
    }

    /// Exact bit-level equality, so `-0.0` and `0.0` (or two NaNs) are told apart.
    pub fn bit_eq(&self, other: &Vec2) -> bool {
        self.x.to_bits() == other.x.to_bits() && self.y.to_bits() == other.y.to_bits()
    }
}

impl std::ops::Add for Vec2 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl std::ops::Sub for Vec2 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

impl std::ops::Mul<f64> for Vec2 {
    type Output = Self;
    fn mul(self, s: f64) -> Self {
        Self {
            x: self.x * s,
            y: self.y * s,
        }
    }
}

/// RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Color {
    pub const WHITE: Color = Color {
        r: 1.0,
        g: 1.0,
        b: 1.0,
        a: 1.0,
    };

    pub fn from_hex(hex: u32, alpha: f64) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as f64 / 255.0,
            g: ((hex >> 8) & 0xFF) as f64 / 255.0,
            b: (hex & 0xFF) as f64 / 255.0,
            a: alpha,
        }
    }

    pub fn with_alpha(self, alpha: f64) -> Self {
        Self { a: alpha, ..self }
    }

    /// Split into a `0xRRGGBB` multiply tint and a separate alpha.
    pub fn to_tint(self) -> (u32, f64) {
        let channel = |v: f64| (v.clamp(0.0, 1.0) * 255.0).round() as u32;
        let tint = (channel(self.r) << 16) | (channel(self.g) << 8) | channel(self.b);
        (tint, self.a.clamp(0.0, 1.0))
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

/// Raw pointer event as delivered by the input source.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MouseEvent {
    pub x: f64,
    pub y: f64,
    pub button: u8,
    pub pressed: bool,
    pub released: bool,
    pub ctrl: bool,
    pub shift: bool,
    pub alt: bool,
}
