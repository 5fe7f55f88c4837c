//! Confetti celebration for the TUI
//!
//! A victory fires several bursts from a shared origin. Each burst takes a
//! share of the total particle count (`floor(count * ratio)`) and has its
//! own spread, launch velocity, decay and size. Particles then fall under
//! gravity and disappear after a fixed number of ticks.
//!
//! Positions are fractions of the drawing area (`0.0..=1.0` on both axes,
//! y pointing down) so the effect scales with the terminal.

use crate::core::GuessRecord;
use crate::game::CelebrationSink;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use ratatui::{buffer::Buffer, layout::Rect, style::Color, widgets::Widget};

/// Particles across all bursts of one celebration
pub const PARTICLE_COUNT: usize = 200;

const GRAVITY: f64 = 0.0025;
const VELOCITY_SCALE: f64 = 0.0009;
const PARTICLE_TICKS: u16 = 120;
const PALETTE: [Color; 6] = [
    Color::Red,
    Color::Yellow,
    Color::Green,
    Color::Cyan,
    Color::Magenta,
    Color::LightBlue,
];

/// Launch point as fractions of the drawing area
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Origin {
    pub x: f64,
    pub y: f64,
}

/// Shape of a single burst
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BurstOptions {
    /// Cone width in degrees, centered straight up
    pub spread: f64,
    pub start_velocity: f64,
    /// Velocity multiplier applied every tick
    pub decay: f64,
    /// Particle size; picks the glyph
    pub scalar: f64,
}

impl Default for BurstOptions {
    fn default() -> Self {
        Self {
            spread: 45.0,
            start_velocity: 45.0,
            decay: 0.9,
            scalar: 1.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
struct Particle {
    x: f64,
    y: f64,
    vx: f64,
    vy: f64,
    decay: f64,
    glyph: char,
    color: Color,
    ticks_left: u16,
}

impl Particle {
    fn step(&mut self) {
        self.x += self.vx;
        self.y += self.vy;
        self.vx *= self.decay;
        self.vy = self.vy * self.decay + GRAVITY;
        self.ticks_left = self.ticks_left.saturating_sub(1);
    }

    fn is_alive(&self) -> bool {
        self.ticks_left > 0 && self.y <= 1.0 && (0.0..=1.0).contains(&self.x)
    }
}

/// Live confetti particles; doubles as the TUI's celebration sink
#[derive(Debug, Clone)]
pub struct Confetti {
    particles: Vec<Particle>,
    rng: StdRng,
}

impl Default for Confetti {
    fn default() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }
}

impl Confetti {
    #[must_use]
    pub fn with_rng(rng: StdRng) -> Self {
        Self {
            particles: Vec::new(),
            rng,
        }
    }

    /// Fire one burst of `floor(count * particle_ratio)` particles
    pub fn throw(&mut self, count: usize, origin: Origin, particle_ratio: f64, opts: BurstOptions) {
        let particles = (count as f64 * particle_ratio).floor() as usize;
        let glyph = if opts.scalar < 1.0 {
            '·'
        } else if opts.scalar > 1.0 {
            '■'
        } else {
            '▪'
        };

        for _ in 0..particles {
            let angle = (90.0 + self.rng.random_range(-0.5..=0.5) * opts.spread).to_radians();
            let velocity = opts.start_velocity
                * VELOCITY_SCALE
                * (0.5 + self.rng.random_range(0.0..=0.5));
            let color = PALETTE[self.rng.random_range(0..PALETTE.len())];

            self.particles.push(Particle {
                x: origin.x,
                y: origin.y,
                vx: angle.cos() * velocity,
                vy: -angle.sin() * velocity,
                decay: opts.decay,
                glyph,
                color,
                ticks_left: PARTICLE_TICKS,
            });
        }
    }

    /// Layered celebration: narrow fast core, wide slow edges
    pub fn fire(&mut self) {
        let origin = Origin { x: 0.5, y: 0.7 };
        let bursts = [
            (
                0.25,
                BurstOptions {
                    spread: 26.0,
                    start_velocity: 55.0,
                    ..BurstOptions::default()
                },
            ),
            (
                0.2,
                BurstOptions {
                    spread: 60.0,
                    ..BurstOptions::default()
                },
            ),
            (
                0.35,
                BurstOptions {
                    spread: 100.0,
                    decay: 0.91,
                    scalar: 0.8,
                    ..BurstOptions::default()
                },
            ),
            (
                0.1,
                BurstOptions {
                    spread: 120.0,
                    start_velocity: 25.0,
                    decay: 0.92,
                    scalar: 1.2,
                },
            ),
            (
                0.1,
                BurstOptions {
                    spread: 120.0,
                    ..BurstOptions::default()
                },
            ),
        ];

        for (ratio, opts) in bursts {
            self.throw(PARTICLE_COUNT, origin, ratio, opts);
        }
    }

    /// Advance every particle and drop the ones that are gone
    pub fn tick(&mut self) {
        for particle in &mut self.particles {
            particle.step();
        }
        self.particles.retain(Particle::is_alive);
    }

    pub fn clear(&mut self) {
        self.particles.clear();
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.particles.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}

impl CelebrationSink for Confetti {
    fn celebrate(&mut self, _winning: &GuessRecord, _turns: usize) {
        self.fire();
    }
}

impl Widget for &Confetti {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let max_x = f64::from(area.width - 1);
        let max_y = f64::from(area.height - 1);

        for particle in &self.particles {
            let x = area.x + (particle.x * max_x).round() as u16;
            let y = area.y + (particle.y.max(0.0) * max_y).round() as u16;
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_char(particle.glyph).set_fg(particle.color);
            }
        }
    }
}
