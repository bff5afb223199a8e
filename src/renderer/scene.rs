//! Frame rendering
//!
//! Paints the world back to front: sky, clouds, ground, pipes, bird,
//! particles, credit. Apart from ageing particles it never touches the world,
//! so it is safe to call before the first start to show the static frame.

use std::f32::consts::PI;

use glam::Vec2;

use super::paint::{LinearGradient, Paint, Rgba};
use super::surface::{Surface, TextAlign, TextStyle};
use crate::consts::*;
use crate::settings::Settings;
use crate::sim::effects;
use crate::sim::state::{Bird, World};

const SKY_TOP: Rgba = Rgba::hex(0x6ec6ff);
const SKY_BOTTOM: Rgba = Rgba::hex(0xb3e5fc);
const CLOUD: Rgba = Rgba::WHITE.with_alpha(0.8);
const GROUND: Rgba = Rgba::hex(0x8d6e63);
const GROUND_STRIPE: Rgba = Rgba::hex(0x6d4c41);
const PIPE_LEFT: Rgba = Rgba::hex(0x2e7d32);
const PIPE_RIGHT: Rgba = Rgba::hex(0x388e3c);
const BIRD_BODY: Rgba = Rgba::hex(0xffeb3b);
const BIRD_SHADOW: Rgba = Rgba::BLACK.with_alpha(0.4);
const BIRD_WING: Rgba = Rgba::hex(0xf4b400);
const BIRD_EYE: Rgba = Rgba::BLACK;
const CREDIT_SHADOW: Rgba = Rgba::BLACK.with_alpha(0.5);

pub const CREDIT_TEXT: &str = "Made By: Bit";
const CREDIT_FONT: &str = "16px Poppins, sans-serif";

/// Draw one frame and age the particles by one step
pub fn render<S: Surface + ?Sized>(world: &mut World, surface: &mut S, settings: &Settings) {
    draw_background(world, surface);
    draw_clouds(world, surface);
    draw_ground(world, surface);
    draw_pipes(world, surface);
    draw_bird(&world.bird, surface, settings);
    if settings.particles {
        draw_particles(world, surface);
    }
    effects::step(&mut world.particles);
    if settings.show_credit {
        draw_credit(world, surface, settings);
    }
}

fn draw_background<S: Surface + ?Sized>(world: &World, surface: &mut S) {
    let sky = LinearGradient::two_stop(
        Vec2::ZERO,
        Vec2::new(0.0, world.height),
        SKY_TOP,
        SKY_BOTTOM,
    );
    surface.set_fill(&Paint::Linear(sky));
    surface.fill_rect(Vec2::ZERO, Vec2::new(world.width, world.height));
}

fn draw_clouds<S: Surface + ?Sized>(world: &World, surface: &mut S) {
    surface.set_fill(&CLOUD.into());
    for cloud in &world.clouds {
        surface.fill_ellipse(cloud.pos, Vec2::new(cloud.size * 2.0, cloud.size), 0.0);
    }
}

/// Solid strip plus darker stripes shifted by the scroll offset
fn draw_ground<S: Surface + ?Sized>(world: &World, surface: &mut S) {
    surface.set_fill(&GROUND.into());
    surface.fill_rect(
        Vec2::new(0.0, GROUND_Y),
        Vec2::new(world.width, GROUND_HEIGHT),
    );

    surface.set_fill(&GROUND_STRIPE.into());
    let tiles = (world.width / GROUND_TILE + 1.0).ceil() as usize;
    for i in 0..tiles {
        let x = (i as f32 * GROUND_TILE + world.ground_offset) % world.width;
        surface.fill_rect(
            Vec2::new(x, GROUND_Y),
            Vec2::new(GROUND_STRIPE_WIDTH, GROUND_HEIGHT),
        );
    }
}

fn draw_pipes<S: Surface + ?Sized>(world: &World, surface: &mut S) {
    for pipe in &world.pipes {
        let shade = LinearGradient::two_stop(
            Vec2::new(pipe.x, 0.0),
            Vec2::new(pipe.right(), 0.0),
            PIPE_LEFT,
            PIPE_RIGHT,
        );
        surface.set_fill(&Paint::Linear(shade));
        surface.fill_rect(Vec2::new(pipe.x, 0.0), Vec2::new(pipe.width, pipe.top));
        surface.fill_rect(
            Vec2::new(pipe.x, pipe.bottom_top()),
            Vec2::new(pipe.width, world.height - pipe.bottom_top()),
        );
    }
}

/// Bird tilt for a given vertical velocity. Not clamped.
#[inline]
pub fn bird_tilt(vy: f32) -> f32 {
    vy * BIRD_TILT
}

/// Wing vertical offset for an animation frame
#[inline]
pub fn wing_offset(frame: u64) -> f32 {
    (frame as f32 / 5.0).sin() * 3.0
}

fn draw_bird<S: Surface + ?Sized>(bird: &Bird, surface: &mut S, settings: &Settings) {
    surface.save();
    surface.translate(bird.pos);
    if !settings.reduced_motion {
        surface.rotate(bird_tilt(bird.vy));
    }

    // Body
    surface.set_fill(&BIRD_BODY.into());
    if settings.shadows {
        surface.set_shadow(BIRD_SHADOW, 8.0);
    }
    surface.fill_circle(Vec2::ZERO, bird.radius);

    // Wing
    let wing_y = if settings.reduced_motion {
        0.0
    } else {
        wing_offset(bird.frame)
    };
    surface.set_fill(&BIRD_WING.into());
    surface.fill_ellipse(Vec2::new(-5.0, wing_y + 5.0), Vec2::new(8.0, 4.0), PI / 6.0);

    // Eye
    surface.set_fill(&BIRD_EYE.into());
    surface.fill_circle(Vec2::new(7.0, -4.0), 3.0);

    surface.restore();
}

fn draw_particles<S: Surface + ?Sized>(world: &World, surface: &mut S) {
    for particle in &world.particles {
        let (r, g, b) = effects::particle_rgb(particle);
        surface.set_fill(&Rgba::new(r, g, b, particle.alpha).into());
        surface.fill_circle(particle.pos, particle.size);
    }
}

fn draw_credit<S: Surface + ?Sized>(world: &World, surface: &mut S, settings: &Settings) {
    let style = TextStyle {
        font: CREDIT_FONT.to_string(),
        align: TextAlign::Center,
    };
    surface.save();
    surface.set_fill(&Rgba::WHITE.into());
    if settings.shadows {
        surface.set_shadow(CREDIT_SHADOW, 3.0);
    }
    surface.fill_text(
        CREDIT_TEXT,
        Vec2::new(world.width / 2.0, world.height - 10.0),
        &style,
    );
    surface.restore();
}
