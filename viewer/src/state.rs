//! Handles the state for the viewer.

use loader::Star;
use simulator::camera::CameraPose;
use simulator::config::SimulationConfig;
use simulator::damage::DamageState;
use simulator::{CameraMode, Command, Frame, Simulation};

use euclid::default::Point3D;
use ggez::event::EventHandler;
use ggez::input::keyboard::KeyCode;
use ggez::{
    graphics::{Canvas, Color, DrawMode, DrawParam, Mesh, Text},
    Context, GameResult,
};

use crate::projection::{Disc, Projector};
use std::collections::HashSet;

/// The state of the viewer.
pub struct State {
    simulation: Simulation,
    /// Background, drawn behind everything.
    stars: Vec<Star>,
    /// The camera pose used for the last frame drawn.
    camera: CameraPose,
    /// The latest frame out of the simulation.
    frame: Option<Frame>,
    /// All the keypresses last frame
    prev_keys: HashSet<KeyCode>,
}

/// Something to draw this frame, in back-to-front order.
struct Sprite {
    disc: Disc,
    fill: Color,
    outline: Option<Color>,
}

impl State {
    pub fn new(_ctx: &mut Context, simulation: Simulation, stars: Vec<Star>) -> Self {
        State {
            camera: simulation.camera(),
            simulation,
            stars,
            frame: None,
            prev_keys: HashSet::new(),
        }
    }

    /// True on the first frame a key is held.
    fn just_pressed(&self, ctx: &Context, key: KeyCode) -> bool {
        ctx.keyboard.is_key_pressed(key) && !self.prev_keys.contains(&key)
    }

    /// Turn this frame's keys into commands for the simulation.
    fn handle_keys(&mut self, ctx: &mut Context) {
        if self.just_pressed(ctx, KeyCode::S) {
            self.simulation.queue(Command::DetachCamera);
        }
        if self.just_pressed(ctx, KeyCode::D) {
            self.simulation.queue(Command::AttachCamera);
        }
        if self.just_pressed(ctx, KeyCode::L) {
            self.simulation.queue(Command::Launch);
        }
        if self.just_pressed(ctx, KeyCode::R) {
            self.simulation.queue(Command::Reset);
        }
        if self.just_pressed(ctx, KeyCode::Escape) {
            ctx.request_quit();
        }

        // Held keys slide the projectile's speed and size, like the old sliders.
        let config = *self.simulation.config();
        if ctx.keyboard.is_key_pressed(KeyCode::Up) {
            let speed = SimulationConfig::clamp_speed(config.projectile_speed() * SLIDER_SPEED);
            self.simulation.queue(Command::SetSpeed(speed));
        }
        if ctx.keyboard.is_key_pressed(KeyCode::Down) {
            let speed = SimulationConfig::clamp_speed(config.projectile_speed() / SLIDER_SPEED);
            self.simulation.queue(Command::SetSpeed(speed));
        }
        if ctx.keyboard.is_key_pressed(KeyCode::Right) {
            let size = SimulationConfig::clamp_size(config.projectile_size() * SLIDER_SPEED);
            self.simulation.queue(Command::SetSize(size));
        }
        if ctx.keyboard.is_key_pressed(KeyCode::Left) {
            let size = SimulationConfig::clamp_size(config.projectile_size() / SLIDER_SPEED);
            self.simulation.queue(Command::SetSize(size));
        }

        // Update previous keys
        self.prev_keys = ctx.keyboard.pressed_keys().to_owned();
    }

    /// Everything in the scene that lands on screen, farthest first.
    fn sprites(&self, frame: &Frame, projector: &Projector) -> Vec<Sprite> {
        let scenery = self.simulation.scenery();
        let mut sprites = Vec::new();

        let (fill, outline) = match frame.damage {
            DamageState::Destroyed => (DESTROYED_COLOR, DESTROYED_OUTLINE),
            _ => (scenery.planet.color, scenery.planet.outline),
        };
        if let Some(disc) = projector.sphere(&frame.planet) {
            sprites.push(Sprite {
                disc,
                fill: Color::from_rgb_u32(fill),
                outline: Some(Color::from_rgb_u32(outline)),
            });
        }

        if frame.damage == DamageState::Cratered {
            // The projectile comes in along +z, so that's where it hit.
            let site = Point3D::new(0.0, 0.0, scenery.surface_scale);
            if let (Some((x, y, depth)), Some(planet)) =
                (projector.point(site), projector.sphere(&frame.planet))
            {
                sprites.push(Sprite {
                    // Nudged forward so it sorts in front of the planet.
                    disc: Disc {
                        x,
                        y,
                        radius: planet.radius * CRATER_SIZE,
                        depth: depth.min(planet.depth) - 0.01,
                    },
                    fill: Color::from_rgb_u32(CRATER_COLOR),
                    outline: None,
                });
            }
        }

        if let (Some(satellite), Some(pose)) = (&scenery.satellite, &frame.satellite) {
            if let Some(disc) = projector.sphere(pose) {
                sprites.push(Sprite {
                    disc,
                    fill: Color::from_rgb_u32(satellite.color),
                    outline: Some(Color::from_rgb_u32(satellite.outline)),
                });
            }
        }

        if let Some(disc) = frame.projectile.and_then(|pose| projector.sphere(&pose)) {
            sprites.push(Sprite {
                disc,
                fill: Color::from_rgb_u32(PROJECTILE_COLOR),
                outline: None,
            });
        }

        for pose in &frame.debris {
            if let Some(disc) = projector.sphere(pose) {
                sprites.push(Sprite {
                    disc: Disc {
                        radius: disc.radius * FRAGMENT_SIZE,
                        ..disc
                    },
                    fill: Color::from_rgb_u32(FRAGMENT_COLOR),
                    outline: None,
                });
            }
        }

        sprites.retain(|sprite| projector.visible(&sprite.disc));
        sprites.sort_by(|a, b| b.disc.depth.total_cmp(&a.disc.depth));
        sprites
    }

    /// The old control panel's live numbers.
    fn hud(&self, frame: &Frame) -> String {
        let r = &frame.readout;
        format!(
            "[S] static camera  [D] dynamic camera  [L] launch  [R] reset\n\
             [Up/Down] velocity  [Left/Right] radius\n\n\
             Projectile velocity: {:.0} m/s ({:.12}c)\n\
             Lorentz factor: {:.12}\n\
             Projectile radius: {:.0} m ({:.4}% of {}'s radius)\n\
             Classical kinetic energy: {:.6e} J\n\
             Relativistic kinetic energy: {:.6e} J ({:.3}x threshold)\n\n\
             Planet: {:?}   Camera: {}   {}",
            r.speed,
            r.fraction_of_c,
            r.lorentz,
            r.size,
            r.percent_of_planet_radius,
            self.simulation.scenery().planet.name,
            r.classical_energy,
            r.relativistic_energy,
            r.energy_ratio,
            frame.damage,
            match frame.camera_mode {
                CameraMode::Overview => "static",
                CameraMode::Attached => "dynamic",
            },
            if frame.projectile_state.impacted {
                "impacted"
            } else if frame.projectile_state.launched {
                "in flight"
            } else {
                "waiting"
            },
        )
    }
}

impl EventHandler for State {
    fn update(&mut self, ctx: &mut Context) -> GameResult<()> {
        self.handle_keys(ctx);

        let ms = ctx.time.time_since_start().as_secs_f64() * 1000.0;
        let frame = self.simulation.frame(ms, &self.camera);
        self.camera = frame.camera;
        self.frame = Some(frame);
        Ok(())
    }

    fn draw(&mut self, ctx: &mut Context) -> GameResult<()> {
        let mut canvas = Canvas::from_frame(ctx, Color::from_rgb_u32(BACKGROUND));

        let (scr_w, scr_h) = ctx.gfx.drawable_size();
        let projector = Projector::new(self.camera, scr_w, scr_h);

        // Stars sit around the camera, so only its rotation matters for them.
        let eye = self
            .camera
            .inverse()
            .and_then(|to_world| to_world.transform_point3d(Point3D::origin()))
            .unwrap_or_else(Point3D::origin);
        for star in &self.stars {
            if let Some((x, y, _)) = projector.point(eye + star.pos.to_vector()) {
                let shade = star.brightness;
                let mesh = Mesh::new_circle(
                    ctx,
                    DrawMode::fill(),
                    [x, y],
                    STAR_RADIUS,
                    0.5,
                    Color::new(shade, shade, shade, 1.0),
                )?;
                canvas.draw(&mesh, DrawParam::default());
            }
        }

        if let Some(frame) = &self.frame {
            for sprite in self.sprites(frame, &projector) {
                // Everything has to be at least half a pixel wide, otherwise it's impossible to see.
                let radius = sprite.disc.radius.max(0.5);
                let center = [sprite.disc.x, sprite.disc.y];
                let mesh = Mesh::new_circle(ctx, DrawMode::fill(), center, radius, 0.1, sprite.fill)?;
                canvas.draw(&mesh, DrawParam::default());
                if let Some(outline) = sprite.outline {
                    let ring = Mesh::new_circle(
                        ctx,
                        DrawMode::stroke((radius / 10.0).max(1.0)),
                        center,
                        radius,
                        0.1,
                        outline,
                    )?;
                    canvas.draw(&ring, DrawParam::default());
                }
            }

            canvas.draw(
                &Text::new(self.hud(frame)),
                DrawParam::default().dest([10.0, 10.0]).color(Color::WHITE),
            );
        }

        canvas.finish(ctx)
    }
}

/// Held speed/size keys multiply or divide by this much per frame.
const SLIDER_SPEED: f64 = 1.05;

const BACKGROUND: u32 = 0x000000;
const DESTROYED_COLOR: u32 = 0xFF0000;
const DESTROYED_OUTLINE: u32 = 0x7a0000;
const CRATER_COLOR: u32 = 0xFF0000;
const PROJECTILE_COLOR: u32 = 0xFF0000;
const FRAGMENT_COLOR: u32 = 0x808080;

/// Crater radius as a fraction of the planet's on-screen radius.
const CRATER_SIZE: f32 = 0.2;
/// Fragments are drawn smaller than the shell they're spread over.
const FRAGMENT_SIZE: f32 = 0.15;
const STAR_RADIUS: f32 = 1.0;
