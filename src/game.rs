use crate::StringToAnyhow;
use glam::Vec2;
use gridcast::{sweep, Axis, Caster, Config, Grid, Player, Projection, WallSlice};
use sdl2::keyboard::Keycode;
use sdl2::pixels::Color;
use sdl2::rect::{Point, Rect};
use sdl2::render::Canvas;
use sdl2::video::Window;

const PLAYER_RADIUS: f32 = 10.;

fn point(vec: Vec2) -> Point {
    Point::new(vec.x as i32, vec.y as i32)
}

pub(crate) struct Game {
    grid: Grid,
    player: Player,
    config: Config,
    projection: Projection,
    slices: Vec<WallSlice>,
    pub canvas: Canvas<Window>,
    pub running: bool,
    pub update: bool,
}

impl Game {
    pub fn new(grid: Grid, config: Config, canvas: Canvas<Window>) -> Self {
        let player = Player::new(
            Vec2::new(config.player.x, config.player.y),
            config.player.angle,
        );
        if grid.occupied_at(player.position) != Some(false) {
            log::warn!("player starts outside the open floor at {}", player.position);
        }
        let projection = Projection::from_config(&config);

        Self {
            grid,
            player,
            projection,
            slices: Vec::with_capacity(projection.columns()),
            config,
            canvas,
            running: true,
            update: true,
        }
    }

    /// handle a key press (or a repeat of one)
    pub fn key(&mut self, key: Keycode) {
        let turn_step = self.config.player.turn_step;
        let move_step = self.config.player.move_step;
        match key {
            Keycode::Left => self.player.turn(-turn_step),
            Keycode::Right => self.player.turn(turn_step),
            // rays travel against the facing vector, so forward is a negative move
            Keycode::Up => self.step(-move_step),
            Keycode::Down => self.step(move_step),
            Keycode::Q | Keycode::Escape => self.running = false,
            _ => {}
        }
        log::debug!(
            "player at {} facing {}°",
            self.player.position,
            self.player.angle()
        );
    }

    fn step(&mut self, distance: f32) {
        if self.config.player.collision {
            self.player.try_move(distance, &self.grid);
        } else {
            self.player.move_by(distance);
        }
    }

    pub fn draw(&mut self) -> anyhow::Result<()> {
        let caster = Caster::new(&self.grid, self.config.trace.max_steps);
        self.slices = sweep(&caster, &self.player, &self.projection);
        let candidates = caster.candidates(self.player.angle(), self.player.position);

        self.canvas.set_draw_color(Color::BLACK);
        self.canvas.clear();

        self.draw_level()?;
        self.draw_player()?;
        self.draw_rays()?;
        self.draw_walls()?;
        self.draw_candidates(candidates)?;

        Ok(())
    }

    /// top-down view of the grid in the left half of the window
    fn draw_level(&mut self) -> anyhow::Result<()> {
        let block = self.grid.block_size();
        let side = block.ceil() as u32;

        for (row, col, occupied) in self.grid.tiles() {
            let rect = Rect::new(
                (col as f32 * block) as i32,
                (row as f32 * block) as i32,
                side,
                side,
            );
            self.canvas.set_draw_color(if occupied {
                Color::BLACK
            } else {
                Color::WHITE
            });
            self.canvas.fill_rect(rect).ah()?;
            self.canvas.set_draw_color(Color::GREY);
            self.canvas.draw_rect(rect).ah()?;
        }

        Ok(())
    }

    fn draw_player(&mut self) -> anyhow::Result<()> {
        let position = self.player.position;
        // first corner points where the rays go
        let heading = self.player.angle() + 180.;
        let corners = (0..=3)
            .map(|k| {
                let angle = (heading + k as f32 * 120.).to_radians();
                point(position + Vec2::from_angle(angle) * PLAYER_RADIUS)
            })
            .collect::<Vec<_>>();

        self.canvas.set_draw_color(Color::GREEN);
        self.canvas.draw_lines(corners.as_slice()).ah()?;

        Ok(())
    }

    fn draw_rays(&mut self) -> anyhow::Result<()> {
        let origin = point(self.player.position);
        self.canvas.set_draw_color(Color::RED);
        for slice in self.slices.iter() {
            self.canvas
                .draw_line(origin, point(slice.hit.point))
                .ah()?;
        }

        Ok(())
    }

    /// one filled column per ray, in the right half of the window
    fn draw_walls(&mut self) -> anyhow::Result<()> {
        for slice in self.slices.iter() {
            // darken walls struck across vertical lines for contrast
            self.canvas.set_draw_color(match slice.hit.axis {
                Axis::Rows => Color::RGB(0xff, 0, 0),
                Axis::Columns => Color::RGB(0xbb, 0, 0),
            });
            self.canvas
                .fill_rect(Rect::new(
                    (slice.x - slice.width / 2.) as i32,
                    slice.top as i32,
                    slice.width.max(1.) as u32,
                    slice.height.max(1.) as u32,
                ))
                .ah()?;
        }

        Ok(())
    }

    /// both family candidates for the facing angle, before reconciliation
    fn draw_candidates(&mut self, (rows, columns): (Vec2, Vec2)) -> anyhow::Result<()> {
        let origin = point(self.player.position);
        self.canvas.set_draw_color(Color::RED);
        self.canvas.draw_line(origin, point(rows)).ah()?;
        self.canvas.set_draw_color(Color::BLUE);
        self.canvas.draw_line(origin, point(columns)).ah()?;

        Ok(())
    }
}
