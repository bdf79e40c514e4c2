//! The world registry and per-frame step

use crate::config::GameConfig;
use crate::enemy::Enemy;
use crate::error::Result;
use crate::events::SimEvent;
use crate::input::FrameInput;
use crate::map::{parse_grid, TileKind};
use crate::player::{Player, PlayerAction};
use deadfall_combat::{fire, MeleeBox, Projectile};
use deadfall_event::EventChannel;
use deadfall_inventory::{ItemKind, Pickup};
use deadfall_math::{Rect, Vec2};
use deadfall_physics::first_overlap;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Whether the session is still being played.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Session {
    Playing,
    GameOver,
}

/// Owner of every live entity, stepped once per frame.
///
/// All collections are typed and iterated directly by the systems that
/// need them; there is no runtime group membership and no global state.
/// The renderer reads the public fields; the audio subsystem drains
/// [`SimEvent`]s from [`World::events`].
pub struct World {
    config: GameConfig,
    rng: SmallRng,
    pub player: Player,
    pub enemies: Vec<Enemy>,
    pub projectiles: Vec<Projectile>,
    pub pickups: Vec<Pickup>,
    pub obstacles: Vec<Rect>,
    /// The active melee swing, if any. At most one exists at a time.
    pub melee_box: Option<MeleeBox>,
    session: Session,
    time_ms: f64,
    events: EventChannel<SimEvent>,
}

impl World {
    /// Build a world from a tile grid. Obstacles become static rects;
    /// agents and items spawn centered on their tile coordinates, with
    /// per-spawn stats sampled from the seeded RNG in grid order (a fixed
    /// seed reproduces the whole session).
    pub fn build(rows: &[&str], config: GameConfig, seed: u64) -> Result<Self> {
        let mut rng = SmallRng::seed_from_u64(seed);
        let tile = config.tile_size.0;

        let mut player = None;
        let mut enemies = Vec::new();
        let mut pickups = Vec::new();
        let mut obstacles = Vec::new();

        for placement in parse_grid(rows)? {
            // Agents and items center on the tile coordinate; walls fill
            // the tile, anchored at the same coordinate as their top-left.
            let at = Vec2::new(placement.col as f32 * tile, placement.row as f32 * tile);
            match placement.kind {
                TileKind::Wall => obstacles.push(Rect::from_top_left(at, tile, tile)),
                TileKind::PlayerSpawn => player = Some(Player::spawn(at, &config.player)),
                TileKind::EnemySpawn => {
                    enemies.push(Enemy::spawn(at, &config.enemy, &mut rng))
                }
                TileKind::ItemSpawn(kind) => {
                    pickups.push(Pickup::spawn(kind, at, &config.items, &mut rng))
                }
                TileKind::Floor => {}
            }
        }

        // parse_grid guarantees exactly one player placement.
        let player = player.ok_or(crate::error::WorldError::NoPlayerSpawn)?;

        log::info!(
            "world built: {} obstacles, {} enemies, {} items",
            obstacles.len(),
            enemies.len(),
            pickups.len()
        );

        Ok(Self {
            config,
            rng,
            player,
            enemies,
            projectiles: Vec::new(),
            pickups,
            obstacles,
            melee_box: None,
            session: Session::Playing,
            time_ms: 0.0,
            events: EventChannel::new(),
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn session(&self) -> Session {
        self.session
    }

    /// Session clock, milliseconds of simulated time.
    pub fn time_ms(&self) -> f64 {
        self.time_ms
    }

    /// Simulation event stream for audio/HUD collaborators.
    pub fn events(&self) -> &EventChannel<SimEvent> {
        &self.events
    }

    /// Advance the simulation one frame. `dt` is wall-clock seconds since
    /// the previous frame, clamped to the configured maximum before any
    /// integration. A finished session ignores further steps.
    pub fn step(&mut self, input: &FrameInput, dt: f32) {
        if self.session == Session::GameOver {
            return;
        }
        let dt = self.config.physics.clamp_dt(dt);
        self.time_ms += f64::from(dt) * 1000.0;

        self.update_player(input, dt);
        self.update_enemies(dt);
        self.update_projectiles(dt);
        self.resolve_combat();
        self.resolve_pickups();
    }

    /// Input effects, movement, and weapon handling for the player.
    fn update_player(&mut self, input: &FrameInput, dt: f32) {
        let Self {
            config,
            rng,
            player,
            projectiles,
            obstacles,
            melee_box,
            events,
            time_ms,
            ..
        } = self;

        player.update_aim(input.aim);

        if let Some(kind) = input.switch_weapon {
            if player.arsenal.owns(kind) {
                player.weapon = kind;
            }
        }

        let spec = config.weapons.spec(player.weapon);
        let footstep =
            player.update_movement(input, &config.player, spec, config.physics.drag, obstacles, dt);
        if footstep {
            events.send(SimEvent::Footstep);
        }

        if input.reload && player.arsenal.reload(player.weapon, &config.weapons) {
            events.send(SimEvent::Reloaded(player.weapon));
            player.action = PlayerAction::Reload;
        }

        // Fire is gated by the per-weapon rate; an empty clip clicks at the
        // same cadence instead of shooting.
        if input.fire && player.weapon.is_firearm() {
            if let Some(ranged) = spec.ranged.as_ref() {
                if *time_ms - player.last_shot_ms >= f64::from(ranged.fire_rate_ms) {
                    if player.arsenal.take_round(player.weapon) {
                        projectiles.extend(fire(
                            spec,
                            player.body.position,
                            player.rotation,
                            rng,
                        ));
                        events.send(SimEvent::WeaponFired(player.weapon));
                        player.action = PlayerAction::Shoot;
                    } else {
                        events.send(SimEvent::EmptyClip(player.weapon));
                    }
                    player.last_shot_ms = *time_ms;
                }
            }
        }

        // Advance the current swing; spawn a new one only once it is gone.
        if let Some(swing) = melee_box {
            if !swing.tick(dt) {
                *melee_box = None;
            }
        }
        if input.melee && melee_box.is_none() {
            *melee_box = Some(MeleeBox::swing(
                spec,
                player.body.position,
                player.rotation,
                config.player.melee_stumble,
                rng,
            ));
            events.send(SimEvent::MeleeSwing(player.weapon));
            player.action = PlayerAction::Melee;
        }
    }

    /// Brain + steering + movement for every enemy.
    fn update_enemies(&mut self, dt: f32) {
        let Self {
            config,
            rng,
            player,
            enemies,
            obstacles,
            ..
        } = self;

        // Positions snapshotted before anyone moves, so separation is
        // order-independent within the frame.
        let flock: Vec<Vec2> = enemies.iter().map(|e| e.body.position).collect();

        for enemy in enemies.iter_mut() {
            enemy.update(
                player.body.position,
                &flock,
                obstacles,
                &config.enemy,
                config.physics.drag,
                dt,
                rng,
            );
        }
    }

    /// Flight, expiry, and wall hits for bullets.
    fn update_projectiles(&mut self, dt: f32) {
        let obstacles = &self.obstacles;
        self.projectiles.retain_mut(|projectile| {
            projectile.body.integrate(dt);
            projectile.tick(dt) && first_overlap(&projectile.body.hit, obstacles).is_none()
        });
    }

    /// Combat arbitration, in fixed order:
    ///
    /// 1. Enemies touching the player: a live melee box overlapping the
    ///    enemy wins (enemy stumbles and takes the hit, the player takes
    ///    nothing); otherwise the enemy deals contact damage and stops.
    ///    Any touch shoves the player along the first toucher's facing.
    /// 2. A still-live melee box lands on the first enemy it overlaps.
    /// 3. Bullets: every overlap damages the enemy and marks it; bullets
    ///    are destroyed unless they punch through. All hits apply before
    ///    the death sweep, so two 30s kill a 50.
    /// 4. Death sweep: dead enemies leave the world this frame and are
    ///    invisible to every later pass.
    fn resolve_combat(&mut self) {
        let Self {
            config,
            rng,
            player,
            enemies,
            projectiles,
            melee_box,
            events,
            session,
            time_ms,
            ..
        } = self;

        // -------- contact vs. melee precedence --------
        let player_rect = player.body.hit;
        let mut first_toucher_rot = None;

        for enemy in enemies.iter_mut() {
            if !enemy.body.hit.overlaps(&player_rect) {
                continue;
            }
            if first_toucher_rot.is_none() {
                first_toucher_rot = Some(enemy.rotation);
            }

            let meleed = melee_box
                .as_ref()
                .map_or(false, |swing| swing.rect.overlaps(&enemy.body.hit));
            if meleed {
                if let Some(swing) = melee_box.take() {
                    land_melee(enemy, &swing, rng, events);
                }
            } else {
                enemy.body.velocity = Vec2::ZERO;
                if enemy.can_attack() {
                    enemy.start_attack_cooldown(&config.enemy);
                    let (lo, hi) = config.enemy.damage;
                    let damage = rng.gen_range(lo..=hi);
                    let died = player.apply_damage(damage);
                    events.send(SimEvent::PlayerHurt { damage });
                    if died {
                        log::info!("player died at t={:.0}ms", *time_ms);
                        events.send(SimEvent::PlayerDied);
                        *session = Session::GameOver;
                    }
                }
            }
        }

        if let Some(rotation) = first_toucher_rot {
            player.knockback(rotation, config.enemy.knockback);
        }

        // -------- melee vs. enemies beyond contact range --------
        if let Some(swing) = melee_box.as_ref().copied() {
            let victim = enemies
                .iter_mut()
                .find(|enemy| enemy.health.is_alive() && swing.rect.overlaps(&enemy.body.hit));
            if let Some(enemy) = victim {
                land_melee(enemy, &swing, rng, events);
                *melee_box = None;
            }
        }

        // -------- bullets vs. enemies --------
        let mut destroyed = vec![false; projectiles.len()];
        for enemy in enemies.iter_mut() {
            if enemy.health.is_dead() {
                continue;
            }
            let mut hit_any = false;
            for (index, projectile) in projectiles.iter_mut().enumerate() {
                if destroyed[index] || !projectile.body.hit.overlaps(&enemy.body.hit) {
                    continue;
                }
                enemy.hit();
                enemy.health.damage(projectile.damage);
                events.send(SimEvent::BulletHit);
                hit_any = true;
                if !projectile.punch_through(rng) {
                    destroyed[index] = true;
                }
            }
            if hit_any {
                enemy.body.velocity = Vec2::ZERO;
            }
        }
        let mut flags = destroyed.into_iter();
        projectiles.retain(|_| !flags.next().unwrap_or(false));

        // -------- death sweep --------
        enemies.retain(|enemy| {
            if enemy.health.is_dead() {
                log::debug!("enemy down at {:?}", enemy.body.position);
                events.send(SimEvent::EnemyDied);
                false
            } else {
                true
            }
        });
    }

    /// Overlap-triggered item consumption. A dead player picks up nothing.
    fn resolve_pickups(&mut self) {
        let Self {
            config,
            player,
            pickups,
            events,
            ..
        } = self;

        if player.health.is_dead() {
            return;
        }

        let player_rect = player.body.hit;
        pickups.retain(|pickup| {
            if !pickup.rect.overlaps(&player_rect) {
                return true;
            }
            apply_pickup(player, pickup, config, events);
            false
        });
    }
}

/// Land a melee hit: mark, stumble, then either the lethality roll or
/// plain weapon damage.
fn land_melee(enemy: &mut Enemy, swing: &MeleeBox, rng: &mut SmallRng, events: &EventChannel<SimEvent>) {
    enemy.hit();
    enemy.body.velocity = swing.stumble_velocity();
    if swing.roll_lethal(rng) {
        enemy.health.kill();
    } else {
        enemy.health.damage(swing.damage);
    }
    events.send(SimEvent::MeleeHit);
}

/// Apply one consumed item to the player.
fn apply_pickup(
    player: &mut Player,
    pickup: &Pickup,
    config: &GameConfig,
    events: &EventChannel<SimEvent>,
) {
    match pickup.kind {
        ItemKind::Weapon(kind) => {
            // First acquisition grants the weapon's defaults; the item's
            // own magazines merge on top either way, and the player draws
            // the new weapon.
            player.arsenal.add_weapon(kind, &config.weapons);
            player.arsenal.add_reloads(kind, pickup.quantity);
            player.weapon = kind;
        }
        ItemKind::Health => player.health.heal(pickup.quantity as i32),
        ItemKind::Ammo => {
            // Ammo feeds the wielded firearm; with the knife drawn the box
            // is wasted.
            player.arsenal.add_reloads(player.weapon, pickup.quantity);
        }
        ItemKind::Armour => player.armour += pickup.quantity as i32,
    }
    log::debug!("picked up {:?} x{}", pickup.kind, pickup.quantity);
    events.send(SimEvent::ItemPickedUp(pickup.kind));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_world() -> World {
        let grid = [
            "11111111",
            "1P....E1",
            "1......1",
            "1..R...1",
            "11111111",
        ];
        World::build(&grid, GameConfig::default(), 7).unwrap()
    }

    #[test]
    fn test_build_places_everything() {
        let world = small_world();
        assert_eq!(world.enemies.len(), 1);
        assert_eq!(world.pickups.len(), 1);
        assert_eq!(world.obstacles.len(), 22);
        assert_eq!(world.player.body.position, Vec2::new(64.0, 64.0));
        assert_eq!(world.session(), Session::Playing);
    }

    #[test]
    fn test_wall_rects_are_tile_sized() {
        let world = small_world();
        let wall = world.obstacles[0];
        assert_eq!(wall.width(), 64.0);
        // First wall tile is at grid (0, 0): top-left at the origin.
        assert_eq!(wall.center, Vec2::new(32.0, 32.0));
    }

    #[test]
    fn test_step_advances_clock_with_clamp() {
        let mut world = small_world();
        world.step(&FrameInput::idle(), 0.016);
        assert!((world.time_ms() - 16.0).abs() < 0.01);

        // A 10 second stall integrates as the configured maximum.
        world.step(&FrameInput::idle(), 10.0);
        assert!((world.time_ms() - 116.0).abs() < 0.01);
    }

    #[test]
    fn test_game_over_freezes_the_world() {
        let mut world = small_world();
        world.session = Session::GameOver;
        let before = world.player.body.position;
        world.step(&FrameInput::moving(Vec2::new(1.0, 0.0)), 0.016);
        assert_eq!(world.player.body.position, before);
        assert!((world.time_ms() - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_deterministic_under_seed() {
        let grid = [
            "111111111",
            "1P..E...1",
            "1...E..E1",
            "111111111",
        ];
        let mut a = World::build(&grid, GameConfig::default(), 42).unwrap();
        let mut b = World::build(&grid, GameConfig::default(), 42).unwrap();

        let input = FrameInput::moving(Vec2::new(1.0, 0.5));
        for _ in 0..60 {
            a.step(&input, 1.0 / 60.0);
            b.step(&input, 1.0 / 60.0);
        }

        assert_eq!(a.player.body.position, b.player.body.position);
        assert_eq!(a.enemies.len(), b.enemies.len());
        for (ea, eb) in a.enemies.iter().zip(&b.enemies) {
            assert_eq!(ea.body.position, eb.body.position);
            assert_eq!(ea.health, eb.health);
        }
    }
}
