//! Game engine — the core of the game.
//!
//! `GameEngine` owns the hecs ECS world, drives the menu/play/pause/game-over
//! state machine, runs all systems in a fixed per-tick order, and produces
//! `GameSnapshot`s. Completely headless, enabling deterministic testing.

use std::collections::VecDeque;

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use skyblazer_core::commands::PlayerCommand;
use skyblazer_core::components::PlayerCraft;
use skyblazer_core::constants::*;
use skyblazer_core::enums::{BoltKind, GamePhase, RunOutcome, ThrustAxis};
use skyblazer_core::events::AudioEvent;
use skyblazer_core::state::GameSnapshot;
use skyblazer_core::types::{Position, SimTime, Velocity};

use crate::progress::ScoreState;
use crate::systems;
use crate::world_setup;

/// Configuration for a new engine.
pub struct EngineConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self { seed: 42 }
    }
}

/// The game engine. Owns the ECS world and all run state.
pub struct GameEngine {
    world: World,
    time: SimTime,
    phase: GamePhase,
    selected_level: usize,
    score: ScoreState,
    outcome: Option<RunOutcome>,
    cheat: bool,
    boss_spawned: bool,
    quit_requested: bool,
    rng: ChaCha8Rng,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<hecs::Entity>,
    audio_events: Vec<AudioEvent>,
}

impl GameEngine {
    /// Create a new engine in the main menu.
    pub fn new(config: EngineConfig) -> Self {
        Self {
            world: World::new(),
            time: SimTime::default(),
            phase: GamePhase::default(),
            selected_level: 0,
            score: ScoreState::default(),
            outcome: None,
            cheat: false,
            boss_spawned: false,
            quit_requested: false,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            audio_events: Vec::new(),
        }
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the game by one tick of `dt` wall-clock seconds and return the
    /// resulting snapshot. While not actively playing, only command
    /// processing runs — the clock, spawns, and all entity updates freeze.
    pub fn tick(&mut self, dt: f64) -> GameSnapshot {
        self.process_commands();

        if self.phase == GamePhase::Playing {
            self.run_systems(dt);
            self.evaluate_run_end();
            self.time.advance(dt);
        }

        let audio_events = std::mem::take(&mut self.audio_events);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.phase,
            &self.score,
            self.selected_level,
            self.outcome,
            self.cheat,
            audio_events,
        )
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get the current score state.
    pub fn score(&self) -> &ScoreState {
        &self.score
    }

    /// How the current (or last) run ended, if it has.
    pub fn outcome(&self) -> Option<RunOutcome> {
        self.outcome
    }

    /// True once the player has asked to quit from the main menu. Process
    /// exit is the host's job.
    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command. Commands with no mapping for the
    /// current phase fall through as silent no-ops.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::Confirm => match self.phase {
                GamePhase::MainMenu => {
                    self.phase = GamePhase::LevelSelect;
                    self.selected_level = 0;
                }
                GamePhase::LevelSelect => {
                    self.reset_run(self.selected_level);
                }
                // Confirm while paused abandons the run back to level select.
                GamePhase::Paused => {
                    self.phase = GamePhase::LevelSelect;
                }
                GamePhase::GameOver => {
                    self.reset_run(0);
                }
                GamePhase::Playing => {}
            },
            PlayerCommand::Cancel => match self.phase {
                GamePhase::Playing => self.phase = GamePhase::Paused,
                GamePhase::Paused => self.phase = GamePhase::Playing,
                GamePhase::LevelSelect | GamePhase::GameOver => self.phase = GamePhase::MainMenu,
                GamePhase::MainMenu => self.quit_requested = true,
            },
            PlayerCommand::SelectLevel { delta } => {
                if self.phase == GamePhase::LevelSelect {
                    let selected = self.selected_level as i32 + delta;
                    self.selected_level = selected.clamp(0, LEVEL_COUNT as i32 - 1) as usize;
                }
            }
            PlayerCommand::Thrust { axis, sign } => {
                if self.phase == GamePhase::Playing {
                    self.apply_thrust(axis, sign);
                }
            }
            PlayerCommand::FirePrimary => {
                if self.phase == GamePhase::Playing {
                    self.fire_primary();
                }
            }
            PlayerCommand::FireSecondary => {
                if self.phase == GamePhase::Playing {
                    self.fire_secondary();
                }
            }
            PlayerCommand::ToggleCheat => {
                if self.phase == GamePhase::Playing {
                    self.cheat = !self.cheat;
                }
            }
        }
    }

    /// Reset all run-scoped state and start playing at `level`.
    fn reset_run(&mut self, level: usize) {
        self.world.clear();
        world_setup::spawn_player(&mut self.world);
        self.score = ScoreState::new(level);
        self.outcome = None;
        self.cheat = false;
        self.boss_spawned = false;
        self.time = SimTime::default();
        self.audio_events.clear();
        self.phase = GamePhase::Playing;
    }

    /// One thrust input: a fixed velocity impulse on one axis, clamped to the
    /// per-axis speed cap.
    fn apply_thrust(&mut self, axis: ThrustAxis, sign: f64) {
        for (_entity, (_craft, vel)) in self.world.query_mut::<(&PlayerCraft, &mut Velocity)>() {
            match axis {
                ThrustAxis::Lateral => {
                    vel.x = (vel.x + sign * THRUST_IMPULSE)
                        .clamp(-PLAYER_MAX_AXIS_SPEED, PLAYER_MAX_AXIS_SPEED);
                }
                ThrustAxis::Vertical => {
                    vel.y = (vel.y + sign * THRUST_IMPULSE)
                        .clamp(-PLAYER_MAX_AXIS_SPEED, PLAYER_MAX_AXIS_SPEED);
                }
            }
        }
    }

    /// Fire the primary weapon: a laser bolt while the laser is armed,
    /// otherwise a normal bolt.
    fn fire_primary(&mut self) {
        let shot = {
            let mut query = self.world.query::<(&PlayerCraft, &Position)>();
            query.iter().next().map(|(_, (craft, pos))| {
                let kind = if craft.laser_ticks > 0 {
                    BoltKind::Laser
                } else {
                    BoltKind::Normal
                };
                (*pos, kind)
            })
        };
        if let Some((origin, kind)) = shot {
            world_setup::spawn_bolt(&mut self.world, origin, kind);
        }
    }

    /// Fire a missile volley. A request during the cooldown window is a
    /// silent no-op.
    fn fire_secondary(&mut self) {
        let mut origin = None;
        for (_entity, (craft, pos)) in self.world.query_mut::<(&mut PlayerCraft, &Position)>() {
            if craft.missile_cooldown == 0 {
                craft.missile_cooldown = MISSILE_COOLDOWN_TICKS;
                origin = Some(*pos);
            }
        }
        if let Some(origin) = origin {
            world_setup::spawn_missile_volley(&mut self.world, origin);
            self.audio_events.push(AudioEvent::MissilesAway);
        }
    }

    /// Run all systems in order. The order is load-bearing: movement before
    /// collision, collision before pruning, pruning before the next tick's
    /// spawns.
    fn run_systems(&mut self, dt: f64) {
        // 1. Player inertia, envelope clamp, weapon timers
        systems::player::run(&mut self.world, dt);
        // 2. Spawn trials (and the one-time boss arrival)
        systems::spawner::run(
            &mut self.world,
            &mut self.rng,
            self.score.level,
            &mut self.boss_spawned,
            &mut self.audio_events,
        );
        // 3. Obstacles
        systems::obstacles::run(
            &mut self.world,
            dt,
            self.cheat,
            &mut self.audio_events,
            &mut self.despawn_buffer,
        );
        // 4. Pickups
        systems::pickups::run(
            &mut self.world,
            dt,
            &mut self.audio_events,
            &mut self.despawn_buffer,
        );
        // 5. Enemies
        systems::enemies::run(
            &mut self.world,
            dt,
            self.cheat,
            &mut self.audio_events,
            &mut self.despawn_buffer,
        );
        // 6. Enemy projectiles
        systems::shots::run(
            &mut self.world,
            dt,
            self.cheat,
            &mut self.audio_events,
            &mut self.despawn_buffer,
        );
        // 7. Boss
        systems::boss::run(&mut self.world, dt);
        // 8. Rings
        systems::rings::run(
            &mut self.world,
            dt,
            &mut self.score,
            &mut self.audio_events,
            &mut self.despawn_buffer,
        );
        // 9. Player projectiles
        systems::bolts::run(
            &mut self.world,
            dt,
            &mut self.score,
            &mut self.outcome,
            &mut self.audio_events,
            &mut self.despawn_buffer,
        );
        // 10. Missiles
        systems::missiles::run(
            &mut self.world,
            dt,
            &mut self.score,
            &mut self.outcome,
            &mut self.audio_events,
            &mut self.despawn_buffer,
        );
        // 11. Cleanup (despawn buffer + deactivated hulls)
        systems::cleanup::run(&mut self.world, &mut self.despawn_buffer);
    }

    /// End the run when the player is dead or the boss has fallen.
    fn evaluate_run_end(&mut self) {
        if self.outcome.is_none() {
            let dead = {
                let mut query = self.world.query::<&PlayerCraft>();
                query
                    .iter()
                    .next()
                    .map_or(false, |(_, craft)| craft.health <= 0)
            };
            if dead {
                self.outcome = Some(RunOutcome::Defeat);
            }
        }
        if let Some(outcome) = self.outcome {
            self.phase = GamePhase::GameOver;
            self.audio_events.push(AudioEvent::RunEnded { outcome });
        }
    }

    /// Jump straight into a run (for tests).
    #[cfg(test)]
    pub fn start_run(&mut self, level: usize) {
        self.reset_run(level);
    }

    /// Overwrite the player's health (for tests).
    #[cfg(test)]
    pub fn set_player_health(&mut self, health: i32) {
        for (_entity, craft) in self.world.query_mut::<&mut PlayerCraft>() {
            craft.health = health;
        }
    }

    /// Raise the player's shield (for tests).
    #[cfg(test)]
    pub fn grant_shield(&mut self) {
        for (_entity, craft) in self.world.query_mut::<&mut PlayerCraft>() {
            craft.shield = true;
        }
    }

    /// Arm the laser weapon (for tests).
    #[cfg(test)]
    pub fn arm_laser(&mut self) {
        for (_entity, craft) in self.world.query_mut::<&mut PlayerCraft>() {
            craft.laser_ticks = LASER_DURATION_TICKS;
        }
    }

    /// Overwrite the score without touching the level (for tests).
    #[cfg(test)]
    pub fn set_score(&mut self, score: u64) {
        self.score.score = score;
    }

    /// Spawn an obstacle at an exact position (for tests).
    #[cfg(test)]
    pub fn spawn_obstacle_at(&mut self, position: Position) -> hecs::Entity {
        use skyblazer_core::components::Obstacle;
        use skyblazer_core::enums::ObstacleKind;
        self.world.spawn((
            Obstacle {
                kind: ObstacleKind::Tree,
                radius: 8.0,
            },
            position,
        ))
    }

    /// Spawn an enemy of `class` at an exact position (for tests).
    #[cfg(test)]
    pub fn spawn_enemy_at(
        &mut self,
        position: Position,
        class: skyblazer_core::enums::EnemyClass,
    ) -> hecs::Entity {
        use skyblazer_core::components::Enemy;
        let (hp, speed, radius, fire_interval) = world_setup::enemy_class_params(class);
        self.world.spawn((
            Enemy {
                class,
                hp,
                radius,
                fire_timer: fire_interval,
            },
            position,
            Velocity::new(0.0, 0.0, speed),
        ))
    }

    /// Spawn a ring at an exact position (for tests).
    #[cfg(test)]
    pub fn spawn_ring_at(&mut self, position: Position) -> hecs::Entity {
        use skyblazer_core::components::ScoreRing;
        self.world.spawn((ScoreRing { spin: 0.0 }, position))
    }

    /// Spawn a pickup at an exact position (for tests).
    #[cfg(test)]
    pub fn spawn_pickup_at(
        &mut self,
        position: Position,
        kind: skyblazer_core::enums::PickupKind,
    ) -> hecs::Entity {
        use skyblazer_core::components::Pickup;
        self.world.spawn((Pickup { kind, spin: 0.0 }, position))
    }

    /// Spawn the boss with a specific hp pool (for tests).
    #[cfg(test)]
    pub fn spawn_boss_with_hp(&mut self, hp: u32) -> hecs::Entity {
        let entity = world_setup::spawn_boss(&mut self.world);
        self.boss_spawned = true;
        if let Ok(mut boss) = self.world.get::<&mut skyblazer_core::components::Boss>(entity) {
            boss.hp = hp;
        }
        entity
    }

    /// Spawn a bolt at an exact position (for tests).
    #[cfg(test)]
    pub fn spawn_bolt_at(&mut self, position: Position, kind: BoltKind) -> hecs::Entity {
        world_setup::spawn_bolt(&mut self.world, position, kind)
    }

    /// Spawn a single straight-flying missile at an exact position (for tests).
    #[cfg(test)]
    pub fn spawn_missile_at(&mut self, position: Position) -> hecs::Entity {
        use crate::missile::HomingMissile;
        self.world.spawn((
            HomingMissile {
                target: None,
                life_ticks: MISSILE_LIFETIME_TICKS,
            },
            position,
            Velocity::new(0.0, 0.0, -1.0),
        ))
    }
}
