use bevy::math::Vec3;

use crate::abilities::{CloneEvent, ShadowClone};
use crate::economy::crafting::{default_recipes, find_recipe, CraftingRecipe, HEALTH_PACK};
use crate::economy::ResourceType;
use crate::effects::{BurstKind, ParticleField};
use crate::engine::config::SimConfig;
use crate::events::{EventQueue, SimEvent};
use crate::gameflow::{GameSession, GameState, LevelOutcome};
use crate::generation::{LevelDefinition, LevelTable};
use crate::geometry::{distance, seeded_rng, SimRng};
use crate::logging::TimingSpan;
use crate::loot::CollectibleRegistry;
use crate::monster::{AiConfig, EnemyRoster, HitOutcome};
use crate::movement::{InputEdges, InputIntent};
use crate::player::inventory::Inventory;
use crate::player::PlayerController;
use crate::save::SaveSnapshot;
use crate::world::{CollisionWorld, DayCycle};

/// The whole simulation for one session.
/// Owns every piece of game state and advances it one variable-delta tick at
/// a time.
///
/// Subsystems are readable through accessors; all mutation goes through the
/// session and gameplay operations below.
pub struct Simulation {
    pub(crate) config: SimConfig,
    pub(crate) levels: LevelTable,
    pub(crate) session: GameSession,
    pub(crate) player: PlayerController,
    pub(crate) enemies: EnemyRoster,
    pub(crate) collectibles: CollectibleRegistry,
    pub(crate) clone: ShadowClone,
    pub(crate) inventory: Inventory,
    pub(crate) world: CollisionWorld,
    pub(crate) effects: ParticleField,
    pub(crate) recipes: Vec<CraftingRecipe>,
    day_cycle: DayCycle,
    elapsed: f32,
    rng: SimRng,
    prev_input: InputIntent,
    events: EventQueue,
}

impl Simulation {
    pub fn new(config: SimConfig) -> Self {
        Self::with_levels(config, LevelTable::default())
    }

    pub fn with_levels(config: SimConfig, levels: LevelTable) -> Self {
        Self {
            session: GameSession::default(),
            player: PlayerController::new(&config),
            enemies: EnemyRoster::default(),
            collectibles: CollectibleRegistry::default(),
            clone: ShadowClone::default(),
            inventory: Inventory::default(),
            world: CollisionWorld::new(config.world_half_extent),
            effects: ParticleField::default(),
            recipes: default_recipes(),
            day_cycle: DayCycle::new(config.day_length),
            elapsed: 0.0,
            rng: seeded_rng(config.seed),
            prev_input: InputIntent::default(),
            events: EventQueue::default(),
            levels,
            config,
        }
    }

    // =====================================================
    // Session control
    // =====================================================

    /// New run: score, level, player and inventory reset, level 0 initialized
    pub fn start_game(&mut self) {
        let from = self.session.state;
        self.session.start();
        self.inventory.reset();
        self.restart_clock();
        self.init_level();
        self.note_transition(from);
    }

    /// Back to the menu from any state
    pub fn reset_game(&mut self) {
        let from = self.session.state;
        self.session.reset();
        self.inventory.reset();
        self.player.reset(&self.config);
        self.enemies.clear();
        self.collectibles.clear();
        self.clone.reset();
        self.effects.clear();
        self.restart_clock();
        self.note_transition(from);
    }

    pub fn pause_game(&mut self) -> bool {
        let from = self.session.state;
        let paused = self.session.pause();
        self.note_transition(from);
        paused
    }

    pub fn resume_game(&mut self) -> bool {
        let from = self.session.state;
        let resumed = self.session.resume();
        self.note_transition(from);
        resumed
    }

    // =====================================================
    // Tick
    // =====================================================

    /// Advance the simulation by one frame
    pub fn tick(&mut self, input: &InputIntent, delta_seconds: f32) {
        let dt = delta_seconds.max(0.0);
        let edges = input.edges(&self.prev_input);
        self.prev_input = *input;

        if edges.pause {
            match self.session.state {
                GameState::Playing => {
                    self.pause_game();
                    return;
                }
                GameState::Paused => {
                    self.resume_game();
                }
                _ => {}
            }
        }

        match self.session.state {
            GameState::LevelComplete => {
                let from = self.session.state;
                if self.session.advance_transition(dt) {
                    self.init_level();
                    self.note_transition(from);
                }
            }
            GameState::Playing => self.tick_playing(input, edges, dt),
            _ => {}
        }
    }

    fn tick_playing(&mut self, input: &InputIntent, edges: InputEdges, dt: f32) {
        self.elapsed += dt;
        self.day_cycle.update(self.elapsed);

        // Enemies see the player where the frame started
        let player_start = self.player.position();
        let ai = AiConfig::from_config(&self.config);
        let attacks = self.enemies.update(player_start, self.elapsed, dt, &ai);
        if self.config.enemy_attacks_damage_player {
            for attack in attacks {
                let absorbed = self.player.take_damage(attack.damage);
                if absorbed > 0.0 {
                    self.events.push(SimEvent::PlayerDamaged {
                        enemy_id: attack.enemy_id,
                        damage: absorbed,
                        health: self.player.health(),
                    });
                }
            }
        }
        if self.config.game_over_on_death && self.player.is_dead() {
            let from = self.session.state;
            self.session.game_over();
            self.note_transition(from);
            return;
        }

        let outcome = self.player.step(input, dt, &self.world, &self.config);
        if outcome.blocked {
            tracing::trace!(position = ?self.player.position(), "player move blocked");
        }

        if edges.interact {
            self.melee_strike();
        }

        let clone_event = self.clone.update(
            edges.clone,
            self.player.position(),
            dt,
            &mut self.rng,
            &self.config,
        );
        match clone_event {
            Some(CloneEvent::Activated { position, target }) => {
                self.events.push(SimEvent::CloneActivated { position, target });
            }
            Some(CloneEvent::Expired { position }) => {
                self.events.push(SimEvent::CloneExpired { position });
            }
            None => {}
        }

        let pickups = self
            .collectibles
            .check_proximity(self.player.position(), self.config.pickup_radius);
        for pickup in pickups {
            self.inventory.add_resource(pickup.resource, 1);
            self.effects
                .spawn_burst(pickup.position, BurstKind::Collect, &mut self.rng);
            tracing::debug!(id = pickup.id, resource = %pickup.resource, "collected");
            self.events.push(SimEvent::Collected {
                id: pickup.id,
                resource: pickup.resource,
                position: pickup.position,
            });
            self.award(self.config.pickup_score);
        }

        self.effects.update(dt);
        self.session.level_progress = self.compute_progress();
        self.evaluate_win_condition();
    }

    /// Hit every alive enemy within melee range of the player
    fn melee_strike(&mut self) {
        let origin = self.player.position();
        let range = self.config.melee_range;
        let targets: Vec<u32> = self
            .enemies
            .iter()
            .filter(|e| e.is_alive() && distance(e.position, origin) < range)
            .map(|e| e.id)
            .collect();
        for id in targets {
            self.hit_enemy(id, self.config.melee_damage);
        }
    }

    // =====================================================
    // Combat
    // =====================================================

    /// Damage enemy `id`. Returns false outside `Playing` and for unknown or
    /// already defeated enemies.
    pub fn hit_enemy(&mut self, id: u32, damage: f32) -> bool {
        if self.session.state != GameState::Playing {
            return false;
        }
        let Some(enemy) = self.enemies.get_mut(id) else {
            return false;
        };
        let position = enemy.position;
        let outcome = enemy.on_hit(damage);
        if outcome == HitOutcome::Ignored {
            return false;
        }

        self.effects.spawn_burst(position, BurstKind::Hit, &mut self.rng);
        self.events.push(SimEvent::EnemyHit {
            enemy_id: id,
            position,
            damage,
        });
        if outcome == HitOutcome::Defeated {
            tracing::debug!(enemy = id, "enemy defeated");
            self.events.push(SimEvent::EnemyDefeated {
                enemy_id: id,
                position,
            });
            self.award(self.config.kill_score);
        }
        true
    }

    // =====================================================
    // Win condition
    // =====================================================

    /// All pickups collected and all enemies defeated. Fires once per level;
    /// returns whether it fired on this call.
    pub fn evaluate_win_condition(&mut self) -> bool {
        if self.session.state != GameState::Playing || self.session.level_won() {
            return false;
        }
        if !(self.collectibles.all_collected() && self.enemies.all_defeated()) {
            return false;
        }

        let won_level = self.session.current_level;
        let difficulty = self.levels.get(won_level).difficulty;
        let from = self.session.state;
        let before = self.session.score;
        let Some(outcome) = self.session.complete_level(
            difficulty,
            self.levels.len(),
            self.config.win_score_per_difficulty,
            self.config.level_complete_delay,
        ) else {
            return false;
        };

        let delta = self.session.score - before;
        self.events.push(SimEvent::ScoreChanged {
            delta,
            total: self.session.score,
        });
        let position = self.player.position();
        self.effects
            .spawn_burst(position, BurstKind::Victory, &mut self.rng);
        self.events.push(SimEvent::Victory {
            level: won_level,
            position,
        });
        if let LevelOutcome::NextLevel(next) = outcome {
            tracing::info!(won = won_level, next, "level cleared");
        }
        self.note_transition(from);
        true
    }

    // =====================================================
    // Crafting & items
    // =====================================================

    /// Craft a catalogue recipe by id
    pub fn craft(&mut self, recipe_id: &str) -> bool {
        let Some(recipe) = find_recipe(&self.recipes, recipe_id) else {
            tracing::debug!(recipe = recipe_id, "unknown recipe");
            return false;
        };
        let requires = recipe.requires.clone();
        self.craft_item(recipe_id, &requires)
    }

    pub fn craft_item(&mut self, item_id: &str, requirements: &[(ResourceType, u32)]) -> bool {
        if !self.inventory.craft_item(item_id, requirements) {
            return false;
        }
        self.events.push(SimEvent::ItemCrafted {
            item: item_id.to_string(),
        });
        true
    }

    /// Consume one `item_id`. A health pack heals the player; other items
    /// have no simulation effect.
    pub fn use_item(&mut self, item_id: &str) -> bool {
        if !self.inventory.remove_item(item_id, 1) {
            return false;
        }
        if item_id == HEALTH_PACK {
            let healed = self.player.heal(self.config.health_pack_heal);
            tracing::debug!(healed, "health pack used");
        }
        self.events.push(SimEvent::ItemUsed {
            item: item_id.to_string(),
        });
        true
    }

    // =====================================================
    // Persistence
    // =====================================================

    pub fn snapshot(&self) -> SaveSnapshot {
        SaveSnapshot::new(
            self.inventory.resources().clone(),
            self.session.score,
            self.session.current_level,
        )
    }

    /// Continue a saved run: resources and score restored, saved level
    /// initialized and playing.
    pub fn restore_snapshot(&mut self, snapshot: &SaveSnapshot) {
        let from = self.session.state;
        self.session.start();
        self.session.score = snapshot.score;
        self.session.current_level = snapshot.current_level.min(self.levels.len().saturating_sub(1));
        self.inventory.set_resources(&snapshot.resources);
        self.restart_clock();
        self.init_level();
        self.note_transition(from);
    }

    // =====================================================
    // Queries
    // =====================================================

    pub fn state(&self) -> GameState {
        self.session.state
    }

    pub fn score(&self) -> u64 {
        self.session.score
    }

    pub fn current_level(&self) -> usize {
        self.session.current_level
    }

    pub fn current_level_definition(&self) -> &LevelDefinition {
        self.levels.get(self.session.current_level)
    }

    pub fn level_progress(&self) -> f32 {
        self.session.level_progress
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn day_phase(&self) -> f32 {
        self.day_cycle.phase()
    }

    pub fn is_day(&self) -> bool {
        self.day_cycle.is_day()
    }

    pub fn player_position(&self) -> Vec3 {
        self.player.position()
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn levels(&self) -> &LevelTable {
        &self.levels
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn player(&self) -> &PlayerController {
        &self.player
    }

    pub fn enemies(&self) -> &EnemyRoster {
        &self.enemies
    }

    pub fn collectibles(&self) -> &CollectibleRegistry {
        &self.collectibles
    }

    pub fn shadow_clone(&self) -> &ShadowClone {
        &self.clone
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn world(&self) -> &CollisionWorld {
        &self.world
    }

    pub fn effects(&self) -> &ParticleField {
        &self.effects
    }

    pub fn recipes(&self) -> &[CraftingRecipe] {
        &self.recipes
    }

    /// Move the player without collision checks (respawn points, scripted
    /// moves). Ignored outside `Playing`.
    pub fn teleport_player(&mut self, position: Vec3) -> bool {
        if self.session.state != GameState::Playing {
            return false;
        }
        self.player.teleport(position);
        true
    }

    /// Events buffered since the last drain
    pub fn events(&self) -> &[SimEvent] {
        self.events.as_slice()
    }

    pub fn drain_events(&mut self) -> Vec<SimEvent> {
        self.events.drain()
    }

    // =====================================================
    // Internals
    // =====================================================

    fn init_level(&mut self) {
        let _span = TimingSpan::new("init_level");
        let index = self.session.current_level;
        let level = self.levels.get(index);

        self.player.reset(&self.config);
        self.enemies
            .spawn_ring(level.enemy_count as usize, &mut self.rng, &self.config);
        self.collectibles.spawn_from_manifest(
            &level.collectibles,
            &mut self.rng,
            self.config.collectible_spread,
            self.config.ground_height,
        );
        self.clone.reset();
        self.effects.clear();
        self.session.begin_level();

        tracing::info!(
            level = index,
            name = %level.name,
            enemies = self.enemies.len(),
            collectibles = self.collectibles.len(),
            "level initialized"
        );
    }

    fn restart_clock(&mut self) {
        self.elapsed = 0.0;
        self.day_cycle = DayCycle::new(self.config.day_length);
    }

    fn compute_progress(&self) -> f32 {
        let total = self.collectibles.len() + self.enemies.len();
        if total == 0 {
            return 1.0;
        }
        let done = self.collectibles.collected_count() + self.enemies.defeated_count();
        done as f32 / total as f32
    }

    fn award(&mut self, points: u64) {
        if points == 0 {
            return;
        }
        self.session.add_score(points);
        self.events.push(SimEvent::ScoreChanged {
            delta: points,
            total: self.session.score,
        });
    }

    fn note_transition(&mut self, from: GameState) {
        let to = self.session.state;
        if from != to {
            self.events.push(SimEvent::StateChanged { from, to });
        }
    }
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new(SimConfig::default())
    }
}
