//! Tests for the simulation engine, ship behavior, weapons, and effects.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use skirmish_core::commands::{InputEvent, Key};
use skirmish_core::components::{DeathBurst, Emitter, Projectile, Ship, Star};
use skirmish_core::draw::{CommandRecorder, DrawError, NullSurface, Rgb, Surface};
use skirmish_core::enums::*;
use skirmish_core::error::ConfigError;
use skirmish_core::events::SimEvent;
use skirmish_core::types::{Acceleration, PlayArea, Position, ShipId, Velocity};

use crate::effects::{death_burst, exhaust, trail_smoke};
use crate::engine::{SimConfig, SimulationEngine};
use crate::context::TickContext;
use crate::systems::{effects, flame_flicker, input, projectiles, ships, stars, FrameRoster};
use crate::world_setup::ProjectileBody;

fn quiet_config() -> SimConfig {
    SimConfig {
        seed: 7,
        initial_stars: 0,
        initial_ships: 0,
        ..Default::default()
    }
}

fn new_engine(config: SimConfig) -> SimulationEngine {
    SimulationEngine::new(config).unwrap()
}

fn ship_of(engine: &SimulationEngine, entity: hecs::Entity) -> Ship {
    *engine.world().get::<&Ship>(entity).unwrap()
}

fn projectiles_in(engine: &SimulationEngine) -> Vec<(Projectile, Position, Velocity)> {
    engine
        .world()
        .query::<(&Projectile, &Position, &Velocity)>()
        .iter()
        .map(|(_, (p, pos, vel))| (*p, *pos, *vel))
        .collect()
}

/// Tick every projectile currently in flight, as one frame's pass would.
fn step_projectiles(ctx: &mut TickContext<'_>) {
    let in_flight = FrameRoster::collect(ctx.world).projectiles;
    projectiles::run(ctx, &in_flight);
}

/// The weapon `shooter` fired, if a `WeaponFired` event names it.
fn weapon_fired_by(events: &[SimEvent], shooter: ShipId) -> Option<Weapon> {
    events.iter().find_map(|event| match event {
        SimEvent::WeaponFired {
            shooter: id,
            weapon,
            ..
        } if *id == shooter => Some(*weapon),
        _ => None,
    })
}

fn generic_round(owner: ShipId, position: Position, velocity: Velocity) -> ProjectileBody {
    ProjectileBody {
        projectile: Projectile {
            owner,
            radius: 1.0,
            color: Rgb::new(255, 255, 0),
            kind: ProjectileKind::Generic,
            facing: 0.0,
            ticks: 0,
        },
        position,
        velocity,
        acceleration: Acceleration::default(),
    }
}

struct FailingSurface;

impl Surface for FailingSurface {
    fn fill_circle(&mut self, _: Position, _: f64, _: Rgb) -> Result<(), DrawError> {
        Err(DrawError::Backend("offline".into()))
    }
    fn stroke_circle(&mut self, _: Position, _: f64, _: f64, _: Rgb) -> Result<(), DrawError> {
        Err(DrawError::Backend("offline".into()))
    }
    fn fill_polygon(&mut self, _: &[Position], _: Rgb) -> Result<(), DrawError> {
        Err(DrawError::Backend("offline".into()))
    }
    fn stroke_polygon(&mut self, _: &[Position], _: f64, _: Rgb) -> Result<(), DrawError> {
        Err(DrawError::Backend("offline".into()))
    }
    fn line(&mut self, _: Position, _: Position, _: f64, _: Rgb) -> Result<(), DrawError> {
        Err(DrawError::Backend("offline".into()))
    }
}

// ---- Configuration ----

#[test]
fn test_default_config_populates_world() {
    let engine = new_engine(SimConfig::default());
    assert_eq!(engine.ships().len(), 3);
    assert_eq!(engine.world().query::<&Star>().iter().count(), 1);
    assert!(engine.player().is_none());
}

#[test]
fn test_empty_play_area_rejected() {
    let result = SimulationEngine::new(SimConfig {
        width: 0.0,
        ..Default::default()
    });
    assert!(matches!(result, Err(ConfigError::EmptyPlayArea { .. })));
}

#[test]
fn test_config_deserializes_with_defaults() {
    let config: SimConfig = serde_json::from_str(r#"{"seed": 9, "initial_ships": 5}"#).unwrap();
    assert_eq!(config.seed, 9);
    assert_eq!(config.initial_ships, 5);
    assert_eq!(config.width, 3440.0);
    assert!(!config.spawn_player);
}

// ---- Determinism ----

#[test]
fn test_determinism_same_seed() {
    let mut engine_a = new_engine(SimConfig::default());
    let mut engine_b = new_engine(SimConfig::default());

    for frame in 0..600 {
        let input = if frame % 97 == 0 {
            vec![InputEvent::KeyPress { key: Key::Char('x') }]
        } else {
            Vec::new()
        };
        let snap_a = engine_a.advance_frame(&input, &mut NullSurface);
        let snap_b = engine_b.advance_frame(&input, &mut NullSurface);

        let json_a = serde_json::to_string(&snap_a).unwrap();
        let json_b = serde_json::to_string(&snap_b).unwrap();
        assert_eq!(json_a, json_b, "Snapshots diverged with same seed");
    }
}

#[test]
fn test_rendering_does_not_consume_rng() {
    let mut engine_a = new_engine(SimConfig::default());
    let mut engine_b = new_engine(SimConfig::default());
    let mut recorder = CommandRecorder::new();

    for _ in 0..300 {
        let snap_a = engine_a.advance_frame(&[], &mut recorder);
        let snap_b = engine_b.advance_frame(&[], &mut FailingSurface);
        recorder.drain();
        assert_eq!(
            serde_json::to_value(&snap_a.ships).unwrap(),
            serde_json::to_value(&snap_b.ships).unwrap()
        );
    }
}

#[test]
fn test_flame_flicker_is_pure() {
    assert_eq!(flame_flicker(10, 3), flame_flicker(10, 3));
    assert_eq!(flame_flicker(0, 0), NamedColor::Orange.rgb());
    assert_eq!(flame_flicker(1, 0), NamedColor::Yellow.rgb());
    assert_eq!(flame_flicker(2, 0), NamedColor::Red.rgb());
    assert_eq!(flame_flicker(3, 0), NamedColor::Orange.rgb());
}

// ---- Ships ----

#[test]
fn test_population_conserved() {
    let mut engine = new_engine(SimConfig::default());
    for frame in 0..2000 {
        let input = if frame % 50 == 0 {
            vec![InputEvent::KeyPress { key: Key::Other(32) }]
        } else {
            Vec::new()
        };
        let snap = engine.advance_frame(&input, &mut NullSurface);
        assert_eq!(snap.ships.len(), 3, "population changed on frame {frame}");
    }
}

#[test]
fn test_ships_stay_in_bounds() {
    let mut engine = new_engine(SimConfig {
        seed: 3,
        width: 400.0,
        height: 300.0,
        initial_ships: 6,
        ..Default::default()
    });
    let area = engine.play_area();
    for _ in 0..1500 {
        let snap = engine.advance_frame(&[], &mut NullSurface);
        for ship in &snap.ships {
            assert!(area.contains(&ship.position), "ship {:?} left the area", ship.id);
        }
    }
}

#[test]
fn test_ship_ids_unique_and_ascending() {
    let mut engine = new_engine(SimConfig::default());
    let destroy = [InputEvent::KeyPress { key: Key::Char('d') }];
    for _ in 0..20 {
        let snap = engine.advance_frame(&destroy, &mut NullSurface);
        let ids: Vec<ShipId> = snap.ships.iter().map(|s| s.id).collect();
        let mut sorted = ids.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(ids, sorted);
    }
}

#[test]
fn test_move_blocked_at_edge() {
    let area = PlayArea::new(100.0, 100.0);
    let mut ship = Ship {
        id: ShipId(0),
        radius: 20.0,
        color: NamedColor::Cyan,
        facing: 0.0,
        freeze_ticks: 0,
    };
    let mut pos = Position::new(2.0, 50.0);
    let vel = Velocity::new(-5.0, 0.0);

    ships::move_ship(&mut ship, &mut pos, &vel, &area);
    assert_eq!(pos, Position::new(2.0, 50.0));
    assert!((ship.facing - std::f64::consts::PI).abs() < 1e-12);

    let inward = Velocity::new(5.0, 0.0);
    ships::move_ship(&mut ship, &mut pos, &inward, &area);
    assert_eq!(pos, Position::new(7.0, 50.0));
}

#[test]
fn test_stationary_ship_keeps_facing() {
    let area = PlayArea::new(100.0, 100.0);
    let mut ship = Ship {
        id: ShipId(0),
        radius: 20.0,
        color: NamedColor::Cyan,
        facing: 1.25,
        freeze_ticks: 0,
    };
    let mut pos = Position::new(50.0, 50.0);
    ships::move_ship(&mut ship, &mut pos, &Velocity::default(), &area);
    assert_eq!(ship.facing, 1.25);
}

#[test]
fn test_frozen_ship_does_not_move() {
    let area = PlayArea::new(100.0, 100.0);
    let mut ship = Ship {
        id: ShipId(0),
        radius: 20.0,
        color: NamedColor::Pink,
        facing: 0.0,
        freeze_ticks: 2,
    };
    let mut pos = Position::new(50.0, 50.0);
    let vel = Velocity::new(3.0, 0.0);

    ships::move_ship(&mut ship, &mut pos, &vel, &area);
    ships::move_ship(&mut ship, &mut pos, &vel, &area);
    assert_eq!(pos, Position::new(50.0, 50.0));
    assert_eq!(ship.freeze_ticks, 0);

    ships::move_ship(&mut ship, &mut pos, &vel, &area);
    assert_eq!(pos, Position::new(53.0, 50.0));
}

#[test]
fn test_freeze_takes_the_longer_duration() {
    let mut ship = Ship {
        id: ShipId(0),
        radius: 20.0,
        color: NamedColor::Blue,
        facing: 0.0,
        freeze_ticks: 0,
    };
    ships::freeze(&mut ship, 100);
    ships::freeze(&mut ship, 50);
    assert_eq!(ship.freeze_ticks, 100);
    ships::freeze(&mut ship, 200);
    assert_eq!(ship.freeze_ticks, 200);
}

#[test]
fn test_destroyed_ship_replaced_with_burst() {
    let mut engine = new_engine(quiet_config());
    let victim = engine.spawn_ship_at(Position::new(300.0, 300.0), Velocity::default());
    let victim_id = ship_of(&engine, victim).id;

    let mut surface = NullSurface;
    let mut ctx = engine.context(&mut surface);
    assert!(ships::destroy_ship(&mut ctx, victim, DestructionCause::Input));

    assert!(!engine.world().contains(victim));
    assert_eq!(engine.ships().len(), 1);
    assert_ne!(ship_of(&engine, engine.ships()[0]).id, victim_id);
    let bursts = engine
        .world()
        .query::<&DeathBurst>()
        .iter()
        .count();
    assert_eq!(bursts, 1);
}

#[test]
fn test_destroying_missing_ship_is_noop() {
    let mut engine = new_engine(quiet_config());
    let ghost = engine.spawn_ship_at(Position::new(10.0, 10.0), Velocity::default());
    engine.clear_ships();

    let mut surface = NullSurface;
    let mut ctx = engine.context(&mut surface);
    assert!(!ships::destroy_ship(&mut ctx, ghost, DestructionCause::Input));
    assert!(engine.ships().is_empty());
}

#[test]
fn test_lone_ship_never_fires() {
    let mut engine = new_engine(SimConfig {
        initial_ships: 1,
        initial_stars: 0,
        ..Default::default()
    });
    for _ in 0..2000 {
        let snap = engine.advance_frame(&[], &mut NullSurface);
        assert_eq!(snap.projectile_count, 0);
        assert!(!snap
            .events
            .iter()
            .any(|e| matches!(e, SimEvent::WeaponFired { .. })));
    }
}

#[test]
fn test_ship_tick_resamples_velocity() {
    let start = Velocity::new(0.5, 0.5);
    let mut resampled = 0;
    for seed in 0..400 {
        let mut engine = new_engine(SimConfig {
            seed,
            ..quiet_config()
        });
        let ship = engine.spawn_ship_at(Position::new(800.0, 500.0), start);
        let mut surface = NullSurface;
        let mut ctx = engine.context(&mut surface);
        ships::tick_ship(&mut ctx, ship);

        let vel = *engine.world().get::<&Velocity>(ship).unwrap();
        if vel == start {
            continue;
        }
        resampled += 1;
        for component in [vel.x, vel.y] {
            assert_eq!(component.fract(), 0.0, "seed {seed}: {vel:?}");
            assert!((-5.0..=5.0).contains(&component), "seed {seed}: {vel:?}");
        }
    }
    // 5 in 101 per roll: about 20 of 400 seeds.
    assert!((1..60).contains(&resampled), "resampled on {resampled} seeds");
}

#[test]
fn test_ship_tick_fire_roll_launches_salvo() {
    let mut fired = 0;
    for seed in 0..2000 {
        let mut engine = new_engine(SimConfig {
            seed,
            ..quiet_config()
        });
        let shooter = engine.spawn_ship_at(Position::new(1000.0, 700.0), Velocity::default());
        let target = engine.spawn_ship_at(Position::new(1900.0, 700.0), Velocity::default());
        let shooter_id = ship_of(&engine, shooter).id;

        let mut surface = NullSurface;
        let mut ctx = engine.context(&mut surface);
        ships::tick_ship(&mut ctx, shooter);
        let Some(weapon) = weapon_fired_by(ctx.events, shooter_id) else {
            assert!(projectiles_in(&engine).is_empty());
            continue;
        };
        fired += 1;

        // A resampled step moves the shooter at most ~7 units: still in
        // machine-gun range.
        assert_eq!(weapon, Weapon::MachineGun);
        let rounds = projectiles_in(&engine);
        assert_eq!(rounds.len(), 8);
        assert!(rounds
            .iter()
            .all(|(p, ..)| p.owner == shooter_id && p.ticks == 0));
        assert!(engine.world().contains(target));
    }
    assert!(fired > 0);
}

#[test]
fn test_ship_tick_fire_roll_draws_beam() {
    let mut fired = 0;
    for seed in 0..2000 {
        let mut engine = new_engine(SimConfig {
            seed,
            ..quiet_config()
        });
        let shooter = engine.spawn_ship_at(Position::new(1000.0, 700.0), Velocity::default());
        engine.spawn_ship_at(Position::new(1400.0, 700.0), Velocity::default());
        let shooter_id = ship_of(&engine, shooter).id;

        let mut recorder = CommandRecorder::new();
        let mut ctx = engine.context(&mut recorder);
        ships::tick_ship(&mut ctx, shooter);
        let weapon = weapon_fired_by(ctx.events, shooter_id);
        let lines = recorder.line_count();

        match weapon {
            Some(weapon) => {
                fired += 1;
                assert_eq!(weapon, Weapon::Laser);
                assert_eq!(lines, 1);
                assert!(projectiles_in(&engine).is_empty());
            }
            None => assert_eq!(lines, 0),
        }
    }
    assert!(fired > 0);
}

#[test]
fn test_player_ship_is_render_only() {
    let mut engine = new_engine(SimConfig {
        spawn_player: true,
        ..quiet_config()
    });
    let center = engine.play_area().center();
    let player = engine.player().unwrap();

    let mut recorder = CommandRecorder::new();
    for _ in 0..300 {
        let snap = engine.advance_frame(&[], &mut recorder);
        assert_eq!(snap.ships.len(), 1);
        assert!(snap.ships[0].is_player);
        assert_eq!(snap.ships[0].position, center);
        assert_eq!(snap.ships[0].radius, 5.0);
    }
    assert!(!recorder.is_empty());
    assert_eq!(ship_of(&engine, player).color, NamedColor::Blue);
}

#[test]
fn test_destroyed_player_reference_clears() {
    let mut engine = new_engine(SimConfig {
        spawn_player: true,
        ..quiet_config()
    });
    let press = [InputEvent::KeyPress { key: Key::Char('z') }];
    let snap = engine.advance_frame(&press, &mut NullSurface);
    assert!(engine.player().is_none());
    assert_eq!(snap.ships.len(), 1);
    assert!(!snap.ships[0].is_player);
}

// ---- Weapons ----

#[test]
fn test_laser_at_short_range() {
    let mut engine = new_engine(quiet_config());
    let shooter = engine.spawn_ship_at(Position::new(1000.0, 700.0), Velocity::default());
    let target = engine.spawn_ship_at(Position::new(1400.0, 700.0), Velocity::default());

    let mut recorder = CommandRecorder::new();
    let mut ctx = engine.context(&mut recorder);
    let weapon = ships::fire_at(&mut ctx, shooter, target);

    assert_eq!(weapon, Some(Weapon::Laser));
    assert_eq!(recorder.line_count(), 1);
    assert!(projectiles_in(&engine).is_empty());
    assert!(engine.world().contains(target), "beams never destroy");
}

#[test]
fn test_freeze_ray_at_mid_range() {
    let mut engine = new_engine(quiet_config());
    let shooter = engine.spawn_ship_at(Position::new(1000.0, 700.0), Velocity::default());
    let target = engine.spawn_ship_at(Position::new(1600.0, 700.0), Velocity::default());

    let mut recorder = CommandRecorder::new();
    let mut ctx = engine.context(&mut recorder);
    let weapon = ships::fire_at(&mut ctx, shooter, target);

    assert_eq!(weapon, Some(Weapon::FreezeRay));
    assert_eq!(recorder.line_count(), 1);
    assert_eq!(ship_of(&engine, target).freeze_ticks, 200);

    let snap = engine.advance_frame(&[], &mut NullSurface);
    assert!(snap
        .events
        .iter()
        .any(|e| matches!(e, SimEvent::ShipFrozen { ticks: 200, .. })));
}

#[test]
fn test_machine_gun_salvo() {
    let mut engine = new_engine(quiet_config());
    let shooter = engine.spawn_ship_at(Position::new(1000.0, 700.0), Velocity::default());
    let target = engine.spawn_ship_at(Position::new(1900.0, 700.0), Velocity::default());
    let shooter_id = ship_of(&engine, shooter).id;

    let mut surface = NullSurface;
    let mut ctx = engine.context(&mut surface);
    assert_eq!(ships::fire_at(&mut ctx, shooter, target), Some(Weapon::MachineGun));

    let rounds = projectiles_in(&engine);
    assert_eq!(rounds.len(), 8);
    for (projectile, pos, vel) in rounds {
        assert_eq!(projectile.owner, shooter_id);
        assert_eq!(projectile.kind, ProjectileKind::Generic);
        assert!((vel.x - 1.8).abs() < 1e-9 && vel.y.abs() < 1e-9);
        // One pre-advance step already taken at creation.
        assert!((pos.x - 1001.8).abs() < 1e-9 && (pos.y - 700.0).abs() < 1e-9);
    }
}

#[test]
fn test_glide_bomb_salvo_and_trail() {
    let mut engine = new_engine(quiet_config());
    let shooter = engine.spawn_ship_at(Position::new(100.0, 1000.0), Velocity::default());
    let target = engine.spawn_ship_at(Position::new(1300.0, 1000.0), Velocity::default());

    let mut surface = NullSurface;
    let mut ctx = engine.context(&mut surface);
    assert_eq!(ships::fire_at(&mut ctx, shooter, target), Some(Weapon::GlideBomb));
    for _ in 0..3 {
        step_projectiles(&mut ctx);
    }

    let bombs = projectiles_in(&engine);
    assert_eq!(bombs.len(), 3);
    for (projectile, _, vel) in &bombs {
        assert_eq!(projectile.kind, ProjectileKind::GlideBomb);
        assert_eq!(projectile.ticks, 3);
        // Launch velocity (12, -5), gravity 0.1 over four steps.
        assert!((vel.x - 12.0).abs() < 1e-9);
        assert!((vel.y + 4.6).abs() < 1e-9);
    }
    let puffs: Vec<EmitterKind> = engine
        .world()
        .query::<&Emitter>()
        .iter()
        .map(|(_, e)| e.kind)
        .collect();
    assert_eq!(puffs, vec![EmitterKind::TrailSmoke; 3]);
}

#[test]
fn test_torpedo_salvo_recoil_and_exhaust() {
    let mut engine = new_engine(quiet_config());
    let shooter = engine.spawn_ship_at(Position::new(100.0, 700.0), Velocity::default());
    let target = engine.spawn_ship_at(Position::new(3100.0, 700.0), Velocity::default());

    let mut surface = NullSurface;
    let mut ctx = engine.context(&mut surface);
    assert_eq!(ships::fire_at(&mut ctx, shooter, target), Some(Weapon::Torpedo));

    let torpedoes = projectiles_in(&engine);
    assert_eq!(torpedoes.len(), 2);
    for (projectile, _, vel) in &torpedoes {
        assert_eq!(projectile.kind, ProjectileKind::Torpedo);
        assert!((vel.x - 2.2).abs() < 1e-9);
    }

    let recoil = *engine.world().get::<&Velocity>(shooter).unwrap();
    assert!((recoil.x + 4.0).abs() < 1e-9 && recoil.y.abs() < 1e-9);

    let exhaust: Vec<EmitterKind> = engine
        .world()
        .query::<&Emitter>()
        .iter()
        .map(|(_, e)| e.kind)
        .collect();
    assert_eq!(exhaust, vec![EmitterKind::Exhaust]);
}

#[test]
fn test_torpedo_accelerates() {
    let mut engine = new_engine(quiet_config());
    let shooter = engine.spawn_ship_at(Position::new(100.0, 700.0), Velocity::default());
    let target = engine.spawn_ship_at(Position::new(3100.0, 700.0), Velocity::default());

    let mut surface = NullSurface;
    let mut ctx = engine.context(&mut surface);
    ships::fire_at(&mut ctx, shooter, target);
    for _ in 0..4 {
        step_projectiles(&mut ctx);
    }

    // 2.0 at launch plus 0.2 per step over five steps.
    for (_, _, vel) in projectiles_in(&engine) {
        assert!((vel.x - 3.0).abs() < 1e-9);
    }
}

// ---- Projectiles ----

#[test]
fn test_projectile_exits_on_exact_tick() {
    let mut engine = new_engine(SimConfig {
        width: 100.0,
        height: 100.0,
        ..quiet_config()
    });
    let body = generic_round(ShipId(999), Position::new(0.0, 50.0), Velocity::new(10.0, 0.0));
    {
        let mut surface = NullSurface;
        let mut ctx = engine.context(&mut surface);
        assert!(projectiles::launch(&mut ctx, body).is_some());
    }

    // Registered at x = 10; each frame adds 10 and x = 100 is outside.
    for _ in 0..8 {
        let snap = engine.advance_frame(&[], &mut NullSurface);
        assert_eq!(snap.projectile_count, 1);
    }
    let snap = engine.advance_frame(&[], &mut NullSurface);
    assert_eq!(snap.projectile_count, 0);
}

#[test]
fn test_owner_is_never_hit() {
    let mut engine = new_engine(quiet_config());
    let owner = engine.spawn_ship_at(Position::new(500.0, 500.0), Velocity::default());
    let other = engine.spawn_ship_at(Position::new(800.0, 500.0), Velocity::default());
    let owner_id = ship_of(&engine, owner).id;
    let other_id = ship_of(&engine, other).id;

    let inside_owner = Position::new(505.0, 500.0);
    assert_eq!(projectiles::find_collision(engine.world(), &inside_owner, owner_id), None);
    assert_eq!(
        projectiles::find_collision(engine.world(), &inside_owner, other_id),
        Some(owner)
    );
}

#[test]
fn test_collision_radius_is_strict() {
    let mut engine = new_engine(quiet_config());
    let ship = engine.spawn_ship_at(Position::new(500.0, 500.0), Velocity::default());

    let on_rim = Position::new(520.0, 500.0);
    let inside = Position::new(519.9, 500.0);
    assert_eq!(projectiles::find_collision(engine.world(), &on_rim, ShipId(999)), None);
    assert_eq!(
        projectiles::find_collision(engine.world(), &inside, ShipId(999)),
        Some(ship)
    );
}

#[test]
fn test_collision_picks_first_in_collection_order() {
    let mut engine = new_engine(quiet_config());
    let first = engine.spawn_ship_at(Position::new(500.0, 500.0), Velocity::default());
    let _second = engine.spawn_ship_at(Position::new(510.0, 500.0), Velocity::default());

    let overlap = Position::new(505.0, 500.0);
    assert_eq!(
        projectiles::find_collision(engine.world(), &overlap, ShipId(999)),
        Some(first)
    );
}

#[test]
fn test_pre_advance_hit_is_never_registered() {
    let mut engine = new_engine(quiet_config());
    let shooter = engine.spawn_ship_at(Position::new(100.0, 100.0), Velocity::default());
    let target = engine.spawn_ship_at(Position::new(115.0, 100.0), Velocity::default());
    let shooter_id = ship_of(&engine, shooter).id;

    let body = generic_round(shooter_id, Position::new(100.0, 100.0), Velocity::new(10.0, 0.0));
    {
        let mut surface = NullSurface;
        let mut ctx = engine.context(&mut surface);
        assert!(projectiles::launch(&mut ctx, body).is_none());
    }

    assert!(!engine.world().contains(target));
    assert!(projectiles_in(&engine).is_empty());
    assert_eq!(engine.ships().len(), 2);

    let snap = engine.advance_frame(&[], &mut NullSurface);
    assert!(snap.events.iter().any(|e| matches!(
        e,
        SimEvent::ShipDestroyed {
            cause: DestructionCause::Projectile { shooter, .. },
            ..
        } if *shooter == shooter_id
    )));
}

#[test]
fn test_projectile_hit_in_flight() {
    let mut engine = new_engine(quiet_config());
    let target = engine.spawn_ship_at(Position::new(200.0, 100.0), Velocity::default());
    let body = generic_round(ShipId(999), Position::new(100.0, 100.0), Velocity::new(30.0, 0.0));
    {
        let mut surface = NullSurface;
        let mut ctx = engine.context(&mut surface);
        assert!(projectiles::launch(&mut ctx, body).is_some());
        // 130, 160, then 190 lands inside the target's radius.
        step_projectiles(&mut ctx);
        assert!(ctx.world.contains(target));
        step_projectiles(&mut ctx);
    }

    assert!(!engine.world().contains(target));
    assert!(projectiles_in(&engine).is_empty());
    assert_eq!(engine.ships().len(), 1);
}

#[test]
fn test_launch_frame_rounds_wait_for_next_frame() {
    let mut engine = new_engine(quiet_config());
    let shooter = engine.spawn_ship_at(Position::new(1000.0, 700.0), Velocity::default());
    let target = engine.spawn_ship_at(Position::new(1900.0, 700.0), Velocity::default());

    let mut surface = NullSurface;
    let mut ctx = engine.context(&mut surface);
    let roster = FrameRoster::collect(ctx.world);
    assert_eq!(ships::fire_at(&mut ctx, shooter, target), Some(Weapon::MachineGun));
    projectiles::run(&mut ctx, &roster.projectiles);

    let rounds = projectiles_in(&engine);
    assert_eq!(rounds.len(), 8);
    for (projectile, pos, _) in rounds {
        assert_eq!(projectile.ticks, 0);
        assert!((pos.x - 1001.8).abs() < 1e-9);
    }
}

#[test]
fn test_launch_frame_effects_wait_for_next_frame() {
    let mut engine = new_engine(quiet_config());
    let shooter = engine.spawn_ship_at(Position::new(100.0, 700.0), Velocity::default());
    let target = engine.spawn_ship_at(Position::new(3100.0, 700.0), Velocity::default());

    let mut surface = NullSurface;
    let mut ctx = engine.context(&mut surface);
    let roster = FrameRoster::collect(ctx.world);
    assert_eq!(ships::fire_at(&mut ctx, shooter, target), Some(Weapon::Torpedo));
    ships::destroy_ship(&mut ctx, target, DestructionCause::Input);

    let emitted: Vec<Emitter> = ctx
        .world
        .query::<&Emitter>()
        .iter()
        .map(|(_, e)| e.clone())
        .collect();
    let burst_ring: Vec<f64> = ctx
        .world
        .query::<&DeathBurst>()
        .iter()
        .map(|(_, b)| b.ring_radius)
        .collect();
    effects::run_emitters(&mut ctx, &roster.emitters);
    effects::run_deaths(&mut ctx, &roster.bursts);

    let after: Vec<Emitter> = engine
        .world()
        .query::<&Emitter>()
        .iter()
        .map(|(_, e)| e.clone())
        .collect();
    assert_eq!(after.len(), 1);
    assert_eq!(after[0].particles, emitted[0].particles);
    let after_ring: Vec<f64> = engine
        .world()
        .query::<&DeathBurst>()
        .iter()
        .map(|(_, b)| b.ring_radius)
        .collect();
    assert_eq!(after_ring, burst_ring);
}

#[test]
fn test_fresh_rounds_untouched_in_launch_frame() {
    let mut engine = new_engine(SimConfig {
        initial_ships: 12,
        initial_stars: 0,
        ..Default::default()
    });
    let mut fresh_rounds = 0;
    for _ in 0..800 {
        let before: Vec<hecs::Entity> = FrameRoster::collect(engine.world()).projectiles;
        engine.advance_frame(&[], &mut NullSurface);

        let shooters: Vec<(ShipId, Position)> = engine
            .world()
            .query::<(&Ship, &Position)>()
            .iter()
            .map(|(_, (ship, pos))| (ship.id, *pos))
            .collect();
        for (entity, (projectile, pos, vel)) in engine
            .world()
            .query::<(&Projectile, &Position, &Velocity)>()
            .iter()
        {
            if before.contains(&entity) {
                continue;
            }
            fresh_rounds += 1;
            assert_eq!(projectile.ticks, 0);
            // Exactly one step from the muzzle.
            if let Some((_, muzzle)) = shooters.iter().find(|(id, _)| *id == projectile.owner) {
                assert!((pos.x - vel.x - muzzle.x).abs() < 1e-9);
                assert!((pos.y - vel.y - muzzle.y).abs() < 1e-9);
            }
        }
    }
    assert!(fresh_rounds > 0);
}

// ---- Effects ----

#[test]
fn test_exhaust_terminates_within_max_life() {
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    for _ in 0..20 {
        let origin = Position::new(50.0, 50.0);
        let mut emitter = exhaust::new(&mut rng, origin, glam::DVec2::X, 1.0);
        let count = emitter.particles.len();
        assert!((8..=12).contains(&count));
        let mut ticks = 0;
        while !emitter.particles.is_empty() {
            exhaust::update(&mut emitter.particles);
            ticks += 1;
            for p in &emitter.particles {
                assert!(p.radius >= 1.0);
            }
        }
        assert!(ticks <= 24);
    }
}

#[test]
fn test_trail_smoke_terminates_within_max_life() {
    let mut rng = ChaCha8Rng::seed_from_u64(2);
    for _ in 0..20 {
        let origin = Position::new(50.0, 50.0);
        let mut emitter = trail_smoke::new(&mut rng, origin, glam::DVec2::ZERO, 0.6);
        assert!((2..=4).contains(&emitter.particles.len()));
        let mut ticks = 0;
        while !emitter.particles.is_empty() {
            trail_smoke::update(&mut emitter.particles);
            ticks += 1;
            for p in &emitter.particles {
                assert!(p.radius <= 4.0);
            }
        }
        assert!(ticks <= 18);
    }
}

#[test]
fn test_zero_direction_points_left() {
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let emitter = exhaust::new(&mut rng, Position::new(0.0, 0.0), glam::DVec2::ZERO, 1.0);
    for p in &emitter.particles {
        assert!(p.velocity.x < 0.0, "particle should head left: {:?}", p.velocity);
    }
}

#[test]
fn test_death_burst_terminates() {
    let mut rng = ChaCha8Rng::seed_from_u64(4);
    for _ in 0..20 {
        let mut burst = death_burst::new(&mut rng, Position::new(100.0, 100.0), None);
        assert!((120.0..=200.0).contains(&burst.ring_max_radius));
        let mut ring_done_at = None;
        let mut ticks = 0;
        while !death_burst::is_finished(&burst) {
            death_burst::update(&mut burst);
            ticks += 1;
            if ring_done_at.is_none() && burst.ring_radius >= burst.ring_max_radius {
                ring_done_at = Some(ticks);
            }
            assert!(ticks <= 48, "burst outlived its longest stage");
        }
        assert!(ring_done_at.unwrap() <= 34);
        assert_eq!(burst.flash_ticks, 0);
    }
}

#[test]
fn test_death_burst_palette_from_ship_color() {
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    let burst = death_burst::new(&mut rng, Position::new(0.0, 0.0), Some(NamedColor::Cyan));
    let palette = death_burst::palette_for(NamedColor::Cyan);
    assert_eq!(burst.palette, palette);
    assert!(burst.sparks.iter().all(|p| palette.contains(&p.color)));
    assert_eq!(
        death_burst::palette_for(NamedColor::White),
        death_burst::palette_for(NamedColor::Orange)
    );
}

#[test]
fn test_effects_despawn_when_done() {
    let mut engine = new_engine(SimConfig {
        initial_ships: 1,
        initial_stars: 0,
        ..Default::default()
    });
    let press = [InputEvent::KeyPress { key: Key::Other(1) }];
    let snap = engine.advance_frame(&press, &mut NullSurface);
    assert_eq!(snap.death_count, 1);

    let mut last = snap;
    for _ in 0..60 {
        last = engine.advance_frame(&[], &mut NullSurface);
    }
    assert_eq!(last.death_count, 0);
    assert_eq!(last.effect_count, 0);
}

// ---- Stars ----

#[test]
fn test_star_leaves_and_is_removed() {
    let mut engine = new_engine(SimConfig {
        width: 100.0,
        height: 100.0,
        ..quiet_config()
    });
    let star = engine.world_mut().spawn((
        Star {
            radius: 2.0,
            color: NamedColor::White,
        },
        Position::new(94.0, 10.0),
    ));

    let mut surface = NullSurface;
    let mut ctx = engine.context(&mut surface);
    stars::run(&mut ctx);
    assert!(ctx.world.contains(star), "98 is still inside");
    stars::run(&mut ctx);
    assert!(!ctx.world.contains(star));
}

#[test]
fn test_star_field_drifts() {
    let mut engine = new_engine(quiet_config());
    let star = engine.world_mut().spawn((
        Star {
            radius: 3.0,
            color: NamedColor::Yellow,
        },
        Position::new(100.0, 200.0),
    ));

    let mut surface = NullSurface;
    let mut ctx = engine.context(&mut surface);
    stars::run(&mut ctx);
    stars::run(&mut ctx);

    assert!(ctx.world.contains(star));
    let pos = *engine.world().get::<&Position>(star).unwrap();
    assert_eq!(pos, Position::new(108.0, 204.0));
}

// ---- Input ----

#[test]
fn test_exit_keys_request_quit() {
    for key in [Key::Escape, Key::Char('q'), Key::Char('Q')] {
        let mut engine = new_engine(SimConfig::default());
        let snap = engine.advance_frame(&[InputEvent::KeyPress { key }], &mut NullSurface);
        assert!(snap.quit_requested);
        assert!(snap.events.contains(&SimEvent::QuitRequested));
        assert!(!snap.events.iter().any(|e| matches!(
            e,
            SimEvent::ShipDestroyed {
                cause: DestructionCause::Input,
                ..
            }
        )));
    }
}

#[test]
fn test_quit_event_is_sticky() {
    let mut engine = new_engine(SimConfig::default());
    let snap = engine.advance_frame(&[InputEvent::Quit], &mut NullSurface);
    assert!(snap.quit_requested);
    assert_eq!(snap.time.tick, 1, "the quitting frame still completes");
    let snap = engine.advance_frame(&[], &mut NullSurface);
    assert!(snap.quit_requested);
    assert!(engine.quit_requested());
}

#[test]
fn test_other_key_destroys_exactly_one_ship() {
    let mut engine = new_engine(SimConfig::default());
    let press = [InputEvent::KeyPress { key: Key::Char('x') }];
    let snap = engine.advance_frame(&press, &mut NullSurface);
    let by_input = snap
        .events
        .iter()
        .filter(|e| {
            matches!(
                e,
                SimEvent::ShipDestroyed {
                    cause: DestructionCause::Input,
                    ..
                }
            )
        })
        .count();
    assert_eq!(by_input, 1);
    assert_eq!(snap.ships.len(), 3);
}

#[test]
fn test_random_destroy_always_finds_a_ship() {
    // Deliberate behavior change: the pick is uniform over [0, len) and can
    // never wrap or fall outside the fleet. A lone ship is index 0 every time.
    let mut engine = new_engine(quiet_config());
    engine.spawn_ship_at(Position::new(50.0, 50.0), Velocity::default());

    let mut surface = NullSurface;
    let mut ctx = engine.context(&mut surface);
    for _ in 0..50 {
        assert!(input::destroy_random_ship(&mut ctx));
    }
    assert_eq!(engine.ships().len(), 1);
}

#[test]
fn test_random_destroy_on_empty_fleet_is_noop() {
    let mut engine = new_engine(quiet_config());
    let press = [InputEvent::KeyPress { key: Key::Char('x') }];
    let snap = engine.advance_frame(&press, &mut NullSurface);
    assert!(snap.ships.is_empty());
    assert!(!snap.quit_requested);
    assert!(!snap
        .events
        .iter()
        .any(|e| matches!(e, SimEvent::ShipDestroyed { .. })));
}

// ---- Drawing ----

#[test]
fn test_draw_failures_are_swallowed() {
    let mut engine = new_engine(SimConfig::default());
    let mut total = 0;
    for _ in 0..10 {
        let snap = engine.advance_frame(&[], &mut FailingSurface);
        assert_eq!(snap.ships.len(), 3);
        total += snap.draw_failures;
    }
    assert!(total >= 30, "every ship hull draw should have failed");
}

#[test]
fn test_frame_draws_every_ship() {
    let mut engine = new_engine(SimConfig {
        initial_stars: 0,
        ..Default::default()
    });
    let mut recorder = CommandRecorder::new();
    let snap = engine.advance_frame(&[], &mut recorder);
    assert_eq!(snap.draw_failures, 0);
    let hulls = recorder
        .drain()
        .into_iter()
        .filter(|c| matches!(c, skirmish_core::draw::DrawCommand::FillPolygon { .. }))
        .count();
    assert!(hulls >= 3);
}
