#[cfg(test)]
mod tests {
    use glam::Vec2;

    use crate::commands::{HeldKeys, PlayerCommand};
    use crate::enums::*;
    use crate::events::SimEvent;
    use crate::state::MatchSnapshot;
    use crate::stats::MatchStats;
    use crate::types::{aim_vector, Aabb, CellPos, SimTime};

    /// Verify TileKind wire ids round-trip and cover 1..=8.
    #[test]
    fn test_tile_kind_wire_ids() {
        for id in 1u8..=8 {
            let kind = TileKind::from_type_id(id).unwrap();
            assert_eq!(kind.type_id(), id);
        }
        assert!(TileKind::from_type_id(0).is_none());
        assert!(TileKind::from_type_id(9).is_none());
    }

    #[test]
    fn test_cannon_spec_only_for_cannons() {
        assert!(TileKind::Ground.cannon_spec().is_none());
        assert!(TileKind::Stone.cannon_spec().is_none());

        let normal = TileKind::CannonNormal.cannon_spec().unwrap();
        assert_eq!(normal.cooldown_ms, 250);
        assert_eq!(normal.ammo_cost, 1);

        let shield = TileKind::CannonShield.cannon_spec().unwrap();
        assert_eq!(shield.cooldown_ms, 1500);
        assert_eq!(shield.ammo_cost, 8);
    }

    /// Explosive shots always out-damage normal ones for every kind.
    #[test]
    fn test_projectile_damage_tables() {
        let kinds = [
            ProjectileKind::Shell,
            ProjectileKind::Bomb,
            ProjectileKind::Ricochet,
            ProjectileKind::Sniper,
            ProjectileKind::Shield,
        ];
        for kind in kinds {
            assert!(kind.damage(true) > kind.damage(false));
        }
        // Bombs ignore ghosts entirely.
        assert!(ProjectileKind::Bomb.ghost_damage(false).is_none());
        assert!(ProjectileKind::Shell.ghost_damage(false).is_some());
        // Sniper is the only gravity-free kind.
        assert_eq!(ProjectileKind::Sniper.gravity(), 0.0);
    }

    #[test]
    fn test_player_id_opponent() {
        assert_eq!(PlayerId::One.opponent(), PlayerId::Two);
        assert_eq!(PlayerId::Two.opponent(), PlayerId::One);
        assert_eq!(PlayerId::One.index(), 0);
        assert_eq!(PlayerId::Two.index(), 1);
    }

    /// Touching edges is not an overlap (matters for standing on tiles).
    #[test]
    fn test_aabb_strict_overlap() {
        let a = Aabb::new(Vec2::new(0.0, 0.0), Vec2::new(40.0, 40.0));
        let touching = Aabb::new(Vec2::new(40.0, 0.0), Vec2::new(80.0, 40.0));
        let overlapping = Aabb::new(Vec2::new(39.0, 0.0), Vec2::new(79.0, 40.0));
        assert!(!a.overlaps(&touching));
        assert!(a.overlaps(&overlapping));
        assert!(a.overlaps(&a));
    }

    #[test]
    fn test_cell_pos_round_trip() {
        let cell = CellPos::new(3, 5);
        assert_eq!(CellPos::from_point(cell.center()), cell);
        assert_eq!(cell.origin(), Vec2::new(120.0, 200.0));
        assert_eq!(cell.rect().size(), Vec2::splat(40.0));

        // Points on a boundary belong to the cell to the right/below.
        assert_eq!(
            CellPos::from_point(Vec2::new(40.0, 0.0)),
            CellPos::new(1, 0)
        );
        assert_eq!(
            CellPos::from_point(Vec2::new(-1.0, -1.0)),
            CellPos::new(-1, -1)
        );
    }

    #[test]
    fn test_aim_vector_directions() {
        let right = aim_vector(0.0);
        assert!((right.x - 1.0).abs() < 1e-6 && right.y.abs() < 1e-6);

        // 90 degrees points up, which is negative y on screen.
        let up = aim_vector(90.0);
        assert!(up.x.abs() < 1e-6 && (up.y + 1.0).abs() < 1e-6);

        let left = aim_vector(180.0);
        assert!((left.x + 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        for _ in 0..60 {
            time.advance();
        }
        assert_eq!(time.tick, 60);
        // 60 ticks at 60Hz = 1 second
        assert!((time.elapsed_secs - 1.0).abs() < 1e-9);
    }

    /// Verify PlayerCommand round-trips through serde (tagged union).
    #[test]
    fn test_player_command_serde() {
        let commands = vec![
            PlayerCommand::SetHeld {
                player: PlayerId::One,
                held: HeldKeys {
                    left: true,
                    ..Default::default()
                },
            },
            PlayerCommand::ToggleCannon {
                player: PlayerId::Two,
            },
            PlayerCommand::Fire {
                player: PlayerId::One,
            },
            PlayerCommand::PlaceBlock {
                player: PlayerId::Two,
            },
        ];
        for cmd in &commands {
            let json = serde_json::to_string(cmd).unwrap();
            let back: PlayerCommand = serde_json::from_str(&json).unwrap();
            assert_eq!(json, serde_json::to_string(&back).unwrap());
        }
    }

    /// Verify SimEvent round-trips through serde.
    #[test]
    fn test_sim_event_serde() {
        let events = vec![
            SimEvent::ShotFired {
                player: PlayerId::One,
                kind: ProjectileKind::Bomb,
                explosive: true,
            },
            SimEvent::BombExploded {
                x: 100.0,
                y: 200.0,
                stones_destroyed: 3,
            },
            SimEvent::BoxCollected {
                player: PlayerId::Two,
                kind: BoxKind::Health,
            },
            SimEvent::PlayerDied {
                player: PlayerId::One,
            },
        ];
        for event in &events {
            let json = serde_json::to_string(event).unwrap();
            let _back: SimEvent = serde_json::from_str(&json).unwrap();
        }
    }

    #[test]
    fn test_stats_record_hit() {
        let mut stats = MatchStats::default();
        stats.record_hit(PlayerId::One, 20);
        stats.record_hit(PlayerId::One, 0);
        assert_eq!(stats.tally(PlayerId::One).hits, 2);
        assert_eq!(stats.tally(PlayerId::One).damage_dealt, 20);
        assert_eq!(stats.tally(PlayerId::Two).hits, 0);
    }

    /// Verify MatchSnapshot serializes to JSON and back.
    #[test]
    fn test_snapshot_serde() {
        let snapshot = MatchSnapshot::default();
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: MatchSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot.time.tick, back.time.tick);
        assert_eq!(snapshot.phase, back.phase);
    }
}
