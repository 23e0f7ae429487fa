//! Unit tests for tt-core primitives.

#[cfg(test)]
mod ids {
    use crate::{AgentId, Owner, TrapId};

    #[test]
    fn index_roundtrip() {
        let id = AgentId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(AgentId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn wire_ids_do_not_collide() {
        assert_eq!(Owner::Agent(AgentId(0)).wire_id(), 0);
        assert_eq!(Owner::Agent(AgentId(24)).wire_id(), 24);
        assert_eq!(Owner::Trap(TrapId(0)).wire_id(), -1);
        assert_eq!(Owner::Trap(TrapId(14)).wire_id(), -15);
    }

    #[test]
    fn display() {
        assert_eq!(AgentId(7).to_string(), "AgentId(7)");
        assert_eq!(Owner::from(TrapId(3)).to_string(), "TrapId(3)");
    }
}

#[cfg(test)]
mod torus {
    use crate::{Direction, Position};

    #[test]
    fn wraps_horizontally() {
        let w = 5;
        let h = 4;
        assert_eq!(Position::new(0, 2).step(Direction::Left, w, h), Position::new(4, 2));
        assert_eq!(Position::new(4, 2).step(Direction::Right, w, h), Position::new(0, 2));
    }

    #[test]
    fn wraps_vertically() {
        let w = 5;
        let h = 4;
        assert_eq!(Position::new(1, 0).step(Direction::Up, w, h), Position::new(1, 3));
        assert_eq!(Position::new(1, 3).step(Direction::Down, w, h), Position::new(1, 0));
    }

    #[test]
    fn interior_steps() {
        let p = Position::new(2, 2);
        assert_eq!(p.step(Direction::Up, 5, 5), Position::new(2, 1));
        assert_eq!(p.step(Direction::Down, 5, 5), Position::new(2, 3));
        assert_eq!(p.step(Direction::Left, 5, 5), Position::new(1, 2));
        assert_eq!(p.step(Direction::Right, 5, 5), Position::new(3, 2));
    }

    #[test]
    fn adjacency_across_the_seam() {
        assert!(Position::new(0, 0).is_adjacent(Position::new(4, 0), 5, 5));
        assert!(Position::new(0, 0).is_adjacent(Position::new(0, 4), 5, 5));
        assert!(!Position::new(0, 0).is_adjacent(Position::new(1, 1), 5, 5));
        assert!(!Position::new(0, 0).is_adjacent(Position::new(0, 0), 5, 5));
    }

    #[test]
    fn vanished_is_out_of_bounds() {
        let v = Position::vanished(15, 15);
        assert_eq!(v, Position::new(15, 15));
        assert!(!v.in_bounds(15, 15));
        assert!(Position::new(14, 14).in_bounds(15, 15));
    }
}

#[cfg(test)]
mod trace {
    use std::time::Duration;

    use crate::{AgentId, Outcome, Owner, Position, Symbol, TraceSequence, TrapId};

    #[test]
    fn symbols() {
        assert_eq!(Symbol::traveler(0).as_char(), 'A');
        assert_eq!(Symbol::traveler(25).as_char(), 'Z');
        assert_eq!(Symbol::traveler(2).lowered().as_char(), 'c');
        assert_eq!(Symbol::wild(7).as_char(), '7');
        assert_eq!(Symbol::wild(7).lowered(), Symbol::wild(7));
        assert_eq!(Symbol::TRAP.to_string(), "#");
    }

    #[test]
    fn record_stamps_owner() {
        let mut seq = TraceSequence::new(AgentId(3), Outcome::Finished);
        assert!(seq.is_empty());
        seq.record(Duration::from_millis(5), Position::new(1, 1), Symbol::traveler(3));
        seq.record(Duration::from_millis(9), Position::new(1, 2), Symbol::traveler(3));
        assert_eq!(seq.len(), 2);
        assert!(seq.traces.iter().all(|t| t.owner == Owner::Agent(AgentId(3))));
        assert_eq!(seq.last().unwrap().position, Position::new(1, 2));
    }

    #[test]
    fn trap_announcements_keep_placement_id() {
        let placed = TraceSequence::trap_placed(TrapId(4), Position::new(2, 3));
        let hit = TraceSequence::trap_collision(TrapId(4), Duration::from_secs(1), Position::new(2, 3));
        assert_eq!(placed.owner, hit.owner);
        assert_eq!(placed.outcome, Outcome::Placed);
        assert_eq!(hit.outcome, Outcome::Collision(TrapId(4)));
        assert_eq!(placed.traces[0].timestamp, Duration::ZERO);
        assert_eq!(hit.traces[0].symbol, Symbol::TRAP);
    }
}

#[cfg(test)]
mod rng {
    use std::time::Duration;

    use crate::{AgentId, DecisionSource, SimRng};

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = DecisionSource::new(12345, AgentId(0));
        let mut r2 = DecisionSource::new(12345, AgentId(0));
        for _ in 0..100 {
            assert_eq!(r1.direction(), r2.direction());
            assert_eq!(r1.gen_range(0..1000u32), r2.gen_range(0..1000u32));
        }
    }

    #[test]
    fn different_agents_differ() {
        let mut r0 = DecisionSource::new(1, AgentId(0));
        let mut r1 = DecisionSource::new(1, AgentId(1));
        let a: Vec<u32> = (0..16).map(|_| r0.gen_range(0..u32::MAX)).collect();
        let b: Vec<u32> = (0..16).map(|_| r1.gen_range(0..u32::MAX)).collect();
        assert_ne!(a, b, "seeds for adjacent agents should diverge");
    }

    #[test]
    fn duration_between_in_bounds() {
        let mut rng = DecisionSource::new(0, AgentId(0));
        let min = Duration::from_millis(10);
        let max = Duration::from_millis(50);
        for _ in 0..1000 {
            let d = rng.duration_between(min, max);
            assert!(d >= min && d < max, "got {d:?}");
        }
    }

    #[test]
    fn duration_between_empty_range() {
        let mut rng = DecisionSource::new(0, AgentId(0));
        let d = Duration::from_millis(7);
        assert_eq!(rng.duration_between(d, d), d);
    }

    #[test]
    fn sim_rng_reproducible() {
        let mut a = SimRng::new(9);
        let mut b = SimRng::new(9);
        for _ in 0..50 {
            assert_eq!(a.gen_range(0..15u32), b.gen_range(0..15u32));
        }
    }

    #[test]
    fn trap_stream_independent_of_first_agent() {
        for seed in [0, 1, 42, u64::MAX] {
            let mut traps = SimRng::new(seed);
            let mut first = DecisionSource::new(seed, AgentId(0));
            let a: Vec<u32> = (0..20).map(|_| traps.gen_range(0..15u32)).collect();
            let b: Vec<u32> = (0..20).map(|_| first.gen_range(0..15u32)).collect();
            assert_ne!(a, b, "seed {seed}: agent 0 replays the trap-placement stream");
        }
    }
}

#[cfg(test)]
mod config {
    use std::time::Duration;

    use crate::TravelConfig;

    #[test]
    fn default_is_valid() {
        let cfg = TravelConfig::default();
        cfg.validate().unwrap();
        assert_eq!(cfg.cell_count(), 225);
        assert_eq!(cfg.agent_count(), 25);
    }

    #[test]
    fn rejects_tiny_board() {
        let cfg = TravelConfig { width: 1, ..TravelConfig::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn rejects_too_many_travelers() {
        let cfg = TravelConfig {
            width: 30,
            height: 30,
            travelers: 27,
            ..TravelConfig::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn rejects_overcrowded_board() {
        let cfg = TravelConfig {
            width: 3,
            height: 3,
            travelers: 5,
            wild_spawns: 3,
            traps: 2,
            ..TravelConfig::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn rejects_inverted_ranges() {
        let steps = TravelConfig { min_steps: 5, max_steps: 4, ..TravelConfig::default() };
        assert!(steps.validate().is_err());

        let delay = TravelConfig {
            min_delay: Duration::from_millis(60),
            ..TravelConfig::default()
        };
        assert!(delay.validate().is_err());

        let poll = TravelConfig { poll_interval: Duration::ZERO, ..TravelConfig::default() };
        assert!(poll.validate().is_err());
    }
}

#[cfg(all(test, feature = "serde"))]
mod config_json {
    use std::time::Duration;

    use crate::TravelConfig;

    #[test]
    fn partial_file_keeps_defaults() {
        let cfg: TravelConfig =
            serde_json::from_str(r#"{"width":7,"trap_block":250}"#).unwrap();
        assert_eq!(cfg.width, 7);
        assert_eq!(cfg.trap_block, Duration::from_millis(250));
        assert_eq!(
            cfg,
            TravelConfig {
                width: 7,
                trap_block: Duration::from_millis(250),
                ..TravelConfig::default()
            }
        );
    }

    #[test]
    fn durations_are_milliseconds() {
        let cfg = TravelConfig { max_delay: Duration::from_millis(75), ..TravelConfig::default() };
        let json = serde_json::to_value(&cfg).unwrap();
        assert_eq!(json["max_delay"], 75);
        assert_eq!(json["poll_interval"], 1);

        let back: TravelConfig = serde_json::from_value(json).unwrap();
        assert_eq!(back, cfg);
    }

    #[test]
    fn rejects_negative_duration() {
        assert!(serde_json::from_str::<TravelConfig>(r#"{"min_delay":-5}"#).is_err());
    }
}
