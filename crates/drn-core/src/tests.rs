//! Unit tests for drn-core primitives.

#[cfg(test)]
mod ids {
    use crate::{DroneId, StationId, VertexId};

    #[test]
    fn index_roundtrip() {
        let id = VertexId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(VertexId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(VertexId(0) < VertexId(1));
        assert!(DroneId(100) > DroneId(99));
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(VertexId::INVALID.0, u32::MAX);
        assert_eq!(StationId::INVALID.0, u32::MAX);
    }

    #[test]
    fn display() {
        assert_eq!(VertexId(7).to_string(), "VertexId(7)");
    }

    #[test]
    fn default_is_invalid() {
        assert_eq!(VertexId::default(), VertexId::INVALID);
    }
}

#[cfg(test)]
mod attrs {
    use crate::{AttrBag, AttrValue, Role};

    #[test]
    fn set_get_roundtrip() {
        let mut bag = AttrBag::new();
        bag.set("priority", 3i64);
        bag.set("label", "hub");
        bag.set("urgent", true);
        assert_eq!(bag.get("priority"), Some(&AttrValue::Int(3)));
        assert_eq!(bag.get("label"), Some(&AttrValue::Text("hub".into())));
        assert_eq!(bag.get("urgent"), Some(&AttrValue::Bool(true)));
        assert_eq!(bag.len(), 3);
    }

    #[test]
    fn remove_absent_is_none() {
        let mut bag = AttrBag::new();
        assert_eq!(bag.remove("missing"), None);
        bag.set("x", 1i64);
        assert_eq!(bag.remove("x"), Some(AttrValue::Int(1)));
        assert!(bag.is_empty());
    }

    #[test]
    fn role_display() {
        assert_eq!(Role::Storage.to_string(), "storage");
        assert_eq!(Role::Charging.to_string(), "charging");
        assert_eq!(Role::Client.to_string(), "client");
    }
}

#[cfg(test)]
mod rng {
    use crate::GraphRng;

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = GraphRng::new(12345);
        let mut r2 = GraphRng::new(12345);
        for _ in 0..100 {
            let a = r1.gen_range(0.0f64..1.0);
            let b = r2.gen_range(0.0f64..1.0);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn different_seeds_diverge() {
        let mut r0 = GraphRng::new(1);
        let mut r1 = GraphRng::new(2);
        let a = r0.gen_range(0u64..u64::MAX);
        let b = r1.gen_range(0u64..u64::MAX);
        assert_ne!(a, b);
    }

    #[test]
    fn gen_index_in_bounds() {
        let mut rng = GraphRng::new(7);
        for _ in 0..500 {
            let v = rng.gen_index(5);
            assert!(v < 5);
        }
    }

    #[test]
    fn gen_bool_extremes() {
        let mut rng = GraphRng::new(0);
        assert!(!rng.gen_bool(0.0));
        assert!(rng.gen_bool(1.0));
    }
}
