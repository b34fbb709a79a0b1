//! Unit tests for tms-core.

#[cfg(test)]
mod ids {
    use crate::{EdgeIdx, NodeIdx};

    #[test]
    fn new_round_trips_through_index() {
        let n = NodeIdx::new(7);
        assert_eq!(n, NodeIdx(7));
        assert_eq!(n.index(), 7);
    }

    #[test]
    fn invalid_is_never_a_live_index() {
        assert_eq!(NodeIdx::INVALID.0, u32::MAX);
        assert_ne!(EdgeIdx::new(0), EdgeIdx::INVALID);
    }

    #[test]
    fn ordering_follows_insertion_order() {
        assert!(NodeIdx::new(1) < NodeIdx::new(2));
        // INVALID sorts after every live index.
        assert!(EdgeIdx::new(0) < EdgeIdx::INVALID);
    }
}

#[cfg(test)]
mod coord {
    use crate::Coordinate;

    #[test]
    fn serde_shape() {
        let c = Coordinate::new(1.5, -2.0);
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(json, r#"{"x":1.5,"y":-2.0}"#);
        let back: Coordinate = serde_json::from_str(&json).unwrap();
        assert_eq!(back, c);
    }
}
