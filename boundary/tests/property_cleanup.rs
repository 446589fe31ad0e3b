use boundary::{clean_polygon, CleanupConfig, Polygon, Vertex};
use proptest::prelude::*;

const SWING: f64 = 0.414_213_562;

#[derive(Clone, Copy, Debug)]
enum DoorStyle {
    // Leaf edge down from the wall; the leaf tip carries the arc.
    Swing,
    // 20" recess with a 36" floor; the arc sits on the wall vertex past it,
    // `offset` inches beyond the far jamb.
    Notch { offset: f64 },
}

#[derive(Clone, Debug)]
struct Room {
    height: f64,
    spikes: Vec<(f64, f64)>, // (width, depth) on the top wall
    doors: usize,            // doors on the bottom wall
    style: DoorStyle,
}

impl Room {
    fn width(&self) -> f64 {
        let by_spikes = 100.0 * self.spikes.len() as f64 + 170.0;
        let by_doors = 120.0 * self.doors as f64 + 150.0;
        by_spikes.max(by_doors).max(400.0)
    }

    // Counter-clockwise: bottom wall left to right, top wall right to left.
    // Every artifact points outward.
    fn traced(&self) -> Polygon {
        let w = self.width();
        let h = self.height;
        let mut v = vec![Vertex::line(0.0, 0.0)];
        for k in 0..self.doors {
            let x = 60.0 + 120.0 * k as f64;
            match self.style {
                DoorStyle::Swing => {
                    v.push(Vertex::line(x, 0.0));
                    v.push(Vertex::arc(x, -36.0, SWING));
                    v.push(Vertex::line(x + 36.0, 0.0));
                }
                DoorStyle::Notch { offset } => {
                    v.push(Vertex::line(x, 0.0));
                    v.push(Vertex::line(x, -20.0));
                    v.push(Vertex::line(x + 36.0, -20.0));
                    v.push(Vertex::line(x + 36.0, 0.0));
                    v.push(Vertex::arc(x + 36.0 + offset, 0.0, SWING));
                }
            }
        }
        v.push(Vertex::line(w, 0.0));
        v.push(Vertex::line(w, h));
        for (k, &(sw, sd)) in self.spikes.iter().enumerate().rev() {
            let x = 60.0 + 100.0 * k as f64;
            v.push(Vertex::line(x + sw, h));
            v.push(Vertex::line(x + sw, h + sd));
            v.push(Vertex::line(x, h + sd));
            v.push(Vertex::line(x, h));
        }
        v.push(Vertex::line(0.0, h));
        Polygon::new(v).unwrap()
    }
}

fn style_strategy() -> impl Strategy<Value = DoorStyle> {
    prop_oneof![
        Just(DoorStyle::Swing),
        (10.0..28.0f64).prop_map(|offset| DoorStyle::Notch { offset }),
    ]
}

fn room_strategy() -> impl Strategy<Value = Room> {
    (
        300.0..600.0f64,
        prop::collection::vec((2.0..10.0f64, 20.0..60.0f64), 0..6),
        0usize..6,
        style_strategy(),
    )
        .prop_map(|(height, spikes, doors, style)| Room { height, spikes, doors, style })
}

fn arbitrary_polygon() -> impl Strategy<Value = Polygon> {
    prop::collection::vec(
        (-200.0..200.0f64, -200.0..200.0f64, prop_oneof![Just(0.0), -1.0..1.0f64]),
        3..40,
    )
    .prop_map(|pts| {
        Polygon::new(pts.into_iter().map(|(x, y, b)| Vertex::arc(x, y, b)).collect()).unwrap()
    })
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 512, .. ProptestConfig::default() })]

    #[test]
    fn artifacts_are_removed_from_generated_rooms(room in room_strategy()) {
        let cfg = CleanupConfig::default();
        let raw = room.traced();
        let cleaned = clean_polygon(&raw, &cfg);

        prop_assert!(cleaned.is_clean());
        prop_assert_eq!(cleaned.report.spikes_removed, room.spikes.len());
        prop_assert_eq!(cleaned.report.doors_matched, room.doors);
        // Each door keeps only its near jamb on the wall line.
        prop_assert_eq!(cleaned.polygon.len(), 4 + 2 * room.spikes.len() + room.doors);
        prop_assert!(cleaned.polygon.points().iter().all(|p| p.y >= 0.0));

        let expected = room.width() * room.height;
        let before = raw.signed_area();
        let after = cleaned.polygon.signed_area();
        prop_assert!((after - expected).abs() <= 1e-6 * expected);
        prop_assert!(after.abs() <= before.abs() + 1e-6 * expected);
    }

    #[test]
    fn cleanup_is_idempotent(room in room_strategy()) {
        let cfg = CleanupConfig::default();
        let once = clean_polygon(&room.traced(), &cfg);
        let twice = clean_polygon(&once.polygon, &cfg);
        prop_assert_eq!(twice.polygon, once.polygon);
    }

    #[test]
    fn output_never_drops_below_three_vertices(poly in arbitrary_polygon()) {
        let cleaned = clean_polygon(&poly, &CleanupConfig::default());
        prop_assert!(cleaned.polygon.len() >= 3);
        prop_assert!(cleaned.polygon.len() <= poly.len());
        prop_assert!(cleaned.polygon.vertices().iter().all(|v| !v.is_arc()));
        if cleaned.warning.is_some() {
            prop_assert_eq!(cleaned.report.notch_vertices_removed, 0);
        }
    }
}
