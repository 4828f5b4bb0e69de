// src/core/indexing/vector/kdtree/tests/test_select.rs

#[cfg(test)]
mod select_tests {
    use crate::core::indexing::vector::kdtree::{
        select, select_in_place, KdPoint, KdTreeError, Point,
    };
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use std::cmp::Ordering;

    fn pt(coords: &[f64]) -> Point {
        Point::new(coords.to_vec())
    }

    fn sorted_on_axis<P: KdPoint>(points: &[P], axis: usize) -> Vec<P> {
        let mut sorted = points.to_vec();
        sorted.sort_by(|a, b| a.cmp_axis(b, axis));
        sorted
    }

    /// Small integer grid so that equal coordinates are common.
    fn random_points(rng: &mut StdRng, count: usize, dimension: usize) -> Vec<Point> {
        (0..count)
            .map(|_| Point::new((0..dimension).map(|_| rng.gen_range(0..6) as f64).collect()))
            .collect()
    }

    #[test]
    fn test_select_matches_sorted_order_for_every_rank() {
        let mut rng = StdRng::seed_from_u64(7);
        let points = random_points(&mut rng, 60, 3);
        for axis in 0..3 {
            let sorted = sorted_on_axis(&points, axis);
            for (k, expected) in sorted.iter().enumerate() {
                assert_eq!(&select(&points, axis, k).unwrap(), expected, "axis {} rank {}", axis, k);
            }
        }
    }

    #[test]
    fn test_select_single_point() {
        let points = vec![pt(&[4.0, -1.0])];
        assert_eq!(select(&points, 1, 0).unwrap(), pt(&[4.0, -1.0]));
    }

    #[test]
    fn test_select_all_equal_on_axis_uses_full_order() {
        let points = vec![
            pt(&[5.0, 3.0]),
            pt(&[5.0, 0.0]),
            pt(&[5.0, 4.0]),
            pt(&[5.0, 1.0]),
            pt(&[5.0, 2.0]),
        ];
        for k in 0..points.len() {
            assert_eq!(select(&points, 0, k).unwrap(), pt(&[5.0, k as f64]));
        }
    }

    #[test]
    fn test_select_with_identical_duplicates() {
        let points = vec![
            pt(&[1.0, 1.0]),
            pt(&[1.0, 1.0]),
            pt(&[0.0, 0.0]),
            pt(&[1.0, 1.0]),
            pt(&[1.0, 1.0]),
        ];
        assert_eq!(select(&points, 0, 0).unwrap(), pt(&[0.0, 0.0]));
        for k in 1..points.len() {
            assert_eq!(select(&points, 1, k).unwrap(), pt(&[1.0, 1.0]));
        }
    }

    #[test]
    fn test_select_leaves_input_untouched() {
        let points = vec![pt(&[3.0]), pt(&[1.0]), pt(&[2.0])];
        let before = points.clone();
        assert_eq!(select(&points, 0, 1).unwrap(), pt(&[2.0]));
        assert_eq!(points, before);
    }

    #[test]
    fn test_select_in_place_partitions_around_rank() {
        for seed in 0..40 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut base = random_points(&mut rng, 41, 2);
            // Repeat a handful of points so exact copies straddle every rank.
            let copies: Vec<Point> = base.iter().take(8).cloned().collect();
            base.extend(copies.iter().cloned());
            base.extend(copies);
            for k in [0, base.len() / 2, rng.gen_range(0..base.len()), base.len() - 1] {
                let mut points = base.clone();
                let chosen = select_in_place(&mut points, 1, k).unwrap().clone();
                assert_eq!(points[k], chosen, "seed {} rank {}", seed, k);
                assert!(
                    points[..k].iter().all(|p| p.cmp_axis(&chosen, 1) != Ordering::Greater),
                    "seed {} rank {}: greater point left of rank",
                    seed,
                    k
                );
                assert!(
                    points[k + 1..].iter().all(|p| p.cmp_axis(&chosen, 1) != Ordering::Less),
                    "seed {} rank {}: smaller point right of rank",
                    seed,
                    k
                );
            }
        }
    }

    #[test]
    fn test_select_sorted_and_reversed_inputs() {
        let ascending: Vec<Point> = (0..200).map(|i| pt(&[i as f64])).collect();
        let descending: Vec<Point> = ascending.iter().rev().cloned().collect();
        for points in [ascending, descending] {
            assert_eq!(select(&points, 0, 0).unwrap(), pt(&[0.0]));
            assert_eq!(select(&points, 0, 99).unwrap(), pt(&[99.0]));
            assert_eq!(select(&points, 0, 199).unwrap(), pt(&[199.0]));
        }
    }

    #[test]
    fn test_select_on_integer_arrays() {
        let points: Vec<[i32; 2]> = vec![[3, 9], [-2, 4], [3, 1], [0, 0], [7, -5]];
        let sorted = sorted_on_axis(&points, 0);
        assert_eq!(sorted, vec![[-2, 4], [0, 0], [3, 1], [3, 9], [7, -5]]);
        for (k, expected) in sorted.iter().enumerate() {
            assert_eq!(&select(&points, 0, k).unwrap(), expected);
        }
    }

    #[test]
    fn test_rank_out_of_bounds() {
        let points = vec![pt(&[1.0]), pt(&[2.0])];
        assert!(matches!(select(&points, 0, 2), Err(KdTreeError::RankOutOfBounds(_))));

        let empty: Vec<Point> = Vec::new();
        assert!(matches!(select(&empty, 0, 0), Err(KdTreeError::RankOutOfBounds(_))));
    }

    #[test]
    fn test_axis_out_of_bounds() {
        let points = vec![pt(&[1.0, 2.0])];
        assert!(matches!(select(&points, 2, 0), Err(KdTreeError::AxisOutOfBounds(_))));
    }
}
