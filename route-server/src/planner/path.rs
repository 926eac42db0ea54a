//! Path reconstruction shared by both searches.

use std::collections::HashMap;

use crate::domain::StationId;

/// Walk predecessor links back from `destination` to `origin` and return
/// the stations in travel order.
///
/// `destination` must have been reached from `origin`, so every station on
/// the way back has a predecessor until `origin` is met.
pub(super) fn reconstruct_path(
    predecessors: &HashMap<StationId, StationId>,
    origin: StationId,
    destination: StationId,
) -> Vec<StationId> {
    let mut path = vec![destination];
    let mut current = destination;
    while current != origin {
        match predecessors.get(&current) {
            Some(&previous) => {
                path.push(previous);
                current = previous;
            }
            None => break,
        }
    }
    path.reverse();
    debug_assert_eq!(
        path.first(),
        Some(&origin),
        "predecessor chain from {destination} does not reach {origin}"
    );
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn follows_predecessors_to_origin() {
        let predecessors = HashMap::from([
            (StationId(2), StationId(1)),
            (StationId(3), StationId(2)),
            (StationId(4), StationId(3)),
        ]);

        let path = reconstruct_path(&predecessors, StationId(1), StationId(4));
        assert_eq!(
            path,
            vec![StationId(1), StationId(2), StationId(3), StationId(4)]
        );
    }

    #[test]
    fn stops_at_origin_even_if_it_has_a_predecessor() {
        let predecessors = HashMap::from([
            (StationId(2), StationId(1)),
            (StationId(1), StationId(9)),
        ]);

        let path = reconstruct_path(&predecessors, StationId(1), StationId(2));
        assert_eq!(path, vec![StationId(1), StationId(2)]);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "does not reach")]
    fn broken_predecessor_chain_is_caught() {
        let predecessors = HashMap::from([(StationId(3), StationId(2))]);
        reconstruct_path(&predecessors, StationId(1), StationId(3));
    }

    #[test]
    fn origin_equals_destination() {
        let path = reconstruct_path(&HashMap::new(), StationId(5), StationId(5));
        assert_eq!(path, vec![StationId(5)]);
    }
}
