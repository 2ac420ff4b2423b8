use std::collections::{HashMap, HashSet, VecDeque};

use crate::grammar::{Direction, Position};
use crate::tree::{PathNode, PathTree};

/// Room every path starts from.
pub const ORIGIN: Position = (0, 0);

/// Rooms and doors discovered by walking every path of a `PathTree` on the grid.
///
/// Distances are shortest door counts from `ORIGIN`, so a detour that loops
/// back to where it started does not make the rooms after it any further away.
#[derive(Clone, Debug, Default)]
pub struct RoomMap {
    doors: HashMap<Position, HashSet<Position>>,
    distances: HashMap<Position, usize>,
}

impl RoomMap {
    /// Walks `tree` from `ORIGIN` and measures the shortest distance to every room.
    pub fn trace(tree: &PathTree) -> Self {
        let mut doors: HashMap<Position, HashSet<Position>> = HashMap::new();
        doors.entry(ORIGIN).or_default();
        for root in tree.roots() {
            walk(root, HashSet::from([ORIGIN]), &mut doors);
        }

        let distances = shortest_distances(&doors);
        Self { doors, distances }
    }

    pub fn room_count(&self) -> usize {
        self.distances.len()
    }

    pub fn door_count(&self) -> usize {
        self.doors.values().map(HashSet::len).sum::<usize>() / 2
    }

    #[cfg(test)]
    pub fn distance_to(&self, room: Position) -> Option<usize> {
        self.distances.get(&room).copied()
    }

    /// Shortest distance to the room that is furthest away.
    pub fn furthest_room(&self) -> usize {
        self.distances.values().copied().max().unwrap_or(0)
    }

    /// Number of rooms at least `threshold` doors away.
    pub fn rooms_at_least(&self, threshold: usize) -> usize {
        self.distances
            .values()
            .filter(|&&distance| distance >= threshold)
            .count()
    }
}

/// Records the doors of `node` and everything after it, starting from each
/// room in `from`. Returns the rooms its paths end in.
///
/// Only alternatives recurse; a chain of continuations is followed in place,
/// each link starting from every room the previous group ended in.
fn walk(
    node: &PathNode,
    from: HashSet<Position>,
    doors: &mut HashMap<Position, HashSet<Position>>,
) -> HashSet<Position> {
    let mut node = node;
    let mut rooms = from;
    loop {
        rooms = rooms
            .into_iter()
            .map(|start| open_doors(node.steps(), start, doors))
            .collect();
        if node.is_leaf() {
            return rooms;
        }

        let mut ends = HashSet::new();
        for alternative in node.alternatives() {
            ends.extend(walk(alternative, rooms.clone(), doors));
        }
        match node.continuation() {
            Some(next) => {
                node = next;
                rooms = ends;
            }
            None => return ends,
        }
    }
}

/// Opens a door for every step from `start`, returning the room reached.
fn open_doors(
    steps: &[Direction],
    start: Position,
    doors: &mut HashMap<Position, HashSet<Position>>,
) -> Position {
    steps.iter().fold(start, |at, direction| {
        let next = direction.step(at);
        doors.entry(at).or_default().insert(next);
        doors.entry(next).or_default().insert(at);
        next
    })
}

/// Breadth-first search over the recorded doors.
fn shortest_distances(doors: &HashMap<Position, HashSet<Position>>) -> HashMap<Position, usize> {
    let mut distances = HashMap::new();
    let mut queue = VecDeque::new();
    distances.insert(ORIGIN, 0);
    queue.push_back(ORIGIN);

    while let Some(room) = queue.pop_front() {
        let distance = distances[&room];
        if let Some(neighbours) = doors.get(&room) {
            for &next in neighbours {
                if !distances.contains_key(&next) {
                    distances.insert(next, distance + 1);
                    queue.push_back(next);
                }
            }
        }
    }
    distances
}
