//! The built-in Road Network.
//!
//! 11 Locations connected by 32 one-way Roads. Most Roads exist in both directions, but the two
//! directions don't always have the same distance: `COMSATS -> ALIPUR` is 16 while
//! `ALIPUR -> COMSATS` is 8.
//!
//! Location `i` is placed at `(2i, 2i)` for the Heuristic.

use crate::config::NetworkConfig;
use crate::graph::{Coordinates, Edge, Graph};
use crate::{Cost, NodeID};

#[allow(missing_docs)]
pub const COMSATS: NodeID = 0;
#[allow(missing_docs)]
pub const ALIPUR: NodeID = 1;
#[allow(missing_docs)]
pub const HOSTEL_CITY: NodeID = 2;
#[allow(missing_docs)]
pub const SADAR: NodeID = 3;
#[allow(missing_docs)]
pub const BLUE_AREA: NodeID = 4;
#[allow(missing_docs)]
pub const I8: NodeID = 5;
#[allow(missing_docs)]
pub const AIR_UNIVERSITY: NodeID = 6;
#[allow(missing_docs)]
pub const PIEAS: NodeID = 7;
#[allow(missing_docs)]
pub const BANIGALA: NodeID = 8;
#[allow(missing_docs)]
pub const SHAMSHABAD: NodeID = 9;
#[allow(missing_docs)]
pub const PWD: NodeID = 10;

/// The number of Locations
pub const VERTICES: usize = 11;

// (src, dest, distance, time, source name, destination name)
#[rustfmt::skip]
const ROADS: [(NodeID, NodeID, Cost, u32, &str, &str); 32] = [
    (0, 1, 16, 40, "comsats", "alipur"),
    (0, 9, 17, 20, "comsats", "shamshabad"),

    (1, 0, 8, 15, "alipur", "comsats"),
    (1, 2, 8, 15, "alipur", "hostel city"),
    (1, 4, 2, 1, "alipur", "bluearea"),
    (1, 8, 17, 25, "alipur", "banigala"),
    (1, 9, 5, 10, "alipur", "shamshabad"),

    (2, 1, 8, 15, "hostel city", "alipur"),
    (2, 3, 9, 10, "hostelcity", "sadar"),

    (3, 2, 9, 10, "sadar", "hostelcity"),
    (3, 4, 3, 5, "sadar", "bluearea"),
    (3, 5, 23, 37, "sadar", "I8"),
    (3, 8, 5, 10, "sadar", "banigala"),

    (4, 1, 2, 1, "bluearea", "alipur"),
    (4, 3, 3, 5, "bluearea", "sadar"),

    (5, 3, 23, 37, "I8", "sadar"),
    (5, 6, 25, 40, "I8", "Air University"),
    (5, 8, 27, 50, "I8", "banigala"),

    (6, 5, 25, 40, "Air University", "I8"),
    (6, 7, 53, 70, "Air University", "Pieas"),

    (7, 6, 53, 70, "Pieas", "Air University"),
    (7, 8, 18, 30, "Pieas", "banigala"),
    (7, 9, 20, 30, "Pieas", "shamshabad"),
    (7, 10, 8, 13, "Pieas", "pwd"),

    (8, 1, 17, 25, "banigala", "alipur"),
    (8, 3, 5, 10, "banigala", "sadar"),
    (8, 5, 27, 50, "banigala", "I8"),
    (8, 7, 18, 30, "banigala", "Pieas"),

    (9, 0, 17, 20, "shamshabad", "comsats"),
    (9, 1, 5, 10, "shamshabad", "alipur"),
    (9, 7, 20, 30, "shamshabad", "Pieas"),

    (10, 7, 8, 13, "pwd", "Pieas"),
];

/// The built-in Network as a [`NetworkConfig`]
pub fn road_network_config() -> NetworkConfig {
    NetworkConfig {
        vertices: VERTICES,
        edges: ROADS
            .iter()
            .map(|&(src, dest, distance, time, source_name, destination_name)| {
                Edge::new(src, dest, distance, time, source_name, destination_name)
            })
            .collect(),
        coordinates: (0..VERTICES as i32)
            .map(|i| (i as NodeID, (2 * i, 2 * i)))
            .collect(),
    }
}

/// Builds the built-in Network
pub fn road_network() -> (Graph, Coordinates) {
    road_network_config().build()
}
