use crate::{Cost, NodeID};

/// A directed Road from `src` to `dest`.
///
/// The names are free text as they appear in the source data. They are not required to be
/// unique or consistent, so the same Location may be spelled differently on different Edges.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge {
    /// the Node this Edge starts at
    pub src: NodeID,
    /// the Node this Edge leads to
    pub dest: NodeID,
    /// the Cost that the search minimizes
    pub distance: Cost,
    /// the travel time. Not used by the search
    pub time: u32,
    /// the name of `src`
    pub source_name: String,
    /// the name of `dest`
    pub destination_name: String,
}

impl Edge {
    /// Creates a new Edge
    pub fn new(
        src: NodeID,
        dest: NodeID,
        distance: Cost,
        time: u32,
        source_name: impl Into<String>,
        destination_name: impl Into<String>,
    ) -> Edge {
        Edge {
            src,
            dest,
            distance,
            time,
            source_name: source_name.into(),
            destination_name: destination_name.into(),
        }
    }
}
