mod generic_path;
pub use generic_path::*;

mod waypoint;
pub use waypoint::Waypoint;

mod result;
pub use result::PathResult;
