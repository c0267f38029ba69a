//! Synthetic campus walkway map.
//!
//! Six buildings around a quad, joined by footpaths written the way a KML
//! decoder hands them over: `"lon,lat,alt"` text.  One path is drawn
//! back to front and one dead-ends short of any building.

use wr_ingest::{LineRecord, PointRecord};

pub const ADMIN:    &str = "-112.4509615,34.6147979";
pub const LIBRARY:  &str = "-112.4503100,34.6152300";
pub const SCIENCE:  &str = "-112.4496200,34.6156800";
pub const DORMS:    &str = "-112.4489055,34.6159122";
pub const GYM:      &str = "-112.4501500,34.6141200";
pub const CHAPEL:   &str = "-112.4470000,34.6175000";

fn at(coord: &str) -> String {
    format!("{coord},0")
}

/// Returns `(buildings, footpaths)`.
pub fn campus_records() -> (Vec<PointRecord>, Vec<LineRecord>) {
    let points = vec![
        PointRecord::new("admin",   at(ADMIN)),
        PointRecord::new("library", at(LIBRARY)),
        PointRecord::new("science", at(SCIENCE)),
        PointRecord::new("dorms",   at(DORMS)),
        PointRecord::new("gym",     at(GYM)),
        // Across the highway; no footpath reaches it.
        PointRecord::new("chapel",  at(CHAPEL)),
    ];

    let path = |id: &str, coords: &[&str]| {
        let text: Vec<String> = coords.iter().map(|c| at(c)).collect();
        LineRecord::new(id, text.join(" "))
    };

    let lines = vec![
        path("quad-north",   &[ADMIN, "-112.4506400,34.6150900", LIBRARY]),
        path("library-walk", &[LIBRARY, SCIENCE]),
        path("science-row",  &[SCIENCE, "-112.4492600,34.6158400", DORMS]),
        path("gym-loop",     &[ADMIN, "-112.4507000,34.6142800", GYM]),
        // Stored dorms → gym.
        path("east-lawn",    &[DORMS, "-112.4494000,34.6148000", GYM]),
        path("overlook",     &[SCIENCE, "-112.4490000,34.6165000"]),
    ];

    (points, lines)
}
