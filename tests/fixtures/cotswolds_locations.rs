//! Walking stops along the north Cotswold Way (lat, lon in degrees).

use hike_route_planner::point::GeoPoint;

pub type Location = (f64, f64);

pub const CHIPPING_CAMPDEN: Location = (52.0517, -1.7806);
pub const DOVERS_HILL: Location = (52.0561, -1.8036);
pub const BROADWAY_TOWER: Location = (52.0245, -1.8352);
pub const BROADWAY: Location = (52.0359, -1.8577);
pub const SNOWSHILL: Location = (52.0036, -1.8622);
pub const STANTON: Location = (52.0009, -1.8951);
pub const STANWAY: Location = (51.9894, -1.9125);
pub const HAILES_ABBEY: Location = (51.9692, -1.9308);
pub const WINCHCOMBE: Location = (51.9535, -1.9647);
pub const BELAS_KNAP: Location = (51.9270, -1.9700);
pub const CLEEVE_HILL: Location = (51.9237, -2.0158);

fn point(id: &'static str, location: Location) -> GeoPoint<&'static str> {
    GeoPoint::new(id, id).geographic(location.0, location.1)
}

/// Chipping Campden to Winchcombe; Stanton is the lunch stop.
pub fn lunch_walk() -> Vec<GeoPoint<&'static str>> {
    vec![
        point("Chipping Campden", CHIPPING_CAMPDEN).start(),
        point("Dover's Hill", DOVERS_HILL),
        point("Broadway Tower", BROADWAY_TOWER),
        point("Stanton", STANTON).constrained(),
        point("Snowshill", SNOWSHILL),
        point("Stanway", STANWAY),
        point("Winchcombe", WINCHCOMBE).end(),
    ]
}

/// Every stop, no constrained point, finishing on Cleeve Hill.
pub fn full_way() -> Vec<GeoPoint<&'static str>> {
    vec![
        point("Chipping Campden", CHIPPING_CAMPDEN).start(),
        point("Dover's Hill", DOVERS_HILL),
        point("Broadway Tower", BROADWAY_TOWER),
        point("Broadway", BROADWAY),
        point("Snowshill", SNOWSHILL),
        point("Stanton", STANTON),
        point("Stanway", STANWAY),
        point("Hailes Abbey", HAILES_ABBEY),
        point("Winchcombe", WINCHCOMBE),
        point("Belas Knap", BELAS_KNAP),
        point("Cleeve Hill", CLEEVE_HILL).end(),
    ]
}

/// Planar square: Start=(0,0), A=(0,3), B=(4,0), End=(4,3).
pub fn square() -> Vec<GeoPoint<&'static str>> {
    vec![
        GeoPoint::new("start", "Start").planar(0.0, 0.0).start(),
        GeoPoint::new("a", "A").planar(0.0, 3.0),
        GeoPoint::new("b", "B").planar(4.0, 0.0),
        GeoPoint::new("end", "End").planar(4.0, 3.0).end(),
    ]
}
