//! Route fixtures, stored as WKT line strings in `(lng lat)` order.
//!
//! Each fixture is a coarse trace of a journey through a distinct
//! region of the United Kingdom, so that stops within one region
//! are unambiguously cheapest to insert into that region's route.

/// Brighton to Cambridge, by way of Redhill and central London.
pub const BRIGHTON_CAMBRIDGE: &str = "LINESTRING (-0.1372 50.8225, -0.147 50.87, -0.1513 50.934, -0.164 51.0, -0.187 51.109, -0.17 51.18, -0.165 51.24, -0.14 51.3, -0.0982 51.3762, -0.11 51.46, -0.13 51.53, -0.09 51.65, -0.03 51.76, 0.07 51.9, 0.1218 52.2053)";

/// Inverness to Mousehole, the length of the west of Great Britain.
pub const INVERNESS_MOUSEHOLE: &str = "LINESTRING (-4.2247 57.4778, -3.98 57.19, -3.827 56.703, -3.437 56.396, -3.1883 55.9533, -3.0 55.5, -2.933 54.8925, -2.7 54.3, -2.58 53.65, -2.2426 53.4808, -2.15 52.9, -2.2 52.2, -2.5879 51.4545, -3.5339 50.7184, -4.1427 50.3755, -5.0527 50.2632, -5.538 50.083)";

/// Richmond, Chiswick, Baker Street and Elephant & Castle.
pub const RICHMOND_ELEPHANT: &str = "LINESTRING (-0.3037 51.4613, -0.257 51.492, -0.204 51.496, -0.1571 51.5226, -0.127 51.5075, -0.1005 51.4946)";

/// Croydon to Haringey, north through Brixton and Holloway.
pub const CROYDON_HARINGEY: &str = "LINESTRING (-0.0982 51.3762, -0.1 51.42, -0.114 51.462, -0.123 51.486, -0.124 51.53, -0.116 51.55, -0.106 51.564, -0.1 51.58, -0.112 51.59)";

/// All route fixtures, in a fixed order.
pub const UK_ROUTES: [&str; 4] = [
    BRIGHTON_CAMBRIDGE,
    INVERNESS_MOUSEHOLE,
    RICHMOND_ELEPHANT,
    CROYDON_HARINGEY,
];
