/// Edge weight. Signed, so that the algorithms which support negative
/// weights (Bellman-Ford, SPFA, Floyd-Warshall) can represent them.
/// Floating-point weights are not supported.
pub type Weight = i64;

/// Finite stand-in for "no known path".
///
/// Half of the integer maximum leaves headroom so that `INF + INF` (and
/// `INF` plus any stored edge weight) cannot overflow [`Weight`]. Distance
/// comparisons and relaxations use this sentinel, never a floating-point
/// infinity.
pub const INF: Weight = Weight::MAX / 2;
