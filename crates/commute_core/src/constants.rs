/// Edge weight type (distance in kilometers)
pub type Weight = f64;
/// Minutes of travel time estimated per kilometer of route distance
pub const MINUTES_PER_KM: f64 = 10.0;
