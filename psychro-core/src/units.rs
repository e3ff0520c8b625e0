//! Display-unit boundary: humidity ratio leaves the engine in kg/kg and is
//! shown in g/kg. Nothing else in the crate scales humidity ratios.

const GRAMS_PER_KILOGRAM: f64 = 1000.0;

pub fn to_grams_per_kg(humidity_ratio: f64) -> f64 {
    humidity_ratio * GRAMS_PER_KILOGRAM
}

pub fn from_grams_per_kg(grams_per_kg: f64) -> f64 {
    grams_per_kg / GRAMS_PER_KILOGRAM
}

/// Maps an engine-space `(T, W kg/kg)` pair to chart coordinates `(T, W g/kg)`.
pub fn display_point(temperature_c: f64, humidity_ratio: f64) -> (f64, f64) {
    (temperature_c, to_grams_per_kg(humidity_ratio))
}
