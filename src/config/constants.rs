// Factor Normalization Caps (Gauteng market reference ceilings)
pub const DEFAULT_YIELD_CAP: f64 = 10.0;        // Gross rental yield ceiling (%)
pub const DEFAULT_PRICE_CAP: f64 = 35_000.0;    // Asking price ceiling (R per m2)
pub const DEFAULT_VACANCY_CAP: f64 = 15.0;      // Vacancy rate ceiling (%)
pub const INDEX_SCALE_MAX: f64 = 100.0;         // Transit and footfall arrive as 0-100 indices

// Geographic Bounds
pub const MIN_LATITUDE: f64 = -90.0;
pub const MAX_LATITUDE: f64 = 90.0;
pub const MIN_LONGITUDE: f64 = -180.0;
pub const MAX_LONGITUDE: f64 = 180.0;

// Synthetic Market Bounds (greater Johannesburg)
pub const METRO_MIN_LAT: f64 = -26.45;
pub const METRO_MAX_LAT: f64 = -25.95;
pub const METRO_MIN_LON: f64 = 27.75;
pub const METRO_MAX_LON: f64 = 28.25;

// Synthetic Factor Spans
// Deliberately wider than the caps so clamping sees real traffic.
pub const SYNTHETIC_MIN_YIELD: f64 = 1.0;
pub const SYNTHETIC_MAX_YIELD: f64 = 13.0;
pub const SYNTHETIC_MIN_PRICE: f64 = 8_000.0;
pub const SYNTHETIC_MAX_PRICE: f64 = 55_000.0;
pub const SYNTHETIC_MIN_VACANCY: f64 = 0.0;
pub const SYNTHETIC_MAX_VACANCY: f64 = 18.0;

// Default Weight Profile
pub const DEFAULT_YIELD_WEIGHT: f64 = 30.0;
pub const DEFAULT_PRICE_WEIGHT: f64 = 25.0;
pub const DEFAULT_VACANCY_WEIGHT: f64 = 20.0;
pub const DEFAULT_TRANSIT_WEIGHT: f64 = 15.0;
pub const DEFAULT_FOOTFALL_WEIGHT: f64 = 10.0;

// Result Presentation
pub const SEARCH_RADIUS_HINT_KM: f64 = 2.5;     // Suggested viewport radius around the centroid
pub const DEFAULT_TOP_K: usize = 5;
pub const DEFAULT_PROPERTY_COUNT: usize = 240;
