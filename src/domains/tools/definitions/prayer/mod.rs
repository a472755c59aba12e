//! Prayer tools module.
//!
//! Daily timings (by coordinates or by city), the next prayer, the qibla
//! bearing and the list of calculation methods.

pub mod methods;
pub mod next_prayer;
pub mod prayer_times;
pub mod prayer_times_by_city;
pub mod qibla;

pub use methods::{ListCalculationMethodsParams, ListCalculationMethodsTool};
pub use next_prayer::{NextPrayerParams, NextPrayerTool};
pub use prayer_times::{PrayerTimesParams, PrayerTimesTool};
pub use prayer_times_by_city::{PrayerTimesByCityParams, PrayerTimesByCityTool};
pub use qibla::{QiblaParams, QiblaTool};

use serde_json::Value;

use super::aladhan::response::{pluck, unwrap_data};

/// Daily endpoints nest the times under `data.timings`.
fn daily_timings(payload: Value) -> Value {
    pluck(&payload, "/data/timings").unwrap_or_else(|| unwrap_data(payload))
}
