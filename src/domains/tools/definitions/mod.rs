//! Tool definitions module.
//!
//! This module exports all available tool definitions, grouped by family.
//! Each tool is defined in its own file; shared Aladhan plumbing lives in
//! `aladhan/`.

pub mod aladhan;
pub mod calendar;
pub mod conversion;
pub mod prayer;

pub use calendar::{
    HijriCalendarByCityTool, HijriCalendarTool, MonthlyCalendarByCityTool, MonthlyCalendarTool,
};
pub use conversion::{GregorianToHijriTool, HijriToGregorianTool};
pub use prayer::{
    ListCalculationMethodsTool, NextPrayerTool, PrayerTimesByCityTool, PrayerTimesTool, QiblaTool,
};
