//! Hijri/Gregorian date conversion tools.

pub mod gregorian_to_hijri;
pub mod hijri_to_gregorian;

pub use gregorian_to_hijri::{GregorianToHijriParams, GregorianToHijriTool};
pub use hijri_to_gregorian::{HijriToGregorianParams, HijriToGregorianTool};
