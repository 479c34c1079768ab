// Entity Models
// "Identity persists, values change" - here even the values are frozen:
// an appliance entry is immutable from registration until process exit.

pub mod appliance;

pub use appliance::{Appliance, ApplianceRegistry};
