// 🔌 Appliance Entity - Stable identity + immutable values
//
// "Appliance name is a VALUE (duplicates allowed), Appliance UUID is IDENTITY"
//
// Problem solved:
// - Two fans both called "Fan" stay distinct entries
// - The registry only ever appends; entries are never edited in place

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// APPLIANCE ENTITY
// ============================================================================

/// One registered appliance.
///
/// Identity: UUID (never changes)
/// Values: name, power rating, daily usage hours (frozen at registration)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Appliance {
    /// Stable identity (UUID) - assigned at registration, never displayed
    /// in the menu flow
    pub id: String,

    /// Appliance label exactly as entered
    pub name: String,

    /// Rated power draw in watts. Registered entries always have > 0.
    pub power_rating: f64,

    /// Hours of use per day. Registered entries always sit within [0, 24].
    pub daily_usage_hours: f64,

    /// When this entry was registered
    pub registered_at: DateTime<Utc>,

    /// Extensible metadata
    pub metadata: serde_json::Value,
}

impl Appliance {
    /// Create a new appliance entry with UUID
    pub fn new(name: String, power_rating: f64, daily_usage_hours: f64) -> Self {
        Appliance {
            id: uuid::Uuid::new_v4().to_string(),
            name,
            power_rating,
            daily_usage_hours,
            registered_at: Utc::now(),
            metadata: serde_json::json!({}),
        }
    }

    /// Daily energy consumption in kWh: watts * hours / 1000
    ///
    /// Pure derivation - never stored on the entry.
    pub fn energy_consumption_kwh(&self) -> f64 {
        (self.power_rating * self.daily_usage_hours) / 1000.0
    }

    /// One display line for the view listing
    pub fn summary(&self) -> String {
        format!(
            "Name: {}, Power: {}W, Hours: {}, Energy: {} kWh",
            self.name,
            self.power_rating,
            self.daily_usage_hours,
            self.energy_consumption_kwh()
        )
    }
}

// ============================================================================
// APPLIANCE REGISTRY
// ============================================================================

/// Registry of all appliances registered this session.
///
/// Append-only: entries are added on successful registration and dropped
/// in bulk at process exit. Insertion order is preserved and duplicates
/// by name are permitted (identity lives in the UUID, not the name).
pub struct ApplianceRegistry {
    entries: Vec<Appliance>,
}

impl ApplianceRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        ApplianceRegistry {
            entries: Vec::new(),
        }
    }

    /// Append a new entry (append-only, never overwrites)
    pub fn register(&mut self, appliance: Appliance) {
        self.entries.push(appliance);
    }

    /// Iterate entries lazily in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Appliance> {
        self.entries.iter()
    }

    /// All entries in insertion order
    pub fn all(&self) -> &[Appliance] {
        &self.entries
    }

    /// Most recently registered entry
    pub fn last(&self) -> Option<&Appliance> {
        self.entries.last()
    }

    /// Count registered entries
    pub fn count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for ApplianceRegistry {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_appliance_creation() {
        let appliance = Appliance::new("Fan".to_string(), 75.0, 5.0);

        assert!(!appliance.id.is_empty());
        assert_eq!(appliance.name, "Fan");
        assert_eq!(appliance.power_rating, 75.0);
        assert_eq!(appliance.daily_usage_hours, 5.0);
        assert_eq!(appliance.metadata, serde_json::json!({}));
    }

    #[test]
    fn test_energy_consumption_is_pure() {
        // 1000W for 2h -> 2 kWh
        let heater = Appliance::new("Heater".to_string(), 1000.0, 2.0);
        assert_eq!(heater.energy_consumption_kwh(), 2.0);

        // Degenerate zero case - excluded from the registry by validation,
        // but the derivation itself stays total
        let off = Appliance::new("Off".to_string(), 0.0, 0.0);
        assert_eq!(off.energy_consumption_kwh(), 0.0);

        // 60W for a full day -> 1.44 kWh
        let bulb = Appliance::new("Bulb".to_string(), 60.0, 24.0);
        assert_eq!(bulb.energy_consumption_kwh(), 1.44);
    }

    #[test]
    fn test_summary_line() {
        let fan = Appliance::new("Fan".to_string(), 75.0, 5.0);

        assert_eq!(
            fan.summary(),
            "Name: Fan, Power: 75W, Hours: 5, Energy: 0.375 kWh"
        );
    }

    #[test]
    fn test_registry_starts_empty() {
        let registry = ApplianceRegistry::new();

        assert!(registry.is_empty());
        assert_eq!(registry.count(), 0);
        assert!(registry.last().is_none());
    }

    #[test]
    fn test_register_appends_in_order() {
        let mut registry = ApplianceRegistry::new();

        registry.register(Appliance::new("Fan".to_string(), 75.0, 5.0));
        registry.register(Appliance::new("Lamp".to_string(), 60.0, 3.0));
        registry.register(Appliance::new("Fridge".to_string(), 150.0, 24.0));

        assert_eq!(registry.count(), 3);

        let names: Vec<&str> = registry.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["Fan", "Lamp", "Fridge"]);

        assert_eq!(registry.all().len(), 3);
        assert_eq!(registry.last().unwrap().name, "Fridge");
    }

    #[test]
    fn test_duplicate_names_are_distinct_entries() {
        let mut registry = ApplianceRegistry::new();

        registry.register(Appliance::new("Fan".to_string(), 75.0, 5.0));
        registry.register(Appliance::new("Fan".to_string(), 120.0, 8.0));

        assert_eq!(registry.count(), 2);

        let ids: Vec<&str> = registry.iter().map(|a| a.id.as_str()).collect();
        assert_ne!(ids[0], ids[1]); // same name, distinct identity
    }

    #[test]
    fn test_iteration_is_restartable() {
        let mut registry = ApplianceRegistry::new();
        registry.register(Appliance::new("Fan".to_string(), 75.0, 5.0));
        registry.register(Appliance::new("Lamp".to_string(), 60.0, 3.0));

        let first: Vec<String> = registry.iter().map(|a| a.summary()).collect();
        let second: Vec<String> = registry.iter().map(|a| a.summary()).collect();

        assert_eq!(first, second);
    }
}
