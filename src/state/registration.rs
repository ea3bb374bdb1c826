//! Registration flag and stored farmer profile.

use tracing::{info, warn};

use crate::error::StoreError;
use crate::models::profile::{FarmerProfile, PROFILE_KEY, REGISTERED_KEY};
use crate::traits::{load_json, save_json, KeyValueStore};

/// Whether the wizard has been completed on this machine.
pub fn is_registered(store: &dyn KeyValueStore) -> bool {
    store.get(REGISTERED_KEY).as_deref() == Some("true")
}

pub fn mark_registered(store: &dyn KeyValueStore) {
    match store.set(REGISTERED_KEY, "true") {
        Ok(()) => info!("Farmer registration completed"),
        Err(e) => warn!(error = %e, "Failed to persist registration flag"),
    }
}

/// The stored profile, or the built-in sample profile.
pub fn load_profile(store: &dyn KeyValueStore) -> FarmerProfile {
    load_json(store, PROFILE_KEY).unwrap_or_default()
}

pub fn save_profile(store: &dyn KeyValueStore, profile: &FarmerProfile) -> Result<(), StoreError> {
    save_json(store, PROFILE_KEY, profile)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::InMemoryStore;

    #[test]
    fn test_registration_flag() {
        let store = InMemoryStore::new();
        assert!(!is_registered(&store));
        mark_registered(&store);
        assert!(is_registered(&store));

        let odd = InMemoryStore::new().with_value(REGISTERED_KEY, "yes");
        assert!(!is_registered(&odd));
    }

    #[test]
    fn test_profile_round_trip_and_fallback() {
        let store = InMemoryStore::new();
        assert_eq!(load_profile(&store).name, "Rajesh Kumar");

        let profile = FarmerProfile {
            name: "Asha Patil".to_string(),
            ..FarmerProfile::default()
        };
        save_profile(&store, &profile).unwrap();
        assert_eq!(load_profile(&store).name, "Asha Patil");

        let broken = InMemoryStore::new().with_value(PROFILE_KEY, "[1,2");
        assert_eq!(load_profile(&broken), FarmerProfile::default());
    }
}
