// src/model.rs
//
// Shapes of the persisted export artifact.
//
// The profile page reads these keys directly, so the serialized names are
// fixed: `sciName` / `common` on observations, `lastSync` on the profile,
// `exportedAt` at the top level.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Profile key overwritten on every successful import.
pub const LAST_SYNC_KEY: &str = "lastSync";

/// One sighting of one species on one date.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Observation {
    /// `YYYY-MM-DD`
    pub date: String,
    #[serde(rename = "sciName")]
    pub sci_name: String,
    pub common: String,
    pub location: String,
    pub region: String,
}

/// User identity and sync metadata. Opaque apart from `lastSync`.
pub type Profile = Map<String, Value>;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Export {
    pub profile: Profile,
    pub observations: Vec<Observation>,
    pub exported_at: String,
}

/// ISO 8601 UTC with milliseconds, e.g. `2024-01-05T12:00:00.000Z`.
pub fn timestamp(now: DateTime<Utc>) -> String {
    now.to_rfc3339_opts(SecondsFormat::Millis, true)
}

impl Export {
    /// Assemble a fresh artifact: old profile with `lastSync` bumped,
    /// the new observations, `exportedAt` = `now`.
    pub fn build(mut profile: Profile, observations: Vec<Observation>, now: DateTime<Utc>) -> Self {
        let ts = timestamp(now);
        profile.insert(s!(LAST_SYNC_KEY), Value::String(ts.clone()));
        Self { profile, observations, exported_at: ts }
    }

    /// Last element; observations are kept in ascending date order.
    pub fn most_recent(&self) -> Option<&Observation> {
        self.observations.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    fn obs(date: &str) -> Observation {
        Observation {
            date: s!(date),
            sci_name: s!("Anas platyrhynchos"),
            common: s!("Mallard"),
            location: s!("Lake Merritt"),
            region: s!("US-CA"),
        }
    }

    #[test]
    fn observation_keys_match_page_contract() {
        let v = serde_json::to_value(obs("2024-01-05")).unwrap();
        assert_eq!(
            v,
            json!({
                "date": "2024-01-05",
                "sciName": "Anas platyrhynchos",
                "common": "Mallard",
                "location": "Lake Merritt",
                "region": "US-CA"
            })
        );
        let keys: Vec<&String> = v.as_object().unwrap().keys().collect();
        assert_eq!(keys, ["date", "sciName", "common", "location", "region"]);
    }

    #[test]
    fn build_keeps_profile_and_bumps_last_sync() {
        let now = Utc.with_ymd_and_hms(2024, 3, 2, 8, 30, 0).unwrap();
        let mut profile = Profile::new();
        profile.insert(s!("name"), json!("Ada"));
        profile.insert(s!("location"), json!("Oakland"));
        profile.insert(s!(LAST_SYNC_KEY), json!("2020-01-01T00:00:00.000Z"));

        let export = Export::build(profile, vec![obs("2024-01-05")], now);

        assert_eq!(export.profile["name"], json!("Ada"));
        assert_eq!(export.profile["location"], json!("Oakland"));
        assert_eq!(export.profile[LAST_SYNC_KEY], json!("2024-03-02T08:30:00.000Z"));
        assert_eq!(export.exported_at, "2024-03-02T08:30:00.000Z");
        assert_eq!(export.most_recent().unwrap().date, "2024-01-05");
    }

    #[test]
    fn top_level_keys() {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let v = serde_json::to_value(Export::build(Profile::new(), Vec::new(), now)).unwrap();
        let keys: Vec<&String> = v.as_object().unwrap().keys().collect();
        assert_eq!(keys, ["profile", "observations", "exportedAt"]);
    }
}
