//! Typing session records

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::integer::deserialize_i64;

/// One completed typing exercise as stored.
///
/// `id` is assigned by the store on creation and never changes; records are
/// append-only, so listing by `id` descending is newest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct SessionRecord {
    pub id: i64,
    pub poem: String,
    pub wpm: i64,
    pub accuracy: i64,
    pub mistakes: i64,
    pub duration_sec: i64,
}

/// Create request for a session record.
///
/// All five fields are required. Integer fields also take numeric strings
/// and whole floats (`"60"`, `60.0`). Values are not range-checked: accuracy
/// is a percentage-like score but nothing stops a client sending 140 or -3.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewSession {
    pub poem: String,
    #[serde(deserialize_with = "deserialize_i64")]
    pub wpm: i64,
    #[serde(deserialize_with = "deserialize_i64")]
    pub accuracy: i64,
    #[serde(deserialize_with = "deserialize_i64")]
    pub mistakes: i64,
    #[serde(deserialize_with = "deserialize_i64")]
    pub duration_sec: i64,
}

impl NewSession {
    /// Attach a store-assigned id.
    pub fn into_record(self, id: i64) -> SessionRecord {
        SessionRecord {
            id,
            poem: self.poem,
            wpm: self.wpm,
            accuracy: self.accuracy,
            mistakes: self.mistakes,
            duration_sec: self.duration_sec,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn into_record_keeps_fields() {
        let input = NewSession {
            poem: "The fog comes on little cat feet.".into(),
            wpm: 62,
            accuracy: 97,
            mistakes: 2,
            duration_sec: 45,
        };

        let record = input.clone().into_record(7);
        assert_eq!(record.id, 7);
        assert_eq!(record.poem, input.poem);
        assert_eq!(record.wpm, 62);
        assert_eq!(record.accuracy, 97);
        assert_eq!(record.mistakes, 2);
        assert_eq!(record.duration_sec, 45);
    }

    #[test]
    fn accepts_out_of_range_scores() {
        let input: NewSession = serde_json::from_str(
            r#"{"poem": "", "wpm": 0, "accuracy": 140, "mistakes": -3, "duration_sec": 0}"#,
        )
        .unwrap();
        assert_eq!(input.accuracy, 140);
        assert_eq!(input.mistakes, -3);
    }

    #[test]
    fn ignores_unknown_fields() {
        let input: NewSession = serde_json::from_str(
            r#"{"poem": "x", "wpm": 1, "accuracy": 2, "mistakes": 3, "duration_sec": 4, "id": 99}"#,
        )
        .unwrap();
        assert_eq!(input.wpm, 1);
    }

    #[test]
    fn accepts_numeric_string_wpm() {
        let input: NewSession = serde_json::from_str(
            r#"{"poem": "x", "wpm": "60", "accuracy": 2, "mistakes": 3, "duration_sec": 4}"#,
        )
        .unwrap();
        assert_eq!(input.wpm, 60);
    }

    #[test]
    fn accepts_integral_float() {
        let input: NewSession = serde_json::from_str(
            r#"{"poem": "x", "wpm": 1, "accuracy": 2, "mistakes": 3, "duration_sec": 60.0}"#,
        )
        .unwrap();
        assert_eq!(input.duration_sec, 60);
    }

    #[test]
    fn rejects_non_numeric_and_null() {
        for wpm in [r#""fast""#, "true", "null"] {
            let json = format!(
                r#"{{"poem": "x", "wpm": {}, "accuracy": 2, "mistakes": 3, "duration_sec": 4}}"#,
                wpm
            );
            assert!(serde_json::from_str::<NewSession>(&json).is_err(), "{}", wpm);
        }
    }

    #[test]
    fn rejects_fractional_wpm() {
        let result = serde_json::from_str::<NewSession>(
            r#"{"poem": "x", "wpm": 61.5, "accuracy": 2, "mistakes": 3, "duration_sec": 4}"#,
        );
        assert!(result.is_err());
    }
}
