//! Immutable calculator state snapshots
//!
//! Every transition of a [`Calculator`](crate::Calculator) publishes a fresh
//! [`Snapshot`]. The render step never touches the calculator directly; it
//! reads the latest snapshot from a [`SnapshotReceiver`] and draws that.

use serde::{Deserialize, Serialize};
use tokio::sync::watch;

use crate::error::ValidationError;
use crate::format::format_number;

/// Receiving end of the snapshot channel.
///
/// Always holds the most recently published snapshot; intermediate values
/// may be skipped by slow readers.
pub type SnapshotReceiver = watch::Receiver<Snapshot>;

/// Feedback mode derived from a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// No result and no error.
    #[default]
    Idle,
    /// The last compute failed validation.
    Error,
    /// The last compute produced a sum.
    Result,
}

impl Mode {
    /// Short label for the status bar.
    pub fn label(self) -> &'static str {
        match self {
            Mode::Idle => "READY",
            Mode::Error => "ERROR",
            Mode::Result => "RESULT",
        }
    }
}

/// Point-in-time copy of the four calculator fields.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Snapshot {
    /// Raw text of the first operand.
    pub operand_a: String,
    /// Raw text of the second operand.
    pub operand_b: String,
    /// Sum from the last successful compute.
    ///
    /// Serialized as a number when finite, otherwise as its display text
    /// (`"Infinity"`, `"-Infinity"`, `"NaN"`), since JSON has no such numbers.
    #[serde(default, with = "result_serde")]
    pub result: Option<f64>,
    /// Failure from the last compute.
    pub error: Option<ValidationError>,
}

impl Snapshot {
    /// Which feedback, if any, the view should show.
    pub fn mode(&self) -> Mode {
        match (&self.error, self.result) {
            (Some(_), _) => Mode::Error,
            (None, Some(_)) => Mode::Result,
            (None, None) => Mode::Idle,
        }
    }

    /// The result only when it should be shown, i.e. with no error present.
    pub fn visible_result(&self) -> Option<f64> {
        match self.error {
            Some(_) => None,
            None => self.result,
        }
    }

    /// Formatted result value, e.g. `"7"`.
    pub fn result_text(&self) -> Option<String> {
        self.visible_result().map(format_number)
    }

    /// Restatement of the sum using the raw operand texts, e.g. `"3 + 4 = 7"`.
    ///
    /// # Example
    ///
    /// ```
    /// use sumcalc_core::Snapshot;
    ///
    /// let snapshot = Snapshot {
    ///     operand_a: "3".into(),
    ///     operand_b: "4".into(),
    ///     result: Some(7.0),
    ///     error: None,
    /// };
    /// assert_eq!(snapshot.summary().as_deref(), Some("3 + 4 = 7"));
    /// ```
    pub fn summary(&self) -> Option<String> {
        self.result_text()
            .map(|sum| format!("{} + {} = {}", self.operand_a, self.operand_b, sum))
    }

    /// Validation message when an error is present.
    pub fn error_message(&self) -> Option<String> {
        self.error.map(|e| e.to_string())
    }
}

mod result_serde {
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::format::format_number;

    pub fn serialize<S>(result: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match result {
            Some(value) if value.is_finite() => serializer.serialize_some(value),
            Some(value) => serializer.serialize_some(&format_number(*value)),
            None => serializer.serialize_none(),
        }
    }

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Number(f64),
        Text(String),
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<Repr>::deserialize(deserializer)? {
            None => Ok(None),
            Some(Repr::Number(value)) => Ok(Some(value)),
            Some(Repr::Text(text)) => match text.as_str() {
                "Infinity" => Ok(Some(f64::INFINITY)),
                "-Infinity" => Ok(Some(f64::NEG_INFINITY)),
                "NaN" => Ok(Some(f64::NAN)),
                _ => Err(serde::de::Error::custom(format!("invalid result: {text}"))),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with(result: Option<f64>, error: Option<ValidationError>) -> Snapshot {
        Snapshot {
            operand_a: "2.5".into(),
            operand_b: "-1.5".into(),
            result,
            error,
        }
    }

    #[test]
    fn test_default_is_idle() {
        let snapshot = Snapshot::default();
        assert_eq!(snapshot.mode(), Mode::Idle);
        assert!(snapshot.summary().is_none());
        assert!(snapshot.error_message().is_none());
    }

    #[test]
    fn test_result_mode() {
        let snapshot = with(Some(1.0), None);
        assert_eq!(snapshot.mode(), Mode::Result);
        assert_eq!(snapshot.result_text().as_deref(), Some("1"));
        assert_eq!(snapshot.summary().as_deref(), Some("2.5 + -1.5 = 1"));
    }

    #[test]
    fn test_error_hides_result() {
        let snapshot = with(Some(1.0), Some(ValidationError::InvalidNumber));
        assert_eq!(snapshot.mode(), Mode::Error);
        assert!(snapshot.visible_result().is_none());
        assert!(snapshot.summary().is_none());
        assert_eq!(
            snapshot.error_message().as_deref(),
            Some("Please enter valid numbers")
        );
    }

    #[test]
    fn test_summary_keeps_raw_operand_text() {
        let snapshot = Snapshot {
            operand_a: " 12abc".into(),
            operand_b: "1 ".into(),
            result: Some(13.0),
            error: None,
        };
        assert_eq!(snapshot.summary().as_deref(), Some(" 12abc + 1  = 13"));
    }

    #[test]
    fn test_mode_labels() {
        assert_eq!(Mode::Idle.label(), "READY");
        assert_eq!(Mode::Error.label(), "ERROR");
        assert_eq!(Mode::Result.label(), "RESULT");
    }

    #[test]
    fn test_snapshot_json_shape() {
        let json = serde_json::to_value(with(None, Some(ValidationError::MissingInput)))
            .expect("serialize");
        assert_eq!(json["operand_a"], "2.5");
        assert_eq!(json["error"], "missing_input");
        assert!(json["result"].is_null());
    }

    #[test]
    fn test_finite_result_is_a_json_number() {
        let json = serde_json::to_value(with(Some(1.0), None)).expect("serialize");
        assert_eq!(json["result"], 1.0);
    }

    #[test]
    fn test_non_finite_result_survives_json() {
        let infinite = with(Some(f64::INFINITY), None);
        let json = serde_json::to_value(&infinite).expect("serialize");
        assert_eq!(json["result"], "Infinity");
        assert!(json["error"].is_null());

        let back: Snapshot = serde_json::from_value(json).expect("deserialize");
        assert_eq!(back, infinite);

        let json = serde_json::to_value(with(Some(f64::NEG_INFINITY), None)).expect("serialize");
        assert_eq!(json["result"], "-Infinity");

        let json = serde_json::to_value(with(Some(f64::NAN), None)).expect("serialize");
        assert_eq!(json["result"], "NaN");
        let back: Snapshot = serde_json::from_value(json).expect("deserialize");
        assert!(back.result.is_some_and(f64::is_nan));
    }

    #[test]
    fn test_bad_result_text_rejected() {
        let json = serde_json::json!({
            "operand_a": "1",
            "operand_b": "2",
            "result": "lots",
            "error": null,
        });
        assert!(serde_json::from_value::<Snapshot>(json).is_err());
    }
}
