use std::fmt;

use near_sdk::env;
use near_sdk::serde::Serialize;

/// NEP-297 event envelope. `event` is flattened so the resulting log has the form
/// `EVENT_JSON:{"standard":..,"version":..,"event":..,"data":..}`.
#[derive(Serialize)]
#[serde(crate = "near_sdk::serde")]
pub struct NearEvent<T: Serialize> {
    pub standard: &'static str,
    pub version: &'static str,

    #[serde(flatten)]
    pub event: EventPayload<T>,
}

/// Event name and its data.
#[derive(Serialize)]
#[serde(crate = "near_sdk::serde")]
pub struct EventPayload<T: Serialize> {
    pub event: &'static str,
    pub data: T,
}

impl<T: Serialize> NearEvent<T> {
    pub fn emit(self) {
        env::log_str(&self.to_string());
    }
}

impl<T: Serialize> fmt::Display for NearEvent<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_fmt(format_args!(
            "EVENT_JSON:{}",
            &serde_json::to_string(self).map_err(|_| fmt::Error)?
        ))
    }
}

#[cfg(test)]
mod tests {
    use near_sdk::test_utils;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn log_format() {
        let e = NearEvent {
            standard: "mt",
            version: "1.0.0",
            event: EventPayload {
                event: "mt_burn",
                data: vec!["alice.near", "bob.near"],
            },
        };
        let expected = r#"EVENT_JSON:{"standard":"mt","version":"1.0.0","event":"mt_burn","data":["alice.near","bob.near"]}"#;
        assert_eq!(expected, e.to_string());
    }

    #[test]
    fn emit_logs() {
        NearEvent {
            standard: "mt",
            version: "1.0.0",
            event: EventPayload {
                event: "ping",
                data: 7,
            },
        }
        .emit();
        assert_eq!(
            vec![r#"EVENT_JSON:{"standard":"mt","version":"1.0.0","event":"ping","data":7}"#],
            test_utils::get_logs()
        );
    }
}
