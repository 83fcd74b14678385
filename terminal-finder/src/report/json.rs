//! JSON rendering of lookup outcomes.

use std::io::{self, Write};

use crate::finder::FindOutcome;

/// Write `outcome` as pretty-printed JSON followed by a newline.
pub fn render_json<W: Write>(out: &mut W, outcome: &FindOutcome) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, outcome)?;
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Coordinate, TerminalRecord};
    use crate::finder::RankedResult;

    #[test]
    fn found_outcome_as_json() {
        let outcome = FindOutcome::Found {
            origin: TerminalRecord::new("서울특별시", "광진구", "동서울종합터미널")
                .with_coordinate(Coordinate::new(37.5344, 127.0946)),
            radius_km: 200.0,
            results: vec![RankedResult {
                distance_km: 105.3,
                province: "충청북도".to_string(),
                city: "청주시".to_string(),
                name: "청주고속터미널".to_string(),
                address: "청주시 흥덕구".to_string(),
            }],
        };

        let mut out = Vec::new();
        render_json(&mut out, &outcome).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();

        assert_eq!(value["outcome"], "found");
        assert_eq!(value["radius_km"], 200.0);
        assert_eq!(value["origin"]["name"], "동서울종합터미널");
        assert_eq!(value["origin"]["coordinate"]["lat"], 37.5344);
        assert_eq!(value["origin"]["route_reference"], serde_json::Value::Null);
        assert_eq!(value["results"][0]["distance_km"], 105.3);
        assert_eq!(value["results"][0]["city"], "청주시");
    }

    #[test]
    fn empty_outcome_as_json() {
        let outcome = FindOutcome::Empty {
            origin: TerminalRecord::new("P", "C", "T"),
            radius_km: 5.0,
        };
        let mut out = Vec::new();
        render_json(&mut out, &outcome).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["outcome"], "empty");
        assert!(value.get("results").is_none());
    }
}
