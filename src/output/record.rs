use serde::{Serialize, Serializer};

/// One evaluated URL's scores, serialized as a single NDJSON object.
///
/// Field declaration order is the output contract's field order. Numeric
/// values keep full precision internally and are rounded to 3 decimal
/// places at this serialization boundary only.
#[derive(Debug, Clone, Serialize)]
pub struct EvaluationRecord {
    #[serde(rename = "URL")]
    pub url: String,

    #[serde(rename = "NetScore", serialize_with = "round3")]
    pub net_score: f64,
    #[serde(rename = "NetScore_Latency", serialize_with = "round3")]
    pub net_score_latency: f64,

    #[serde(rename = "BusFactor", serialize_with = "round3")]
    pub bus_factor: f64,
    #[serde(rename = "BusFactor_Latency", serialize_with = "round3")]
    pub bus_factor_latency: f64,

    #[serde(rename = "ResponsiveMaintainer", serialize_with = "round3")]
    pub responsive_maintainer: f64,
    #[serde(rename = "ResponsiveMaintainer_Latency", serialize_with = "round3")]
    pub responsive_maintainer_latency: f64,

    #[serde(rename = "RampUp", serialize_with = "round3")]
    pub ramp_up: f64,
    #[serde(rename = "RampUp_Latency", serialize_with = "round3")]
    pub ramp_up_latency: f64,

    #[serde(rename = "Correctness", serialize_with = "round3")]
    pub correctness: f64,
    #[serde(rename = "Correctness_Latency", serialize_with = "round3")]
    pub correctness_latency: f64,

    #[serde(rename = "License", serialize_with = "round3")]
    pub license: f64,
    #[serde(rename = "License_Latency", serialize_with = "round3")]
    pub license_latency: f64,
}

fn round3<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64((value * 1000.0).round() / 1000.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> EvaluationRecord {
        EvaluationRecord {
            url: "https://github.com/acme/widget".to_owned(),
            net_score: 0.74,
            net_score_latency: 0.001,
            bus_factor: 0.8,
            bus_factor_latency: 0.123_456,
            responsive_maintainer: 0.6,
            responsive_maintainer_latency: 0.2,
            ramp_up: 1.0,
            ramp_up_latency: 0.3,
            correctness: 0.4,
            correctness_latency: 0.4,
            license: 0.9,
            license_latency: 0.5,
        }
    }

    #[test]
    fn test_serializes_all_contract_fields() {
        let json: serde_json::Value = serde_json::to_value(record()).unwrap();
        let object = json.as_object().unwrap();

        for field in [
            "URL",
            "NetScore",
            "NetScore_Latency",
            "BusFactor",
            "BusFactor_Latency",
            "ResponsiveMaintainer",
            "ResponsiveMaintainer_Latency",
            "RampUp",
            "RampUp_Latency",
            "Correctness",
            "Correctness_Latency",
            "License",
            "License_Latency",
        ] {
            assert!(object.contains_key(field), "missing field {field}");
        }
        assert_eq!(object.len(), 13);
    }

    #[test]
    fn test_field_order_matches_contract() {
        let line = serde_json::to_string(&record()).unwrap();

        let positions: Vec<_> = ["\"URL\"", "\"NetScore\"", "\"BusFactor\"", "\"ResponsiveMaintainer\"", "\"RampUp\"", "\"Correctness\"", "\"License\""]
            .iter()
            .map(|field| line.find(field).unwrap())
            .collect();

        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]), "fields out of order: {line}");
    }

    #[test]
    fn test_rounds_to_three_decimals() {
        let line = serde_json::to_string(&record()).unwrap();
        assert!(line.contains("\"BusFactor_Latency\":0.123"));
        assert!(!line.contains("0.123456"));
    }

    #[test]
    fn test_rounding_happens_at_boundary_only() {
        let mut r = record();
        r.net_score = 0.123_456;

        // Internal value keeps full precision
        assert!((r.net_score - 0.123_456).abs() < f64::EPSILON);

        let json: serde_json::Value = serde_json::to_value(&r).unwrap();
        assert!((json["NetScore"].as_f64().unwrap() - 0.123).abs() < 1e-12);
    }

    #[test]
    fn test_serializes_as_single_line() {
        let line = serde_json::to_string(&record()).unwrap();
        assert!(!line.contains('\n'));
    }
}
