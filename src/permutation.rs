//! Cartesian expansion of descriptor permutation axes.
//!
//! A top-level array field is a permutation axis; everything else is fixed.
//! The expansion scans fields in declaration order and copies the working
//! set once per axis value, which makes earlier-declared axes vary fastest.
//! Callers depend on that enumeration order, so the capability maps must
//! preserve insertion order.

use crate::Capabilities;
use serde_json::Value;

/// Expand a descriptor's axes into concrete permutations merged over `base`.
///
/// A descriptor without axes yields one permutation; an axis with zero
/// elements eliminates every permutation of its descriptor. Permutation
/// fields override identically-named base fields in place; all other base
/// fields pass through unchanged.
pub fn expand_permutations(base: &Capabilities, descriptor: &Capabilities) -> Vec<Capabilities> {
    let mut permutations = vec![base.clone()];
    for (key, value) in descriptor {
        match value {
            Value::Array(choices) => {
                let mut expanded = Vec::with_capacity(choices.len() * permutations.len());
                for choice in choices {
                    for permutation in &permutations {
                        let mut next = permutation.clone();
                        next.insert(key.clone(), choice.clone());
                        expanded.push(next);
                    }
                }
                permutations = expanded;
            }
            fixed => {
                for permutation in &mut permutations {
                    permutation.insert(key.clone(), fixed.clone());
                }
            }
        }
    }
    permutations
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn caps(value: serde_json::Value) -> Capabilities {
        value.as_object().expect("object fixture").clone()
    }

    #[test]
    fn no_axes_yields_the_descriptor_over_the_base() {
        let base = caps(json!({"platformName": "windows", "platformVersion": 8}));
        let descriptor = caps(json!({"browserName": "chrome", "platformName": "linux"}));
        let expanded = expand_permutations(&base, &descriptor);
        assert_eq!(
            expanded,
            vec![caps(json!({
                "platformName": "linux",
                "platformVersion": 8,
                "browserName": "chrome"
            }))]
        );
    }

    #[test]
    fn empty_descriptor_yields_the_base_once() {
        let base = caps(json!({"platformName": "windows"}));
        let expanded = expand_permutations(&base, &Capabilities::new());
        assert_eq!(expanded, vec![base]);
    }

    #[test]
    fn first_declared_axis_varies_fastest() {
        let base = Capabilities::new();
        let descriptor = caps(json!({
            "browserName": ["a", "b"],
            "version": ["1", "2"]
        }));
        let expanded = expand_permutations(&base, &descriptor);
        let pairs: Vec<(String, String)> = expanded
            .iter()
            .map(|p| {
                (
                    p["browserName"].as_str().unwrap().to_string(),
                    p["version"].as_str().unwrap().to_string(),
                )
            })
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("a".into(), "1".into()),
                ("b".into(), "1".into()),
                ("a".into(), "2".into()),
                ("b".into(), "2".into()),
            ]
        );
    }

    #[test]
    fn four_axes_enumerate_in_odometer_order() {
        let base = caps(json!({"isCapabilities": true}));
        let descriptor = caps(json!({
            "browserName": ["a", "b"],
            "version": ["1", "2"],
            "platform": ["c", "d"],
            "platformVersion": ["3", "4"]
        }));
        let expanded = expand_permutations(&base, &descriptor);
        assert_eq!(expanded.len(), 16);
        // First block: platform/platformVersion pinned to their first values.
        assert_eq!(
            expanded[0],
            caps(json!({
                "isCapabilities": true,
                "browserName": "a",
                "version": "1",
                "platform": "c",
                "platformVersion": "3"
            }))
        );
        assert_eq!(expanded[1]["browserName"], json!("b"));
        assert_eq!(expanded[1]["version"], json!("1"));
        assert_eq!(expanded[2]["browserName"], json!("a"));
        assert_eq!(expanded[2]["version"], json!("2"));
        // The last-declared axis flips only halfway through.
        assert_eq!(expanded[7]["platformVersion"], json!("3"));
        assert_eq!(expanded[8]["platformVersion"], json!("4"));
        // Base fields survive into every permutation.
        assert!(expanded.iter().all(|p| p["isCapabilities"] == json!(true)));
    }

    #[test]
    fn zero_length_axis_eliminates_the_block() {
        let base = caps(json!({"platformName": "windows"}));
        let descriptor = caps(json!({"browserName": []}));
        assert!(expand_permutations(&base, &descriptor).is_empty());
    }

    #[test]
    fn override_keeps_the_base_key_position() {
        let base = caps(json!({"platformName": "windows", "platformVersion": 8}));
        let descriptor = caps(json!({"platformName": "linux"}));
        let expanded = expand_permutations(&base, &descriptor);
        let keys: Vec<&String> = expanded[0].keys().collect();
        assert_eq!(keys, vec!["platformName", "platformVersion"]);
    }
}
