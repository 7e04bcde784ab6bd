//! Property-based tests for filesystem type detection.
//!
//! These tests use proptest to generate random manifests and verify that
//! classification holds regardless of nesting and ordering.

#[cfg(test)]
mod proptest_tests {
    use crate::filesystem::{detect, file_paths, Scheme, CONTAINER_SUFFIX};
    use proptest::prelude::*;
    use serde_json::{json, Value};

    fn uri() -> impl Strategy<Value = String> {
        prop_oneof![
            "[a-z0-9/]{1,20}".prop_map(|p| format!("gs://{}", p)),
            "[a-z0-9/]{1,20}".prop_map(|p| format!("https://{}", p)),
            "[a-z0-9/]{1,20}".prop_map(|p| format!("http://{}", p)),
            "[a-z0-9/._]{1,20}".prop_map(|p| format!("/{}", p)),
        ]
    }

    fn file_record(path: String) -> Value {
        json!({"class": "File", "path": path})
    }

    /// Arbitrarily nested arrays and objects with file records at the leaves.
    fn manifest() -> impl Strategy<Value = Value> {
        let leaf = prop_oneof![
            uri().prop_map(file_record),
            Just(Value::Null),
            any::<i64>().prop_map(Value::from),
            "[a-z]{0,8}".prop_map(Value::from),
        ];
        leaf.prop_recursive(5, 64, 6, |inner| {
            prop_oneof![
                prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
                prop::collection::btree_map("[a-z]{1,6}", inner, 0..6).prop_map(|m| {
                    Value::Object(m.into_iter().filter(|(k, _)| k != "class").collect())
                }),
            ]
        })
    }

    proptest! {
        /// Property: every URI maps to the scheme its prefix announces
        #[test]
        fn classification_follows_prefix(path in uri()) {
            let expected = if path.starts_with("gs:") {
                Scheme::Gcp
            } else if path.starts_with("http") {
                Scheme::Http
            } else {
                Scheme::Local
            };
            prop_assert_eq!(Scheme::classify(&path), expected);
        }

        /// Property: wrapping a manifest in more arrays or objects changes nothing
        #[test]
        fn detection_ignores_nesting(m in manifest(), depth in 1usize..5) {
            let mut wrapped = m.clone();
            for i in 0..depth {
                wrapped = if i % 2 == 0 {
                    json!([wrapped])
                } else {
                    json!({"nested": wrapped})
                };
            }
            prop_assert_eq!(detect(&m, true), detect(&wrapped, true));
        }

        /// Property: reversing array order changes nothing
        #[test]
        fn detection_ignores_order(paths in prop::collection::vec(uri(), 0..10)) {
            let forward: Vec<Value> = paths.iter().cloned().map(file_record).collect();
            let backward: Vec<Value> = paths.iter().rev().cloned().map(file_record).collect();
            prop_assert_eq!(
                detect(&Value::Array(forward), false),
                detect(&Value::Array(backward), false)
            );
        }

        /// Property: every file record in the manifest is visited
        #[test]
        fn every_record_is_found(paths in prop::collection::vec(uri(), 0..10)) {
            let samples: Vec<Value> = paths
                .iter()
                .cloned()
                .map(|p| json!({"files": [file_record(p)]}))
                .collect();
            let manifest = json!({ "samples": samples });
            prop_assert_eq!(file_paths(&manifest).len(), paths.len());
        }

        /// Property: the container marker is present exactly when containers run
        #[test]
        fn container_marker_tracks_flag(m in manifest(), containers in any::<bool>()) {
            for fs_type in detect(&m, containers) {
                prop_assert_eq!(fs_type.tag().ends_with(CONTAINER_SUFFIX), containers);
            }
        }
    }
}
