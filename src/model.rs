//! Student data model
//!
//! `Student` is the persisted record as returned to callers. `StudentPayload`
//! is the `{name, age}` body accepted by create and update; it never carries
//! an id because ids are assigned by the store and immutable afterwards.

use serde::{Deserialize, Serialize};

/// Store-assigned student identifier
pub type StudentId = i64;

/// A persisted student record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub id: StudentId,
    pub name: String,
    pub age: i32,
}

impl Student {
    /// Build a record from an assigned id and the payload it was stored with
    pub fn from_payload(id: StudentId, payload: StudentPayload) -> Self {
        Self {
            id,
            name: payload.name,
            age: payload.age,
        }
    }
}

/// Candidate or replacement values for a student
///
/// Unknown fields (including a client-supplied `id`) are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentPayload {
    pub name: String,
    pub age: i32,
}

impl StudentPayload {
    pub fn new(name: impl Into<String>, age: i32) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_student_field_order() {
        let student = Student {
            id: 100,
            name: "Swagnik".to_string(),
            age: 32,
        };

        let json = serde_json::to_string(&student).unwrap();
        assert_eq!(json, r#"{"id":100,"name":"Swagnik","age":32}"#);
    }

    #[test]
    fn test_payload_ignores_client_id() {
        let payload: StudentPayload =
            serde_json::from_str(r#"{"id":7,"name":"Ana","age":20}"#).unwrap();
        assert_eq!(payload, StudentPayload::new("Ana", 20));
    }

    #[test]
    fn test_payload_rejects_wrong_types() {
        assert!(serde_json::from_str::<StudentPayload>(r#"{"name":"Ana","age":"20"}"#).is_err());
        assert!(serde_json::from_str::<StudentPayload>(r#""""#).is_err());
    }

    proptest! {
        #[test]
        fn prop_student_json_round_trip(id in 0i64.., name in ".*", age in any::<i32>()) {
            let student = Student { id, name, age };
            let json = serde_json::to_vec(&student).unwrap();
            let decoded: Student = serde_json::from_slice(&json).unwrap();
            prop_assert_eq!(decoded, student);
        }
    }
}
