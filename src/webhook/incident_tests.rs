//! Tests for incident payload serialization.

use super::{Incident, IncidentStatus};

mod constructors {
    use super::*;

    #[test]
    fn trigger_sets_the_trigger_status() {
        let incident = Incident::trigger("Foo", "Bar");

        assert_eq!(incident.message, "Foo");
        assert_eq!(incident.description, "Bar");
        assert_eq!(incident.status, IncidentStatus::Trigger);
    }

    #[test]
    fn resolve_sets_the_resolve_status() {
        let incident = Incident::resolve("Foo", "Bar");

        assert_eq!(incident.status, IncidentStatus::Resolve);
    }

    #[test]
    fn new_carries_an_explicit_status() {
        let incident = Incident::new("Foo", "Bar", IncidentStatus::Resolve);

        assert_eq!(incident.status, IncidentStatus::Resolve);
    }
}

mod serialization {
    use super::*;

    #[test]
    fn field_names_are_lowercase() {
        let incident = Incident::trigger("Foo", "Bar");

        let value = serde_json::to_value(&incident).unwrap();
        let object = value.as_object().unwrap();

        assert!(object.contains_key("message"));
        assert!(object.contains_key("description"));
        assert!(object.contains_key("status"));
        assert_eq!(object.len(), 3);
    }

    #[test]
    fn status_serializes_to_lowercase_action_names() {
        assert_eq!(
            serde_json::to_string(&IncidentStatus::Trigger).unwrap(),
            r#""trigger""#
        );
        assert_eq!(
            serde_json::to_string(&IncidentStatus::Resolve).unwrap(),
            r#""resolve""#
        );
    }

    #[test]
    fn full_payload_round_trips_as_expected_json() {
        let incident = Incident::resolve("Recovered", "5xx rate back to normal");

        let json = serde_json::to_string(&incident).unwrap();

        assert_eq!(
            json,
            r#"{"message":"Recovered","description":"5xx rate back to normal","status":"resolve"}"#
        );
    }
}
