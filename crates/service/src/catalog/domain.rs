//! Wire-facing input shapes for the admin API. The admin UI speaks
//! camelCase with a boolean `active` flag; the upsert payload is a tagged
//! union so create-vs-update is the caller's explicit decision, never
//! inferred from the shape of an id.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceFields {
    pub title: String,
    #[serde(default)]
    pub short_desc: Option<String>,
    #[serde(default)]
    pub full_desc: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub order: i32,
    /// Required: an omitted flag must never silently change visibility.
    pub active: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ServiceUpsert {
    Create {
        /// Placeholder id the admin UI assigns before persistence;
        /// discarded, never stored.
        #[serde(rename = "clientRef", default, skip_serializing_if = "Option::is_none")]
        client_ref: Option<String>,
        #[serde(flatten)]
        fields: ServiceFields,
    },
    Update {
        id: i32,
        #[serde(flatten)]
        fields: ServiceFields,
    },
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkFields {
    pub title: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    /// Stored in the `created_at` column; `date` is the external name.
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    /// Required: an omitted flag must never silently change visibility.
    pub active: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum WorkUpsert {
    Create {
        #[serde(rename = "clientRef", default, skip_serializing_if = "Option::is_none")]
        client_ref: Option<String>,
        #[serde(flatten)]
        fields: WorkFields,
    },
    Update {
        id: i32,
        #[serde(flatten)]
        fields: WorkFields,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_payload_parses_with_placeholder_ref() {
        let input: ServiceUpsert = serde_json::from_str(
            r#"{"kind": "create", "clientRef": "svc_17", "title": "Catering", "order": 2, "active": false}"#,
        )
        .unwrap();
        match input {
            ServiceUpsert::Create { client_ref, fields } => {
                assert_eq!(client_ref.as_deref(), Some("svc_17"));
                assert_eq!(fields.title, "Catering");
                assert_eq!(fields.order, 2);
                assert!(!fields.active);
            }
            ServiceUpsert::Update { .. } => panic!("expected create"),
        }
    }

    #[test]
    fn update_payload_requires_id() {
        let ok: WorkUpsert = serde_json::from_str(
            r#"{"kind": "update", "id": 4, "title": "Summer Gala", "date": "2025-07-20", "active": true}"#,
        )
        .unwrap();
        match ok {
            WorkUpsert::Update { id, fields } => {
                assert_eq!(id, 4);
                assert_eq!(fields.date.as_deref(), Some("2025-07-20"));
                assert!(fields.active);
            }
            WorkUpsert::Create { .. } => panic!("expected update"),
        }

        let missing_id = serde_json::from_str::<WorkUpsert>(
            r#"{"kind": "update", "title": "Summer Gala", "active": true}"#,
        );
        assert!(missing_id.is_err());
    }

    #[test]
    fn payloads_omitting_active_are_rejected() {
        // an absent flag must never default a hidden record back to visible
        let update = serde_json::from_str::<WorkUpsert>(
            r#"{"kind": "update", "id": 4, "title": "Summer Gala", "date": "2025-07-20"}"#,
        );
        assert!(update.is_err());

        let create = serde_json::from_str::<ServiceUpsert>(
            r#"{"kind": "create", "title": "Catering"}"#,
        );
        assert!(create.is_err());
    }
}
