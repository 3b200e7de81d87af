use serde::{Deserialize, Deserializer, Serialize};

/// A project visible to the authenticated user.
///
/// The tracker listing endpoint is addressed through the project's `uri`
/// (e.g. `projects/101`), not its numeric id, so that is what we keep.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub label: String,
    pub uri: String,
}

/// One tracker inside a project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tracker {
    pub id: u64,
    pub label: String,
}

/// One unit of tracked work, as returned by the artifact listing endpoint.
///
/// `submitted_on` is kept as the raw ISO-8601 string; parsing happens during
/// aggregation so a malformed timestamp surfaces as an aggregation error, not
/// a decode error for the whole page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Artifact {
    pub id: u64,
    pub title: String,
    /// Workflow column. The API reports uncategorized artifacts with an
    /// empty string; that is decoded to `None` here.
    #[serde(deserialize_with = "empty_as_none")]
    pub status: Option<String>,
    pub submitted_on: String,
}

fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_status_becomes_none() {
        let artifact: Artifact = serde_json::from_str(
            r#"{"id": 7, "title": "Fix login", "status": "", "submitted_on": "2024-01-02T10:00:00+01:00"}"#,
        )
        .unwrap();
        assert_eq!(artifact.status, None);
    }

    #[test]
    fn non_empty_status_preserved() {
        let artifact: Artifact = serde_json::from_str(
            r#"{"id": 7, "title": "Fix login", "status": "On going", "submitted_on": "2024-01-02T10:00:00+01:00"}"#,
        )
        .unwrap();
        assert_eq!(artifact.status.as_deref(), Some("On going"));
    }

    #[test]
    fn null_status_becomes_none() {
        let artifact: Artifact = serde_json::from_str(
            r#"{"id": 7, "title": "Fix login", "status": null, "submitted_on": "2024-01-02T10:00:00+01:00"}"#,
        )
        .unwrap();
        assert_eq!(artifact.status, None);
    }
}
