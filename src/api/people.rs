//! Wire types for the people API

use serde::Deserialize;

/// A single person record
///
/// The origin API sends many more fields per person; only the two the list
/// renders are deserialized, the rest are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Person {
    pub name: String,
    pub gender: String,
}

/// One page of the people index
///
/// `results` is mandatory: a body without it is a malformed response and
/// fails deserialization. `count` and `next` are part of the API's
/// pagination envelope and feed the status display when present.
#[derive(Debug, Clone, Deserialize)]
pub struct PeoplePage {
    pub results: Vec<Person>,
    #[serde(default)]
    pub count: Option<u64>,
    #[serde(default)]
    pub next: Option<String>,
}

impl PeoplePage {
    /// Whether the API reports another page after this one
    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_page_envelope() {
        let body = r#"{
            "count": 82,
            "next": "https://swapi.dev/api/people?page=2",
            "previous": null,
            "results": [
                {"name": "Luke Skywalker", "gender": "male", "height": "172"},
                {"name": "C-3PO", "gender": "n/a"}
            ]
        }"#;

        let page: PeoplePage = serde_json::from_str(body).unwrap();
        assert_eq!(page.results.len(), 2);
        assert_eq!(page.results[0].name, "Luke Skywalker");
        assert_eq!(page.results[1].gender, "n/a");
        assert_eq!(page.count, Some(82));
        assert!(page.has_next());
    }

    #[test]
    fn test_last_page_has_no_next() {
        let body = r#"{"count": 82, "next": null, "results": []}"#;
        let page: PeoplePage = serde_json::from_str(body).unwrap();
        assert!(!page.has_next());
        assert!(page.results.is_empty());
    }

    #[test]
    fn test_missing_results_is_an_error() {
        let body = r#"{"detail": "Not found"}"#;
        assert!(serde_json::from_str::<PeoplePage>(body).is_err());
    }

    #[test]
    fn test_duplicate_names_are_preserved() {
        // Names are not unique in the wild; the list must carry both rows
        let body = r#"{"results": [
            {"name": "Droid", "gender": "n/a"},
            {"name": "Droid", "gender": "n/a"}
        ]}"#;

        let page: PeoplePage = serde_json::from_str(body).unwrap();
        assert_eq!(page.results.len(), 2);
        assert_eq!(page.results[0], page.results[1]);
    }
}
