use serde::{Deserialize, Serialize};

/// Raw values as the recommend form holds them, before normalisation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CriteriaForm {
    pub age: String,
    pub gender: String,
    pub education: String,
    pub area: String,
    pub state: String,
    pub tags: Vec<String>,
}

/// Payload sent to the remote recommendation service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Criteria {
    pub age: i64,
    pub gender: String,
    pub education: String,
    pub area: String,
    pub state: String,
    pub tags: Vec<String>,
}

impl Criteria {
    pub fn from_form(form: &CriteriaForm) -> Self {
        Self {
            age: parse_age(&form.age),
            gender: form.gender.to_lowercase(),
            education: form.education.to_lowercase(),
            area: form.area.to_lowercase(),
            state: form.state.to_lowercase(),
            // click order, duplicates kept
            tags: form
                .tags
                .iter()
                .map(|tag| tag.trim().to_string())
                .collect(),
        }
    }
}

/// Reads the leading integer of `raw`, falling back to 0.
fn parse_age(raw: &str) -> i64 {
    let trimmed = raw.trim_start();
    let (sign, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end]
        .parse::<i64>()
        .map(|value| sign * value)
        .unwrap_or(0)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scheme {
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub scheme_name: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub link: String,
    /// Fields such as `target_group`, forwarded untouched to the PDF export.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ResultSet {
    pub count: u64,
    #[serde(default)]
    pub results: Vec<Scheme>,
}

#[derive(Debug, Serialize)]
pub struct PdfRequest<'a> {
    pub schemes: &'a [Scheme],
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Reply shape shared by the remote login and signup endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AuthReply {
    #[serde(default)]
    pub ok: bool,
    #[serde(default)]
    pub msg: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthErrorKind {
    Validation,
    Network,
    Server,
    Rejected,
}

/// What the login and signup pages act on: alert `msg`, then follow `redirect`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthOutcome {
    pub ok: bool,
    pub msg: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<AuthErrorKind>,
    pub redirect: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(age: &str, tags: &[&str]) -> CriteriaForm {
        CriteriaForm {
            age: age.to_string(),
            gender: "Male".to_string(),
            education: "Graduate".to_string(),
            area: "Urban".to_string(),
            state: "Delhi".to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    #[test]
    fn criteria_from_blank_age_and_mixed_case() {
        let criteria = Criteria::from_form(&form("", &["Women", "Students"]));
        let body = serde_json::to_value(&criteria).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "age": 0,
                "gender": "male",
                "education": "graduate",
                "area": "urban",
                "state": "delhi",
                "tags": ["Women", "Students"]
            })
        );
    }

    #[test]
    fn criteria_without_tags_sends_empty_list() {
        let criteria = Criteria::from_form(&form("30", &[]));
        let body = serde_json::to_value(&criteria).unwrap();
        assert_eq!(body["tags"], serde_json::json!([]));
        assert_eq!(body["age"], 30);
    }

    #[test]
    fn criteria_keeps_duplicate_tags_in_click_order() {
        let criteria = Criteria::from_form(&form("1", &["Farmer ", "Youth", "Farmer"]));
        assert_eq!(criteria.tags, vec!["Farmer", "Youth", "Farmer"]);
    }

    #[test]
    fn age_parses_leading_integer() {
        assert_eq!(parse_age("25 years"), 25);
        assert_eq!(parse_age("  42"), 42);
        assert_eq!(parse_age("-3"), -3);
        assert_eq!(parse_age("abc"), 0);
        assert_eq!(parse_age("99999999999999999999999"), 0);
    }

    #[test]
    fn result_set_keeps_extra_scheme_fields() {
        let raw = r#"{"count":1,"results":[{"state":"Delhi","scheme_name":"A","summary":"s","link":"http://x","target_group":"Women"}]}"#;
        let set: ResultSet = serde_json::from_str(raw).unwrap();
        assert_eq!(set.count, 1);
        assert_eq!(set.results[0].scheme_name, "A");
        assert_eq!(set.results[0].extra["target_group"], "Women");
    }

    #[test]
    fn pdf_request_forwards_schemes_as_received() {
        let raw = r#"{"state":"UP","scheme_name":"B","summary":"s2","link":"http://y","target_group":"Farmers"}"#;
        let scheme: Scheme = serde_json::from_str(raw).unwrap();
        let body = serde_json::to_value(PdfRequest {
            schemes: std::slice::from_ref(&scheme),
        })
        .unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "schemes": [{
                    "state": "UP",
                    "scheme_name": "B",
                    "summary": "s2",
                    "link": "http://y",
                    "target_group": "Farmers"
                }]
            })
        );
    }
}
