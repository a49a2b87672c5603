//! Path template compilation and matching.

use regex::Regex;

use crate::error::{Result, RouterError};
use crate::request::PathParams;

/// One named placeholder in a path template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteParameter {
    /// Placeholder name as written in the template, without the `?`.
    pub name: String,
    /// Whether the placeholder may match an empty span.
    pub optional: bool,
}

/// A compiled path template.
///
/// Templates mix literal text with `{name}` placeholders. A required
/// placeholder matches one or more non-`/` characters; a `{name?}` optional
/// placeholder matches zero or more. The compiled matcher is anchored at
/// both ends, so a pattern recognizes entire paths only, never prefixes.
///
/// Optional placeholders match the empty string but never absorb the
/// literal text before them: `/files/{name?}` matches `/files/` (with
/// `name` = `""`) and `/files/report`, but not `/files`.
///
/// # Example
///
/// ```
/// use raptor_router::PathPattern;
///
/// let pattern = PathPattern::compile("/posts/{id}/comments/{comment_id}").unwrap();
/// let params = pattern.match_path("/posts/123/comments/456").unwrap();
/// assert_eq!(params.get("id"), Some("123"));
/// assert_eq!(params.get("comment_id"), Some("456"));
/// ```
#[derive(Debug, Clone)]
pub struct PathPattern {
    template: String,
    regex: Regex,
    parameters: Vec<RouteParameter>,
}

impl PathPattern {
    /// Compiles a path template into a matcher.
    ///
    /// Compilation is pure and deterministic: two identical templates
    /// compile to matchers with identical semantics. A template with no
    /// placeholders becomes an exact-literal matcher.
    ///
    /// # Errors
    ///
    /// Returns [`RouterError::InvalidPattern`] for unbalanced braces, an
    /// empty placeholder name, or a duplicate parameter name.
    pub fn compile(template: &str) -> Result<Self> {
        let invalid = |reason: &str| RouterError::InvalidPattern {
            template: template.to_string(),
            reason: reason.to_string(),
        };

        let mut regex_str = String::from("^");
        let mut parameters: Vec<RouteParameter> = Vec::new();
        let mut rest = template;

        while let Some(open) = rest.find('{') {
            let (literal, tail) = rest.split_at(open);
            if literal.contains('}') {
                return Err(invalid("unbalanced '}'"));
            }
            regex_str.push_str(&regex::escape(literal));

            let close = tail.find('}').ok_or_else(|| invalid("unbalanced '{'"))?;
            let raw = &tail[1..close];
            if raw.contains('{') {
                return Err(invalid("nested '{'"));
            }
            let (name, optional) = match raw.strip_suffix('?') {
                Some(name) => (name, true),
                None => (raw, false),
            };
            if name.is_empty() {
                return Err(invalid("empty placeholder name"));
            }
            if parameters.iter().any(|p| p.name == name) {
                return Err(invalid("duplicate parameter name"));
            }

            regex_str.push_str(if optional { "([^/]*)" } else { "([^/]+)" });
            parameters.push(RouteParameter {
                name: name.to_string(),
                optional,
            });
            rest = &tail[close + 1..];
        }

        if rest.contains('}') {
            return Err(invalid("unbalanced '}'"));
        }
        regex_str.push_str(&regex::escape(rest));
        regex_str.push('$');

        let regex = Regex::new(&regex_str)
            .map_err(|e| invalid(&e.to_string()))?;

        Ok(Self {
            template: template.to_string(),
            regex,
            parameters,
        })
    }

    /// Tests whether a concrete path matches the entire template.
    pub fn is_match(&self, path: &str) -> bool {
        self.regex.is_match(path)
    }

    /// Attempts to match a path, returning extracted parameters on success.
    ///
    /// Captured values are zipped positionally against the recorded
    /// parameter order. An optional placeholder that matched an empty span
    /// yields an empty string, not an absent key.
    pub fn match_path(&self, path: &str) -> Option<PathParams> {
        let caps = self.regex.captures(path)?;

        let mut params = PathParams::new();
        for (i, parameter) in self.parameters.iter().enumerate() {
            let value = caps.get(i + 1).map_or("", |m| m.as_str());
            params.insert(parameter.name.clone(), value);
        }

        Some(params)
    }

    /// Returns the original template string.
    pub fn template(&self) -> &str {
        &self.template
    }

    /// Returns the placeholders in declaration order.
    pub fn parameters(&self) -> &[RouteParameter] {
        &self.parameters
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_template() {
        let pattern = PathPattern::compile("/users").unwrap();
        assert!(pattern.is_match("/users"));
        assert!(!pattern.is_match("/users/"));
        assert!(!pattern.is_match("/posts"));
        assert!(pattern.parameters().is_empty());
    }

    #[test]
    fn test_entire_path_anchoring() {
        let pattern = PathPattern::compile("/users/{id}").unwrap();
        assert!(!pattern.is_match("/api/users/42"));
        assert!(!pattern.is_match("/users/42/edit"));
    }

    #[test]
    fn test_required_param() {
        let pattern = PathPattern::compile("/users/{id}").unwrap();
        let params = pattern.match_path("/users/123").unwrap();
        assert_eq!(params.get("id"), Some("123"));
        // A required parameter needs at least one character.
        assert!(pattern.match_path("/users/").is_none());
    }

    #[test]
    fn test_multiple_params_in_order() {
        let pattern = PathPattern::compile("/posts/{post_id}/comments/{comment_id}").unwrap();
        let names: Vec<&str> = pattern.parameters().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["post_id", "comment_id"]);

        let params = pattern.match_path("/posts/42/comments/7").unwrap();
        assert_eq!(params.get("post_id"), Some("42"));
        assert_eq!(params.get("comment_id"), Some("7"));
    }

    #[test]
    fn test_optional_param_boundary() {
        let pattern = PathPattern::compile("/files/{name?}").unwrap();
        // The leading slash stays literal: an empty capture still needs it.
        assert!(pattern.match_path("/files").is_none());

        let params = pattern.match_path("/files/").unwrap();
        assert_eq!(params.get("name"), Some(""));

        let params = pattern.match_path("/files/report").unwrap();
        assert_eq!(params.get("name"), Some("report"));
    }

    #[test]
    fn test_optional_flag_recorded() {
        let pattern = PathPattern::compile("/files/{name?}").unwrap();
        assert_eq!(
            pattern.parameters(),
            [RouteParameter {
                name: "name".to_string(),
                optional: true,
            }]
        );
    }

    #[test]
    fn test_unbalanced_braces() {
        assert!(PathPattern::compile("/users/{id").is_err());
        assert!(PathPattern::compile("/users/id}").is_err());
        assert!(PathPattern::compile("/users/{id}}").is_err());
        assert!(PathPattern::compile("/users/{{id}").is_err());
    }

    #[test]
    fn test_empty_placeholder_name() {
        assert!(PathPattern::compile("/users/{}").is_err());
        assert!(PathPattern::compile("/files/{?}").is_err());
    }

    #[test]
    fn test_duplicate_parameter_name() {
        assert!(PathPattern::compile("/x/{id}/y/{id}").is_err());
    }

    #[test]
    fn test_deterministic_compilation() {
        let a = PathPattern::compile("/users/{id}/edit").unwrap();
        let b = PathPattern::compile("/users/{id}/edit").unwrap();
        assert_eq!(a.regex.as_str(), b.regex.as_str());
        assert_eq!(a.parameters(), b.parameters());
    }
}
