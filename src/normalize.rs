//! Whitespace normalization for incoming request bodies.

use serde_json::Value;

/// Trims leading and trailing whitespace from every top-level string member
/// of a JSON object, in place. Non-string members, nested values, and
/// non-object roots are left untouched. Runs before validation so checks
/// see canonical values and a whitespace-only field counts as empty.
pub fn trim_string_fields(value: &mut Value) {
    if let Value::Object(map) = value {
        for entry in map.values_mut() {
            if let Value::String(s) = entry {
                *s = s.trim().to_string();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_trims_top_level_strings() {
        let mut body = json!({
            "name": "  John ",
            "lastName": "\tDoe\n",
            "email": " john@example.com  "
        });
        trim_string_fields(&mut body);
        assert_eq!(body["name"], "John");
        assert_eq!(body["lastName"], "Doe");
        assert_eq!(body["email"], "john@example.com");
    }

    #[test]
    fn test_interior_whitespace_is_preserved() {
        let mut body = json!({ "name": "  Mary Jane " });
        trim_string_fields(&mut body);
        assert_eq!(body["name"], "Mary Jane");
    }

    #[test]
    fn test_whitespace_only_becomes_empty() {
        let mut body = json!({ "company": "   " });
        trim_string_fields(&mut body);
        assert_eq!(body["company"], "");
    }

    #[test]
    fn test_non_string_members_untouched() {
        let mut body = json!({
            "name": " A ",
            "age": 42,
            "active": true,
            "tags": [" x "],
            "extra": { "inner": " y " },
            "missing": null
        });
        trim_string_fields(&mut body);
        assert_eq!(body["age"], 42);
        assert_eq!(body["active"], true);
        assert_eq!(body["tags"][0], " x ");
        assert_eq!(body["extra"]["inner"], " y ");
        assert!(body["missing"].is_null());
    }

    #[test]
    fn test_non_object_root_is_noop() {
        let mut body = json!(" text ");
        trim_string_fields(&mut body);
        assert_eq!(body, " text ");

        let mut list = json!([" a "]);
        trim_string_fields(&mut list);
        assert_eq!(list[0], " a ");
    }
}
