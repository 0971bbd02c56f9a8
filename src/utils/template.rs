use crate::error::{AppError, AppResult};
use regex::Regex;
use std::collections::HashMap;

/// Substitute `{name}` placeholders in a message template.
///
/// The template is scanned up front: a placeholder with no matching variable
/// fails with a `TemplateError` naming it, before any substitution happens.
pub fn render_template(template: &str, vars: &HashMap<&str, String>) -> AppResult<String> {
    let placeholder = Regex::new(r"\{(\w+)\}").unwrap();

    for cap in placeholder.captures_iter(template) {
        let name = &cap[1];
        if !vars.contains_key(name) {
            return Err(AppError::TemplateError(format!(
                "unknown placeholder {{{name}}}"
            )));
        }
    }

    let mut rendered = template.to_string();
    for (name, value) in vars {
        rendered = rendered.replace(&format!("{{{name}}}"), value);
    }
    Ok(rendered)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars() -> HashMap<&'static str, String> {
        HashMap::from([
            ("member_name", "Ravi".to_string()),
            ("amount", "1500".to_string()),
            ("due_date", "31-01-2024".to_string()),
            ("overdue_days", "0".to_string()),
            ("phone", "+91-9876543210".to_string()),
        ])
    }

    #[test]
    fn test_render_replaces_all_placeholders() {
        let out = render_template(
            "Hi {member_name}, {amount} is due on {due_date}. Contact: {phone}",
            &vars(),
        )
        .unwrap();
        assert_eq!(
            out,
            "Hi Ravi, 1500 is due on 31-01-2024. Contact: +91-9876543210"
        );
        assert!(!out.contains('{'));
    }

    #[test]
    fn test_unknown_placeholder_is_rejected() {
        let err = render_template("Hello {member_nmae}", &vars()).unwrap_err();
        match err {
            AppError::TemplateError(msg) => assert!(msg.contains("{member_nmae}")),
            other => panic!("expected TemplateError, got {other:?}"),
        }
    }

    #[test]
    fn test_repeated_placeholder() {
        let out = render_template("{member_name} {member_name}", &vars()).unwrap();
        assert_eq!(out, "Ravi Ravi");
    }
}
