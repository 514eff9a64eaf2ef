//! HTML views
//!
//! Templates live under `templates/` and are compiled into the binary.
//! Placeholders look like `{{ name }}`; every substituted value is
//! HTML-escaped except the pre-rendered table rows.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Html;
use shared::models::employee::Employee;

use crate::config::{API_TITLE, API_VERSION};
use crate::db::employee;
use crate::state::AppState;

const HOME_TEMPLATE: &str = include_str!("../../templates/home.html");
const EMPLOYEES_TEMPLATE: &str = include_str!("../../templates/employees.html");
const ERROR_TEMPLATE: &str = include_str!("../../templates/error.html");

/// GET / - Static home page with the API version
pub async fn home(State(state): State<AppState>) -> Html<String> {
    Html(render(
        HOME_TEMPLATE,
        &[
            ("title", escape_html(API_TITLE).as_str()),
            ("version", escape_html(API_VERSION).as_str()),
            ("api_prefix", escape_html(&state.api_prefix).as_str()),
        ],
    ))
}

/// GET /employee - Table of every stored employee
///
/// A browser route, so a failed query answers with an HTML page too.
pub async fn employee_list(State(state): State<AppState>) -> (StatusCode, Html<String>) {
    match employee::find_all(&state.pool).await {
        Ok(employees) => (StatusCode::OK, Html(render_employee_list(&employees))),
        Err(e) => {
            tracing::error!(error = %e, "Failed to load employee list");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Html(render(
                    ERROR_TEMPLATE,
                    &[("message", "The employee list could not be loaded.")],
                )),
            )
        }
    }
}

fn render_employee_list(employees: &[Employee]) -> String {
    let rows = if employees.is_empty() {
        r#"            <tr><td colspan="5">No employees found.</td></tr>"#.to_string()
    } else {
        employees
            .iter()
            .map(|e| {
                format!(
                    "            <tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
                    e.id,
                    escape_html(&e.employee_id),
                    escape_html(&e.name),
                    escape_html(&e.role),
                    escape_html(&e.email),
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    };

    render(
        EMPLOYEES_TEMPLATE,
        &[
            ("count", employees.len().to_string().as_str()),
            ("rows", rows.as_str()),
        ],
    )
}

/// Substitute `{{ key }}` placeholders; unknown placeholders are left as-is.
fn render(template: &str, values: &[(&str, &str)]) -> String {
    values.iter().fold(template.to_string(), |page, (key, value)| {
        page.replace(&format!("{{{{ {key} }}}}"), value)
    })
}

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}
