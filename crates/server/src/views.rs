//! Server-rendered pages.
//!
//! Every page goes through `layout`; all user-supplied text is passed through
//! `escape` before it lands in the markup.

use std::fmt::Write;

use models::errors::FieldErrors;
use models::jersey::JerseyInput;
use service::catalog::Jersey;

pub const STORE_TITLE: &str = "African Soccer Jersey Store";

/// Where the admin form submits to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormTarget<'a> {
    Create,
    Update(&'a str),
}

pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn format_price(price: f64) -> String {
    format!("${price:.2}")
}

fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
</head>
<body>
<header><nav><a href="/">Home</a> | <a href="/admin">Admin</a></nav></header>
<main>
{body}
</main>
</body>
</html>
"#,
        title = escape(title),
    )
}

pub fn home(jerseys: &[Jersey]) -> String {
    let mut body = format!("<h1>{}</h1>\n", escape(STORE_TITLE));
    if jerseys.is_empty() {
        body.push_str("<p class=\"empty\">No jerseys in the store yet.</p>\n");
        return layout(STORE_TITLE, &body);
    }
    body.push_str("<ul class=\"jerseys\">\n");
    for j in jerseys {
        let _ = writeln!(
            body,
            r#"<li><a href="/jersey/{id}"><img src="{img}" alt="{team}"><h2>{team}</h2><p>{country}</p><p class="price">{price}</p></a></li>"#,
            id = j.id,
            img = escape(&j.image_url),
            team = escape(&j.team),
            country = escape(&j.country),
            price = format_price(j.price),
        );
    }
    body.push_str("</ul>\n");
    layout(STORE_TITLE, &body)
}

pub fn detail(j: &Jersey) -> String {
    let title = format!("{} - {}", j.team, j.country);
    let body = format!(
        r#"<article class="jersey">
<img src="{img}" alt="{team}">
<h1>{team}</h1>
<p>Country: {country}</p>
<p class="price">{price}</p>
<p><a href="/admin?id={id}">Edit</a> | <a href="/">Back to all jerseys</a></p>
</article>
"#,
        id = j.id,
        img = escape(&j.image_url),
        team = escape(&j.team),
        country = escape(&j.country),
        price = format_price(j.price),
    );
    layout(&title, &body)
}

pub fn admin_form(target: FormTarget<'_>, values: &JerseyInput, errors: &FieldErrors) -> String {
    let (heading, action, submit) = match target {
        FormTarget::Create => ("Add a Jersey", "/admin".to_string(), "Add Jersey"),
        FormTarget::Update(id) => ("Edit Jersey", format!("/admin/{}?_method=PUT", escape(id)), "Update Jersey"),
    };

    let mut body = format!("<h1>Admin - Manage Jerseys</h1>\n<h2>{heading}</h2>\n");
    if !errors.is_empty() {
        body.push_str("<ul class=\"errors\">\n");
        for e in errors.iter() {
            let _ = writeln!(body, "<li>{}</li>", escape(&e.message));
        }
        body.push_str("</ul>\n");
    }

    let _ = write!(
        body,
        r#"<form method="POST" action="{action}">
<label>Team <input type="text" name="team" value="{team}"></label>
<label>Country <input type="text" name="country" value="{country}"></label>
<label>Price <input type="number" name="price" step="0.01" min="0" value="{price}"></label>
<label>Image URL <input type="text" name="imageUrl" value="{image_url}"></label>
<button type="submit">{submit}</button>
</form>
"#,
        team = escape(&values.team),
        country = escape(&values.country),
        price = escape(&values.price),
        image_url = escape(&values.image_url),
    );

    if let FormTarget::Update(id) = target {
        let _ = write!(
            body,
            r#"<form method="POST" action="/admin/{id}?_method=DELETE">
<button type="submit">Delete Jersey</button>
</form>
"#,
            id = escape(id),
        );
    }
    layout("Admin - Manage Jerseys", &body)
}

pub fn not_found() -> String {
    layout(
        "Page Not Found",
        "<h1>Page Not Found</h1>\n<p>The page you are looking for does not exist.</p>\n<p><a href=\"/\">Back to the store</a></p>\n",
    )
}

pub fn forbidden() -> String {
    layout(
        "Not Allowed",
        "<h1>Not Allowed</h1>\n<p>This catalog does not accept changes.</p>\n",
    )
}

pub fn server_error() -> String {
    layout(
        "Server Error",
        "<h1>Server Error</h1>\n<p>Something went wrong on the server.</p>\n",
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn jersey(team: &str) -> Jersey {
        let now = Utc::now().into();
        Jersey {
            id: Uuid::new_v4(),
            team: team.into(),
            country: "Nigeria".into(),
            price: 59.99,
            image_url: "https://x/y.jpg".into(),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn escapes_markup() {
        assert_eq!(escape(r#"<b>"Eagles" & 'Lions'</b>"#), "&lt;b&gt;&quot;Eagles&quot; &amp; &#39;Lions&#39;&lt;/b&gt;");
    }

    #[test]
    fn home_lists_each_jersey_with_price() {
        let a = jersey("Super Eagles");
        let page = home(&[a.clone()]);
        assert!(page.contains("Super Eagles"));
        assert!(page.contains("$59.99"));
        assert!(page.contains(&format!("/jersey/{}", a.id)));
    }

    #[test]
    fn home_handles_empty_catalog() {
        assert!(home(&[]).contains("No jerseys in the store yet."));
    }

    #[test]
    fn detail_title_is_team_and_country() {
        let page = detail(&jersey("Super Eagles"));
        assert!(page.contains("<title>Super Eagles - Nigeria</title>"));
    }

    #[test]
    fn user_text_is_escaped() {
        let page = detail(&jersey("<script>alert(1)</script>"));
        assert!(!page.contains("<script>"));
        assert!(page.contains("&lt;script&gt;"));
    }

    #[test]
    fn edit_form_targets_override_routes() {
        let id = Uuid::new_v4().to_string();
        let page = admin_form(FormTarget::Update(&id), &JerseyInput::default(), &FieldErrors::default());
        assert!(page.contains(&format!("/admin/{id}?_method=PUT")));
        assert!(page.contains(&format!("/admin/{id}?_method=DELETE")));
    }

    #[test]
    fn rejected_form_shows_messages_and_values() {
        let mut errors = FieldErrors::default();
        errors.push("price", "Price cannot be negative");
        let values = JerseyInput::new("Black Stars", "Ghana", "-4", "/gh.jpg");
        let page = admin_form(FormTarget::Create, &values, &errors);
        assert!(page.contains("Price cannot be negative"));
        assert!(page.contains(r#"value="Black Stars""#));
        assert!(page.contains(r#"value="-4""#));
        assert!(!page.contains("Delete Jersey"));
    }
}
