//! Server-rendered HTML pages.
//!
//! Every page is a plain string built from the shared [`layout`]. All
//! interpolated values pass through [`escape`].

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use pokedex_core::form::{EditPokemonForm, FormErrors, TYPE_FIELD};
use pokedex_core::payload::Payload;

/// Characters left unescaped in a path segment (RFC 3986 unreserved set).
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Escape text for inclusion in HTML content or a quoted attribute.
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

/// `/pokemon/{name}` with the name percent-encoded as one path segment.
pub fn pokemon_path(name: &str) -> String {
    format!("/pokemon/{}", utf8_percent_encode(name, PATH_SEGMENT))
}

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head><meta charset=\"utf-8\"><title>{title} | Pokédex</title></head>\n\
         <body>\n\
         <header><a href=\"/\">Pokédex</a></header>\n\
         <main>\n{body}\n</main>\n\
         </body>\n\
         </html>\n",
        title = escape(title),
    )
}

fn search_form() -> &'static str {
    "<form method=\"get\" action=\"/pokemon/search\">\
     <input type=\"text\" name=\"name\" placeholder=\"pikachu\">\
     <button type=\"submit\">Search</button>\
     </form>"
}

pub fn home_page() -> String {
    let body = format!(
        "<h1>Pokédex</h1>\n\
         <p>Look up a Pokémon by name.</p>\n\
         {}",
        search_form()
    );
    layout("Home", &body)
}

fn list_items(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("<li>{}</li>", escape(item)))
        .collect()
}

/// Detail view: headline fields plus the full untouched payload.
pub fn detail_page(payload: &Payload) -> String {
    let name = payload.name().unwrap_or("unknown");
    let sprite = payload
        .front_sprite()
        .map(|src| format!("<img src=\"{}\" alt=\"{}\">\n", escape(src), escape(name)))
        .unwrap_or_default();
    let raw = serde_json::to_string_pretty(payload.raw()).unwrap_or_default();
    let path = pokemon_path(name);

    let body = format!(
        "<h1>{name}</h1>\n\
         {sprite}\
         <h2>Types</h2>\n<ul>{types}</ul>\n\
         <h2>Abilities</h2>\n<ul>{abilities}</ul>\n\
         <p><a href=\"{path}/edit\">Edit</a></p>\n\
         <form method=\"post\" action=\"{path}/delete\"><button type=\"submit\">Delete</button></form>\n\
         <h2>Raw data</h2>\n<pre>{raw}</pre>",
        name = escape(name),
        types = list_items(&payload.type_names()),
        abilities = list_items(&payload.ability_names()),
        raw = escape(&raw),
    );
    layout(name, &body)
}

fn field_errors(errors: &FormErrors, field: &str) -> String {
    errors
        .for_field(field)
        .iter()
        .map(|msg| format!("<p class=\"error\">{}</p>", escape(msg)))
        .collect()
}

/// Edit form for the Pokémon fetched as `name`, showing `form` values and
/// any validation messages.
pub fn edit_page(name: &str, form: &EditPokemonForm, errors: &FormErrors) -> String {
    let body = format!(
        "<h1>Edit {title}</h1>\n\
         <form method=\"post\" action=\"{action}\">\n\
         <label>Name <input type=\"text\" name=\"name\" value=\"{name}\"></label>\n{name_errors}\n\
         <label>Type <input type=\"text\" name=\"{type_field}\" value=\"{types}\"></label>\n{type_errors}\n\
         <label>Abilities <input type=\"text\" name=\"abilities\" value=\"{abilities}\"></label>\n{ability_errors}\n\
         <button type=\"submit\">Save</button>\n\
         </form>",
        title = escape(name),
        action = format!("{}/edit", pokemon_path(name)),
        name = escape(&form.name),
        name_errors = field_errors(errors, "name"),
        type_field = TYPE_FIELD,
        types = escape(&form.types),
        type_errors = field_errors(errors, TYPE_FIELD),
        abilities = escape(&form.abilities),
        ability_errors = field_errors(errors, "abilities"),
    );
    layout(&format!("Edit {name}"), &body)
}

pub fn error_page(message: &str) -> String {
    let body = format!(
        "<h1>Error</h1>\n<p>{}</p>\n{}",
        escape(message),
        search_form()
    );
    layout("Error", &body)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn escape_covers_markup_characters() {
        assert_eq!(
            escape(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn pokemon_path_encodes_segment() {
        assert_eq!(pokemon_path("mr-mime"), "/pokemon/mr-mime");
        assert_eq!(pokemon_path("mr. mime"), "/pokemon/mr.%20mime");
        assert_eq!(pokemon_path("a/b"), "/pokemon/a%2Fb");
    }

    #[test]
    fn detail_page_lists_types_and_raw_payload() {
        let payload = Payload::new(json!({
            "name": "pikachu",
            "types": [{ "type": { "name": "electric" } }],
            "abilities": [{ "ability": { "name": "static" } }],
            "sprites": { "front_default": "https://img/25.png" },
            "base_experience": 112
        }))
        .unwrap();

        let html = detail_page(&payload);
        assert!(html.contains("<h1>pikachu</h1>"));
        assert!(html.contains("<li>electric</li>"));
        assert!(html.contains("<img src=\"https://img/25.png\""));
        assert!(html.contains("base_experience"));
        assert!(html.contains("action=\"/pokemon/pikachu/delete\""));
    }

    #[test]
    fn edit_page_shows_values_and_errors() {
        let form = EditPokemonForm {
            name: "<b>".into(),
            types: "fire".into(),
            abilities: String::new(),
        };
        let errors = form.clone().check().unwrap_err().1;
        let html = edit_page("charmander", &form, &errors);

        assert!(html.contains("action=\"/pokemon/charmander/edit\""));
        assert!(html.contains("value=\"&lt;b&gt;\""));
        assert!(html.contains("At least one entry is required."));
        assert!(html.contains("name=\"type\" value=\"fire\""));
    }

    #[test]
    fn error_page_escapes_message() {
        assert!(error_page("<oops>").contains("<p>&lt;oops&gt;</p>"));
    }
}
