//! Cafe listing, details, and the add/edit forms

use cafe_core::{display_city, Cafe};
use std::fmt::Write;

use super::{escape, external_link, layout, path_segment};

pub fn list(city: &str, city_image: &str, cafes: &[&Cafe]) -> String {
    let name = display_city(city);
    let mut body = String::new();
    let _ = writeln!(
        body,
        r#"<section class="hero" style="background-image: url('{image}')"><h1>Cafes in {name}</h1></section>"#,
        image = escape(city_image),
        name = escape(&name),
    );

    if cafes.is_empty() {
        body.push_str("<p>No cafes listed here yet. <a href=\"/add-cafe\">Add the first one</a>.</p>\n");
    }

    body.push_str("<section class=\"cafes\">\n");
    for cafe in cafes {
        let _ = writeln!(
            body,
            r#"<article class="cafe"><a href="/cafe-details/{id}">{image}<h2>{cafe_name}</h2></a><p>{location}</p><p class="rating">{rating}</p></article>"#,
            id = path_segment(&cafe.id.to_string()),
            image = thumbnail(cafe),
            cafe_name = escape(&cafe.name),
            location = escape(&cafe.location),
            rating = escape(&cafe.rating.to_string()),
        );
    }
    body.push_str("</section>\n");

    layout(&format!("Cafes in {}", name), &body)
}

fn thumbnail(cafe: &Cafe) -> String {
    if cafe.image.is_empty() {
        String::new()
    } else {
        format!(r#"<img src="{}" alt="{}">"#, escape(&cafe.image), escape(&cafe.name))
    }
}

pub fn details(cafe: &Cafe) -> String {
    let mut body = String::new();
    let _ = writeln!(body, "<article class=\"cafe-details\">\n<h1>{}</h1>", escape(&cafe.name));
    body.push_str(&thumbnail(cafe));
    body.push_str("\n<dl>\n");
    for (label, value) in [
        ("Location", cafe.location.as_str()),
        ("City", cafe.city.as_str()),
        ("Opening hours", cafe.opening_hours.as_str()),
        ("Contact", cafe.contact.as_str()),
    ] {
        let _ = writeln!(body, "<dt>{}</dt><dd>{}</dd>", label, escape(value));
    }
    let _ = writeln!(
        body,
        "<dt>Rating</dt><dd>{}</dd>",
        escape(&cafe.rating.to_string())
    );
    if !cafe.website.is_empty() {
        let _ = writeln!(
            body,
            "<dt>Website</dt><dd>{}</dd>",
            external_link(&cafe.website, &cafe.website)
        );
    }
    if !cafe.google_map.is_empty() {
        let _ = writeln!(
            body,
            "<dt>Map</dt><dd>{}</dd>",
            external_link(&cafe.google_map, "Open in Google Maps")
        );
    }
    body.push_str("</dl>\n");
    let _ = writeln!(body, "<p class=\"review\">{}</p>\n</article>", escape(&cafe.review));

    let _ = writeln!(
        body,
        r#"<a href="/edit-cafe/{id}">Edit</a>
<form method="POST" action="/delete-cafe/{id}?_method=DELETE"><button type="submit">Delete</button></form>
<a href="/city/{city}">Back to {city_name}</a>"#,
        id = path_segment(&cafe.id.to_string()),
        city = path_segment(&cafe.city_key()),
        city_name = escape(&display_city(&cafe.city)),
    );

    layout(&cafe.name, &body)
}

pub fn add_form() -> String {
    let body = format!(
        "<h1>Add a cafe</h1>\n{}",
        form("/add-cafe", None, "Add cafe")
    );
    layout("Add a cafe", &body)
}

pub fn edit_form(cafe: &Cafe) -> String {
    let action = format!(
        "/edit-cafe/{}?_method=PATCH",
        path_segment(&cafe.id.to_string())
    );
    let body = format!(
        "<h1>Edit {}</h1>\n{}",
        escape(&cafe.name),
        form(&action, Some(cafe), "Save changes")
    );
    layout(&format!("Edit {}", cafe.name), &body)
}

fn form(action: &str, cafe: Option<&Cafe>, submit: &str) -> String {
    let rating = cafe.map(|c| c.rating.to_string()).unwrap_or_default();
    let value = |f: fn(&Cafe) -> &str| cafe.map(f).unwrap_or_default();

    let inputs = [
        ("name", "Name", value(|c| c.name.as_str())),
        ("location", "Location", value(|c| c.location.as_str())),
        ("city", "City", value(|c| c.city.as_str())),
        ("rating", "Rating", rating.as_str()),
        ("openingHours", "Opening hours", value(|c| c.opening_hours.as_str())),
        ("contact", "Contact", value(|c| c.contact.as_str())),
        ("website", "Website", value(|c| c.website.as_str())),
        ("googleMap", "Google Maps link", value(|c| c.google_map.as_str())),
    ];

    let mut html = String::new();
    let _ = writeln!(
        html,
        r#"<form method="POST" action="{}" enctype="multipart/form-data">"#,
        escape(action)
    );
    for (name, label, current) in inputs {
        let _ = writeln!(
            html,
            r#"<label for="{name}">{label}</label><input type="text" id="{name}" name="{name}" value="{current}">"#,
            name = name,
            label = label,
            current = escape(current),
        );
    }
    let _ = writeln!(
        html,
        r#"<label for="review">Review</label><textarea id="review" name="review">{}</textarea>"#,
        escape(value(|c| c.review.as_str()))
    );
    html.push_str(
        "<label for=\"image\">Image</label><input type=\"file\" id=\"image\" name=\"image\" accept=\"image/*\">\n",
    );
    let _ = writeln!(html, "<button type=\"submit\">{}</button>\n</form>", escape(submit));
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use cafe_core::CafeFields;

    fn cafe() -> Cafe {
        let mut cafe = Cafe::from_fields(
            7,
            CafeFields {
                name: "Café <Noir>".to_string(),
                city: "Paris".to_string(),
                opening_hours: "8-18".to_string(),
                ..Default::default()
            },
            Some("/uploads/noir.jpg".to_string()),
        );
        cafe.google_map = "https://maps.example/noir".into();
        cafe
    }

    #[test]
    fn test_list_links_each_cafe() {
        let cafe = cafe();
        let html = list("paris", "/images/cities/paris.jpg", &[&cafe]);
        assert!(html.contains("Cafes in Paris"));
        assert!(html.contains(r#"href="/cafe-details/7""#));
        assert!(html.contains("Café &lt;Noir&gt;"));
        assert!(html.contains("/images/cities/paris.jpg"));
    }

    #[test]
    fn test_empty_list_invites_adding() {
        let html = list("lisbon", "/images/default-city.jpg", &[]);
        assert!(html.contains("Add the first one"));
    }

    #[test]
    fn test_details_has_edit_and_delete() {
        let html = details(&cafe());
        assert!(html.contains(r#"href="/edit-cafe/7""#));
        assert!(html.contains(r#"action="/delete-cafe/7?_method=DELETE""#));
        assert!(html.contains("https://maps.example/noir"));
        assert!(html.contains("8-18"));
    }

    #[test]
    fn test_details_links_only_web_urls() {
        let mut cafe = cafe();
        cafe.website = "javascript:alert(document.cookie)".into();
        cafe.google_map = "https://maps.example/noir?q=1&z=2".into();
        let html = details(&cafe);

        assert!(!html.contains(r#"href="javascript:"#));
        assert!(html.contains("<dd>javascript:alert(document.cookie)</dd>"));
        assert!(html.contains(r#"href="https://maps.example/noir?q=1&amp;z=2""#));
    }

    #[test]
    fn test_back_link_encodes_city() {
        let mut cafe = cafe();
        cafe.city = "new york?x=\"1\"".into();
        let html = details(&cafe);
        assert!(html.contains(r#"href="/city/new%20york%3Fx%3D%221%22""#));
        assert!(html.contains("Back to New York?x=&quot;1&quot;"));
    }

    #[test]
    fn test_edit_form_prefills_values() {
        let html = edit_form(&cafe());
        assert!(html.contains(r#"action="/edit-cafe/7?_method=PATCH""#));
        assert!(html.contains(r#"name="openingHours" value="8-18""#));
        assert!(html.contains(r#"name="city" value="paris""#));
        assert!(html.contains(r#"enctype="multipart/form-data""#));
    }

    #[test]
    fn test_add_form_is_blank() {
        let html = add_form();
        assert!(html.contains(r#"action="/add-cafe""#));
        assert!(html.contains(r#"name="name" value="""#));
    }
}
