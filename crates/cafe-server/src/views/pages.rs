//! Static pages

use cafe_core::CityCatalog;
use std::fmt::Write;

use super::{escape, layout};

/// Home page: one tile per catalog city
pub fn index(catalog: &CityCatalog) -> String {
    let mut body = String::from("<h1>Find a cafe</h1>\n<section class=\"cities\">\n");
    for city in catalog.entries() {
        let _ = writeln!(
            body,
            r#"<a class="city" href="/city/{slug}"><img src="{image}" alt="{name}"><span>{name}</span></a>"#,
            slug = escape(&city.name),
            image = escape(&city.image),
            name = escape(&city.display_name()),
        );
    }
    body.push_str("</section>\n");
    layout("Home", &body)
}

pub fn about() -> String {
    layout(
        "About",
        "<h1>About</h1>\n<p>A small guide to good coffee, city by city.</p>\n",
    )
}

pub fn contact() -> String {
    layout(
        "Contact",
        "<h1>Contact</h1>\n<p>Know a cafe we are missing? Add it, or write to us.</p>\n",
    )
}

pub fn privacy() -> String {
    layout(
        "Privacy",
        "<h1>Privacy</h1>\n<p>This site stores only the cafe details you submit.</p>\n",
    )
}
