//! Blog pages

use cafe_core::Blog;
use std::fmt::Write;

use super::{escape, layout, path_segment};

pub fn list(blogs: &[Blog]) -> String {
    let mut body = String::from("<h1>Blog</h1>\n");
    if blogs.is_empty() {
        body.push_str("<p>No posts yet.</p>\n");
    }
    for blog in blogs {
        let _ = writeln!(
            body,
            r#"<article><h2><a href="/blogs/{id}">{title}</a></h2></article>"#,
            id = path_segment(&blog.id.to_string()),
            title = escape(blog.title()),
        );
    }
    layout("Blog", &body)
}

pub fn post(blog: &Blog) -> String {
    let mut body = String::new();
    let _ = writeln!(body, "<article>\n<h1>{}</h1>", escape(blog.title()));
    if let Some(author) = blog.text("author") {
        let _ = writeln!(body, r#"<p class="author">{}</p>"#, escape(author));
    }
    if let Some(date) = blog.text("date") {
        let _ = writeln!(body, r#"<p class="date">{}</p>"#, escape(date));
    }
    if let Some(image) = blog.image() {
        let _ = writeln!(body, r#"<img src="{}" alt="">"#, escape(image));
    }
    for paragraph in blog.content().split("\n\n").filter(|p| !p.trim().is_empty()) {
        let _ = writeln!(body, "<p>{}</p>", escape(paragraph));
    }
    body.push_str("</article>\n<a href=\"/blogs\">All posts</a>\n");
    layout(blog.title(), &body)
}
