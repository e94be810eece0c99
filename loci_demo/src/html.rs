// Copyright 2025 the Loci Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A single-page HTML report of SVG sections.

/// One titled figure in the report.
#[derive(Debug)]
pub(crate) struct HtmlSection {
    pub(crate) title: String,
    pub(crate) caption: String,
    pub(crate) svg: String,
}

pub(crate) fn render_report(title: &str, sections: &[HtmlSection]) -> String {
    let mut out = String::new();
    out.push_str("<!doctype html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    out.push_str(&format!("<title>{}</title>\n", escape_html(title)));
    out.push_str(
        "<style>\
         body{font-family:sans-serif;margin:24px;background:#f4f4f4}\
         .grid{display:flex;flex-wrap:wrap;gap:24px}\
         figure{margin:0;background:#fff;padding:12px;border-radius:6px}\
         figcaption{font-size:12px;color:#444;margin-top:6px}\
         </style>\n",
    );
    out.push_str("</head>\n<body>\n");
    out.push_str(&format!("<h1>{}</h1>\n", escape_html(title)));
    out.push_str("<div class=\"grid\">\n");
    for section in sections {
        out.push_str("<figure>\n");
        out.push_str(&format!("<h2>{}</h2>\n", escape_html(&section.title)));
        out.push_str(&section.svg);
        out.push_str(&format!(
            "<figcaption>{}</figcaption>\n",
            escape_html(&section.caption)
        ));
        out.push_str("</figure>\n");
    }
    out.push_str("</div>\n</body>\n</html>\n");
    out
}

fn escape_html(s: &str) -> String {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sections_are_embedded_in_order() {
        let sections = [
            HtmlSection {
                title: "a".to_string(),
                caption: "first".to_string(),
                svg: "<svg id=\"one\"/>".to_string(),
            },
            HtmlSection {
                title: "b & c".to_string(),
                caption: "second".to_string(),
                svg: "<svg id=\"two\"/>".to_string(),
            },
        ];
        let html = render_report("Report", &sections);
        let one = html.find("id=\"one\"").expect("first svg");
        let two = html.find("id=\"two\"").expect("second svg");
        assert!(one < two);
        assert!(html.contains("<h2>b &amp; c</h2>\n"));
        assert!(html.contains("<figcaption>second</figcaption>\n"));
        assert!(html.contains("<title>Report</title>\n"));
    }
}
