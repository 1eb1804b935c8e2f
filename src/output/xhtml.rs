//! XHTML page plus stylesheet for the animated compass strip.
//!
//! `index.xhtml` carries the compass graduations and one `<figure>` per
//! light; `lights.css` positions them and drives the flash animations.
//! Both expect a hand-written `main.css` alongside for the animation
//! keyframes and base styling.

use super::{Artifact, Renderer};
use crate::error::Result;
use crate::geo::format_location;
use crate::layout::{CompassTick, Layout, LayoutEntry, TickKind};

const XHTML_HEAD: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<html xmlns="http://www.w3.org/1999/xhtml">
<head>
    <link href="main.css" rel="stylesheet"/>
    <link href="lights.css" rel="stylesheet"/>
</head>
<body>
"#;

const XHTML_TAIL: &str = "</body>\n</html>\n";

/// Pixels between a tick mark and its label
const TICK_LABEL_GAP_PX: f64 = 2.0;

pub struct XhtmlRenderer;

impl Renderer for XhtmlRenderer {
    fn render(&self, layout: &Layout) -> Result<Vec<Artifact>> {
        let mut html = String::from(XHTML_HEAD);
        let mut css = String::new();

        html.push_str("<div>\n");
        for tick in &layout.ticks {
            let (tick_html, tick_css) = render_tick(tick);
            html.push_str(&tick_html);
            css.push_str(&tick_css);
        }
        html.push_str("</div>\n");

        html.push_str("<div>\n");
        for entry in &layout.entries {
            let (light_html, light_css) = render_light(entry);
            html.push_str(&light_html);
            css.push_str(&light_css);
        }
        html.push_str("</div>\n");

        html.push_str(XHTML_TAIL);

        Ok(vec![
            Artifact {
                file_name: "index.xhtml",
                contents: html,
            },
            Artifact {
                file_name: "lights.css",
                contents: css,
            },
        ])
    }
}

/// Markup and style for one graduation, keyed by its pixel offset
fn render_tick(tick: &CompassTick) -> (String, String) {
    let class = match tick.kind {
        TickKind::Major => "compass1",
        TickKind::Minor => "compass0",
        TickKind::Plain => "compass",
    };
    let label = tick.label.as_deref().unwrap_or(" ");
    let p = tick.pixel_x.round() as i64;

    let html = format!(
        "<span class=\"{class}\" id=\"comp_{p:03}\"/>\n\
         <span class=\"compass_label\" id=\"compl_{p:03}\">{label}</span>\n"
    );
    let css = format!(
        "#comp_{p:03} {{ left: {:.0}px; }}\n#compl_{p:03} {{ left: {:.0}px; }}\n",
        tick.pixel_x,
        tick.pixel_x + TICK_LABEL_GAP_PX
    );
    (html, css)
}

fn render_light(entry: &LayoutEntry) -> (String, String) {
    let light = &entry.light;
    let n = entry.slot.light_index + 1;

    let quoted_label = if light.label.is_empty() {
        String::new()
    } else {
        format!(" “{}”", escape_xml(&light.label))
    };
    let (tag, href) = if light.link.is_empty() {
        ("span", String::new())
    } else {
        ("a", format!(" href=\"{}\"", escape_xml(&light.link)))
    };

    let html = format!(
        r#"<figure id="label_{n:03}">
    <{tag} class="light" id="light_{n:03}"{href}/>
    <figcaption>
        <span class="lightinline" id="lightl_{n:03}"/><br/>
        {name}{quoted_label}<br/>
        <i>{style} {color} {rate:.1}s {height:3}ft {visibility}NMi</i><br/>
        {location}<br/>
        {miles:.1} miles ({nmi:.1} NMi)<br/>
        azimuth: &#x2605; {true_abs:.1}° ({bearing:+.1}°) ({true_mils:.0} mils); &#x1F9ED; {mag_abs:.1}° ({mag_mils:.0} mils)<br/>
    </figcaption>
</figure>
"#,
        name = escape_xml(&light.name),
        style = escape_xml(&light.style),
        color = color_initial(&light.color),
        rate = light.rate_seconds,
        height = light.height_feet,
        visibility = light.visibility_nmi,
        location = format_location(light.location.as_ref()),
        miles = light.distance_miles,
        nmi = light.distance_nmi,
        true_abs = light.true_abs_deg,
        bearing = light.bearing_true,
        true_mils = light.true_mils,
        mag_abs = light.mag_abs_deg,
        mag_mils = light.mag_mils,
    );

    let animation = if light.style.is_empty() {
        "none"
    } else {
        light.style.as_str()
    };
    let color = if light.color.is_empty() {
        "darkblue"
    } else {
        light.color.as_str()
    };
    let rate = light.rate_seconds;
    let delay = entry.slot.animation_delay_millis;

    let css = format!(
        "#label_{n:03} {{ left: {x:4.0}px; }}\n\
         #light_{n:03} {{ animation-name: {animation}; background-color: {color}; animation-duration: {rate:.2}s; animation-delay: {delay}ms; }}\n\
         #lightl_{n:03} {{ animation-name: {animation}; background-color: {color}; animation-duration: {rate:.2}s; animation-delay: {delay}ms; }}\n",
        x = entry.slot.pixel_x,
    );
    (html, css)
}

/// Upper-cased first letter of a colour name (`red` -> `R`)
fn color_initial(color: &str) -> String {
    color
        .chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_default()
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
