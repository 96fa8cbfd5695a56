//! The demo page: one section per directive family, each wired to live
//! signals so the page works as soon as the Datastar bundle loads.

use chrono::TimeDelta;
use datastar_attrs::{
    attr, bind, class, computed, effect, encode, ignore, ignore_morph, init, json_signals, on,
    on_intersect, on_interval, on_signal_patch, on_signal_patch_filter, preserve_attr,
    reference, show, signals, style, text, Attr, Filter, Modifier, Result,
};
use maud::{html, Markup, PreEscaped, Render, DOCTYPE};
use serde_json::json;

use crate::config::DemoConfig;

const STYLESHEET: &str = r#"
body { font-family: system-ui, sans-serif; max-width: 960px; margin: 0 auto; padding: 20px; }
.demo-section { border: 2px solid #333; border-radius: 12px; padding: 20px; margin-bottom: 20px; }
.demo-box { border: 1px dashed #666; padding: 12px; margin: 10px 0; border-radius: 8px; }
.highlight { background: #ffeaa7; }
.bold { font-weight: bold; }
code { background: #f1f2f6; padding: 2px 4px; border-radius: 4px; }
"#;

/// Write an element whose `data-*` attributes come from the builders.
///
/// `fixed` holds literal, trusted attributes such as `type="text"`.
fn el(name: &str, fixed: &str, attrs: &[Attr], body: Markup) -> Markup {
    let mut out = open_tag(name, fixed, attrs);
    out.push_str(&body.into_string());
    out.push_str(&format!("</{name}>"));
    PreEscaped(out)
}

/// Void element variant of [`el`].
fn void(name: &str, fixed: &str, attrs: &[Attr]) -> Markup {
    PreEscaped(open_tag(name, fixed, attrs))
}

fn open_tag(name: &str, fixed: &str, attrs: &[Attr]) -> String {
    let mut out = format!("<{name}");
    if !fixed.is_empty() {
        out.push(' ');
        out.push_str(fixed);
    }
    for a in attrs {
        out.push(' ');
        a.render_to(&mut out);
    }
    out.push('>');
    out
}

fn section(title: &str, body: Markup) -> Markup {
    html! {
        section.demo-section {
            h2 { (title) }
            (body)
        }
    }
}

/// Show the attribute next to its effect.
fn shown(a: &Attr) -> Markup {
    html! { p { code { (a.to_string()) } } }
}

fn value(label: &str, expression: &str) -> Markup {
    html! { p { (label) ": " (el("span", "", &[text(expression)], html! {})) } }
}

fn counter_section() -> Markup {
    let increment = on("click", "$counter++", &[]);
    let terse_counter = json_signals(&Filter::new().include("/counter/"), &[Modifier::Terse]);
    section(
        "Signals",
        html! {
            div.demo-box {
                h3 { "Counter" }
                (el("p", "", &[text("$counter")], html! {}))
                (el("button", "", &[increment.clone()], html! { "+1" }))
                (el("button", "", &[on("click", "$counter--", &[])], html! { "-1" }))
                (el("button", "", &[on("click", "$counter = 0", &[])], html! { "Reset" }))
                (shown(&increment))
            }
            div.demo-box {
                h3 { "All signals" }
                (el("pre", "", &[json_signals(&Filter::new(), &[])], html! {}))
            }
            div.demo-box {
                h3 { "Counter only, terse" }
                (el("pre", "", &[terse_counter], html! {}))
            }
        },
    )
}

fn binding_section() -> Markup {
    section(
        "Binding",
        html! {
            div.demo-box {
                (void("input", r#"type="text" placeholder="Enter your name""#, &[bind("name")]))
                p { "Hello, " (el("span", "", &[text("$name")], html! {})) "!" }
            }
            div.demo-box {
                (el("select", "", &[bind("selected")], html! {
                    option value="a" { "Option A" }
                    option value="b" { "Option B" }
                }))
                (value("Selected", "$selected"))
            }
            div.demo-box {
                (el("textarea", r#"placeholder="Type a message...""#, &[bind("message")], html! {}))
                (value("Message length", "$message.length"))
            }
        },
    )
}

fn visibility_section() -> Markup {
    let highlight = class([("highlight", "$isHighlit"), ("bold", "$isHighlit")]);
    let limit = attr([("disabled", "$counter >= 10")]);
    let toggle = on("click", "$isHighlit = !$isHighlit", &[]);
    let bump = on("click", "$counter++", &[]);
    let colors = style([
        ("color", "$counter % 2 === 0 ? 'green' : 'crimson'"),
        ("fontSize", "(12 + $counter) + 'px'"),
    ]);
    html! {
        (section("Show and hide", html! {
            (el("button", "", &[on("click", "$show = !$show", &[])], html! { "Toggle" }))
            (el("div", r#"style="display: none""#, &[show("$show")], html! { "Now you see me." }))
        }))
        (section("Classes", html! {
            (el("button", "", &[toggle], html! { "Toggle highlight" }))
            (el("div", "", &[highlight.clone()], html! { "Highlight me" }))
            (shown(&highlight))
        }))
        (section("Attributes", html! {
            (el("button", "", &[bump, limit.clone()], html! { "Click up to ten times" }))
            (value("Clicks", "$counter"))
            (shown(&limit))
        }))
        (section("Styles", html! {
            (el("p", "", &[colors.clone()], html! { "Styled by the counter" }))
            (shown(&colors))
        }))
    }
}

fn reactivity_section() -> Result<Markup> {
    let total = computed([("total", "$price * $quantity")]);
    let delay = encode::duration(TimeDelta::milliseconds(500))?;
    let started = init(
        "$initializedAt = new Date().toLocaleTimeString()",
        &[Modifier::Delay, delay],
    );
    Ok(html! {
        (section("Computed signals", html! {
            (el("div", "", &[total.clone()], html! {
                (void("input", r#"type="number""#, &[bind("price")]))
                (void("input", r#"type="number""#, &[bind("quantity")]))
                (value("Total", "$total"))
            }))
            (shown(&total))
        }))
        (section("Effects", html! {
            (el("div", "", &[effect("console.log('Counter changed to:', $counter)")], html! {
                p { "Open the console, then change the counter." }
            }))
        }))
        (section("Initialization", html! {
            (el("div", "", &[started], html! {
                (value("Initialized at", "$initializedAt"))
            }))
        }))
        (section("Signal patches", html! {
            (el("div", "", &[
                on_signal_patch("$patches++", &[]),
                on_signal_patch_filter(&Filter::new().include("/^counter$/")),
            ], html! {
                (value("Counter patches", "$patches"))
            }))
        }))
    })
}

fn events_section() -> Result<Markup> {
    let debounce = encode::duration(TimeDelta::milliseconds(500))?;
    let second = encode::duration(TimeDelta::seconds(1))?;
    let half_visible = encode::threshold(0.5)?;
    let debounced = on(
        "input",
        "$typed = evt.target.value",
        &[Modifier::Debounce, debounce],
    );
    let tick = on_interval("$count++", &[Modifier::Duration, second]);
    let seen = on_intersect(
        "$intersected = true",
        &[Modifier::Once, Modifier::Threshold, half_visible],
    );
    let lit = class([("highlight", "$intersected")]);
    let enter = on("mouseenter", "$hovering = true", &[]);
    let leave = on("mouseleave", "$hovering = false", &[]);
    Ok(html! {
        (section("Events", html! {
            div.demo-box {
                (el("div", "", &[enter, leave], html! { "Hover me" }))
                (value("Hovering", "$hovering"))
            }
            div.demo-box {
                (void("input", r#"type="text" placeholder="Debounced""#, &[debounced.clone()]))
                (value("Debounced value", "$typed"))
                (shown(&debounced))
            }
        }))
        (section("Intervals", html! {
            (el("div", "", &[tick.clone()], html! { (value("Seconds elapsed", "$count")) }))
            (shown(&tick))
        }))
        (section("Intersection", html! {
            (el("div", "", &[seen.clone(), lit], html! { "Scroll me into view" }))
            (shown(&seen))
        }))
    })
}

fn dom_section() -> Markup {
    let paint = on("click", "$box.style.background = '#ffeb3b'", &[]);
    let skipped = on("click", "$counter++", &[]);
    html! {
        (section("References", html! {
            (el("div", "", &[reference("box", &[])], html! { "Referenced element" }))
            (el("button", "", &[paint], html! { "Paint it" }))
        }))
        (section("Preserve attributes", html! {
            (el("details", "open", &[preserve_attr(["open"])], html! {
                summary { "Stays open across morphs" }
                p { "Content" }
            }))
        }))
        (section("Ignore", html! {
            (el("div", "", &[ignore(&[])], html! {
                (el("button", "", &[skipped], html! { "Datastar skips this button" }))
            }))
            (el("div", "", &[ignore_morph()], html! { "Never morphed." }))
        }))
    }
}

/// Build the complete demo document.
pub fn build_page(config: &DemoConfig) -> Result<Markup> {
    let state = signals(
        &json!({
            "counter": 0,
            "count": 0,
            "patches": 0,
            "name": "",
            "selected": "a",
            "message": "",
            "typed": "",
            "show": false,
            "hovering": false,
            "isHighlit": false,
            "intersected": false,
            "initializedAt": "",
            "price": 10,
            "quantity": 1,
        }),
        &[],
    )?;
    let reactivity = reactivity_section()?;
    let events = events_section()?;

    Ok(html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (config.title) }
                script type="module" src=(config.script_url) {}
                style { (PreEscaped(STYLESHEET)) }
            }
            (el("body", "", &[state], html! {
                h1 { (config.title) }
                p { "Every attribute on this page was generated by datastar-attrs." }
                (counter_section())
                (binding_section())
                (visibility_section())
                (reactivity)
                (events)
                (dom_section())
            }))
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn config() -> DemoConfig {
        DemoConfig {
            output: PathBuf::from("docs/index.html"),
            title: "Demo".to_string(),
            script_url: "/datastar.js".to_string(),
        }
    }

    fn page() -> String {
        build_page(&config()).unwrap().into_string()
    }

    #[test]
    fn el_renders_builder_attributes() {
        let markup = el("button", "", &[on("click", "$n++", &[])], html! { "Go" });
        assert_eq!(
            markup.into_string(),
            r#"<button data-on:click="$n++">Go</button>"#
        );
    }

    #[test]
    fn void_keeps_fixed_attributes_first() {
        let markup = void("input", r#"type="text""#, &[bind("name")]);
        assert_eq!(markup.into_string(), r#"<input type="text" data-bind="name">"#);
    }

    #[test]
    fn void_without_fixed_attributes_has_single_spaces() {
        let markup = void("input", "", &[bind("name")]);
        assert_eq!(markup.into_string(), r#"<input data-bind="name">"#);
    }

    #[test]
    fn page_loads_configured_script_and_title() {
        let html = page();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(r#"src="/datastar.js""#));
        assert!(html.contains("<title>Demo</title>"));
    }

    #[test]
    fn page_declares_initial_signals_on_body() {
        assert!(page().contains("<body data-signals=\"{&quot;count&quot;:0,"));
    }

    #[test]
    fn page_uses_encoded_modifiers() {
        let html = page();
        assert!(html.contains("data-on:input__debounce.500ms="));
        assert!(html.contains("data-on-interval__duration.1000ms="));
        assert!(html.contains("data-on-intersect__once__threshold.50="));
        assert!(html.contains("data-init__delay.500ms="));
    }

    #[test]
    fn page_contains_bare_directives() {
        let html = page();
        assert!(html.contains("<pre data-json-signals></pre>"));
        assert!(html.contains("<div data-ignore>"));
        assert!(html.contains("<div data-ignore-morph>"));
    }

    #[test]
    fn page_is_deterministic() {
        assert_eq!(page(), page());
    }
}
