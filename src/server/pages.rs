//! Server-rendered pages: the message config form, the generated link, and the chrome injected
//! into scene documents.

use std::fmt::Write as _;

use url::form_urlencoded;

use crate::{
    messages::{CUSTOM_OPTION, MESSAGE_OPTIONS},
    orchestrator::{ResolvedScene, SceneRequest},
    scene::registry::SceneEntry,
    scene::render::{document, escape_html},
};

const PAGE_STYLE: &str = "html { height: auto; overflow: auto; }\n\
    body { min-height: 100vh; height: auto; overflow: auto; color: #fff; \
    background: linear-gradient(135deg, #312e81, #581c87, #831843); display: flex; \
    align-items: center; justify-content: center; }\n\
    main { max-width: 42rem; width: 100%; padding: 2rem; }\n\
    h1 { font-size: 3.5rem; font-weight: 900; text-align: center; text-shadow: 0 0 30px rgba(255,255,255,0.6); }\n\
    p.lead { text-align: center; color: #e9d5ff; font-size: 1.25rem; }\n\
    label.option { display: flex; gap: 1rem; align-items: center; padding: 1.25rem; margin: 1rem 0; \
    border: 2px solid rgba(255,255,255,0.2); border-radius: 1rem; background: rgba(255,255,255,0.05); cursor: pointer; }\n\
    label.option small { display: block; color: #e9d5ff; margin-top: 0.5rem; }\n\
    .emoji { font-size: 2rem; }\n\
    textarea { width: 100%; box-sizing: border-box; padding: 1rem; border-radius: 1rem; \
    border: 2px solid rgba(255,255,255,0.2); background: rgba(255,255,255,0.1); color: #fff; }\n\
    button, a.button { display: inline-block; padding: 0.9rem 2.5rem; border: 0; border-radius: 999px; \
    background: linear-gradient(90deg, #ec4899, #9333ea); color: #fff; font-weight: 700; \
    font-size: 1.1rem; text-decoration: none; cursor: pointer; }\n\
    .center { text-align: center; margin-top: 2rem; }\n\
    .link { padding: 1.25rem; background: rgba(0,0,0,0.2); border-radius: 0.5rem; \
    font-family: monospace; word-break: break-all; }";

/// The message config form. Submits to `/link`.
pub(crate) fn config_page() -> String {
    let mut body = String::from(
        "<main>\n<h1>MARK CONFIG</h1>\n\
         <p class=\"lead\">What do you need Mark to do that he isn&#39;t doing?</p>\n\
         <form action=\"/link\" method=\"get\">\n",
    );
    for opt in MESSAGE_OPTIONS {
        let detail = if opt.id == CUSTOM_OPTION {
            String::new()
        } else {
            format!("<small>{}</small>", escape_html(opt.message))
        };
        let _ = writeln!(
            body,
            "<label class=\"option\"><input type=\"radio\" name=\"option\" value=\"{id}\">\
             <span class=\"emoji\">{emoji}</span><span><strong>{label}</strong>{detail}</span></label>",
            id = opt.id,
            emoji = opt.emoji,
            label = escape_html(opt.label),
        );
    }
    body.push_str(
        "<textarea name=\"custom\" rows=\"4\" \
         placeholder=\"Tell Mark exactly what you need him to do...\"></textarea>\n\
         <div class=\"center\"><button type=\"submit\">Generate Mark Link! 🚀</button></div>\n\
         </form>\n</main>",
    );
    document("MARK CONFIG", PAGE_STYLE, &body)
}

/// Page showing a generated share link.
pub(crate) fn link_page(url: &str) -> String {
    let url = escape_html(url);
    let body = format!(
        "<main>\n<h1>Your Mark Link</h1>\n<div class=\"link\">{url}</div>\n\
         <div class=\"center\"><a class=\"button\" href=\"{url}\">Open it</a> \
         <a class=\"button\" href=\"/\">Back</a></div>\n</main>"
    );
    document("Your Mark Link", PAGE_STYLE, &body)
}

/// Page shown when no link could be built.
pub(crate) fn link_error_page(reason: &str) -> String {
    let body = format!(
        "<main>\n<h1>No link</h1>\n<p class=\"lead\">{}</p>\n\
         <div class=\"center\"><a class=\"button\" href=\"/\">Back</a></div>\n</main>",
        escape_html(reason)
    );
    document("No link", PAGE_STYLE, &body)
}

/// `/scenes` query string for a footer link.
///
/// Selecting a scene keeps the seed and message; the random link (`scene == None`) drops the
/// seed. The debug flag survives both.
pub(crate) fn scenes_href(req: &SceneRequest, scene: Option<&str>) -> String {
    let mut q = form_urlencoded::Serializer::new(String::new());
    if let Some(id) = scene {
        q.append_pair("scene", id);
        if let Some(seed) = req.seed() {
            q.append_pair("seed", seed);
        }
    }
    if let Some(message) = req.message() {
        q.append_pair("message", message);
    }
    if req.debug_enabled() {
        q.append_pair("debug", "true");
    }
    let q = q.finish();
    if q.is_empty() {
        "/scenes".to_string()
    } else {
        format!("/scenes?{q}")
    }
}

const FOOTER_STYLE: &str = "<style>\n\
    #scene-footer summary { position: fixed; bottom: 1rem; right: 1rem; z-index: 50; \
    list-style: none; cursor: pointer; color: #fff; padding: 0.5rem 1rem; border-radius: 999px; \
    background: rgba(255,255,255,0.1); backdrop-filter: blur(4px); font: 14px system-ui, sans-serif; }\n\
    #scene-footer .panel { position: fixed; bottom: 5rem; right: 1rem; z-index: 40; max-width: 24rem; \
    max-height: 60vh; overflow-y: auto; padding: 1rem; border-radius: 0.5rem; \
    background: rgba(0,0,0,0.9); font: 14px system-ui, sans-serif; }\n\
    #scene-footer a { display: block; padding: 0.5rem 0.75rem; margin: 0.25rem 0; border-radius: 0.25rem; \
    color: rgba(255,255,255,0.8); background: rgba(255,255,255,0.05); text-decoration: none; }\n\
    #scene-footer a.current { color: #fff; background: rgba(255,255,255,0.2); }\n\
    #scene-footer .actions { display: flex; gap: 0.5rem; }\n\
    #scene-footer .actions a { flex: 1; text-align: center; }\n\
    #debug-panel { color: rgba(255,255,255,0.6); font: 12px monospace; margin-bottom: 0.75rem; }\n\
    </style>";

/// Footer with scene list, share and random links, plus the debug panel when enabled.
pub(crate) fn scene_footer(
    scenes: &[SceneEntry],
    req: &SceneRequest,
    resolved: &ResolvedScene,
) -> String {
    let current = resolved.scene.as_ref().map(|s| s.id.as_str());
    let mut out = String::from(FOOTER_STYLE);
    out.push_str("\n<details id=\"scene-footer\"><summary>Scenes ☰</summary><div class=\"panel\">\n");

    if req.debug_enabled() {
        let _ = write!(
            out,
            "<div id=\"debug-panel\">Current: {}<br>Load time: {}ms",
            escape_html(current.unwrap_or("loading")),
            resolved.load_time.as_millis()
        );
        if resolved.fallback {
            out.push_str("<br>Fallback: true");
        }
        if let Some(err) = &resolved.error {
            let _ = write!(out, "<br>Error: {}", escape_html(err));
        }
        out.push_str("</div>\n");
    }

    let _ = writeln!(
        out,
        "<div class=\"actions\"><a href=\"{}\">Share</a><a href=\"{}\">Random</a></div>",
        escape_html(&scenes_href(req, current)),
        escape_html(&scenes_href(req, None)),
    );

    for scene in scenes {
        let class = if Some(scene.id.as_str()) == current {
            " class=\"current\""
        } else {
            ""
        };
        let _ = writeln!(
            out,
            "<a{class} href=\"{}\">{}{}</a>",
            escape_html(&scenes_href(req, Some(&scene.id))),
            escape_html(&scene.name),
            if scene.requires_api { " 🤖" } else { "" },
        );
    }

    if req.debug_enabled() {
        out.push_str("<a href=\"/scenes\">Disable debug mode</a>\n");
    }
    out.push_str("</div></details>");
    out
}

/// Insert `chrome` before the document's closing `</body>`, or append it when there is none.
pub(crate) fn inject_before_body_end(document: &str, chrome: &str) -> String {
    match document.rfind("</body>") {
        Some(at) => {
            let mut out = String::with_capacity(document.len() + chrome.len() + 1);
            out.push_str(&document[..at]);
            out.push_str(chrome);
            out.push('\n');
            out.push_str(&document[at..]);
            out
        }
        None => format!("{document}{chrome}"),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/server/pages.rs"]
mod tests;
