//! HTML renderers for each [`SceneKind`](crate::SceneKind).
//!
//! Every renderer is a pure function of [`SceneProps`]: the same props always produce the same
//! document. Where a scene needs scattered positions they are derived from the element index and
//! the seed hash, never from a random source.

use std::fmt::Write as _;

use crate::{
    foundation::hash::seed_hash,
    scene::kind::{SceneKind, SceneProps},
    snippet::fallback,
};

/// Escape text for use in HTML element content and double-quoted attributes.
pub fn escape_html(s: &str) -> String {
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

pub(crate) fn document(title: &str, style: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{title}</title>\n<style>\n\
         html, body {{ margin: 0; padding: 0; width: 100vw; height: 100vh; overflow: hidden; \
         font-family: system-ui, sans-serif; }}\n\
         .message {{ position: fixed; bottom: 4rem; left: 50%; transform: translateX(-50%); \
         color: #fff; text-align: center; font-size: 1.5rem; max-width: 80%; z-index: 20; \
         animation: message-in 1s 1.5s both; }}\n\
         @keyframes message-in {{ from {{ opacity: 0; }} to {{ opacity: 1; }} }}\n\
         {style}\n</style>\n</head>\n<body>\n{body}\n</body>\n</html>\n",
        title = escape_html(title),
    )
}

fn message_overlay(props: &SceneProps) -> String {
    match props.message_text() {
        Some(m) => format!("<div class=\"message\">{}</div>", escape_html(m)),
        None => String::new(),
    }
}

fn seed_offset(props: &SceneProps) -> u64 {
    props.seed.as_deref().map(seed_hash).unwrap_or(0)
}

/// Embed the attached snippet (or the neon default) in a sandboxed frame.
pub(crate) fn ai_markup(props: &SceneProps) -> String {
    let html = match props.snippet.as_deref() {
        Some(s) => s.to_string(),
        None => fallback::neon_default(props.message_text()),
    };
    let style = "body { background: #000; }\n\
                 iframe { width: 100vw; height: 100vh; border: 0; display: block; }";
    let body = format!(
        "<iframe sandbox=\"allow-scripts\" title=\"AI Generated Mark Scene\" srcdoc=\"{}\"></iframe>",
        escape_html(&html)
    );
    document("AI Generated", style, &body)
}

pub(crate) fn marquee(props: &SceneProps) -> String {
    let color = props.color_for(SceneKind::Marquee);
    let text = escape_html(&props.text);
    let style = format!(
        "body {{ background: #000; display: flex; align-items: center; }}\n\
         .track {{ white-space: nowrap; animation: scroll 10s linear infinite; }}\n\
         .track span {{ font-size: 20vw; font-weight: 900; letter-spacing: -0.05em; \
         color: {color}; text-shadow: 0 0 50px {color}; }}\n\
         @keyframes scroll {{ from {{ transform: translateX(100%); }} to {{ transform: translateX(-100%); }} }}"
    );
    let body = format!(
        "<div class=\"track\"><span>{text} {text} {text}</span></div>\n{}",
        message_overlay(props)
    );
    document("Marquee", &style, &body)
}

pub(crate) fn radar_ping(props: &SceneProps) -> String {
    let color = props.color_for(SceneKind::RadarPing);
    let style = format!(
        "body {{ background: #000; display: flex; align-items: center; justify-content: center; }}\n\
         .ring, .ping {{ position: absolute; width: 24rem; height: 24rem; border-radius: 50%; \
         border: 2px solid {color}; }}\n\
         .ring {{ opacity: 0.3; }}\n\
         .ping {{ border-width: 1px; animation: ping 3s ease-out infinite; }}\n\
         .sweep {{ position: absolute; width: 24rem; height: 2px; \
         background: linear-gradient(90deg, transparent, {color}); animation: spin 4s linear infinite; }}\n\
         .target {{ position: relative; z-index: 10; font-size: 6rem; font-weight: 900; color: {color}; \
         text-shadow: 0 0 10px {color}; animation: lock 0.5s 3s infinite; }}\n\
         .locked {{ position: absolute; top: 100%; left: 50%; transform: translateX(-50%); \
         margin-top: 1rem; color: #ef4444; font: 0.875rem monospace; white-space: nowrap; \
         opacity: 0; animation: reveal 0.2s 3s forwards; }}\n\
         @keyframes ping {{ 0% {{ transform: scale(1); opacity: 0.5; }} 50% {{ opacity: 0.2; }} \
         100% {{ transform: scale(3); opacity: 0; }} }}\n\
         @keyframes spin {{ to {{ transform: rotate(360deg); }} }}\n\
         @keyframes lock {{ 50% {{ transform: scale(1.1); text-shadow: 0 0 30px {color}, 0 0 60px {color}; }} }}\n\
         @keyframes reveal {{ to {{ opacity: 1; }} }}"
    );
    let mut body = String::from("<div class=\"ring\"></div>\n");
    for i in 0..3 {
        let _ = writeln!(body, "<div class=\"ping\" style=\"animation-delay: {i}s\"></div>");
    }
    let _ = write!(
        body,
        "<div class=\"sweep\"></div>\n<div class=\"target\">{}<div class=\"locked\">TARGET LOCKED</div></div>\n{}",
        escape_html(&props.text),
        message_overlay(props)
    );
    document("Radar Ping", &style, &body)
}

pub(crate) fn glitch(props: &SceneProps) -> String {
    let color = props.color_for(SceneKind::Glitch);
    let text = escape_html(&props.text);
    let style = format!(
        "body {{ background: #000; display: flex; align-items: center; justify-content: center; }}\n\
         .stack {{ position: relative; font-size: 12vw; font-weight: 900; \
         animation: jitter 0.2s infinite; }}\n\
         .red, .blue {{ position: absolute; left: 0; top: 0; color: transparent; filter: blur(0.5px); }}\n\
         .red {{ text-shadow: -2px 0 {color}; animation: shift 0.1s infinite alternate; }}\n\
         .blue {{ text-shadow: 2px 0 cyan; animation: shift 0.1s infinite alternate-reverse; }}\n\
         .main {{ color: #fff; text-shadow: 0 0 20px {color}; }}\n\
         .scan {{ position: absolute; inset: 0; pointer-events: none; \
         background: repeating-linear-gradient(0deg, transparent, transparent 2px, \
         rgba(255,255,255,0.03) 2px, rgba(255,255,255,0.03) 4px); }}\n\
         .bar {{ position: absolute; width: 100%; height: 4px; background: {color}; opacity: 0; \
         animation: bar 0.1s infinite; }}\n\
         @keyframes jitter {{ 0%, 100% {{ transform: translateX(0); }} 20% {{ transform: translateX(-5px) scaleX(1.02); }} \
         40% {{ transform: translateX(5px) scaleX(0.98); }} 60% {{ transform: translateX(-3px); }} 80% {{ transform: translateX(3px); }} }}\n\
         @keyframes shift {{ from {{ transform: translateX(-2px); }} to {{ transform: translateX(2px); }} }}\n\
         @keyframes bar {{ 50% {{ opacity: 0.8; transform: scaleX(1); }} 0%, 100% {{ transform: scaleX(0); }} }}"
    );
    let mut body = format!(
        "<div class=\"stack\"><span class=\"red\">{text}</span><span class=\"blue\">{text}</span>\
         <span class=\"main\">{text}</span><div class=\"scan\"></div></div>\n"
    );
    let offset = seed_offset(props);
    for i in 0..3u64 {
        let top = (offset + i * 37) % 100;
        let delay = ((offset + i * 13) % 50) as f64 / 10.0;
        let _ = writeln!(
            body,
            "<div class=\"bar\" style=\"top: {top}%; animation-delay: {delay}s\"></div>"
        );
    }
    body.push_str(&message_overlay(props));
    document("Glitch", &style, &body)
}

const EMOJI_SET: [&str; 12] = [
    "👀", "🎯", "⚡", "🔥", "💫", "✨", "🌟", "💥", "🚀", "🎪", "🎨", "🎭",
];

pub(crate) fn emoji_rain(props: &SceneProps) -> String {
    let style = "body { background: linear-gradient(to bottom, #581c87, #831843); }\n\
                 .drop { position: absolute; top: -100px; font-size: 2.25rem; \
                 animation-name: fall; animation-timing-function: linear; animation-iteration-count: infinite; }\n\
                 .center { position: absolute; inset: 0; display: flex; align-items: center; justify-content: center; }\n\
                 .bounce { color: #fff; font-size: 15vw; font-weight: 900; \
                 text-shadow: 0 0 50px rgba(255,255,255,0.5), 0 0 100px rgba(255,255,255,0.3); \
                 animation: bounce 2s ease-in-out infinite; }\n\
                 .floor { position: absolute; bottom: 0; left: 0; right: 0; height: 5rem; \
                 background: linear-gradient(to top, rgba(255,255,255,0.2), transparent); }\n\
                 @keyframes fall { from { transform: translateY(0) rotate(0); } to { transform: translateY(calc(100vh + 200px)) rotate(360deg); } }\n\
                 @keyframes bounce { 0%, 100% { transform: translateY(0) rotate(-2deg); } 50% { transform: translateY(-20px) rotate(2deg); } }";
    let offset = seed_offset(props) as usize;
    let mut body = String::new();
    for i in 0..30usize {
        let emoji = EMOJI_SET[(i + offset) % EMOJI_SET.len()];
        let x = (i * 31) % 100;
        let delay = ((i * 13) % 50) as f64 / 10.0;
        let duration = 3.0 + ((i * 7) % 20) as f64 / 10.0;
        let _ = writeln!(
            body,
            "<div class=\"drop\" style=\"left: {x}%; animation-delay: {delay}s; animation-duration: {duration}s\">{emoji}</div>"
        );
    }
    let _ = write!(
        body,
        "<div class=\"center\"><div class=\"bounce\">{}</div></div>\n<div class=\"floor\"></div>\n{}",
        escape_html(&props.text),
        message_overlay(props)
    );
    document("Emoji Rain", style, &body)
}

pub(crate) fn spotlight(props: &SceneProps) -> String {
    let color = props.color_for(SceneKind::Spotlight);
    let style = format!(
        "body {{ background: #000; cursor: none; }}\n\
         .center {{ position: absolute; inset: 0; display: flex; align-items: center; justify-content: center; }}\n\
         .outline {{ font-size: 18vw; font-weight: 900; color: transparent; -webkit-text-stroke: 2px #fff; \
         user-select: none; animation: breathe 4s ease-in-out infinite; }}\n\
         .light {{ position: absolute; width: 300px; height: 300px; pointer-events: none; mix-blend-mode: screen; \
         background: radial-gradient(circle, {color}88 0%, {color}44 40%, transparent 70%); \
         left: calc(50vw - 150px); top: calc(50vh - 150px); transition: left 0.15s, top 0.15s; }}\n\
         .hint {{ position: absolute; top: 2rem; left: 50%; transform: translateX(-50%); \
         color: rgba(255,255,255,0.4); font-size: 0.875rem; }}\n\
         @keyframes breathe {{ 50% {{ transform: scale(1.02); }} }}"
    );
    let body = format!(
        "<div class=\"center\"><span class=\"outline\">{}</span></div>\n\
         <div class=\"light\" id=\"light\"></div>\n\
         <div class=\"hint\">Move cursor to reveal</div>\n{}\n\
         <script>\n\
         const l = document.getElementById('light');\n\
         const move = (x, y) => {{ l.style.left = (x - 150) + 'px'; l.style.top = (y - 150) + 'px'; }};\n\
         window.addEventListener('mousemove', e => move(e.clientX, e.clientY));\n\
         window.addEventListener('touchmove', e => move(e.touches[0].clientX, e.touches[0].clientY));\n\
         </script>",
        escape_html(&props.text),
        message_overlay(props)
    );
    document("Spotlight", &style, &body)
}

/// Letters of the loading animation.
pub const LOADING_LETTERS: &str = "MMMAAAAARRK!!!";

/// Initial rotation (degrees) of the loading letter at `index`.
pub fn loading_rotation(index: usize) -> i64 {
    ((index as i64 * 47) % 360) - 180
}

/// Placeholder shown while no scene could be resolved.
pub fn loading_scene() -> String {
    let style = "body { background: #000; display: flex; align-items: center; justify-content: center; }\n\
                 .letters { display: flex; flex-wrap: wrap; justify-content: center; max-width: 56rem; }\n\
                 .letters span { color: #fff; font-weight: 700; font-size: 6rem; opacity: 0; \
                 animation: pop 2.5s ease-in-out infinite; }\n\
                 .flash { position: absolute; inset: 0; background: #fff; mix-blend-mode: difference; \
                 opacity: 0; animation: flash 1s ease-in-out infinite; }\n\
                 @keyframes pop { 0% { opacity: 0; transform: scale(0) rotate(var(--r)); } \
                 30% { opacity: 1; transform: scale(1.2) rotate(0); } 60% { opacity: 1; transform: scale(1); } \
                 80%, 100% { opacity: 0; transform: scale(0) rotate(360deg); } }\n\
                 @keyframes flash { 50% { opacity: 0.1; } }";
    let mut body = String::from("<div class=\"letters\">");
    for (i, letter) in LOADING_LETTERS.chars().enumerate() {
        let _ = write!(
            body,
            "<span style=\"--r: {}deg; animation-delay: {:.2}s; text-shadow: 0 0 {}px rgba(255,255,255,0.8)\">{letter}</span>",
            loading_rotation(i),
            i as f64 * 0.05,
            20 + i * 2,
        );
    }
    body.push_str("</div>\n<div class=\"flash\"></div>");
    document("Loading", style, &body)
}

#[cfg(test)]
#[path = "../../tests/unit/scene/render.rs"]
mod tests;
