//! Canned HTML used when no generated snippet is available.

use crate::{foundation::hash::pick_index, foundation::rng::SceneRng, scene::render::escape_html};

const WAVE: &str = r#"<!DOCTYPE html>
<html>
<head>
<style>
  body {
    margin: 0;
    background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
    display: flex;
    align-items: center;
    justify-content: center;
    height: 100vh;
    overflow: hidden;
  }
  .wave {
    font-size: 15vw;
    font-weight: 900;
    color: white;
    display: flex;
  }
  .wave span {
    animation: wave 1.5s ease-in-out infinite;
    display: inline-block;
  }
  @keyframes wave {
    0%, 100% { transform: translateY(0); }
    50% { transform: translateY(-30px); }
  }
</style>
</head>
<body>
  <div class="wave">
    <span style="animation-delay: 0s">M</span>
    <span style="animation-delay: 0.1s">A</span>
    <span style="animation-delay: 0.2s">R</span>
    <span style="animation-delay: 0.3s">K</span>
  </div>
</body>
</html>"#;

const PARTICLES: &str = r#"<!DOCTYPE html>
<html>
<head>
<style>
  body {
    margin: 0;
    background: #000;
    overflow: hidden;
  }
  canvas { display: block; }
  .text {
    position: absolute;
    top: 50%;
    left: 50%;
    transform: translate(-50%, -50%);
    font-size: 12vw;
    font-weight: 900;
    color: transparent;
    -webkit-text-stroke: 2px #fff;
  }
</style>
</head>
<body>
  <canvas id="canvas"></canvas>
  <div class="text">MARK</div>
  <script>
    const canvas = document.getElementById('canvas');
    const ctx = canvas.getContext('2d');
    canvas.width = window.innerWidth;
    canvas.height = window.innerHeight;

    const particles = [];
    for (let i = 0; i < 100; i++) {
      particles.push({
        x: Math.random() * canvas.width,
        y: Math.random() * canvas.height,
        vx: (Math.random() - 0.5) * 2,
        vy: (Math.random() - 0.5) * 2,
        size: Math.random() * 3 + 1
      });
    }

    function animate() {
      ctx.fillStyle = 'rgba(0,0,0,0.05)';
      ctx.fillRect(0, 0, canvas.width, canvas.height);
      ctx.fillStyle = '#fff';
      particles.forEach(p => {
        p.x += p.vx;
        p.y += p.vy;
        if (p.x < 0 || p.x > canvas.width) p.vx = -p.vx;
        if (p.y < 0 || p.y > canvas.height) p.vy = -p.vy;
        ctx.beginPath();
        ctx.arc(p.x, p.y, p.size, 0, Math.PI * 2);
        ctx.fill();
      });
      requestAnimationFrame(animate);
    }
    animate();
  </script>
</body>
</html>"#;

/// Snippets returned by the snippet endpoint when generation is unavailable.
pub const SNIPPETS: [&str; 2] = [WAVE, PARTICLES];

/// Pick a canned snippet: `seed_hash(seed) % len` with a seed, a random draw without one.
pub fn pick_snippet<R: SceneRng + ?Sized>(seed: Option<&str>, rng: &mut R) -> &'static str {
    let idx = pick_index(seed, SNIPPETS.len(), rng).unwrap_or(0);
    SNIPPETS[idx]
}

const NEON_HEAD: &str = r#"<!DOCTYPE html>
<html>
<head>
<style>
  body {
    margin: 0;
    background: #000;
    display: flex;
    flex-direction: column;
    align-items: center;
    justify-content: center;
    height: 100vh;
    overflow: hidden;
  }
  .mark {
    font-size: 20vw;
    font-weight: 900;
    color: #fff;
    text-shadow: 0 0 10px #ff00ff, 0 0 20px #ff00ff, 0 0 40px #ff00ff, 0 0 80px #ff00ff;
    animation: pulse 2s infinite;
  }
  .message {
    position: fixed;
    bottom: 2rem;
    left: 50%;
    transform: translateX(-50%);
    color: #fff;
    text-align: center;
    font-size: 1.5rem;
    max-width: 80%;
    animation: fadeIn 1s 2s both;
  }
  @keyframes pulse {
    0%, 100% { transform: scale(1); opacity: 1; }
    50% { transform: scale(1.1); opacity: 0.8; }
  }
  @keyframes fadeIn {
    from { opacity: 0; transform: translateX(-50%) translateY(20px); }
    to { opacity: 1; transform: translateX(-50%) translateY(0); }
  }
</style>
</head>
<body>
  <div class="mark">MARK</div>
"#;

const MATRIX: &str = r#"<!DOCTYPE html>
<html>
<head>
<style>
  body { margin: 0; background: #000; color: #0f0; font-family: monospace; overflow: hidden; }
  canvas { display: block; }
  .mark {
    position: absolute;
    top: 50%;
    left: 50%;
    transform: translate(-50%, -50%);
    font-size: 15vw;
    font-weight: bold;
    color: #fff;
    z-index: 10;
    text-shadow: 0 0 20px #0f0;
  }
</style>
</head>
<body>
  <canvas id="c"></canvas>
  <div class="mark">MARK</div>
  <script>
    const c = document.getElementById('c');
    const ctx = c.getContext('2d');
    c.width = window.innerWidth;
    c.height = window.innerHeight;
    const letters = 'MARK01'.split('');
    const fontSize = 16;
    const drops = Array(Math.floor(c.width / fontSize)).fill(1);
    function draw() {
      ctx.fillStyle = 'rgba(0, 0, 0, 0.05)';
      ctx.fillRect(0, 0, c.width, c.height);
      ctx.fillStyle = '#0f0';
      ctx.font = fontSize + 'px monospace';
      drops.forEach((y, i) => {
        const text = letters[Math.floor(Math.random() * letters.length)];
        ctx.fillText(text, i * fontSize, y * fontSize);
        if (y * fontSize > c.height && Math.random() > 0.975) drops[i] = 0;
        drops[i]++;
      });
    }
    setInterval(draw, 35);
  </script>
</body>
</html>"#;

const CUBE: &str = r#"<!DOCTYPE html>
<html>
<head>
<style>
  body {
    margin: 0;
    background: linear-gradient(45deg, #1a1a2e, #16213e);
    display: flex;
    align-items: center;
    justify-content: center;
    height: 100vh;
    perspective: 1000px;
  }
  .cube {
    width: 200px;
    height: 200px;
    position: relative;
    transform-style: preserve-3d;
    animation: rotate 4s infinite linear;
  }
  .face {
    position: absolute;
    width: 200px;
    height: 200px;
    display: flex;
    align-items: center;
    justify-content: center;
    font-size: 48px;
    font-weight: bold;
    color: #fff;
    border: 2px solid #fff;
    background: rgba(255, 255, 255, 0.1);
  }
  .front { transform: translateZ(100px); }
  .back { transform: rotateY(180deg) translateZ(100px); }
  .right { transform: rotateY(90deg) translateZ(100px); }
  .left { transform: rotateY(-90deg) translateZ(100px); }
  .top { transform: rotateX(90deg) translateZ(100px); }
  .bottom { transform: rotateX(-90deg) translateZ(100px); }
  @keyframes rotate {
    from { transform: rotateX(0) rotateY(0); }
    to { transform: rotateX(360deg) rotateY(360deg); }
  }
</style>
</head>
<body>
  <div class="cube">
    <div class="face front">M</div>
    <div class="face back">A</div>
    <div class="face right">R</div>
    <div class="face left">K</div>
    <div class="face top">!</div>
    <div class="face bottom">!</div>
  </div>
</body>
</html>"#;

/// Number of built-in scene defaults.
pub const SCENE_DEFAULT_COUNT: usize = 3;

/// Pulsating neon snippet showing `message` under the headline.
///
/// Used when the AI scene is rendered from bare props with no snippet attached.
pub fn neon_default(message: Option<&str>) -> String {
    let mut html = String::from(NEON_HEAD);
    if let Some(m) = message {
        html.push_str("  <div class=\"message\">");
        html.push_str(&escape_html(m));
        html.push_str("</div>\n");
    }
    html.push_str("</body>\n</html>");
    html
}

/// Built-in snippet for the AI scene when content is not fetched: neon (with `message`), matrix
/// rain or a rotating cube, chosen by `seed_hash(seed) % 3` or at random without a seed.
pub fn scene_default<R: SceneRng + ?Sized>(
    seed: Option<&str>,
    message: Option<&str>,
    rng: &mut R,
) -> String {
    match pick_index(seed, SCENE_DEFAULT_COUNT, rng).unwrap_or(0) {
        0 => neon_default(message),
        1 => MATRIX.to_string(),
        _ => CUBE.to_string(),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/snippet/fallback.rs"]
mod tests;
