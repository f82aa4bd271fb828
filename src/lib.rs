//! marksite is a small novelty microsite that shouts "MARK" at people.
//!
//! A config page turns a canned (or custom) message into a share link; the scenes page renders
//! one of several full-screen animated scenes chosen by weighted random selection:
//!
//! - Build a [`SceneRegistry`] once at startup
//! - Resolve each request through an [`Orchestrator`]
//! - Serve everything with [`router`]
//!
//! One scene embeds HTML generated by a hosted language model. Without a credential, or when the
//! upstream call fails, canned content is chosen deterministically from the request seed via
//! [`seed_hash`].
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

pub(crate) mod artwork;
pub mod config;
pub mod messages;
pub mod orchestrator;
pub(crate) mod scene;
/// HTTP surface.
pub mod server;
pub(crate) mod snippet;

pub use crate::foundation::error::{MarkError, MarkResult};
pub use crate::foundation::hash::{pick_index, seed_hash};
pub use crate::foundation::rng::{SceneRng, SequenceRng, ThreadSceneRng};

pub use crate::artwork::raster::{parse_svg, render_png};
pub use crate::artwork::svg::{ArtworkStyle, HEIGHT, PALETTE, Pattern, WIDTH, mark_svg, render_svg};
pub use crate::config::{ConfigSource, SnippetConfig};
pub use crate::messages::{MESSAGE_OPTIONS, MessageOption, resolve_message, share_url};
pub use crate::orchestrator::{Orchestrator, ResolvedScene, SceneRequest, select_scene};
pub use crate::scene::kind::{ACCENT_COLOR, DEFAULT_TEXT, SceneKind, SceneProps};
pub use crate::scene::registry::{SceneEntry, SceneRegistry, register_default_scenes};
pub use crate::scene::render::{LOADING_LETTERS, escape_html, loading_scene};
pub use crate::server::{AppState, router, serve};
pub use crate::snippet::fallback::{SNIPPETS, neon_default, pick_snippet, scene_default};
pub use crate::snippet::generator::{ChatCompletionsGenerator, SnippetGenerator};
pub use crate::snippet::prompt::strip_code_fences;
pub use crate::snippet::service::{SnippetResponse, SnippetService};
