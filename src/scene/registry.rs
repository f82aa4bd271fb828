use crate::{
    foundation::error::{MarkError, MarkResult},
    foundation::rng::SceneRng,
    scene::kind::SceneKind,
};

/// Static description of one renderable scene.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SceneEntry {
    /// Unique key within a registry.
    pub id: String,
    /// Human-readable label.
    pub name: String,
    /// Relative selection weight (missing or invalid weights count as 1).
    #[serde(default = "default_weight")]
    pub weight: f64,
    /// Whether rendering depends on the external content service.
    #[serde(default)]
    pub requires_api: bool,
    /// Renderer for this entry.
    pub kind: SceneKind,
}

fn default_weight() -> f64 {
    1.0
}

impl SceneEntry {
    /// Entry with weight 1 and no external dependency.
    pub fn new(id: impl Into<String>, name: impl Into<String>, kind: SceneKind) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            weight: default_weight(),
            requires_api: false,
            kind,
        }
    }

    /// Set the selection weight.
    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }

    /// Mark the entry as depending on the external content service.
    pub fn requiring_api(mut self) -> Self {
        self.requires_api = true;
        self
    }

    /// Weight used for sampling.
    pub fn effective_weight(&self) -> f64 {
        if self.weight.is_finite() && self.weight > 0.0 {
            self.weight
        } else {
            1.0
        }
    }
}

/// Insertion-ordered collection of [`SceneEntry`] values.
///
/// Built once at startup and then shared read-only; there is no removal or mutation API.
#[derive(Clone, Debug, Default)]
pub struct SceneRegistry {
    scenes: Vec<SceneEntry>,
}

impl SceneRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry populated with the site's six scenes.
    pub fn with_default_scenes() -> Self {
        let mut reg = Self::new();
        register_default_scenes(&mut reg);
        reg
    }

    /// Add `entry` unless an entry with the same id already exists (first registration wins).
    pub fn register(&mut self, entry: SceneEntry) {
        if self.get(&entry.id).is_some() {
            tracing::debug!(id = %entry.id, "scene already registered");
            return;
        }
        self.scenes.push(entry);
    }

    /// Exact-match lookup by id.
    pub fn get(&self, id: &str) -> Option<&SceneEntry> {
        self.scenes.iter().find(|s| s.id == id)
    }

    /// All entries in registration order.
    pub fn get_all(&self) -> &[SceneEntry] {
        &self.scenes
    }

    /// Number of registered entries.
    pub fn len(&self) -> usize {
        self.scenes.len()
    }

    /// Return `true` when nothing has been registered.
    pub fn is_empty(&self) -> bool {
        self.scenes.is_empty()
    }

    /// Weighted random selection.
    ///
    /// Each eligible entry is chosen with probability `weight / total`. Entries are walked in
    /// registration order, subtracting weights from a uniform draw in `[0, total)`; the first entry
    /// that brings the remainder to `<= 0` wins.
    pub fn get_random<R: SceneRng + ?Sized>(
        &self,
        exclude_api_dependent: bool,
        rng: &mut R,
    ) -> MarkResult<&SceneEntry> {
        let eligible = || {
            self.scenes
                .iter()
                .filter(move |s| !(exclude_api_dependent && s.requires_api))
        };

        let first = eligible().next().ok_or(MarkError::NoScenesAvailable)?;
        let mut total: f64 = eligible().map(SceneEntry::effective_weight).sum();

        // Huge finite weights can sum to infinity; rescale by the largest weight.
        let mut scale = 1.0;
        if !total.is_finite() {
            scale = eligible().map(SceneEntry::effective_weight).fold(0.0, f64::max);
            total = eligible().map(|s| s.effective_weight() / scale).sum();
        }

        let mut r = rng.next_f64() * total;
        for scene in eligible() {
            r -= scene.effective_weight() / scale;
            if r <= 0.0 {
                return Ok(scene);
            }
        }

        // Only reachable through floating-point rounding.
        Ok(first)
    }
}

/// Register the site's scenes. The AI scene carries weight 10 against 1 for each of the others.
pub fn register_default_scenes(reg: &mut SceneRegistry) {
    reg.register(
        SceneEntry::new("ai-markup", "AI Generated", SceneKind::AiMarkup)
            .with_weight(10.0)
            .requiring_api(),
    );
    reg.register(SceneEntry::new("marquee", "Marquee", SceneKind::Marquee));
    reg.register(SceneEntry::new("radar", "Radar Ping", SceneKind::RadarPing));
    reg.register(SceneEntry::new("glitch", "Glitch", SceneKind::Glitch));
    reg.register(SceneEntry::new("emoji-rain", "Emoji Rain", SceneKind::EmojiRain));
    reg.register(SceneEntry::new("spotlight", "Spotlight", SceneKind::Spotlight));
}

#[cfg(test)]
#[path = "../../tests/unit/scene/registry.rs"]
mod tests;
