//! Editor session
//!
//! The single application-state struct behind the editor: profile, link
//! sequence, appearance, and the drag gesture in progress. All mutation is
//! routed through named operations so the storage mirror stays enforceable
//! in one place: every operation that changes state saves before returning.
//!
//! Stored data is read exactly once, in [`Session::open`], before the
//! session exists; saves only happen through the named operations of a
//! constructed session, so defaults can never overwrite real stored data.

use linkdeck_core::{DragController, DragState, Link, LinkId, LinkList, Profile};
use linkdeck_renderer::{project, project_preview, RenderModel};
use linkdeck_theme::{
    catalog, Animation, AnimationError, Appearance, Background, BackgroundKind, BorderRadius,
    CustomAnimation, FontFamily, Gradient, Layout, Shadow, DEFAULT_SOLID_COLOR,
};

use crate::config::Config;
use crate::store::Store;

/// Editable page state with storage mirroring
#[derive(Debug)]
pub struct Session {
    profile: Profile,
    links: LinkList,
    appearance: Appearance,
    /// Last solid color, kept while a gradient is active so switching the
    /// background kind back restores it
    remembered_color: Option<String>,
    /// Last gradient, kept while a solid color is active
    remembered_gradient: Option<Gradient>,
    drag: DragController,
    store: Option<Store>,
}

impl Session {
    /// In-memory session with a fresh page and no storage mirror
    pub fn new() -> Self {
        Self::from_parts(
            Profile::default(),
            LinkList::starter(),
            catalog::default_theme().appearance.clone(),
            None,
        )
    }

    /// Load a session from storage, falling back field-by-field to defaults
    ///
    /// A missing or malformed stored appearance falls back to the configured
    /// default theme (or the catalog's first entry when that name is
    /// unknown). Stored links are de-duplicated by id; an invalid stored
    /// custom animation is replaced by the default seed.
    pub fn open(store: Store, config: &Config) -> Self {
        let stored = store.load();

        let profile = stored.profile.unwrap_or_default();
        let links = match stored.links {
            Some(links) => LinkList::from_links(links),
            None => LinkList::starter(),
        };
        let mut appearance = stored.appearance.unwrap_or_else(|| {
            catalog::resolve_theme(&config.general.default_theme)
                .appearance
                .clone()
        });

        if let Some(Animation::Custom(custom)) = &appearance.animation {
            if let Err(e) = custom.validate() {
                log::warn!("Stored custom animation is invalid ({}), resetting", e);
                appearance.animation = Some(Animation::Custom(CustomAnimation::default()));
            }
        }

        Self::from_parts(profile, links, appearance, Some(store))
    }

    fn from_parts(
        profile: Profile,
        links: LinkList,
        appearance: Appearance,
        store: Option<Store>,
    ) -> Self {
        Self {
            profile,
            links,
            appearance,
            remembered_color: None,
            remembered_gradient: None,
            drag: DragController::new(),
            store,
        }
    }

    // === Accessors ===

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn links(&self) -> &LinkList {
        &self.links
    }

    pub fn appearance(&self) -> &Appearance {
        &self.appearance
    }

    /// The custom animation parameters, when in custom mode
    pub fn custom_animation(&self) -> Option<&CustomAnimation> {
        match &self.appearance.animation {
            Some(Animation::Custom(custom)) => Some(custom),
            _ => None,
        }
    }

    // === Derived classification ===

    /// Index of the catalog preset this appearance is structurally equal to
    pub fn preset_index(&self) -> Option<usize> {
        catalog::match_preset(&self.appearance)
    }

    /// Whether the appearance is a custom mix rather than a known preset
    pub fn is_custom_appearance(&self) -> bool {
        self.preset_index().is_none()
    }

    /// Whether the animation editor is in custom mode; independent of
    /// [`Session::is_custom_appearance`]
    pub fn is_custom_animation(&self) -> bool {
        self.appearance.has_custom_animation()
    }

    // === Projection ===

    /// Render the public page (active links only)
    pub fn project(&self) -> RenderModel {
        project(&self.profile, &self.links, &self.appearance)
    }

    /// Render the editor preview (inactive links dimmed, not hidden)
    pub fn project_preview(&self) -> RenderModel {
        project_preview(&self.profile, &self.links, &self.appearance)
    }

    // === Profile operations ===

    pub fn set_profile_name(&mut self, name: impl Into<String>) {
        self.profile.set_name(name);
        self.persist();
    }

    pub fn set_profile_bio(&mut self, bio: impl Into<String>) {
        self.profile.set_bio(bio);
        self.persist();
    }

    pub fn set_avatar_url(&mut self, url: impl Into<String>) {
        self.profile.set_avatar_url(url);
        self.persist();
    }

    // === Link operations ===

    /// Prepend a new empty link and return its id
    pub fn add_link(&mut self) -> LinkId {
        let id = self.links.add();
        self.persist();
        id
    }

    /// Remove a link by id; unknown ids are a no-op
    pub fn remove_link(&mut self, id: LinkId) -> Option<Link> {
        let removed = self.links.remove(id);
        if removed.is_some() {
            self.persist();
        }
        removed
    }

    /// Reorder directly by indices (out-of-bounds is a checked no-op)
    pub fn move_link(&mut self, from: usize, to: usize) -> bool {
        let moved = self.links.move_link(from, to);
        if moved {
            self.persist();
        }
        moved
    }

    pub fn set_link_title(&mut self, id: LinkId, title: impl Into<String>) -> bool {
        let changed = self.links.set_title(id, title);
        if changed {
            self.persist();
        }
        changed
    }

    pub fn set_link_url(&mut self, id: LinkId, url: impl Into<String>) -> bool {
        let changed = self.links.set_url(id, url);
        if changed {
            self.persist();
        }
        changed
    }

    pub fn set_link_active(&mut self, id: LinkId, active: bool) -> bool {
        let changed = self.links.set_active(id, active);
        if changed {
            self.persist();
        }
        changed
    }

    // === Drag reordering ===

    pub fn drag_state(&self) -> DragState {
        self.drag.state()
    }

    /// Pick up the link at `source`
    pub fn begin_drag(&mut self, source: usize) {
        self.drag.begin(source);
    }

    /// Update the hovered drop slot; safe to call at frame frequency
    pub fn hover_drag(&mut self, target: usize) {
        self.drag.hover(target);
    }

    /// The pointer left all drop slots
    pub fn leave_drag(&mut self) {
        self.drag.leave();
    }

    /// Abandon the gesture without reordering
    pub fn cancel_drag(&mut self) {
        self.drag.cancel();
    }

    /// Drop the dragged link, committing at most one reorder
    pub fn drop_drag(&mut self) -> bool {
        match self.drag.commit() {
            Some((from, to)) => self.move_link(from, to),
            None => false,
        }
    }

    // === Appearance operations ===

    /// Replace the whole appearance with a catalog preset
    pub fn apply_theme(&mut self, name: &str) -> bool {
        let Some(theme) = catalog::find_theme(name) else {
            log::warn!("Ignoring unknown theme '{name}'");
            return false;
        };
        self.appearance = theme.appearance.clone();
        self.remembered_color = None;
        self.remembered_gradient = None;
        self.persist();
        true
    }

    pub fn set_font(&mut self, font: FontFamily) {
        self.appearance.font = font;
        self.persist();
    }

    /// Switch between solid and gradient backgrounds
    ///
    /// The representation being switched away from is remembered for the
    /// session, so toggling back restores it; with nothing to restore, a
    /// default is synthesized instead of failing.
    pub fn set_background_kind(&mut self, kind: BackgroundKind) {
        if self.appearance.background.kind() == kind {
            return;
        }
        self.appearance.background = match kind {
            BackgroundKind::Gradient => {
                if let Background::Color { color } = &self.appearance.background {
                    self.remembered_color = Some(color.clone());
                }
                Background::Gradient {
                    gradient: self.remembered_gradient.take().unwrap_or_default(),
                }
            }
            BackgroundKind::Color => {
                if let Background::Gradient { gradient } = &self.appearance.background {
                    self.remembered_gradient = Some(gradient.clone());
                }
                Background::Color {
                    color: self
                        .remembered_color
                        .take()
                        .unwrap_or_else(|| DEFAULT_SOLID_COLOR.to_string()),
                }
            }
        };
        self.persist();
    }

    /// Set the solid background color; ignored while a gradient is active
    pub fn set_background_color(&mut self, color: impl Into<String>) -> bool {
        match &mut self.appearance.background {
            Background::Color { color: current } => {
                *current = color.into();
                self.persist();
                true
            }
            Background::Gradient { .. } => {
                log::debug!("Ignoring solid color edit while gradient is active");
                false
            }
        }
    }

    /// Set the gradient angle in degrees; ignored while a solid color is
    /// active. Values are clamped to 0-360.
    pub fn set_gradient_angle(&mut self, angle: f32) -> bool {
        self.edit_gradient(|gradient| gradient.angle = angle.clamp(0.0, 360.0))
    }

    pub fn set_gradient_start(&mut self, color: impl Into<String>) -> bool {
        let color = color.into();
        self.edit_gradient(|gradient| gradient.start = color)
    }

    pub fn set_gradient_end(&mut self, color: impl Into<String>) -> bool {
        let color = color.into();
        self.edit_gradient(|gradient| gradient.end = color)
    }

    fn edit_gradient(&mut self, edit: impl FnOnce(&mut Gradient)) -> bool {
        match &mut self.appearance.background {
            Background::Gradient { gradient } => {
                edit(gradient);
                self.persist();
                true
            }
            Background::Color { .. } => {
                log::debug!("Ignoring gradient edit while solid color is active");
                false
            }
        }
    }

    pub fn set_link_background(&mut self, color: impl Into<String>) {
        self.appearance.link_style.background = color.into();
        self.persist();
    }

    pub fn set_link_text_color(&mut self, color: impl Into<String>) {
        self.appearance.link_style.text_color = color.into();
        self.persist();
    }

    pub fn set_link_shadow(&mut self, shadow: Shadow) {
        self.appearance.link_style.shadow = shadow;
        self.persist();
    }

    pub fn set_link_border_radius(&mut self, radius: BorderRadius) {
        self.appearance.link_style.border_radius = radius;
        self.persist();
    }

    pub fn set_text_color(&mut self, color: impl Into<String>) {
        self.appearance.text_color = color.into();
        self.persist();
    }

    pub fn set_layout(&mut self, layout: Layout) {
        self.appearance.layout = Some(layout);
        self.persist();
    }

    // === Animation operations ===

    /// Turn animation off entirely
    pub fn clear_animation(&mut self) {
        self.appearance.animation = None;
        self.persist();
    }

    /// Select a named preset animation token
    pub fn set_animation_preset(&mut self, token: impl Into<String>) {
        self.appearance.animation = Some(Animation::preset(token));
        self.persist();
    }

    /// Switch the animation editor to custom mode
    ///
    /// Seeds the default parameter set when coming from a preset or from no
    /// animation; existing custom parameters are kept.
    pub fn enable_custom_animation(&mut self) {
        if self.is_custom_animation() {
            return;
        }
        self.appearance.animation = Some(Animation::Custom(CustomAnimation::default()));
        self.persist();
    }

    /// Replace the custom animation parameters
    ///
    /// Rejects invalid parameter sets without touching the current state.
    pub fn set_custom_animation(&mut self, custom: CustomAnimation) -> Result<(), AnimationError> {
        custom.validate()?;
        self.appearance.animation = Some(Animation::Custom(custom));
        self.persist();
        Ok(())
    }

    // === Storage mirror ===

    /// Mirror the current state to storage, if a store is attached
    ///
    /// Write failures are logged and otherwise ignored; the in-memory state
    /// stays authoritative and editing continues.
    fn persist(&self) {
        let Some(store) = &self.store else {
            return;
        };
        if let Err(e) = store.save(&self.profile, self.links.links(), &self.appearance) {
            log::error!("Failed to save page, continuing in memory: {}", e);
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
