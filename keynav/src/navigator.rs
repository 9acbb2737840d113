use crate::event::{Key, KeyPress};
use crate::handle::FocusHandle;
use crate::registry::Registry;

/// Which arrow-key pair drives next/previous at the current level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    #[default]
    Vertical,
    Horizontal,
}

/// Roving-focus navigator for one composite widget.
///
/// Owns the widget's [`Registry`]; orientation and menu behavior are
/// fixed at construction. The navigator tracks no "current focus" of its
/// own: the caller supplies the focused label with every event, and the
/// only side effects are `focus()`, `activate()` and submenu visibility
/// writes on the registered handles.
#[derive(Debug)]
pub struct Navigator<H> {
    orientation: Orientation,
    menu: bool,
    registry: Registry<H>,
    dismiss_scope: Option<H>,
}

impl<H: FocusHandle> Navigator<H> {
    /// Plain roving navigator (tab lists, accordions).
    pub fn roving(orientation: Orientation) -> Self {
        Self {
            orientation,
            menu: false,
            registry: Registry::new(),
            dismiss_scope: None,
        }
    }

    /// Menu navigator: roving plus type-ahead and submenu handling.
    pub fn menu(orientation: Orientation) -> Self {
        Self {
            menu: true,
            ..Self::roving(orientation)
        }
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn is_menu(&self) -> bool {
        self.menu
    }

    pub fn registry(&self) -> &Registry<H> {
        &self.registry
    }

    /// Register `handle` under `label` (element mounted).
    pub fn subscribe(&mut self, label: impl Into<String>, handle: H) {
        self.registry.subscribe(label, handle);
    }

    /// Drop the entry for `label` (element unmounted).
    pub fn unsubscribe(&mut self, label: &str) {
        self.registry.unsubscribe(label);
    }

    /// Process a key press on the element registered as `current`.
    ///
    /// Recognized keys are marked consumed on `press`; unrecognized keys
    /// are left untouched. An unregistered `current` degrades to
    /// start-of-list semantics (treated as sitting before the first
    /// item). Nothing here fails; a key with no effect is a no-op.
    pub fn on_key(&self, press: &mut KeyPress, current: &str) {
        if self.menu {
            self.menu_key(press, current);
        } else {
            if self.recognizes(press.key) {
                press.consume();
            }
            self.same_level(press.key, current);
        }
    }

    /// Record the blurred item's enclosing submenu container as this
    /// navigator's dismiss scope. Repeated blurs replace the scope; they
    /// never stack.
    pub fn on_blur(&mut self, current: &str) {
        let scope = self
            .registry
            .get(current)
            .and_then(|handle| handle.parent())
            .and_then(|item| item.parent());
        if let Some(scope) = scope {
            log::trace!("[nav] watching submenu container for outside clicks");
            self.dismiss_scope = Some(scope);
        }
    }

    /// Forwarded document-level click. Closes the recorded dismiss scope
    /// when the click lands outside it while it is open. The scope stays
    /// recorded for later clicks.
    pub fn on_dismiss_click(&self, target: &H) {
        if let Some(scope) = &self.dismiss_scope {
            if !scope.contains(target) && scope.is_open() {
                log::debug!("[nav] outside click, closing submenu");
                scope.set_open(false);
            }
        }
    }

    /// Menu-mode key handling: an ordered pipeline of independent
    /// guard/action branches. Branches do not exclude each other; a
    /// single press may take a submenu action and still fall through to
    /// same-level roving below.
    fn menu_key(&self, press: &mut KeyPress, current: &str) {
        let item = self.registry.get(current).cloned();
        let submenu = item.as_ref().and_then(|item| item.next_sibling());

        // Type-ahead on a printable letter/digit.
        if let Some(c) = press.key.typeahead_char() {
            self.type_ahead(c, current);
        }

        // Space activates an item that has no submenu.
        if press.key == Key::Char(' ') && submenu.is_none() {
            if let Some(item) = &item {
                item.activate();
            }
        }

        // Enter/Space on a submenu trigger opens it and enters it.
        if matches!(press.key, Key::Enter | Key::Char(' ')) {
            if let Some(submenu) = &submenu {
                press.consume();
                submenu.set_open(true);
                if let Some(link) = first_link(submenu) {
                    link.focus();
                }
            }
        }

        // Navigation keys are always claimed in menu mode.
        if matches!(
            press.key,
            Key::Up | Key::Down | Key::Left | Key::Right | Key::Home | Key::End | Key::Escape
        ) {
            press.consume();
        }

        // Escape closes the enclosing submenu and returns to its trigger.
        if press.key == Key::Escape {
            let container = item
                .as_ref()
                .and_then(|item| item.parent())
                .and_then(|entry| entry.parent());
            if let Some(container) = container {
                if container.is_open() {
                    container.set_open(false);
                }
                if let Some(trigger) = container.parent().and_then(|owner| owner.first_child()) {
                    trigger.focus();
                }
            }
        }

        // A horizontal top-level menu descends into its dropdown with
        // the vertical pair: Down lands on the first link, Up on the last.
        if self.orientation == Orientation::Horizontal
            && matches!(press.key, Key::Up | Key::Down)
        {
            if let Some(submenu) = &submenu {
                submenu.set_open(true);
                let link = if press.key == Key::Down {
                    first_link(submenu)
                } else {
                    last_link(submenu)
                };
                if let Some(link) = link {
                    link.focus();
                }
            }
        }

        // A vertical menu descends rightward into a nested submenu.
        // TODO: Left should ascend back to the parent level.
        if self.orientation == Orientation::Vertical && press.key == Key::Right {
            if let Some(submenu) = &submenu {
                submenu.set_open(true);
                if let Some(link) = first_link(submenu) {
                    link.focus();
                }
            }
        }

        // Same-level roving runs last, after any submenu branch.
        self.same_level(press.key, current);
    }

    /// Jump to the next registered item whose text starts with `c`,
    /// searching forward from the current index and wrapping to the
    /// first match anywhere when the forward search comes up empty.
    fn type_ahead(&self, c: char, current: &str) {
        let floor = match self.registry.index_of(current) {
            Some(idx) => idx as isize,
            None => -1,
        };
        let initials: Vec<Option<char>> = self
            .registry
            .iter()
            .map(|(_, handle)| {
                handle
                    .text()
                    .and_then(|text| text.chars().next())
                    .map(|first| first.to_ascii_lowercase())
            })
            .collect();

        let matches = |idx: usize| initials[idx] == Some(c);
        let target = (0..initials.len())
            .find(|&idx| idx as isize > floor && matches(idx))
            .or_else(|| (0..initials.len()).find(|&idx| matches(idx)));

        if let Some(idx) = target {
            log::trace!("[nav] type-ahead '{c}' -> index {idx}");
            self.focus_index(idx);
        }
    }

    /// Home/End plus the orientation arrow pair among registered items.
    fn same_level(&self, key: Key, current: &str) {
        if self.registry.is_empty() {
            return;
        }
        let idx = self.registry.index_of(current);
        let last = self.registry.len() - 1;

        match key {
            Key::Home => self.focus_index(0),
            Key::End => self.focus_index(last),
            Key::Up if self.orientation == Orientation::Vertical => {
                self.focus_index(prev_index(idx, last));
            }
            Key::Down if self.orientation == Orientation::Vertical => {
                self.focus_index(next_index(idx, last));
            }
            Key::Left if self.orientation == Orientation::Horizontal => {
                self.focus_index(prev_index(idx, last));
            }
            Key::Right if self.orientation == Orientation::Horizontal => {
                self.focus_index(next_index(idx, last));
            }
            _ => {}
        }
    }

    /// Keys a plain roving navigator claims.
    fn recognizes(&self, key: Key) -> bool {
        match key {
            Key::Home | Key::End => true,
            Key::Up | Key::Down => self.orientation == Orientation::Vertical,
            Key::Left | Key::Right => self.orientation == Orientation::Horizontal,
            _ => false,
        }
    }

    fn focus_index(&self, index: usize) {
        if let Some(handle) = self.registry.handle_at(index) {
            log::debug!(
                "[nav] focus -> {}",
                self.registry.label_at(index).unwrap_or_default()
            );
            handle.focus();
        }
    }
}

/// Wrapping previous index; an unregistered current counts as sitting
/// before the first item.
fn prev_index(current: Option<usize>, last: usize) -> usize {
    match current {
        Some(idx) if idx > 0 => idx - 1,
        _ => last,
    }
}

/// Wrapping next index, with the same degradation for an unregistered
/// current.
fn next_index(current: Option<usize>, last: usize) -> usize {
    match current {
        Some(idx) if idx < last => idx + 1,
        _ => 0,
    }
}

/// First focusable link inside a submenu: the first child of its first
/// entry.
fn first_link<H: FocusHandle>(submenu: &H) -> Option<H> {
    submenu.first_child().and_then(|entry| entry.first_child())
}

/// Last focusable link inside a submenu.
fn last_link<H: FocusHandle>(submenu: &H) -> Option<H> {
    submenu.last_child().and_then(|entry| entry.first_child())
}
