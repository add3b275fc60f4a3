// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Card hand state machine.
//!
//! The [Hand] mirrors a fixed set of declarative attributes into typed
//! options and routes pointer presses to the card children of a
//! [CardHost]. All state changes are synchronous, an attribute write
//! completes its side effects and re-render before returning.
use log::{debug, error};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::attr::Attr;

/// Default tooltip for the single card control selector.
pub const DEFAULT_SINGLE_TOOLTIP: &str = "Control 1";

/// Default tooltip for the all cards control selector.
pub const DEFAULT_ALL_TOOLTIP: &str = "Control all";

/// A stable identifier a host assigns to a card child.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardId(u64);

impl CardId {
    /// Creates an id from a host assigned value.
    pub const fn new(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A pointer press forwarded to the cards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    /// Pointer position in host coordinates.
    pub pos: (f32, f32),
    /// True while the primary button is down.
    pub pressed: bool,
}

/// The origin of a pointer press inside the hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// The press originated from a card element.
    Card(CardId),
    /// The press originated from anything else inside the hand.
    Other,
}

/// Interaction target mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ControlMode {
    /// Interactions target only the clicked card.
    Single,
    /// Interactions are broadcast to every card in the hand.
    #[default]
    All,
}

impl ControlMode {
    /// The attribute value for this mode.
    pub fn as_attr(&self) -> &'static str {
        match self {
            ControlMode::Single => "single",
            ControlMode::All => "all",
        }
    }

    /// Routes an attribute value to a mode.
    ///
    /// Only the value `all` selects all mode, any other present value
    /// routes as single; an absent attribute restores the default.
    pub fn from_attr(value: Option<&str>) -> ControlMode {
        match value {
            None => ControlMode::default(),
            Some("all") => ControlMode::All,
            Some(_) => ControlMode::Single,
        }
    }
}

impl fmt::Display for ControlMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_attr())
    }
}

/// The hand typed options, mirrored from the observed attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandConfig {
    /// Tooltip for the single card control selector.
    pub control_single_tooltip: String,
    /// Tooltip for the all cards control selector.
    pub control_all_tooltip: String,
    /// Interaction target mode.
    pub control_mode: ControlMode,
    /// Cards can be temporarily revealed.
    pub peekable: bool,
    /// Cards can be persistently flipped.
    pub flippable: bool,
}

impl Default for HandConfig {
    fn default() -> Self {
        Self {
            control_single_tooltip: DEFAULT_SINGLE_TOOLTIP.to_string(),
            control_all_tooltip: DEFAULT_ALL_TOOLTIP.to_string(),
            control_mode: ControlMode::default(),
            peekable: false,
            flippable: false,
        }
    }
}

impl HandConfig {
    /// Checks if at least one interaction capability is enabled.
    ///
    /// A hand that is neither peekable nor flippable ignores every card
    /// press.
    pub fn is_interactive(&self) -> bool {
        self.peekable || self.flippable
    }
}

/// Contract an external card element exposes to the hand.
pub trait CardControl {
    /// Toggles the persistent face up or down state.
    fn flip(&mut self);

    /// Temporarily reveals the card face.
    fn peek(&mut self, event: &PointerEvent);

    /// Checks the hidden state.
    fn is_hidden(&self) -> bool;

    /// Sets the hidden state.
    fn set_hidden(&mut self, hidden: bool);

    /// Enables or disables the card own peek handling.
    fn set_peekable(&mut self, peekable: bool);

    /// Enables or disables the card own flip handling.
    fn set_flippable(&mut self, flippable: bool);
}

/// Owner of the card children a hand controls.
pub trait CardHost {
    /// The card element type.
    type Card: CardControl;

    /// Returns the ordered ids of the cards currently in the host.
    fn scan(&self) -> Vec<CardId>;

    /// Resolves an id to a card, [None] if it left the host.
    fn card_mut(&mut self, id: CardId) -> Option<&mut Self::Card>;
}

/// The card hand widget state.
///
/// Holds the raw attribute values, the mirrored [HandConfig], and the
/// collection snapshot taken at the last render. Attribute writes are the
/// sole mutation path for the options.
#[derive(Debug)]
pub struct Hand {
    config: HandConfig,
    raw: [Option<String>; Attr::ALL.len()],
    cards: Vec<CardId>,
    single_tooltip: String,
    all_tooltip: String,
}

impl Default for Hand {
    fn default() -> Self {
        Self::new()
    }
}

impl Hand {
    /// Creates a hand with default options.
    ///
    /// The `controlmode` attribute is always present after construction.
    pub fn new() -> Self {
        let config = HandConfig::default();
        let mut raw: [Option<String>; Attr::ALL.len()] = Default::default();
        raw[Attr::ControlMode as usize] = Some(config.control_mode.as_attr().to_string());

        Self {
            single_tooltip: config.control_single_tooltip.clone(),
            all_tooltip: config.control_all_tooltip.clone(),
            config,
            raw,
            cards: Vec::new(),
        }
    }

    /// The mirrored options.
    pub fn config(&self) -> &HandConfig {
        &self.config
    }

    /// The raw value of an attribute, [None] when absent.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        let attr = Attr::from_name(name)?;
        self.raw[attr as usize].as_deref()
    }

    /// The collection snapshot taken at the last render.
    pub fn cards(&self) -> &[CardId] {
        &self.cards
    }

    /// The tooltip bound to the single mode selector at the last render.
    pub fn single_tooltip(&self) -> &str {
        &self.single_tooltip
    }

    /// The tooltip bound to the all mode selector at the last render.
    pub fn all_tooltip(&self) -> &str {
        &self.all_tooltip
    }

    /// First render and configuration validation.
    pub fn mount<H: CardHost>(&mut self, host: &mut H) {
        self.render(host);

        if !self.config.is_interactive() {
            error!("Card hand needs to be either flippable or peekable");
        }
    }

    /// Writes an attribute through the mirror.
    ///
    /// Unknown names are skipped, a write with an unchanged value is a
    /// no-op. Otherwise the matching option is assigned, option side
    /// effects run against the collection of the previous render, and the
    /// hand re-renders before returning.
    pub fn set_attribute<H: CardHost>(&mut self, name: &str, value: Option<&str>, host: &mut H) {
        let Some(attr) = Attr::from_name(name) else {
            debug!("Ignoring unknown attribute {name:?}");
            return;
        };

        if self.raw[attr as usize].as_deref() == value {
            return;
        }

        let old = std::mem::replace(&mut self.raw[attr as usize], value.map(str::to_string));
        debug!("Attribute changed {attr} {old:?} -> {value:?}");

        self.assign_option(attr);
        self.apply_side_effects(attr, host);
        self.render(host);
    }

    /// Removes an attribute, equivalent to `set_attribute(name, None)`.
    pub fn remove_attribute<H: CardHost>(&mut self, name: &str, host: &mut H) {
        self.set_attribute(name, None, host);
    }

    /// Sets the control mode through its attribute.
    ///
    /// Mode selectors never write the option directly, the change always
    /// flows through the mirror so it re-renders.
    pub fn change_control_mode<H: CardHost>(&mut self, mode: ControlMode, host: &mut H) {
        self.set_attribute(Attr::ControlMode.name(), Some(mode.as_attr()), host);
    }

    /// Routes a pointer press bubbling from inside the hand.
    ///
    /// Presses that do not originate from a card are ignored entirely.
    pub fn handle_pointer<H: CardHost>(
        &mut self,
        target: ClickTarget,
        event: &PointerEvent,
        host: &mut H,
    ) {
        let ClickTarget::Card(origin) = target else {
            return;
        };

        match self.config.control_mode {
            ControlMode::All => self.handle_all_mode(origin, event, host),
            ControlMode::Single => self.handle_single_mode(origin, event, host),
        }
    }

    /// Recomputes the tooltip bindings and refreshes the card collection.
    ///
    /// Every scanned card loses its own peek and flip handling, the hand
    /// owns interaction; while the hand is peekable scanned cards start
    /// hidden.
    pub fn render<H: CardHost>(&mut self, host: &mut H) {
        self.single_tooltip = self.config.control_single_tooltip.clone();
        self.all_tooltip = self.config.control_all_tooltip.clone();

        self.cards = host.scan();
        for id in &self.cards {
            if let Some(card) = host.card_mut(*id) {
                card.set_peekable(false);
                card.set_flippable(false);

                if self.config.peekable {
                    card.set_hidden(true);
                }
            }
        }
    }

    fn assign_option(&mut self, attr: Attr) {
        let value = self.raw[attr as usize].as_deref();

        match attr {
            Attr::ControlSingleTooltip => {
                self.config.control_single_tooltip = value
                    .map(str::to_string)
                    .unwrap_or_else(|| DEFAULT_SINGLE_TOOLTIP.to_string());
            }
            Attr::ControlAllTooltip => {
                self.config.control_all_tooltip = value
                    .map(str::to_string)
                    .unwrap_or_else(|| DEFAULT_ALL_TOOLTIP.to_string());
            }
            Attr::ControlMode => self.config.control_mode = ControlMode::from_attr(value),
            Attr::Peekable => self.config.peekable = value.is_some(),
            Attr::Flippable => self.config.flippable = value.is_some(),
        }
    }

    /// Option side effects, run before the re-render so they observe the
    /// collection of the previous render.
    fn apply_side_effects<H: CardHost>(&mut self, attr: Attr, host: &mut H) {
        if attr == Attr::Peekable && self.raw[attr as usize].is_some() {
            for id in &self.cards {
                if let Some(card) = host.card_mut(*id) {
                    card.set_hidden(true);
                }
            }
        }
    }

    fn handle_single_mode<H: CardHost>(
        &mut self,
        origin: CardId,
        event: &PointerEvent,
        host: &mut H,
    ) {
        if self.config.flippable {
            if let Some(card) = host.card_mut(origin) {
                card.flip();
            }
        }

        // Peek binds to the press origin, even when the card postdates the
        // last collection scan.
        if self.config.peekable {
            if let Some(card) = host.card_mut(origin) {
                card.peek(event);
            }
        }
    }

    fn handle_all_mode<H: CardHost>(&mut self, origin: CardId, event: &PointerEvent, host: &mut H) {
        if self.config.flippable {
            // The new state for every card comes from the clicked card
            // before the press, computed once.
            let hide = host.card_mut(origin).map(|card| !card.is_hidden());

            if let Some(hide) = hide {
                for id in &self.cards {
                    if let Some(card) = host.card_mut(*id) {
                        card.set_hidden(hide);
                    }
                }
            }
        }

        if self.config.peekable {
            // TODO: broadcast peek ignores each card's own state, a group
            // peek should skip cards that are already face up.
            for id in &self.cards {
                if let Some(card) = host.card_mut(*id) {
                    card.peek(event);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    const PRESS: PointerEvent = PointerEvent {
        pos: (0.0, 0.0),
        pressed: true,
    };

    #[derive(Debug)]
    struct TestCard {
        id: CardId,
        hidden: bool,
        peekable: bool,
        flippable: bool,
        flips: usize,
        peeks: usize,
    }

    impl TestCard {
        fn new(id: u64) -> Self {
            Self {
                id: CardId::new(id),
                hidden: false,
                peekable: true,
                flippable: true,
                flips: 0,
                peeks: 0,
            }
        }
    }

    impl CardControl for TestCard {
        fn flip(&mut self) {
            self.hidden = !self.hidden;
            self.flips += 1;
        }

        fn peek(&mut self, _event: &PointerEvent) {
            self.peeks += 1;
        }

        fn is_hidden(&self) -> bool {
            self.hidden
        }

        fn set_hidden(&mut self, hidden: bool) {
            self.hidden = hidden;
        }

        fn set_peekable(&mut self, peekable: bool) {
            self.peekable = peekable;
        }

        fn set_flippable(&mut self, flippable: bool) {
            self.flippable = flippable;
        }
    }

    struct TestHost {
        cards: Vec<TestCard>,
        scans: Cell<usize>,
    }

    impl TestHost {
        fn new(n: u64) -> Self {
            Self {
                cards: (1..=n).map(TestCard::new).collect(),
                scans: Cell::new(0),
            }
        }

        fn card(&self, id: u64) -> &TestCard {
            self.cards
                .iter()
                .find(|c| c.id == CardId::new(id))
                .unwrap()
        }

        fn push_card(&mut self, id: u64) {
            self.cards.push(TestCard::new(id));
        }

        fn remove_card(&mut self, id: u64) {
            self.cards.retain(|c| c.id != CardId::new(id));
        }
    }

    impl CardHost for TestHost {
        type Card = TestCard;

        fn scan(&self) -> Vec<CardId> {
            self.scans.set(self.scans.get() + 1);
            self.cards.iter().map(|c| c.id).collect()
        }

        fn card_mut(&mut self, id: CardId) -> Option<&mut TestCard> {
            self.cards.iter_mut().find(|c| c.id == id)
        }
    }

    fn mounted(host: &mut TestHost, attrs: &[(&str, Option<&str>)]) -> Hand {
        let mut hand = Hand::new();
        for (name, value) in attrs {
            hand.set_attribute(name, *value, host);
        }
        hand.mount(host);
        hand
    }

    #[test]
    fn defaults_and_forced_controlmode() {
        let hand = Hand::new();
        assert_eq!(hand.config().control_mode, ControlMode::All);
        assert_eq!(hand.config().control_single_tooltip, DEFAULT_SINGLE_TOOLTIP);
        assert_eq!(hand.config().control_all_tooltip, DEFAULT_ALL_TOOLTIP);
        assert!(!hand.config().peekable);
        assert!(!hand.config().flippable);

        // The constructor forces the controlmode attribute present.
        assert_eq!(hand.attribute("controlmode"), Some("all"));
        assert_eq!(hand.attribute("peekable"), None);
    }

    #[test]
    fn boolean_attribute_presence() {
        let mut host = TestHost::new(1);
        let mut hand = Hand::new();

        // Empty string is presence.
        hand.set_attribute("peekable", Some(""), &mut host);
        assert!(hand.config().peekable);

        // Any value is presence, even "false".
        hand.set_attribute("flippable", Some("false"), &mut host);
        assert!(hand.config().flippable);

        // Removal is absence.
        hand.remove_attribute("peekable", &mut host);
        assert!(!hand.config().peekable);
        hand.remove_attribute("flippable", &mut host);
        assert!(!hand.config().flippable);
    }

    #[test]
    fn attribute_names_are_case_insensitive() {
        let mut host = TestHost::new(1);
        let mut hand = Hand::new();

        hand.set_attribute("CONTROLMODE", Some("single"), &mut host);
        assert_eq!(hand.config().control_mode, ControlMode::Single);

        hand.set_attribute("PeekAble", Some(""), &mut host);
        assert!(hand.config().peekable);
    }

    #[test]
    fn unknown_attributes_are_skipped() {
        let mut host = TestHost::new(2);
        let mut hand = mounted(&mut host, &[("flippable", Some(""))]);

        let scans = host.scans.get();
        let config = hand.config().clone();

        hand.set_attribute("hidden", Some(""), &mut host);
        hand.set_attribute("controlmodes", Some("single"), &mut host);

        // No option changed and no re-render happened.
        assert_eq!(hand.config(), &config);
        assert_eq!(host.scans.get(), scans);
    }

    #[test]
    fn unchanged_value_is_a_noop() {
        let mut host = TestHost::new(2);
        let mut hand = Hand::new();

        hand.set_attribute("flippable", Some(""), &mut host);
        let scans = host.scans.get();

        hand.set_attribute("flippable", Some(""), &mut host);
        hand.set_attribute("controlmode", Some("all"), &mut host);

        assert_eq!(host.scans.get(), scans);
    }

    #[test]
    fn tooltips_bind_on_render() {
        let mut host = TestHost::new(1);
        let mut hand = mounted(&mut host, &[("flippable", Some(""))]);

        hand.set_attribute("controlsingletooltip", Some("Pick one"), &mut host);
        hand.set_attribute("ControlAllTooltip", Some("Pick all"), &mut host);
        assert_eq!(hand.single_tooltip(), "Pick one");
        assert_eq!(hand.all_tooltip(), "Pick all");

        // Removal restores the defaults.
        hand.remove_attribute("controlsingletooltip", &mut host);
        assert_eq!(hand.single_tooltip(), DEFAULT_SINGLE_TOOLTIP);
    }

    #[test]
    fn control_mode_values() {
        assert_eq!(ControlMode::from_attr(Some("all")), ControlMode::All);
        assert_eq!(ControlMode::from_attr(Some("single")), ControlMode::Single);
        // Only "all" selects all mode.
        assert_eq!(ControlMode::from_attr(Some("weird")), ControlMode::Single);
        assert_eq!(ControlMode::from_attr(None), ControlMode::All);
    }

    #[test]
    fn render_strips_card_capabilities() {
        let mut host = TestHost::new(3);
        mounted(&mut host, &[("flippable", Some(""))]);

        for card in &host.cards {
            assert!(!card.peekable);
            assert!(!card.flippable);
        }
    }

    #[test]
    fn non_card_press_is_ignored() {
        let mut host = TestHost::new(3);
        let mut hand = mounted(&mut host, &[("flippable", Some("")), ("peekable", Some(""))]);

        // Peekable mount hides everything, make one visible to catch any
        // unison toggle.
        host.card_mut(CardId::new(1)).unwrap().set_hidden(false);

        hand.handle_pointer(ClickTarget::Other, &PRESS, &mut host);

        assert!(!host.card(1).hidden);
        for card in &host.cards {
            assert_eq!(card.flips, 0);
            assert_eq!(card.peeks, 0);
        }
    }

    #[test]
    fn all_mode_flips_in_unison() {
        let mut host = TestHost::new(3);
        let mut hand = mounted(&mut host, &[("flippable", Some(""))]);

        // A and B visible, C hidden.
        host.card_mut(CardId::new(3)).unwrap().set_hidden(true);

        // Clicking visible A hides all three.
        hand.handle_pointer(ClickTarget::Card(CardId::new(1)), &PRESS, &mut host);
        assert!(host.cards.iter().all(|c| c.hidden));

        // Clicking A again, now hidden, shows all three.
        hand.handle_pointer(ClickTarget::Card(CardId::new(1)), &PRESS, &mut host);
        assert!(host.cards.iter().all(|c| !c.hidden));
    }

    #[test]
    fn single_mode_flips_only_the_clicked_card() {
        let mut host = TestHost::new(3);
        let mut hand = mounted(
            &mut host,
            &[("flippable", Some("")), ("controlmode", Some("single"))],
        );

        hand.handle_pointer(ClickTarget::Card(CardId::new(2)), &PRESS, &mut host);

        assert!(!host.card(1).hidden);
        assert!(host.card(2).hidden);
        assert_eq!(host.card(2).flips, 1);
        assert!(!host.card(3).hidden);
    }

    #[test]
    fn mode_switch_flows_through_the_mirror() {
        let mut host = TestHost::new(3);
        let mut hand = mounted(&mut host, &[("flippable", Some(""))]);

        let scans = host.scans.get();
        hand.change_control_mode(ControlMode::Single, &mut host);

        // The attribute is updated and the hand re-rendered.
        assert_eq!(hand.attribute("controlmode"), Some("single"));
        assert_eq!(host.scans.get(), scans + 1);

        // Subsequent presses route per single mode rules.
        hand.handle_pointer(ClickTarget::Card(CardId::new(2)), &PRESS, &mut host);
        assert!(!host.card(1).hidden);
        assert!(host.card(2).hidden);
        assert!(!host.card(3).hidden);
    }

    #[test]
    fn peekable_hides_previous_collection_then_rescans() {
        let mut host = TestHost::new(2);
        let mut hand = mounted(&mut host, &[("flippable", Some(""))]);
        assert_eq!(hand.cards().len(), 2);

        // A card joins the host after the last render.
        host.push_card(3);

        hand.set_attribute("peekable", Some(""), &mut host);

        // The previous collection was hidden first, the re-render then
        // scanned the newcomer and hid it too.
        assert!(host.cards.iter().all(|c| c.hidden));
        assert_eq!(hand.cards().len(), 3);
    }

    #[test]
    fn peekable_removal_leaves_cards_alone() {
        let mut host = TestHost::new(2);
        let mut hand = mounted(&mut host, &[("peekable", Some(""))]);
        assert!(host.cards.iter().all(|c| c.hidden));

        host.card_mut(CardId::new(1)).unwrap().set_hidden(false);
        hand.remove_attribute("peekable", &mut host);

        // Removal has no hiding side effect.
        assert!(!host.card(1).hidden);
        assert!(host.card(2).hidden);
    }

    #[test]
    fn all_mode_operates_on_the_last_snapshot() {
        let mut host = TestHost::new(2);
        let mut hand = mounted(&mut host, &[("flippable", Some(""))]);

        host.push_card(3);

        // The newcomer is not in the snapshot yet.
        hand.handle_pointer(ClickTarget::Card(CardId::new(1)), &PRESS, &mut host);
        assert!(host.card(1).hidden);
        assert!(host.card(2).hidden);
        assert!(!host.card(3).hidden);

        // After a re-render the newcomer is included.
        hand.render(&mut host);
        hand.handle_pointer(ClickTarget::Card(CardId::new(1)), &PRESS, &mut host);
        assert!(host.cards.iter().all(|c| !c.hidden));
    }

    #[test]
    fn all_mode_peek_broadcasts_to_the_snapshot() {
        let mut host = TestHost::new(3);
        let mut hand = mounted(&mut host, &[("peekable", Some(""))]);

        hand.handle_pointer(ClickTarget::Card(CardId::new(2)), &PRESS, &mut host);

        for card in &host.cards {
            assert_eq!(card.peeks, 1);
        }
    }

    #[test]
    fn single_mode_peek_targets_the_press_origin() {
        let mut host = TestHost::new(2);
        let mut hand = mounted(
            &mut host,
            &[("peekable", Some("")), ("controlmode", Some("single"))],
        );

        // A card added after the last scan still peeks when pressed.
        host.push_card(3);
        hand.handle_pointer(ClickTarget::Card(CardId::new(3)), &PRESS, &mut host);

        assert_eq!(host.card(1).peeks, 0);
        assert_eq!(host.card(2).peeks, 0);
        assert_eq!(host.card(3).peeks, 1);
    }

    #[test]
    fn departed_cards_are_skipped() {
        let mut host = TestHost::new(2);
        let mut hand = mounted(&mut host, &[("flippable", Some(""))]);

        host.remove_card(2);

        // The stale snapshot still names the departed card, the write
        // resolves to nothing and moves on.
        hand.set_attribute("peekable", Some(""), &mut host);
        assert!(host.card(1).hidden);
        assert_eq!(hand.cards().len(), 1);

        // A press on the departed card does nothing in all mode.
        hand.handle_pointer(ClickTarget::Card(CardId::new(2)), &PRESS, &mut host);
        assert_eq!(host.card(1).flips, 0);
    }

    #[test]
    fn capabilities_are_independent() {
        let mut host = TestHost::new(2);
        let mut hand = mounted(&mut host, &[("flippable", Some("")), ("peekable", Some(""))]);

        // Mount with peekable hides everything.
        assert!(host.cards.iter().all(|c| c.hidden));

        // A single press fires both capabilities in all mode: the unison
        // flip shows every card, the broadcast peek reaches every card.
        hand.handle_pointer(ClickTarget::Card(CardId::new(1)), &PRESS, &mut host);
        assert!(host.cards.iter().all(|c| !c.hidden));
        for card in &host.cards {
            assert_eq!(card.peeks, 1);
        }
    }

    #[test]
    fn interactive_configuration() {
        assert!(!HandConfig::default().is_interactive());

        let config = HandConfig {
            flippable: true,
            ..Default::default()
        };
        assert!(config.is_interactive());

        let config = HandConfig {
            peekable: true,
            ..Default::default()
        };
        assert!(config.is_interactive());
    }
}
