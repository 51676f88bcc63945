// SPDX-License-Identifier: MPL-2.0
//! Settings menu sub-component.
//!
//! A gear button opens the main page, which leads to the speed and quality
//! submenus. Picking an entry or clicking outside closes the whole menu.

/// Submenus reachable from the main page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submenu {
    Speed,
    Quality,
}

/// Page currently shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Closed,
    Main,
    Sub(Submenu),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct State {
    page: Page,
}

/// Messages for the settings menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Gear button pressed.
    Toggle,
    Open(Submenu),
    /// Back from a submenu to the main page.
    Back,
    ClickOutside,
    /// An entry was picked in a submenu.
    Picked,
}

/// Effects produced by the settings menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Opened,
    Closed,
}

impl State {
    pub fn handle(&mut self, msg: Message) -> Effect {
        match (msg, self.page) {
            (Message::Toggle, Page::Closed) => {
                self.page = Page::Main;
                Effect::Opened
            }
            (Message::Toggle | Message::ClickOutside | Message::Picked, Page::Main | Page::Sub(_)) => {
                self.page = Page::Closed;
                Effect::Closed
            }
            (Message::Open(submenu), Page::Main | Page::Sub(_)) => {
                self.page = Page::Sub(submenu);
                Effect::None
            }
            (Message::Back, Page::Sub(_)) => {
                self.page = Page::Main;
                Effect::None
            }
            _ => Effect::None,
        }
    }

    #[must_use]
    pub fn page(&self) -> Page {
        self.page
    }

    /// Returns true if the main page or a submenu is shown.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.page != Page::Closed
    }
}
