//! Inline style configuration. Every interactive element declares all of its
//! variants up front; components pick one from the current interaction state.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Interaction {
    #[default]
    Idle,
    Hovered,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StyleVariants {
    pub base: &'static str,
    pub hover: &'static str,
}

impl StyleVariants {
    pub const fn select(&self, interaction: Interaction) -> &'static str {
        match interaction {
            Interaction::Idle => self.base,
            Interaction::Hovered => self.hover,
        }
    }
}

macro_rules! enter_button_layout {
    () => {
        "padding: 12px 24px; font-size: 1.2em; font-weight: bold; background-color: transparent; \
         border-radius: 5px; cursor: pointer; transition: all 0.3s ease; "
    };
}

pub const LANDING_CONTAINER: &str = "display: flex; flex-direction: column; align-items: center; \
    justify-content: center; height: 100vh; text-align: center; \
    background: linear-gradient(135deg, #3b005d, #001f3f); color: #ffffff; \
    font-family: \"Comic Sans MS\", cursive, sans-serif;";

pub const LANDING_TITLE: &str = "font-size: 3em; margin-bottom: 20px; color: #ff71ce; \
    text-shadow: 0 0 10px #ff71ce, 0 0 20px #ff71ce, 0 0 30px #ff71ce, 0 0 40px #ff71ce, 0 0 50px #ff71ce;";

pub const ENTER_BUTTON: StyleVariants = StyleVariants {
    base: concat!(
        enter_button_layout!(),
        "color: #00ffff; border: 2px solid #00ffff; \
         text-shadow: 0 0 5px #00ffff, 0 0 10px #00ffff, 0 0 15px #00ffff;"
    ),
    hover: concat!(
        enter_button_layout!(),
        "color: #ff00ff; border: 2px solid #ff00ff; \
         text-shadow: 0 0 5px #ff00ff, 0 0 10px #ff00ff, 0 0 15px #ff00ff;"
    ),
};
