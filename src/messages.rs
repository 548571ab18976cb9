use crate::ui::{
    CORAL, DEEP_PURPLE, ELECTRIC_PURPLE, ELECTRIC_YELLOW, NEON_CYAN, SOFT_PINK, SOFT_WHITE,
    SUCCESS_GREEN,
};
use rand::prelude::*;
use ratatui::style::Color;
use std::sync::LazyLock;

#[derive(Clone)]
pub struct ColoredMessage {
    pub text: String,
    pub color: Color,
}

static WAITING_MESSAGES: LazyLock<Vec<ColoredMessage>> = LazyLock::new(|| {
    vec![
        ColoredMessage {
            text: "🔮 Consulting the campaign muses...".to_string(),
            color: DEEP_PURPLE,
        },
        ColoredMessage {
            text: "✉️ Folding pixels into the perfect envelope...".to_string(),
            color: NEON_CYAN,
        },
        ColoredMessage {
            text: "🎯 Triangulating your target audience...".to_string(),
            color: SUCCESS_GREEN,
        },
        ColoredMessage {
            text: "🚀 Launching subject lines into orbit...".to_string(),
            color: CORAL,
        },
        ColoredMessage {
            text: "🎨 Mixing the brand palette for maximum pop...".to_string(),
            color: ELECTRIC_PURPLE,
        },
        ColoredMessage {
            text: "📈 Charting a course past the spam folder...".to_string(),
            color: ELECTRIC_YELLOW,
        },
        ColoredMessage {
            text: "🧲 Magnetizing your call to action...".to_string(),
            color: SOFT_PINK,
        },
        ColoredMessage {
            text: "💌 Whispering sweet nothings to the inbox...".to_string(),
            color: NEON_CYAN,
        },
        ColoredMessage {
            text: "🌟 Polishing the preview text to a shine...".to_string(),
            color: SOFT_WHITE,
        },
        ColoredMessage {
            text: "🖼️ Commissioning a hero image from the art department...".to_string(),
            color: DEEP_PURPLE,
        },
        ColoredMessage {
            text: "🧪 Distilling the essence of your brand voice...".to_string(),
            color: ELECTRIC_YELLOW,
        },
        ColoredMessage {
            text: "🔔 Tuning the open-rate chimes...".to_string(),
            color: SUCCESS_GREEN,
        },
    ]
});

pub fn get_waiting_message() -> ColoredMessage {
    let mut rng = rand::rng();
    WAITING_MESSAGES
        .choose(&mut rng)
        .cloned()
        .unwrap_or_else(|| ColoredMessage {
            text: "Drafting your campaign...".to_string(),
            color: ELECTRIC_YELLOW,
        })
}
