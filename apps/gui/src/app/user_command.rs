use egui::{Key, KeyboardShortcut, Modifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserCommand {
    QuitApplication,
    ToggleFullScreen,
    ToggleSettings,
    CloseSettings,
}

const SHORTCUTS: [(KeyboardShortcut, UserCommand); 4] = [
    (
        KeyboardShortcut::new(Modifiers::COMMAND, Key::Q),
        UserCommand::QuitApplication,
    ),
    (
        KeyboardShortcut::new(Modifiers::NONE, Key::F11),
        UserCommand::ToggleFullScreen,
    ),
    (
        KeyboardShortcut::new(Modifiers::COMMAND, Key::Comma),
        UserCommand::ToggleSettings,
    ),
    (
        KeyboardShortcut::new(Modifiers::NONE, Key::Escape),
        UserCommand::CloseSettings,
    ),
];

/// Consumes every bound shortcut pressed this frame.
pub fn take_user_commands(ctx: &egui::Context) -> Vec<UserCommand> {
    ctx.input_mut(|input| {
        SHORTCUTS
            .iter()
            .filter(|(shortcut, _)| input.consume_shortcut(shortcut))
            .map(|(_, cmd)| *cmd)
            .collect()
    })
}
