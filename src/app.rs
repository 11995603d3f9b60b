use iocraft::prelude::*;

use crate::color::ColorDepth;
use crate::config::keybindings::MergedBindings;
use crate::config::types::AppConfig;
use crate::theme::ResolvedTheme;
use crate::types::Issue;
use crate::views::issues::IssueTableView;

// ---------------------------------------------------------------------------
// Root App component
// ---------------------------------------------------------------------------

#[derive(Default, Props)]
pub struct AppProps<'a> {
    pub config: Option<&'a AppConfig>,
    pub issues: Option<&'a [Issue]>,
    pub theme: Option<&'a ResolvedTheme>,
    pub keybindings: Option<&'a MergedBindings>,
    pub color_depth: ColorDepth,
}

#[component]
pub fn App<'a>(props: &AppProps<'a>, mut hooks: Hooks) -> impl Into<AnyElement<'a>> {
    let (width, height) = hooks.use_terminal_size();
    let mut system = hooks.use_context_mut::<SystemContext>();
    let should_exit = hooks.use_state(|| false);

    // Exit handling.
    if should_exit.get() {
        system.exit();
    }

    let layout = props.config.map(|c| &c.layout);

    element! {
        View(width: u32::from(width), height: u32::from(height), flex_direction: FlexDirection::Column) {
            IssueTableView(
                issues: props.issues,
                theme: props.theme,
                keybindings: props.keybindings,
                layout,
                color_depth: props.color_depth,
                width,
                height,
                should_exit,
            )
        }
    }
}
