mod hover;
mod sidebar;
mod view_state;

pub use hover::{
    HoverEvent, HoverState, HoverTransition, Tooltip, format_tooltip_text,
};
pub use sidebar::{SidebarAction, SidebarControl};
pub use view_state::{ChartKind, ViewState};
