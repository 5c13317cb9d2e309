pub mod dialogs;
pub mod input_bar_component;
pub mod status_bar;
pub mod todo_list_component;

pub use dialogs::{DeleteConfirmationDialog, ErrorBanner};
pub use input_bar_component::InputBarComponent;
pub use status_bar::StatusBar;
pub use todo_list_component::{render_rows, DisplayRow, TodoListComponent};
