use crate::backend::RemoteTodo;
use crate::todo::TodoRecord;

/// The focusable controls, in Tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    TaskText,
    TaskDate,
    Search,
    DateFrom,
    DateTo,
    List,
}

impl Focus {
    const ORDER: [Focus; 6] = [
        Focus::TaskText,
        Focus::TaskDate,
        Focus::Search,
        Focus::DateFrom,
        Focus::DateTo,
        Focus::List,
    ];

    fn index(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Focus {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    pub fn previous(self) -> Focus {
        Self::ORDER[(self.index() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }

    pub fn is_text_input(self) -> bool {
        !matches!(self, Focus::List)
    }

    pub fn title(self) -> &'static str {
        match self {
            Focus::TaskText => "New task",
            Focus::TaskDate => "Date",
            Focus::Search => "Search",
            Focus::DateFrom => "From",
            Focus::DateTo => "To",
            Focus::List => "Tasks",
        }
    }
}

#[derive(Debug, Clone)]
pub enum Action {
    // Startup
    InitialLoad,
    TodosLoaded(Vec<TodoRecord>),
    LoadFailed(String),

    // Add form
    SetTaskText(String),
    SetTaskDate(String),
    SubmitNewTask,
    TodoCreated {
        echoed: RemoteTodo,
        created_date: String,
    },
    CreateFailed(String),

    // Delete
    RequestDelete(i64),
    ConfirmDelete,
    CancelDelete,
    TodoDeleted(i64),
    DeleteFailed {
        id: i64,
        error: String,
    },

    // Filters
    SearchChanged(String),
    DateFromChanged(String),
    DateToChanged(String),

    // Pagination
    PreviousPage,
    NextPage,

    // UI operations
    FocusNext,
    FocusPrevious,
    SelectNext,
    SelectPrevious,
    DismissError,

    // App control
    Quit,
    None,
}

impl Action {
    /// Action emitted when the text of `field` becomes `value`.
    pub fn for_field(field: Focus, value: String) -> Action {
        match field {
            Focus::TaskText => Action::SetTaskText(value),
            Focus::TaskDate => Action::SetTaskDate(value),
            Focus::Search => Action::SearchChanged(value),
            Focus::DateFrom => Action::DateFromChanged(value),
            Focus::DateTo => Action::DateToChanged(value),
            Focus::List => Action::None,
        }
    }
}
