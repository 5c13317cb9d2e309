use crate::constants::{ERROR_ADD_FAILED, ERROR_DELETE_FAILED, ERROR_FETCH_FAILED, ERROR_INVALID_TASK_DATE};
use crate::filter::{compute_view, total_pages, View, ViewState};
use crate::notifier::ErrorNotifier;
use crate::store::TodoStore;
use crate::todo::{is_remote_id, TodoRecord};
use crate::ui::components::{
    render_rows, DeleteConfirmationDialog, DisplayRow, ErrorBanner, InputBarComponent, StatusBar,
    TodoListComponent,
};
use crate::ui::core::{
    actions::{Action, Focus},
    event_handler::EventType,
    task_manager::TaskManager,
    AppContext, Component,
};
use crate::ui::layout::LayoutManager;
use crate::utils::date::normalize_ymd;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{layout::Rect, Frame};
use std::future::Future;
use tokio::sync::mpsc;
use tokio::time::Duration;

/// Raw contents of the text controls
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputFields {
    pub task_text: String,
    pub task_date: String,
    pub search: String,
    pub date_from: String,
    pub date_to: String,
}

impl InputFields {
    pub fn value(&self, field: Focus) -> &str {
        match field {
            Focus::TaskText => &self.task_text,
            Focus::TaskDate => &self.task_date,
            Focus::Search => &self.search,
            Focus::DateFrom => &self.date_from,
            Focus::DateTo => &self.date_to,
            Focus::List => "",
        }
    }

    /// Clear the add-task form, leaving the filters alone
    pub fn reset_task_form(&mut self) {
        self.task_text.clear();
        self.task_date.clear();
    }
}

/// Application state separate from UI concerns
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub store: TodoStore,
    pub view: ViewState,
    pub inputs: InputFields,
    pub focus: Focus,
    /// Shared by every in-flight command; the first one to finish clears it
    pub loading: bool,
    pub notifier: ErrorNotifier,
    /// Todo awaiting delete confirmation
    pub pending_delete: Option<i64>,
}

pub struct AppComponent {
    // Component composition
    todo_list: TodoListComponent,
    input_bar: InputBarComponent,
    confirmation: DeleteConfirmationDialog,

    // Application state
    state: AppState,

    // Services
    context: AppContext,
    task_manager: TaskManager,
    background_action_rx: mpsc::UnboundedReceiver<Action>,
    in_flight: usize,

    should_quit: bool,
}

impl AppComponent {
    pub fn new(context: AppContext) -> Self {
        let (task_manager, background_action_rx) = TaskManager::new();
        let state = AppState {
            notifier: ErrorNotifier::new(Duration::from_secs(context.config.ui.error_display_seconds)),
            ..Default::default()
        };

        let mut app = Self {
            todo_list: TodoListComponent::new(),
            input_bar: InputBarComponent::new(),
            confirmation: DeleteConfirmationDialog::new(),
            state,
            context,
            task_manager,
            background_action_rx,
            in_flight: 0,
            should_quit: false,
        };
        app.sync_component_data();
        app
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn is_loading(&self) -> bool {
        self.state.loading
    }

    /// Network calls whose completion has not been processed yet
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    pub fn error_message(&self) -> Option<&str> {
        self.state.notifier.message()
    }

    pub fn is_confirming_delete(&self) -> bool {
        self.state.pending_delete.is_some()
    }

    /// The filtered page for the current view state
    pub fn current_view(&self) -> View<'_> {
        compute_view(self.state.store.records(), &self.state.view)
    }

    /// Rows the list shows right now
    pub fn rendered_rows(&self) -> Vec<DisplayRow> {
        render_rows(&self.current_view().page_records)
    }

    /// Handle app-level actions that require business logic
    pub fn handle_app_action(&mut self, action: Action) -> Action {
        match action {
            Action::InitialLoad => self.start_initial_load(),
            Action::TodosLoaded(records) => {
                log::info!("Load: {} todos loaded", records.len());
                self.state.store.load_all(records);
                self.state.loading = false;
            }
            Action::LoadFailed(error) => {
                log::error!("Load: failed: {}", error);
                self.state.loading = false;
                self.state.notifier.show(ERROR_FETCH_FAILED);
            }

            Action::SetTaskText(text) => self.state.inputs.task_text = text,
            Action::SetTaskDate(date) => self.state.inputs.task_date = date,
            Action::SubmitNewTask => self.submit_new_task(),
            Action::TodoCreated { echoed, created_date } => {
                let id = self.generate_local_id();
                let record = TodoRecord::new(id, echoed.todo, echoed.completed, created_date);
                log::info!(
                    "Task: created '{}' with local id {} (service echoed id {})",
                    record.text,
                    id,
                    echoed.id
                );
                self.state.store.add_front(record);
                self.state.inputs.reset_task_form();
                self.state.view.reset_page();
                self.state.loading = false;
            }
            Action::CreateFailed(error) => {
                log::error!("Task: create failed: {}", error);
                self.state.loading = false;
                self.state.notifier.show(ERROR_ADD_FAILED);
            }

            Action::RequestDelete(id) => self.request_delete(id),
            Action::CancelDelete => {
                log::debug!("Task: delete of {:?} declined", self.state.pending_delete);
                self.state.pending_delete = None;
            }
            Action::ConfirmDelete => self.confirm_delete(),
            Action::TodoDeleted(id) => {
                log::info!("Task: deleted {}", id);
                self.state.store.remove_by_id(id);
                self.state.loading = false;
            }
            Action::DeleteFailed { id, error } => {
                log::error!("Task: delete of {} failed: {}", id, error);
                self.state.loading = false;
                self.state.notifier.show(ERROR_DELETE_FAILED);
            }

            Action::SearchChanged(text) => {
                self.state.inputs.search = text.clone();
                self.state.view.set_search_text(text);
            }
            Action::DateFromChanged(text) => {
                self.state.view.set_date_from(normalize_ymd(&text));
                self.state.inputs.date_from = text;
            }
            Action::DateToChanged(text) => {
                self.state.view.set_date_to(normalize_ymd(&text));
                self.state.inputs.date_to = text;
            }

            Action::PreviousPage => {
                if self.state.view.current_page > 1 {
                    self.state.view.current_page -= 1;
                }
            }
            Action::NextPage => {
                // Bounded by the unfiltered count, so a narrow filter can page into empty pages.
                let pages = total_pages(self.state.store.len(), self.state.view.page_size);
                if self.state.view.current_page < pages {
                    self.state.view.current_page += 1;
                }
            }

            Action::FocusNext => self.state.focus = self.state.focus.next(),
            Action::FocusPrevious => self.state.focus = self.state.focus.previous(),
            Action::DismissError => self.state.notifier.dismiss(),
            Action::Quit => {
                self.should_quit = true;
                self.task_manager.cancel_all_tasks();
            }
            // Pass through other actions
            other => return other,
        }

        self.sync_component_data();
        Action::None
    }

    /// Mark the start of a network command: show loading and hide any previous error
    fn begin_network_command(&mut self) {
        self.state.loading = true;
        self.state.notifier.clear();
    }

    fn spawn<Fut>(&mut self, description: String, operation: Fut)
    where
        Fut: Future<Output = Action> + Send + 'static,
    {
        self.in_flight += 1;
        self.task_manager.spawn_operation(description, operation);
    }

    fn start_initial_load(&mut self) {
        self.begin_network_command();
        let service = self.context.service.clone();
        let limit = self.context.config.api.fetch_limit;
        log::info!("Load: fetching up to {} todos", limit);

        self.spawn(format!("Fetch {} todos", limit), async move {
            match service.fetch_all(limit).await {
                Ok(records) => Action::TodosLoaded(records),
                Err(e) => Action::LoadFailed(e.to_string()),
            }
        });
    }

    fn submit_new_task(&mut self) {
        let text = self.state.inputs.task_text.trim().to_string();
        if text.is_empty() {
            log::debug!("Task: ignoring submit with empty text");
            return;
        }

        let date_input = self.state.inputs.task_date.trim();
        let created_date = if date_input.is_empty() {
            self.context.clock.today_ymd()
        } else {
            match normalize_ymd(date_input) {
                Some(date) => date,
                None => {
                    log::warn!("Task: rejected invalid date '{}'", date_input);
                    self.state.notifier.show(ERROR_INVALID_TASK_DATE);
                    return;
                }
            }
        };

        self.begin_network_command();
        let service = self.context.service.clone();
        let user_id = self.context.config.api.user_id;
        log::info!("Task: creating '{}' dated {}", text, created_date);

        self.spawn(format!("Create task '{}'", text), async move {
            match service.create(&text, false, user_id).await {
                Ok(echoed) => Action::TodoCreated { echoed, created_date },
                Err(e) => Action::CreateFailed(e.to_string()),
            }
        });
    }

    fn request_delete(&mut self, id: i64) {
        match self.state.store.get(id) {
            Some(record) => {
                log::debug!("Task: asking to confirm delete of {} '{}'", id, record.text);
                self.state.pending_delete = Some(id);
            }
            None => log::debug!("Task: delete requested for unknown id {}", id),
        }
    }

    fn confirm_delete(&mut self) {
        let Some(id) = self.state.pending_delete.take() else {
            return;
        };
        if !self.state.store.contains(id) {
            log::debug!("Task: {} vanished before delete was confirmed", id);
            return;
        }

        self.begin_network_command();

        if is_remote_id(id) {
            let service = self.context.service.clone();
            self.spawn(format!("Delete task {}", id), async move {
                match service.delete(id).await {
                    Ok(()) => Action::TodoDeleted(id),
                    Err(e) => Action::DeleteFailed {
                        id,
                        error: e.to_string(),
                    },
                }
            });
        } else {
            log::info!("Task: deleted local-only {}", id);
            self.state.store.remove_by_id(id);
            self.state.loading = false;
        }
    }

    /// A local id not already in the store
    fn generate_local_id(&mut self) -> i64 {
        loop {
            let id = self.context.ids.next_id();
            if !self.state.store.contains(id) {
                return id;
            }
        }
    }

    /// Dispatch every completion that has already arrived. Returns how many were processed.
    pub fn process_background_actions(&mut self) -> usize {
        let mut processed = 0;
        while let Ok(action) = self.background_action_rx.try_recv() {
            self.complete(action);
            processed += 1;
        }

        self.task_manager.cleanup_finished_tasks();
        processed
    }

    /// Wait for the next completion and dispatch it. Returns false if nothing is in flight.
    pub async fn process_next_background_action(&mut self) -> bool {
        if self.in_flight == 0 {
            return false;
        }
        match self.background_action_rx.recv().await {
            Some(action) => {
                self.complete(action);
                true
            }
            None => false,
        }
    }

    /// Dispatch completions until no network call is in flight
    pub async fn run_until_idle(&mut self) {
        while self.process_next_background_action().await {}
        self.task_manager.cleanup_finished_tasks();
    }

    fn complete(&mut self, action: Action) {
        log::debug!("Background: received {:?}", action);
        self.in_flight = self.in_flight.saturating_sub(1);
        self.handle_app_action(action);
    }

    /// Periodic housekeeping: expire the banner and pick up finished network calls.
    /// Returns true if anything visible changed.
    pub fn on_tick(&mut self) -> bool {
        let expired = self.state.notifier.tick();
        let processed = self.process_background_actions();
        expired || processed > 0
    }

    /// Push current state into the child components
    fn sync_component_data(&mut self) {
        let view = compute_view(self.state.store.records(), &self.state.view);
        let rows = render_rows(&view.page_records);
        let pages = total_pages(view.total_filtered, self.state.view.page_size);
        self.todo_list
            .update_data(rows, self.state.view.current_page, pages, view.total_filtered);
        self.todo_list.focused = self.state.focus == Focus::List;

        self.input_bar
            .update_data(self.state.inputs.clone(), self.state.focus);

        // A pending delete whose record is gone has nothing left to confirm
        if let Some(id) = self.state.pending_delete {
            if !self.state.store.contains(id) {
                self.state.pending_delete = None;
            }
        }
        let target = self
            .state
            .pending_delete
            .and_then(|id| self.state.store.get(id))
            .map(|record| record.text.clone());
        self.confirmation.set_target(target);
    }

    /// Handle keyboard shortcuts that apply regardless of focus
    fn handle_global_key(&mut self, key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Tab => Some(Action::FocusNext),
            KeyCode::BackTab => Some(Action::FocusPrevious),
            KeyCode::Esc if self.state.notifier.is_visible() => Some(Action::DismissError),
            _ => None,
        }
    }

    /// Process an event through the component hierarchy
    pub fn handle_event(&mut self, event_type: EventType) -> anyhow::Result<()> {
        let action = match event_type {
            EventType::Key(key) => self.handle_key_events(key),
            EventType::Tick => {
                self.on_tick();
                Action::None
            }
            EventType::Resize(_, _) | EventType::Other => Action::None,
        };

        let action = self.update(action);
        self.handle_app_action(action);

        Ok(())
    }
}

impl Component for AppComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Action::Quit;
        }

        // The confirmation dialog is modal
        if self.confirmation.is_visible() {
            return self.confirmation.handle_key_events(key);
        }

        if let Some(action) = self.handle_global_key(key) {
            return action;
        }

        if self.state.focus == Focus::List {
            self.todo_list.handle_key_events(key)
        } else {
            self.input_bar.handle_key_events(key)
        }
    }

    fn update(&mut self, action: Action) -> Action {
        self.todo_list.update(action)
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let areas = LayoutManager::main_layout(rect);

        self.input_bar.render(f, areas.inputs);
        self.todo_list.render(f, areas.list);
        ErrorBanner::render(f, areas.banner, self.state.notifier.message());
        StatusBar::render(
            f,
            areas.status,
            self.state.loading,
            self.state.focus,
            self.state.store.len(),
        );

        if self.confirmation.is_visible() {
            self.confirmation.render(f, rect);
        }
    }
}
